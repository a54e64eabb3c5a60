//! Main TUI application state and logic

use crate::assistant::{Assistant, CommandBackend, Debouncer, SuggestionRequest, SuggestionResponse};
use crate::config::PlaygroundConfig;
use crate::language::Language;
use crate::runner;
use crate::ui::panes::{self, AssistantView};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

/// Output pane text before the first run
pub const INITIAL_OUTPUT: &str = "Click 'Run' to see the output here.";

/// Output pane text while a run is pending
pub const EXECUTING: &str = "Executing code...";

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Output,
    Assistant,
}

impl FocusedPane {
    /// Move focus to the next pane (source -> output -> assistant)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Assistant,
            FocusedPane::Assistant => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Assistant,
            FocusedPane::Output => FocusedPane::Source,
            FocusedPane::Assistant => FocusedPane::Output,
        }
    }
}

/// The main application state
pub struct App {
    config: PlaygroundConfig,

    /// Language of the program in the editor
    pub language: Language,

    /// The program being simulated
    pub source_code: String,

    /// Text of the output pane
    pub output: String,

    /// When the pending run was requested
    pending_run: Option<Instant>,

    /// `None` when no assistant command is configured
    assistant: Option<Assistant<CommandBackend>>,

    /// Latest answer of the assistant
    suggestions: Option<SuggestionResponse>,

    /// Answer of the request in flight
    suggestion_rx: Option<Receiver<Option<SuggestionResponse>>>,

    debouncer: Debouncer,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub output_scroll: usize,
    pub assistant_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app showing `source_code` as `language`
    pub fn new(language: Language, source_code: String, config: PlaygroundConfig) -> Self {
        let assistant = config.assistant_command.as_ref().map(|command| {
            Assistant::new(CommandBackend::new(command.as_str()))
                .with_min_chars(config.min_suggestion_chars)
        });
        let mut debouncer = Debouncer::new(config.suggestion_debounce);
        if assistant.is_some() {
            debouncer.touch(Instant::now());
        }

        App {
            config,
            language,
            source_code,
            output: INITIAL_OUTPUT.to_string(),
            pending_run: None,
            assistant,
            suggestions: None,
            suggestion_rx: None,
            debouncer,
            focused_pane: FocusedPane::Source,
            source_scroll: 0,
            output_scroll: 0,
            assistant_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.tick(Instant::now());

            // Use poll with timeout so pending runs and suggestions complete
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Advance timers: finish a pending run, fire debounced suggestion
    /// requests and collect finished ones.
    pub fn tick(&mut self, now: Instant) {
        if let Some(requested) = self.pending_run {
            if now.saturating_duration_since(requested) >= self.config.run_delay {
                self.complete_run();
            }
        }

        if self.debouncer.poll(now) {
            self.request_suggestions();
        }

        if let Some(rx) = &self.suggestion_rx {
            match rx.try_recv() {
                Ok(response) => {
                    self.suggestions = response;
                    self.suggestion_rx = None;
                    self.assistant_scroll = 0;
                    self.status_message = "Suggestions updated".to_string();
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    self.suggestion_rx = None;
                    self.suggestions = Some(SuggestionResponse::failure());
                }
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.pending_run.is_some()
    }

    /// Start the "building" delay; a second request restarts it
    pub fn request_run(&mut self, now: Instant) {
        self.pending_run = Some(now);
        self.output = EXECUTING.to_string();
        self.output_scroll = 0;
        self.status_message = "Running...".to_string();
    }

    fn complete_run(&mut self) {
        self.pending_run = None;
        self.output = runner::run_language(&self.source_code, self.language, &self.config.run);
        self.output_scroll = 0;
        self.status_message = format!("Ran {} program", self.language.display_name());
    }

    /// Switch to the next language and load its starter program
    pub fn next_language(&mut self, now: Instant) {
        self.language = self.language.next();
        self.source_code = self.language.starter_program().to_string();
        self.output = INITIAL_OUTPUT.to_string();
        self.pending_run = None;
        self.source_scroll = 0;
        self.output_scroll = 0;
        self.suggestions = None;
        if self.assistant.is_some() {
            self.debouncer.touch(now);
        }
        self.status_message = format!("Switched to {}", self.language.display_name());
    }

    /// Ask the assistant about the current program in the background
    fn request_suggestions(&mut self) {
        let Some(assistant) = self.assistant.clone() else {
            return;
        };
        let request = SuggestionRequest {
            code: self.source_code.clone(),
            language: self.language.tag().to_string(),
        };
        debug!(language = %request.language, "requesting suggestions");

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            // the receiver is gone when a newer request replaced this one
            let _ = tx.send(assistant.suggest(&request));
        });
        self.suggestion_rx = Some(rx);
        self.status_message = "Fetching suggestions...".to_string();
    }

    fn assistant_view(&self) -> AssistantView<'_> {
        if self.assistant.is_none() {
            AssistantView::Disabled
        } else if self.suggestion_rx.is_some() {
            AssistantView::Loading
        } else {
            match &self.suggestions {
                Some(response) => AssistantView::Ready(response),
                None => AssistantView::Idle,
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Split into 2 columns
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Left column: Source (top) | Output (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[0]);

        panes::render_source_pane(
            frame,
            left_rows[0],
            &self.source_code,
            self.language,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        panes::render_output_pane(
            frame,
            left_rows[1],
            &self.output,
            self.is_running(),
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        let mut assistant_scroll = self.assistant_scroll;
        panes::render_assistant_pane(
            frame,
            columns[1],
            self.assistant_view(),
            self.focused_pane == FocusedPane::Assistant,
            &mut assistant_scroll,
        );
        self.assistant_scroll = assistant_scroll;

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.language,
            self.is_running(),
        );
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Source => &mut self.source_scroll,
            FocusedPane::Output => &mut self.output_scroll,
            FocusedPane::Assistant => &mut self.assistant_scroll,
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::F(5) => {
                self.request_run(Instant::now());
            }
            KeyCode::Char('l') => {
                self.next_language(Instant::now());
            }
            KeyCode::Char('a') => {
                if self.assistant.is_some() {
                    self.debouncer.cancel();
                    self.request_suggestions();
                } else {
                    self.status_message = "No assistant command configured".to_string();
                }
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn app() -> App {
        App::new(
            Language::C,
            Language::C.starter_program().to_string(),
            PlaygroundConfig::default(),
        )
    }

    #[test]
    fn test_run_completes_after_delay() {
        let mut app = app();
        let start = Instant::now();
        app.request_run(start);
        assert_eq!(app.output, EXECUTING);

        app.tick(start + Duration::from_millis(100));
        assert!(app.is_running());

        app.tick(start + Duration::from_millis(1500));
        assert!(!app.is_running());
        assert!(app.output.starts_with("> gcc main.c -o main && ./main\n"));
    }

    #[test]
    fn test_next_language_loads_starter_program() {
        let mut app = app();
        app.request_run(Instant::now());
        app.next_language(Instant::now());
        assert_eq!(app.language, Language::JavaScript);
        assert_eq!(app.source_code, Language::JavaScript.starter_program());
        assert_eq!(app.output, INITIAL_OUTPUT);
        assert!(!app.is_running());
    }

    #[test]
    fn test_quit_key() {
        let mut app = app();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(app.should_quit);
    }
}
