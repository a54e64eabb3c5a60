// CodeCollab: terminal code playground with simulated execution

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use codecollab::assistant::{Assistant, CommandBackend, GenerateRequest};
use codecollab::config::{PlaygroundConfig, RunConfig};
use codecollab::language::Language;
use codecollab::runner;
use codecollab::ui::{self, App};

#[derive(Parser)]
#[command(name = "codecollab")]
#[command(about = "Terminal code playground with simulated multi-language execution")]
struct Cli {
    /// Program to load (the starter program is used when omitted)
    file: Option<PathBuf>,

    /// Language tag: javascript, python, cpp, java or c
    #[arg(short, long)]
    lang: Option<String>,

    /// Print the simulated output once and exit instead of opening the playground
    #[arg(short, long)]
    print: bool,

    /// Artificial execution delay in milliseconds
    #[arg(long, default_value = "1500")]
    delay_ms: u64,

    /// Shell command used as the AI backend (prompt on stdin, JSON on stdout)
    #[arg(long)]
    assistant_cmd: Option<String>,

    /// Generate a program from this description with the AI backend and print it
    #[arg(long, requires = "assistant_cmd")]
    generate: Option<String>,

    /// Value returned by Python `input()`; repeat to cycle through several
    #[arg(long = "input", value_name = "VALUE")]
    inputs: Vec<String>,
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

/// Language from `--lang`, else the file extension, else JavaScript
fn resolve_language(cli: &Cli) -> Result<Language, Box<dyn std::error::Error>> {
    if let Some(tag) = &cli.lang {
        return Ok(tag.parse::<Language>()?);
    }
    Ok(cli
        .file
        .as_deref()
        .and_then(Language::from_path)
        .unwrap_or(Language::JavaScript))
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    let language = resolve_language(&cli)?;

    let mut config = PlaygroundConfig {
        run_delay: Duration::from_millis(cli.delay_ms),
        assistant_command: cli.assistant_cmd.clone(),
        ..PlaygroundConfig::default()
    };
    if !cli.inputs.is_empty() {
        config.run = RunConfig {
            mocked_inputs: cli.inputs.clone(),
        };
    }

    if let (Some(description), Some(command)) = (&cli.generate, &cli.assistant_cmd) {
        let assistant = Assistant::new(CommandBackend::new(command.as_str()));
        let request = GenerateRequest {
            description: description.clone(),
            language: language.tag().to_string(),
        };
        return match assistant.generate(&request) {
            Ok(generated) => {
                println!("{}", generated.code);
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                Ok(ExitCode::FAILURE)
            }
        };
    }

    let source = match &cli.file {
        Some(path) => match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Error: could not read '{}': {}", path.display(), e);
                return Ok(ExitCode::FAILURE);
            }
        },
        None => language.starter_program().to_string(),
    };

    if cli.print {
        println!("{}", runner::run_language(&source, language, &config.run));
        return Ok(ExitCode::SUCCESS);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(language, source, config);
    let res = ui::run_with_quiet_panics(|| app.run(&mut terminal));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match res {
        Ok(Ok(())) => Ok(ExitCode::SUCCESS),
        Ok(Err(err)) => {
            eprintln!("Error: {:?}", err);
            Ok(ExitCode::FAILURE)
        }
        Err(payload) => {
            eprintln!("Error: playground crashed: {}", runner::panic_message(payload.as_ref()));
            Ok(ExitCode::FAILURE)
        }
    }
}
