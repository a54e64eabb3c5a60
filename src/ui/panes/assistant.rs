//! Assistant pane rendering
//!
//! Shows the latest [`SuggestionResponse`] in three sections: suggestions,
//! errors and best practices. Empty sections are left out; when there is
//! nothing at all the pane explains why.

use crate::assistant::SuggestionResponse;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// What the assistant pane currently has to show
#[derive(Debug, Clone, Copy)]
pub enum AssistantView<'a> {
    /// No backend configured
    Disabled,
    /// Waiting for the backend
    Loading,
    /// No request made yet, or the code was too short
    Idle,
    Ready(&'a SuggestionResponse),
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &'a str, color: Color, items: &'a [String]) {
    if items.is_empty() {
        return;
    }
    if !lines.is_empty() {
        lines.push(Line::raw(""));
    }
    lines.push(Line::from(Span::styled(
        title,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
    for item in items {
        lines.push(Line::from(vec![
            Span::styled("• ", Style::default().fg(color)),
            Span::styled(item.as_str(), Style::default().fg(DEFAULT_THEME.fg)),
        ]));
    }
}

fn placeholder(text: &str) -> Vec<Line<'_>> {
    vec![Line::from(Span::styled(
        text,
        Style::default().fg(DEFAULT_THEME.comment),
    ))]
}

/// Render the assistant pane
pub fn render_assistant_pane(
    frame: &mut Frame,
    area: Rect,
    view: AssistantView<'_>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" AI Assistant ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 1, 0, 0));

    let lines = match view {
        AssistantView::Disabled => {
            placeholder("Assistant disabled. Start with --assistant-cmd to enable suggestions.")
        }
        AssistantView::Loading => placeholder("Analyzing code..."),
        AssistantView::Idle => placeholder("Suggestions will appear here as you write code."),
        AssistantView::Ready(response) if response.is_empty() => {
            placeholder("No suggestions. Looks good!")
        }
        AssistantView::Ready(response) => {
            let mut lines = Vec::new();
            section(&mut lines, "Suggestions", DEFAULT_THEME.primary, &response.suggestions);
            section(&mut lines, "Errors", DEFAULT_THEME.error, &response.errors);
            section(
                &mut lines,
                "Best Practices",
                DEFAULT_THEME.success,
                &response.best_practices,
            );
            lines
        }
    };

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let total_lines = lines.len();
    if total_lines > visible_height {
        *scroll_offset = (*scroll_offset).min(total_lines - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((*scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);
}
