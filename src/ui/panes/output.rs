//! Output pane rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

/// Render the console output of the last run.
///
/// The first line is the shell banner (`> node script.js`) and lines starting
/// with `Error:` come from a simulator fault.
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    output: &str,
    is_running: bool,
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
        .title(" Output ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 0, 0, 0));

    let all_items: Vec<ListItem> = output
        .lines()
        .map(|line| {
            let style = if is_running {
                Style::default().fg(DEFAULT_THEME.comment)
            } else if line.starts_with("> ") {
                Style::default().fg(DEFAULT_THEME.banner)
            } else if line.starts_with("Error:") || line.starts_with("An error occurred") {
                Style::default().fg(DEFAULT_THEME.error)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            ListItem::new(line).style(style)
        })
        .collect();

    // Calculate visible range for scrolling
    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
