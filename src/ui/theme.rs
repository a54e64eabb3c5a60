use ratatui::style::Color;

/// Colors shared by every pane of the playground
pub struct Theme {
    pub fg: Color,
    /// Language badge, brackets and the Suggestions heading
    pub primary: Color,
    /// Badges shown while a run is pending
    pub secondary: Color,
    pub comment: Color,
    /// Best Practices heading
    pub success: Color,
    /// Fault lines and the Errors heading
    pub error: Color,
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub function: Color,
    pub type_name: Color,
    /// The `> gcc main.c ...` line at the top of the output
    pub banner: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),
    string: Color::Rgb(166, 227, 161),
    number: Color::Rgb(250, 179, 135),
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
    function: Color::Rgb(249, 226, 175),
    type_name: Color::Rgb(148, 226, 213),
    banner: Color::Rgb(245, 194, 231),
};
