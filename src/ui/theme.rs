use ratatui::style::Color;

/// Application color theme constants
pub struct Theme;

impl Theme {
    // Spinner glyph while the session is running
    pub const SPINNER_FG: Color = Color::Indexed(205);

    // Final completion message
    pub const DONE_FG: Color = Color::Reset;
}
