use ratatui::style::Style;
use ratatui::text::Span;

use age_op_app::spinner::SpinnerState;

use crate::theme::Theme;

/// Styled span for the current spinner frame.
pub fn spinner_span(spinner: &SpinnerState) -> Span<'static> {
    Span::styled(spinner.glyph(), Style::default().fg(Theme::SPINNER_FG))
}
