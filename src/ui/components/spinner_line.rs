use ratatui::Frame;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use age_op_app::state::{DONE_MESSAGE, LOADING_LABEL, Phase, SessionState};

use super::atoms::spinner_span;
use crate::theme::Theme;

/// Single-line view of the session: `<glyph> Loading...` or the final message.
pub struct SpinnerLine;

impl SpinnerLine {
    pub fn render(frame: &mut Frame, state: &SessionState) {
        frame.render_widget(Paragraph::new(Self::line(state)), frame.area());
    }

    pub fn line(state: &SessionState) -> Line<'static> {
        match state.phase {
            Phase::Running => Line::from(vec![
                spinner_span(&state.spinner),
                Span::raw(format!(" {LOADING_LABEL}")),
            ]),
            Phase::Done => Line::from(Span::styled(
                DONE_MESSAGE,
                Style::default().fg(Theme::DONE_FG),
            )),
        }
    }
}
