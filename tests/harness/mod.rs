use std::time::Instant;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use age_op::app::config::SessionConfig;
use age_op::app::state::SessionState;
use age_op::ui::components::spinner_line::SpinnerLine;

pub const TEST_WIDTH: u16 = 24;
pub const TEST_HEIGHT: u16 = 1;

pub fn create_test_state() -> SessionState {
    SessionState::new(SessionConfig::default(), Instant::now())
}

pub fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    Terminal::new(backend).unwrap()
}

pub fn render_to_string(terminal: &mut Terminal<TestBackend>, state: &SessionState) -> String {
    terminal
        .draw(|frame| SpinnerLine::render(frame, state))
        .unwrap();

    buffer_to_string(terminal.backend().buffer())
}

/// Rows joined by newlines, trailing blanks trimmed.
fn buffer_to_string(buffer: &Buffer) -> String {
    let mut rows = Vec::new();
    for y in 0..buffer.area.height {
        let mut row = String::new();
        for x in 0..buffer.area.width {
            let cell = buffer.cell((x, y)).unwrap();
            row.push_str(cell.symbol());
        }
        rows.push(row.trim_end().to_string());
    }
    rows.join("\n")
}
