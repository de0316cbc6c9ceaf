use std::future::Future;

use color_eyre::eyre::Result;

use age_op_app::ports::Renderer;
use age_op_app::state::SessionState;

use crate::components::spinner_line::SpinnerLine;
use crate::event::Event;
use crate::session::SessionTerminal;
use crate::tui::TuiRunner;

pub struct TuiAdapter<'a> {
    tui: &'a mut TuiRunner,
}

impl<'a> TuiAdapter<'a> {
    pub fn new(tui: &'a mut TuiRunner) -> Self {
        Self { tui }
    }
}

impl Renderer for TuiAdapter<'_> {
    fn draw(&mut self, state: &SessionState) -> Result<()> {
        self.tui.terminal().draw(|frame| {
            SpinnerLine::render(frame, state);
        })?;
        Ok(())
    }
}

impl SessionTerminal for TuiRunner {
    fn next_event(&mut self) -> impl Future<Output = Option<Event>> + Send {
        self.event_rx().recv()
    }

    fn renderer(&mut self) -> impl Renderer + '_ {
        TuiAdapter::new(self)
    }
}
