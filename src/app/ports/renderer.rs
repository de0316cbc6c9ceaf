use color_eyre::eyre::Result;

use crate::state::SessionState;

pub trait Renderer {
    fn draw(&mut self, state: &SessionState) -> Result<()>;
}
