#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    /// Spinner animation frame is due
    Tick,
    /// Completion timer fired
    Finished,
    /// Interrupt key pressed in the terminal (Ctrl+C)
    Interrupt,
    /// Quit requested from outside the event loop
    Quit,
    Render,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
