//! In-memory terminal for driving a session without a TTY.

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use color_eyre::eyre::Result;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use age_op_app::ports::Renderer;
use age_op_app::state::SessionState;

use crate::event::Event;
use crate::session::SessionTerminal;

/// Journal entry written when a [`ScriptedTerminal`] is dropped.
pub const TERMINAL_RELEASED: &str = "terminal released";

/// Ordered record shared between test doubles.
#[derive(Debug, Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub fn record(&self, entry: impl Into<String>) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

/// Feeds events from a channel and journals every drawn frame as its text view.
pub struct ScriptedTerminal {
    events: UnboundedReceiver<Event>,
    journal: Journal,
}

impl ScriptedTerminal {
    pub fn new(journal: Journal) -> (Self, UnboundedSender<Event>) {
        let (tx, events) = mpsc::unbounded_channel();
        (Self { events, journal }, tx)
    }
}

impl SessionTerminal for ScriptedTerminal {
    fn next_event(&mut self) -> impl Future<Output = Option<Event>> + Send {
        self.events.recv()
    }

    fn renderer(&mut self) -> impl Renderer + '_ {
        JournalRenderer(&self.journal)
    }
}

impl Drop for ScriptedTerminal {
    fn drop(&mut self) {
        self.journal.record(TERMINAL_RELEASED);
    }
}

struct JournalRenderer<'a>(&'a Journal);

impl Renderer for JournalRenderer<'_> {
    fn draw(&mut self, state: &SessionState) -> Result<()> {
        self.0.record(state.view());
        Ok(())
    }
}
