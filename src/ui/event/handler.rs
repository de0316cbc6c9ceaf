use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use age_op_app::action::Action;

use super::Event;

pub fn handle_event(event: Event) -> Action {
    match event {
        Event::Init | Event::Resize(_, _) => Action::Render,
        Event::Key(key) => handle_key_event(key),
    }
}

fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Raw mode swallows SIGINT, so Ctrl+C arrives as a key
        (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Action::Interrupt,
        _ => Action::None,
    }
}
