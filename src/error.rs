use std::io::{Write, stderr, stdout};
use std::panic;

use color_eyre::eyre::Result;
use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::disable_raw_mode;

pub fn install_hooks() -> Result<()> {
    let hook_builder = color_eyre::config::HookBuilder::default().display_env_section(false);
    let (panic_hook, eyre_hook) = hook_builder.into_hooks();
    eyre_hook.install()?;

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        tracing::error!(panic = %panic_info, "panicked");
        let _ = writeln!(stderr(), "{}", panic_hook.panic_report(panic_info));
    }));

    Ok(())
}

/// Leaves raw mode and shows the cursor if a session was interrupted mid-frame.
pub fn restore_terminal() -> Result<()> {
    if crossterm::terminal::is_raw_mode_enabled()? {
        disable_raw_mode()?;
        execute!(stdout(), Show)?;
    }
    Ok(())
}
