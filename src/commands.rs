use std::io::Write;

use color_eyre::eyre::Result;

use crate::cli::{BINARY_NAME, Cli, Command, ListArgs};
use crate::runner::run_spinner;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub async fn dispatch(cli: Cli, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Some(Command::Version) => write_version(out)?,
        Some(Command::List(args)) => write_list(out, args)?,
        None if cli.version => write_version(out)?,
        None => run_spinner(cli.session_config(), out).await?,
    }
    Ok(())
}

pub fn version_line() -> String {
    format!("{BINARY_NAME} version {VERSION}")
}

pub fn write_version(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{}", version_line())
}

/// Echoes the items under a header naming the format. The format does not change the output.
pub fn write_list(out: &mut impl Write, args: &ListArgs) -> std::io::Result<()> {
    writeln!(out, "Listing items in {} format:", args.format)?;
    for item in &args.items {
        writeln!(out, "  - {item}")?;
    }
    Ok(())
}
