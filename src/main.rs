use std::io::{Write, stdout};
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::Result;

use age_op::cli::Cli;
use age_op::commands::dispatch;
use age_op::{error, logging};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    error::install_hooks()?;
    let _log_guard = logging::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help is not a failure; every real parse error exits 1
            let code = if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            e.print()?;
            return Ok(code);
        }
    };

    let mut out = stdout();
    dispatch(cli, &mut out).await?;
    out.flush()?;
    Ok(ExitCode::SUCCESS)
}
