use clap::{Args, Parser, Subcommand};

use age_op_app::config::SessionConfig;

pub const BINARY_NAME: &str = "age-op";

#[derive(Parser, Debug)]
#[command(
    name = BINARY_NAME,
    about = "1Password CLI ❤️ age",
    long_about = "age-op is a CLI tool that integrates 1Password with age encryption.",
    disable_version_flag = true
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Timeout in seconds
    #[arg(short, long, default_value_t = 2, allow_negative_numbers = true)]
    pub timeout: i64,

    /// Print version information
    #[arg(long)]
    pub version: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print version information
    Version,
    /// List items in various formats
    List(ListArgs),
}

#[derive(Args, Debug, PartialEq, Eq)]
pub struct ListArgs {
    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Items to list
    #[arg(value_name = "ITEMS")]
    pub items: Vec<String>,
}

impl Cli {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::from_secs(self.timeout, self.verbose)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rstest::rstest;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once(BINARY_NAME).chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn definition_is_valid() {
        use clap::CommandFactory;

        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);

        assert!(!cli.verbose);
        assert_eq!(cli.timeout, 2);
        assert!(!cli.version);
        assert!(cli.command.is_none());
    }

    #[rstest]
    #[case(&["-t", "5"], 5)]
    #[case(&["--timeout", "0"], 0)]
    #[case(&["--timeout=10"], 10)]
    #[case(&["-t", "-1"], -1)]
    fn timeout_flag(#[case] args: &[&str], #[case] expected: i64) {
        assert_eq!(parse(args).timeout, expected);
    }

    #[rstest]
    #[case(&["-v"])]
    #[case(&["--verbose"])]
    fn verbose_flag(#[case] args: &[&str]) {
        assert!(parse(args).verbose);
    }

    #[test]
    fn session_config_from_flags() {
        let config = parse(&["-v", "-t", "7"]).session_config();

        assert_eq!(config, SessionConfig::new(Duration::from_secs(7), true));
    }

    #[test]
    fn version_flag_is_long_only() {
        assert!(parse(&["--version"]).version);
        assert!(Cli::try_parse_from([BINARY_NAME, "-V"]).is_err());
    }

    #[test]
    fn version_subcommand() {
        assert_eq!(parse(&["version"]).command, Some(Command::Version));
    }

    #[test]
    fn list_collects_items_and_format() {
        let cli = parse(&["list", "a", "b", "c", "--format=json"]);

        assert_eq!(
            cli.command,
            Some(Command::List(ListArgs {
                format: "json".to_string(),
                items: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            }))
        );
    }

    #[test]
    fn list_format_defaults_to_text_and_is_not_validated() {
        let Some(Command::List(args)) = parse(&["list"]).command else {
            panic!("expected list command");
        };
        assert_eq!(args.format, "text");
        assert!(args.items.is_empty());

        let Some(Command::List(args)) = parse(&["list", "-f", "xml"]).command else {
            panic!("expected list command");
        };
        assert_eq!(args.format, "xml");
    }

    #[rstest]
    #[case(&["-t", "-1"])]
    #[case(&["--timeout", "-5"])]
    #[case(&["--timeout=-1"])]
    fn negative_timeout_completes_immediately(#[case] args: &[&str]) {
        assert_eq!(parse(args).session_config().timeout, Duration::ZERO);
    }

    #[rstest]
    #[case(&["--timeout", "soon"])]
    #[case(&["--unknown"])]
    #[case(&["nope"])]
    fn invalid_arguments_are_rejected(#[case] args: &[&str]) {
        let result = Cli::try_parse_from(std::iter::once(BINARY_NAME).chain(args.iter().copied()));

        assert!(result.is_err());
    }
}
