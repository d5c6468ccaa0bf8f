mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "fluentschema", version, about = "Fluent schema validation CLI")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    match cmd::run(cli.command, format) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_conformance_with_filter() {
        let cli = Cli::try_parse_from(["fluentschema", "conformance", "--filter", "union"])
            .expect("conformance args should parse");

        match cli.command {
            Command::Conformance(args) => assert_eq!(args.filter.as_deref(), Some("union")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from([
            "fluentschema",
            "list",
            "--format",
            "json",
            "--log-level",
            "debug",
        ])
        .expect("global flags should parse after subcommand");

        assert!(matches!(cli.command, Command::List(_)));
        assert!(matches!(cli.format, Some(OutputFormat::Json)));
        assert!(matches!(cli.log_level, LogLevel::Debug));
    }

    #[test]
    fn logging_defaults_to_text_at_info() {
        let cli = Cli::try_parse_from(["fluentschema", "list"]).expect("list should parse");

        assert!(matches!(cli.log_format, LogFormat::Text));
        assert!(matches!(cli.log_level, LogLevel::Info));
        assert!(cli.format.is_none());
    }

    #[test]
    fn rejects_unknown_format() {
        let err = Cli::try_parse_from(["fluentschema", "--format", "xml", "list"])
            .expect_err("unknown format should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["fluentschema"]).is_err());
    }
}
