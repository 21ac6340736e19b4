//! Argument parsing and command dispatch.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use url::Url;

use crate::client::{AppContext, CliResult};
use crate::commands::load::handle_load;
use crate::commands::locales::handle_locales;
use crate::commands::normalize::handle_normalize;
use crate::logging::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, init_logging};

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Parses CLI arguments and executes the requested command. Returns the process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();

    let logging = LoggingConfig {
        level: &cli.log_level,
        format: cli.log_format.unwrap_or_else(LogFormat::infer),
    };
    if let Err(err) = init_logging(&logging) {
        eprintln!("warning: {err:#}");
    }

    match dispatch(cli).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

async fn dispatch(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Normalize(args) => handle_normalize(&args, cli.output),
        Command::Locales => handle_locales(cli.output),
        Command::Load(args) => {
            let ctx = AppContext::new(cli.timeout)?;
            handle_load(&ctx, args, cli.output).await
        }
    }
}

#[derive(Parser)]
#[command(
    name = "ocrbook-i18n",
    about = "Normalize locale tags and inspect OCRBook translation dictionaries"
)]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "OCRBOOK_I18N_HTTP_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS
    )]
    pub(crate) timeout: u64,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        long,
        global = true,
        env = "OCRBOOK_I18N_LOG_LEVEL",
        default_value = DEFAULT_LOG_LEVEL,
        help = "Log filter directive; RUST_LOG takes precedence"
    )]
    pub(crate) log_level: String,
    #[arg(long, global = true, value_enum, help = "Log format (pretty in debug builds, json otherwise)")]
    pub(crate) log_format: Option<LogFormat>,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Map locale tags onto the supported set.
    Normalize(NormalizeArgs),
    /// List supported locales in declaration order.
    Locales,
    /// Load one locale's dictionary the way the site does.
    Load(LoadArgs),
}

#[derive(Args)]
pub(crate) struct NormalizeArgs {
    #[arg(required = true, help = "Locale tags to normalize (an empty string is allowed)")]
    pub(crate) tags: Vec<String>,
}

#[derive(Args)]
pub(crate) struct LoadArgs {
    #[arg(help = "Locale tag; normalized before loading")]
    pub(crate) tag: String,
    #[arg(
        long,
        env = "OCRBOOK_I18N_BASE_URL",
        value_parser = parse_url,
        conflicts_with = "dir",
        help = "Base URL holding <tag>.json"
    )]
    pub(crate) base_url: Option<Url>,
    #[arg(
        long,
        env = "OCRBOOK_I18N_DIR",
        help = "Local directory holding <tag>.json"
    )]
    pub(crate) dir: Option<PathBuf>,
    #[arg(
        long,
        env = "OCRBOOK_I18N_PRELOAD",
        help = "JSON bundle shaped like the page registry: {\"<tag>\": {\"<key>\": \"<text>\"}}"
    )]
    pub(crate) preload: Option<PathBuf>,
    #[arg(long, help = "Do not retry with English when the locale is unavailable")]
    pub(crate) no_fallback: bool,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

fn parse_url(input: &str) -> Result<Url, String> {
    Url::parse(input).map_err(|err| format!("invalid URL '{input}': {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn load_accepts_base_url_and_flags() -> Result<(), clap::Error> {
        let cli = Cli::try_parse_from([
            "ocrbook-i18n",
            "load",
            "pt",
            "--base-url",
            "https://ocrbook.example/i18n",
            "--no-fallback",
            "--output",
            "json",
        ])?;
        assert_eq!(cli.output, OutputFormat::Json);
        let Command::Load(args) = cli.command else {
            panic!("expected load command");
        };
        assert_eq!(args.tag, "pt");
        assert!(args.no_fallback);
        assert_eq!(
            args.base_url.as_ref().map(Url::as_str),
            Some("https://ocrbook.example/i18n")
        );
        Ok(())
    }

    #[test]
    fn load_rejects_both_sources() {
        let result = Cli::try_parse_from([
            "ocrbook-i18n",
            "load",
            "de",
            "--base-url",
            "https://ocrbook.example/i18n",
            "--dir",
            "site/i18n",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn normalize_requires_a_tag() {
        assert!(Cli::try_parse_from(["ocrbook-i18n", "normalize"]).is_err());
        assert!(Cli::try_parse_from(["ocrbook-i18n", "normalize", ""]).is_ok());
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(parse_url("not a url").is_err());
    }
}
