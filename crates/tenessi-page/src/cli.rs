#![forbid(unsafe_code)]

//! Command-line argument parsing for the page session runner.
//!
//! Parses args manually to keep the binary lean. Supports environment
//! variable overrides via the `TENESSI_*` prefix; explicit flags win.

use std::env;
use std::fmt;
use std::path::PathBuf;

use tenessi_runtime::frame::DEFAULT_WIDTH;

use crate::logging::{LogConfig, LogFormat};

/// Crate version, printed by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage text printed by `--help`.
pub const HELP_TEXT: &str = "\
Tenessi landing page session runner

Replays a scripted session of page events (one JSON object per line) and
prints the page after each event.

USAGE:
    tenessi-page [OPTIONS]

OPTIONS:
    --script=PATH      Read events from PATH instead of stdin
    --catalog=PATH     Load segment content from a JSON file
    --width=N          Page width in columns (default: 80)
    --quiet, -q        Print the page only once, at the end
    --log=FILTER       Log filter, e.g. 'debug' or 'tenessi_forms=trace'
    --log-json         Emit logs as JSON lines
    --help, -h         Show this help message
    --version, -V      Show version

EVENTS:
    {\"event\":\"change\",\"field\":\"nome\",\"value\":\"Maria Silva\"}
    {\"event\":\"blur\",\"field\":\"email\",\"value\":\"maria@empresa.com\"}
    {\"event\":\"submit\"}            {\"event\":\"reset\"}
    {\"event\":\"card_click\",\"segment\":\"construction\"}
    {\"event\":\"panel_gesture\",\"gesture\":\"escape\"}
    {\"event\":\"panel_cta\"}         {\"event\":\"reopen\"}
    {\"event\":\"hero_cta\"}          {\"event\":\"tick\",\"ms\":300}
    {\"event\":\"quit\"}

ENVIRONMENT VARIABLES:
    TENESSI_SCRIPT      Override --script
    TENESSI_CATALOG     Override --catalog
    TENESSI_WIDTH       Override --width
    TENESSI_QUIET       Set to 1 for --quiet
    TENESSI_LOG_JSON    Set to 1 for --log-json
    TENESSI_LOG         Log filter (falls back to RUST_LOG, then 'info')";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Session script; stdin when `None`.
    pub script: Option<PathBuf>,
    /// Alternate segment catalog; the embedded one when `None`.
    pub catalog: Option<PathBuf>,
    /// Page width in columns.
    pub width: u16,
    /// Print the page only at the end.
    pub quiet: bool,
    /// Explicit log filter from `--log`.
    pub log_filter: Option<String>,
    /// Emit JSON logs.
    pub log_json: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            script: None,
            catalog: None,
            width: DEFAULT_WIDTH,
            quiet: false,
            log_filter: None,
            log_json: false,
        }
    }
}

/// What the binary should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// Run a session.
    Run(Opts),
    /// Print help and exit.
    Help,
    /// Print version and exit.
    Version,
}

/// Invalid command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// A flag value failed to parse.
    InvalidValue {
        /// Flag name, without the value.
        flag: &'static str,
        /// Offending value.
        value: String,
    },
    /// An argument nobody recognizes.
    UnknownArgument(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { flag, value } => write!(f, "Invalid {flag} value: {value}"),
            Self::UnknownArgument(arg) => write!(f, "Unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for CliError {}

fn env_flag(value: &str) -> bool {
    matches!(value, "1" | "true" | "yes" | "on")
}

fn parse_width(flag: &'static str, value: &str) -> Result<u16, CliError> {
    match value.parse::<u16>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CliError::InvalidValue {
            flag,
            value: value.to_string(),
        }),
    }
}

impl Opts {
    /// Parse the process arguments and environment.
    pub fn parse() -> Result<CliAction, CliError> {
        Self::parse_from(env::args().skip(1), |key| env::var(key).ok())
    }

    /// Parse `args` (without the program name) with `env` as the variable
    /// lookup.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags.
    pub fn parse_from<I, S, F>(args: I, env: F) -> Result<CliAction, CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Some(val) = env("TENESSI_SCRIPT") {
            opts.script = Some(PathBuf::from(val));
        }
        if let Some(val) = env("TENESSI_CATALOG") {
            opts.catalog = Some(PathBuf::from(val));
        }
        if let Some(val) = env("TENESSI_WIDTH") {
            opts.width = parse_width("TENESSI_WIDTH", &val)?;
        }
        if let Some(val) = env("TENESSI_QUIET") {
            opts.quiet = env_flag(&val);
        }
        if let Some(val) = env("TENESSI_LOG_JSON") {
            opts.log_json = env_flag(&val);
        }

        // Parse command-line args (override env vars)
        for arg in args {
            match arg.as_ref() {
                "--help" | "-h" => return Ok(CliAction::Help),
                "--version" | "-V" => return Ok(CliAction::Version),
                "--quiet" | "-q" => opts.quiet = true,
                "--log-json" => opts.log_json = true,
                other => {
                    if let Some(val) = other.strip_prefix("--script=") {
                        opts.script = Some(PathBuf::from(val));
                    } else if let Some(val) = other.strip_prefix("--catalog=") {
                        opts.catalog = Some(PathBuf::from(val));
                    } else if let Some(val) = other.strip_prefix("--width=") {
                        opts.width = parse_width("--width", val)?;
                    } else if let Some(val) = other.strip_prefix("--log=") {
                        opts.log_filter = Some(val.to_string());
                    } else {
                        return Err(CliError::UnknownArgument(other.to_string()));
                    }
                }
            }
        }

        Ok(CliAction::Run(opts))
    }

    /// Logging settings implied by these options.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            format: if self.log_json {
                LogFormat::Json
            } else {
                LogFormat::Text
            },
            filter: self.log_filter.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn parse(args: &[&str], vars: &[(&str, &str)]) -> Result<CliAction, CliError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Opts::parse_from(args.iter().copied(), |key| vars.get(key).cloned())
    }

    fn run_opts(args: &[&str], vars: &[(&str, &str)]) -> Opts {
        match parse(args, vars).unwrap() {
            CliAction::Run(opts) => opts,
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn default_opts() {
        let opts = run_opts(&[], &[]);
        assert_eq!(opts, Opts::default());
        assert_eq!(opts.width, 80);
        assert!(opts.script.is_none());
    }

    #[test]
    fn flags_parse() {
        let opts = run_opts(
            &["--script=s.jsonl", "--catalog=c.json", "-q", "--width=60", "--log=debug"],
            &[],
        );
        assert_eq!(opts.script, Some(PathBuf::from("s.jsonl")));
        assert_eq!(opts.catalog, Some(PathBuf::from("c.json")));
        assert!(opts.quiet);
        assert_eq!(opts.width, 60);
        assert_eq!(opts.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn env_applies_and_flags_win() {
        let opts = run_opts(
            &["--script=flag.jsonl"],
            &[
                ("TENESSI_SCRIPT", "env.jsonl"),
                ("TENESSI_QUIET", "1"),
                ("TENESSI_LOG_JSON", "true"),
            ],
        );
        assert_eq!(opts.script, Some(PathBuf::from("flag.jsonl")));
        assert!(opts.quiet);
        assert_eq!(opts.log_config().format, LogFormat::Json);
    }

    #[test]
    fn help_and_version_short_circuit() {
        assert_eq!(parse(&["--help", "--bogus"], &[]), Ok(CliAction::Help));
        assert_eq!(parse(&["-V"], &[]), Ok(CliAction::Version));
    }

    #[test]
    fn bad_width_is_rejected() {
        let err = parse(&["--width=0"], &[]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid --width value: 0");
        assert!(parse(&[], &[("TENESSI_WIDTH", "wide")]).is_err());
    }

    #[test]
    fn unknown_argument_is_rejected() {
        assert_eq!(
            parse(&["--verbose"], &[]),
            Err(CliError::UnknownArgument("--verbose".into()))
        );
    }

    #[test]
    fn help_text_lists_events() {
        assert!(HELP_TEXT.contains("card_click"));
        assert!(HELP_TEXT.contains("TENESSI_LOG"));
        assert!(!VERSION.is_empty());
    }
}
