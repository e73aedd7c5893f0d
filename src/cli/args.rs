//! CLI argument definitions for `coursefees`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use course_fees::config::ConfigOverrides;
use course_fees::core::models::CourseCategory;
use course_fees::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to
/// `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `currency_symbol`, `reports_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// List the course catalog.
    Catalog {
        /// Only list one category (six-month or six-week)
        #[arg(long, value_name = "CATEGORY")]
        category: Option<CourseCategory>,
    },
    /// Show the details of one course.
    Course {
        /// Course identifier (e.g., `first-aid`)
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Calculate fees for a set of courses.
    ///
    /// Prints a text summary, or writes a Markdown/HTML summary to a file.
    Quote {
        /// Course identifiers to include
        #[arg(value_name = "IDS", num_args = 1..)]
        course_ids: Vec<String>,

        /// Summary format: text, markdown (md), or html
        #[arg(short, long, value_name = "FORMAT", default_value = "text")]
        format: String,

        /// Output file path (optional; markdown/html default to the config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Pick courses interactively and watch the fees update.
    Session,
    /// Resolve a screen path such as `/courses/first-aid`.
    Route {
        /// Path to resolve
        #[arg(value_name = "PATH")]
        path: String,
    },
    /// Search for a course or screen by keyword.
    Search {
        /// Keyword(s) to search for
        #[arg(value_name = "KEYWORD", num_args = 1..)]
        keywords: Vec<String>,
    },
    /// Send a message through the contact form.
    Contact {
        /// Your name
        #[arg(long)]
        name: String,
        /// Your email address
        #[arg(long)]
        email: String,
        /// Your phone number (10 digits, optional leading `+`)
        #[arg(long)]
        phone: String,
        /// Message text
        #[arg(long)]
        message: String,
    },
    /// Log in (placeholder; no accounts exist yet).
    Login {
        /// Account email
        #[arg(long)]
        email: String,
        /// Account password
        #[arg(long)]
        password: String,
    },
    /// Sign up (placeholder; no accounts exist yet).
    Signup {
        /// Full name
        #[arg(long)]
        name: String,
        /// Account email
        #[arg(long)]
        email: String,
        /// Password
        #[arg(long)]
        password: String,
        /// Password confirmation
        #[arg(long)]
        confirm_password: String,
    },
    /// About the organization.
    About,
}

#[derive(Parser, Debug)]
#[command(
    name = "coursefees",
    about = "Course catalog and fee calculator",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the currency symbol
    #[arg(long = "config-currency", value_name = "SYMBOL")]
    pub config_currency: Option<String>,

    /// Override the currency symbol (short form)
    #[arg(long = "currency", value_name = "SYMBOL")]
    pub currency: Option<String>,

    /// Override the organization name printed on summaries
    #[arg(long = "config-organization", value_name = "NAME")]
    pub config_organization: Option<String>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--currency`) take precedence over long-form
    /// flags (e.g., `--config-currency`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            currency_symbol: self
                .currency
                .clone()
                .or_else(|| self.config_currency.clone()),
            organization: self.config_organization.clone(),
            reports_dir: self
                .reports_dir
                .as_ref()
                .or(self.config_reports_dir.as_ref())
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
