//! Command-line interface entry point for `coursefees`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use course_fees::config::Config;
use course_fees::core::about::ABOUT;
use course_fees::core::forms::{ContactForm, LoginForm, SignupForm};
use course_fees::info;
use course_fees::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Effective configuration for this run; overrides are never saved
    let mut config = Config::load();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| parse_level(&config.logging.level))
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &config);
        }
        Command::Catalog { category } => commands::catalog::run_list(category, &config),
        Command::Course { id } => commands::catalog::run_detail(&id, &config),
        Command::Quote {
            course_ids,
            format,
            output,
        } => commands::quote::run(&course_ids, &format, output.as_deref(), &config),
        Command::Session => commands::session::run(&commands::session::SessionView {
            currency_symbol: &config.pricing.currency_symbol,
            organization: &config.pricing.organization,
        }),
        Command::Route { path } => commands::navigate::run_route(&path),
        Command::Search { keywords } => commands::navigate::run_search(&keywords),
        Command::Contact {
            name,
            email,
            phone,
            message,
        } => commands::forms::run_contact(&ContactForm {
            name,
            email,
            phone,
            message,
        }),
        Command::Login { email, password } => {
            commands::forms::run_login(&LoginForm { email, password });
        }
        Command::Signup {
            name,
            email,
            password,
            confirm_password,
        } => commands::forms::run_signup(&SignupForm {
            name,
            email,
            password,
            confirm_password,
        }),
        Command::About => print!("{}", ABOUT.to_text()),
    }
}

fn parse_level(val: &str) -> Option<Level> {
    match val.to_ascii_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        _ => None,
    }
}
