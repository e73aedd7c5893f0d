//! Config command handler
//!
//! `get` shows the effective configuration for this run, CLI overrides
//! included. `set` and `unset` edit the file as stored, so overrides and
//! expanded `$COURSE_FEES` paths are never written back.

use crate::args::ConfigSubcommand;
use course_fees::config::Config;
use course_fees::{error, info};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Dispatch config subcommands
///
/// Exits with status 1 when a key is unknown or the config cannot be saved.
pub fn run(subcommand: Option<ConfigSubcommand>, effective: &Config) {
    let config_file = Config::get_config_file_path();
    let result = match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => {
            show_all(effective);
            Ok(())
        }
        Some(ConfigSubcommand::Get { key: Some(key) }) => show_key(effective, &key),
        Some(ConfigSubcommand::Set { key, value }) => set_key(&config_file, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset_key(&config_file, &key),
        Some(ConfigSubcommand::Reset) => reset(&mut io::stdin().lock(), &mut io::stdout()),
    };

    if let Err(e) = result {
        error!("config command failed: {e}");
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

fn show_all(config: &Config) {
    println!("\n=== Configuration ===\n");
    print!("{config}");
}

fn show_key(config: &Config, key: &str) -> Result<(), String> {
    let value = config
        .get(key)
        .ok_or_else(|| format!("Unknown config key: '{key}'"))?;
    println!("{value}");
    Ok(())
}

fn set_key(config_file: &Path, key: &str, value: &str) -> Result<(), String> {
    let mut stored = Config::load_stored_from(config_file);
    stored.set(key, value)?;
    stored
        .save_to(config_file)
        .map_err(|e| format!("Failed to save config: {e}"))?;
    info!("config: {key} set to '{value}'");
    println!("✓ Set {key} = {value}");
    Ok(())
}

fn unset_key(config_file: &Path, key: &str) -> Result<(), String> {
    let mut stored = Config::load_stored_from(config_file);
    stored.unset(key, &Config::stored_defaults())?;
    stored
        .save_to(config_file)
        .map_err(|e| format!("Failed to save config: {e}"))?;
    info!("config: {key} reset to default");
    println!("✓ Reset {key} to default");
    Ok(())
}

/// Whether a confirmation answer means yes
fn confirmed(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

fn reset<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        let _ = writeln!(out, "✓ Config is already at defaults");
        return Ok(());
    }

    let _ = write!(out, "Are you sure you want to reset config to defaults? (y/n): ");
    out.flush().ok();

    let mut response = String::new();
    input.read_line(&mut response).ok();

    if confirmed(&response) {
        Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
        info!("config: reset to defaults");
        let _ = writeln!(out, "✓ Config reset to defaults");
    } else {
        let _ = writeln!(out, "✗ Reset cancelled");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_fees::config::ConfigOverrides;

    #[test]
    fn test_confirmed_answers() {
        assert!(confirmed("y\n"));
        assert!(confirmed(" YES "));
        assert!(!confirmed("n"));
        assert!(!confirmed(""));
    }

    #[test]
    fn test_set_writes_only_the_stored_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_file = dir.path().join("config.toml");

        // Effective config for a run started with `--currency $ --reports-dir ...`
        let mut effective = Config::load_stored_from(&config_file);
        effective.apply_overrides(&ConfigOverrides {
            currency_symbol: Some("$".to_string()),
            reports_dir: Some("/tmp/elsewhere".to_string()),
            ..Default::default()
        });
        assert_eq!(effective.pricing.currency_symbol, "$");

        set_key(&config_file, "organization", "Acme").unwrap();

        let saved = std::fs::read_to_string(&config_file).unwrap();
        assert!(saved.contains("organization = \"Acme\""));
        assert!(!saved.contains("/tmp/elsewhere"));
        assert!(saved.contains("$COURSE_FEES"));

        let stored = Config::load_stored_from(&config_file);
        assert_eq!(stored.pricing.currency_symbol, "R");
        assert!(stored.paths.reports_dir.starts_with("$COURSE_FEES"));
    }

    #[test]
    fn test_unset_restores_unexpanded_default() {
        let dir = tempfile::tempdir().unwrap();
        let config_file = dir.path().join("config.toml");

        set_key(&config_file, "reports_dir", "/srv/reports").unwrap();
        assert_eq!(
            Config::load_stored_from(&config_file).paths.reports_dir,
            "/srv/reports"
        );

        unset_key(&config_file, "reports_dir").unwrap();
        assert_eq!(
            Config::load_stored_from(&config_file).paths.reports_dir,
            Config::stored_defaults().paths.reports_dir
        );
        assert!(unset_key(&config_file, "nope").is_err());
    }

    #[test]
    fn test_show_unknown_key() {
        let config = Config::from_defaults();
        assert_eq!(
            show_key(&config, "nope"),
            Err("Unknown config key: 'nope'".to_string())
        );
    }
}
