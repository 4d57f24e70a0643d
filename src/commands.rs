//! CLI command handlers.
//!
//! Handlers own all I/O: reading the config and the secret, reading the
//! clock when `--now` is absent, and printing. Derivation itself stays in
//! `rotpass_core`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use rotpass_core::{
    GenerationOptions, GenerationRequest, MasterSecret, RotationUnit, RotationWindow,
    ServiceEntry, ServicesConfig, derive_detailed,
};

use crate::{
    cli::{Commands, DeriveFlags},
    json::{GenerateOutput, ServiceOutput, WindowOutput},
    prompt::read_master_secret,
};

/// Execute a CLI command at unix time `now`.
///
/// This is the main command dispatcher that routes to the appropriate handler.
pub fn execute_command(command: Commands, now: i64) -> Result<()> {
    match command {
        Commands::Generate { config, json } => cmd_generate(&config, json, now),

        Commands::Derive {
            identifier,
            length,
            rotation_unit,
            no_uppercase,
            no_lowercase,
            no_digits,
            no_specials,
            only_digits,
            json,
        } => {
            let flags = DeriveFlags {
                length,
                rotation_unit: parse_rotation_unit(&rotation_unit),
                no_uppercase,
                no_lowercase,
                no_digits,
                no_specials,
                only_digits,
            };
            cmd_derive(&identifier, flags.options(), json, now)
        }

        Commands::Window {
            rotation_unit,
            json,
        } => cmd_window(parse_rotation_unit(&rotation_unit), json, now),
    }
}

/// Unit name to unit, warning when the month fallback kicks in.
fn parse_rotation_unit(name: &str) -> RotationUnit {
    if !RotationUnit::is_known(name) {
        warn!(rotation_unit = %name, "unknown rotation unit, rotating monthly");
    }
    RotationUnit::from_name(name)
}

/// Derive every service in the config file.
///
/// A failing entry is reported and skipped; the command fails at the end if
/// any entry failed.
fn cmd_generate(config_path: &Path, json: bool, now: i64) -> Result<()> {
    let config = ServicesConfig::load(config_path)
        .with_context(|| format!("Failed to load services from {}", config_path.display()))?;
    info!(
        services = config.services.len(),
        config = %config_path.display(),
        "loaded services config"
    );

    let secret = read_master_secret()?;
    let outcomes = generate_all(&config.services, &secret, now);
    let failed = outcomes.iter().filter(|outcome| !outcome.success).count();

    if json {
        let output = GenerateOutput {
            success: failed == 0,
            now,
            services: outcomes,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        outcomes.iter().for_each(print_outcome);
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} services failed", config.services.len());
    }
    Ok(())
}

/// Derive one outcome per entry, in config order.
pub fn generate_all(
    services: &[ServiceEntry],
    secret: &MasterSecret,
    now: i64,
) -> Vec<ServiceOutput> {
    services
        .iter()
        .map(|entry| {
            let request = GenerationRequest {
                master_secret: secret.clone(),
                identifier: entry.identifier.clone(),
                options: entry.options(),
            };
            derive_detailed(&request, now).map_or_else(
                |err| {
                    warn!(identifier = %entry.identifier, code = err.code(), "derivation failed");
                    ServiceOutput::failed(&entry.identifier, &err)
                },
                |derivation| {
                    ServiceOutput::derived(
                        &entry.identifier,
                        &derivation.window,
                        derivation.password,
                    )
                },
            )
        })
        .collect()
}

fn print_outcome(outcome: &ServiceOutput) {
    match (&outcome.password, &outcome.error) {
        (Some(password), _) => println!("{}: {password}", outcome.identifier),
        (None, Some(error)) => eprintln!("{}: error: {}", outcome.identifier, error.message),
        (None, None) => eprintln!("{}: error: no password derived", outcome.identifier),
    }
}

/// Derive a single service's password.
fn cmd_derive(identifier: &str, options: GenerationOptions, json: bool, now: i64) -> Result<()> {
    let secret = read_master_secret()?;
    let request = GenerationRequest {
        master_secret: secret,
        identifier: identifier.to_string(),
        options,
    };

    let derivation = derive_detailed(&request, now)
        .with_context(|| format!("Failed to derive password for '{identifier}'"))?;

    if json {
        let output = ServiceOutput::derived(identifier, &derivation.window, derivation.password);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", derivation.password);
    }
    Ok(())
}

/// Show the rotation window containing `now`.
fn cmd_window(unit: RotationUnit, json: bool, now: i64) -> Result<()> {
    let output = WindowOutput::new(&RotationWindow::at(unit, now), now);

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("unit:             {}", output.rotation_unit);
        println!("window:           {}", output.window);
        println!(
            "started:          {} ({})",
            output.starts_at_rfc3339.as_deref().unwrap_or("-"),
            output.starts_at
        );
        println!(
            "next rotation:    {} ({})",
            output.next_rotation_at_rfc3339.as_deref().unwrap_or("-"),
            output.next_rotation_at
        );
        println!("rotates in:       {}s", output.seconds_until_rotation);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_generate_all_keeps_going_after_failure() {
        let config = ServicesConfig::from_json_str(
            r#"{
                "services": [
                    {"identifier": "short", "length": 3},
                    {"identifier": "github.com"},
                    {"identifier": "empty", "require_uppercase": false, "require_lowercase": false,
                     "require_digits": false, "require_specials": false}
                ]
            }"#,
        )
        .unwrap();

        let outcomes = generate_all(&config.services, &MasterSecret::new("UltraSecret"), 1_760_000_000);

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].error.as_ref().unwrap().code, "INVALID_LENGTH");
        assert_eq!(outcomes[1].password.as_deref(), Some("B2eotu&9=QEnpuAd"));
        assert_eq!(outcomes[1].window, Some(669));
        assert_eq!(outcomes[2].error.as_ref().unwrap().code, "INVALID_CONFIGURATION");
    }

    #[test]
    fn test_generate_all_isolates_oversized_and_non_string_units() {
        let config = ServicesConfig::from_json_str(
            r#"{
                "services": [
                    {"identifier": "huge", "length": 18446744073709551615},
                    {"identifier": "github.com", "rotation_unit": null},
                    {"identifier": "github.com", "rotation_unit": 7}
                ]
            }"#,
        )
        .unwrap();

        let outcomes = generate_all(&config.services, &MasterSecret::new("UltraSecret"), 1_760_000_000);

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].error.as_ref().unwrap().code, "LENGTH_TOO_LARGE");
        assert_eq!(outcomes[1].password.as_deref(), Some("B2eotu&9=QEnpuAd"));
        assert_eq!(outcomes[2].password.as_deref(), Some("B2eotu&9=QEnpuAd"));
    }

    #[test]
    fn test_unknown_unit_parses_as_month() {
        assert_eq!(parse_rotation_unit("fortnight"), RotationUnit::Month);
        assert_eq!(parse_rotation_unit("hour"), RotationUnit::Hour);
    }
}
