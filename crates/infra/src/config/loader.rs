//! Configuration loader
//!
//! Loads [`PiiSettings`] from a file, falling back to defaults.
//!
//! ## Loading Strategy
//! 1. If `PIIGUARD_CONFIG` is set, load exactly that file
//! 2. Otherwise probe the standard locations for a config file
//! 3. If none exists, use [`PiiSettings::default`]
//!
//! Every loaded value is validated before it is returned, so a custom
//! pattern with an empty placeholder or a zero debounce never reaches the
//! service.
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./piiguard.toml` or `./piiguard.json` (current working directory)
//! 2. `./.piiguard.toml` or `./.piiguard.json`
//! 3. The same names in the parent and grandparent directories
//! 4. The same names next to the executable

use std::path::{Path, PathBuf};

use piiguard_domain::constants::{CONFIG_ENV_VAR, CONFIG_FILE_STEM};
use piiguard_domain::{PiiGuardError, PiiSettings, Result};

use crate::errors::InfraError;

/// Load settings with automatic fallback strategy
///
/// # Errors
/// Returns `PiiGuardError::Config` if:
/// - `PIIGUARD_CONFIG` points at a missing file
/// - The file found is malformed or fails validation
pub fn load() -> Result<PiiSettings> {
    if let Some(path) = env_path(CONFIG_ENV_VAR) {
        tracing::debug!(path = %path.display(), "Config path taken from environment");
        return load_from_file(Some(path));
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::info!("No config file found, using default PII settings");
            Ok(PiiSettings::default())
        }
    }
}

/// Load settings from a file
///
/// If `path` is `None`, probes the standard locations for a config file.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `PiiGuardError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - The settings fail validation
pub fn load_from_file(path: Option<PathBuf>) -> Result<PiiSettings> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(PiiGuardError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            PiiGuardError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading PII settings from file");

    let contents = std::fs::read_to_string(&config_path).map_err(InfraError::from)?;

    parse_settings(&contents, &config_path)
}

/// Parse and validate settings from string content
///
/// Format is detected by file extension (`.json` or `.toml`); a path
/// without an extension is read as JSON.
///
/// # Errors
/// Returns `PiiGuardError::Config` if the format is unsupported, parsing
/// fails or the parsed settings are invalid.
pub fn parse_settings(contents: &str, path: &Path) -> Result<PiiSettings> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    let settings: PiiSettings = match extension {
        "toml" => toml::from_str(contents).map_err(InfraError::from)?,
        "json" => serde_json::from_str(contents).map_err(InfraError::from)?,
        _ => {
            return Err(PiiGuardError::Config(format!(
                "Unsupported config format: {}",
                extension
            )))
        }
    };

    settings.validate()?;
    tracing::debug!(
        categories = settings.pii_patterns.len(),
        custom_patterns = settings.custom_patterns.len(),
        exclude_patterns = settings.exclude_patterns.len(),
        "PII settings parsed"
    );
    Ok(settings)
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    // Try current working directory and its ancestors
    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
        candidates.extend(candidates_in(&cwd.join("..")));
        candidates.extend(candidates_in(&cwd.join("../..")));
    }

    // Try relative to executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    // Return first existing candidate
    candidates.into_iter().find(|path| path.is_file())
}

fn candidates_in(dir: &Path) -> Vec<PathBuf> {
    ["toml", "json"]
        .iter()
        .flat_map(|ext| {
            [
                dir.join(format!("{CONFIG_FILE_STEM}.{ext}")),
                dir.join(format!(".{CONFIG_FILE_STEM}.{ext}")),
            ]
        })
        .collect()
}

/// Read a path from an environment variable, treating blank as unset.
fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key).filter(|value| !value.is_empty()).map(PathBuf::from)
}
