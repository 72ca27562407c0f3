//! File handling for menu settings and screener preset discovery.
//!
//! This module reads the settings YAML and discovers the closed set of
//! screener preset names the menu offers at startup.

use std::fs::{self, File};
use std::path::Path;

use indexmap::IndexSet;
use log::debug;

use crate::config::{Settings, DEFAULT_PRESET};
use crate::error::{Error, Result};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

/// Reads menu settings from disk.
///
/// A missing file is not an error: the menu runs on defaults until the user
/// writes one.
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but cannot be read
/// - The file contains invalid YAML
/// - The YAML doesn't match the expected structure
pub fn get_settings(settings_path: &str) -> Result<Settings> {
    if !Path::new(settings_path).exists() {
        debug!("No settings file at `{settings_path}`, using defaults");
        return Ok(Settings::default());
    }

    let reader = get_reader("settings", settings_path)?;

    let settings: serde_yaml::Result<Settings> = serde_yaml::from_reader(reader);

    match settings {
        Ok(settings) => Ok(settings),
        Err(e) => Err(Error::yaml_error(
            "reading".to_string(),
            "settings".to_string(),
            settings_path.to_string(),
            e,
        )),
    }
}

/// Discovers screener preset names from the presets directory.
///
/// Preset names are the file stems found in the directory, de-duplicated and
/// kept in directory order. A missing or empty directory falls back to the
/// single builtin preset so the screener always has a valid choice set.
///
/// # Errors
///
/// Returns an error if the directory exists but cannot be listed.
pub fn list_preset_names(presets_dir: &str) -> Result<Vec<String>> {
    let dir = Path::new(presets_dir);
    if !dir.is_dir() {
        debug!("No presets directory at `{presets_dir}`, falling back to `{DEFAULT_PRESET}`");
        return Ok(vec![DEFAULT_PRESET.to_string()]);
    }

    let entries = fs::read_dir(dir)
        .map_err(|e| Error::io_error("presets".to_string(), presets_dir.to_string(), e))?;

    let mut names: IndexSet<String> = IndexSet::new();
    for entry in entries {
        let entry = entry
            .map_err(|e| Error::io_error("presets".to_string(), presets_dir.to_string(), e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
            names.insert(stem.to_string());
        }
    }

    if names.is_empty() {
        debug!("Presets directory `{presets_dir}` is empty, falling back to `{DEFAULT_PRESET}`");
        return Ok(vec![DEFAULT_PRESET.to_string()]);
    }

    Ok(names.into_iter().collect())
}
