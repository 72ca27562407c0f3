//! Configuration path utilities and the menu settings structure.
//!
//! This module resolves the paths the menu reads its configuration from and
//! expands shell variables like `~` in them.

use serde::Deserialize;

/// Default path for the menu settings file
const DEFAULT_SETTINGS_PATH: &str = "~/.etf-research/config.yml";
/// Default directory holding screener preset files
const DEFAULT_PRESETS_PATH: &str = "~/.etf-research/presets";
/// Default directory generated ETF reports are written to
const DEFAULT_REPORTS_PATH: &str = "~/.etf-research/exports";

/// Builtin screener preset used when discovery finds nothing
pub const DEFAULT_PRESET: &str = "etf_config";

/// Resolves the settings file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// settings path. Shell expansions like `~` are resolved.
pub fn get_settings_path(settings_path_arg: &Option<String>) -> String {
    let settings_path = match settings_path_arg {
        Some(settings_path) => settings_path,
        None => DEFAULT_SETTINGS_PATH,
    };

    shellexpand::tilde(settings_path).to_string()
}

/// Resolves the screener presets directory path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// presets path. Shell expansions like `~` are resolved.
pub fn get_presets_path(presets_path_arg: &Option<String>) -> String {
    let presets_path = match presets_path_arg {
        Some(presets_path) => presets_path,
        None => DEFAULT_PRESETS_PATH,
    };

    shellexpand::tilde(presets_path).to_string()
}

/// Resolves the report output directory path.
///
/// If a custom path is provided (from the settings file), uses that path.
/// Otherwise, uses the default reports path. Shell expansions like `~` are
/// resolved.
pub fn get_reports_path(reports_path_arg: &Option<String>) -> String {
    let reports_path = match reports_path_arg {
        Some(reports_path) => reports_path,
        None => DEFAULT_REPORTS_PATH,
    };

    shellexpand::tilde(reports_path).to_string()
}

/// Menu settings read from the settings YAML file.
///
/// Every field is optional; a missing file yields the defaults.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Settings {
    /// Decoration shown in front of the prompt.
    pub flair: Option<String>,
    /// Overrides the default report output directory.
    pub report_folder: Option<String>,
}

impl Settings {
    /// Prompt decoration, empty when unset.
    #[must_use]
    pub fn flair(&self) -> &str {
        self.flair.as_deref().unwrap_or("")
    }
}
