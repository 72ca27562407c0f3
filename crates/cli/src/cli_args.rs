//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure for the `etfr`
//! binary using the `clap` crate.

use clap::Parser;

/// Command-line arguments for the ETF research menu.
///
/// Both flags override where the menu looks for its configuration; without
/// them the defaults under `~/.etf-research/` are used.
#[derive(Parser, Debug)]
#[command(term_width = 0)]
pub struct Args {
    /// Path to the menu settings YAML.
    ///
    /// If not provided, defaults to `~/.etf-research/config.yml`.
    #[arg(long, short = 'c')]
    pub settings_path: Option<String>,

    /// Directory containing screener preset files.
    ///
    /// If not provided, defaults to `~/.etf-research/presets`.
    #[arg(long, short = 'p')]
    pub presets_path: Option<String>,
}
