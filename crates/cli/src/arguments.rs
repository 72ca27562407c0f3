//! Per-command argument specifications and typed extraction.
//!
//! Each parsed domain command owns a small `clap` command that is matched
//! against the tokens left over after the command token itself. The flag
//! names and defaults mirror what users of the wider terminal already type.

use std::path::Path;

use chrono::Local;
use clap::builder::{PossibleValue, PossibleValuesParser};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use itertools::Itertools;

use etf_research_core::commands::MenuCommand;
use etf_research_core::config::DEFAULT_PRESET;
use etf_research_core::views::ExportFormat;

/// Builds the argument specification for a parsed domain command.
///
/// `presets` is the closed set of screener preset names discovered at
/// startup; `report_folder` is the default output directory for `pir`.
#[must_use]
pub fn command_spec(command: MenuCommand, presets: &[String], report_folder: &Path) -> Command {
    match command {
        MenuCommand::Search => search_spec(),
        MenuCommand::Overview => overview_spec(),
        MenuCommand::Holdings => holdings_spec(),
        MenuCommand::Compare => compare_spec(),
        MenuCommand::Screener => screener_spec(presets),
        MenuCommand::Pir => pir_spec(report_folder),
        MenuCommand::Fds => fds_spec(),
        // Local and mover commands are never parsed
        _ => unreachable!("`{command}` has no argument specification"),
    }
}

fn search_spec() -> Command {
    Command::new("search")
        .about("Search all available ETFs for matching input")
        .arg(
            Arg::new("etf")
                .short('e')
                .long("etf")
                .value_name("NAME")
                .num_args(1..)
                .required(true)
                .help("String to search for"),
        )
        .arg(export_arg())
}

fn overview_spec() -> Command {
    Command::new("overview")
        .about("Get overview data for selected ETF")
        .arg(
            Arg::new("etf")
                .short('e')
                .long("etf")
                .value_name("SYMBOL")
                .required(true)
                .help("Symbol to look for"),
        )
        .arg(export_arg())
}

fn holdings_spec() -> Command {
    Command::new("holdings")
        .about("Look at ETF holdings")
        .arg(
            Arg::new("etf")
                .short('e')
                .long("etf")
                .value_name("SYMBOL")
                .required(true)
                .help("ETF to get holdings for"),
        )
        .arg(
            Arg::new("limit")
                .short('l')
                .long("limit")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .default_value("20")
                .help("Number of holdings to get"),
        )
        .arg(export_arg())
}

fn compare_spec() -> Command {
    Command::new("compare")
        .about("Compare selected ETFs")
        .arg(
            Arg::new("etfs")
                .short('e')
                .long("etfs")
                .value_name("SYMBOLS")
                .required(true)
                .help("Comma-separated symbols to compare"),
        )
        .arg(export_arg())
}

fn screener_spec(presets: &[String]) -> Command {
    Command::new("screener")
        .about("Screen ETFs based on overview data")
        .arg(
            Arg::new("num")
                .short('n')
                .long("num")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .default_value("20")
                .help("Number of ETFs to show"),
        )
        .arg(
            Arg::new("preset")
                .long("preset")
                .value_name("NAME")
                .value_parser(PossibleValuesParser::new(
                    presets.iter().map(|preset| PossibleValue::new(preset.clone())),
                ))
                .default_value(default_preset(presets))
                .help("Preset to use"),
        )
        .arg(export_arg())
}

fn pir_spec(report_folder: &Path) -> Command {
    Command::new("pir")
        .about("Create an ETF report of the selected ETFs")
        .arg(
            Arg::new("etfs")
                .short('e')
                .long("etfs")
                .value_name("SYMBOLS")
                .required(true)
                .help("Comma-separated symbols to create a report for"),
        )
        .arg(
            Arg::new("filename")
                .long("filename")
                .value_name("NAME")
                .default_value(default_report_filename())
                .help("Filename of the ETF report"),
        )
        .arg(
            Arg::new("folder")
                .long("folder")
                .value_name("DIR")
                .value_parser(value_parser!(std::path::PathBuf))
                .default_value(report_folder.as_os_str().to_os_string())
                .help("Folder where the ETF report will be saved"),
        )
}

fn fds_spec() -> Command {
    Command::new("fds")
        .about(
            "Display a selection of ETFs based on category, name and/or description, \
             filtered by total assets",
        )
        .arg(
            Arg::new("category")
                .short('c')
                .long("category")
                .value_name("WORDS")
                .num_args(1..)
                .help("Filter the selection by category"),
        )
        .arg(
            Arg::new("name")
                .short('n')
                .long("name")
                .value_name("WORDS")
                .num_args(1..)
                .help("Filter the selection by name"),
        )
        .arg(
            Arg::new("description")
                .short('d')
                .long("description")
                .value_name("WORDS")
                .num_args(1..)
                .help("Filter the selection by description (not shown in table)"),
        )
        .arg(
            Arg::new("exclude_exchanges")
                .short('x')
                .long("exclude-exchanges")
                .action(ArgAction::SetTrue)
                .help("Drop duplicate listings of the same ETF on other exchanges"),
        )
        .arg(
            Arg::new("amount")
                .short('a')
                .long("amount")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .default_value("10")
                .help("Number of ETFs to show"),
        )
        .arg(
            Arg::new("options")
                .short('o')
                .long("options")
                .action(ArgAction::SetTrue)
                .help("Show the available categories instead of results"),
        )
}

fn export_arg() -> Arg {
    Arg::new("export")
        .long("export")
        .value_name("FORMAT")
        .value_parser(PossibleValuesParser::new(ExportFormat::TOKENS.iter().copied()))
        .help("Export the table to a csv, json or xlsx file")
}

/// The builtin preset when discovered, otherwise the first discovered name.
fn default_preset(presets: &[String]) -> String {
    if presets.iter().any(|preset| preset == DEFAULT_PRESET) {
        return DEFAULT_PRESET.to_string();
    }
    presets
        .first()
        .cloned()
        .unwrap_or_else(|| DEFAULT_PRESET.to_string())
}

fn default_report_filename() -> String {
    format!("ETF_report_{}", Local::now().format("%Y%m%d_%H%M%S"))
}

/// Joins a multi-token option into one space-separated string.
#[must_use]
pub fn joined_words(matches: &ArgMatches, id: &str) -> Option<String> {
    matches.get_many::<String>(id).map(|mut words| words.join(" "))
}

/// Collects a multi-token option into a word list.
#[must_use]
pub fn word_list(matches: &ArgMatches, id: &str) -> Option<Vec<String>> {
    matches
        .get_many::<String>(id)
        .map(|words| words.cloned().collect())
}

/// Fetches a required or defaulted single-valued option. The parse has
/// already enforced presence.
#[must_use]
pub fn single_value<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches.get_one::<String>(id).map(String::as_str).unwrap_or_default()
}

/// Fetches a defaulted numeric option.
#[must_use]
pub fn count(matches: &ArgMatches, id: &str) -> usize {
    matches.get_one::<usize>(id).copied().unwrap_or_default()
}

/// Fetches the export format, if one was requested.
#[must_use]
pub fn export_format(matches: &ArgMatches) -> Option<ExportFormat> {
    matches
        .get_one::<String>("export")
        .and_then(|raw| raw.parse().ok())
}
