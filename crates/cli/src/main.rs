use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use etf_research_cli::cli_args::Args;
use etf_research_cli::dispatch::Router;
use etf_research_cli::menu;
use etf_research_cli::prompt::StdinLineSource;
use etf_research_cli::views::EchoViews;
use etf_research_core::commands::MenuSignal;
use etf_research_core::error::Result;
use etf_research_core::{config, file_handling};

fn execute() -> Result<()> {
    let args = Args::parse();

    // A reset signal falls through to the next iteration, which reloads
    // settings and presets from disk.
    loop {
        let settings_path = config::get_settings_path(&args.settings_path);
        debug!("Settings path: `{settings_path}`");
        let settings = file_handling::get_settings(&settings_path)?;

        let presets_path = config::get_presets_path(&args.presets_path);
        debug!("Presets path: `{presets_path}`");
        let presets = file_handling::list_preset_names(&presets_path)?;

        let report_folder = PathBuf::from(config::get_reports_path(&settings.report_folder));

        let views = EchoViews;
        let router = Router::new(&views, presets, report_folder);
        let mut line_source = StdinLineSource;

        match menu::run(&mut line_source, &router, settings.flair())? {
            MenuSignal::Reset => {
                debug!("Reset requested, reloading configuration");
            }
            MenuSignal::Back | MenuSignal::Quit => return Ok(()),
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
