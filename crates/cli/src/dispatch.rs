//! The command router: raw menu lines in, navigation signals out.
//!
//! One input line is resolved per cycle: the first token is matched against
//! the command registry, local commands act immediately, and domain commands
//! are parsed and forwarded to the data views. Validation and view failures
//! end the cycle with a diagnostic, never the menu.

use std::io::stdout;
use std::path::PathBuf;

use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor, execute};
use log::debug;

use etf_research_core::commands::{MenuCommand, MenuSignal};
use etf_research_core::error::{Error, Result};
use etf_research_core::views::{split_symbol_list, EtfViews, FdsQuery};

use crate::arguments;
use crate::help;

/// Outcome of resolving one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The line named a known command and its cycle completed. A signal is
    /// carried when the command asks to leave the menu.
    Recognized(Option<MenuSignal>),
    /// The first token matched nothing in the registry.
    Unrecognized(String),
}

/// Routes validated menu input to the data views.
pub struct Router<'a> {
    views: &'a dyn EtfViews,
    presets: Vec<String>,
    report_folder: PathBuf,
}

impl<'a> Router<'a> {
    #[must_use]
    pub fn new(views: &'a dyn EtfViews, presets: Vec<String>, report_folder: PathBuf) -> Self {
        Self {
            views,
            presets,
            report_folder,
        }
    }

    /// Resolves one raw input line and performs its action.
    ///
    /// An empty or whitespace-only line is a no-op cycle. Unknown command
    /// tokens are reported back for the caller to suggest against; every
    /// other failure is printed here and the menu stays open.
    pub fn resolve_and_dispatch(&self, raw_line: &str) -> Resolution {
        let mut tokens = raw_line.split_whitespace().map(ToString::to_string);
        let Some(command_token) = tokens.next() else {
            return Resolution::Recognized(None);
        };
        let residual: Vec<String> = tokens.collect();

        let Some(command) = MenuCommand::lookup(&command_token) else {
            return Resolution::Unrecognized(command_token);
        };

        let outcome = match command {
            MenuCommand::Help => {
                println!("{}", help::menu_text());
                Ok(None)
            }
            MenuCommand::Cls => clear_screen().map(|()| None),
            MenuCommand::Back => Ok(Some(MenuSignal::Back)),
            MenuCommand::Quit => Ok(Some(MenuSignal::Quit)),
            MenuCommand::Reset => Ok(Some(MenuSignal::Reset)),
            _ => self.dispatch_domain(command, residual).map(|()| None),
        };

        match outcome {
            Ok(signal) => Resolution::Recognized(signal),
            Err(e) => {
                eprintln!("{e}");
                Resolution::Recognized(None)
            }
        }
    }

    fn dispatch_domain(&self, command: MenuCommand, mut residual: Vec<String>) -> Result<()> {
        debug!("Dispatching `{command}` with arguments {residual:?}");

        // The mover views own their argument handling
        if let Some(category) = command.mover_category() {
            return self.views.top_movers_by_category(category, &residual);
        }

        // A help request wins over validation, in either token order
        if residual
            .iter()
            .any(|token| token == "-h" || token == "--help")
        {
            return self.print_usage(command);
        }

        if let Some(flag) = command.primary_flag() {
            if let Some(first) = residual.first() {
                if !first.starts_with('-') {
                    residual.insert(0, flag.to_string());
                }
            }
        }

        let spec = arguments::command_spec(command, &self.presets, &self.report_folder);
        let matches = spec
            .try_get_matches_from(std::iter::once(command.name().to_string()).chain(residual))
            .map_err(|e| Error::ArgumentValidation(e.to_string()))?;

        match command {
            MenuCommand::Search => {
                let query = arguments::joined_words(&matches, "etf").unwrap_or_default();
                self.views
                    .search_by_name(&query, arguments::export_format(&matches))
            }
            MenuCommand::Overview => {
                let symbol = arguments::single_value(&matches, "etf");
                self.views
                    .overview_by_symbol(symbol, arguments::export_format(&matches))
            }
            MenuCommand::Holdings => {
                let symbol = arguments::single_value(&matches, "etf");
                self.views.holdings_by_symbol(
                    symbol,
                    arguments::count(&matches, "limit"),
                    arguments::export_format(&matches),
                )
            }
            MenuCommand::Compare => {
                let symbols = split_symbol_list(arguments::single_value(&matches, "etfs"));
                self.views
                    .compare_symbols(&symbols, arguments::export_format(&matches))
            }
            MenuCommand::Screener => self.views.screen_by_preset(
                arguments::count(&matches, "num"),
                arguments::single_value(&matches, "preset"),
                arguments::export_format(&matches),
            ),
            MenuCommand::Pir => {
                let symbols = split_symbol_list(arguments::single_value(&matches, "etfs"));
                let filename = arguments::single_value(&matches, "filename");
                let folder = matches
                    .get_one::<PathBuf>("folder")
                    .cloned()
                    .unwrap_or_else(|| self.report_folder.clone());
                self.views.generate_report(&symbols, filename, &folder)?;
                println!(
                    "Created ETF report as {filename} in folder {}",
                    folder.display()
                );
                Ok(())
            }
            MenuCommand::Fds => {
                let query = FdsQuery {
                    category: arguments::word_list(&matches, "category"),
                    name: arguments::word_list(&matches, "name"),
                    description: arguments::word_list(&matches, "description"),
                    include_exchanges: !matches.get_flag("exclude_exchanges"),
                    amount: arguments::count(&matches, "amount"),
                    options_only: matches.get_flag("options"),
                };
                self.views.finance_database_search(&query)
            }
            // Local and mover commands are handled before parsing
            _ => unreachable!("`{command}` is not a parsed domain command"),
        }
    }

    fn print_usage(&self, command: MenuCommand) -> Result<()> {
        let mut spec = arguments::command_spec(command, &self.presets, &self.report_folder);
        println!("{}", spec.render_long_help());
        Ok(())
    }
}

fn clear_screen() -> Result<()> {
    let mut stdout = stdout();
    execute!(stdout, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    Ok(())
}
