//! Console rendering of dispatched requests.

use std::path::Path;

use itertools::Itertools;
use log::info;

use etf_research_core::error::Result;
use etf_research_core::views::{EtfViews, ExportFormat, FdsQuery, MoverCategory};

/// Prints each validated request instead of contacting a data provider.
///
/// Stands in for the stockanalysis.com, Wall St. Journal, report and
/// finance-database clients, keeping the menu usable end to end while those
/// are wired up.
#[derive(Default)]
pub struct EchoViews;

impl EtfViews for EchoViews {
    fn search_by_name(&self, query: &str, export: Option<ExportFormat>) -> Result<()> {
        info!("search request for `{query}`");
        println!("search: ETFs matching '{query}'{}", export_suffix(export));
        Ok(())
    }

    fn overview_by_symbol(&self, symbol: &str, export: Option<ExportFormat>) -> Result<()> {
        info!("overview request for `{symbol}`");
        println!("overview: {symbol}{}", export_suffix(export));
        Ok(())
    }

    fn holdings_by_symbol(
        &self,
        symbol: &str,
        limit: usize,
        export: Option<ExportFormat>,
    ) -> Result<()> {
        info!("holdings request for `{symbol}`");
        println!(
            "holdings: top {limit} holdings of {symbol}{}",
            export_suffix(export)
        );
        Ok(())
    }

    fn compare_symbols(&self, symbols: &[String], export: Option<ExportFormat>) -> Result<()> {
        info!("compare request for {symbols:?}");
        println!(
            "compare: {}{}",
            symbols.iter().join(", "),
            export_suffix(export)
        );
        Ok(())
    }

    fn screen_by_preset(
        &self,
        limit: usize,
        preset: &str,
        export: Option<ExportFormat>,
    ) -> Result<()> {
        info!("screener request with preset `{preset}`");
        println!(
            "screener: top {limit} with preset {preset}{}",
            export_suffix(export)
        );
        Ok(())
    }

    fn top_movers_by_category(&self, category: MoverCategory, raw_args: &[String]) -> Result<()> {
        info!("mover request for `{category}` with {raw_args:?}");
        if raw_args.is_empty() {
            println!("{category}: top movers");
        } else {
            println!("{category}: top movers ({})", raw_args.iter().join(" "));
        }
        Ok(())
    }

    fn generate_report(&self, symbols: &[String], filename: &str, folder: &Path) -> Result<()> {
        info!(
            "report request for {symbols:?} into `{}/{filename}`",
            folder.display()
        );
        println!("pir: report on {}", symbols.iter().join(", "));
        Ok(())
    }

    fn finance_database_search(&self, query: &FdsQuery) -> Result<()> {
        info!("finance database request {query:?}");
        if query.options_only {
            println!("fds: available categories");
            return Ok(());
        }

        let mut filters = Vec::new();
        if let Some(category) = &query.category {
            filters.push(format!("category '{}'", category.iter().join(" ")));
        }
        if let Some(name) = &query.name {
            filters.push(format!("name '{}'", name.iter().join(" ")));
        }
        if let Some(description) = &query.description {
            filters.push(format!("description '{}'", description.iter().join(" ")));
        }
        if filters.is_empty() {
            filters.push("no filters".to_string());
        }

        println!(
            "fds: top {} by total assets, {}{}",
            query.amount,
            filters.iter().join(", "),
            if query.include_exchanges {
                ""
            } else {
                ", primary listings only"
            }
        );
        Ok(())
    }
}

fn export_suffix(export: Option<ExportFormat>) -> String {
    export
        .map(|format| format!(" (export: {format})"))
        .unwrap_or_default()
}
