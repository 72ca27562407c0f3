//! The boundary between the menu and its data-fetching collaborators.
//!
//! The router validates and types every argument before it crosses this
//! boundary; implementations own networking, report generation and whatever
//! else it takes to answer a request.

use std::fmt::{Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

/// File formats a view can export its table to. Absence of the option means
/// no export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    /// The accepted tokens, in the order they are offered to the user.
    pub const TOKENS: &'static [&'static str] = &["csv", "json", "xlsx"];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Xlsx => "xlsx",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "xlsx" => Ok(Self::Xlsx),
            other => Err(Error::UnknownExportFormat(other.to_string())),
        }
    }
}

impl Display for ExportFormat {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Market-mover report categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoverCategory {
    Gainers,
    Decliners,
    Active,
}

impl MoverCategory {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Gainers => "gainers",
            Self::Decliners => "decliners",
            Self::Active => "active",
        }
    }
}

impl Display for MoverCategory {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.label())
    }
}

/// Filters for a finance-database lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FdsQuery {
    /// Category filter words, unfiltered when `None`.
    pub category: Option<Vec<String>>,
    /// Name filter words, unfiltered when `None`.
    pub name: Option<Vec<String>>,
    /// Description filter words, unfiltered when `None`.
    pub description: Option<Vec<String>>,
    /// Whether listings of the same ETF on other exchanges are kept.
    pub include_exchanges: bool,
    /// Number of ETFs to return.
    pub amount: usize,
    /// Show the available categories instead of results.
    pub options_only: bool,
}

impl Default for FdsQuery {
    fn default() -> Self {
        Self {
            category: None,
            name: None,
            description: None,
            include_exchanges: true,
            amount: 10,
            options_only: false,
        }
    }
}

/// The data views behind the menu.
///
/// One operation per domain command. Implementations report failures through
/// the crate [`Result`]; the router contains them so a failed fetch never
/// tears down the menu.
pub trait EtfViews {
    /// Lists ETFs whose name matches a free-text query.
    fn search_by_name(&self, query: &str, export: Option<ExportFormat>) -> Result<()>;

    /// Shows overview data for one symbol.
    fn overview_by_symbol(&self, symbol: &str, export: Option<ExportFormat>) -> Result<()>;

    /// Shows the top holdings of one symbol.
    fn holdings_by_symbol(
        &self,
        symbol: &str,
        limit: usize,
        export: Option<ExportFormat>,
    ) -> Result<()>;

    /// Compares overview data across several symbols.
    fn compare_symbols(&self, symbols: &[String], export: Option<ExportFormat>) -> Result<()>;

    /// Screens ETFs with a named preset.
    fn screen_by_preset(
        &self,
        limit: usize,
        preset: &str,
        export: Option<ExportFormat>,
    ) -> Result<()>;

    /// Shows a market-mover report. The raw residual tokens are forwarded
    /// untouched; this view owns its own argument handling.
    fn top_movers_by_category(&self, category: MoverCategory, raw_args: &[String]) -> Result<()>;

    /// Generates a report file covering several symbols.
    fn generate_report(&self, symbols: &[String], filename: &str, folder: &Path) -> Result<()>;

    /// Runs an advanced lookup against the finance database.
    fn finance_database_search(&self, query: &FdsQuery) -> Result<()>;
}

/// Upper-cases a comma-separated symbol list and splits it into its
/// segments, dropping empty ones.
#[must_use]
pub fn split_symbol_list(raw: &str) -> Vec<String> {
    raw.to_uppercase()
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(ToString::to_string)
        .collect()
}
