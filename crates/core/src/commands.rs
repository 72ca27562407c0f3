use std::fmt::{Display, Formatter};

use crate::views::MoverCategory;

/// Every token the ETF menu accepts.
///
/// Local commands act on the menu itself; domain commands are parsed further
/// and forwarded to a data view. `?` and `help` resolve to the same variant,
/// and `q` is the go-back command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    Cls,
    Help,
    Back,
    Quit,
    Reset,
    Search,
    Overview,
    Holdings,
    Compare,
    Screener,
    Gainers,
    Decliners,
    Active,
    Pir,
    Fds,
}

/// Signal the menu loop hands back to its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSignal {
    /// Leave this menu and return control one level up.
    Back,
    /// Terminate the whole program.
    Quit,
    /// Reload configuration and re-enter the menu.
    Reset,
}

/// Accepted tokens in help and suggestion order. Lookup is a case-sensitive
/// exact match against this table.
const REGISTRY: &[(&str, MenuCommand)] = &[
    ("cls", MenuCommand::Cls),
    ("?", MenuCommand::Help),
    ("help", MenuCommand::Help),
    ("q", MenuCommand::Back),
    ("quit", MenuCommand::Quit),
    ("reset", MenuCommand::Reset),
    ("search", MenuCommand::Search),
    ("overview", MenuCommand::Overview),
    ("holdings", MenuCommand::Holdings),
    ("compare", MenuCommand::Compare),
    ("screener", MenuCommand::Screener),
    ("gainers", MenuCommand::Gainers),
    ("decliners", MenuCommand::Decliners),
    ("active", MenuCommand::Active),
    ("pir", MenuCommand::Pir),
    ("fds", MenuCommand::Fds),
];

impl MenuCommand {
    /// Resolves a command token, or `None` when the token is not registered.
    #[must_use]
    pub fn lookup(token: &str) -> Option<Self> {
        REGISTRY
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, command)| *command)
    }

    /// All accepted tokens in registry order.
    pub fn tokens() -> impl Iterator<Item = &'static str> {
        REGISTRY.iter().map(|(name, _)| *name)
    }

    /// Canonical name, used as the parser program name and in diagnostics.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Cls => "cls",
            Self::Help => "help",
            Self::Back => "q",
            Self::Quit => "quit",
            Self::Reset => "reset",
            Self::Search => "search",
            Self::Overview => "overview",
            Self::Holdings => "holdings",
            Self::Compare => "compare",
            Self::Screener => "screener",
            Self::Gainers => "gainers",
            Self::Decliners => "decliners",
            Self::Active => "active",
            Self::Pir => "pir",
            Self::Fds => "fds",
        }
    }

    /// Local commands never reach a data view.
    #[must_use]
    pub fn is_local(self) -> bool {
        matches!(
            self,
            Self::Cls | Self::Help | Self::Back | Self::Quit | Self::Reset
        )
    }

    /// Flag prepended by the positional-shorthand rule, for commands whose
    /// primary option is a named symbol or symbol-list argument.
    #[must_use]
    pub fn primary_flag(self) -> Option<&'static str> {
        match self {
            Self::Search | Self::Overview | Self::Holdings | Self::Compare | Self::Pir => {
                Some("-e")
            }
            _ => None,
        }
    }

    /// Category label for the market-mover commands.
    #[must_use]
    pub fn mover_category(self) -> Option<MoverCategory> {
        match self {
            Self::Gainers => Some(MoverCategory::Gainers),
            Self::Decliners => Some(MoverCategory::Decliners),
            Self::Active => Some(MoverCategory::Active),
            _ => None,
        }
    }
}

impl Display for MenuCommand {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.name())
    }
}
