//! The menu help text.

/// Help block shown on entry and for `?`/`help`, grouped by upstream source.
#[must_use]
pub fn menu_text() -> &'static str {
    "\
What do you want to do?
    cls         clear screen
    ?/help      show this menu again
    q           leave the ETF menu
    quit        quit to abandon the program
    reset       reset the menu and reload configs

StockAnalysis.com:
    search        search ETFs matching name (i.e. BlackRock or Invesco)
    overview      get overview of ETF symbol
    holdings      get top holdings for ETF
    compare       compare overview of multiple ETF
    screener      screen etfs based on overview data
Wall St. Journal:
    gainers       show top gainers
    decliners     show top decliners
    active        show most active
The Passive Investor:
    pir           create ETF report of multiple tickers
Finance Database:
    fds           advanced ETF search based on category, name and/or description
"
}
