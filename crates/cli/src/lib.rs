//! ETF Research CLI Library
//!
//! This crate provides the interactive surface of the ETF research menu: the
//! command router, the per-command argument specifications, the prompt loop
//! with fuzzy "did you mean" suggestions, and a console implementation of
//! the data views.
//!
//! # Architecture
//!
//! The CLI is organized into several key modules:
//!
//! - [`cli_args`]: command-line argument parsing for the `etfr` binary
//! - [`dispatch`]: the router turning raw input lines into view calls and
//!   navigation signals
//! - [`arguments`]: per-command argument specifications and typed extraction
//! - [`menu`]: the prompt loop wrapping the router
//! - [`prompt`]: line input sources, including a scripted one for tests
//! - [`help`]: the menu help text
//! - [`views`]: the console echo implementation of the data views
//!
//! # Examples
//!
//! A typical session in the `etfr` binary:
//!
//! ```bash
//! (etf)> overview SPY
//! (etf)> holdings -e VTI -l 5 --export csv
//! (etf)> screener --preset etf_config
//! (etf)> q
//! ```

pub mod arguments;
pub mod cli_args;
pub mod dispatch;
pub mod help;
pub mod menu;
pub mod prompt;
pub mod views;
