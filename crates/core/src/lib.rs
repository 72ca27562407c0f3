//! ETF Research Core Library
//!
//! This crate provides the terminal-free core of the ETF research menu: the
//! command registry and navigation signals, the typed vocabulary for the data
//! views the menu dispatches into, configuration and screener preset
//! discovery, and the error types shared across the workspace.
//!
//! # Key Features
//!
//! - **Command Registry**: closed set of menu commands with ordered lookup
//! - **View Boundary**: the [`views::EtfViews`] trait the router hands
//!   validated arguments to
//! - **Configuration**: settings file loading and preset discovery
//! - **Error Handling**: structured error types for all failure modes
//!
//! # Examples
//!
//! Resolving a command token against the registry:
//!
//! ```
//! use etf_research_core::commands::MenuCommand;
//!
//! assert_eq!(MenuCommand::lookup("overview"), Some(MenuCommand::Overview));
//! assert!(MenuCommand::lookup("Overview").is_none());
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod file_handling;
pub mod views;
