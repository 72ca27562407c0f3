//! The interactive menu loop.
//!
//! Wraps the router in a prompt cycle: read a line, dispatch it, keep
//! prompting until a navigation signal asks to leave. Unknown commands get a
//! fuzzy "did you mean" suggestion instead of an error cascade.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use log::debug;

use etf_research_core::commands::{MenuCommand, MenuSignal};
use etf_research_core::error::Result;

use crate::dispatch::{Resolution, Router};
use crate::help;
use crate::prompt::LineSource;

/// Minimum fuzzy score before a suggestion is offered.
const SUGGESTION_THRESHOLD: i64 = 50;

/// Runs the menu until the user asks to leave.
///
/// Prints the help block on entry, then keeps prompting through
/// `line_source`. End of input behaves like `quit`.
///
/// # Errors
///
/// Returns an error only when the line source itself fails; dispatch
/// failures are contained by the router.
pub fn run(
    line_source: &mut dyn LineSource,
    router: &Router<'_>,
    flair: &str,
) -> Result<MenuSignal> {
    println!("{}", help::menu_text());
    let prompt = format!("{flair}(etf)> ");

    loop {
        let Some(line) = line_source.read_line(&prompt)? else {
            debug!("Input source closed, leaving the menu");
            return Ok(MenuSignal::Quit);
        };

        match router.resolve_and_dispatch(&line) {
            Resolution::Recognized(None) => {}
            Resolution::Recognized(Some(signal)) => {
                debug!("Leaving the menu with {signal:?}");
                return Ok(signal);
            }
            Resolution::Unrecognized(token) => {
                println!("The command selected doesn't exist");
                if let Some(suggestion) = closest_command(&token) {
                    println!("Did you mean '{suggestion}'?");
                }
            }
        }
    }
}

/// The registry token closest to `attempted`, if it clears the suggestion
/// threshold. Matching is case-insensitive.
#[must_use]
pub fn closest_command(attempted: &str) -> Option<&'static str> {
    let matcher = SkimMatcherV2::default();
    let attempted = attempted.to_lowercase();

    MenuCommand::tokens()
        .filter_map(|name| {
            matcher
                .fuzzy_match(name, &attempted)
                .map(|score| (score, name))
        })
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .max_by_key(|(score, _)| *score)
        .map(|(_, name)| name)
}
