//! Print the post-exclusion location listing.

use gazarch_resolve::{Outcome, render};

use super::build_resolver;

/// Strategy for the Locations command.
///
/// Prints the same listing the chat answers to a listing phrase, in the
/// configured default locale.
#[derive(Debug, Clone, Copy)]
pub struct LocationsStrategy;

impl super::CommandStrategy for LocationsStrategy {
    type Input = ();

    fn execute(&self, (): Self::Input) -> anyhow::Result<()> {
        let (config, resolver) = build_resolver()?;
        let listing = Outcome::Listing(resolver.index().titles().collect());
        println!("{}", render(&listing, config.language.default));
        Ok(())
    }
}
