//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type behind one trait, dispatched
//! statically from `main`. The shared setup (config load, exclusion
//! set, catalog indexing) lives here so every command builds the same
//! resolver the same way.

use std::sync::Arc;

use tracing::info;

use gazarch_catalog::{CatalogIndex, ExclusionSet};
use gazarch_config::Config;
use gazarch_resolve::Resolver;

mod chat;
mod init;
mod locations;
mod version;

pub use chat::{ChatInput, ChatStrategy};
pub use init::InitStrategy;
pub use locations::LocationsStrategy;
pub use version::VersionStrategy;

/// Load config and build the shared resolver.
///
/// A missing or unreadable catalog is fatal here: the assistant must not
/// start answering without a usable index.
fn build_resolver() -> anyhow::Result<(Config, Resolver)> {
    let config = Config::load()?;
    info!("Loaded config from ~/gazarch/config.json");

    let exclusions = ExclusionSet::new(config.exclusions.iter().cloned());
    let catalog_path = config.catalog.resolved_path()?;
    let index = CatalogIndex::load(&catalog_path, &exclusions)?;
    info!(
        "Catalog indexed from {}: {} places",
        catalog_path.display(),
        index.records().len()
    );

    Ok((config, Resolver::new(Arc::new(index), exclusions)))
}

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type via an associated type, so
/// parameters pass type-safely without boxing or runtime casting.
pub trait CommandStrategy {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
