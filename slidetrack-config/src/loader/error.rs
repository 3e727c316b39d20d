use super::super::validation::ProfileGuardRailError;

use thiserror::Error;

/// Why no usable profile could be loaded.
#[derive(Debug, Error)]
pub enum ProfileLoadError {
    /// Reading or parsing failed.
    #[error("failed to load slider profile: {0}")]
    Profile(#[source] anyhow::Error),
    /// The profile parsed but the guard rails rejected it.
    #[error(transparent)]
    GuardRail(#[from] ProfileGuardRailError),
}
