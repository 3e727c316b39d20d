/// Loader errors
pub mod error;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::profile::{ProfileSource, SliderProfile};
use crate::validation::{ConfigWarnings, apply_guard_rails};

use error::ProfileLoadError;

/// A loaded and checked profile.
#[derive(Debug, Clone)]
pub struct ProfileLoad {
    /// The parsed profile.
    pub profile: SliderProfile,
    /// Where it came from.
    pub source: ProfileSource,
    /// Guard-rail warnings; already logged.
    pub warnings: ConfigWarnings,
}

/// Finds, parses and checks a slider profile.
#[derive(Debug, Clone, Default)]
pub struct ProfileLoader {
    path: Option<PathBuf>,
}

impl ProfileLoader {
    /// Loader that resolves the profile from the environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader that reads exactly `path`, bypassing the environment.
    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Explicit path, if one was given.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Resolve, parse and check the profile.
    pub fn load(&self) -> Result<ProfileLoad, ProfileLoadError> {
        let (profile, source) = match &self.path {
            Some(path) => {
                let profile = SliderProfile::load_from_file(path)
                    .map_err(ProfileLoadError::Profile)?;
                (profile, ProfileSource::File(path.clone()))
            }
            None => SliderProfile::load_from_env()
                .map_err(ProfileLoadError::Profile)?,
        };
        debug!(?source, "slider profile resolved");

        let warnings = apply_guard_rails(&profile)?;
        for warning in warnings.iter() {
            match &warning.hint {
                Some(hint) => warn!(hint = %hint, "{}", warning.message),
                None => warn!("{}", warning.message),
            }
        }

        Ok(ProfileLoad {
            profile,
            source,
            warnings,
        })
    }
}
