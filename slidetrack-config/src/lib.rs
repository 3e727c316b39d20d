//! Slider profile loading for slidetrack.
//!
//! A profile is the slider configuration as it lives on disk: the
//! [`SliderConfig`](slidetrack_core::SliderConfig) options, an optional
//! fixed layout and the slide count it is meant for. This crate finds and
//! parses profiles (TOML or JSON) and runs the guard rails that turn
//! questionable combinations into warnings and invalid ones into errors.

/// Profile resolution and checking
pub mod loader;
/// The on-disk profile format
pub mod profile;
/// Guard rails and warnings
pub mod validation;

pub use loader::{ProfileLoad, ProfileLoader, error::ProfileLoadError};
pub use profile::{ProfileSource, SliderProfile};
pub use validation::{
    ConfigWarning, ConfigWarnings, ProfileGuardRailError, apply_guard_rails,
};
