use slidetrack_core::{ConfigError, TrackState};
use thiserror::Error;

use super::profile::SliderProfile;

/// A profile the engine would refuse.
#[derive(Debug, Error)]
pub enum ProfileGuardRailError {
    /// Rejected by the engine's own setup checks.
    #[error(transparent)]
    Slider(#[from] ConfigError),
    /// `ease` is blank.
    #[error("ease must name an easing function")]
    EmptyEase,
}

/// A profile that loads but behaves surprisingly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// What looks wrong.
    pub message: String,
    /// How to fix it, when there is an obvious fix.
    pub hint: Option<String>,
}

/// Warnings collected by [`apply_guard_rails`], in check order.
#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    /// Collected warnings.
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    /// Add a warning without a hint.
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    /// Add a warning with a hint.
    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    /// Whether nothing was flagged.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of warnings.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Warnings in check order.
    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }
}

/// Reject profiles the engine would refuse and collect warnings for the
/// ones that work but behave surprisingly.
pub fn apply_guard_rails(
    profile: &SliderProfile,
) -> Result<ConfigWarnings, ProfileGuardRailError> {
    let config = &profile.slider;
    let mut warnings = ConfigWarnings::default();

    if config.ease.trim().is_empty() {
        return Err(ProfileGuardRailError::EmptyEase);
    }

    match profile.slide_count {
        Some(slides) => config.validate_for(slides)?,
        None => config.validate()?,
    }

    if let Some(layout) = profile.layout {
        layout.with_override(config.slide_width_px).validate()?;
    }

    // Full track checks need both the count and the widths.
    if let (Some(slides), Some(layout)) =
        (profile.slide_count, profile.layout)
    {
        let track = TrackState::new(slides, config, layout)?;
        if config.is_infinite() && config.infinite < track.per_page() {
            warnings.push_with_hint(
                format!(
                    "infinite = {} is smaller than the {} slides visible \
                     per page",
                    config.infinite,
                    track.per_page()
                ),
                "Forward navigation stops short of the wrap point; raise \
                 infinite to the page size",
            );
        }
    }

    if config.is_infinite() && config.rewind {
        warnings.push_with_hint(
            "rewind has no effect while infinite is set",
            "Use infinite or rewind, not both",
        );
    }

    if config.slide_speed_ms == 0 {
        warnings.push(
            "slide_speed_ms is 0; slides will jump without a transition",
        );
    }

    if profile.slide_count.is_none() {
        warnings.push_with_hint(
            "slide_count not set; count-dependent checks were skipped",
            "Add slide_count to validate infinite and initial_index",
        );
    }

    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidetrack_core::{Layout, SliderConfig};

    fn profile(slider: SliderConfig) -> SliderProfile {
        SliderProfile {
            slide_count: Some(5),
            slider,
            layout: Some(Layout::new(300.0, 100.0)),
        }
    }

    #[test]
    fn defaults_pass_cleanly() {
        let warnings =
            apply_guard_rails(&profile(SliderConfig::default())).unwrap();
        assert!(warnings.is_empty(), "{warnings:?}");
    }

    #[test]
    fn overlapping_clones_are_rejected() {
        let err = apply_guard_rails(&profile(SliderConfig {
            infinite: 5,
            ..SliderConfig::default()
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            ProfileGuardRailError::Slider(ConfigError::InfiniteOverlap { .. })
        ));
    }

    #[test]
    fn empty_ease_is_rejected() {
        let err = apply_guard_rails(&profile(SliderConfig {
            ease: "  ".into(),
            ..SliderConfig::default()
        }))
        .unwrap_err();
        assert!(matches!(err, ProfileGuardRailError::EmptyEase));
    }

    #[test]
    fn rewind_with_infinite_warns() {
        let warnings = apply_guard_rails(&profile(SliderConfig {
            infinite: 3,
            rewind: true,
            ..SliderConfig::default()
        }))
        .unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings.items[0].hint.as_deref(),
            Some("Use infinite or rewind, not both")
        );
    }

    #[test]
    fn short_clone_padding_warns() {
        let warnings = apply_guard_rails(&profile(SliderConfig {
            infinite: 1,
            ..SliderConfig::default()
        }))
        .unwrap();
        assert!(
            warnings
                .iter()
                .any(|w| w.message.contains("smaller than the 3 slides"))
        );
    }

    #[test]
    fn missing_count_only_runs_static_checks() {
        let warnings = apply_guard_rails(&SliderProfile {
            slider: SliderConfig {
                infinite: 40,
                slide_speed_ms: 0,
                ..SliderConfig::default()
            },
            ..SliderProfile::default()
        })
        .unwrap();
        assert_eq!(warnings.len(), 2);
    }
}
