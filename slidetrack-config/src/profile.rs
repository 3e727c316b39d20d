use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use slidetrack_core::{Layout, SliderConfig};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Environment variable naming a profile file.
pub const PROFILE_PATH_ENV: &str = "SLIDETRACK_CONFIG_PATH";
/// Environment variable carrying an inline JSON profile.
pub const PROFILE_JSON_ENV: &str = "SLIDETRACK_CONFIG_JSON";

const DEFAULT_CANDIDATES: &[&str] = &[
    "slidetrack.toml",
    "slidetrack.json",
    "config/slidetrack.toml",
    "config/slidetrack.json",
];

/// Source that produced the slider profile.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProfileSource {
    /// Nothing found; built-in defaults.
    #[default]
    Default,
    /// File named by `$SLIDETRACK_CONFIG_PATH`.
    EnvPath(PathBuf),
    /// JSON held in `$SLIDETRACK_CONFIG_JSON`.
    EnvInline,
    /// Explicit or well-known file.
    File(PathBuf),
}

/// Slider options plus the environment they are meant to run in.
///
/// ```toml
/// slide_count = 6
///
/// [slider]
/// infinite = 2
/// slides_to_scroll = 1
///
/// [layout]
/// frame_width_px = 600.0
/// slide_width_px = 200.0
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SliderProfile {
    /// Number of real slides. Enables the count-dependent checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide_count: Option<usize>,
    /// Engine options. Missing keys fall back to the engine defaults.
    pub slider: SliderConfig,
    /// Fixed frame and slide widths. Hosts that measure their own layout
    /// leave this out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
}

impl SliderProfile {
    /// Load a profile using environment variables.
    /// Evaluation order:
    /// 1) `$SLIDETRACK_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$SLIDETRACK_CONFIG_JSON` (inline JSON),
    /// 3) the first default file found in the working directory,
    /// 4) defaults if none of the above exist.
    pub fn load_from_env() -> anyhow::Result<(Self, ProfileSource)> {
        Self::load_with(|key| env::var(key).ok(), Path::new("."))
    }

    /// [`load_from_env`](Self::load_from_env) with an explicit variable
    /// lookup and the directory searched for default files.
    pub fn load_with<F>(
        lookup: F,
        root: &Path,
    ) -> anyhow::Result<(Self, ProfileSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path_str) = lookup(PROFILE_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let profile = Self::load_from_file(&path)?;
            return Ok((profile, ProfileSource::EnvPath(path)));
        }

        if let Some(raw) = lookup(PROFILE_JSON_ENV)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw).with_context(|| {
                format!("failed to parse {PROFILE_JSON_ENV}")
            })?;
            return Ok((parsed, ProfileSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file(root) {
            let profile = Self::load_from_file(&path)?;
            return Ok((profile, ProfileSource::File(path)));
        }

        Ok((Self::default(), ProfileSource::Default))
    }

    /// Parse a profile file, picking the format from the extension.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read slider profile from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid slider profile {}", path.display())
            }),
            Some("toml") | Some("tml") => {
                toml::from_str(&contents).map_err(|err| {
                    anyhow!(
                        "invalid slider profile {}: {}",
                        path.display(),
                        err
                    )
                })
            }
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    /// Parse a profile of unknown format.
    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        // TOML first, then JSON.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse slider profile {}: toml error: {}; \
                     json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    /// Parse a JSON profile.
    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid slider profile json: {err}"))
    }

    /// Render the profile as TOML.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string(self).context("failed to serialize slider profile")
    }

    fn find_default_file(root: &Path) -> Option<PathBuf> {
        DEFAULT_CANDIDATES
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_the_default_profile() {
        let profile = SliderProfile::parse_from_str("", "inline").unwrap();
        assert_eq!(profile, SliderProfile::default());
        assert_eq!(profile.slider.slide_speed_ms, 300);
    }

    #[test]
    fn toml_tables_map_onto_the_profile() {
        let raw = r#"
slide_count = 6

[slider]
infinite = 2
ease = "cubic-bezier(0.455, 0.03, 0.515, 0.955)"

[layout]
frame_width_px = 600.0
slide_width_px = 200.0
"#;
        let profile = SliderProfile::parse_from_str(raw, "inline").unwrap();
        assert_eq!(profile.slide_count, Some(6));
        assert_eq!(profile.slider.infinite, 2);
        assert_eq!(profile.slider.slides_to_scroll, 1);
        assert_eq!(profile.layout, Some(Layout::new(600.0, 200.0)));
    }

    #[test]
    fn legacy_rewind_prev_key_is_accepted() {
        let profile =
            SliderProfile::parse_json(r#"{"slider": {"rewind_prev": true}}"#)
                .unwrap();
        assert!(profile.slider.rewind_on_boundary);
    }

    #[test]
    fn unparseable_input_reports_both_formats() {
        let err = SliderProfile::parse_from_str("slider = [", "broken")
            .unwrap_err()
            .to_string();
        assert!(err.contains("broken"));
        assert!(err.contains("toml error"));
        assert!(err.contains("json error"));
    }

    #[test]
    fn toml_round_trip_keeps_options() {
        let profile = SliderProfile {
            slider: SliderConfig {
                rewind: true,
                slides_to_scroll: 2,
                ..SliderConfig::default()
            },
            slide_count: Some(4),
            layout: None,
        };
        let rendered = profile.to_toml().unwrap();
        let parsed =
            SliderProfile::parse_from_str(&rendered, "rendered").unwrap();
        assert_eq!(parsed, profile);
    }
}
