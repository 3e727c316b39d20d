use std::{collections::HashMap, fs};

use slidetrack_config::{
    ProfileGuardRailError, ProfileLoadError, ProfileLoader, ProfileSource,
    SliderProfile,
};
use slidetrack_core::{ConfigError, Layout};
use tempfile::tempdir;

const TOML_PROFILE: &str = r#"
slide_count = 6

[slider]
infinite = 3
slide_speed_ms = 450

[layout]
frame_width_px = 600.0
slide_width_px = 200.0
"#;

fn lookup(vars: &[(&str, String)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn toml_file_is_loaded_by_extension() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("carousel.toml");
    fs::write(&path, TOML_PROFILE).expect("write profile");

    let profile = SliderProfile::load_from_file(&path).expect("load");
    assert_eq!(profile.slide_count, Some(6));
    assert_eq!(profile.slider.infinite, 3);
    assert_eq!(profile.slider.slide_speed_ms, 450);
    assert_eq!(profile.layout, Some(Layout::new(600.0, 200.0)));
}

#[test]
fn extensionless_file_falls_back_to_json() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("profile");
    fs::write(&path, r#"{"slider": {"rewind": true}, "slide_count": 3}"#)
        .expect("write profile");

    let profile = SliderProfile::load_from_file(&path).expect("load");
    assert!(profile.slider.rewind);
    assert_eq!(profile.slide_count, Some(3));
}

#[test]
fn invalid_json_file_names_the_path() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").expect("write profile");

    let err = SliderProfile::load_from_file(&path).expect_err("invalid");
    assert!(format!("{err:#}").contains("broken.json"));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let err = SliderProfile::load_from_file(&dir.path().join("absent.toml"))
        .expect_err("missing");
    assert!(err.to_string().contains("failed to read slider profile"));
}

#[test]
fn env_path_takes_precedence_over_inline_json() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("slider.toml");
    fs::write(&path, TOML_PROFILE).expect("write profile");

    let (profile, source) = SliderProfile::load_with(
        lookup(&[
            ("SLIDETRACK_CONFIG_PATH", path.display().to_string()),
            ("SLIDETRACK_CONFIG_JSON", r#"{"slide_count": 1}"#.into()),
        ]),
        dir.path(),
    )
    .expect("load");
    assert_eq!(source, ProfileSource::EnvPath(path));
    assert_eq!(profile.slide_count, Some(6));
}

#[test]
fn inline_json_is_used_when_no_path_is_set() {
    let dir = tempdir().expect("tempdir");
    let (profile, source) = SliderProfile::load_with(
        lookup(&[
            ("SLIDETRACK_CONFIG_PATH", "   ".into()),
            (
                "SLIDETRACK_CONFIG_JSON",
                r#"{"slider": {"slides_to_scroll": 2}}"#.into(),
            ),
        ]),
        dir.path(),
    )
    .expect("load");
    assert_eq!(source, ProfileSource::EnvInline);
    assert_eq!(profile.slider.slides_to_scroll, 2);
}

#[test]
fn default_candidate_file_is_discovered() {
    let dir = tempdir().expect("tempdir");
    fs::create_dir(dir.path().join("config")).expect("mkdir");
    let path = dir.path().join("config/slidetrack.toml");
    fs::write(&path, TOML_PROFILE).expect("write profile");

    let (profile, source) =
        SliderProfile::load_with(lookup(&[]), dir.path()).expect("load");
    assert_eq!(source, ProfileSource::File(path));
    assert_eq!(profile.slider.infinite, 3);
}

#[test]
fn nothing_configured_yields_defaults() {
    let dir = tempdir().expect("tempdir");
    let (profile, source) =
        SliderProfile::load_with(lookup(&[]), dir.path()).expect("load");
    assert_eq!(source, ProfileSource::Default);
    assert_eq!(profile, SliderProfile::default());
}

#[test]
fn loader_runs_guard_rails() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("slidetrack.toml");
    fs::write(
        &path,
        "slide_count = 2\n\n[slider]\ninitial_index = 4\n",
    )
    .expect("write profile");

    let err = ProfileLoader::with_path(&path).load().expect_err("rejected");
    assert!(matches!(
        err,
        ProfileLoadError::GuardRail(ProfileGuardRailError::Slider(
            ConfigError::InitialIndexOutOfRange { index: 4, slides: 2 }
        ))
    ));
}

#[test]
fn loader_reports_source_and_warnings() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("slidetrack.toml");
    fs::write(
        &path,
        "slide_count = 5\n\n[slider]\ninfinite = 1\nrewind = true\n",
    )
    .expect("write profile");

    let load = ProfileLoader::with_path(&path).load().expect("load");
    assert_eq!(load.source, ProfileSource::File(path));
    assert_eq!(load.warnings.len(), 1);
    assert!(load.warnings.items[0].message.contains("rewind"));
}
