//! Scripted slider sessions.
//!
//! A script is a list of steps, written either as TOML (`[[steps]]` tables)
//! or JSON (an object with a `steps` array, or the bare array):
//!
//! ```toml
//! [[steps]]
//! action = "next"
//!
//! [[steps]]
//! action = "begin"
//! x = 300.0
//! y = 10.0
//! t_ms = 1000
//! ```

use std::{fs, path::Path};

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use slidetrack_core::PointerSample;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ReplayStep {
    Next,
    Prev,
    SlideTo {
        index: usize,
    },
    Begin {
        x: f32,
        y: f32,
        #[serde(default)]
        t_ms: u64,
        #[serde(default)]
        mouse: bool,
    },
    Move {
        x: f32,
        y: f32,
        #[serde(default)]
        t_ms: u64,
    },
    End {
        x: f32,
        y: f32,
        #[serde(default)]
        t_ms: u64,
    },
    Cancel,
    TransitionEnd,
    Resize {
        frame_width_px: f32,
        slide_width_px: f32,
        #[serde(default)]
        t_ms: Option<u64>,
    },
}

impl ReplayStep {
    pub fn name(&self) -> &'static str {
        match self {
            ReplayStep::Next => "next",
            ReplayStep::Prev => "prev",
            ReplayStep::SlideTo { .. } => "slide_to",
            ReplayStep::Begin { .. } => "begin",
            ReplayStep::Move { .. } => "move",
            ReplayStep::End { .. } => "end",
            ReplayStep::Cancel => "cancel",
            ReplayStep::TransitionEnd => "transition_end",
            ReplayStep::Resize { .. } => "resize",
        }
    }

    /// Session time carried by the step, if any.
    pub fn timestamp_ms(&self) -> Option<u64> {
        match *self {
            ReplayStep::Begin { t_ms, .. }
            | ReplayStep::Move { t_ms, .. }
            | ReplayStep::End { t_ms, .. } => Some(t_ms),
            ReplayStep::Resize { t_ms, .. } => t_ms,
            _ => None,
        }
    }

    /// The pointer sample of a gesture step. Moves and ends inherit the
    /// source of the gesture's begin.
    pub fn sample(&self, mouse: bool) -> Option<PointerSample> {
        let (x, y, t_ms, mouse) = match *self {
            ReplayStep::Begin { x, y, t_ms, mouse } => (x, y, t_ms, mouse),
            ReplayStep::Move { x, y, t_ms }
            | ReplayStep::End { x, y, t_ms } => (x, y, t_ms, mouse),
            _ => return None,
        };
        Some(if mouse {
            PointerSample::mouse(x, y, t_ms)
        } else {
            PointerSample::touch(x, y, t_ms)
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Script {
    #[serde(default)]
    pub steps: Vec<ReplayStep>,
}

impl Script {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read replay script {}", path.display())
        })?;
        Self::parse(&contents, &path.display().to_string())
    }

    pub fn parse(contents: &str, origin: &str) -> anyhow::Result<Self> {
        if let Ok(script) = toml::from_str::<Script>(contents) {
            return Ok(script);
        }
        serde_json::from_str::<Script>(contents)
            .or_else(|_| {
                serde_json::from_str::<Vec<ReplayStep>>(contents)
                    .map(|steps| Script { steps })
            })
            .map_err(|err| anyhow!("invalid replay script {origin}: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidetrack_core::gesture::PointerSource;

    #[test]
    fn toml_steps_parse() {
        let script = Script::parse(
            r#"
[[steps]]
action = "slide_to"
index = 3

[[steps]]
action = "begin"
x = 10.0
y = 0.0
mouse = true

[[steps]]
action = "transition_end"
"#,
            "inline",
        )
        .unwrap();
        assert_eq!(
            script.steps,
            vec![
                ReplayStep::SlideTo { index: 3 },
                ReplayStep::Begin {
                    x: 10.0,
                    y: 0.0,
                    t_ms: 0,
                    mouse: true
                },
                ReplayStep::TransitionEnd,
            ]
        );
    }

    #[test]
    fn bare_json_array_parses() {
        let script = Script::parse(
            r#"[
                {"action": "next"},
                {"action": "resize", "frame_width_px": 300,
                 "slide_width_px": 100, "t_ms": 500}
            ]"#,
            "inline",
        )
        .unwrap();
        assert_eq!(script.steps.len(), 2);
        assert_eq!(script.steps[1].timestamp_ms(), Some(500));
    }

    #[test]
    fn unknown_action_is_rejected() {
        let err =
            Script::parse(r#"[{"action": "fling"}]"#, "inline").unwrap_err();
        assert!(err.to_string().contains("inline"));
    }

    #[test]
    fn gesture_samples_inherit_the_begin_source() {
        let step = ReplayStep::Move {
            x: 1.0,
            y: 2.0,
            t_ms: 30,
        };
        assert_eq!(step.sample(true).unwrap().source, PointerSource::Mouse);
        assert_eq!(step.sample(false).unwrap().source, PointerSource::Touch);
        assert!(ReplayStep::Next.sample(false).is_none());
    }

    #[test]
    fn scripts_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        fs::write(
            &path,
            "[[steps]]\naction = \"next\"\n\n[[steps]]\naction = \"cancel\"\n",
        )
        .unwrap();
        let script = Script::load(&path).unwrap();
        assert_eq!(script.steps, vec![ReplayStep::Next, ReplayStep::Cancel]);

        let missing = dir.path().join("missing.toml");
        let err = Script::load(&missing).unwrap_err();
        assert!(err.to_string().contains("missing.toml"));
    }
}
