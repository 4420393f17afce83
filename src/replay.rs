//! Scripted pointer input.
//!
//! A replay script stands in for an interactive presentation layer: it lists
//! pointer, tool, and clear events in client coordinates, which are turned
//! into [`InputEvent`]s and fed through a session exactly as live input
//! would be.
//!
//! ```json
//! {
//!   "display": { "left": 0, "top": 0, "width": 400, "height": 300 },
//!   "events": [
//!     { "type": "tool", "tool": "polygon" },
//!     { "type": "press", "x": 10, "y": 10, "t": 0 },
//!     { "type": "press", "x": 90, "y": 10, "t": 1000 },
//!     { "type": "press", "x": 50, "y": 80, "t": 2000 },
//!     { "type": "press", "x": 50, "y": 80, "t": 2150 }
//!   ]
//! }
//! ```

use crate::input::{DisplayRect, InputEvent, MouseButton, Tool};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Gap assumed before a press that carries no explicit timestamp.
///
/// Longer than any allowed double-click window, so untimed presses never
/// complete a polygon by accident.
const UNTIMED_PRESS_GAP: Duration = Duration::from_secs(5);

/// Errors that can occur while reading a replay script.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read replay script {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid replay script: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A parsed replay script.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplayScript {
    /// Display box for all events; defaults to the buffer shown unscaled
    #[serde(default)]
    pub display: Option<DisplayRect>,
    pub events: Vec<ReplayEvent>,
}

/// One scripted event. Positions are client coordinates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", deny_unknown_fields)]
pub enum ReplayEvent {
    Press {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
        /// Milliseconds since the start of the script
        #[serde(default)]
        t: Option<u64>,
        #[serde(default)]
        display: Option<DisplayRect>,
    },
    Motion {
        x: f64,
        y: f64,
        #[serde(default)]
        display: Option<DisplayRect>,
    },
    Release {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
        #[serde(default)]
        display: Option<DisplayRect>,
    },
    Tool {
        tool: Tool,
    },
    Clear,
}

impl ReplayScript {
    /// Converts the script into session input for a `width`x`height` buffer.
    ///
    /// Presses without a timestamp are placed well after the previous press.
    pub fn into_events(self, buffer_width: u32, buffer_height: u32) -> Vec<InputEvent> {
        let default_display = self
            .display
            .unwrap_or_else(|| DisplayRect::identity(buffer_width, buffer_height));
        let mut clock: Option<Duration> = None;

        self.events
            .into_iter()
            .map(|event| match event {
                ReplayEvent::Press {
                    x,
                    y,
                    button,
                    t,
                    display,
                } => {
                    let timestamp = match t {
                        Some(ms) => Duration::from_millis(ms),
                        None => clock.map_or(Duration::ZERO, |prev| prev + UNTIMED_PRESS_GAP),
                    };
                    clock = Some(timestamp);
                    InputEvent::Press {
                        button,
                        client_x: x,
                        client_y: y,
                        display: display.unwrap_or(default_display),
                        timestamp,
                    }
                }
                ReplayEvent::Motion { x, y, display } => InputEvent::Motion {
                    client_x: x,
                    client_y: y,
                    display: display.unwrap_or(default_display),
                },
                ReplayEvent::Release {
                    x,
                    y,
                    button,
                    display,
                } => InputEvent::Release {
                    button,
                    client_x: x,
                    client_y: y,
                    display: display.unwrap_or(default_display),
                },
                ReplayEvent::Tool { tool } => InputEvent::SetTool(tool),
                ReplayEvent::Clear => InputEvent::Clear,
            })
            .collect()
    }
}

/// Parses a replay script from JSON text.
pub fn parse_script(json: &str) -> Result<ReplayScript, ReplayError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses the replay script at `path`.
pub fn load_script(path: &Path) -> Result<ReplayScript, ReplayError> {
    let json = fs::read_to_string(path).map_err(|source| ReplayError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_event_kinds() {
        let script = parse_script(
            r#"{
                "events": [
                    { "type": "tool", "tool": "circle" },
                    { "type": "press", "x": 1, "y": 2, "t": 40 },
                    { "type": "motion", "x": 3, "y": 4 },
                    { "type": "release", "x": 5, "y": 6, "button": "right" },
                    { "type": "clear" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(script.events.len(), 5);
        assert_eq!(script.events[0], ReplayEvent::Tool { tool: Tool::Circle });
        assert_eq!(script.events[4], ReplayEvent::Clear);
        assert!(matches!(
            script.events[3],
            ReplayEvent::Release {
                button: MouseButton::Right,
                ..
            }
        ));
    }

    #[test]
    fn rejects_unknown_events_and_tools() {
        assert!(parse_script(r#"{ "events": [ { "type": "wheel", "x": 1, "y": 1 } ] }"#).is_err());
        assert!(parse_script(r#"{ "events": [ { "type": "tool", "tool": "lasso" } ] }"#).is_err());
        assert!(parse_script(r#"{ "events": [ { "type": "press", "x": 1 } ] }"#).is_err());
        assert!(matches!(parse_script("not json"), Err(ReplayError::Parse(_))));
    }

    #[test]
    fn default_display_matches_buffer() {
        let script = parse_script(r#"{ "events": [ { "type": "motion", "x": 1, "y": 2 } ] }"#)
            .unwrap();
        let events = script.into_events(64, 32);
        assert_eq!(
            events,
            vec![InputEvent::Motion {
                client_x: 1.0,
                client_y: 2.0,
                display: DisplayRect::new(0.0, 0.0, 64.0, 32.0),
            }]
        );
    }

    #[test]
    fn per_event_display_overrides_script_display() {
        let script = parse_script(
            r#"{
                "display": { "left": 5, "top": 5, "width": 10, "height": 10 },
                "events": [
                    { "type": "release", "x": 1, "y": 2 },
                    { "type": "release", "x": 1, "y": 2,
                      "display": { "left": 0, "top": 0, "width": 1, "height": 1 } }
                ]
            }"#,
        )
        .unwrap();
        let events = script.into_events(64, 32);
        let displays: Vec<DisplayRect> = events
            .iter()
            .map(|event| match event {
                InputEvent::Release { display, .. } => *display,
                other => panic!("unexpected event {other:?}"),
            })
            .collect();
        assert_eq!(displays[0], DisplayRect::new(5.0, 5.0, 10.0, 10.0));
        assert_eq!(displays[1], DisplayRect::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn untimed_presses_are_spaced_apart() {
        let script = parse_script(
            r#"{ "events": [
                { "type": "press", "x": 0, "y": 0 },
                { "type": "press", "x": 0, "y": 0, "t": 100 },
                { "type": "press", "x": 0, "y": 0 }
            ] }"#,
        )
        .unwrap();
        let timestamps: Vec<Duration> = script
            .into_events(10, 10)
            .into_iter()
            .filter_map(|event| match event {
                InputEvent::Press { timestamp, .. } => Some(timestamp),
                _ => None,
            })
            .collect();
        assert_eq!(
            timestamps,
            vec![
                Duration::ZERO,
                Duration::from_millis(100),
                Duration::from_millis(100) + UNTIMED_PRESS_GAP
            ]
        );
    }

    #[test]
    fn load_script_reports_missing_file() {
        let err = load_script(Path::new("/nonexistent/colorlasso/script.json")).unwrap_err();
        assert!(matches!(err, ReplayError::Io { .. }));
    }
}
