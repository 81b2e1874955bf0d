//! Landmark stream persistence.
//!
//! A recording is the raw detector output of a capture session: one entry
//! per video frame with its source timestamp and the hand landmarks, if
//! any. Recordings replay deterministically through a
//! [`GestureSession`](crate::session::GestureSession), which turns captured
//! gesture traces into offline fixtures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::landmark::Landmark;
use crate::session::ObservedFrame;
use crate::Result;

/// One captured video frame worth of detector output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedFrame {
    /// Seconds since the start of the capture.
    pub time: f32,
    /// 21 `[x, y, z]` points in schema order, or absent for a frame where
    /// no hand was visible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hand: Option<Vec<[f32; 3]>>,
}

impl RecordedFrame {
    /// Converts into session input. The 21-point schema is enforced later,
    /// when the session builds its hand frame.
    pub fn to_observed(&self) -> ObservedFrame {
        ObservedFrame {
            source_time: f64::from(self.time),
            hand: self
                .hand
                .as_ref()
                .map(|points| points.iter().copied().map(Landmark::from).collect()),
        }
    }
}

/// A full capture session's landmark stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    pub frames: Vec<RecordedFrame>,
}

impl Recording {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_recorded_stream() {
        let json = r#"{
            "frames": [
                { "time": 0.0 },
                { "time": 0.033, "hand": [[0.5, 0.9, 0.0]] }
            ]
        }"#;

        let recording: Recording = serde_json::from_str(json).unwrap();
        assert_eq!(recording.frames.len(), 2);
        assert!(recording.frames[0].hand.is_none());
        assert_eq!(recording.frames[1].hand.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn converts_into_session_frames() {
        let frame = RecordedFrame {
            time: 1.5,
            hand: Some(vec![[0.1, 0.2, 0.3]]),
        };

        let observed = frame.to_observed();
        assert_eq!(observed.source_time, 1.5);
        let hand = observed.hand.unwrap();
        assert_eq!(hand[0], Landmark::new(0.1, 0.2, 0.3));

        let empty = RecordedFrame {
            time: 2.0,
            hand: None,
        };
        assert!(empty.to_observed().hand.is_none());
    }

    #[test]
    fn survives_a_save_and_load_cycle() {
        let recording = Recording {
            frames: vec![
                RecordedFrame {
                    time: 0.0,
                    hand: None,
                },
                RecordedFrame {
                    time: 0.033,
                    hand: Some(vec![[0.5, 0.9, 0.0]; 21]),
                },
            ],
        };

        let dir = std::env::temp_dir().join("gesture-orrery-recording-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("trace.json");

        recording.save(&path).unwrap();
        let back = Recording::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(back, recording);
    }
}
