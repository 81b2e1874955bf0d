use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration structure for the application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub capture: CaptureConfig,
    pub control: ControlConfig,
}

/// Webcam capture parameters handed to the landmark detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    pub width: u32,
    pub height: u32,
    /// The preview is mirrored so the hand moves the way the user expects.
    pub mirror: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            mirror: true,
        }
    }
}

/// Gesture-to-navigation policy values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlConfig {
    /// Cooldown between accepted one-shot gestures, in milliseconds.
    pub cooldown_ms: u64,
    /// Catalog index the camera follows at session start.
    pub start_planet: usize,
    /// Zoom level while a closed fist is held.
    pub fast_zoom: f32,
    /// Orbital speed multiplier while a closed fist is held.
    pub fast_speed: f32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: 1000,
            // Earth.
            start_planet: 3,
            fast_zoom: 2.0,
            fast_speed: 3.0,
        }
    }
}

impl ControlConfig {
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }
}
