//! Per-session facade tying detector output to the navigation state.
//!
//! One [`GestureSession`] lives for the duration of a capture session. The
//! host feeds it one [`ObservedFrame`] per video frame from its render
//! loop; the session gates out stale frames, classifies the hand,
//! dispatches and applies the resulting command. Every method takes
//! `&mut self`: a host that captures frames off-thread has to funnel calls
//! back onto a single logical thread before touching the session.

use std::time::Duration;

use crate::catalog::SolarSystem;
use crate::classifier::{classify, Gesture};
use crate::config::AppConfig;
use crate::dispatch::{Action, GestureDispatcher};
use crate::landmark::{HandFrame, Landmark};
use crate::scene::ViewState;
use crate::Result;

/// Detector output for a single video frame.
#[derive(Debug, Clone)]
pub struct ObservedFrame {
    /// Source timestamp of the video frame, in seconds. A frame repeating
    /// the previous timestamp is dropped without reprocessing.
    pub source_time: f64,
    /// The detected hand in schema order, or `None` when no hand was
    /// visible this frame.
    pub hand: Option<Vec<Landmark>>,
}

/// What one processed frame produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    pub gesture: Gesture,
    pub action: Option<Action>,
}

/// Session state: dispatcher timing, navigation state and the frame gate.
#[derive(Debug)]
pub struct GestureSession {
    catalog: SolarSystem,
    dispatcher: GestureDispatcher,
    view: ViewState,
    last_source_time: Option<f64>,
}

impl GestureSession {
    pub fn new() -> Self {
        Self::with_config(&AppConfig::default())
    }

    pub fn with_config(config: &AppConfig) -> Self {
        Self::with_catalog(SolarSystem::standard(), config)
    }

    pub fn with_catalog(catalog: SolarSystem, config: &AppConfig) -> Self {
        let control = &config.control;
        Self {
            catalog,
            dispatcher: GestureDispatcher::with_cooldown(control.cooldown()),
            view: ViewState::with_modifiers(
                control.start_planet,
                control.fast_zoom,
                control.fast_speed,
            ),
            last_source_time: None,
        }
    }

    /// Processes one captured frame.
    ///
    /// Returns `Ok(None)` when the frame repeats the previous source
    /// timestamp and was skipped whole, leaving classifier and dispatcher
    /// untouched. A detector that reports no hand degrades to
    /// [`Gesture::None`] without invoking the classifier.
    pub fn process(&mut self, frame: &ObservedFrame, now: Duration) -> Result<Option<FrameTick>> {
        if self.last_source_time == Some(frame.source_time) {
            return Ok(None);
        }
        self.last_source_time = Some(frame.source_time);

        let gesture = match &frame.hand {
            Some(points) => classify(&HandFrame::from_slice(points)?),
            None => Gesture::None,
        };

        let action = self.dispatcher.on_frame(gesture, now);
        if let Some(action) = action {
            self.view.apply(action, &self.catalog);
        }

        Ok(Some(FrameTick { gesture, action }))
    }

    /// The most recent classification, for UI feedback.
    pub fn last_observed(&self) -> Gesture {
        self.dispatcher.last_observed()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn catalog(&self) -> &SolarSystem {
        &self.catalog
    }

    /// Name of the body the camera currently follows.
    pub fn active_planet_name(&self) -> &str {
        self.catalog
            .body(self.view.active_planet())
            .map(|body| body.name.as_str())
            .unwrap_or("")
    }
}

impl Default for GestureSession {
    fn default() -> Self {
        Self::new()
    }
}
