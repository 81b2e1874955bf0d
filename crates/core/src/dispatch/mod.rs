//! Turns the noisy per-frame gesture stream into discrete commands.
//!
//! Open hand and victory are one-shot triggers: holding the gesture across
//! consecutive frames must not fire the command again, so both share a
//! single cooldown window. A closed fist is level-triggered and re-fires
//! every frame it is held, keeping the zoom state glued to the hand.

use std::time::Duration;

use crate::Gesture;

/// Minimum elapsed time between two accepted one-shot gesture actions.
pub const GESTURE_COOLDOWN: Duration = Duration::from_millis(1000);

/// Application command emitted by the dispatcher and consumed by the
/// navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Advance the cyclic planet index and reset the view modifiers.
    AdvancePlanet,
    /// Flip the overview flag and reset the view modifiers.
    ToggleOverview,
    /// Engage the fast zoom/speed modifiers. Idempotent while held.
    SetFastZoom,
}

/// Per-session dispatch state.
///
/// One instance lives for the duration of a capture session and must be
/// driven from a single logical thread;
/// [`on_frame`](GestureDispatcher::on_frame) takes `&mut self`, so
/// concurrent dispatch does not compile.
#[derive(Debug, Clone)]
pub struct GestureDispatcher {
    cooldown: Duration,
    last_action: Option<Duration>,
    last_observed: Gesture,
}

impl GestureDispatcher {
    pub fn new() -> Self {
        Self::with_cooldown(GESTURE_COOLDOWN)
    }

    pub fn with_cooldown(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_action: None,
            last_observed: Gesture::None,
        }
    }

    /// Consumes one classified frame and emits at most one command.
    ///
    /// `now` is the offset from an arbitrary session epoch, injected by the
    /// caller so tests and replays run on synthetic clocks. Call once per
    /// fresh video frame; stale-frame de-duplication happens upstream.
    pub fn on_frame(&mut self, gesture: Gesture, now: Duration) -> Option<Action> {
        self.last_observed = gesture;

        match gesture {
            Gesture::OpenHand => self.fire_one_shot(Action::AdvancePlanet, now),
            Gesture::Victory => self.fire_one_shot(Action::ToggleOverview, now),
            // Level-triggered: never consults or advances the cooldown.
            Gesture::ClosedFist => Some(Action::SetFastZoom),
            Gesture::None => None,
        }
    }

    /// The most recent classification, updated on every call whether or not
    /// an action fired. Display-only feedback for the UI layer.
    pub fn last_observed(&self) -> Gesture {
        self.last_observed
    }

    fn fire_one_shot(&mut self, action: Action, now: Duration) -> Option<Action> {
        let ready = match self.last_action {
            Some(last) => now.saturating_sub(last) > self.cooldown,
            // Nothing accepted yet, so the very first detection fires.
            None => true,
        };

        if !ready {
            return None;
        }

        self.last_action = Some(now);
        Some(action)
    }
}

impl Default for GestureDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn first_detection_fires_immediately() {
        let mut dispatcher = GestureDispatcher::new();
        assert_eq!(
            dispatcher.on_frame(Gesture::OpenHand, ms(0)),
            Some(Action::AdvancePlanet)
        );
    }

    #[test]
    fn open_hand_respects_the_cooldown() {
        let mut dispatcher = GestureDispatcher::new();
        assert_eq!(
            dispatcher.on_frame(Gesture::OpenHand, ms(0)),
            Some(Action::AdvancePlanet)
        );
        assert_eq!(dispatcher.on_frame(Gesture::OpenHand, ms(500)), None);
        assert_eq!(
            dispatcher.on_frame(Gesture::OpenHand, ms(1001)),
            Some(Action::AdvancePlanet)
        );
    }

    #[test]
    fn exact_cooldown_boundary_stays_suppressed() {
        let mut dispatcher = GestureDispatcher::new();
        dispatcher.on_frame(Gesture::OpenHand, ms(0));
        assert_eq!(dispatcher.on_frame(Gesture::OpenHand, ms(1000)), None);
    }

    #[test]
    fn one_shot_gestures_share_one_window() {
        let mut dispatcher = GestureDispatcher::new();
        assert_eq!(
            dispatcher.on_frame(Gesture::OpenHand, ms(0)),
            Some(Action::AdvancePlanet)
        );
        assert_eq!(dispatcher.on_frame(Gesture::Victory, ms(500)), None);
        assert_eq!(
            dispatcher.on_frame(Gesture::Victory, ms(1200)),
            Some(Action::ToggleOverview)
        );
        assert_eq!(dispatcher.on_frame(Gesture::OpenHand, ms(1300)), None);
    }

    #[test]
    fn closed_fist_is_level_triggered() {
        let mut dispatcher = GestureDispatcher::new();
        for now in [0, 10, 20] {
            assert_eq!(
                dispatcher.on_frame(Gesture::ClosedFist, ms(now)),
                Some(Action::SetFastZoom)
            );
        }
    }

    #[test]
    fn closed_fist_leaves_the_window_untouched() {
        let mut dispatcher = GestureDispatcher::new();
        dispatcher.on_frame(Gesture::OpenHand, ms(0));
        dispatcher.on_frame(Gesture::ClosedFist, ms(100));
        // Still inside the window opened at t=0; the fist did not reset it.
        assert_eq!(dispatcher.on_frame(Gesture::OpenHand, ms(500)), None);
        assert_eq!(
            dispatcher.on_frame(Gesture::OpenHand, ms(1001)),
            Some(Action::AdvancePlanet)
        );
    }

    #[test]
    fn suppressed_detection_still_updates_last_observed() {
        let mut dispatcher = GestureDispatcher::new();
        dispatcher.on_frame(Gesture::OpenHand, ms(0));
        assert_eq!(dispatcher.on_frame(Gesture::OpenHand, ms(100)), None);
        assert_eq!(dispatcher.last_observed(), Gesture::OpenHand);

        assert_eq!(dispatcher.on_frame(Gesture::None, ms(200)), None);
        assert_eq!(dispatcher.last_observed(), Gesture::None);
    }
}
