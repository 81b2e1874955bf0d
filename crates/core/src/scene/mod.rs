//! Navigation state the gesture commands act on.
//!
//! Rendering lives outside this crate; the scene module only tracks which
//! body the camera follows, the zoom/speed modifiers and the overview flag,
//! applying the transition each dispatched [`Action`] asks for.

use serde::{Deserialize, Serialize};

use crate::catalog::SolarSystem;
use crate::dispatch::Action;

/// Neutral zoom level: the camera frames the tracked body normally.
pub const ZOOM_NORMAL: f32 = 1.0;
/// Neutral orbital speed multiplier.
pub const SPEED_NORMAL: f32 = 1.0;

/// Engaged zoom level while a closed fist is held.
pub const FAST_ZOOM: f32 = 2.0;
/// Engaged speed multiplier while a closed fist is held.
pub const FAST_SPEED: f32 = 3.0;

/// Camera/navigation state for one capture session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    active_planet: usize,
    zoom: f32,
    speed: f32,
    overview: bool,
    fast_zoom: f32,
    fast_speed: f32,
}

impl ViewState {
    /// Starts in planet view on the given catalog index with neutral
    /// modifiers and the stock engaged values.
    pub fn new(start_planet: usize) -> Self {
        Self::with_modifiers(start_planet, FAST_ZOOM, FAST_SPEED)
    }

    pub fn with_modifiers(start_planet: usize, fast_zoom: f32, fast_speed: f32) -> Self {
        Self {
            active_planet: start_planet,
            zoom: ZOOM_NORMAL,
            speed: SPEED_NORMAL,
            overview: false,
            fast_zoom,
            fast_speed,
        }
    }

    /// Catalog index of the body the camera follows.
    pub fn active_planet(&self) -> usize {
        self.active_planet
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn overview(&self) -> bool {
        self.overview
    }

    /// Applies one dispatched command.
    pub fn apply(&mut self, action: Action, catalog: &SolarSystem) {
        match action {
            Action::AdvancePlanet => {
                // Selecting the next body always lands back in planet view.
                self.overview = false;
                self.advance_planet(catalog);
                self.reset_modifiers();
            }
            Action::ToggleOverview => {
                self.overview = !self.overview;
                self.reset_modifiers();
            }
            Action::SetFastZoom => {
                // Zooming in exits overview.
                self.overview = false;
                self.zoom = self.fast_zoom;
                self.speed = self.fast_speed;
            }
        }
    }

    fn advance_planet(&mut self, catalog: &SolarSystem) {
        let cycle = catalog.orbiting_indices();
        if cycle.is_empty() {
            return;
        }

        // A current index outside the cycle (the star, or a stale catalog)
        // resumes from the first orbiting body.
        self.active_planet = match cycle.iter().position(|&idx| idx == self.active_planet) {
            Some(pos) => cycle[(pos + 1) % cycle.len()],
            None => cycle[0],
        };
    }

    fn reset_modifiers(&mut self) {
        self.zoom = ZOOM_NORMAL;
        self.speed = SPEED_NORMAL;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> SolarSystem {
        SolarSystem::standard()
    }

    #[test]
    fn advance_cycles_and_wraps_over_orbiting_bodies() {
        let catalog = catalog();
        let last = catalog.len() - 1;
        let mut view = ViewState::new(last);

        view.apply(Action::AdvancePlanet, &catalog);
        assert_eq!(view.active_planet(), 1);
    }

    #[test]
    fn advance_never_lands_on_the_star() {
        let catalog = catalog();
        let mut view = ViewState::new(3);

        for _ in 0..(2 * catalog.len()) {
            view.apply(Action::AdvancePlanet, &catalog);
            assert_ne!(view.active_planet(), 0);
        }
    }

    #[test]
    fn advance_from_the_star_enters_the_cycle() {
        let catalog = catalog();
        let mut view = ViewState::new(0);

        view.apply(Action::AdvancePlanet, &catalog);
        assert_eq!(view.active_planet(), 1);
    }

    #[test]
    fn advance_resets_modifiers_and_exits_overview() {
        let catalog = catalog();
        let mut view = ViewState::new(3);
        view.apply(Action::SetFastZoom, &catalog);
        view.apply(Action::ToggleOverview, &catalog);
        assert!(view.overview());

        view.apply(Action::AdvancePlanet, &catalog);
        assert!(!view.overview());
        assert_eq!(view.zoom(), ZOOM_NORMAL);
        assert_eq!(view.speed(), SPEED_NORMAL);
    }

    #[test]
    fn toggle_flips_overview_and_resets_modifiers() {
        let catalog = catalog();
        let mut view = ViewState::new(3);
        view.apply(Action::SetFastZoom, &catalog);

        view.apply(Action::ToggleOverview, &catalog);
        assert!(view.overview());
        assert_eq!(view.zoom(), ZOOM_NORMAL);

        view.apply(Action::ToggleOverview, &catalog);
        assert!(!view.overview());
    }

    #[test]
    fn fist_engages_fast_modifiers_and_exits_overview() {
        let catalog = catalog();
        let mut view = ViewState::new(3);
        view.apply(Action::ToggleOverview, &catalog);

        view.apply(Action::SetFastZoom, &catalog);
        assert!(!view.overview());
        assert_eq!(view.zoom(), FAST_ZOOM);
        assert_eq!(view.speed(), FAST_SPEED);

        // Holding the fist re-applies the same values.
        view.apply(Action::SetFastZoom, &catalog);
        assert_eq!(view.zoom(), FAST_ZOOM);
    }
}
