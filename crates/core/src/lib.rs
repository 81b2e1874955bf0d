//! Core library for the Gesture Orrery application.
//!
//! The crate turns a stream of per-frame hand landmarks into navigation
//! commands for a 3D solar-system scene. Each module owns a distinct
//! subsystem: the landmark schema, the geometric gesture classifier, the
//! debouncing dispatcher, the navigation state it drives, the declarative
//! body catalog, landmark recordings and the session facade that ties them
//! to a capture loop. Rendering and the hand-landmark detector itself live
//! outside this crate.

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod landmark;
pub mod recording;
pub mod scene;
pub mod session;

pub use catalog::{PlanetConfig, PlanetStats, SolarSystem, TextureKind};
pub use classifier::{classify, Gesture};
pub use config::{AppConfig, CaptureConfig, ControlConfig};
pub use dispatch::{Action, GestureDispatcher, GESTURE_COOLDOWN};
pub use error::{OrreryError, Result};
pub use landmark::{HandFrame, Landmark, LANDMARKS_PER_HAND};
pub use recording::{RecordedFrame, Recording};
pub use scene::ViewState;
pub use session::{FrameTick, GestureSession, ObservedFrame};
