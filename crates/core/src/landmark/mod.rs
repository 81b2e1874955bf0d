use serde::{Deserialize, Serialize};

use crate::{OrreryError, Result};

/// Number of tracked points in a single hand observation.
pub const LANDMARKS_PER_HAND: usize = 21;

/// Landmark indices following the fixed anatomical schema of the hand
/// tracking model. Index 0 is always the wrist, which every extension test
/// measures against.
pub mod index {
    pub const WRIST: usize = 0;
    pub const THUMB_CMC: usize = 1;
    pub const THUMB_MCP: usize = 2;
    pub const THUMB_IP: usize = 3;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_MCP: usize = 5;
    pub const INDEX_PIP: usize = 6;
    pub const INDEX_DIP: usize = 7;
    pub const INDEX_TIP: usize = 8;
    pub const MIDDLE_MCP: usize = 9;
    pub const MIDDLE_PIP: usize = 10;
    pub const MIDDLE_DIP: usize = 11;
    pub const MIDDLE_TIP: usize = 12;
    pub const RING_MCP: usize = 13;
    pub const RING_PIP: usize = 14;
    pub const RING_DIP: usize = 15;
    pub const RING_TIP: usize = 16;
    pub const PINKY_MCP: usize = 17;
    pub const PINKY_PIP: usize = 18;
    pub const PINKY_DIP: usize = 19;
    pub const PINKY_TIP: usize = 20;
}

/// A single tracked point on a hand in normalized image coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// X coordinate, 0.0–1.0 relative to image width.
    pub x: f32,
    /// Y coordinate, 0.0–1.0 relative to image height.
    pub y: f32,
    /// Depth relative to the wrist. Unused by classification.
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<[f32; 3]> for Landmark {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

/// One hand observation: exactly 21 landmarks in schema order.
///
/// Constructing a `HandFrame` is the point where the 21-point guarantee is
/// enforced; everything downstream is total over it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandFrame {
    points: [Landmark; LANDMARKS_PER_HAND],
}

impl HandFrame {
    pub fn new(points: [Landmark; LANDMARKS_PER_HAND]) -> Self {
        Self { points }
    }

    /// Builds a frame from a detector output slice, rejecting anything that
    /// does not carry the full schema.
    pub fn from_slice(points: &[Landmark]) -> Result<Self> {
        let actual = points.len();
        let points = points
            .try_into()
            .map_err(|_| OrreryError::InvalidLandmarkCount {
                expected: LANDMARKS_PER_HAND,
                actual,
            })?;
        Ok(Self { points })
    }

    pub fn point(&self, index: usize) -> Landmark {
        self.points[index]
    }

    pub fn wrist(&self) -> Landmark {
        self.points[index::WRIST]
    }

    pub fn points(&self) -> &[Landmark; LANDMARKS_PER_HAND] {
        &self.points
    }
}
