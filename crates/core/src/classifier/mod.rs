//! Landmark based gesture classification.
//!
//! Fingers are tested for extension with a radial distance heuristic: a
//! finger counts as extended when its tip sits farther from the wrist than
//! its PIP joint (squared planar distance, depth ignored). The heuristic
//! assumes an upright hand facing the camera; a rotated or sideways hand
//! will misread. The gesture vocabulary was tuned against exactly this
//! behaviour, so the limitation stays documented instead of being
//! compensated for with angle or curl measurements.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::landmark::{index, HandFrame, Landmark};

/// Discrete gesture symbol, produced fresh for every classified frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gesture {
    None,
    OpenHand,
    ClosedFist,
    Victory,
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gesture::None => "NONE",
            Gesture::OpenHand => "OPEN_HAND",
            Gesture::ClosedFist => "CLOSED_FIST",
            Gesture::Victory => "VICTORY",
        };
        f.write_str(label)
    }
}

/// (tip, reference joint) landmark pairs per finger, thumb first. The thumb
/// is measured against its MCP joint, the long fingers against their PIPs.
const FINGER_JOINTS: [(usize, usize); 5] = [
    (index::THUMB_TIP, index::THUMB_MCP),
    (index::INDEX_TIP, index::INDEX_PIP),
    (index::MIDDLE_TIP, index::MIDDLE_PIP),
    (index::RING_TIP, index::RING_PIP),
    (index::PINKY_TIP, index::PINKY_PIP),
];

/// Classifies one hand observation. Pure and stateless: repeated calls on
/// the same frame return the same symbol.
///
/// The rules are checked in priority order, first match wins. Victory and
/// closed fist ignore the thumb, whose tracking is noisy when tucked
/// against the palm; an open hand requires it.
pub fn classify(hand: &HandFrame) -> Gesture {
    let extended = FINGER_JOINTS.map(|(tip, joint)| is_extended(hand, tip, joint));
    let [thumb, index_finger, middle, ring, pinky] = extended;

    if index_finger && middle && !ring && !pinky {
        return Gesture::Victory;
    }

    // Fist keys off the four long fingers alone; a thumb sticking out of an
    // otherwise closed hand still reads as a fist.
    if !index_finger && !middle && !ring && !pinky {
        return Gesture::ClosedFist;
    }

    if thumb && index_finger && middle && ring && pinky {
        return Gesture::OpenHand;
    }

    Gesture::None
}

fn is_extended(hand: &HandFrame, tip: usize, joint: usize) -> bool {
    let wrist = hand.wrist();
    dist2_planar(wrist, hand.point(tip)) > dist2_planar(wrist, hand.point(joint))
}

fn dist2_planar(a: Landmark, b: Landmark) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::LANDMARKS_PER_HAND;

    const WRIST: Landmark = Landmark {
        x: 0.5,
        y: 0.9,
        z: 0.0,
    };

    /// Unit-ish direction each finger points away from the wrist.
    const FINGER_DIRS: [(f32, f32); 5] = [
        (-0.8, -0.6),
        (-0.3, -0.95),
        (0.0, -1.0),
        (0.3, -0.95),
        (0.6, -0.8),
    ];

    /// Builds a hand where each finger is either extended (tip beyond the
    /// reference joint as seen from the wrist) or curled (tip pulled back
    /// inside it). Order: thumb, index, middle, ring, pinky.
    fn hand(fingers: [bool; 5]) -> HandFrame {
        let mut points = [WRIST; LANDMARKS_PER_HAND];
        for (finger, &extended) in fingers.iter().enumerate() {
            let (dx, dy) = FINGER_DIRS[finger];
            let (tip, joint) = FINGER_JOINTS[finger];
            let tip_reach = if extended { 0.30 } else { 0.05 };
            points[joint] = Landmark::new(WRIST.x + dx * 0.15, WRIST.y + dy * 0.15, 0.0);
            points[tip] = Landmark::new(WRIST.x + dx * tip_reach, WRIST.y + dy * tip_reach, 0.0);
        }
        HandFrame::new(points)
    }

    #[test]
    fn open_hand_requires_all_five_fingers() {
        assert_eq!(classify(&hand([true; 5])), Gesture::OpenHand);
    }

    #[test]
    fn four_long_fingers_without_thumb_is_unrecognised() {
        assert_eq!(
            classify(&hand([false, true, true, true, true])),
            Gesture::None
        );
    }

    #[test]
    fn fist_ignores_thumb_state() {
        assert_eq!(classify(&hand([false; 5])), Gesture::ClosedFist);
        assert_eq!(
            classify(&hand([true, false, false, false, false])),
            Gesture::ClosedFist
        );
    }

    #[test]
    fn peace_sign_ignores_thumb_state() {
        assert_eq!(
            classify(&hand([false, true, true, false, false])),
            Gesture::Victory
        );
        assert_eq!(
            classify(&hand([true, true, true, false, false])),
            Gesture::Victory
        );
    }

    #[test]
    fn victory_outranks_later_rules() {
        // Index and middle extended with ring and pinky curled satisfies the
        // victory rule before any other branch is consulted.
        let frame = hand([false, true, true, false, false]);
        assert_eq!(classify(&frame), Gesture::Victory);
    }

    #[test]
    fn lone_index_finger_is_unrecognised() {
        assert_eq!(
            classify(&hand([false, true, false, false, false])),
            Gesture::None
        );
    }

    #[test]
    fn classification_is_deterministic() {
        let frame = hand([true, true, true, false, false]);
        let first = classify(&frame);
        for _ in 0..10 {
            assert_eq!(classify(&frame), first);
        }
    }
}
