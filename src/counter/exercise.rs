//! Exercise configuration table
//!
//! One shared state machine drives every exercise; everything that differs
//! between exercises (thresholds, required landmarks, validity rules) lives
//! here so the tracker logic is never forked per exercise.

use super::pose::{
    LEFT_ELBOW, LEFT_HIP, LEFT_SHOULDER, LEFT_WRIST, NOSE, RIGHT_ELBOW, RIGHT_HIP,
    RIGHT_SHOULDER, RIGHT_WRIST,
};

/// Minimum landmark visibility before a frame is trusted
pub const MIN_VISIBILITY: f32 = 0.6;

/// Supported exercise types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exercise {
    PushUp,
    PullUp,
}

impl Exercise {
    /// Parse the host-side exercise name ("pushup" / "pullup")
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pushup" => Some(Exercise::PushUp),
            "pullup" => Some(Exercise::PullUp),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Exercise::PushUp => "pushup",
            Exercise::PullUp => "pullup",
        }
    }

    pub fn profile(&self) -> &'static ExerciseProfile {
        match self {
            Exercise::PushUp => &PUSH_UP,
            Exercise::PullUp => &PULL_UP,
        }
    }
}

/// Per-exercise thresholds and required landmarks
pub struct ExerciseProfile {
    /// Averaged elbow angle above this marks the extended (starting) position
    pub extended_angle: f32,
    /// Averaged elbow angle below this completes the contraction
    pub contracted_angle: f32,
    /// Landmarks that must pass the visibility gate every frame
    pub required: &'static [usize],
}

/// Push-up: count at 90° elbow bend, torso judged by shoulder/hip offsets
static PUSH_UP: ExerciseProfile = ExerciseProfile {
    extended_angle: 160.0,
    contracted_angle: 90.0,
    required: &[
        LEFT_SHOULDER,
        RIGHT_SHOULDER,
        LEFT_ELBOW,
        RIGHT_ELBOW,
        LEFT_WRIST,
        RIGHT_WRIST,
        LEFT_HIP,
        RIGHT_HIP,
    ],
};

/// Pull-up: deeper 60° contraction, chin judged against the bar anchor
static PULL_UP: ExerciseProfile = ExerciseProfile {
    extended_angle: 160.0,
    contracted_angle: 60.0,
    required: &[
        NOSE,
        LEFT_SHOULDER,
        RIGHT_SHOULDER,
        LEFT_ELBOW,
        RIGHT_ELBOW,
        LEFT_WRIST,
        RIGHT_WRIST,
    ],
};
