//! Counter module - rep counting from pose landmarks
//!
//! Re-exports only. All logic in submodules. Nothing here touches the
//! browser: the whole module is plain Rust, driven one frame at a time.

mod angles;
mod exercise;
mod pose;
mod report;
mod tracker;

pub use angles::joint_angle;
pub use exercise::{Exercise, ExerciseProfile, MIN_VISIBILITY};
pub use pose::{
    Landmark, PoseFrame, LANDMARK_COUNT, LEFT_ELBOW, LEFT_HIP, LEFT_SHOULDER, LEFT_WRIST, NOSE,
    RIGHT_ELBOW, RIGHT_HIP, RIGHT_SHOULDER, RIGHT_WRIST,
};
pub use report::CompletionReporter;
pub use tracker::{Feedback, Phase, RepTracker, ALIGNMENT_LIMIT, BAR_TOLERANCE};
