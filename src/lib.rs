//! Workout Web - Pose-Based Rep Counting
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! The host app runs MediaPipe Pose and the camera pipeline; this crate
//! owns the rep-counting state machine for push-ups and pull-ups.

mod bridge;
mod counter;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    estimator_options, feedback_message, phase_name, rep_count, set_completion_callback,
    start_session, stop_session, update_landmarks, EstimatorOptions, FRAME_DATA_LEN,
    VALUES_PER_LANDMARK,
};

// Pure counting core, usable without a browser (rlib consumers, tests)
pub use counter::{
    joint_angle, CompletionReporter, Exercise, ExerciseProfile, Feedback, Landmark, Phase,
    PoseFrame, RepTracker, ALIGNMENT_LIMIT, BAR_TOLERANCE, LANDMARK_COUNT, LEFT_ELBOW, LEFT_HIP,
    LEFT_SHOULDER, LEFT_WRIST, MIN_VISIBILITY, NOSE, RIGHT_ELBOW, RIGHT_HIP, RIGHT_SHOULDER,
    RIGHT_WRIST,
};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
