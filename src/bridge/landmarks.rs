//! Landmark ingestion - JS bridge for per-frame pose data
//!
//! Receives MediaPipe Pose results from JavaScript once per video frame
//! and routes them into the active workout session.

use wasm_bindgen::prelude::*;

use super::session;
use crate::counter::{Landmark, PoseFrame, LANDMARK_COUNT};

/// Values per landmark in the flat array: x, y, z, visibility
pub const VALUES_PER_LANDMARK: usize = 4;

/// Expected flat array length for a detected pose
pub const FRAME_DATA_LEN: usize = LANDMARK_COUNT * VALUES_PER_LANDMARK;

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript with a flat Float32Array of 132 values
/// (33 landmarks × x, y, z, visibility), or an empty array when the
/// estimator detected no pose this frame
#[wasm_bindgen]
pub fn update_landmarks(data: &[f32]) {
    if data.is_empty() {
        session::process_frame(None);
        return;
    }

    match parse_frame(data) {
        Some(frame) => session::process_frame(Some(&frame)),
        None => {
            web_sys::console::warn_1(
                &format!(
                    "Invalid landmark data length: {} (expected {})",
                    data.len(),
                    FRAME_DATA_LEN
                )
                .into(),
            );
        }
    }
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Decode the flat landmark array
///
/// MediaPipe carries a z coordinate per landmark; the counter works in 2D
/// so it is skipped here.
pub(crate) fn parse_frame(data: &[f32]) -> Option<PoseFrame> {
    if data.len() != FRAME_DATA_LEN {
        return None;
    }

    let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
    for (i, values) in data.chunks_exact(VALUES_PER_LANDMARK).enumerate() {
        landmarks[i] = Landmark {
            x: values[0],
            y: values[1],
            visibility: values[3],
        };
    }
    Some(PoseFrame::new(landmarks))
}
