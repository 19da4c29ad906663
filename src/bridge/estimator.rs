//! Pose estimator configuration
//!
//! The estimator itself (MediaPipe Pose) runs in JavaScript; what the
//! session owns is its configuration, so the host constructs the
//! estimator on session start and releases it on stop instead of keeping
//! a module-scope singleton alive.

use wasm_bindgen::prelude::*;

/// Options the host passes to the MediaPipe Pose constructor
#[wasm_bindgen]
#[derive(Clone, Copy)]
pub struct EstimatorOptions {
    /// Model variant, 0-2 (higher = more accurate, slower)
    pub model_complexity: u32,
    /// Let the estimator smooth landmarks across frames
    pub smooth_landmarks: bool,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
}

#[wasm_bindgen]
impl EstimatorOptions {
    #[wasm_bindgen(constructor)]
    pub fn new(
        model_complexity: u32,
        smooth_landmarks: bool,
        min_detection_confidence: f32,
        min_tracking_confidence: f32,
    ) -> Self {
        Self {
            model_complexity,
            smooth_landmarks,
            min_detection_confidence,
            min_tracking_confidence,
        }
    }
}

impl Default for EstimatorOptions {
    fn default() -> Self {
        Self {
            model_complexity: 1,
            smooth_landmarks: true,
            min_detection_confidence: 0.5,
            min_tracking_confidence: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_app_processor() {
        let options = EstimatorOptions::default();
        assert_eq!(options.model_complexity, 1);
        assert!(options.smooth_landmarks);
        assert_eq!(options.min_detection_confidence, 0.5);
        assert_eq!(options.min_tracking_confidence, 0.5);
    }
}
