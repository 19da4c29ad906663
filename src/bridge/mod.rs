//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod estimator;
mod landmarks;
mod session;

pub use estimator::EstimatorOptions;
pub use landmarks::{update_landmarks, FRAME_DATA_LEN, VALUES_PER_LANDMARK};
pub use session::{
    estimator_options, feedback_message, phase_name, rep_count, set_completion_callback,
    start_session, stop_session, SessionError,
};
