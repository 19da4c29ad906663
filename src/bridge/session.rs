//! Workout session lifecycle and display surface
//!
//! One session per camera or video run. The host starts and stops
//! sessions, feeds frames through the landmarks bridge, and polls the
//! read-only (count, phase, feedback) tuple at its own redraw rate.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use super::estimator::EstimatorOptions;
use crate::counter::{CompletionReporter, Exercise, PoseFrame, RepTracker};

/// Errors surfaced to the host when driving the session API
pub enum SessionError {
    UnknownExercise(String),
    NoActiveSession,
}

impl From<SessionError> for JsValue {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::UnknownExercise(name) => {
                JsValue::from_str(&format!("Unknown exercise: '{}'", name))
            }
            SessionError::NoActiveSession => JsValue::from_str("No active workout session"),
        }
    }
}

/// Everything owned by one camera/video run
struct WorkoutSession {
    tracker: RepTracker,
    reporter: CompletionReporter,
    /// Pose estimator configuration, owned for the session lifetime so the
    /// host builds and releases the MediaPipe instance alongside it
    estimator: EstimatorOptions,
    /// Persistence callback, called with each newly reached count
    on_complete: Option<js_sys::Function>,
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static SESSION: RefCell<Option<WorkoutSession>> = RefCell::new(None);
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Start tracking `exercise` ("pushup" or "pullup")
///
/// A session already in progress is stopped first, including its final
/// report - switching exercise or toggling the camera always begins a
/// fresh count.
#[wasm_bindgen]
pub fn start_session(exercise: &str, options: Option<EstimatorOptions>) -> Result<(), JsValue> {
    let exercise = Exercise::from_name(exercise)
        .ok_or_else(|| SessionError::UnknownExercise(exercise.to_string()))?;

    stop_session();

    SESSION.with(|cell| {
        *cell.borrow_mut() = Some(WorkoutSession {
            tracker: RepTracker::new(exercise),
            reporter: CompletionReporter::new(),
            estimator: options.unwrap_or_default(),
            on_complete: None,
        });
    });
    web_sys::console::log_1(&format!("✅ Workout session started: {}", exercise.as_str()).into());
    Ok(())
}

/// Stop tracking and discard session state
///
/// Safe to call repeatedly or before any frame arrived; the reporter
/// watermark keeps repeated teardowns from re-reporting a count.
#[wasm_bindgen]
pub fn stop_session() {
    let Some(mut session) = SESSION.with(|cell| cell.borrow_mut().take()) else {
        return;
    };

    let final_count = session.tracker.count();
    if let Some(count) = session.reporter.submit(final_count) {
        notify_completion(session.on_complete.as_ref(), count);
    }
    web_sys::console::log_1(
        &format!(
            "Workout session stopped: {} x{}",
            session.tracker.exercise().as_str(),
            final_count
        )
        .into(),
    );
}

/// Register the persistence callback for the active session
///
/// Called with the new count (a number) each time it increases. The
/// callback owner compares against personal bests and appends history;
/// this module only guarantees at-most-once per count.
#[wasm_bindgen]
pub fn set_completion_callback(callback: js_sys::Function) -> Result<(), JsValue> {
    SESSION.with(|cell| {
        let mut slot = cell.borrow_mut();
        let session = slot.as_mut().ok_or(SessionError::NoActiveSession)?;
        session.on_complete = Some(callback);
        Ok(())
    })
}

/// Committed reps in the active session (0 when none is running)
#[wasm_bindgen]
pub fn rep_count() -> u32 {
    SESSION.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|session| session.tracker.count())
            .unwrap_or(0)
    })
}

/// Current rep-cycle phase, "up" or "down"
#[wasm_bindgen]
pub fn phase_name() -> String {
    SESSION.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|session| session.tracker.phase().as_str())
            .unwrap_or("up")
            .to_string()
    })
}

/// Last coaching message for the active session
#[wasm_bindgen]
pub fn feedback_message() -> String {
    SESSION.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(|session| session.tracker.feedback_message())
            .unwrap_or("")
            .to_string()
    })
}

/// Estimator options of the active session, for the host to construct
/// the MediaPipe instance with on session start
#[wasm_bindgen]
pub fn estimator_options() -> Option<EstimatorOptions> {
    SESSION.with(|cell| cell.borrow().as_ref().map(|session| session.estimator))
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Advance the active session by one frame. No-op when nothing is running.
///
/// The completion callback fires after the session borrow is released:
/// a callback that synchronously reads the display surface (or stops the
/// session) must not hit a borrowed cell.
pub(crate) fn process_frame(frame: Option<&PoseFrame>) {
    let notification = SESSION.with(|cell| {
        let mut slot = cell.borrow_mut();
        let session = slot.as_mut()?;
        let new_count = session.tracker.update(frame)?;
        let count = session.reporter.submit(new_count)?;
        session.on_complete.clone().map(|callback| (callback, count))
    });

    if let Some((callback, count)) = notification {
        notify_completion(Some(&callback), count);
    }
}

/// Fire-and-forget call into the host persistence callback
///
/// A throwing callback must never disturb frame processing, so the
/// exception is logged and dropped.
fn notify_completion(callback: Option<&js_sys::Function>, count: u32) {
    let Some(callback) = callback else { return };
    if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from(count)) {
        web_sys::console::warn_1(&err);
    }
}
