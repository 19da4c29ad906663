//! Session bridge tests, run under wasm-bindgen-test
//!
//! Drives the crate the way the JS host does: flat landmark arrays in,
//! display getters and the completion callback out.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use workout_web::*;

const ARM_LEN: f32 = 0.15;

fn set_landmark(data: &mut [f32], index: usize, x: f32, y: f32) {
    let base = index * VALUES_PER_LANDMARK;
    data[base] = x;
    data[base + 1] = y;
    data[base + 2] = 0.0;
    data[base + 3] = 1.0;
}

/// Flat push-up frame with both elbows at `deg` and a straight torso
fn pushup_frame(deg: f32) -> Vec<f32> {
    let mut data = vec![0.0; FRAME_DATA_LEN];
    let theta = deg.to_radians();
    for (wrist_x, wrist_idx, elbow_idx, shoulder_idx, hip_idx) in [
        (0.3, LEFT_WRIST, LEFT_ELBOW, LEFT_SHOULDER, LEFT_HIP),
        (0.7, RIGHT_WRIST, RIGHT_ELBOW, RIGHT_SHOULDER, RIGHT_HIP),
    ] {
        let wrist = (wrist_x, 0.6);
        let elbow = (wrist.0, wrist.1 + ARM_LEN);
        let shoulder = (
            elbow.0 + ARM_LEN * theta.sin(),
            elbow.1 - ARM_LEN * theta.cos(),
        );
        set_landmark(&mut data, wrist_idx, wrist.0, wrist.1);
        set_landmark(&mut data, elbow_idx, elbow.0, elbow.1);
        set_landmark(&mut data, shoulder_idx, shoulder.0, shoulder.1);
        set_landmark(&mut data, hip_idx, shoulder.0 + 0.05, shoulder.1 + 0.02);
    }
    data
}

#[wasm_bindgen_test]
fn unknown_exercise_is_rejected() {
    assert!(start_session("situp", None).is_err());
    assert!(start_session("", None).is_err());
}

#[wasm_bindgen_test]
fn idle_display_surface_is_zeroed() {
    stop_session();
    assert_eq!(rep_count(), 0);
    assert_eq!(phase_name(), "up");
    assert_eq!(feedback_message(), "");
    assert!(estimator_options().is_none());
}

#[wasm_bindgen_test]
fn pushup_session_counts_and_reports_once() {
    start_session("pushup", None).unwrap();

    let seen: Rc<RefCell<Vec<u32>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let callback = Closure::<dyn FnMut(JsValue)>::new(move |count: JsValue| {
        sink.borrow_mut().push(count.as_f64().unwrap() as u32);
    });
    set_completion_callback(callback.as_ref().unchecked_ref::<js_sys::Function>().clone())
        .unwrap();

    update_landmarks(&pushup_frame(170.0));
    assert_eq!(phase_name(), "down");
    update_landmarks(&pushup_frame(70.0));

    assert_eq!(rep_count(), 1);
    assert_eq!(phase_name(), "up");
    assert_eq!(feedback_message(), "Rep counted, push back up to the top");

    // Repeated teardown must not re-report the final count
    stop_session();
    stop_session();
    assert_eq!(*seen.borrow(), vec![1]);
}

#[wasm_bindgen_test]
fn empty_frame_asks_the_user_into_view() {
    start_session("pullup", None).unwrap();
    update_landmarks(&[]);
    assert_eq!(feedback_message(), "Step into the camera view");
    assert_eq!(rep_count(), 0);
    stop_session();
}

#[wasm_bindgen_test]
fn restart_resets_the_count() {
    start_session("pushup", None).unwrap();
    update_landmarks(&pushup_frame(170.0));
    update_landmarks(&pushup_frame(70.0));
    assert_eq!(rep_count(), 1);

    // Switching exercise starts a fresh session
    start_session("pullup", None).unwrap();
    assert_eq!(rep_count(), 0);
    assert_eq!(phase_name(), "up");
    stop_session();
}

#[wasm_bindgen_test]
fn estimator_options_live_with_the_session() {
    let options = EstimatorOptions::new(2, false, 0.7, 0.6);
    start_session("pushup", Some(options)).unwrap();
    let held = estimator_options().unwrap();
    assert_eq!(held.model_complexity, 2);
    assert!(!held.smooth_landmarks);
    stop_session();
    assert!(estimator_options().is_none());
}
