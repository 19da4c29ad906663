//! Rep-counting state machine
//!
//! Converts the per-frame stream of joint angles into a monotonically
//! increasing rep count plus coaching feedback. One tracker per session;
//! all thresholds come from the exercise profile so the transition logic
//! is never forked per exercise.

use super::angles::joint_angle;
use super::exercise::{Exercise, MIN_VISIBILITY};
use super::pose::{
    LEFT_ELBOW, LEFT_HIP, LEFT_SHOULDER, LEFT_WRIST, NOSE, PoseFrame, RIGHT_ELBOW, RIGHT_HIP,
    RIGHT_SHOULDER, RIGHT_WRIST,
};

/// Maximum push-up body misalignment (sum of shoulder/hip vertical offsets)
pub const ALIGNMENT_LIMIT: f32 = 0.2;

/// How far wrists may drift vertically from the captured bar height
pub const BAR_TOLERANCE: f32 = 0.05;

/// Which half of the rep cycle the body is in
///
/// Up is the extended starting half, Down the contraction half. The names
/// follow the cycle, not body height: a hanging pull-up start and a
/// top-of-push-up start are both Up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Up,
    Down,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Up => "up",
            Phase::Down => "down",
        }
    }
}

/// Advisory coaching state, shown to the user and nothing else
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    /// Initial message before the first transition
    Start,
    /// No pose detected this frame
    PoseMissing,
    /// A required landmark fell below the visibility threshold
    LowVisibility,
    /// Extended position reached, instruct the contraction
    Contract,
    /// Mid-contraction hint
    KeepGoing,
    /// Rep committed
    RepCounted,
    /// Push-up contraction rejected: body sagging or piking
    TorsoSagging,
    /// Pull-up contraction rejected: wrists drifted off the bar
    HandsOffBar,
    /// Pull-up contraction rejected: chin did not clear the bar
    ChinBelowBar,
}

impl Feedback {
    pub fn message(&self, exercise: Exercise) -> &'static str {
        match (self, exercise) {
            (Feedback::Start, Exercise::PushUp) => "Get into a push-up position",
            (Feedback::Start, Exercise::PullUp) => "Grab the bar and hang with arms extended",
            (Feedback::PoseMissing, _) => "Step into the camera view",
            (Feedback::LowVisibility, Exercise::PushUp) => "Keep your arms and torso in view",
            (Feedback::LowVisibility, Exercise::PullUp) => "Keep your arms and head in view",
            (Feedback::Contract, Exercise::PushUp) => {
                "Lower your chest until your elbows reach 90 degrees"
            }
            (Feedback::Contract, Exercise::PullUp) => "Now pull your chin up over the bar",
            (Feedback::KeepGoing, Exercise::PushUp) => "Lower further",
            (Feedback::KeepGoing, Exercise::PullUp) => "Keep pulling",
            (Feedback::RepCounted, Exercise::PushUp) => "Rep counted, push back up to the top",
            (Feedback::RepCounted, Exercise::PullUp) => "Great rep, lower all the way down",
            (Feedback::TorsoSagging, _) => "Keep your torso straight",
            (Feedback::HandsOffBar, _) => "Keep both hands on the bar",
            (Feedback::ChinBelowBar, _) => "Pull your chin above the bar",
        }
    }
}

/// Per-session rep tracker
pub struct RepTracker {
    exercise: Exercise,
    count: u32,
    phase: Phase,
    feedback: Feedback,
    /// Bar height captured from the first trusted frame (pull-up only)
    bar_anchor: Option<f32>,
}

impl RepTracker {
    pub fn new(exercise: Exercise) -> Self {
        Self {
            exercise,
            count: 0,
            phase: Phase::Up,
            feedback: Feedback::Start,
            bar_anchor: None,
        }
    }

    pub fn exercise(&self) -> Exercise {
        self.exercise
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    pub fn feedback_message(&self) -> &'static str {
        self.feedback.message(self.exercise)
    }

    /// Process one frame, `None` meaning no pose was detected
    ///
    /// Returns `Some(new_count)` exactly when this frame committed a rep.
    /// Frames that fail the visibility gate only refresh feedback; count
    /// and phase are untouched.
    pub fn update(&mut self, frame: Option<&PoseFrame>) -> Option<u32> {
        let Some(frame) = frame else {
            self.feedback = Feedback::PoseMissing;
            return None;
        };

        let profile = self.exercise.profile();
        if !frame.all_visible(profile.required, MIN_VISIBILITY) {
            self.feedback = Feedback::LowVisibility;
            return None;
        }

        // The bar is wherever the hands were when tracking began; it does
        // not move for the rest of the session
        if self.exercise == Exercise::PullUp && self.bar_anchor.is_none() {
            let wrist_y = (frame.get(LEFT_WRIST).y + frame.get(RIGHT_WRIST).y) / 2.0;
            self.bar_anchor = Some(wrist_y);
        }

        let left = joint_angle(
            frame.point(LEFT_SHOULDER),
            frame.point(LEFT_ELBOW),
            frame.point(LEFT_WRIST),
        );
        let right = joint_angle(
            frame.point(RIGHT_SHOULDER),
            frame.point(RIGHT_ELBOW),
            frame.point(RIGHT_WRIST),
        );
        let angle = (left + right) / 2.0;

        match self.phase {
            Phase::Up => {
                if angle > profile.extended_angle {
                    self.phase = Phase::Down;
                    self.feedback = Feedback::Contract;
                }
            }
            Phase::Down => {
                if angle < profile.contracted_angle {
                    match self.check_form(frame) {
                        Ok(()) => {
                            self.count += 1;
                            self.phase = Phase::Up;
                            self.feedback = Feedback::RepCounted;
                            return Some(self.count);
                        }
                        Err(fault) => self.feedback = fault,
                    }
                } else if angle < profile.extended_angle {
                    self.feedback = Feedback::KeepGoing;
                }
            }
        }

        None
    }

    /// Reset to a fresh session: count 0, phase Up, anchor recaptured
    pub fn reset(&mut self) {
        self.count = 0;
        self.phase = Phase::Up;
        self.feedback = Feedback::Start;
        self.bar_anchor = None;
    }

    /// Exercise-specific validity check, run only at the contraction point
    fn check_form(&self, frame: &PoseFrame) -> Result<(), Feedback> {
        match self.exercise {
            Exercise::PushUp => {
                let alignment = (frame.get(LEFT_SHOULDER).y - frame.get(LEFT_HIP).y).abs()
                    + (frame.get(RIGHT_SHOULDER).y - frame.get(RIGHT_HIP).y).abs();
                if alignment < ALIGNMENT_LIMIT {
                    Ok(())
                } else {
                    Err(Feedback::TorsoSagging)
                }
            }
            Exercise::PullUp => {
                // Captured on the first trusted frame, so present by the
                // time any contraction can be judged
                let bar = self.bar_anchor.expect("bar anchor captured before transitions");
                let left_off = (frame.get(LEFT_WRIST).y - bar).abs();
                let right_off = (frame.get(RIGHT_WRIST).y - bar).abs();
                if left_off > BAR_TOLERANCE || right_off > BAR_TOLERANCE {
                    return Err(Feedback::HandsOffBar);
                }
                // Smaller y is higher on screen
                if frame.get(NOSE).y < bar {
                    Ok(())
                } else {
                    Err(Feedback::ChinBelowBar)
                }
            }
        }
    }
}
