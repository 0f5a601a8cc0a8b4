//! Floating-label animation controller
//!
//! Drives the scale/translate transition that moves a text field's
//! label between its natural resting position and a floated position
//! above, on, or inside the field border. The controller owns the
//! label's transform: hosts feed it focus changes and geometry
//! snapshots, tick it from their frame clock, and read [`sample`] each
//! displayed frame.
//!
//! [`sample`]: FloatLabelController::sample

use mdui_core::{AnimationState, FloatMode, LabelGeometry, Transform2D};
use tracing::{debug, trace};

use crate::easing::Easing;
use crate::signal::CompletionSignal;
use crate::transition::TransformTransition;

/// Uniform scale applied to the label in its floated position
pub const SCALE_FACTOR: f32 = 0.75;

/// Duration of both the float and reset transitions, in milliseconds
pub const DURATION_MS: f32 = 150.0;

/// Extra downward offset when floating fully above the field border
const ABOVE_OFFSET: f32 = 1.0;

/// Inward offset when floating inside the field
const INSIDE_OFFSET: f32 = 2.0;

/// Horizontal correction applied to the floated label
const FLOAT_X_OFFSET: f32 = 1.0;

/// The reset transition lands on a 1-unit translate residual, not the
/// identity. Resting fields that have never animated stay at the
/// identity; fields that have completed a reset rest here.
const RESET_TARGET: Transform2D = Transform2D::new(1.0, 1.0, 1.0, 1.0);

/// Geometry drift below this threshold keeps the cached float endpoint
const RETRIGGER_THRESHOLD: f32 = 1.0;

/// Compute the vertical float target for a mode and geometry snapshot.
///
/// Pure; callable at any time to recompute a target after layout moves
/// things around.
pub fn compute_target_y(mode: FloatMode, geometry: &LabelGeometry) -> f32 {
    match mode {
        FloatMode::Above => {
            geometry.label_min_y / SCALE_FACTOR + geometry.label_height + ABOVE_OFFSET
        }
        FloatMode::Border => geometry.label_min_y / SCALE_FACTOR + geometry.label_height / 2.0,
        FloatMode::Inside => geometry.label_min_y / SCALE_FACTOR - INSIDE_OFFSET,
        FloatMode::Disabled => 0.0,
    }
}

/// Direction of an in-flight transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Float,
    Reset,
}

/// Focus-driven float/reset state machine for one label.
///
/// Created once per field and reconfigured many times over its life.
/// At most one transition is in flight at a time: a new request cancels
/// the previous one, releasing its completion callbacks unfired, before
/// starting from the current transform.
///
/// All methods take `&mut self` and are meant to be called from a
/// single UI thread; none of them block or fail.
#[derive(Debug)]
pub struct FloatLabelController {
    mode: FloatMode,
    state: AnimationState,
    transform: Transform2D,
    geometry: LabelGeometry,
    /// Cached vertical target, rebuilt by geometry/mode changes
    target_y: f32,
    /// Cached float endpoint derived from `target_y`
    float_target: Transform2D,
    active: Option<(Direction, TransformTransition)>,
    float_done: CompletionSignal,
    reset_done: CompletionSignal,
}

impl FloatLabelController {
    /// Create a resting controller with float animations disabled
    pub fn new() -> Self {
        let mut controller = Self {
            mode: FloatMode::default(),
            state: AnimationState::Resting,
            transform: Transform2D::identity(),
            geometry: LabelGeometry::default(),
            target_y: 0.0,
            float_target: Transform2D::identity(),
            active: None,
            float_done: CompletionSignal::new(),
            reset_done: CompletionSignal::new(),
        };
        controller.rebuild_targets();
        controller
    }

    /// The active float mode
    pub fn mode(&self) -> FloatMode {
        self.mode
    }

    /// The position the label currently belongs to
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// The cached float endpoint the next float transition will use.
    ///
    /// Hosts that delegate playback entirely read this once to pre-seed
    /// their own interpolation.
    pub fn float_target(&self) -> Transform2D {
        self.float_target
    }

    /// The current (possibly mid-transition) transform
    pub fn sample(&self) -> Transform2D {
        self.transform
    }

    /// Check whether a transition is in flight
    pub fn is_transitioning(&self) -> bool {
        self.active.is_some()
    }

    /// Set the active float mode.
    ///
    /// Re-applying the current mode while idle is a no-op. Switching
    /// modes cancels any in-flight transition first, then rebuilds the
    /// cached float endpoint. `Disabled` additionally snaps the
    /// transform back to the resting identity.
    pub fn configure(&mut self, mode: FloatMode) {
        if mode == self.mode && self.active.is_none() {
            return;
        }
        self.cancel();
        self.mode = mode;
        if mode == FloatMode::Disabled {
            self.transform = Transform2D::identity();
            self.state = AnimationState::Resting;
        }
        self.rebuild_targets();
        debug!(?mode, "float mode configured");
    }

    /// Refresh the geometry snapshot.
    ///
    /// Ignored entirely while a transition is playing; hosts re-pull a
    /// snapshot from a completion callback if layout drifted mid-flight.
    /// While resting at full scale, a target drift of more than one unit
    /// rebuilds the cached float endpoint so the next float transition
    /// does not aim at a stale position.
    pub fn update_geometry(&mut self, geometry: LabelGeometry) {
        if self.is_transitioning() {
            return;
        }
        self.geometry = geometry;
        let target_y = compute_target_y(self.mode, &self.geometry);
        if self.transform.scale_x == 1.0 && (target_y - self.target_y).abs() > RETRIGGER_THRESHOLD {
            trace!(
                old = self.target_y,
                new = target_y,
                "float target drifted, rebuilding"
            );
            self.rebuild_targets();
        }
    }

    /// React to a focus change on the owning field.
    ///
    /// `animations_enabled` is the caller's combined gate (animation
    /// feature on, no prompt text, no content); the controller stays
    /// agnostic of text state. Gaining focus floats the label only from
    /// the full-scale resting position; losing focus always plays the
    /// reset transition. Everything else is a no-op, and `Disabled`
    /// mode never leaves the resting state.
    pub fn on_focus_changed(&mut self, focused: bool, animations_enabled: bool) {
        if self.mode == FloatMode::Disabled || !animations_enabled {
            return;
        }
        if focused {
            if self.transform.scale_x == 1.0 {
                self.begin(Direction::Float);
            }
        } else {
            self.begin(Direction::Reset);
        }
    }

    /// Stop any in-flight transition, leaving the transform at the value
    /// it held at cancellation. The cancelled direction's completion
    /// callbacks are released without firing.
    pub fn cancel(&mut self) {
        if let Some((direction, _)) = self.active.take() {
            match direction {
                Direction::Float => self.float_done.clear(),
                Direction::Reset => self.reset_done.clear(),
            }
            trace!(?direction, "transition cancelled");
        }
    }

    /// Register a one-shot callback for the next natural float completion
    pub fn on_float_finished<F: FnOnce() + Send + 'static>(&mut self, callback: F) {
        self.float_done.observe(callback);
    }

    /// Register a one-shot callback for the next natural reset completion
    pub fn on_reset_finished<F: FnOnce() + Send + 'static>(&mut self, callback: F) {
        self.reset_done.observe(callback);
    }

    /// Advance the in-flight transition by delta time (in milliseconds).
    ///
    /// On the tick that reaches the natural endpoint the transform snaps
    /// exactly onto the target, the state flips, and that direction's
    /// completion callbacks fire.
    pub fn tick(&mut self, dt_ms: f32) {
        let Some((direction, transition)) = self.active.as_mut() else {
            return;
        };

        let finished = transition.tick(dt_ms);
        self.transform = transition.sample();

        if finished {
            let direction = *direction;
            self.active = None;
            match direction {
                Direction::Float => {
                    self.state = AnimationState::Floated;
                    debug!("float transition finished");
                    self.float_done.fire();
                }
                Direction::Reset => {
                    self.state = AnimationState::Resting;
                    debug!("reset transition finished");
                    self.reset_done.fire();
                }
            }
        }
    }

    /// Recompute the cached target from the current mode and geometry
    fn rebuild_targets(&mut self) {
        self.target_y = compute_target_y(self.mode, &self.geometry);
        self.float_target = Transform2D::new(
            SCALE_FACTOR,
            SCALE_FACTOR,
            self.geometry.label_padding_left * SCALE_FACTOR - FLOAT_X_OFFSET,
            -self.target_y,
        );
    }

    /// Supersede any in-flight transition and start a new one from the
    /// current transform
    fn begin(&mut self, direction: Direction) {
        self.cancel();
        let target = match direction {
            Direction::Float => self.float_target,
            Direction::Reset => RESET_TARGET,
        };
        trace!(?direction, from = ?self.transform, to = ?target, "transition started");
        let transition =
            TransformTransition::new(self.transform, target, DURATION_MS, Easing::EaseInOut);
        self.active = Some((direction, transition));
    }
}

impl Default for FloatLabelController {
    fn default() -> Self {
        Self::new()
    }
}
