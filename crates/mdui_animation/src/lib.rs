//! mdui Animation System
//!
//! Time-boxed transform transitions and the floating-label controller.
//!
//! # Features
//!
//! - **Easing**: cubic easing functions plus CSS-style cubic beziers
//! - **Transitions**: fixed start/end/duration transform interpolation
//! - **Completion Signals**: one-shot notifications on natural completion
//! - **Float Label**: the focus-driven label float/reset state machine
//!
//! Animations are tick-driven: the host calls `tick(dt_ms)` from its
//! frame clock, and nothing here ever blocks.

pub mod easing;
pub mod float_label;
pub mod signal;
pub mod transition;

pub use easing::Easing;
pub use float_label::{compute_target_y, FloatLabelController, DURATION_MS, SCALE_FACTOR};
pub use signal::CompletionSignal;
pub use transition::TransformTransition;
