//! mdui Core Types
//!
//! Foundational value types shared by the mdui crates:
//!
//! - **Transform2D**: the scale/translate output of label animations
//! - **LabelGeometry**: pull-based layout snapshots for target computation
//! - **FloatMode / AnimationState**: floating-label configuration and state

pub mod geometry;
pub mod mode;
pub mod transform;

pub use geometry::LabelGeometry;
pub use mode::{AnimationState, FloatMode};
pub use transform::Transform2D;
