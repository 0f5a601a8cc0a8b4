//! mdui Control Models
//!
//! Headless state models for the mdui controls. The rendering toolkit
//! owns composition, styling, and event plumbing; these types own the
//! interesting state:
//!
//! - **TextFieldModel**: text, prompt, character limit, and the
//!   floating-label controller with its focus/emptiness gating
//! - **Ripple / RippleField**: press-point ripple geometry and playback
//! - **ToggleGroup**: single-selection navigation state

pub mod ripple;
pub mod text_field;
pub mod toggle_group;

pub use ripple::{Ripple, RippleField, RippleFrame, RippleId};
pub use text_field::{TextFieldError, TextFieldModel};
pub use toggle_group::ToggleGroup;
