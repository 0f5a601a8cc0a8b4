//! Headless text field model
//!
//! Owns the editable text, prompt text, character limit, and the
//! floating-label controller. The emptiness/prompt gating that decides
//! whether label animations run lives here, so the controller itself
//! stays agnostic of text content.

use mdui_animation::FloatLabelController;
use mdui_core::{FloatMode, LabelGeometry, Transform2D};
use thiserror::Error;
use tracing::debug;

/// Errors from text field configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextFieldError {
    /// A limit of zero would make the field read-only by accident
    #[error("character limit must be at least 1")]
    ZeroCharLimit,
    /// Shrinking below existing content would truncate user text
    #[error("character limit {limit} is below the current text length {len}")]
    LimitBelowTextLength { limit: usize, len: usize },
}

/// Text field state with a floating label.
///
/// Hosts forward focus changes and typed input here, tick it from their
/// frame clock, and read [`label_transform`] each displayed frame.
///
/// [`label_transform`]: TextFieldModel::label_transform
#[derive(Debug)]
pub struct TextFieldModel {
    text: String,
    prompt_text: Option<String>,
    char_limit: Option<usize>,
    focused: bool,
    /// Master switch for label animations
    animated: bool,
    label: FloatLabelController,
}

impl TextFieldModel {
    /// Create an empty, unfocused field with label animations on
    pub fn new() -> Self {
        Self {
            text: String::new(),
            prompt_text: None,
            char_limit: None,
            focused: false,
            animated: true,
            label: FloatLabelController::new(),
        }
    }

    /// Builder: set the prompt text shown while the field is empty
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt_text = Some(prompt.into());
        self
    }

    /// Builder: set the float mode
    pub fn with_float_mode(mut self, mode: FloatMode) -> Self {
        self.label.configure(mode);
        self
    }

    // =========================================================================
    // Text content
    // =========================================================================

    /// The current text content
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if the field has no content
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The prompt text, if any
    pub fn prompt_text(&self) -> Option<&str> {
        self.prompt_text.as_deref()
    }

    /// Replace the content, truncated to the character limit
    pub fn set_text(&mut self, text: &str) {
        self.text = self.filtered(text, 0);
    }

    /// Append typed input, truncated to the remaining limit budget
    pub fn insert_text(&mut self, input: &str) {
        let accepted = self.filtered(input, self.text.chars().count());
        self.text.push_str(&accepted);
    }

    /// Keep the first characters of `input` that fit next to `used`
    /// already-consumed characters. Truncation happens on character
    /// boundaries, never mid-char.
    fn filtered(&self, input: &str, used: usize) -> String {
        let Some(limit) = self.char_limit else {
            return input.to_string();
        };
        let budget = limit.saturating_sub(used);
        let accepted: String = input.chars().take(budget).collect();
        let dropped = input.chars().count().saturating_sub(budget);
        if dropped > 0 {
            debug!(dropped, limit, "input truncated at character limit");
        }
        accepted
    }

    // =========================================================================
    // Character limit
    // =========================================================================

    /// The active character limit, if any
    pub fn char_limit(&self) -> Option<usize> {
        self.char_limit
    }

    /// Set the character limit.
    ///
    /// Rejects a zero limit and a limit below the current text length;
    /// existing content is never truncated by configuration.
    pub fn set_char_limit(&mut self, limit: usize) -> Result<(), TextFieldError> {
        if limit == 0 {
            return Err(TextFieldError::ZeroCharLimit);
        }
        let len = self.text.chars().count();
        if limit < len {
            return Err(TextFieldError::LimitBelowTextLength { limit, len });
        }
        self.char_limit = Some(limit);
        Ok(())
    }

    /// Remove the character limit
    pub fn clear_char_limit(&mut self) {
        self.char_limit = None;
    }

    // =========================================================================
    // Focus and the floating label
    // =========================================================================

    /// Whether the field currently has focus
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Forward a focus change to the label controller.
    ///
    /// Label animations run only when the animation switch is on, there
    /// is no prompt text, and the field has no content; that combined
    /// gate is computed here and handed to the controller.
    pub fn set_focused(&mut self, focused: bool) {
        if self.focused == focused {
            return;
        }
        self.focused = focused;
        let enabled = self.animations_enabled();
        self.label.on_focus_changed(focused, enabled);
    }

    /// Turn label animations on or off
    pub fn set_animated(&mut self, animated: bool) {
        self.animated = animated;
    }

    fn animations_enabled(&self) -> bool {
        self.animated && self.prompt_text.is_none() && self.text.is_empty()
    }

    /// Set the float mode on the label controller
    pub fn set_float_mode(&mut self, mode: FloatMode) {
        self.label.configure(mode);
    }

    /// Hand a fresh layout snapshot to the label controller
    pub fn update_geometry(&mut self, geometry: LabelGeometry) {
        self.label.update_geometry(geometry);
    }

    /// Advance label animation by delta time (in milliseconds)
    pub fn tick(&mut self, dt_ms: f32) {
        self.label.tick(dt_ms);
    }

    /// The label's current transform
    pub fn label_transform(&self) -> Transform2D {
        self.label.sample()
    }

    /// The label controller
    pub fn label(&self) -> &FloatLabelController {
        &self.label
    }

    /// The label controller, for completion-callback registration
    pub fn label_mut(&mut self) -> &mut FloatLabelController {
        &mut self.label
    }
}

impl Default for TextFieldModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_respects_char_limit() {
        let mut field = TextFieldModel::new();
        field.set_char_limit(5).unwrap();

        field.insert_text("hello world");
        assert_eq!(field.text(), "hello");

        // Budget exhausted; further input is dropped entirely
        field.insert_text("!");
        assert_eq!(field.text(), "hello");
    }

    #[test]
    fn test_insert_counts_chars_not_bytes() {
        let mut field = TextFieldModel::new();
        field.set_char_limit(3).unwrap();

        field.insert_text("héllo");
        assert_eq!(field.text(), "hél");
        assert_eq!(field.text().chars().count(), 3);
    }

    #[test]
    fn test_set_text_truncates() {
        let mut field = TextFieldModel::new();
        field.set_char_limit(4).unwrap();

        field.set_text("abcdef");
        assert_eq!(field.text(), "abcd");
    }

    #[test]
    fn test_unlimited_without_limit() {
        let mut field = TextFieldModel::new();
        field.insert_text(&"x".repeat(10_000));
        assert_eq!(field.text().len(), 10_000);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let mut field = TextFieldModel::new();
        assert_eq!(field.set_char_limit(0), Err(TextFieldError::ZeroCharLimit));
        assert_eq!(field.char_limit(), None);
    }

    #[test]
    fn test_limit_below_content_rejected() {
        let mut field = TextFieldModel::new();
        field.set_text("hello");

        let err = field.set_char_limit(3).unwrap_err();
        assert_eq!(
            err,
            TextFieldError::LimitBelowTextLength { limit: 3, len: 5 }
        );
        // Content untouched, limit not applied
        assert_eq!(field.text(), "hello");
        assert_eq!(field.char_limit(), None);
    }

    #[test]
    fn test_limit_equal_to_content_accepted() {
        let mut field = TextFieldModel::new();
        field.set_text("hello");
        assert!(field.set_char_limit(5).is_ok());
    }

    #[test]
    fn test_prompt_text_disables_label_animation() {
        let mut field = TextFieldModel::new().with_prompt("Name");
        field.set_float_mode(FloatMode::Above);
        field.update_geometry(LabelGeometry::new(4.0, 20.0, 0.0, 10.0));

        field.set_focused(true);
        field.tick(300.0);

        assert_eq!(field.label_transform(), Transform2D::identity());
    }

    #[test]
    fn test_content_disables_label_animation() {
        let mut field = TextFieldModel::new();
        field.set_float_mode(FloatMode::Above);
        field.update_geometry(LabelGeometry::new(4.0, 20.0, 0.0, 10.0));
        field.insert_text("typed");

        field.set_focused(true);
        field.tick(300.0);

        assert_eq!(field.label_transform(), Transform2D::identity());
    }

    #[test]
    fn test_redundant_focus_is_ignored() {
        let mut field = TextFieldModel::new();
        field.set_float_mode(FloatMode::Border);
        field.update_geometry(LabelGeometry::new(4.0, 20.0, 0.0, 10.0));

        field.set_focused(true);
        field.tick(300.0);
        let floated = field.label_transform();

        // Re-reporting the same focus state must not restart anything
        field.set_focused(true);
        assert_eq!(field.label_transform(), floated);
    }
}
