//! Layout geometry snapshots

/// Geometry inputs for computing the floated label position.
///
/// The host's layout pass determines these lazily, so callers pull a
/// fresh snapshot on demand and hand it to the controller before a
/// transition, rather than pushing every intermediate layout change.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LabelGeometry {
    /// Left padding of the label within the field, in pixels
    pub label_padding_left: f32,
    /// Height of the label's layout bounds
    pub label_height: f32,
    /// Min-Y of the field in parent coordinates
    pub field_min_y: f32,
    /// Min-Y of the label in parent coordinates
    pub label_min_y: f32,
}

impl LabelGeometry {
    /// Create a snapshot from its four measurements
    pub const fn new(
        label_padding_left: f32,
        label_height: f32,
        field_min_y: f32,
        label_min_y: f32,
    ) -> Self {
        Self {
            label_padding_left,
            label_height,
            field_min_y,
            label_min_y,
        }
    }
}
