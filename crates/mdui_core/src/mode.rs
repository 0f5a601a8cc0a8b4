//! Floating-label configuration and state

/// Where the label floats when its field is focused.
///
/// Set externally (theme or per-field configuration); the controller
/// only reads it to pick the target-Y formula.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FloatMode {
    /// Label never floats; the transform stays at the resting identity
    #[default]
    Disabled,
    /// Float to sit fully above the field border
    Above,
    /// Float to straddle the field border
    Border,
    /// Float to the top inside edge of the field
    Inside,
}

/// Which position the label currently occupies.
///
/// Exactly one state holds at any time; transitions happen only through
/// the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationState {
    /// Natural position at full scale
    #[default]
    Resting,
    /// Scaled down and offset to the floated position
    Floated,
}
