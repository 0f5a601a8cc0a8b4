//! Time-boxed transform transitions

use mdui_core::Transform2D;

use crate::easing::Easing;

/// A fixed-duration interpolation between two transforms.
///
/// Start value, end value, duration, and easing are fixed at
/// construction; the host drives the clock by calling [`tick`] with
/// frame deltas. Stopping freezes the transition at its current value,
/// while running to the natural end snaps exactly onto the end value.
///
/// [`tick`]: TransformTransition::tick
#[derive(Clone, Debug)]
pub struct TransformTransition {
    from: Transform2D,
    to: Transform2D,
    duration_ms: f32,
    easing: Easing,
    elapsed_ms: f32,
    playing: bool,
}

impl TransformTransition {
    /// Create a transition; it starts playing immediately
    pub fn new(from: Transform2D, to: Transform2D, duration_ms: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing,
            elapsed_ms: 0.0,
            playing: true,
        }
    }

    /// Get the current progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Get the current interpolated transform
    pub fn sample(&self) -> Transform2D {
        self.from.lerp(&self.to, self.easing.apply(self.progress()))
    }

    /// The transform this transition ends on
    pub fn end_value(&self) -> Transform2D {
        self.to
    }

    /// Check if the transition is still running
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Freeze at the current value without snapping to either endpoint
    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Advance by delta time (in milliseconds).
    ///
    /// Returns `true` on the tick that reaches the natural endpoint; a
    /// stopped transition never reports completion.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if !self.playing {
            return false;
        }

        self.elapsed_ms += dt_ms;

        if self.elapsed_ms >= self.duration_ms {
            self.elapsed_ms = self.duration_ms;
            self.playing = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> (Transform2D, Transform2D) {
        (
            Transform2D::identity(),
            Transform2D::new(0.75, 0.75, 2.0, -30.0),
        )
    }

    #[test]
    fn test_starts_at_from() {
        let (from, to) = endpoints();
        let transition = TransformTransition::new(from, to, 150.0, Easing::EaseInOut);
        assert_eq!(transition.sample(), from);
        assert!(transition.is_playing());
    }

    #[test]
    fn test_completes_on_final_tick() {
        let (from, to) = endpoints();
        let mut transition = TransformTransition::new(from, to, 150.0, Easing::EaseInOut);

        assert!(!transition.tick(100.0));
        assert!(transition.tick(50.0));
        assert!(!transition.is_playing());
        assert_eq!(transition.sample(), to);

        // Further ticks do not report completion again
        assert!(!transition.tick(16.0));
    }

    #[test]
    fn test_stop_freezes_mid_value() {
        let (from, to) = endpoints();
        let mut transition = TransformTransition::new(from, to, 150.0, Easing::Linear);

        transition.tick(75.0);
        transition.stop();
        let frozen = transition.sample();

        assert!(frozen.scale_x < from.scale_x && frozen.scale_x > to.scale_x);
        // Stopped transitions ignore further time
        transition.tick(1000.0);
        assert_eq!(transition.sample(), frozen);
    }

    #[test]
    fn test_zero_duration_is_complete() {
        let (from, to) = endpoints();
        let transition = TransformTransition::new(from, to, 0.0, Easing::Linear);
        assert_eq!(transition.progress(), 1.0);
        assert_eq!(transition.sample(), to);
    }
}
