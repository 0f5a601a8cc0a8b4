//! Press-point ripples
//!
//! Geometry and playback for the expanding ripple highlight: a ripple
//! centers on the press point and grows until it covers the farthest
//! corner of the control's bounds, fading out over the same window.

use mdui_animation::Easing;
use slotmap::{new_key_type, SlotMap};
use tracing::trace;

/// Default ripple duration in milliseconds
pub const RIPPLE_DURATION_MS: f32 = 300.0;

new_key_type! {
    /// Key for an active ripple in a [`RippleField`]
    pub struct RippleId;
}

/// A sampled ripple frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleFrame {
    /// Ripple center X within the control, in pixels
    pub center_x: f32,
    /// Ripple center Y within the control, in pixels
    pub center_y: f32,
    /// Current radius in pixels
    pub radius: f32,
    /// Current opacity (1.0 at press, 0.0 when finished)
    pub opacity: f32,
}

/// A single expanding ripple
#[derive(Clone, Debug)]
pub struct Ripple {
    center_x: f32,
    center_y: f32,
    target_radius: f32,
    duration_ms: f32,
    elapsed_ms: f32,
    easing: Easing,
}

impl Ripple {
    /// Spawn a ripple at a press point within `width` x `height` bounds.
    ///
    /// The target radius is the distance from the press point to the
    /// farthest corner of the bounds, so the fully-expanded ripple
    /// always covers the whole control.
    pub fn at(press_x: f32, press_y: f32, width: f32, height: f32) -> Self {
        let dx = press_x.max(width - press_x);
        let dy = press_y.max(height - press_y);
        Self {
            center_x: press_x,
            center_y: press_y,
            target_radius: (dx * dx + dy * dy).sqrt(),
            duration_ms: RIPPLE_DURATION_MS,
            elapsed_ms: 0.0,
            easing: Easing::STANDARD,
        }
    }

    /// Builder: clamp the expansion to a maximum radius
    pub fn with_max_radius(mut self, max_radius: f32) -> Self {
        self.target_radius = self.target_radius.min(max_radius);
        self
    }

    /// Builder: override the duration
    pub fn with_duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// The radius the ripple expands toward
    pub fn target_radius(&self) -> f32 {
        self.target_radius
    }

    /// Get the current progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Check if the ripple has fully expanded and faded
    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    /// Advance by delta time (in milliseconds)
    pub fn tick(&mut self, dt_ms: f32) {
        self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.duration_ms);
    }

    /// Get the current frame: eased radius, linear fade
    pub fn sample(&self) -> RippleFrame {
        let progress = self.progress();
        RippleFrame {
            center_x: self.center_x,
            center_y: self.center_y,
            radius: self.target_radius * self.easing.apply(progress),
            opacity: 1.0 - progress,
        }
    }
}

/// The set of live ripples on one control.
///
/// Controls spawn a ripple per press and tick the whole set each frame;
/// finished ripples are dropped automatically.
#[derive(Debug, Default)]
pub struct RippleField {
    ripples: SlotMap<RippleId, Ripple>,
    max_radius: Option<f32>,
}

impl RippleField {
    /// Create an empty field
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp every future ripple to a maximum radius
    pub fn set_max_radius(&mut self, max_radius: Option<f32>) {
        self.max_radius = max_radius;
    }

    /// Spawn a ripple for a press at (x, y) within the control bounds
    pub fn press(&mut self, x: f32, y: f32, width: f32, height: f32) -> RippleId {
        let mut ripple = Ripple::at(x, y, width, height);
        if let Some(max_radius) = self.max_radius {
            ripple = ripple.with_max_radius(max_radius);
        }
        trace!(x, y, target = ripple.target_radius(), "ripple spawned");
        self.ripples.insert(ripple)
    }

    /// Advance every ripple and drop the finished ones
    pub fn tick(&mut self, dt_ms: f32) {
        for (_, ripple) in self.ripples.iter_mut() {
            ripple.tick(dt_ms);
        }
        self.ripples.retain(|_, ripple| !ripple.is_finished());
    }

    /// Iterate over the live ripples' current frames
    pub fn frames(&self) -> impl Iterator<Item = (RippleId, RippleFrame)> + '_ {
        self.ripples.iter().map(|(id, ripple)| (id, ripple.sample()))
    }

    /// Number of live ripples
    pub fn active_count(&self) -> usize {
        self.ripples.len()
    }

    /// Check if no ripple is playing
    pub fn is_idle(&self) -> bool {
        self.ripples.is_empty()
    }
}
