//! Tween configuration

use glide_core::Space;

use crate::easing::Easing;

/// Timing and curve parameters for a single tween
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct TweenConfig {
    /// Curve applied to normalized progress
    pub easing: Easing,
    /// Seconds from first write to last; `<= 0` jumps straight to the end value
    pub duration: f32,
    /// Seconds to wait before the first write
    pub delay: f32,
    /// Coordinate space for position and rotation writes
    pub space: Space,
}

impl TweenConfig {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            ..Default::default()
        }
    }

    /// Builder: set the easing curve
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Builder: set the start delay in seconds
    pub fn delay(mut self, seconds: f32) -> Self {
        self.delay = seconds;
        self
    }

    /// Builder: set the coordinate space
    pub fn space(mut self, space: Space) -> Self {
        self.space = space;
        self
    }

    /// Builder: write transforms in local space
    pub fn local(self) -> Self {
        self.space(Space::Local)
    }
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self {
            easing: Easing::Linear,
            duration: 1.0,
            delay: 0.0,
            space: Space::World,
        }
    }
}
