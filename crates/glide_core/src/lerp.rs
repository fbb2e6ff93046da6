//! Linear blending between two endpoint values
//!
//! The blend is evaluated as `start * (1 - t) + end * t` so that `t == 0`
//! yields `start` and `t == 1` yields `end` bit-for-bit. `t` is not clamped:
//! overshoot curves (back, elastic) push values past either endpoint.

use crate::geometry::{Color, Vec2, Vec3};

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for super::Color {}
    impl Sealed for super::Vec2 {}
    impl Sealed for super::Vec3 {}
}

/// A value that can be blended channel by channel.
///
/// Implemented for `f32`, `Color`, `Vec2` and `Vec3` only.
pub trait Lerp: Copy + sealed::Sealed {
    /// Blend from `self` toward `end` by factor `t`
    fn lerp(self, end: Self, t: f32) -> Self;
}

#[inline]
fn mix(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

impl Lerp for f32 {
    fn lerp(self, end: f32, t: f32) -> f32 {
        mix(self, end, t)
    }
}

impl Lerp for Vec2 {
    fn lerp(self, end: Vec2, t: f32) -> Vec2 {
        Vec2::new(mix(self.x, end.x, t), mix(self.y, end.y, t))
    }
}

impl Lerp for Vec3 {
    fn lerp(self, end: Vec3, t: f32) -> Vec3 {
        Vec3::new(
            mix(self.x, end.x, t),
            mix(self.y, end.y, t),
            mix(self.z, end.z, t),
        )
    }
}

impl Lerp for Color {
    fn lerp(self, end: Color, t: f32) -> Color {
        Color::rgba(
            mix(self.r, end.r, t),
            mix(self.g, end.g, t),
            mix(self.b, end.b, t),
            mix(self.a, end.a, t),
        )
    }
}
