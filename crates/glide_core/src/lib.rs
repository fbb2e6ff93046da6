//! Glide Core
//!
//! Value types and seams shared by the Glide animation crates:
//!
//! - **Geometry**: `Vec2`, `Vec3` and linear-space RGBA `Color`
//! - **Blending**: the `Lerp` trait, implemented for the four animatable types
//! - **Transforms**: the `TransformTarget` seam and a minimal reference `Transform`
//!
//! # Example
//!
//! ```rust
//! use glide_core::{Color, Lerp};
//!
//! let grey = Color::rgba(0.0, 0.0, 0.0, 1.0).lerp(Color::WHITE, 0.5);
//! assert_eq!(grey, Color::rgba(0.5, 0.5, 0.5, 1.0));
//! ```

pub mod error;
pub mod geometry;
pub mod lerp;
pub mod transform;

pub use error::{Error, Result};
pub use geometry::{Color, Vec2, Vec3};
pub use lerp::Lerp;
pub use transform::{Space, Transform, TransformProperty, TransformTarget};
