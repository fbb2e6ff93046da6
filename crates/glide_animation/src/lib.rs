//! Glide Animation System
//!
//! Easing curves and tick-driven tweens.
//!
//! # Features
//!
//! - **Easing**: the 31 Penner curves (linear plus in/out/in-out quad, cubic,
//!   quart, quint, sine, expo, circ, back, elastic and bounce)
//! - **Tweens**: animate a scalar, color or transform property with a start
//!   delay and a completion callback
//! - **Host-driven**: tweens advance only when the host calls `tick(dt)`
//!
//! # Example
//!
//! ```rust
//! use glide_animation::{Easing, TweenConfig, TweenPhase, Tweener};
//! use std::sync::{Arc, Mutex};
//!
//! let opacity = Arc::new(Mutex::new(0.0f32));
//! let sink = opacity.clone();
//!
//! let mut fade = Tweener::new().value(
//!     TweenConfig::new(0.5).easing(Easing::EaseOutCubic),
//!     0.0,
//!     1.0,
//!     move |v| *sink.lock().unwrap() = v,
//! );
//!
//! while fade.tick(1.0 / 60.0) != TweenPhase::Completed {}
//! assert_eq!(*opacity.lock().unwrap(), 1.0);
//! ```

pub mod config;
pub mod driver;
pub mod easing;
pub mod tween;

pub use config::TweenConfig;
pub use driver::Tweener;
pub use easing::{evaluate, Easing};
pub use glide_core::{
    Color, Error, Lerp, Result, Space, Transform, TransformProperty, TransformTarget, Vec2, Vec3,
};
pub use tween::{Tween, TweenPhase};
