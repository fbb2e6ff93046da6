//! Tween driver
//!
//! [`Tweener`] is the entry point for starting animations. It is a plain value:
//! hold one wherever animations are started, or create one on the spot. Each
//! method returns an independent [`Tween`] that the host ticks every frame.

use std::ops::ControlFlow;
use std::sync::{Arc, Mutex, PoisonError, Weak};

use glide_core::{Color, Lerp, TransformProperty, TransformTarget, Vec2, Vec3};

use crate::config::TweenConfig;
use crate::tween::{Sink, Tween};

/// Creates tweens that share a time scale
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tweener {
    time_scale: f32,
}

impl Tweener {
    pub fn new() -> Self {
        Self { time_scale: 1.0 }
    }

    /// Builder: multiply every tick delta of tweens created afterwards.
    ///
    /// `0.5` runs animations at half speed; `0.0` freezes them.
    pub fn with_time_scale(mut self, scale: f32) -> Self {
        if scale.is_finite() && scale >= 0.0 {
            self.time_scale = scale;
        } else {
            tracing::warn!(scale, "invalid time scale, keeping {}", self.time_scale);
        }
        self
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Animate a scalar, passing each value to `target`
    pub fn value<F>(&self, config: TweenConfig, start: f32, end: f32, target: F) -> Tween<f32>
    where
        F: FnMut(f32) + Send + 'static,
    {
        self.spawn(config, start, end, callback_sink(target))
    }

    /// Animate a color, passing each value to `target`
    pub fn color<F>(&self, config: TweenConfig, start: Color, end: Color, target: F) -> Tween<Color>
    where
        F: FnMut(Color) + Send + 'static,
    {
        self.spawn(config, start, end, callback_sink(target))
    }

    /// Animate one property of a transform.
    ///
    /// Position and rotation honor `config.space`; scale is always local. The
    /// tween holds the target weakly and halts, without firing its completion
    /// callback, once the host drops it.
    pub fn transform<T>(
        &self,
        property: TransformProperty,
        config: TweenConfig,
        target: &Arc<Mutex<T>>,
        start: Vec3,
        end: Vec3,
    ) -> Tween<Vec3>
    where
        T: TransformTarget + Send + 'static,
    {
        self.spawn(config, start, end, transform_sink(property, config, target))
    }

    /// Animate one property of a transform from 2D endpoints.
    ///
    /// Values are blended in 2D and written with `z = 0`.
    pub fn transform_2d<T>(
        &self,
        property: TransformProperty,
        config: TweenConfig,
        target: &Arc<Mutex<T>>,
        start: Vec2,
        end: Vec2,
    ) -> Tween<Vec2>
    where
        T: TransformTarget + Send + 'static,
    {
        let mut write = transform_sink(property, config, target);
        self.spawn(config, start, end, Box::new(move |v: Vec2| write(Vec3::from(v))))
    }

    fn spawn<V: Lerp>(&self, config: TweenConfig, start: V, end: V, sink: Sink<V>) -> Tween<V> {
        tracing::debug!(
            easing = %config.easing,
            duration = config.duration,
            delay = config.delay,
            "starting tween"
        );
        Tween::new(config, start, end, self.time_scale, sink)
    }
}

impl Default for Tweener {
    fn default() -> Self {
        Self::new()
    }
}

fn callback_sink<V, F>(mut target: F) -> Sink<V>
where
    V: Lerp,
    F: FnMut(V) + Send + 'static,
{
    Box::new(move |value: V| -> ControlFlow<()> {
        target(value);
        ControlFlow::Continue(())
    })
}

fn transform_sink<T>(
    property: TransformProperty,
    config: TweenConfig,
    target: &Arc<Mutex<T>>,
) -> Sink<Vec3>
where
    T: TransformTarget + Send + 'static,
{
    let target: Weak<Mutex<T>> = Arc::downgrade(target);
    let space = config.space;
    Box::new(move |value: Vec3| -> ControlFlow<()> {
        let Some(target) = target.upgrade() else {
            return ControlFlow::Break(());
        };
        let mut node = target.lock().unwrap_or_else(PoisonError::into_inner);
        property.write(&mut *node, value, space);
        ControlFlow::Continue(())
    })
}
