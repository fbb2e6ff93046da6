//! Tick-driven tweens
//!
//! A [`Tween`] interpolates between two values over time and pushes each
//! intermediate value into a sink. It never schedules itself: the host calls
//! [`Tween::tick`] once per frame with the frame's elapsed time and drops the
//! tween once it reports [`TweenPhase::Completed`].

use std::fmt;
use std::ops::ControlFlow;

use glide_core::Lerp;

use crate::config::TweenConfig;

/// Receives each interpolated value. `Break` means the target is gone.
pub(crate) type Sink<T> = Box<dyn FnMut(T) -> ControlFlow<()> + Send>;

/// Completion callback, invoked at most once
type Callback = Box<dyn FnOnce() + Send>;

/// Lifecycle of a tween
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenPhase {
    /// Waiting out the start delay; nothing has been written yet
    Pending,
    /// Writing an interpolated value every tick
    Running,
    /// Final value written; further ticks are no-ops
    Completed,
}

/// A single in-flight interpolation between `start` and `end`
pub struct Tween<T: Lerp> {
    config: TweenConfig,
    start: T,
    end: T,
    sink: Sink<T>,
    on_complete: Option<Callback>,
    phase: TweenPhase,
    time_scale: f32,
    /// Seconds spent in `Pending`
    waited: f32,
    /// Seconds spent in `Running`, clamped to the duration on the last step
    elapsed: f32,
    progress: f32,
}

impl<T: Lerp> Tween<T> {
    pub(crate) fn new(
        mut config: TweenConfig,
        start: T,
        end: T,
        time_scale: f32,
        sink: Sink<T>,
    ) -> Self {
        if config.delay.is_nan() || config.delay < 0.0 {
            tracing::warn!(delay = config.delay, "invalid tween delay, starting immediately");
            config.delay = 0.0;
        }

        let phase = if config.delay > 0.0 {
            TweenPhase::Pending
        } else {
            TweenPhase::Running
        };

        Self {
            config,
            start,
            end,
            sink,
            on_complete: None,
            phase,
            time_scale,
            waited: 0.0,
            elapsed: 0.0,
            progress: 0.0,
        }
    }

    /// Builder: run `callback` once, right after the final value is written
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Advance by `dt` seconds of host time and write the new value.
    ///
    /// The tick that exhausts the delay only starts the tween; the first write
    /// happens on the following tick. The tick that reaches the duration writes
    /// exactly `end` and then fires the completion callback.
    pub fn tick(&mut self, dt: f32) -> TweenPhase {
        let dt = if dt.is_finite() && dt >= 0.0 {
            dt * self.time_scale
        } else {
            tracing::warn!(dt, "ignoring invalid tick delta");
            0.0
        };

        match self.phase {
            TweenPhase::Completed => return TweenPhase::Completed,
            TweenPhase::Pending => {
                self.waited += dt;
                if self.waited >= self.config.delay {
                    tracing::debug!(delay = self.config.delay, "tween delay elapsed");
                    self.phase = TweenPhase::Running;
                }
                return self.phase;
            }
            TweenPhase::Running => {}
        }

        let duration = self.config.duration;
        self.elapsed += dt;

        let finished = duration.is_nan() || duration <= 0.0 || self.elapsed >= duration;
        self.progress = if finished {
            self.elapsed = duration.max(0.0);
            1.0
        } else {
            self.elapsed / duration
        };

        let eased = self.eased_progress();
        tracing::trace!(
            progress = self.progress,
            eased,
            easing = %self.config.easing,
            "tween step"
        );

        if (self.sink)(self.start.lerp(self.end, eased)).is_break() {
            tracing::debug!("tween target dropped, halting");
            self.on_complete = None;
            self.phase = TweenPhase::Completed;
            return self.phase;
        }

        if finished {
            self.phase = TweenPhase::Completed;
            tracing::debug!(duration, "tween completed");
            if let Some(callback) = self.on_complete.take() {
                callback();
            }
        }

        self.phase
    }

    pub fn phase(&self) -> TweenPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == TweenPhase::Completed
    }

    /// Normalized progress in `[0, 1]` as of the last write
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Progress after the easing curve; may leave `[0, 1]` for overshoot curves
    pub fn eased_progress(&self) -> f32 {
        self.config.easing.apply(self.progress)
    }

    pub fn config(&self) -> &TweenConfig {
        &self.config
    }
}

impl<T: Lerp + fmt::Debug> fmt::Debug for Tween<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tween")
            .field("config", &self.config)
            .field("start", &self.start)
            .field("end", &self.end)
            .field("phase", &self.phase)
            .field("elapsed", &self.elapsed)
            .field("progress", &self.progress)
            .field("has_callback", &self.on_complete.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;
    use std::sync::{Arc, Mutex};

    fn recording(
        config: TweenConfig,
        start: f32,
        end: f32,
    ) -> (Tween<f32>, Arc<Mutex<Vec<f32>>>) {
        let writes = Arc::new(Mutex::new(Vec::new()));
        let sink_writes = writes.clone();
        let tween = Tween::new(
            config,
            start,
            end,
            1.0,
            Box::new(move |v: f32| -> ControlFlow<()> {
                sink_writes.lock().unwrap().push(v);
                ControlFlow::Continue(())
            }),
        );
        (tween, writes)
    }

    #[test]
    fn test_zero_delay_starts_running() {
        let (tween, _) = recording(TweenConfig::new(1.0), 0.0, 1.0);
        assert_eq!(tween.phase(), TweenPhase::Running);
    }

    #[test]
    fn test_negative_delay_is_ignored() {
        let (tween, _) = recording(TweenConfig::new(1.0).delay(-2.0), 0.0, 1.0);
        assert_eq!(tween.phase(), TweenPhase::Running);
        assert_eq!(tween.config().delay, 0.0);
    }

    #[test]
    fn test_nan_delay_is_ignored() {
        let (mut tween, writes) = recording(TweenConfig::new(1.0).delay(f32::NAN), 0.0, 100.0);
        assert_eq!(tween.phase(), TweenPhase::Running);
        assert_eq!(tween.config().delay, 0.0);

        assert_eq!(tween.tick(0.25), TweenPhase::Running);
        assert_eq!(*writes.lock().unwrap(), vec![25.0]);
    }

    #[test]
    fn test_overshooting_tick_lands_on_end() {
        let config = TweenConfig::new(1.0).easing(Easing::EaseOutQuad);
        let (mut tween, writes) = recording(config, 2.0, 4.0);
        assert_eq!(tween.tick(0.6), TweenPhase::Running);
        assert_eq!(tween.tick(0.7), TweenPhase::Completed);
        assert_eq!(tween.progress(), 1.0);
        assert_eq!(*writes.lock().unwrap().last().unwrap(), 4.0);
    }

    #[test]
    fn test_completed_ticks_are_noops() {
        let (mut tween, writes) = recording(TweenConfig::new(0.5), 0.0, 1.0);
        tween.tick(1.0);
        assert!(tween.is_complete());
        tween.tick(1.0);
        tween.tick(1.0);
        assert_eq!(writes.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_dt_does_not_advance() {
        let (mut tween, writes) = recording(TweenConfig::new(1.0), 0.0, 10.0);
        tween.tick(f32::NAN);
        tween.tick(-1.0);
        assert_eq!(tween.progress(), 0.0);
        assert_eq!(*writes.lock().unwrap(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_nan_duration_jumps_to_end() {
        let (mut tween, writes) = recording(TweenConfig::new(f32::NAN), 0.0, 10.0);
        assert_eq!(tween.tick(0.016), TweenPhase::Completed);
        assert_eq!(*writes.lock().unwrap(), vec![10.0]);
    }

    #[test]
    fn test_eased_progress_can_overshoot() {
        let config = TweenConfig::new(1.0).easing(Easing::EaseOutBack);
        let (mut tween, _) = recording(config, 0.0, 1.0);
        tween.tick(0.7);
        assert!(tween.eased_progress() > 1.0);
    }

    #[test]
    fn test_broken_sink_halts_without_callback() {
        let fired = Arc::new(Mutex::new(false));
        let fired_clone = fired.clone();
        let mut tween = Tween::new(
            TweenConfig::new(0.1),
            0.0f32,
            1.0,
            1.0,
            Box::new(|_: f32| ControlFlow::<()>::Break(())),
        )
        .on_complete(move || *fired_clone.lock().unwrap() = true);

        assert_eq!(tween.tick(1.0), TweenPhase::Completed);
        assert!(!*fired.lock().unwrap());
    }

    #[test]
    fn test_debug_output_names_phase() {
        let (tween, _) = recording(TweenConfig::new(1.0).delay(0.5), 0.0, 1.0);
        let debug = format!("{tween:?}");
        assert!(debug.contains("Pending"));
    }
}
