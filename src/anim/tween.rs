use crate::coroutine::{Coroutine, Step};
use crate::sched::context::Ctx;

/// Creates a coroutine that animates a progress value over a duration.
///
/// On each resumption the tween accumulates elapsed animation time
/// (`delta * speed`, nothing while paused), computes the normalized
/// progress `t` in `0.0..=1.0`, and invokes `on_progress(t, done)`. It
/// bare-yields while `t < 1.0` and completes on the resumption where `t`
/// reaches `1.0`.
///
/// While the manager is seeking, `t` is forced to `1.0` on the very next
/// resumption regardless of elapsed time, so scrubbing to a target step
/// fast-forwards the visual state instantly instead of animating.
///
/// Completing a tween marks one logical step on the clock. Step indices
/// therefore count finished tweens, not frames, which is what keeps live
/// playback and seek replay on the same step sequence.
///
/// A non-positive duration completes on the first resumption with
/// `t = 1.0`.
///
/// # Examples
///
/// ```rust,ignore
/// runner.add(tween(0.5, |t, _done| {
///     circle.set_radius(10.0 + t * 40.0);
/// }));
/// ```
pub fn tween<F>(duration_seconds: f64, on_progress: F) -> Tween<F>
where
    F: FnMut(f64, bool),
{
    Tween {
        duration: duration_seconds,
        elapsed: 0.0,
        on_progress,
    }
}

/// A duration-based progress coroutine. Created by [`tween`].
pub struct Tween<F> {
    /// Total animation time in seconds.
    duration: f64,

    /// Animation time accumulated so far.
    elapsed: f64,

    /// Invoked with `(t, done)` on every resumption.
    on_progress: F,
}

impl<F> Coroutine for Tween<F>
where
    F: FnMut(f64, bool),
{
    fn resume(&mut self, ctx: &mut Ctx<'_>) -> Step {
        let t = if ctx.is_seeking() || self.duration <= 0.0 {
            1.0
        } else {
            if ctx.playing() {
                self.elapsed += ctx.delta_seconds() * ctx.speed();
            }

            (self.elapsed / self.duration).clamp(0.0, 1.0)
        };

        let done = t >= 1.0;
        (self.on_progress)(t, done);

        if done {
            ctx.mark_step();
            Step::Done
        } else {
            Step::Yield
        }
    }
}
