use crate::anim::tween::{Tween, tween};

/// Creates a coroutine that waits for the given animation time.
///
/// Equivalent to a [`tween`] with a no-op progress callback: it respects
/// speed and pause, collapses instantly while seeking, and marks one
/// logical step on completion.
///
/// # Examples
///
/// ```rust,ignore
/// runner.add(sequence(vec![
///     Box::new(wait_seconds(1.0)),
///     Box::new(flash_highlight()),
/// ]));
/// ```
pub fn wait_seconds(duration_seconds: f64) -> Tween<impl FnMut(f64, bool)> {
    tween(duration_seconds, |_t, _done| {})
}
