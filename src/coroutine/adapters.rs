use crate::coroutine::{Coroutine, Step};
use crate::sched::context::Ctx;

use std::collections::VecDeque;

/// Creates a coroutine from a closure.
///
/// The closure is invoked once per resumption and returns the [`Step`] for
/// that tick. State lives in the closure's captures, making this the
/// lightest way to write ad-hoc coroutines:
///
/// ```rust,ignore
/// let mut remaining = 3;
/// let countdown = resume_fn(move |_ctx| {
///     if remaining == 0 {
///         return Step::Done;
///     }
///     remaining -= 1;
///     Step::Yield
/// });
/// ```
pub fn resume_fn<F>(f: F) -> ResumeFn<F>
where
    F: FnMut(&mut Ctx<'_>) -> Step,
{
    ResumeFn { f }
}

/// A coroutine backed by a closure. Created by [`resume_fn`].
pub struct ResumeFn<F> {
    /// The resumption closure.
    f: F,
}

impl<F> Coroutine for ResumeFn<F>
where
    F: FnMut(&mut Ctx<'_>) -> Step,
{
    fn resume(&mut self, ctx: &mut Ctx<'_>) -> Step {
        (self.f)(ctx)
    }
}

/// Runs a list of coroutines one after another.
///
/// Each stage is issued as a call-yield, so the sequence itself never
/// suspends: a run of stages that complete without bare-yielding unwinds
/// entirely within one tick, and a stage that yields suspends the whole
/// chain as usual.
///
/// # Examples
///
/// ```rust,ignore
/// runner.add(sequence(vec![
///     Box::new(wait_seconds(0.5)),
///     Box::new(wait_seconds(0.5)),
/// ]));
/// ```
pub fn sequence(stages: Vec<Box<dyn Coroutine>>) -> Sequence {
    Sequence {
        stages: stages.into(),
    }
}

/// A coroutine that calls each of its stages in order. Created by
/// [`sequence`].
pub struct Sequence {
    /// Stages not yet started, front first.
    stages: VecDeque<Box<dyn Coroutine>>,
}

impl Coroutine for Sequence {
    /// Issues the next stage as a call, or completes when none remain.
    fn resume(&mut self, _ctx: &mut Ctx<'_>) -> Step {
        match self.stages.pop_front() {
            Some(stage) => Step::Call(stage),
            None => Step::Done,
        }
    }
}
