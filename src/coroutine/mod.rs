//! Coroutine primitives.
//!
//! This module defines the resumable-computation abstraction the scheduler
//! drives.
//!
//! It includes:
//! - the [`Coroutine`] trait, implemented by anything the scheduler can
//!   resume,
//! - the [`Step`] outcome reported by each resumption,
//! - adapters for building coroutines from closures and sequences.
//!
//! A coroutine is resumed once per tick at most; what it returns decides
//! whether the chain keeps unwinding within the current tick or suspends
//! until the next one.

pub(crate) mod adapters;

#[doc(inline)]
pub use adapters::{ResumeFn, Sequence, resume_fn, sequence};

use crate::sched::context::Ctx;

/// A resumable computation driven by the scheduler.
///
/// Each call to [`resume`](Self::resume) runs the computation until it
/// reports a [`Step`]: finished, suspended for one tick, or calling into a
/// sub-coroutine. The trait is object-safe; chains store coroutines as
/// `Box<dyn Coroutine>`.
///
/// Implementations are ordinary host code and may mutate arbitrary external
/// state as a side effect of each resumption; the scheduler does not batch,
/// defer, or interpose on those effects.
pub trait Coroutine {
    /// Resumes the computation for the current tick.
    ///
    /// The context gives access to the host frame timing and the step
    /// clock. A coroutine is never resumed again after returning
    /// [`Step::Done`].
    fn resume(&mut self, ctx: &mut Ctx<'_>) -> Step;
}

/// The outcome of one coroutine resumption.
///
/// The distinction between [`Step::Yield`] and [`Step::Call`] is the
/// scheduler's core contract: yielding a sub-coroutine never suspends the
/// tick (the callee is resolved synchronously, "call and wait"), while a
/// bare yield always suspends the chain until the next update.
pub enum Step {
    /// The coroutine has finished and must not be resumed again.
    Done,

    /// Suspend the chain; resume this coroutine again on the next update.
    Yield,

    /// Call the given sub-coroutine and wait for it to finish.
    ///
    /// The callee is pushed onto the chain and resumed immediately within
    /// the same tick. Once it reports [`Step::Done`], the caller is resumed
    /// again, still within the same tick.
    Call(Box<dyn Coroutine>),
}

impl Step {
    /// Shorthand for [`Step::Call`] that boxes the callee.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// Step::call(wait_seconds(0.25))
    /// ```
    pub fn call(coroutine: impl Coroutine + 'static) -> Self {
        Step::Call(Box::new(coroutine))
    }
}
