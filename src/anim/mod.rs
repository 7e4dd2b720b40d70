//! Animation combinators.
//!
//! This module provides the time and synchronization coroutines the step
//! scheduler's contract is observed through.
//!
//! It includes:
//! - [`tween`] for duration-based progress animation,
//! - [`wait_seconds`] for plain delays,
//! - [`Barrier`] for rendezvous across independently scheduled chains.
//!
//! All of them are ordinary coroutines built on the scheduler's
//! primitives; nothing here is special-cased by the runner.

mod barrier;
mod tween;
mod wait;

#[doc(inline)]
pub use barrier::Barrier;

#[doc(inline)]
pub use tween::{Tween, tween};

#[doc(inline)]
pub use wait::wait_seconds;
