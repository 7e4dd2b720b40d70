//! # Cadenza
//!
//! **Cadenza** is a deterministic step scheduler for cooperative coroutine
//! animations, designed as the animation clock layer for the **Nebula**
//! ecosystem.
//!
//! Unlike general-purpose async runtimes, Cadenza schedules *resumable
//! computations* against a logical step clock driven by a host frame loop.
//! It is single-threaded and cooperative by construction: one chain of
//! coroutines executes at a time, nested calls resolve synchronously within
//! a tick, and suspension only ever happens at an explicit yield point.
//!
//! Cadenza is built for replayable, scrubbed animations, offering:
//!
//! - A **tick scheduler** that advances every chain exactly one tick's worth
//!   per update, with structural mutation (add/remove) safe from inside a
//!   running chain
//! - **Call/suspend semantics**: yielding a sub-coroutine never suspends the
//!   tick, while a bare yield always does
//! - A **monotonic step clock** advancing at most once per update,
//!   independent of how many runners or chains made progress
//! - A **seek target** that collapses in-flight tweens instantly, so "jump
//!   to step K" replays the same step sequence as live playback
//! - **Animation combinators** (tween, wait, barrier) built from the same
//!   primitives user coroutines use
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cadenza::anim::wait_seconds;
//! use cadenza::{Frame, Manager, Step};
//!
//! let mut manager = Manager::new();
//! let runner = manager.create_runner();
//!
//! runner.add(cadenza::sequence(vec![
//!     Box::new(wait_seconds(0.5)),
//!     Box::new(cadenza::resume_fn(|_ctx| {
//!         println!("half a second of animation time has passed");
//!         Step::Done
//!     })),
//! ]));
//!
//! // Host render loop: one update per frame.
//! while runner.is_busy() {
//!     manager.update(Frame::new(1.0 / 60.0));
//! }
//! ```
//!
//! ## Modules
//!
//! - [`anim`] — Duration tweens, waits, and cross-chain barriers
//! - [`coroutine`] — The [`Coroutine`] trait, [`Step`] outcomes, and adapters
//!
//! ## Getting Started
//!
//! Add Cadenza to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! cadenza = { git = "https://github.com/nebula-platform/cadenza" }
//! ```

mod sched;

pub mod anim;
pub mod coroutine;

pub use coroutine::{Coroutine, Step, resume_fn, sequence};
pub use sched::chain::ChainId;
pub use sched::context::{Ctx, Frame};
pub use sched::manager::Manager;
pub use sched::runner::Runner;
