use crate::coroutine::{Coroutine, Step};
use crate::sched::context::Ctx;

use std::cell::Cell;
use std::rc::Rc;

/// A rendezvous point for independently scheduled chains.
///
/// Each participant schedules the coroutine returned by
/// [`wait`](Self::wait). Arriving increments a shared counter; the
/// coroutine bare-yields until every participant has arrived, then yields
/// exactly one further tick so all participants observe the full arrival
/// count before any of them proceeds, then decrements the counter and
/// completes. Once the counter returns to zero the barrier is ready for
/// another round.
///
/// The shared counter is a plain `Cell` — no lock is needed because the
/// scheduler executes exactly one chain at any instant.
///
/// # Examples
///
/// ```rust,ignore
/// let barrier = Barrier::new(2);
///
/// runner.add(sequence(vec![
///     Box::new(fade_in_left_panel()),
///     Box::new(barrier.wait()),
///     Box::new(fade_in_caption()),
/// ]));
/// runner.add(sequence(vec![
///     Box::new(fade_in_right_panel()),
///     Box::new(barrier.wait()),
/// ]));
/// ```
#[derive(Clone)]
pub struct Barrier {
    inner: Rc<BarrierInner>,
}

struct BarrierInner {
    /// Number of chains expected to rendezvous.
    participants: usize,

    /// Chains currently arrived and not yet released.
    arrived: Cell<usize>,
}

impl Barrier {
    /// Creates a barrier for the given number of participants.
    ///
    /// # Panics
    ///
    /// Panics if `participants == 0`.
    pub fn new(participants: usize) -> Self {
        assert!(participants > 0, "barrier must have at least 1 participant");

        Self {
            inner: Rc::new(BarrierInner {
                participants,
                arrived: Cell::new(0),
            }),
        }
    }

    /// Number of chains expected to rendezvous.
    pub fn participants(&self) -> usize {
        self.inner.participants
    }

    /// Chains currently arrived and not yet released.
    pub fn arrived(&self) -> usize {
        self.inner.arrived.get()
    }

    /// Returns the coroutine one participant schedules to rendezvous.
    pub fn wait(&self) -> BarrierWait {
        BarrierWait {
            barrier: self.clone(),
            phase: Phase::Arrive,
        }
    }
}

/// One participant's side of a [`Barrier`] rendezvous. Created by
/// [`Barrier::wait`].
pub struct BarrierWait {
    barrier: Barrier,
    phase: Phase,
}

enum Phase {
    /// Not yet counted in.
    Arrive,

    /// Counted in, waiting for the rest.
    Waiting,

    /// Saw the full arrival count last tick; release on this resumption.
    Release,
}

impl Coroutine for BarrierWait {
    fn resume(&mut self, _ctx: &mut Ctx<'_>) -> Step {
        let inner = &self.barrier.inner;

        loop {
            match self.phase {
                Phase::Arrive => {
                    inner.arrived.set(inner.arrived.get() + 1);
                    self.phase = Phase::Waiting;
                }
                Phase::Waiting => {
                    if inner.arrived.get() != inner.participants {
                        return Step::Yield;
                    }

                    // The extra tick: participants still waiting are
                    // ordered before anyone who could decrement, so every
                    // one of them observes the full count.
                    self.phase = Phase::Release;
                    return Step::Yield;
                }
                Phase::Release => {
                    inner.arrived.set(inner.arrived.get() - 1);
                    return Step::Done;
                }
            }
        }
    }
}
