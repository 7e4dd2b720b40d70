use crate::coroutine::Coroutine;
use crate::sched::chain::{Chain, ChainId, Progress};
use crate::sched::context::{Clock, Ctx, Frame};

use log::trace;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A set of independently progressing coroutine chains.
///
/// A `Runner` advances each of its chains exactly one tick's worth per
/// update, resolving nested calls synchronously within the tick. It is
/// safe to [`add`](Self::add) and [`remove`](Self::remove) chains from
/// inside a running chain's body: structural changes are queued and
/// drained around the traversal, so no iteration is ever invalidated
/// mid-update.
///
/// `Runner` is a cheaply cloneable handle; clones refer to the same chain
/// set. Handles are deliberately not thread-safe — the scheduler is
/// single-threaded by construction, which is what makes shared closure
/// state between chains sound without locks.
#[derive(Clone)]
pub struct Runner {
    inner: Rc<RunnerInner>,
}

struct RunnerInner {
    /// Chains being advanced each tick.
    active: RefCell<Vec<Rc<RefCell<Chain>>>>,

    /// Chains added since the last update. Promoted at the start of the
    /// next update, so a chain never runs in the tick that added it.
    pending_adds: RefCell<Vec<Rc<RefCell<Chain>>>>,

    /// Chains to unschedule at the next drain point.
    pending_removes: RefCell<Vec<ChainId>>,

    /// Source of chain ids. Never reused.
    next_id: Cell<u64>,
}

impl Runner {
    pub(crate) fn new() -> Self {
        Self {
            inner: Rc::new(RunnerInner {
                active: RefCell::new(Vec::new()),
                pending_adds: RefCell::new(Vec::new()),
                pending_removes: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Schedules a new chain rooted at `root`.
    ///
    /// The chain is queued, not started: its first resumption happens on
    /// the *next* update, so batches of `add` calls within one tick never
    /// race with the traversal in progress.
    ///
    /// Returns the id to pass to [`remove`](Self::remove). Each call mints
    /// a fresh id, so adding the same kind of coroutine twice simply
    /// schedules two chains.
    pub fn add(&self, root: impl Coroutine + 'static) -> ChainId {
        let id = ChainId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);

        let chain = Rc::new(RefCell::new(Chain::new(id, Box::new(root))));
        self.inner.pending_adds.borrow_mut().push(chain);

        trace!("runner: chain {id} queued");
        id
    }

    /// Requests removal of a chain.
    ///
    /// Removal is deferred: if the runner is mid-update, the chain is
    /// unscheduled at the next drain point rather than torn out of the
    /// traversal. The chain's coroutines receive no cancellation signal
    /// and are never force-unwound; they are simply not resumed again.
    ///
    /// Removing an id that is not scheduled is a silent no-op.
    pub fn remove(&self, id: ChainId) {
        self.inner.pending_removes.borrow_mut().push(id);
        trace!("runner: chain {id} flagged for removal");
    }

    /// True while any chain is scheduled or waiting to be promoted.
    pub fn is_busy(&self) -> bool {
        !self.inner.pending_adds.borrow().is_empty() || !self.inner.active.borrow().is_empty()
    }

    /// Clears all chains immediately.
    ///
    /// Unlike [`remove`](Self::remove), this is hard and synchronous:
    /// active chains, pending adds, and pending removals are all dropped
    /// on the spot.
    pub fn reset(&self) {
        self.inner.active.borrow_mut().clear();
        self.inner.pending_adds.borrow_mut().clear();
        self.inner.pending_removes.borrow_mut().clear();
        trace!("runner: reset");
    }

    /// Advances every chain by one tick.
    ///
    /// The four phases keep structural mutation safe from inside chain
    /// bodies: pending adds are promoted before any chain runs, removals
    /// are drained both before and after the traversal, and the traversal
    /// itself works on a snapshot of the chain list.
    pub(crate) fn update(&self, clock: &Clock, frame: Frame) {
        // 1. Promote chains added since the last update.
        {
            let mut adds = self.inner.pending_adds.borrow_mut();
            self.inner.active.borrow_mut().append(&mut adds);
        }

        // 2. Drop chains removed since the last update.
        self.drain_removals();

        // 3. Advance each chain, in order. A chain flagged for removal
        //    earlier in this same loop is skipped, not resumed one last
        //    time.
        let chains: Vec<Rc<RefCell<Chain>>> = self.inner.active.borrow().clone();
        for chain in chains {
            let id = chain.borrow().id();

            if self.inner.pending_removes.borrow().contains(&id) {
                continue;
            }

            let mut ctx = Ctx::new(frame, clock);
            if let Progress::Finished = chain.borrow_mut().advance(&mut ctx) {
                trace!("runner: chain {id} completed");
                self.inner.pending_removes.borrow_mut().push(id);
            }
        }

        // 4. Drop chains that completed or were removed during the
        //    traversal.
        self.drain_removals();
    }

    fn drain_removals(&self) {
        let removed: Vec<ChainId> = self.inner.pending_removes.borrow_mut().drain(..).collect();

        if removed.is_empty() {
            return;
        }

        self.inner
            .active
            .borrow_mut()
            .retain(|chain| !removed.contains(&chain.borrow().id()));
    }
}
