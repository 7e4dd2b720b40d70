use crate::coroutine::{Coroutine, Step};
use crate::sched::context::Ctx;

use std::fmt;

/// Identifier of a chain within its runner.
///
/// Minted by [`Runner::add`](crate::Runner::add) and used to request
/// removal. Ids are never reused by a runner, so a stale id is harmless:
/// removing it is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub(crate) u64);

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A root coroutine plus its live nested-call stack.
///
/// Index 0 is the root (externally added); the last element is the
/// innermost coroutine, the one resumed next. A chain lives until its root
/// completes or it is explicitly removed.
pub(crate) struct Chain {
    id: ChainId,

    /// Call stack, root first. Never empty while the chain is scheduled.
    stack: Vec<Box<dyn Coroutine>>,
}

/// Outcome of advancing a chain by one tick.
pub(crate) enum Progress {
    /// The chain hit a bare yield; resume it again on the next update.
    Suspended,

    /// The root coroutine completed; the chain must be unscheduled.
    Finished,
}

impl Chain {
    pub(crate) fn new(id: ChainId, root: Box<dyn Coroutine>) -> Self {
        Self {
            id,
            stack: vec![root],
        }
    }

    pub(crate) fn id(&self) -> ChainId {
        self.id
    }

    /// Advances the chain by exactly one tick's worth.
    ///
    /// Resumes the innermost coroutine and resolves the outcome entirely
    /// within this call:
    /// - a completed callee is popped and its caller resumed immediately,
    /// - a call-yield pushes the callee and resumes it immediately,
    /// - only a bare yield stops the cascade until the next update.
    ///
    /// A chain of purely call-yielding coroutines therefore fully unwinds
    /// here, arbitrarily deep, without suspending.
    pub(crate) fn advance(&mut self, ctx: &mut Ctx<'_>) -> Progress {
        loop {
            let Some(top) = self.stack.last_mut() else {
                return Progress::Finished;
            };

            match top.resume(ctx) {
                Step::Done => {
                    self.stack.pop();

                    if self.stack.is_empty() {
                        return Progress::Finished;
                    }
                }
                Step::Yield => return Progress::Suspended,
                Step::Call(callee) => self.stack.push(callee),
            }
        }
    }
}
