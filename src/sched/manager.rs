use crate::sched::context::{Clock, Frame};
use crate::sched::runner::Runner;

use log::debug;

/// The step clock and owner of all runners.
///
/// A `Manager` aggregates progress across its runners into a single
/// monotonic step counter, advanced by at most 1 per [`update`](Self::update)
/// regardless of how many runners or chains did work. That per-update
/// granularity is what makes "advance to step K" reproducible regardless
/// of scene complexity.
///
/// # Seeking
///
/// Setting a target at or ahead of the current step count puts the clock
/// into seeking mode ([`is_seeking`](Self::is_seeking)). While seeking,
/// duration-based combinators collapse to their end state on their very
/// next resumption instead of animating, so repeated updates fast-forward
/// the scene one step at a time until the clock passes the target. This is
/// the whole contract a "jump to step K" UI needs.
///
/// # Examples
///
/// ```rust,ignore
/// let mut manager = Manager::new();
/// let runner = manager.create_runner();
/// runner.add(wait_seconds(1.0));
///
/// manager.update(Frame::new(1.0 / 60.0));
/// ```
pub struct Manager {
    /// The logical step clock shared with every resumption context.
    clock: Clock,

    /// Handles to every runner created through this manager, in creation
    /// order, kept for update and reset propagation.
    runners: Vec<Runner>,
}

impl Manager {
    /// Creates a manager with a zeroed clock and no runners.
    pub fn new() -> Self {
        Self {
            clock: Clock::new(),
            runners: Vec::new(),
        }
    }

    /// Allocates a runner bound to this manager.
    ///
    /// The manager remembers the runner for [`update`](Self::update) and
    /// [`reset`](Self::reset) propagation; the returned handle is the
    /// caller's interface for scheduling chains.
    pub fn create_runner(&mut self) -> Runner {
        let runner = Runner::new();
        self.runners.push(runner.clone());
        runner
    }

    /// Advances every runner by one tick, then the step clock by at most 1.
    ///
    /// Runners update in creation order; within a runner, chains advance
    /// in list order, each resolving its full nested-call cascade before
    /// the next chain runs. If any chain marked a step during the call
    /// (see [`Ctx::mark_step`](crate::Ctx::mark_step)), the step counter
    /// increments by exactly 1 — never more, however many chains
    /// progressed.
    ///
    /// # Panics
    ///
    /// A panic in a coroutine body propagates out of this call uncaught,
    /// leaving later chains in the tick unadvanced. Failures are not
    /// isolated per chain.
    pub fn update(&mut self, frame: Frame) {
        self.clock.stepped.set(false);

        for runner in &self.runners {
            runner.update(&self.clock, frame);
        }

        if self.clock.stepped.replace(false) {
            self.clock.step_count += 1;
            debug!("manager: advanced to step {}", self.clock.step_count);
        }
    }

    /// Current value of the monotonic step counter.
    pub fn step_count(&self) -> u64 {
        self.clock.step_count
    }

    /// The seek target, if one is set.
    pub fn target_step_count(&self) -> Option<u64> {
        self.clock.target
    }

    /// Sets the seek target.
    pub fn set_target_step_count(&mut self, target: u64) {
        self.clock.target = Some(target);
        debug!("manager: seek target set to step {target}");
    }

    /// Clears the seek target, ending any seek in progress.
    pub fn clear_target_step_count(&mut self) {
        self.clock.target = None;
    }

    /// True while the clock has not yet caught up with the seek target.
    pub fn is_seeking(&self) -> bool {
        self.clock.is_seeking()
    }

    /// Returns all state to that of a freshly constructed manager.
    ///
    /// Zeroes the step counter, clears the seek target, and propagates
    /// [`Runner::reset`] to every created runner. The runner handles
    /// themselves remain valid.
    pub fn reset(&mut self) {
        self.clock.step_count = 0;
        self.clock.target = None;
        self.clock.stepped.set(false);

        for runner in &self.runners {
            runner.reset();
        }

        debug!("manager: reset");
    }
}

impl Default for Manager {
    /// Equivalent to [`Manager::new`].
    fn default() -> Self {
        Self::new()
    }
}
