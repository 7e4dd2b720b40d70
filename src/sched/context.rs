use std::cell::Cell;

/// Host-supplied timing for one update.
///
/// The host render loop owns real time: it decides how much wall-clock
/// time the frame represents, the playback speed factor, and whether
/// playback is paused. The scheduler never reads a system clock.
///
/// # Examples
///
/// ```rust,ignore
/// let frame = Frame::new(1.0 / 60.0)
///     .speed(2.0)
///     .playing(!ui.paused);
/// manager.update(frame);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    /// Wall-clock seconds since the previous update.
    pub(crate) delta_seconds: f64,

    /// Playback speed multiplier applied to `delta_seconds`.
    pub(crate) speed: f64,

    /// Whether playback is running. While `false`, duration-based
    /// combinators accumulate no progress.
    pub(crate) playing: bool,
}

impl Frame {
    /// Creates a frame for the given delta, at speed `1.0`, playing.
    pub fn new(delta_seconds: f64) -> Self {
        Self {
            delta_seconds,
            speed: 1.0,
            playing: true,
        }
    }

    /// Sets the playback speed multiplier.
    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Sets whether playback is running this frame.
    pub fn playing(mut self, playing: bool) -> Self {
        self.playing = playing;
        self
    }
}

/// The manager-owned logical step clock.
///
/// Holds the monotonic step counter, the optional seek target, and the
/// once-per-update "stepped" flag set by combinators through
/// [`Ctx::mark_step`] and consumed by the manager after all runners have
/// updated.
#[derive(Debug)]
pub(crate) struct Clock {
    /// Monotonic logical step counter. Advances by at most 1 per update.
    pub(crate) step_count: u64,

    /// Seek target, or `None` when not scrubbing.
    pub(crate) target: Option<u64>,

    /// Set when any chain marked a step during the current update.
    ///
    /// A `Cell` because it is written through the shared reference held by
    /// every [`Ctx`] while the manager is mid-update.
    pub(crate) stepped: Cell<bool>,
}

impl Clock {
    pub(crate) fn new() -> Self {
        Self {
            step_count: 0,
            target: None,
            stepped: Cell::new(false),
        }
    }

    /// True while the clock has not yet caught up with the seek target.
    pub(crate) fn is_seeking(&self) -> bool {
        self.target.is_some_and(|target| target >= self.step_count)
    }
}

/// Per-resumption execution context.
///
/// A `Ctx` is handed to every [`Coroutine::resume`](crate::Coroutine::resume)
/// call. It carries the host [`Frame`] for the current update together with
/// read access to the step clock, so deeply nested coroutines can observe
/// timing and seek state without any parameter threading of their own.
pub struct Ctx<'a> {
    /// Timing for the update currently in progress.
    frame: Frame,

    /// The manager's step clock.
    clock: &'a Clock,
}

impl<'a> Ctx<'a> {
    pub(crate) fn new(frame: Frame, clock: &'a Clock) -> Self {
        Self { frame, clock }
    }

    /// Wall-clock seconds since the previous update.
    pub fn delta_seconds(&self) -> f64 {
        self.frame.delta_seconds
    }

    /// Playback speed multiplier for this update.
    pub fn speed(&self) -> f64 {
        self.frame.speed
    }

    /// Whether playback is running this update.
    pub fn playing(&self) -> bool {
        self.frame.playing
    }

    /// Current value of the logical step counter.
    pub fn step_count(&self) -> u64 {
        self.clock.step_count
    }

    /// The seek target, if one is set.
    pub fn target_step_count(&self) -> Option<u64> {
        self.clock.target
    }

    /// True while the clock is catching up with a seek target.
    ///
    /// Duration-based combinators must collapse to their end state on their
    /// very next resumption while this is set.
    pub fn is_seeking(&self) -> bool {
        self.clock.is_seeking()
    }

    /// Marks that real time advanced by one unit this tick.
    ///
    /// The signal is aggregated across all runners and chains: however many
    /// times it is called during one update, the step counter advances by
    /// exactly 1 at the end of that update.
    pub fn mark_step(&self) {
        self.clock.stepped.set(true);
    }
}
