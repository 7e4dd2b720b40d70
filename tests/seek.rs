use cadenza::anim::{tween, wait_seconds};
use cadenza::{Frame, Manager, Runner, sequence};

use std::cell::RefCell;
use std::rc::Rc;

/// Schedules a chain of `remaining + 1` one-second waits, each scheduling
/// the next when it completes. Because pending adds are only promoted at
/// the start of the next update, every wait lands on its own tick even
/// while seeking — the chain-per-step pattern a stepped diagram uses.
fn add_step_chain(runner: &Runner, remaining: u32) {
    let next = runner.clone();
    runner.add(tween(1.0, move |_t, done| {
        if done && remaining > 0 {
            add_step_chain(&next, remaining - 1);
        }
    }));
}

#[test]
fn test_seeking_collapses_tween_on_next_resumption() {
    let mut manager = Manager::new();
    let runner = manager.create_runner();

    let samples: Rc<RefCell<Vec<(f64, bool)>>> = Rc::new(RefCell::new(Vec::new()));
    runner.add(tween(100.0, {
        let samples = samples.clone();
        move |t, done| samples.borrow_mut().push((t, done))
    }));

    manager.set_target_step_count(5);
    assert!(manager.is_seeking());

    manager.update(Frame::new(0.0));

    assert_eq!(
        *samples.borrow(),
        vec![(1.0, true)],
        "while seeking, a tween reports t = 1 on its very next resumption"
    );
    assert!(
        !runner.is_busy(),
        "the collapsed tween completes in that same resumption"
    );
}

#[test]
fn test_seeking_while_target_equals_step_count() {
    let manager = Manager::new();
    assert!(
        !manager.is_seeking(),
        "a fresh manager has no target and is not seeking"
    );

    let mut manager = Manager::new();
    manager.set_target_step_count(0);
    assert!(
        manager.is_seeking(),
        "a target equal to the current step count still counts as seeking"
    );
}

#[test]
fn test_call_yielded_tweens_collapse_within_one_update_while_seeking() {
    // is_seeking cannot change mid-update (the clock advances only after
    // all runners ran), so a single chain of call-yielded waits unwinds
    // completely in one update, for a single step.
    let mut manager = Manager::new();
    let runner = manager.create_runner();

    runner.add(sequence(vec![
        Box::new(wait_seconds(10.0)),
        Box::new(wait_seconds(10.0)),
        Box::new(wait_seconds(10.0)),
    ]));

    manager.set_target_step_count(99);
    manager.update(Frame::new(0.0));

    assert!(
        !runner.is_busy(),
        "every wait in the chain collapses within the same update"
    );
    assert_eq!(
        manager.step_count(),
        1,
        "however many waits collapsed, the clock still advances once"
    );
}

#[test]
fn test_seek_stops_at_target_step() {
    let mut manager = Manager::new();
    let runner = manager.create_runner();

    // Two steps, one chain each.
    add_step_chain(&runner, 1);
    manager.set_target_step_count(0);

    // The first step's wait collapses and puts the clock past the target.
    manager.update(Frame::new(0.0));
    assert_eq!(manager.step_count(), 1);
    assert!(
        !manager.is_seeking(),
        "seeking ends as soon as step_count exceeds the target"
    );
    assert!(runner.is_busy(), "the second step was queued, not run");

    // The second step's wait now animates in real time instead of
    // collapsing.
    for _ in 0..3 {
        manager.update(Frame::new(0.25));
        assert!(runner.is_busy(), "the second wait is back to real time");
    }
    manager.update(Frame::new(0.25));
    assert!(!runner.is_busy());
    assert_eq!(manager.step_count(), 2);
}

#[test]
fn test_seek_replay_reaches_same_step_count_as_live_playback() {
    // Live playback at half-second frames: each wait takes two updates,
    // plus one update for each queued successor to be promoted.
    let mut live = Manager::new();
    let live_runner = live.create_runner();
    add_step_chain(&live_runner, 2);

    let mut live_updates = 0;
    while live_runner.is_busy() {
        live.update(Frame::new(0.5));
        live_updates += 1;
        assert!(live_updates < 100, "live playback should terminate");
    }

    // Seek replay: every wait collapses, exactly one step per update.
    let mut replay = Manager::new();
    let replay_runner = replay.create_runner();
    add_step_chain(&replay_runner, 2);
    replay.set_target_step_count(u64::MAX);

    let mut replay_updates = 0;
    while replay_runner.is_busy() {
        replay.update(Frame::new(0.5));
        replay_updates += 1;
        assert!(replay_updates < 100, "seek replay should terminate");
    }

    assert_eq!(
        live.step_count(),
        replay.step_count(),
        "live playback and seek replay must reach the same step count"
    );
    assert_eq!(replay.step_count(), 3, "one step per finished wait");
    assert_eq!(
        replay_updates, 3,
        "while seeking, each step costs exactly one update"
    );
    assert!(
        replay_updates < live_updates,
        "seeking fast-forwards: fewer updates than live playback"
    );
}

#[test]
fn test_clearing_target_ends_seek() {
    let mut manager = Manager::new();
    manager.set_target_step_count(42);
    assert!(manager.is_seeking());
    assert_eq!(manager.target_step_count(), Some(42));

    manager.clear_target_step_count();
    assert!(!manager.is_seeking());
    assert_eq!(manager.target_step_count(), None);
}
