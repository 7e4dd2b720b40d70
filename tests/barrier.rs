use cadenza::anim::Barrier;
use cadenza::{Coroutine, Frame, Manager, Step, resume_fn, sequence};

use std::cell::Cell;
use std::rc::Rc;

fn frame() -> Frame {
    Frame::new(1.0 / 60.0)
}

/// A coroutine that bare-yields `yields` times, then completes.
fn ticks(yields: u32) -> Box<dyn Coroutine> {
    let mut remaining = yields;
    Box::new(resume_fn(move |_ctx| {
        if remaining == 0 {
            return Step::Done;
        }
        remaining -= 1;
        Step::Yield
    }))
}

fn bump(probe: &Rc<Cell<u32>>) -> Box<dyn Coroutine> {
    let probe = probe.clone();
    Box::new(resume_fn(move |_ctx| {
        probe.set(probe.get() + 1);
        Step::Done
    }))
}

#[test]
fn test_no_participant_proceeds_before_all_arrive() {
    let mut manager = Manager::new();
    let runner = manager.create_runner();

    let barrier = Barrier::new(2);
    let past_a = Rc::new(Cell::new(0u32));
    let past_b = Rc::new(Cell::new(0u32));

    // A reaches the barrier immediately; B dawdles for three ticks first.
    runner.add(sequence(vec![
        Box::new(barrier.wait()),
        bump(&past_a),
    ]));
    runner.add(sequence(vec![
        ticks(3),
        Box::new(barrier.wait()),
        bump(&past_b),
    ]));

    for _ in 0..3 {
        manager.update(frame());
        assert_eq!(
            past_a.get(),
            0,
            "the early arriver must hold until the late one arrives"
        );
    }

    // B arrives on update 4; the settle tick and releases follow.
    for _ in 0..3 {
        manager.update(frame());
    }

    assert_eq!(past_a.get(), 1, "the early arriver proceeds after release");
    assert_eq!(past_b.get(), 1, "the late arriver proceeds after release");
    assert!(!runner.is_busy(), "both chains ran to completion");
    assert_eq!(
        barrier.arrived(),
        0,
        "the counter returns to zero once every participant released"
    );
}

#[test]
fn test_barrier_across_runners() {
    let mut manager = Manager::new();
    let first = manager.create_runner();
    let second = manager.create_runner();

    let barrier = Barrier::new(2);
    let released = Rc::new(Cell::new(0u32));

    first.add(sequence(vec![Box::new(barrier.wait()), bump(&released)]));
    second.add(sequence(vec![
        ticks(1),
        Box::new(barrier.wait()),
        bump(&released),
    ]));

    let mut updates = 0;
    while first.is_busy() || second.is_busy() {
        manager.update(frame());
        updates += 1;
        assert!(updates < 20, "the rendezvous should resolve");
    }

    assert_eq!(released.get(), 2, "chains on different runners rendezvous");
    assert_eq!(barrier.arrived(), 0);
}

#[test]
fn test_barrier_is_reusable_after_a_round() {
    let mut manager = Manager::new();
    let runner = manager.create_runner();

    let barrier = Barrier::new(2);
    let released = Rc::new(Cell::new(0u32));

    for round in 0..2 {
        runner.add(sequence(vec![Box::new(barrier.wait()), bump(&released)]));
        runner.add(sequence(vec![Box::new(barrier.wait()), bump(&released)]));

        let mut updates = 0;
        while runner.is_busy() {
            manager.update(frame());
            updates += 1;
            assert!(updates < 20, "round {round} should resolve");
        }

        assert_eq!(released.get(), (round + 1) * 2);
        assert_eq!(barrier.arrived(), 0, "round {round} drained the counter");
    }
}

#[test]
fn test_single_participant_barrier_costs_two_ticks() {
    let mut manager = Manager::new();
    let runner = manager.create_runner();

    let barrier = Barrier::new(1);
    runner.add(barrier.wait());

    manager.update(frame());
    assert!(
        runner.is_busy(),
        "even a satisfied barrier yields one settle tick"
    );

    manager.update(frame());
    assert!(!runner.is_busy());
    assert_eq!(barrier.arrived(), 0);
}

#[test]
#[should_panic(expected = "at least 1 participant")]
fn test_zero_participant_barrier_panics() {
    let _ = Barrier::new(0);
}
