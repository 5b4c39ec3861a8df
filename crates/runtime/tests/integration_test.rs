use std::time::Duration;

use runtime::{DisplayEvent, Event, Runtime, RuntimeConfig, RuntimeError, Topic};
use slot_core::{
    CommandOutcome, ControlLabel, IgnoreReason, MachineConfig, MachineEvent, MachineSnapshot,
    MachineState, REEL_COUNT, SpinOutcome, Symbol,
};
use tokio::sync::broadcast;
use tokio::time::{self, Instant};

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

async fn next_settled(rx: &mut broadcast::Receiver<Event>) -> SpinOutcome {
    loop {
        match rx.recv().await.expect("machine topic open") {
            Event::Machine(MachineEvent::Settled { outcome }) => return outcome,
            _ => continue,
        }
    }
}

async fn next_display(rx: &mut broadcast::Receiver<Event>) -> MachineSnapshot {
    match rx.recv().await.expect("display topic open") {
        Event::Display(DisplayEvent::Updated(snapshot)) => snapshot,
        other => panic!("unexpected event on display topic: {other:?}"),
    }
}

fn randomizing(snapshot: &MachineSnapshot) -> [bool; REEL_COUNT] {
    snapshot.randomizing
}

/// Full spin → stop → settle cycle in paused tokio time.
#[tokio::test(start_paused = true)]
async fn spin_and_stop_settle_with_staggered_halts() {
    let start = Instant::now();
    let runtime = Runtime::builder()
        .seed(7)
        .build()
        .await
        .expect("runtime should start");
    let handle = runtime.handle();
    let mut machine_rx = handle.subscribe(Topic::Machine);

    assert_eq!(handle.spin_or_stop().await.unwrap(), CommandOutcome::Applied);
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.state, MachineState::Spinning);
    assert_eq!(snapshot.control_label(), ControlLabel::Stop);
    assert_eq!(snapshot.result_message(), "");

    time::sleep_until(start + ms(120)).await;
    assert_eq!(handle.spin_or_stop().await.unwrap(), CommandOutcome::Applied);
    assert_eq!(
        randomizing(&handle.snapshot().await.unwrap()),
        [false, true, true]
    );

    time::sleep_until(start + ms(619)).await;
    assert_eq!(
        randomizing(&handle.snapshot().await.unwrap()),
        [false, true, true]
    );

    time::sleep_until(start + ms(621)).await;
    assert_eq!(
        randomizing(&handle.snapshot().await.unwrap()),
        [false, false, true]
    );

    let outcome = next_settled(&mut machine_rx).await;
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(Instant::now() - start, ms(1_120));
    assert_eq!(snapshot.state, MachineState::Idle);
    assert_eq!(randomizing(&snapshot), [false; REEL_COUNT]);
    assert_eq!(snapshot.outcome, Some(outcome));
    assert_eq!(outcome, SpinOutcome::evaluate(snapshot.middle_row()));

    // Settled reels never change again.
    time::sleep(ms(2_000)).await;
    assert_eq!(handle.snapshot().await.unwrap().symbols, snapshot.symbols);

    drop(handle);
    runtime.shutdown().await.expect("clean shutdown");
}

#[tokio::test(start_paused = true)]
async fn cheat_forces_jackpot_and_reverts_highlight() {
    let start = Instant::now();
    let runtime = Runtime::builder().seed(3).build().await.unwrap();
    let handle = runtime.handle();
    let mut machine_rx = handle.subscribe(Topic::Machine);

    handle.spin_or_stop().await.unwrap();
    time::sleep_until(start + ms(230)).await;
    assert_eq!(handle.cheat().await.unwrap(), CommandOutcome::Applied);

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.state, MachineState::Idle);
    assert_eq!(snapshot.middle_row(), [Symbol::Seven; REEL_COUNT]);
    assert_eq!(snapshot.result_message(), "Test 777 JACKPOT!");
    assert_eq!(snapshot.highlighted, [true; REEL_COUNT]);

    // Drain what the cheat step published, then wait for the revert.
    let mut saw_cheat = false;
    loop {
        match machine_rx.recv().await.unwrap() {
            Event::Machine(MachineEvent::CheatApplied) => saw_cheat = true,
            Event::Machine(MachineEvent::HighlightChanged { active: false }) => break,
            Event::Machine(MachineEvent::ReelStopped { .. }) => {
                panic!("no reel halts after a cheat")
            }
            _ => {}
        }
    }
    assert!(saw_cheat);
    assert_eq!(Instant::now() - start, ms(730));

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.highlighted, [false; REEL_COUNT]);
    assert_eq!(snapshot.middle_row(), [Symbol::Seven; REEL_COUNT]);

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn ignored_commands_publish_nothing() {
    let runtime = Runtime::builder().seed(1).build().await.unwrap();
    let handle = runtime.handle();
    let mut receivers = handle.subscribe_multiple(&Topic::ALL);
    let before = handle.snapshot().await.unwrap();

    assert_eq!(
        handle.cheat().await.unwrap(),
        CommandOutcome::Ignored {
            reason: IgnoreReason::NotSpinning
        }
    );
    assert_eq!(handle.snapshot().await.unwrap(), before);

    for rx in receivers.values_mut() {
        assert!(matches!(
            rx.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));
    }

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn display_topic_carries_snapshots() {
    let runtime = Runtime::builder().seed(5).build().await.unwrap();
    let handle = runtime.handle();
    let mut display_rx = handle.subscribe(Topic::Display);

    handle.spin_or_stop().await.unwrap();
    let spinning = next_display(&mut display_rx).await;
    assert_eq!(spinning.control_label(), ControlLabel::Stop);
    assert_eq!(randomizing(&spinning), [true; REEL_COUNT]);

    // The next redraw comes from the first randomization tick.
    let ticked = next_display(&mut display_rx).await;
    assert_eq!(ticked.state, MachineState::Spinning);

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn same_seed_replays_same_result() {
    async fn play(seed: u64) -> MachineSnapshot {
        let start = Instant::now();
        let runtime = Runtime::builder().seed(seed).build().await.unwrap();
        let handle = runtime.handle();

        handle.spin_or_stop().await.unwrap();
        time::sleep_until(start + ms(275)).await;
        handle.spin_or_stop().await.unwrap();
        time::sleep_until(start + ms(2_000)).await;

        let snapshot = handle.snapshot().await.unwrap();
        drop(handle);
        runtime.shutdown().await.unwrap();
        snapshot
    }

    let first = play(42).await;
    let second = play(42).await;
    assert_eq!(first, second);
    assert!(first.outcome.is_some());
}

#[tokio::test(start_paused = true)]
async fn custom_timings_are_honored() {
    let start = Instant::now();
    let config = RuntimeConfig {
        machine: MachineConfig::new().with_stop_stagger(100),
        seed: Some(11),
        ..RuntimeConfig::default()
    };
    let handle = Runtime::start(config).await.unwrap();
    let mut machine_rx = handle.subscribe(Topic::Machine);

    handle.spin_or_stop().await.unwrap();
    time::sleep_until(start + ms(60)).await;
    handle.spin_or_stop().await.unwrap();

    next_settled(&mut machine_rx).await;
    assert_eq!(Instant::now() - start, ms(260));
}

#[tokio::test]
async fn zero_spin_interval_is_rejected() {
    let result = Runtime::builder()
        .machine(MachineConfig::new().with_spin_interval(0))
        .build()
        .await;
    assert!(matches!(result, Err(RuntimeError::InvalidConfig(_))));
}
