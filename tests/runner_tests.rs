#![allow(missing_docs)]

use ecosim::simulation::params::Params;
use ecosim::simulation::runner::{RunState, Runner};

fn create_test_params() -> Params {
    Params {
        seed: Some(42),
        steps_per_generation: 3,
        ..Params::default()
    }
}

#[test]
fn test_new_runner_is_stopped() {
    let runner = Runner::new(create_test_params());

    assert_eq!(runner.state(), RunState::Stopped);
    assert!(!runner.is_running());
    assert_eq!(runner.world().steps, 0);
}

#[test]
fn test_ticks_are_ignored_until_started() {
    let mut runner = Runner::new(create_test_params());

    assert!(!runner.tick());
    assert!(!runner.tick());
    assert_eq!(runner.world().steps, 0);

    runner.start();
    assert!(runner.is_running());
    assert!(runner.tick());
    assert_eq!(runner.world().steps, 1);
}

#[test]
fn test_pause_stops_advancement() {
    let mut runner = Runner::new(create_test_params());
    runner.start();
    runner.tick();

    runner.pause();

    assert_eq!(runner.state(), RunState::Stopped);
    assert!(!runner.tick());
    assert_eq!(runner.world().steps, 1);

    runner.start();
    assert!(runner.tick());
    assert_eq!(runner.world().steps, 2);
}

#[test]
fn test_reset_stops_and_preserves_generations() {
    let mut runner = Runner::new(create_test_params());
    runner.start();

    // Budget of 3: the fourth tick evolves into generation 2.
    for _ in 0..4 {
        runner.tick();
    }
    assert_eq!(runner.world().generation(), 2);

    runner.tick();
    assert_eq!(runner.world().steps, 1);

    runner.reset();

    assert_eq!(runner.state(), RunState::Stopped);
    assert_eq!(runner.world().steps, 0);
    assert_eq!(runner.world().generation(), 2);
    assert_eq!(runner.world().prey.agents.len(), 20);
    assert!(runner.world().prey.agents.iter().all(|a| a.alive));
    assert!(!runner.tick());
}

#[test]
fn test_world_mut_allows_direct_control() {
    let mut runner = Runner::new(create_test_params());

    runner.world_mut().step();
    assert_eq!(runner.world().steps, 1);
}
