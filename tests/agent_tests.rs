#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use ecosim::simulation::agent::{Agent, Perception};
use ecosim::simulation::brain::Brain;
use ecosim::simulation::species::{self, Species};
use ndarray::{Array1, Array2};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

fn test_rng(seed: u64) -> ChaCha12Rng {
    ChaCha12Rng::seed_from_u64(seed)
}

fn zero_brain(target: Species) -> Brain {
    Brain {
        w_ih: Array2::zeros((species::HIDDEN_SIZE, target.input_size())),
        w_ho: Array2::zeros((species::OUTPUT_SIZE, species::HIDDEN_SIZE)),
        b_h: Array1::zeros(species::HIDDEN_SIZE),
        b_o: Array1::zeros(species::OUTPUT_SIZE),
    }
}

/// An agent at rest with a controller that never applies force.
fn still_agent(target: Species, x: f32, y: f32) -> Agent {
    let mut rng = test_rng(0);
    let mut agent = Agent::with_brain(
        0,
        target,
        Array1::from_vec(vec![x, y]),
        zero_brain(target),
        &mut rng,
    );
    agent.vel = Array1::zeros(2);
    agent
}

#[test]
fn test_new_random_initial_state() {
    let mut rng = test_rng(42);
    let agent = Agent::new_random(7, Species::Prey, Array1::from_vec(vec![10.0, 20.0]), &mut rng);

    assert_eq!(agent.id, 7);
    assert_eq!(agent.species, Species::Prey);
    assert!(agent.alive);
    assert_eq!(agent.energy, species::INITIAL_ENERGY);
    assert_eq!(agent.age, 0);
    assert_eq!(agent.fitness, 0.0);
    assert_eq!(agent.meals, 0);
    assert_eq!(agent.max_speed, Species::Prey.max_speed());
    assert_eq!(agent.radius, Species::Prey.radius());
    assert_eq!(agent.max_force, species::MAX_FORCE);
    assert_eq!(agent.brain.input_size(), 4);
    assert!(agent.max_starvation_distance.is_none());

    for &v in agent.vel.iter() {
        assert!((-1.0..1.0).contains(&v));
    }
}

#[test]
#[should_panic(expected = "controller sensor layout")]
fn test_with_brain_rejects_mismatched_controller() {
    let mut rng = test_rng(5);
    let brain = zero_brain(Species::Predator);
    Agent::with_brain(0, Species::Prey, Array1::zeros(2), brain, &mut rng);
}

#[test]
fn test_update_clamps_speed_preserving_direction() {
    let mut agent = still_agent(Species::Prey, 100.0, 100.0);
    agent.vel = Array1::from_vec(vec![10.0, 0.0]);

    agent.update(800.0, 600.0);

    assert_eq!(agent.vel[0], 5.0);
    assert_eq!(agent.vel[1], 0.0);
    assert_eq!(agent.pos[0], 105.0);
}

#[test]
fn test_update_wraps_exact_edges() {
    let mut agent = still_agent(Species::Prey, 796.0, 0.0);
    agent.vel = Array1::from_vec(vec![4.0, -1.0]);

    agent.update(800.0, 600.0);

    // x lands exactly on the edge, y leaves through the top.
    assert_eq!(agent.pos[0], 0.0);
    assert_eq!(agent.pos[1], 599.0);
}

#[test]
fn test_energy_decreases_and_age_grows_each_tick() {
    let mut agent = still_agent(Species::Prey, 100.0, 100.0);

    let mut previous = agent.energy;
    for tick in 1..=10u32 {
        agent.update(800.0, 600.0);
        assert!(agent.energy < previous);
        assert_eq!(agent.age, tick);
        previous = agent.energy;
    }
}

#[test]
fn test_death_at_zero_energy_is_terminal() {
    let mut agent = still_agent(Species::Prey, 100.0, 100.0);
    agent.energy = 0.05;

    agent.update(800.0, 600.0);
    assert!(!agent.alive);

    // Dead agents no longer move, age or metabolize.
    let pos = agent.pos.clone();
    let energy = agent.energy;
    agent.vel = Array1::from_vec(vec![3.0, 0.0]);
    agent.update(800.0, 600.0);
    assert_eq!(agent.pos, pos);
    assert_eq!(agent.age, 1);
    assert_eq!(agent.energy, energy);

    // Eating restores energy but never resurrects.
    agent.eat();
    assert!(!agent.alive);
}

#[test]
fn test_eat_rewards_follow_species() {
    let mut prey = still_agent(Species::Prey, 0.0, 0.0);
    prey.eat();
    assert_eq!(prey.energy, 120.0);
    assert_eq!(prey.fitness, 10.0);
    assert_eq!(prey.meals, 1);

    let mut predator = still_agent(Species::Predator, 0.0, 0.0);
    predator.eat();
    assert_eq!(predator.energy, 150.0);
    assert_eq!(predator.fitness, 20.0);
    assert_eq!(predator.meals, 1);
}

#[test]
fn test_think_scales_output_by_max_force() {
    let mut agent = still_agent(Species::Prey, 100.0, 100.0);
    // A saturated output bias drives output 0 to exactly 1.0.
    agent.brain.b_o[0] = 20.0;

    agent.think(&Perception::default());
    agent.update(800.0, 600.0);

    assert_eq!(agent.vel[0], species::MAX_FORCE);
    assert_eq!(agent.vel[1], 0.0);
    assert_eq!(agent.accel[0], 0.0);
}

#[test]
fn test_starvation_by_distance() {
    let mut pred = still_agent(Species::Predator, 100.0, 100.0);
    pred.max_starvation_distance = Some(100.0);

    pred.vel = Array1::from_vec(vec![1.0, 0.0]);
    pred.update(800.0, 600.0);

    assert_eq!(pred.distance_since_meal, 1.0);
    assert!(pred.alive);

    for _ in 0..100 {
        pred.update(800.0, 600.0);
        if !pred.alive {
            break;
        }
    }

    assert!(!pred.alive, "agent should starve past the distance limit");
    assert!(pred.energy > 0.0, "death must come from distance, not energy");

    // Eating resets the travelled distance.
    let mut pred2 = still_agent(Species::Predator, 200.0, 200.0);
    pred2.max_starvation_distance = Some(100.0);
    pred2.vel = Array1::from_vec(vec![1.0, 0.0]);
    pred2.update(800.0, 600.0);
    assert!(pred2.distance_since_meal > 0.0);

    pred2.eat();
    assert_eq!(pred2.distance_since_meal, 0.0);
}

#[test]
fn test_no_starvation_without_a_limit() {
    let mut agent = still_agent(Species::Prey, 100.0, 100.0);
    agent.vel = Array1::from_vec(vec![1.0, 0.0]);

    for _ in 0..200 {
        agent.update(800.0, 600.0);
    }

    assert!(agent.alive);
    assert_eq!(agent.distance_since_meal, 200.0);
}
