#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use std::collections::HashSet;

use ecosim::simulation::agent::{Agent, AgentIds};
use ecosim::simulation::evolution::Evolution;
use ecosim::simulation::params::Params;
use ecosim::simulation::species::Species;
use ndarray::Array1;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

fn create_test_params() -> Params {
    Params {
        seed: Some(42),
        ..Params::default()
    }
}

fn test_rng(seed: u64) -> ChaCha12Rng {
    ChaCha12Rng::seed_from_u64(seed)
}

/// Builds a population with one agent per given fitness value.
fn scored_population(
    fitnesses: &[f32],
    target: Species,
    ids: &mut AgentIds,
    rng: &mut ChaCha12Rng,
) -> Vec<Agent> {
    fitnesses
        .iter()
        .map(|&fitness| {
            let mut agent = Agent::new_random(ids.next_id(), target, Array1::zeros(2), rng);
            agent.fitness = fitness;
            agent
        })
        .collect()
}

#[test]
fn test_population_size_invariant() {
    let params = create_test_params();
    let engine = Evolution::new(params.mutation_rate);
    let mut ids = AgentIds::default();
    let mut rng = test_rng(1);

    for n in [0usize, 1, 7] {
        let fitnesses: Vec<f32> = (0..n).map(|i| i as f32).collect();
        let population = scored_population(&fitnesses, Species::Prey, &mut ids, &mut rng);

        let next =
            engine.next_generation(&population, Species::Prey, 5, &params, &mut ids, &mut rng);

        assert_eq!(next.len(), 5);
        for agent in &next {
            assert!(agent.alive);
            assert_eq!(agent.age, 0);
            assert_eq!(agent.energy, 100.0);
            assert_eq!(agent.fitness, 0.0);
            assert!(agent.pos[0] >= 0.0 && agent.pos[0] < params.box_width);
            assert!(agent.pos[1] >= 0.0 && agent.pos[1] < params.box_height);
        }
    }

    let next = engine.next_generation(&[], Species::Predator, 0, &params, &mut ids, &mut rng);
    assert!(next.is_empty());
}

#[test]
fn test_elitism_preserves_best_genotypes() {
    let params = create_test_params();
    let engine = Evolution::new(params.mutation_rate);
    let mut ids = AgentIds::default();
    let mut rng = test_rng(2);

    let population = scored_population(&[3.0, 9.0, 1.0, 5.0], Species::Prey, &mut ids, &mut rng);
    let best = population[1].brain.clone();
    let second = population[3].brain.clone();

    let next = engine.next_generation(&population, Species::Prey, 6, &params, &mut ids, &mut rng);

    assert_eq!(next[0].brain.w_ih, best.w_ih);
    assert_eq!(next[0].brain.w_ho, best.w_ho);
    assert_eq!(next[0].brain.b_h, best.b_h);
    assert_eq!(next[0].brain.b_o, best.b_o);
    assert_eq!(next[1].brain.w_ih, second.w_ih);
}

#[test]
fn test_single_survivor_fills_both_elite_slots() {
    let params = create_test_params();
    let engine = Evolution::new(params.mutation_rate);
    let mut ids = AgentIds::default();
    let mut rng = test_rng(3);

    let population = scored_population(&[4.0], Species::Predator, &mut ids, &mut rng);
    let best = population[0].brain.clone();

    let next =
        engine.next_generation(&population, Species::Predator, 4, &params, &mut ids, &mut rng);

    assert_eq!(next.len(), 4);
    assert_eq!(next[0].brain.w_ih, best.w_ih);
    assert_eq!(next[1].brain.w_ih, best.w_ih);
}

#[test]
fn test_children_inherit_from_best_when_tournament_sees_all() {
    let params = create_test_params();
    let engine = Evolution::new(0.0);
    let mut ids = AgentIds::default();
    let mut rng = test_rng(4);

    // Three candidates with tournament size three: every tournament samples
    // the whole population and returns the fittest, and with the mutation
    // rate at zero every child is an exact copy of its matrices.
    let population = scored_population(&[2.0, 8.0, 5.0], Species::Prey, &mut ids, &mut rng);
    let best = population[1].brain.clone();

    let next = engine.next_generation(&population, Species::Prey, 6, &params, &mut ids, &mut rng);

    for child in &next[2..] {
        assert_eq!(child.brain.w_ih, best.w_ih);
        assert_eq!(child.brain.w_ho, best.w_ho);
        assert_eq!(child.brain.b_h, best.b_h);
        assert_eq!(child.brain.b_o, best.b_o);
    }
}

#[test]
fn test_offspring_get_fresh_state_and_new_ids() {
    let params = create_test_params();
    let engine = Evolution::new(params.mutation_rate);
    let mut ids = AgentIds::default();
    let mut rng = test_rng(5);

    let mut population =
        scored_population(&[1.0, 2.0, 3.0], Species::Prey, &mut ids, &mut rng);
    population[0].kill();
    population[2].age = 500;

    let next = engine.next_generation(&population, Species::Prey, 5, &params, &mut ids, &mut rng);

    let mut seen = HashSet::new();
    for agent in &next {
        assert!(agent.alive);
        assert_eq!(agent.age, 0);
        assert_eq!(agent.meals, 0);
        assert_eq!(agent.distance_since_meal, 0.0);
        assert!(seen.insert(agent.id), "offspring ids must be unique");
    }
    for parent in &population {
        assert!(!seen.contains(&parent.id), "offspring ids must be fresh");
    }
}

#[test]
fn test_starvation_limit_propagates_to_offspring() {
    let mut params = create_test_params();
    params.starvation_distance = Some(50.0);
    let engine = Evolution::new(params.mutation_rate);
    let mut ids = AgentIds::default();
    let mut rng = test_rng(6);

    let founders = engine.next_generation(&[], Species::Prey, 3, &params, &mut ids, &mut rng);
    for agent in &founders {
        assert_eq!(agent.max_starvation_distance, Some(50.0));
    }

    let bred = engine.next_generation(&founders, Species::Prey, 3, &params, &mut ids, &mut rng);
    for agent in &bred {
        assert_eq!(agent.max_starvation_distance, Some(50.0));
    }
}
