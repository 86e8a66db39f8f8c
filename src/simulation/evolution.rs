//! Generational evolution: elitism, tournament selection, crossover and
//! mutation.

use ndarray::Array1;
use rand::Rng;
use rand::seq::SliceRandom;

use super::agent::{Agent, AgentIds};
use super::brain::Brain;
use super::params::Params;
use super::species::Species;

/// Candidates drawn for each tournament.
const TOURNAMENT_SIZE: usize = 3;
/// Fittest individuals whose controllers pass into the next generation
/// unchanged.
const ELITE_COUNT: usize = 2;

/// Breeds the next generation of one species' population.
#[derive(Debug, Clone)]
pub struct Evolution {
    /// Per-element probability of mutating a controller weight.
    pub mutation_rate: f32,
    /// Candidates drawn per tournament.
    pub tournament_size: usize,
    /// Elites copied unchanged into each new generation.
    pub elite_count: usize,
}

impl Evolution {
    /// Creates an engine with the standard tournament and elite sizes.
    pub fn new(mutation_rate: f32) -> Self {
        Self {
            mutation_rate,
            tournament_size: TOURNAMENT_SIZE,
            elite_count: ELITE_COUNT,
        }
    }

    /// Breeds `target_size` fresh agents from the outgoing `population`.
    ///
    /// Selection ranks the whole outgoing generation, dead agents included,
    /// since fitness survives death. The fittest `elite_count` individuals
    /// pass their controllers on unchanged; every remaining slot is filled by
    /// crossover between two tournament winners followed by mutation. All
    /// offspring get fresh bodies, ids and starting state.
    ///
    /// # Arguments
    ///
    /// * `population` - Outgoing generation, in any order
    /// * `species` - Species being bred
    /// * `target_size` - Population size to restore
    /// * `params` - Simulation parameters (spawn bounds, starvation limit)
    /// * `ids` - Id source for the offspring
    /// * `rng` - Randomness for selection, crossover, mutation and bodies
    pub fn next_generation(
        &self,
        population: &[Agent],
        species: Species,
        target_size: usize,
        params: &Params,
        ids: &mut AgentIds,
        rng: &mut impl Rng,
    ) -> Vec<Agent> {
        if population.is_empty() {
            return self.spawn_random(species, target_size, params, ids, rng);
        }

        let mut ranked: Vec<&Agent> = population.iter().collect();
        ranked.sort_by(|a, b| b.fitness.partial_cmp(&a.fitness).unwrap());

        let mut next = Vec::with_capacity(target_size);

        // A population smaller than the elite count re-clones its best.
        while next.len() < self.elite_count.min(target_size) {
            let elite = ranked[next.len().min(ranked.len() - 1)];
            next.push(self.respawn(elite.brain.clone(), species, params, ids, rng));
        }

        while next.len() < target_size {
            let parent1 = self.tournament(&ranked, rng);
            let parent2 = self.tournament(&ranked, rng);
            let mut child = Brain::crossover(&parent1.brain, &parent2.brain, rng);
            child.mutate(self.mutation_rate, rng);
            next.push(self.respawn(child, species, params, ids, rng));
        }

        next
    }

    /// Spawns `target_size` agents with fresh random controllers.
    ///
    /// Cold-start path: used when a world is first populated and whenever a
    /// species has no outgoing individuals to breed from.
    pub fn spawn_random(
        &self,
        species: Species,
        target_size: usize,
        params: &Params,
        ids: &mut AgentIds,
        rng: &mut impl Rng,
    ) -> Vec<Agent> {
        (0..target_size)
            .map(|_| {
                let pos = random_pos(params, rng);
                Agent::new_random(ids.next_id(), species, pos, rng)
                    .with_starvation_limit(params.starvation_distance)
            })
            .collect()
    }

    /// Gives an inherited controller a fresh body at a random position.
    fn respawn(
        &self,
        brain: Brain,
        species: Species,
        params: &Params,
        ids: &mut AgentIds,
        rng: &mut impl Rng,
    ) -> Agent {
        let pos = random_pos(params, rng);
        Agent::with_brain(ids.next_id(), species, pos, brain, rng)
            .with_starvation_limit(params.starvation_distance)
    }

    /// Draws `tournament_size` distinct candidates uniformly (the whole
    /// population when it is smaller) and returns the fittest.
    fn tournament<'a>(&self, ranked: &[&'a Agent], rng: &mut impl Rng) -> &'a Agent {
        ranked
            .choose_multiple(rng, self.tournament_size)
            .max_by(|a, b| a.fitness.partial_cmp(&b.fitness).unwrap())
            .copied()
            .expect("tournament pool is non-empty")
    }
}

/// Uniform random position inside the world bounds.
fn random_pos(params: &Params, rng: &mut impl Rng) -> Array1<f32> {
    Array1::from_vec(vec![
        rng.gen_range(0.0..params.box_width),
        rng.gen_range(0.0..params.box_height),
    ])
}
