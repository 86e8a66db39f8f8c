//! World state and the per-tick simulation loop.
//!
//! The world owns both populations, the food on the ground, and the single
//! RNG every random decision flows through. Each tick runs sensing, thinking
//! and kinematics for every living agent, resolves eating and predation, and
//! hands whole populations to the evolution engine when the generation's tick
//! budget is spent.

use rand::Rng;
use rand_chacha::ChaCha12Rng;

use super::agent::{Agent, AgentIds, Perception};
use super::evolution::Evolution;
use super::food::{self, Food};
use super::geometric_utils::distance;
use super::params::Params;
use super::rng::create_rng;
use super::snapshot::{
    AgentDetail, AgentSnapshot, FoodSnapshot, SpeciesStats, WorldSnapshot, WorldStats,
};
use super::spatial;
use super::species::Species;

/// One species' population plus its generation bookkeeping.
#[derive(Debug, Clone)]
pub struct Population {
    /// Species of every member.
    pub species: Species,
    /// Current members. Dead agents stay listed, carrying their frozen
    /// fitness, until the next generation turnover discards them.
    pub agents: Vec<Agent>,
    /// Generations bred so far; the founding population is generation 1.
    pub generation: u32,
    /// Population size restored by every turnover.
    pub target_size: usize,
}

impl Population {
    fn new(species: Species, target_size: usize) -> Self {
        Self {
            species,
            agents: Vec::new(),
            generation: 1,
            target_size,
        }
    }

    /// Counts living members.
    pub fn alive_count(&self) -> usize {
        self.agents.iter().filter(|a| a.alive).count()
    }

    /// Mean fitness over the whole population, dead members included.
    /// An empty population reports 0.0.
    pub fn mean_fitness(&self) -> f32 {
        if self.agents.is_empty() {
            return 0.0;
        }
        let total: f32 = self.agents.iter().map(|a| a.fitness).sum();
        total / self.agents.len() as f32
    }

    /// Aggregates for stats reporting.
    pub fn stats(&self) -> SpeciesStats {
        SpeciesStats {
            alive: self.alive_count(),
            mean_fitness: self.mean_fitness(),
        }
    }
}

/// The full simulation state.
///
/// Owns the prey and predator populations, the food items, the evolution
/// engine and the world RNG. Populations evolve in lockstep on a shared tick
/// budget, so both generation counters always agree.
#[derive(Debug, Clone)]
pub struct World {
    /// Parameters the world was built with.
    pub params: Params,
    /// The prey population.
    pub prey: Population,
    /// The predator population.
    pub predators: Population,
    /// Food currently on the ground.
    pub food: Vec<Food>,
    /// Ticks elapsed in the current generation.
    pub steps: u32,
    evolution: Evolution,
    ids: AgentIds,
    rng: ChaCha12Rng,
}

impl World {
    /// Creates a world and populates it with random agents and food.
    pub fn new(params: Params) -> Self {
        let mut world = Self {
            prey: Population::new(Species::Prey, params.n_prey),
            predators: Population::new(Species::Predator, params.n_predators),
            food: Vec::with_capacity(params.max_food),
            steps: 0,
            evolution: Evolution::new(params.mutation_rate),
            ids: AgentIds::default(),
            rng: create_rng(params.seed),
            params,
        };
        world.reset();
        world
    }

    /// Re-randomizes both populations and the food and zeroes the step
    /// counter. Generation counters are preserved, so a reset mid-run
    /// continues the lineage numbering with fresh individuals.
    pub fn reset(&mut self) {
        self.steps = 0;
        self.prey.agents = self.evolution.spawn_random(
            Species::Prey,
            self.prey.target_size,
            &self.params,
            &mut self.ids,
            &mut self.rng,
        );
        self.predators.agents = self.evolution.spawn_random(
            Species::Predator,
            self.predators.target_size,
            &self.params,
            &mut self.ids,
            &mut self.rng,
        );
        self.reset_food();

        log::info!(
            "World reset: prey={} predators={} food={}",
            self.prey.agents.len(),
            self.predators.agents.len(),
            self.food.len()
        );
    }

    /// Advances the world by one tick.
    ///
    /// When the generation's tick budget is already spent, the call evolves
    /// both populations instead and returns without advancing any agent; the
    /// next call runs the new generation's first tick.
    pub fn step(&mut self) {
        if self.steps >= self.params.steps_per_generation {
            self.evolve();
            return;
        }

        self.steps += 1;

        if self.rng.gen_bool(f64::from(self.params.food_spawn_rate)) {
            self.spawn_food();
        }

        self.step_prey();
        self.step_predators();
    }

    /// Current generation. Populations evolve in lockstep, so they share one
    /// number.
    pub fn generation(&self) -> u32 {
        self.prey.generation
    }

    /// Snapshot of everything currently visible: living agents, food on the
    /// ground, generation and step counters.
    pub fn get_state(&self) -> WorldSnapshot {
        WorldSnapshot {
            generation: self.generation(),
            steps: self.steps,
            prey: self
                .prey
                .agents
                .iter()
                .filter(|a| a.alive)
                .map(AgentSnapshot::from)
                .collect(),
            predators: self
                .predators
                .agents
                .iter()
                .filter(|a| a.alive)
                .map(AgentSnapshot::from)
                .collect(),
            food: self.food.iter().map(FoodSnapshot::from).collect(),
        }
    }

    /// Population aggregates for both species.
    pub fn get_stats(&self) -> WorldStats {
        WorldStats {
            generation: self.generation(),
            prey: self.prey.stats(),
            predators: self.predators.stats(),
        }
    }

    /// Full controller introspection for one agent, by id. Returns `None`
    /// when no agent of either species carries the id.
    pub fn get_agent(&self, id: u64) -> Option<AgentDetail> {
        self.prey
            .agents
            .iter()
            .chain(self.predators.agents.iter())
            .find(|a| a.id == id)
            .map(AgentDetail::from)
    }

    /// Appends one random food item unless the cap is reached.
    fn spawn_food(&mut self) {
        if self.food.len() < self.params.max_food {
            self.food.push(Food::new_random(
                self.params.box_width,
                self.params.box_height,
                &mut self.rng,
            ));
        }
    }

    fn reset_food(&mut self) {
        self.food.clear();
        for _ in 0..self.params.initial_food {
            self.spawn_food();
        }
    }

    /// Runs the prey phase: each living prey senses, thinks, moves, then
    /// eats every remaining food item within pickup range.
    ///
    /// Prey act strictly in index order against the live food list, so a
    /// food item two prey could both reach this tick goes to the one
    /// processed first. The pickup test is purely geometric: a prey that
    /// starves during its own update still collects the food it reached.
    fn step_prey(&mut self) {
        for i in 0..self.prey.agents.len() {
            if !self.prey.agents[i].alive {
                continue;
            }

            let origin = self.prey.agents[i].pos.clone();
            let perception = Perception {
                predator: spatial::nearest_where(&origin, &self.predators.agents, |p| p.alive)
                    .map(|(j, _)| self.predators.agents[j].pos.clone()),
                food: spatial::nearest(&origin, &self.food)
                    .map(|(j, _)| self.food[j].pos.clone()),
                prey: None,
            };

            let agent = &mut self.prey.agents[i];
            agent.think(&perception);
            agent.update(self.params.box_width, self.params.box_height);

            let pickup = agent.radius + food::FOOD_RADIUS;
            let pos = agent.pos.clone();
            let before = self.food.len();
            self.food.retain(|item| distance(&pos, &item.pos) >= pickup);
            for _ in 0..before - self.food.len() {
                agent.eat();
            }
        }
    }

    /// Runs the predator phase: each living predator locks onto the nearest
    /// living prey, thinks, moves, then captures it if the scan-time
    /// distance was inside strike range.
    ///
    /// The capture test uses the distance recorded at scan time, and each
    /// predator captures at most one prey per tick. A prey killed earlier in
    /// the phase is invisible to later predators' scans.
    fn step_predators(&mut self) {
        for i in 0..self.predators.agents.len() {
            if !self.predators.agents[i].alive {
                continue;
            }

            let origin = self.predators.agents[i].pos.clone();
            let quarry = spatial::nearest_where(&origin, &self.prey.agents, |p| p.alive);

            let perception = Perception {
                predator: None,
                food: None,
                prey: quarry.map(|(j, _)| self.prey.agents[j].pos.clone()),
            };

            let agent = &mut self.predators.agents[i];
            agent.think(&perception);
            agent.update(self.params.box_width, self.params.box_height);

            if let Some((j, dist)) = quarry {
                let strike = self.predators.agents[i].radius + self.prey.agents[j].radius;
                if dist < strike {
                    self.predators.agents[i].eat();
                    self.prey.agents[j].kill();
                }
            }
        }
    }

    /// Replaces both populations with their next generations, bumps the
    /// generation counters, and restarts the tick budget with fresh food.
    fn evolve(&mut self) {
        log::info!(
            "Generation {} complete: prey alive={} mean_fitness={:.2}; predators alive={} mean_fitness={:.2}",
            self.generation(),
            self.prey.alive_count(),
            self.prey.mean_fitness(),
            self.predators.alive_count(),
            self.predators.mean_fitness()
        );

        self.prey.agents = self.evolution.next_generation(
            &self.prey.agents,
            self.prey.species,
            self.prey.target_size,
            &self.params,
            &mut self.ids,
            &mut self.rng,
        );
        self.prey.generation += 1;

        self.predators.agents = self.evolution.next_generation(
            &self.predators.agents,
            self.predators.species,
            self.predators.target_size,
            &self.params,
            &mut self.ids,
            &mut self.rng,
        );
        self.predators.generation += 1;

        self.steps = 0;
        self.reset_food();
    }
}
