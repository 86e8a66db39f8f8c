//! Agent state, kinematics, sensing and eating.
//!
//! Prey and predators share one record and one kinematics update; everything
//! species-specific (sensor layout, meal rewards, caps) comes from the
//! [`Species`] tag.

use ndarray::Array1;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::Rng;

use super::brain::Brain;
use super::geometric_utils::{direction_to, norm, wrap_around_mut};
use super::locatable::Locatable;
use super::species::{self, Species};

/// Monotonic source of world-unique agent ids.
#[derive(Debug, Clone, Default)]
pub struct AgentIds {
    next: u64,
}

impl AgentIds {
    /// Issues the next unused id.
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// What one agent perceived this tick: the nearest positions found by the
/// world's linear scans. Fields irrelevant to the agent's species stay `None`.
#[derive(Debug, Clone, Default)]
pub struct Perception {
    /// Nearest living predator (sensed by prey).
    pub predator: Option<Array1<f32>>,
    /// Nearest food item (sensed by prey).
    pub food: Option<Array1<f32>>,
    /// Nearest living prey (sensed by predators).
    pub prey: Option<Array1<f32>>,
}

/// One creature in the world: a physical body plus the controller steering it.
///
/// The alive flag latches: it flips to `false` exactly once (energy depletion,
/// predation or starvation) and never back. Dead agents stop moving but stay
/// in their population, carrying their final fitness, until the next
/// generation turnover discards them.
#[derive(Debug, Clone)]
pub struct Agent {
    /// World-unique identifier.
    pub id: u64,
    /// Species tag selecting sensing and eating behavior.
    pub species: Species,
    /// Position in 2D space.
    pub pos: Array1<f32>,
    /// Velocity, applied to the position every tick.
    pub vel: Array1<f32>,
    /// Steering force accumulator, cleared by every [`Self::update`].
    pub accel: Array1<f32>,
    /// Speed cap, defaulted from the species.
    pub max_speed: f32,
    /// Cap scaling the controller's steering output.
    pub max_force: f32,
    /// Collision radius, defaulted from the species.
    pub radius: f32,
    /// Remaining energy; the agent dies when it reaches zero.
    pub energy: f32,
    /// `false` once the agent has died.
    pub alive: bool,
    /// Ticks survived.
    pub age: u32,
    /// Evolution score, accumulated by eating. Never negative.
    pub fitness: f32,
    /// Meals eaten: food items for prey, prey for predators.
    pub meals: u32,
    /// Distance travelled since the last meal.
    pub distance_since_meal: f32,
    /// Optional starvation limit on `distance_since_meal`.
    pub max_starvation_distance: Option<f32>,
    /// The controller steering this agent.
    pub brain: Brain,
}

impl Agent {
    /// Creates an agent with a fresh random controller at `pos`.
    pub fn new_random(id: u64, species: Species, pos: Array1<f32>, rng: &mut impl Rng) -> Self {
        let brain = Brain::new_random(
            species.input_size(),
            species::HIDDEN_SIZE,
            species::OUTPUT_SIZE,
            rng,
        );
        Self::with_brain(id, species, pos, brain, rng)
    }

    /// Creates an agent around an inherited controller.
    ///
    /// Physical state is reset to initial values (full energy, zero age and
    /// fitness, small random velocity) and the agent is alive. The
    /// controller's sensor layout must match the species; a mismatch is a
    /// construction-time defect and aborts.
    pub fn with_brain(
        id: u64,
        species: Species,
        pos: Array1<f32>,
        brain: Brain,
        rng: &mut impl Rng,
    ) -> Self {
        assert_eq!(
            brain.input_size(),
            species.input_size(),
            "controller sensor layout does not match species"
        );
        Self {
            id,
            species,
            pos,
            vel: Array1::random_using(2, Uniform::new(-1., 1.), rng),
            accel: Array1::zeros(2),
            max_speed: species.max_speed(),
            max_force: species::MAX_FORCE,
            radius: species.radius(),
            energy: species::INITIAL_ENERGY,
            alive: true,
            age: 0,
            fitness: 0.0,
            meals: 0,
            distance_since_meal: 0.0,
            max_starvation_distance: None,
            brain,
        }
    }

    /// Sets the optional starvation-distance limit, returning the agent.
    pub fn with_starvation_limit(mut self, limit: Option<f32>) -> Self {
        self.max_starvation_distance = limit;
        self
    }

    /// Accumulates a steering force for the next [`Self::update`].
    pub fn apply_force(&mut self, force: &Array1<f32>) {
        self.accel += force;
    }

    /// Builds the species' sensor vector from `perception` and lets the
    /// controller pick a steering force, scaled by `max_force`.
    ///
    /// Prey sense the normalized directions towards the nearest living
    /// predator and the nearest food; predators sense the direction towards
    /// the nearest living prey. An absent target reads as the zero vector.
    pub fn think(&mut self, perception: &Perception) {
        let inputs = self.sense(perception);
        let force = self.brain.forward(&inputs) * self.max_force;
        self.apply_force(&force);
    }

    fn sense(&self, perception: &Perception) -> Array1<f32> {
        match self.species {
            Species::Prey => {
                let threat = sensed_direction(&self.pos, perception.predator.as_ref());
                let meal = sensed_direction(&self.pos, perception.food.as_ref());
                Array1::from_vec(vec![threat[0], threat[1], meal[0], meal[1]])
            }
            Species::Predator => {
                let quarry = sensed_direction(&self.pos, perception.prey.as_ref());
                Array1::from_vec(vec![quarry[0], quarry[1]])
            }
        }
    }

    /// Advances kinematics and energy by one tick. Dead agents do not move.
    ///
    /// Order matters: the force accumulator folds into the velocity, speed is
    /// clamped to `max_speed` preserving direction, the position advances and
    /// wraps toroidally, the accumulator clears, then ageing and metabolism
    /// apply and death is checked.
    pub fn update(&mut self, box_width: f32, box_height: f32) {
        if !self.alive {
            return;
        }

        self.vel += &self.accel;
        let speed = norm(&self.vel);
        if speed > self.max_speed {
            self.vel *= self.max_speed / speed;
        }
        self.pos += &self.vel;
        self.accel.fill(0.0);
        wrap_around_mut(&mut self.pos, box_width, box_height);

        self.age += 1;
        self.energy -= species::METABOLISM;
        self.distance_since_meal += speed.min(self.max_speed);

        if self.energy <= 0.0 {
            self.alive = false;
        }
        if let Some(limit) = self.max_starvation_distance {
            if self.distance_since_meal > limit {
                self.alive = false;
            }
        }
    }

    /// Records one meal: energy and fitness rise by the species' rewards.
    pub fn eat(&mut self) {
        self.energy += self.species.meal_energy();
        self.fitness += self.species.meal_fitness();
        self.meals += 1;
        self.distance_since_meal = 0.0;
    }

    /// Marks the agent dead. Terminal and idempotent.
    pub fn kill(&mut self) {
        self.alive = false;
    }
}

impl Locatable for Agent {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }
}

/// Normalized direction towards `target`, or the zero vector when there is
/// none.
fn sensed_direction(from: &Array1<f32>, target: Option<&Array1<f32>>) -> Array1<f32> {
    target.map_or_else(|| Array1::zeros(2), |t| direction_to(from, t))
}
