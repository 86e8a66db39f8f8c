//! Simulation parameters and validation.

use thiserror::Error;

/// Rejections produced by [`Params::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// World bounds must both be positive.
    #[error("world bounds must be positive, got {width}x{height}")]
    InvalidBounds {
        /// Offending width.
        width: f32,
        /// Offending height.
        height: f32,
    },
    /// A generation must last at least one tick.
    #[error("steps_per_generation must be at least 1")]
    ZeroGenerationBudget,
    /// The mutation rate is a per-element probability.
    #[error("mutation_rate must lie in [0, 1], got {0}")]
    InvalidMutationRate(f32),
    /// The food spawn rate is a per-tick probability.
    #[error("food_spawn_rate must lie in [0, 1], got {0}")]
    InvalidFoodSpawnRate(f32),
    /// The initial batch cannot exceed the hard cap.
    #[error("initial_food ({initial}) exceeds max_food ({max})")]
    TooMuchInitialFood {
        /// Requested initial batch.
        initial: usize,
        /// Hard cap.
        max: usize,
    },
    /// The starvation limit, when enabled, must be positive.
    #[error("starvation_distance must be positive, got {0}")]
    InvalidStarvationDistance(f32),
}

/// Simulation parameters that control world and evolution behavior.
#[derive(Debug, Clone)]
pub struct Params {
    /// Simulation area width.
    pub box_width: f32,
    /// Simulation area height.
    pub box_height: f32,
    /// Prey population size, restored by every generation turnover.
    pub n_prey: usize,
    /// Predator population size, restored by every generation turnover.
    pub n_predators: usize,
    /// Probability of spawning one food item per tick.
    pub food_spawn_rate: f32,
    /// Maximum food item count (hard cap).
    pub max_food: usize,
    /// Food items seeded at world reset and after each generation turnover.
    pub initial_food: usize,
    /// Ticks in one generation before the populations are evolved.
    pub steps_per_generation: u32,
    /// Per-element probability of mutating a controller weight.
    pub mutation_rate: f32,
    /// Optional distance an agent may travel without eating before it
    /// starves. `None` disables the rule; energy decay always applies.
    pub starvation_distance: Option<f32>,
    /// Fixed RNG seed for reproducible runs; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            box_width: 800.0,
            box_height: 600.0,
            n_prey: 20,
            n_predators: 5,
            food_spawn_rate: 0.1,
            max_food: 50,
            initial_food: 20,
            steps_per_generation: 2000,
            mutation_rate: 0.1,
            starvation_distance: None,
            seed: None,
        }
    }
}

impl Params {
    /// Checks for values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.box_width <= 0.0 || self.box_height <= 0.0 {
            return Err(ConfigError::InvalidBounds {
                width: self.box_width,
                height: self.box_height,
            });
        }
        if self.steps_per_generation == 0 {
            return Err(ConfigError::ZeroGenerationBudget);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::InvalidMutationRate(self.mutation_rate));
        }
        if !(0.0..=1.0).contains(&self.food_spawn_rate) {
            return Err(ConfigError::InvalidFoodSpawnRate(self.food_spawn_rate));
        }
        if self.initial_food > self.max_food {
            return Err(ConfigError::TooMuchInitialFood {
                initial: self.initial_food,
                max: self.max_food,
            });
        }
        if let Some(limit) = self.starvation_distance {
            if limit <= 0.0 {
                return Err(ConfigError::InvalidStarvationDistance(limit));
            }
        }
        Ok(())
    }
}
