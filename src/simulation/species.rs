//! Species tags and the constants that differ between prey and predators.

use serde::{Deserialize, Serialize};

/// Hidden layer width of every controller, both species.
pub const HIDDEN_SIZE: usize = 8;
/// Controller output length: a 2D steering force.
pub const OUTPUT_SIZE: usize = 2;
/// Cap on the steering force controllers can apply, both species.
pub const MAX_FORCE: f32 = 0.2;
/// Energy every agent starts with.
pub const INITIAL_ENERGY: f32 = 100.0;
/// Energy drained per tick just for being alive.
pub const METABOLISM: f32 = 0.1;

/// Species tag carried by every agent.
///
/// Kinematics are shared; everything that differs between prey and predators
/// (sensor layout, movement caps, meal rewards) is matched on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    /// Chases food, flees predators.
    Prey,
    /// Hunts prey.
    Predator,
}

impl Species {
    /// Length of the sensor vector fed to the controller.
    ///
    /// Prey sense two directions (nearest predator, nearest food); predators
    /// sense one (nearest prey).
    pub fn input_size(self) -> usize {
        match self {
            Self::Prey => 4,
            Self::Predator => 2,
        }
    }

    /// Speed cap. Prey outrun predators slightly.
    pub fn max_speed(self) -> f32 {
        match self {
            Self::Prey => 5.0,
            Self::Predator => 4.5,
        }
    }

    /// Collision radius.
    pub fn radius(self) -> f32 {
        match self {
            Self::Prey => 10.0,
            Self::Predator => 15.0,
        }
    }

    /// Energy gained from one meal.
    pub fn meal_energy(self) -> f32 {
        match self {
            Self::Prey => 20.0,
            Self::Predator => 50.0,
        }
    }

    /// Fitness reward for one meal.
    pub fn meal_fitness(self) -> f32 {
        match self {
            Self::Prey => 10.0,
            Self::Predator => 20.0,
        }
    }
}
