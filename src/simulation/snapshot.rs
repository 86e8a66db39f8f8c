//! Read-only serializable views of the world.
//!
//! Observers (the headless driver, logs, anything speaking JSON) get plain
//! scalars and nested float rows instead of references into live simulation
//! state. Everything here derives serde both ways so encodings round-trip.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::agent::Agent;
use super::brain::Brain;
use super::food::Food;
use super::species::Species;

/// One agent as observers see it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    /// World-unique id.
    pub id: u64,
    /// Species tag.
    pub species: Species,
    /// Position, x component.
    pub x: f32,
    /// Position, y component.
    pub y: f32,
    /// Velocity, x component.
    pub vx: f32,
    /// Velocity, y component.
    pub vy: f32,
    /// Remaining energy.
    pub energy: f32,
    /// Whether the agent is alive.
    pub alive: bool,
}

impl From<&Agent> for AgentSnapshot {
    fn from(agent: &Agent) -> Self {
        Self {
            id: agent.id,
            species: agent.species,
            x: agent.pos[0],
            y: agent.pos[1],
            vx: agent.vel[0],
            vy: agent.vel[1],
            energy: agent.energy,
            alive: agent.alive,
        }
    }
}

/// One food item as observers see it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodSnapshot {
    /// Position, x component.
    pub x: f32,
    /// Position, y component.
    pub y: f32,
}

impl From<&Food> for FoodSnapshot {
    fn from(food: &Food) -> Self {
        Self {
            x: food.pos[0],
            y: food.pos[1],
        }
    }
}

/// Everything visible in the world right now. Dead agents are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// Current generation.
    pub generation: u32,
    /// Ticks elapsed in the current generation.
    pub steps: u32,
    /// Living prey.
    pub prey: Vec<AgentSnapshot>,
    /// Living predators.
    pub predators: Vec<AgentSnapshot>,
    /// Food on the ground.
    pub food: Vec<FoodSnapshot>,
}

/// Aggregates for one species' population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesStats {
    /// Living individuals.
    pub alive: usize,
    /// Mean fitness over the whole population, dead members included.
    pub mean_fitness: f32,
}

/// Population aggregates for both species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldStats {
    /// Current generation.
    pub generation: u32,
    /// Prey aggregates.
    pub prey: SpeciesStats,
    /// Predator aggregates.
    pub predators: SpeciesStats,
}

/// Controller parameters in encoding-friendly form: sizes plus the four
/// matrices as nested rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrainSnapshot {
    /// Sensor vector length.
    pub input_size: usize,
    /// Hidden layer width.
    pub hidden_size: usize,
    /// Output vector length.
    pub output_size: usize,
    /// Input-to-hidden weights, one row per hidden unit.
    pub w_ih: Vec<Vec<f32>>,
    /// Hidden-to-output weights, one row per output unit.
    pub w_ho: Vec<Vec<f32>>,
    /// Hidden layer biases.
    pub b_h: Vec<f32>,
    /// Output layer biases.
    pub b_o: Vec<f32>,
}

impl From<&Brain> for BrainSnapshot {
    fn from(brain: &Brain) -> Self {
        Self {
            input_size: brain.input_size(),
            hidden_size: brain.hidden_size(),
            output_size: brain.output_size(),
            w_ih: matrix_rows(&brain.w_ih),
            w_ho: matrix_rows(&brain.w_ho),
            b_h: brain.b_h.to_vec(),
            b_o: brain.b_o.to_vec(),
        }
    }
}

/// Per-agent introspection: identity plus the full controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDetail {
    /// World-unique id.
    pub id: u64,
    /// Species tag.
    pub species: Species,
    /// The agent's controller.
    pub brain: BrainSnapshot,
}

impl From<&Agent> for AgentDetail {
    fn from(agent: &Agent) -> Self {
        Self {
            id: agent.id,
            species: agent.species,
            brain: BrainSnapshot::from(&agent.brain),
        }
    }
}

fn matrix_rows(matrix: &Array2<f32>) -> Vec<Vec<f32>> {
    matrix.outer_iter().map(|row| row.to_vec()).collect()
}
