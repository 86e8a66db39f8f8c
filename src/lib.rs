//! # Ecosim - Neuroevolutionary Predator/Prey Simulation
//!
//! A continuous 2D world where prey chase food and flee predators, predators
//! hunt prey, and every agent is steered by a small feed-forward neural
//! network improved across generations by a genetic algorithm.
//!
//! ## Features
//!
//! - Neural network controllers (two-layer MLP with tanh activation)
//! - Genetic algorithm evolution (elitism, tournament selection, matrix-level
//!   crossover, per-element mutation)
//! - Nearest-neighbor sensing of threats, meals and quarry
//! - Energy metabolism, predation and an optional starvation-by-distance rule
//! - Toroidal world with Bernoulli food spawning
//! - Deterministic trajectories from a fixed seed
//! - Serializable world snapshots and per-agent controller introspection
//!
//! ## Core Modules
//!
//! - [`simulation::agent`] - Agent behavior and state
//! - [`simulation::brain`] - Neural network implementation
//! - [`simulation::world`] - Main simulation loop
//! - [`simulation::evolution`] - Generational breeding
//! - [`simulation::runner`] - Lifecycle state machine
//! - [`simulation::snapshot`] - Read-only serializable views

/// Core simulation logic and data structures.
pub mod simulation {
    /// Agent state, kinematics, sensing and eating.
    pub mod agent;
    /// Neural network controllers steering the agents.
    pub mod brain;
    /// Generational evolution: selection, crossover and mutation.
    pub mod evolution;
    /// Food items that prey consume.
    pub mod food;
    /// Geometric utility functions for distance calculations.
    pub mod geometric_utils;
    /// Trait for entities with a position in 2D space.
    ///
    /// The [`locatable::Locatable`] trait is implemented by everything the
    /// nearest-neighbor queries scan over (Agent, Food).
    pub mod locatable;
    /// Simulation parameters and validation.
    pub mod params;
    /// Random source construction.
    pub mod rng;
    /// Lifecycle control around a world.
    pub mod runner;
    /// Read-only serializable views of the world.
    pub mod snapshot;
    /// Linear-scan nearest-neighbor queries.
    pub mod spatial;
    /// Species tags and per-species constants.
    pub mod species;
    /// World state and the per-tick simulation loop.
    pub mod world;
}
