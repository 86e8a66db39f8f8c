//! Trait for entities that occupy a position in the world.
//!
//! This trait provides the common interface the nearest-neighbor queries
//! scan over (agents and food items).

use ndarray::Array1;

/// Trait for entities with a position in 2D space.
pub trait Locatable {
    /// Returns a reference to the entity's position.
    fn pos(&self) -> &Array1<f32>;
}
