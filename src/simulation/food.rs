//! Food resources that prey consume for energy.

use ndarray::Array1;
use rand::Rng;

use super::locatable::Locatable;

/// Collision radius of a food item.
pub const FOOD_RADIUS: f32 = 5.0;

/// An ephemeral food resource: a position and nothing else.
///
/// Food is consumed atomically by the first agent that reaches it within a
/// tick; consumption removes it from the world immediately.
#[derive(Debug, Clone)]
pub struct Food {
    /// Position in 2D space.
    pub pos: Array1<f32>,
}

impl Food {
    /// Creates a food item at a uniformly random position inside the box.
    pub fn new_random(box_width: f32, box_height: f32, rng: &mut impl Rng) -> Self {
        Self {
            pos: Array1::from_vec(vec![
                rng.gen_range(0.0..box_width),
                rng.gen_range(0.0..box_height),
            ]),
        }
    }
}

impl Locatable for Food {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }
}
