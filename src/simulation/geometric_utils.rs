//! Geometric utility functions for distances, directions and toroidal wrapping.

use ndarray::Array1;

/// Calculates the Euclidean length of a 2D vector.
pub fn norm(v: &Array1<f32>) -> f32 {
    v.mapv(|x| x.powi(2)).sum().sqrt()
}

/// Calculates the Euclidean distance between two positions.
///
/// # Arguments
///
/// * `a` - First position
/// * `b` - Second position
pub fn distance(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    norm(&(a - b))
}

/// Returns the unit vector pointing from `from` towards `to`.
///
/// When the two positions coincide there is no direction; the zero vector is
/// returned instead.
pub fn direction_to(from: &Array1<f32>, to: &Array1<f32>) -> Array1<f32> {
    let mut d = to - from;
    let len = norm(&d);
    if len > 0.0 {
        d /= len;
    }
    d
}

/// Wraps a position vector around the simulation box boundaries (toroidal topology).
///
/// A coordinate exactly at the box edge wraps to 0; a coordinate of -1 wraps
/// to the edge minus one. Positions never reflect.
///
/// # Arguments
///
/// * `v` - Mutable position vector to wrap
/// * `box_width` - Width of the simulation box
/// * `box_height` - Height of the simulation box
pub fn wrap_around_mut(v: &mut Array1<f32>, box_width: f32, box_height: f32) {
    v[0] = v[0].rem_euclid(box_width);
    v[1] = v[1].rem_euclid(box_height);
}
