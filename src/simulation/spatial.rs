//! Nearest-neighbor queries over entity collections.
//!
//! Populations are tens of agents, so queries are plain linear scans and the
//! per-tick total is O(prey · predators + prey · food). This is the first
//! scalability limit if populations ever grow by orders of magnitude.

use ndarray::Array1;

use super::geometric_utils::distance;
use super::locatable::Locatable;

/// Finds the entity nearest to `origin` among those matching `keep`.
///
/// Returns the index into `items` and the distance, or `None` when nothing
/// matches. Ties resolve to the earliest index.
pub fn nearest_where<T: Locatable>(
    origin: &Array1<f32>,
    items: &[T],
    keep: impl Fn(&T) -> bool,
) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (i, item) in items.iter().enumerate() {
        if !keep(item) {
            continue;
        }
        let d = distance(origin, item.pos());
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((i, d));
        }
    }
    best
}

/// Finds the entity nearest to `origin`, with no filter applied.
pub fn nearest<T: Locatable>(origin: &Array1<f32>, items: &[T]) -> Option<(usize, f32)> {
    nearest_where(origin, items, |_| true)
}
