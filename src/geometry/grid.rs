use crate::model::{atom::Vec3, reference::GridIndex};
use crate::synth::Error;

/// Smallest edge length `g` with `g³ >= count`.
///
/// Integer search instead of `ceil(cbrt(n))`, which overshoots on perfect
/// cubes (`cbrt(27.0)` is not exactly `3.0`).
pub fn grid_edge(count: usize) -> usize {
    let mut edge = 0usize;
    while edge.saturating_pow(3) < count {
        edge += 1;
    }
    edge
}

/// Places `count` units on a cubic grid with the given spacing.
///
/// Iterates `i`, then `j`, then `k` (outermost to innermost) and stops as
/// soon as `count` units are placed, so the last layer may be partial.
///
/// # Errors
///
/// Returns [`Error::EmptyGeometry`] if `count` is zero.
pub fn pack_grid(count: usize, spacing: f64) -> Result<Vec<(GridIndex, Vec3)>, Error> {
    if count == 0 {
        return Err(Error::empty_geometry("requested 0 grid units"));
    }

    let edge = grid_edge(count);
    let placed = (0..edge)
        .flat_map(|i| (0..edge).flat_map(move |j| (0..edge).map(move |k| GridIndex::new(i, j, k))))
        .take(count)
        .map(|index| (index, index.as_vec3() * spacing))
        .collect();
    Ok(placed)
}
