//! Reference geometry builders.
//!
//! Each builder returns exactly the requested number of structural units,
//! laid out in the canonical order that every frame inherits.
//!
//! - [`grid`] – Cubic grid packing shared by the water box and nanocluster.
//! - [`water`] – Rigid three-site water molecules on a grid.
//! - [`helix`] – Four-atom backbone residues on an ideal helix.
//! - [`cluster`] – Single-element lattice centred on the origin.
//! - [`structure`] – Centred coordinates of a parsed structure.

pub mod cluster;
pub mod grid;
pub mod helix;
pub mod structure;
pub mod water;

pub use cluster::nanocluster;
pub use grid::{grid_edge, pack_grid};
pub use helix::helix_backbone;
pub use structure::centered_structure;
pub use water::water_box;

use crate::model::atom::Vec3;

/// Unweighted mean of a set of points; `None` when the set is empty.
pub fn centroid<I>(points: I) -> Option<Vec3>
where
    I: IntoIterator<Item = Vec3>,
{
    let (sum, count) = points
        .into_iter()
        .fold((Vec3::ZERO, 0usize), |(sum, n), p| (sum + p, n + 1));
    (count > 0).then(|| sum * (1.0 / count as f64))
}
