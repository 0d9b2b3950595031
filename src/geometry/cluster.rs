use super::{centroid, grid::pack_grid};
use crate::model::{
    atom::{AtomIdentity, Vec3},
    reference::{ReferenceAtom, ReferenceGeometry, Unit, UnitIndex},
};
use crate::synth::{Error, params::ClusterParams};

/// Builds a cubic lattice of `atoms` identical atoms centred on the origin.
pub fn nanocluster(atoms: usize, params: &ClusterParams) -> Result<ReferenceGeometry, Error> {
    let placed = pack_grid(atoms, params.lattice_constant)?;
    let center = centroid(placed.iter().map(|&(_, p)| p)).unwrap_or(Vec3::ZERO);

    let identity = AtomIdentity::new(
        &params.element,
        &params.name,
        &params.residue,
        &params.chain,
    );
    let units = placed
        .into_iter()
        .map(|(index, position)| {
            Unit::new(
                UnitIndex::Grid(index),
                vec![ReferenceAtom::new(position - center, identity.clone())],
            )
        })
        .collect();
    Ok(ReferenceGeometry::new(units))
}
