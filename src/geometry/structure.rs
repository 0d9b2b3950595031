use super::centroid;
use crate::model::{
    reference::{ReferenceAtom, ReferenceGeometry, Unit, UnitIndex},
    structure::Model,
};
use crate::synth::Error;

/// Centres a parsed model on its unweighted coordinate mean.
///
/// Every atom becomes its own unit and keeps its B-factor, which the
/// breathing model reads as per-atom flexibility.
pub fn centered_structure(model: &Model) -> Result<ReferenceGeometry, Error> {
    let center = centroid(model.positions())
        .ok_or_else(|| Error::empty_geometry("structure has no atoms"))?;

    let units = model
        .atoms
        .iter()
        .enumerate()
        .map(|(i, atom)| {
            let reference = ReferenceAtom::new(atom.position - center, atom.identity.clone())
                .with_b_factor(atom.b_factor);
            Unit::new(UnitIndex::Atom(i), vec![reference])
        })
        .collect();
    Ok(ReferenceGeometry::new(units))
}
