use super::grid::pack_grid;
use crate::model::{
    atom::{AtomIdentity, Vec3},
    reference::{ReferenceAtom, ReferenceGeometry, Unit, UnitIndex},
};
use crate::synth::{Error, params::WaterParams};

/// Atom sites of one rigid water molecule, relative to its grid point.
pub const WATER_TEMPLATE: [(&str, &str, Vec3); 3] = [
    ("O", "O", Vec3::new(0.0, 0.0, 0.0)),
    ("H", "H1", Vec3::new(0.096, 0.0, 0.0)),
    ("H", "H2", Vec3::new(-0.024, 0.093, 0.0)),
];

/// Builds a box of `molecules` water molecules, one per grid point.
pub fn water_box(molecules: usize, params: &WaterParams) -> Result<ReferenceGeometry, Error> {
    let units = pack_grid(molecules, params.spacing)?
        .into_iter()
        .map(|(index, origin)| {
            let atoms = WATER_TEMPLATE
                .iter()
                .map(|&(element, name, offset)| {
                    ReferenceAtom::new(
                        origin + offset,
                        AtomIdentity::new(element, name, &params.residue, &params.chain),
                    )
                })
                .collect();
            Unit::new(UnitIndex::Grid(index), atoms)
        })
        .collect();
    Ok(ReferenceGeometry::new(units))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::reference::GridIndex;

    #[test]
    fn single_molecule_sits_on_template() {
        let geometry = water_box(1, &WaterParams::default()).unwrap();
        assert_eq!(geometry.unit_count(), 1);
        let atoms: Vec<_> = geometry.atoms().collect();
        assert_eq!(atoms.len(), 3);
        assert_eq!(atoms[0].position, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(atoms[1].position, Vec3::new(0.096, 0.0, 0.0));
        assert_eq!(atoms[2].position, Vec3::new(-0.024, 0.093, 0.0));
        assert_eq!(atoms[1].identity, AtomIdentity::new("H", "H1", "HOH", "A"));
    }

    #[test]
    fn molecules_follow_grid_order() {
        let geometry = water_box(27, &WaterParams::default()).unwrap();
        assert_eq!(geometry.atom_count(), 81);
        assert_eq!(
            geometry.units[26].index,
            UnitIndex::Grid(GridIndex::new(2, 2, 2))
        );
        let oxygen = geometry.units[1].atoms[0].position;
        assert_eq!(oxygen, Vec3::new(0.0, 0.0, 0.3));
    }

    #[test]
    fn no_molecules_is_an_error() {
        assert!(matches!(
            water_box(0, &WaterParams::default()),
            Err(Error::EmptyGeometry(_))
        ));
    }
}
