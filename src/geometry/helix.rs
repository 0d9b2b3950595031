use crate::model::{
    atom::{AtomIdentity, Vec3},
    reference::{ReferenceAtom, ReferenceGeometry, Unit, UnitIndex},
};
use crate::synth::{Error, params::HelixParams};

/// Placement rule of one backbone atom relative to its residue frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackboneSlot {
    pub name: &'static str,
    pub element: &'static str,
    /// Angular offset from the residue angle (rad).
    pub phase: f64,
    /// Offset along the helix axis (nm).
    pub z_offset: f64,
    /// Fixed in-plane shift applied outside the radial term.
    pub lateral: (f64, f64),
    /// Whether the per-residue flexibility term moves this atom.
    pub flexible: bool,
}

/// Backbone atoms of every residue, in output order.
pub const BACKBONE: [BackboneSlot; 4] = [
    BackboneSlot {
        name: "N",
        element: "N",
        phase: 0.0,
        z_offset: 0.0,
        lateral: (0.0, 0.0),
        flexible: true,
    },
    BackboneSlot {
        name: "CA",
        element: "C",
        phase: 0.3,
        z_offset: 0.05,
        lateral: (0.0, 0.0),
        flexible: false,
    },
    BackboneSlot {
        name: "C",
        element: "C",
        phase: 0.6,
        z_offset: 0.10,
        lateral: (0.0, 0.0),
        flexible: false,
    },
    BackboneSlot {
        name: "O",
        element: "O",
        phase: 0.8,
        z_offset: 0.12,
        lateral: (0.05, 0.05),
        flexible: false,
    },
];

impl BackboneSlot {
    /// In-plane radial vector of this slot for a residue at `angle`.
    #[inline]
    pub fn radial(&self, angle: f64, radius: f64) -> Vec3 {
        let theta = angle + self.phase;
        Vec3::new(radius * theta.cos(), radius * theta.sin(), 0.0)
    }
}

/// Angle of residue `residue` around the helix axis.
#[inline]
pub fn residue_angle(residue: usize, params: &HelixParams) -> f64 {
    residue as f64 * params.rotation_per_residue()
}

/// Builds an ideal helical backbone of `residues` residues.
pub fn helix_backbone(residues: usize, params: &HelixParams) -> Result<ReferenceGeometry, Error> {
    if residues == 0 {
        return Err(Error::empty_geometry("requested 0 helix residues"));
    }

    let units = (0..residues)
        .map(|residue| {
            let angle = residue_angle(residue, params);
            let z = residue as f64 * params.rise;
            let atoms = BACKBONE
                .iter()
                .map(|slot| {
                    let radial = slot.radial(angle, params.radius);
                    let position = Vec3::new(
                        radial.x + slot.lateral.0,
                        radial.y + slot.lateral.1,
                        z + slot.z_offset,
                    );
                    ReferenceAtom::new(
                        position,
                        AtomIdentity::new(slot.element, slot.name, &params.residue, &params.chain),
                    )
                })
                .collect();
            Unit::new(UnitIndex::Backbone { residue }, atoms)
        })
        .collect();
    Ok(ReferenceGeometry::new(units))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn first_residue_matches_closed_form() {
        let params = HelixParams::default();
        let geometry = helix_backbone(1, &params).unwrap();
        let atoms = &geometry.units[0].atoms;

        assert_eq!(atoms[0].position, Vec3::new(0.23, 0.0, 0.0));

        let ca = atoms[1].position;
        assert!((ca.x - 0.23 * 0.3_f64.cos()).abs() < EPS);
        assert!((ca.y - 0.23 * 0.3_f64.sin()).abs() < EPS);
        assert!((ca.z - 0.05).abs() < EPS);

        let o = atoms[3].position;
        assert!((o.x - (0.23 * 0.8_f64.cos() + 0.05)).abs() < EPS);
        assert!((o.y - (0.23 * 0.8_f64.sin() + 0.05)).abs() < EPS);
        assert!((o.z - 0.12).abs() < EPS);
    }

    #[test]
    fn residues_rotate_and_rise() {
        let params = HelixParams::default();
        let geometry = helix_backbone(20, &params).unwrap();
        assert_eq!(geometry.unit_count(), 20);
        assert_eq!(geometry.atom_count(), 80);

        let n = geometry.units[3].atoms[0].position;
        let angle = 3.0 * 100.0_f64.to_radians();
        assert!((n.x - 0.23 * angle.cos()).abs() < EPS);
        assert!((n.y - 0.23 * angle.sin()).abs() < EPS);
        assert!((n.z - 0.45).abs() < EPS);
        assert_eq!(geometry.units[3].index, UnitIndex::Backbone { residue: 3 });
    }

    #[test]
    fn backbone_identities() {
        let geometry = helix_backbone(2, &HelixParams::default()).unwrap();
        let names: Vec<_> = geometry
            .atoms()
            .map(|a| (a.identity.name.as_str(), a.identity.element.as_str()))
            .collect();
        assert_eq!(
            &names[..4],
            &[("N", "N"), ("CA", "C"), ("C", "C"), ("O", "O")]
        );
        assert!(geometry.atoms().all(|a| a.identity.residue == "ALA"));
    }

    #[test]
    fn zero_residues_is_an_error() {
        assert!(matches!(
            helix_backbone(0, &HelixParams::default()),
            Err(Error::EmptyGeometry(_))
        ));
    }
}
