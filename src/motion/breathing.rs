use super::MotionModel;
use crate::model::{
    atom::Vec3,
    reference::{ReferenceAtom, Unit, UnitIndex},
};
use crate::synth::params::BreathingParams;
use std::f64::consts::TAU;

/// Periodic breathing of a real structure about its centroid.
///
/// One cycle spans `num_frames` frames, so the motion loops. Atoms further
/// from the centroid move proportionally more, and each atom carries a
/// scalar noise term scaled by its B-factor.
///
/// A twist angle is derived alongside the breathing scale and reported by
/// [`twist_angle`](Self::twist_angle), but it is not applied to positions.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialBreathing {
    params: BreathingParams,
    num_frames: usize,
    max_radius: f64,
}

impl RadialBreathing {
    /// `max_radius` is the largest centroid distance of the structure.
    pub fn new(params: &BreathingParams, num_frames: usize, max_radius: f64) -> Self {
        Self {
            params: params.clone(),
            num_frames: num_frames.max(1),
            max_radius,
        }
    }

    #[inline]
    pub fn phase(&self, frame: usize) -> f64 {
        TAU * frame as f64 / self.num_frames as f64
    }

    /// Fractional radial expansion at `frame`.
    pub fn scale(&self, frame: usize) -> f64 {
        self.phase(frame).sin() * self.params.scale_fraction * self.params.amplitude
    }

    /// Torsional angle (rad) at `frame`; computed but never applied.
    pub fn twist_angle(&self, frame: usize) -> f64 {
        self.phase(frame).cos() * self.params.twist_fraction * self.params.amplitude
    }

    /// Distance of `position` from the centroid relative to the outermost atom.
    pub fn distance_fraction(&self, position: Vec3) -> f64 {
        if self.max_radius > 0.0 {
            position.norm() / self.max_radius
        } else {
            0.0
        }
    }

    pub fn noise(&self, b_factor: Option<f64>, atom_index: usize, frame: usize) -> f64 {
        let b = b_factor.unwrap_or(self.params.default_b_factor);
        b / 100.0
            * self.params.noise_fraction
            * (2.0 * self.phase(frame) + atom_index as f64).sin()
    }
}

impl MotionModel for RadialBreathing {
    fn name(&self) -> &'static str {
        "radial breathing"
    }

    fn atom_displacement(&self, unit: &Unit, slot: usize, atom: &ReferenceAtom, frame: usize) -> Vec3 {
        let atom_index = match unit.index {
            UnitIndex::Atom(i) => i,
            _ => slot,
        };
        let breathing =
            atom.position * (self.scale(frame) * self.distance_fraction(atom.position));
        breathing + Vec3::splat(self.noise(atom.b_factor, atom_index, frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::atom::AtomIdentity;

    fn model(num_frames: usize) -> RadialBreathing {
        RadialBreathing::new(&BreathingParams::default(), num_frames, 2.0)
    }

    #[test]
    fn scale_vanishes_at_frame_zero() {
        assert_eq!(model(50).scale(0), 0.0);
    }

    #[test]
    fn scale_is_periodic_over_num_frames() {
        let m = model(50);
        assert!((m.scale(0) - m.scale(50)).abs() < 1e-12);
        assert!((m.scale(13) - m.scale(63)).abs() < 1e-12);
    }

    #[test]
    fn peak_scale_is_five_percent_per_unit_amplitude() {
        let m = model(4);
        assert!((m.scale(1) - 0.05 * 2.0).abs() < 1e-12);
    }

    #[test]
    fn twist_is_reported_but_does_not_move_atoms() {
        let m = model(4);
        assert!((m.twist_angle(0) - 0.1).abs() < 1e-12);

        let unit = Unit::new(
            UnitIndex::Atom(0),
            vec![
                ReferenceAtom::new(Vec3::new(1.0, 0.0, 0.0), AtomIdentity::new("C", "CA", "GLY", "A"))
                    .with_b_factor(Some(0.0)),
            ],
        );
        // The twist is non-zero here, yet the atom stays put.
        assert_eq!(m.atom_displacement(&unit, 0, &unit.atoms[0], 0), Vec3::ZERO);
    }

    #[test]
    fn outer_atoms_move_more() {
        let m = model(4);
        let inner = Vec3::new(0.5, 0.0, 0.0);
        let outer = Vec3::new(2.0, 0.0, 0.0);
        let d_inner = inner * (m.scale(1) * m.distance_fraction(inner));
        let d_outer = outer * (m.scale(1) * m.distance_fraction(outer));
        assert!(d_outer.norm() > d_inner.norm());
        assert!((d_outer.x - 2.0 * 0.1).abs() < 1e-12);
    }

    #[test]
    fn centroid_atom_has_zero_breathing() {
        let m = model(10);
        assert_eq!(m.distance_fraction(Vec3::ZERO), 0.0);
        let still = RadialBreathing::new(&BreathingParams::default(), 10, 0.0);
        assert_eq!(still.distance_fraction(Vec3::new(1.0, 1.0, 1.0)), 0.0);
    }

    #[test]
    fn noise_uses_default_b_factor_and_atom_index() {
        let m = model(10);
        let expected = 20.0 / 100.0 * 0.2 * 3.0_f64.sin();
        assert!((m.noise(None, 3, 0) - expected).abs() < 1e-15);
        assert!((m.noise(Some(50.0), 3, 0) - 0.5 * 0.2 * 3.0_f64.sin()).abs() < 1e-15);
    }

    #[test]
    fn noise_is_the_same_on_every_axis() {
        let m = model(10);
        let unit = Unit::new(
            UnitIndex::Atom(4),
            vec![ReferenceAtom::new(Vec3::ZERO, AtomIdentity::new("O", "O", "HOH", "A"))],
        );
        let d = m.atom_displacement(&unit, 0, &unit.atoms[0], 2);
        assert_eq!(d.x, d.y);
        assert_eq!(d.y, d.z);
        assert!((d.x - m.noise(None, 4, 2)).abs() < 1e-15);
    }
}
