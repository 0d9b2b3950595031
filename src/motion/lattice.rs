use super::{JitterStream, MotionModel};
use crate::model::{
    atom::Vec3,
    reference::{ReferenceAtom, Unit},
};
use crate::synth::params::ClusterParams;

/// Radial breathing of a centred lattice plus per-atom jitter.
///
/// An atom at distance `r > 0` from the lattice centre moves by
/// `amplitude · sin(frame · frequency)` along its radial direction; the
/// atom at the centre (if any) only receives jitter.
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeVibration {
    pub amplitude: f64,
    pub frequency: f64,
}

impl LatticeVibration {
    pub fn new(params: &ClusterParams) -> Self {
        Self {
            amplitude: params.breathing_amplitude,
            frequency: params.breathing_frequency,
        }
    }

    pub fn radial(&self, position: Vec3, frame: usize) -> Vec3 {
        let r = position.norm();
        if r > 0.0 {
            position * (self.amplitude * (frame as f64 * self.frequency).sin() / r)
        } else {
            Vec3::ZERO
        }
    }
}

impl MotionModel for LatticeVibration {
    fn name(&self) -> &'static str {
        "lattice vibration"
    }

    fn unit_displacement(&self, _unit: &Unit, _frame: usize, jitter: &mut JitterStream) -> Vec3 {
        jitter.draw()
    }

    fn atom_displacement(
        &self,
        _unit: &Unit,
        _slot: usize,
        atom: &ReferenceAtom,
        frame: usize,
    ) -> Vec3 {
        self.radial(atom.position, frame)
    }
}
