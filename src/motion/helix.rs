use super::MotionModel;
use crate::geometry::helix::{BACKBONE, residue_angle};
use crate::model::{
    atom::Vec3,
    reference::{ReferenceAtom, Unit, UnitIndex},
};
use crate::synth::params::HelixParams;

/// Helix breathing with per-residue backbone flex.
///
/// The radial term of every backbone atom is scaled by
/// `1 + amplitude · sin(frame · frequency)`; flexible slots (the amide N)
/// additionally move by `flex · sin(frame · flex_frequency + residue · flex_phase)`
/// on x and y.
#[derive(Debug, Clone, PartialEq)]
pub struct HelixBreathing {
    params: HelixParams,
}

impl HelixBreathing {
    pub fn new(params: &HelixParams) -> Self {
        Self {
            params: params.clone(),
        }
    }

    /// Radial scale factor of frame `frame`.
    pub fn breathing(&self, frame: usize) -> f64 {
        1.0 + self.params.breathing_amplitude * (frame as f64 * self.params.breathing_frequency).sin()
    }

    pub fn flex(&self, residue: usize, frame: usize) -> f64 {
        self.params.flex_amplitude
            * (frame as f64 * self.params.flex_frequency
                + residue as f64 * self.params.flex_residue_phase)
                .sin()
    }
}

impl MotionModel for HelixBreathing {
    fn name(&self) -> &'static str {
        "helix breathing"
    }

    fn atom_displacement(
        &self,
        unit: &Unit,
        slot: usize,
        _atom: &ReferenceAtom,
        frame: usize,
    ) -> Vec3 {
        let (UnitIndex::Backbone { residue }, Some(backbone)) = (unit.index, BACKBONE.get(slot))
        else {
            return Vec3::ZERO;
        };

        let radial = backbone.radial(residue_angle(residue, &self.params), self.params.radius);
        let mut delta = radial * (self.breathing(frame) - 1.0);
        if backbone.flexible {
            let flex = self.flex(residue, frame);
            delta = delta + Vec3::new(flex, flex, 0.0);
        }
        delta
    }
}
