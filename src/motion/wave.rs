use super::{JitterStream, MotionModel};
use crate::model::{
    atom::Vec3,
    reference::{Unit, UnitIndex},
};
use crate::synth::params::WaterParams;

/// Rigid-molecule jitter plus a collective wave travelling across the grid.
///
/// Per axis: `amplitude · sin(frame · frequency + index · phase_step)`,
/// using grid index `i` for x, `j` for y and `k` for z. Units that are not
/// on a grid only receive jitter.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermalWave {
    pub amplitude: f64,
    pub frequency: f64,
    pub phase_step: f64,
}

impl ThermalWave {
    pub fn new(params: &WaterParams) -> Self {
        Self {
            amplitude: params.wave_amplitude,
            frequency: params.wave_frequency,
            phase_step: params.wave_phase,
        }
    }

    fn axis(&self, frame: usize, index: usize) -> f64 {
        self.amplitude * (frame as f64 * self.frequency + index as f64 * self.phase_step).sin()
    }

    /// Deterministic wave term of a unit.
    pub fn wave(&self, index: UnitIndex, frame: usize) -> Vec3 {
        match index {
            UnitIndex::Grid(g) => Vec3::new(
                self.axis(frame, g.i),
                self.axis(frame, g.j),
                self.axis(frame, g.k),
            ),
            _ => Vec3::ZERO,
        }
    }
}

impl MotionModel for ThermalWave {
    fn name(&self) -> &'static str {
        "thermal wave"
    }

    fn unit_displacement(&self, unit: &Unit, frame: usize, jitter: &mut JitterStream) -> Vec3 {
        jitter.draw() + self.wave(unit.index, frame)
    }
}
