//! Closed-form motion models.
//!
//! A [`MotionModel`] turns the reference geometry into a displacement per
//! atom per frame. Nothing here integrates equations of motion; every term
//! is a function of the frame index, the reference position, and the
//! structural index of the unit.
//!
//! - [`ThermalWave`] – Per-molecule jitter plus a travelling grid wave (water).
//! - [`HelixBreathing`] – Radial helix breathing plus residue flex (protein).
//! - [`LatticeVibration`] – Radial cluster vibration plus jitter (nanocluster).
//! - [`RadialBreathing`] – Structure breathing modulated by B-factors.

mod breathing;
mod helix;
mod lattice;
mod wave;

pub use breathing::RadialBreathing;
pub use helix::HelixBreathing;
pub use lattice::LatticeVibration;
pub use wave::ThermalWave;

use crate::model::{
    atom::Vec3,
    reference::{ReferenceAtom, Unit},
};
use crate::synth::Error;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// A deterministic displacement rule evaluated once per atom per frame.
///
/// The final position of an atom is
/// `reference + unit_displacement(..) + atom_displacement(..)`.
/// Implementations must be pure given the same jitter stream; frames are
/// evaluated concurrently and in no particular order.
pub trait MotionModel: Sync {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    /// Displacement shared by every atom of `unit`.
    ///
    /// This is the only hook that may draw from `jitter`, and it is called
    /// exactly once per unit per frame, in unit order.
    fn unit_displacement(&self, _unit: &Unit, _frame: usize, _jitter: &mut JitterStream) -> Vec3 {
        Vec3::ZERO
    }

    /// Displacement of the atom at position `slot` inside `unit`.
    fn atom_displacement(
        &self,
        _unit: &Unit,
        _slot: usize,
        _atom: &ReferenceAtom,
        _frame: usize,
    ) -> Vec3 {
        Vec3::ZERO
    }
}

/// Seeded source of isotropic Gaussian jitter.
///
/// Every frame reads from its own ChaCha8 stream (stream id = frame index),
/// so the draws of frame `f` do not depend on which thread computed the
/// frames before it.
#[derive(Debug, Clone, Copy)]
pub struct ThermalJitter {
    sigma: f64,
    seed: u64,
    normal: Option<Normal<f64>>,
}

impl ThermalJitter {
    /// Creates a jitter source with standard deviation `sigma` (nm).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `sigma` is negative or not finite.
    pub fn new(sigma: f64, seed: u64) -> Result<Self, Error> {
        if !sigma.is_finite() || sigma < 0.0 {
            return Err(Error::invalid_parameter(
                "thermal_sigma",
                format!("{sigma} is not a valid standard deviation"),
            ));
        }
        let normal = if sigma > 0.0 {
            Some(
                Normal::new(0.0, sigma)
                    .map_err(|e| Error::invalid_parameter("thermal_sigma", e.to_string()))?,
            )
        } else {
            None
        };
        Ok(Self {
            sigma,
            seed,
            normal,
        })
    }

    /// Like [`new`](Self::new), drawing a seed from the OS when none is given.
    ///
    /// The drawn seed is logged so the run can be replayed with `--seed`.
    pub fn with_seed(sigma: f64, seed: Option<u64>) -> Result<Self, Error> {
        let seed = match seed {
            Some(seed) => seed,
            None => {
                let seed = rand::random::<u64>();
                log::info!("No seed given; thermal jitter seeded with {seed}");
                seed
            }
        };
        Self::new(sigma, seed)
    }

    /// A source that never moves anything.
    pub fn disabled() -> Self {
        Self {
            sigma: 0.0,
            seed: 0,
            normal: None,
        }
    }

    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the independent stream of frame `frame`.
    pub fn stream(&self, frame: usize) -> JitterStream {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        rng.set_stream(frame as u64);
        JitterStream {
            rng,
            normal: self.normal,
        }
    }
}

/// Per-frame jitter draws handed to [`MotionModel::unit_displacement`].
pub struct JitterStream {
    rng: ChaCha8Rng,
    normal: Option<Normal<f64>>,
}

impl JitterStream {
    /// Draws one displacement with independent `N(0, σ)` components.
    ///
    /// With `σ = 0` nothing is drawn and the result is exactly zero.
    pub fn draw(&mut self) -> Vec3 {
        match self.normal {
            Some(normal) => Vec3::new(
                normal.sample(&mut self.rng),
                normal.sample(&mut self.rng),
                normal.sample(&mut self.rng),
            ),
            None => Vec3::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sigma_is_exactly_zero() {
        let jitter = ThermalJitter::new(0.0, 7).unwrap();
        let mut stream = jitter.stream(3);
        assert_eq!(stream.draw(), Vec3::ZERO);
        assert_eq!(ThermalJitter::disabled().stream(0).draw(), Vec3::ZERO);
    }

    #[test]
    fn same_seed_same_frame_same_draws() {
        let jitter = ThermalJitter::new(0.01, 42).unwrap();
        let a: Vec<_> = {
            let mut s = jitter.stream(5);
            (0..4).map(|_| s.draw()).collect()
        };
        let b: Vec<_> = {
            let mut s = jitter.stream(5);
            (0..4).map(|_| s.draw()).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn frames_use_distinct_streams() {
        let jitter = ThermalJitter::new(0.01, 42).unwrap();
        assert_ne!(jitter.stream(0).draw(), jitter.stream(1).draw());
    }

    #[test]
    fn draws_are_small_for_small_sigma() {
        let jitter = ThermalJitter::new(0.01, 1).unwrap();
        let mut stream = jitter.stream(0);
        for _ in 0..1000 {
            let d = stream.draw();
            assert!(d.norm() < 0.2, "implausible draw {d:?}");
        }
    }

    #[test]
    fn rejects_negative_sigma() {
        assert!(matches!(
            ThermalJitter::new(-1.0, 0),
            Err(Error::InvalidParameter { .. })
        ));
        assert!(ThermalJitter::new(f64::NAN, 0).is_err());
    }

    #[test]
    fn explicit_seed_is_kept() {
        let jitter = ThermalJitter::with_seed(0.01, Some(99)).unwrap();
        assert_eq!(jitter.seed(), 99);
        assert_eq!(jitter.sigma(), 0.01);
    }
}
