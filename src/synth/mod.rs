//! Trajectory synthesis pipeline.
//!
//! Every entry point follows the same steps: load motion parameters,
//! build the reference geometry, assemble frames with a motion model, and
//! package the result with bounds taken from frame 0. Nothing is returned
//! unless every requested frame was produced.

mod assemble;
mod config;
mod error;
mod package;
pub mod params;

pub use assemble::{assemble_frames, assemble_from_positions};
pub use config::SynthConfig;
pub use error::Error;
pub use package::{frame_bounds, package};
pub use params::{MotionParams, load_parameters};

use crate::geometry;
use crate::model::{
    atom::Vec3, reference::ReferenceGeometry, structure::Structure, trajectory::Trajectory,
};
use crate::motion::{
    HelixBreathing, LatticeVibration, MotionModel, RadialBreathing, ThermalJitter, ThermalWave,
};

pub const WATER_SOURCE: &str = "water_box_test";
pub const HELIX_SOURCE: &str = "protein_helix_test";
pub const CLUSTER_SOURCE: &str = "nanocluster_test";

/// Source label of a breathing trajectory built from `input`.
pub fn breathing_source(input: &str) -> String {
    format!("{input} (Breathing Simulation)")
}

/// Generates a box of `molecules` rigid water molecules.
pub fn water_box(molecules: usize, config: &SynthConfig) -> Result<Trajectory, Error> {
    let params = prepare(config)?;
    let geometry = geometry::water_box(molecules, &params.water)?;
    let jitter = jitter_for(config, params.water.thermal_sigma)?;
    run(
        &geometry,
        &ThermalWave::new(&params.water),
        &jitter,
        config.num_frames,
        WATER_SOURCE,
    )
}

/// Generates a breathing helical backbone of `residues` residues.
pub fn protein_helix(residues: usize, config: &SynthConfig) -> Result<Trajectory, Error> {
    let params = prepare(config)?;
    let geometry = geometry::helix_backbone(residues, &params.helix)?;
    warn_unused_sigma(config, "helix breathing");
    run(
        &geometry,
        &HelixBreathing::new(&params.helix),
        &ThermalJitter::disabled(),
        config.num_frames,
        HELIX_SOURCE,
    )
}

/// Generates a vibrating cubic nanocluster of `atoms` atoms.
pub fn nanocluster(atoms: usize, config: &SynthConfig) -> Result<Trajectory, Error> {
    let params = prepare(config)?;
    let geometry = geometry::nanocluster(atoms, &params.cluster)?;
    let jitter = jitter_for(config, params.cluster.thermal_sigma)?;
    run(
        &geometry,
        &LatticeVibration::new(&params.cluster),
        &jitter,
        config.num_frames,
        CLUSTER_SOURCE,
    )
}

/// Animates the first model of `structure` with radial breathing.
///
/// `amplitude` overrides the configured breathing amplitude. Coordinates
/// keep the units of the input file.
pub fn breathe(
    structure: &Structure,
    source: impl Into<String>,
    amplitude: Option<f64>,
    config: &SynthConfig,
) -> Result<Trajectory, Error> {
    let mut params = prepare(config)?;
    if let Some(amplitude) = amplitude {
        params.breathing.amplitude = amplitude;
        params.validate()?;
    }

    let model = structure
        .first_model()
        .ok_or_else(|| Error::empty_geometry("structure has no models"))?;
    if structure.model_count() > 1 {
        log::info!(
            "Structure has {} models; breathing uses the first only",
            structure.model_count()
        );
    }

    let geometry = geometry::centered_structure(model)?;
    let motion = RadialBreathing::new(&params.breathing, config.num_frames, geometry.max_radius());
    warn_unused_sigma(config, motion.name());
    run(
        &geometry,
        &motion,
        &ThermalJitter::disabled(),
        config.num_frames,
        source,
    )
}

/// Turns each model of a multi-model structure into one frame.
///
/// At most `max_frames` models are used; every model must list the same
/// atoms (element, name, residue, chain) in the same order as the first.
pub fn convert(
    structure: &Structure,
    source: impl Into<String>,
    max_frames: usize,
) -> Result<Trajectory, Error> {
    if max_frames == 0 {
        return Err(Error::InvalidFrameCount(max_frames));
    }
    let first = structure
        .first_model()
        .ok_or_else(|| Error::empty_geometry("structure has no models"))?;

    if structure.model_count() > max_frames {
        log::info!(
            "Structure has {} models; keeping the first {}",
            structure.model_count(),
            max_frames
        );
    }

    let identities = first.identities();
    for (frame, model) in structure.models.iter().enumerate().take(max_frames).skip(1) {
        let mismatch = model
            .atoms
            .iter()
            .zip(&identities)
            .position(|(atom, identity)| atom.identity != *identity);
        if let Some(atom) = mismatch {
            return Err(Error::IdentityMismatch { frame, atom });
        }
    }

    let steps: Vec<Vec<Vec3>> = structure
        .models
        .iter()
        .take(max_frames)
        .map(|m| m.positions().collect())
        .collect();
    let frames = assemble_from_positions(&identities, &steps)?;
    package(frames, source)
}

/// Assembles and packages frames for an arbitrary model and geometry.
pub fn run(
    geometry: &ReferenceGeometry,
    model: &dyn MotionModel,
    jitter: &ThermalJitter,
    num_frames: usize,
    source: impl Into<String>,
) -> Result<Trajectory, Error> {
    let frames = assemble_frames(geometry, model, jitter, num_frames)?;
    let trajectory = package(frames, source)?;
    log::debug!(
        "Packaged '{}': {} frames, {} atoms",
        trajectory.metadata.source,
        trajectory.metadata.num_frames,
        trajectory.metadata.num_atoms
    );
    Ok(trajectory)
}

fn prepare(config: &SynthConfig) -> Result<MotionParams, Error> {
    if config.num_frames == 0 {
        return Err(Error::InvalidFrameCount(config.num_frames));
    }
    load_parameters(config.params.as_deref())
}

fn jitter_for(config: &SynthConfig, default_sigma: f64) -> Result<ThermalJitter, Error> {
    let sigma = config.thermal_sigma.unwrap_or(default_sigma);
    if sigma == 0.0 {
        return ThermalJitter::new(0.0, config.seed.unwrap_or(0));
    }
    ThermalJitter::with_seed(sigma, config.seed)
}

fn warn_unused_sigma(config: &SynthConfig, model: &str) {
    if config.thermal_sigma.is_some() {
        log::warn!("Thermal sigma override has no effect on {model}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        atom::AtomIdentity,
        structure::{Model, StructureAtom},
    };

    fn quiet(frames: usize) -> SynthConfig {
        SynthConfig::default()
            .with_frames(frames)
            .with_seed(7)
            .with_thermal_sigma(0.0)
    }

    fn model(offset: f64, count: usize) -> Model {
        Model {
            atoms: (0..count)
                .map(|i| StructureAtom {
                    position: Vec3::new(i as f64 + offset, 0.0, 0.0),
                    identity: AtomIdentity::new("C", "CA", "GLY", "A"),
                    b_factor: Some(10.0),
                })
                .collect(),
        }
    }

    #[test]
    fn water_box_labels_and_counts() {
        let trajectory = water_box(27, &quiet(5)).unwrap();
        assert_eq!(trajectory.metadata.source, WATER_SOURCE);
        assert_eq!(trajectory.metadata.num_frames, 5);
        assert_eq!(trajectory.metadata.num_atoms, 81);
    }

    #[test]
    fn helix_has_four_atoms_per_residue() {
        let trajectory = protein_helix(20, &quiet(3)).unwrap();
        assert_eq!(trajectory.metadata.source, HELIX_SOURCE);
        assert_eq!(trajectory.atom_count(), 80);
    }

    #[test]
    fn cluster_default_size() {
        let trajectory = nanocluster(100, &quiet(2)).unwrap();
        assert_eq!(trajectory.metadata.source, CLUSTER_SOURCE);
        assert_eq!(trajectory.atom_count(), 100);
    }

    #[test]
    fn zero_frames_fails_before_geometry() {
        let err = water_box(0, &SynthConfig::default().with_frames(0)).unwrap_err();
        assert!(matches!(err, Error::InvalidFrameCount(0)));
    }

    #[test]
    fn custom_params_are_applied() {
        let config = SynthConfig {
            params: Some("[water]\nspacing = 1.0\nwave_amplitude = 0.0".to_string()),
            ..quiet(1)
        };
        let trajectory = water_box(2, &config).unwrap();
        let second_oxygen = &trajectory.frames[0].atoms()[3];
        assert_eq!(second_oxygen.position, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn breathing_uses_first_model_centred() {
        let structure = Structure::new(vec![model(0.0, 3), model(5.0, 3)]);
        let trajectory = breathe(&structure, breathing_source("in.pdb"), None, &quiet(10)).unwrap();
        assert_eq!(trajectory.metadata.source, "in.pdb (Breathing Simulation)");
        assert_eq!(trajectory.atom_count(), 3);
        assert_eq!(trajectory.frame_count(), 10);
        assert!(trajectory.metadata.bounds.center.norm() < 0.1);
    }

    #[test]
    fn breathing_zero_amplitude_leaves_only_noise() {
        let structure = Structure::new(vec![model(0.0, 1)]);
        let trajectory = breathe(&structure, "x", Some(0.0), &quiet(4)).unwrap();
        for frame in &trajectory.frames {
            let p = frame.atoms()[0].position;
            assert_eq!(p.x, p.y);
            assert_eq!(p.y, p.z);
        }
    }

    #[test]
    fn breathing_without_models_is_empty_geometry() {
        let err = breathe(&Structure::default(), "x", None, &quiet(2)).unwrap_err();
        assert!(matches!(err, Error::EmptyGeometry(_)));
    }

    #[test]
    fn convert_keeps_models_as_frames() {
        let structure = Structure::new(vec![model(0.0, 2), model(0.5, 2), model(1.0, 2)]);
        let trajectory = convert(&structure, "multi.pdb", 100).unwrap();
        assert_eq!(trajectory.frame_count(), 3);
        assert_eq!(trajectory.frames[2].atoms()[1].position, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(trajectory.metadata.source, "multi.pdb");
    }

    #[test]
    fn convert_truncates_to_max_frames() {
        let structure = Structure::new(vec![model(0.0, 2); 5]);
        assert_eq!(convert(&structure, "x", 2).unwrap().frame_count(), 2);
    }

    #[test]
    fn convert_rejects_ragged_models() {
        let structure = Structure::new(vec![model(0.0, 2), model(0.0, 3)]);
        assert!(matches!(
            convert(&structure, "x", 10),
            Err(Error::FrameMismatch { frame: 1, .. })
        ));
    }

    #[test]
    fn convert_rejects_models_with_other_atoms() {
        let mut renamed = model(0.5, 3);
        renamed.atoms[2].identity.name = "CB".to_string();
        let structure = Structure::new(vec![model(0.0, 3), renamed]);
        assert!(matches!(
            convert(&structure, "x", 10),
            Err(Error::IdentityMismatch { frame: 1, atom: 2 })
        ));

        // Models past max_frames are never inspected.
        let structure = Structure::new(vec![model(0.0, 3), model(0.0, 3), {
            let mut m = model(0.0, 3);
            m.atoms[0].identity.element = "N".to_string();
            m
        }]);
        assert_eq!(convert(&structure, "x", 2).unwrap().frame_count(), 2);
    }

    #[test]
    fn overflowing_motion_is_rejected() {
        let config = SynthConfig {
            params: Some("[helix]\nradius = 1e308\nbreathing_amplitude = 1e308".to_string()),
            ..quiet(2)
        };
        assert!(matches!(
            protein_helix(1, &config),
            Err(Error::NonFinitePosition { frame: 1, atom: 0 })
        ));
    }

    #[test]
    fn nan_frequency_never_reaches_frames() {
        let config = SynthConfig {
            params: Some("[helix]\nbreathing_frequency = nan".to_string()),
            ..quiet(2)
        };
        assert!(matches!(
            protein_helix(2, &config),
            Err(Error::InvalidParameter { .. })
        ));
    }
}
