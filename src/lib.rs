//! Procedural synthesis of visually plausible multi-frame molecular trajectories.
//! Closed-form motion models perturb a static reference geometry frame by frame,
//! producing trajectories for 3D viewers without running a physics engine.
//!
//! # Features
//!
//! - **Synthetic systems** - Water boxes, helical protein backbones, and metal
//!   nanoclusters built on cubic grids or ideal helices
//! - **Structure breathing** - Periodic radial breathing of a parsed PDB model,
//!   modulated per atom by its B-factor
//! - **Multi-model conversion** - Every model of a PDB file becomes one frame
//! - **Reproducible jitter** - Seeded per-frame random streams, identical output
//!   regardless of how frames are scheduled across threads
//! - **Viewer JSON** - One record with metadata, bounds, and every frame
//!
//! # Quick Start
//!
//! ```
//! use traj_forge::{SynthConfig, SynthError, Vec3, water_box};
//!
//! // One molecule, one frame, no thermal jitter.
//! let config = SynthConfig::default()
//!     .with_frames(1)
//!     .with_thermal_sigma(0.0);
//! let trajectory = water_box(1, &config)?;
//!
//! assert_eq!(trajectory.metadata.source, "water_box_test");
//! assert_eq!(trajectory.metadata.num_atoms, 3);
//!
//! let atoms = trajectory.frames[0].atoms();
//! assert_eq!(atoms[0].position, Vec3::new(0.0, 0.0, 0.0));
//! assert_eq!(atoms[1].identity.name, "H1");
//! assert_eq!(trajectory.metadata.bounds.max, Vec3::new(0.096, 0.093, 0.0));
//! # Ok::<(), SynthError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`geometry`] - Reference geometry builders (grid, helix, cluster, structure)
//! - [`motion`] - The [`MotionModel`] trait, jitter source, and four models
//! - [`io`] - PDB reader and trajectory JSON writer/reader
//! - [`water_box`], [`protein_helix`], [`nanocluster`], [`breathe`], [`convert`] -
//!   End-to-end entry points returning a packaged [`Trajectory`]
//!
//! # Data Types
//!
//! - [`Trajectory`] - Metadata plus ordered frames; the serialized record
//! - [`Frame`] - Atom records of one time sample, in canonical order
//! - [`AtomRecord`] - Position, identity fields, and display color
//! - [`ReferenceGeometry`] - Zero-motion baseline grouped into [`Unit`]s
//! - [`Structure`] - Parsed multi-model structure
//!
//! ## Configuration
//!
//! - [`SynthConfig`] - Frame count, seed, jitter override, custom parameters
//! - [`MotionParams`] - Every tunable constant, loaded from TOML

mod model;
mod synth;

pub mod geometry;
pub mod io;
pub mod motion;

pub use model::atom::{AtomIdentity, AtomRecord, Vec3};
pub use model::color::{Color, element_color};
pub use model::reference::{GridIndex, ReferenceAtom, ReferenceGeometry, Unit, UnitIndex};
pub use model::structure::{Model, Structure, StructureAtom};
pub use model::trajectory::{Bounds, Frame, Metadata, Trajectory};

pub use motion::{MotionModel, ThermalJitter};

pub use synth::params::{BreathingParams, ClusterParams, HelixParams, WaterParams};
pub use synth::{
    CLUSTER_SOURCE, HELIX_SOURCE, MotionParams, SynthConfig, WATER_SOURCE, assemble_frames,
    assemble_from_positions, breathe, breathing_source, convert, frame_bounds, load_parameters,
    nanocluster, package, protein_helix, run, water_box,
};

pub use synth::Error as SynthError;
