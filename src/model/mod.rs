//! Core data structures shared by every stage of trajectory synthesis.
//!
//! - [`atom`] – Positions, identity fields, and per-frame atom records.
//! - [`color`] – Element display palette.
//! - [`reference`] – Zero-motion reference geometry grouped into structural units.
//! - [`structure`] – Parsed multi-model structures handed over by readers.
//! - [`trajectory`] – Frames, bounds, metadata, and the packaged trajectory.
//!
//! The reference geometry ([`ReferenceGeometry`]) is the input of the frame
//! assembler; the packaged [`Trajectory`] is its output and the only thing
//! that gets serialized.
//!
//! [`ReferenceGeometry`]: reference::ReferenceGeometry
//! [`Trajectory`]: trajectory::Trajectory

pub mod atom;
pub mod color;
pub mod reference;
pub mod structure;
pub mod trajectory;
