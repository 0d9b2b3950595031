use super::error::Error;
use crate::model::{
    atom::{AtomIdentity, AtomRecord, Vec3},
    color::{Color, element_color},
    reference::ReferenceGeometry,
    trajectory::Frame,
};
use crate::motion::{MotionModel, ThermalJitter};
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Evaluates `model` on every frame in `[0, num_frames)`.
///
/// Frames are computed in parallel; each one only reads the reference
/// geometry and its own jitter stream, so the result does not depend on
/// scheduling.
///
/// # Errors
///
/// Returns [`Error::InvalidFrameCount`] for zero frames and
/// [`Error::EmptyGeometry`] if the geometry has no atoms.
pub fn assemble_frames(
    geometry: &ReferenceGeometry,
    model: &dyn MotionModel,
    jitter: &ThermalJitter,
    num_frames: usize,
) -> Result<Vec<Frame>, Error> {
    if num_frames == 0 {
        return Err(Error::InvalidFrameCount(num_frames));
    }
    if geometry.is_empty() {
        return Err(Error::empty_geometry("reference geometry has no atoms"));
    }

    let colors = resolve_colors(geometry.atoms().map(|a| &a.identity));
    log::debug!(
        "Assembling {} frames of {} atoms with {}",
        num_frames,
        colors.len(),
        model.name()
    );

    let frames = (0..num_frames)
        .into_par_iter()
        .map(|frame| {
            let mut stream = jitter.stream(frame);
            let mut color = colors.iter();
            let mut records = Vec::with_capacity(colors.len());
            for unit in &geometry.units {
                let shared = model.unit_displacement(unit, frame, &mut stream);
                for (slot, atom) in unit.atoms.iter().enumerate() {
                    let position =
                        atom.position + shared + model.atom_displacement(unit, slot, atom, frame);
                    records.push(AtomRecord::new(
                        position,
                        atom.identity.clone(),
                        color.next().copied().unwrap_or(Color::NEUTRAL),
                    ));
                }
            }
            Frame::new(records)
        })
        .collect();
    Ok(frames)
}

/// Builds frames from position lists produced elsewhere (e.g. an MD engine
/// or the models of a multi-model structure file).
///
/// # Errors
///
/// Returns [`Error::FrameMismatch`] for the first step whose length differs
/// from `identities`.
pub fn assemble_from_positions(
    identities: &[AtomIdentity],
    steps: &[Vec<Vec3>],
) -> Result<Vec<Frame>, Error> {
    if steps.is_empty() {
        return Err(Error::InvalidFrameCount(0));
    }
    if identities.is_empty() {
        return Err(Error::empty_geometry("identity list is empty"));
    }
    if let Some((frame, step)) = steps
        .iter()
        .enumerate()
        .find(|(_, step)| step.len() != identities.len())
    {
        return Err(Error::FrameMismatch {
            frame,
            expected: identities.len(),
            found: step.len(),
        });
    }

    let colors = resolve_colors(identities.iter());
    let frames = steps
        .par_iter()
        .map(|step| {
            Frame::new(
                step.iter()
                    .zip(identities)
                    .zip(&colors)
                    .map(|((&position, identity), &color)| {
                        AtomRecord::new(position, identity.clone(), color)
                    })
                    .collect(),
            )
        })
        .collect();
    Ok(frames)
}

/// Looks up one display color per atom, warning once per unknown element.
pub fn resolve_colors<'a, I>(identities: I) -> Vec<Color>
where
    I: IntoIterator<Item = &'a AtomIdentity>,
{
    let mut unknown = BTreeSet::new();
    let colors = identities
        .into_iter()
        .map(|identity| {
            element_color(&identity.element).unwrap_or_else(|| {
                unknown.insert(identity.element.clone());
                Color::NEUTRAL
            })
        })
        .collect();
    for element in unknown {
        log::warn!("Unknown element '{element}'; using neutral color");
    }
    colors
}
