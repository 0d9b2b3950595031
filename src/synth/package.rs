use super::error::Error;
use crate::geometry::centroid;
use crate::model::{
    atom::Vec3,
    trajectory::{Bounds, Frame, Metadata, Trajectory},
};

/// Axis-aligned bounds and centroid of one frame.
///
/// Returns `None` for an empty frame or one with a non-finite coordinate.
pub fn frame_bounds(frame: &Frame) -> Option<Bounds> {
    if frame.atoms().iter().any(|a| !a.position.is_finite()) {
        return None;
    }
    let center = centroid(frame.atoms().iter().map(|a| a.position))?;
    let (min, max) = frame.atoms().iter().map(|a| a.position).fold(
        (Vec3::splat(f64::INFINITY), Vec3::splat(f64::NEG_INFINITY)),
        |(lo, hi), p| {
            (
                Vec3::new(lo.x.min(p.x), lo.y.min(p.y), lo.z.min(p.z)),
                Vec3::new(hi.x.max(p.x), hi.y.max(p.y), hi.z.max(p.z)),
            )
        },
    );
    Some(Bounds { min, max, center })
}

/// Wraps frames into a trajectory with metadata derived from frame 0.
///
/// # Errors
///
/// Returns [`Error::DegenerateBounds`] if there are no frames or frame 0 is
/// empty, and [`Error::FrameMismatch`] if a later frame has a different atom
/// count than frame 0. Any NaN or infinite coordinate is reported as
/// [`Error::NonFinitePosition`].
pub fn package(frames: Vec<Frame>, source: impl Into<String>) -> Result<Trajectory, Error> {
    let first = frames.first().ok_or(Error::DegenerateBounds)?;
    let num_atoms = first.len();

    if let Some((frame, atom)) = frames.iter().enumerate().find_map(|(f, frame)| {
        frame
            .atoms()
            .iter()
            .position(|a| !a.position.is_finite())
            .map(|atom| (f, atom))
    }) {
        return Err(Error::NonFinitePosition { frame, atom });
    }

    let bounds = frame_bounds(first).ok_or(Error::DegenerateBounds)?;

    if let Some((frame, found)) = frames
        .iter()
        .map(Frame::len)
        .enumerate()
        .find(|&(_, len)| len != num_atoms)
    {
        return Err(Error::FrameMismatch {
            frame,
            expected: num_atoms,
            found,
        });
    }

    Ok(Trajectory {
        metadata: Metadata {
            source: source.into(),
            num_frames: frames.len(),
            num_atoms,
            bounds,
        },
        frames,
    })
}
