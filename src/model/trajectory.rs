use super::atom::{AtomRecord, Vec3};
use serde::{Deserialize, Serialize};

/// All atom records of one time sample, in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frame(pub Vec<AtomRecord>);

impl Frame {
    pub fn new(atoms: Vec<AtomRecord>) -> Self {
        Self(atoms)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn atoms(&self) -> &[AtomRecord] {
        &self.0
    }
}

/// Axis-aligned bounds and centroid of frame 0.
///
/// A camera hint for the viewer; later frames may leave this box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
    pub center: Vec3,
}

impl Bounds {
    /// Returns `true` if `p` lies inside `[min, max]` on every axis.
    pub fn contains(&self, p: Vec3) -> bool {
        (self.min.x..=self.max.x).contains(&p.x)
            && (self.min.y..=self.max.y).contains(&p.y)
            && (self.min.z..=self.max.z).contains(&p.z)
    }

    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub source: String,
    pub num_frames: usize,
    pub num_atoms: usize,
    pub bounds: Bounds,
}

/// A packaged trajectory: metadata plus every frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub metadata: Metadata,
    pub frames: Vec<Frame>,
}

impl Trajectory {
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.metadata.num_atoms
    }
}
