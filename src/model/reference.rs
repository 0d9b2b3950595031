use super::atom::{AtomIdentity, Vec3};

/// Position of a unit inside a packed cubic grid.
///
/// Each axis carries its own counter so motion terms that depend on the
/// grid coordinate (the water ripple uses `i` for x, `j` for y, `k` for z)
/// cannot accidentally share one loop variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridIndex {
    pub i: usize,
    pub j: usize,
    pub k: usize,
}

impl GridIndex {
    pub const fn new(i: usize, j: usize, k: usize) -> Self {
        Self { i, j, k }
    }

    #[inline]
    pub fn as_vec3(&self) -> Vec3 {
        Vec3::new(self.i as f64, self.j as f64, self.k as f64)
    }
}

/// Structural index of a unit, as seen by a motion model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitIndex {
    /// A molecule or atom placed on a cubic grid.
    Grid(GridIndex),
    /// One residue of a helical backbone.
    Backbone { residue: usize },
    /// A single atom taken from a parsed structure, by its position in model order.
    Atom(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceAtom {
    pub position: Vec3,
    pub identity: AtomIdentity,
    pub b_factor: Option<f64>,
}

impl ReferenceAtom {
    pub fn new(position: Vec3, identity: AtomIdentity) -> Self {
        Self {
            position,
            identity,
            b_factor: None,
        }
    }

    pub fn with_b_factor(mut self, b_factor: Option<f64>) -> Self {
        self.b_factor = b_factor;
        self
    }
}

/// A rigid group of atoms (water molecule, residue, or lone atom).
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub index: UnitIndex,
    pub atoms: Vec<ReferenceAtom>,
}

impl Unit {
    pub fn new(index: UnitIndex, atoms: Vec<ReferenceAtom>) -> Self {
        Self { index, atoms }
    }
}

/// Zero-motion baseline that every frame perturbs.
///
/// The flattened atom order (units in order, atoms in unit order) is the
/// canonical atom order of every frame built from this geometry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceGeometry {
    pub units: Vec<Unit>,
}

impl ReferenceGeometry {
    pub fn new(units: Vec<Unit>) -> Self {
        Self { units }
    }

    #[inline]
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    pub fn atom_count(&self) -> usize {
        self.units.iter().map(|u| u.atoms.len()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atom_count() == 0
    }

    /// Iterates atoms in canonical order.
    pub fn atoms(&self) -> impl Iterator<Item = &ReferenceAtom> {
        self.units.iter().flat_map(|u| u.atoms.iter())
    }

    /// Largest distance of any atom from the origin.
    pub fn max_radius(&self) -> f64 {
        self.atoms()
            .map(|a| a.position.norm())
            .fold(0.0_f64, f64::max)
    }
}
