use super::atom::{AtomIdentity, Vec3};

/// An atom as delivered by a structure reader.
#[derive(Debug, Clone, PartialEq)]
pub struct StructureAtom {
    pub position: Vec3,
    pub identity: AtomIdentity,
    pub b_factor: Option<f64>,
}

/// One model (conformation) of a structure, atoms in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    pub atoms: Vec<StructureAtom>,
}

impl Model {
    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.atoms.iter().map(|a| a.position)
    }

    pub fn identities(&self) -> Vec<AtomIdentity> {
        self.atoms.iter().map(|a| a.identity.clone()).collect()
    }
}

/// A parsed structure with one or more models.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    pub models: Vec<Model>,
}

impl Structure {
    pub fn new(models: Vec<Model>) -> Self {
        Self { models }
    }

    #[inline]
    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    pub fn first_model(&self) -> Option<&Model> {
        self.models.first()
    }
}
