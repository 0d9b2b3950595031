use super::color::Color;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// Cartesian position in nanometers.
///
/// Serialized as `{"x": .., "y": .., "z": ..}`, which is also the layout the
/// trajectory viewer expects for bounds and flattened atom positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the same scalar on every axis.
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Identity fields of an atom.
///
/// These never change between frames; the frame assembler copies them
/// verbatim from the reference geometry into every [`AtomRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AtomIdentity {
    pub element: String,
    pub name: String,
    pub residue: String,
    pub chain: String,
}

impl AtomIdentity {
    pub fn new(
        element: impl Into<String>,
        name: impl Into<String>,
        residue: impl Into<String>,
        chain: impl Into<String>,
    ) -> Self {
        Self {
            element: element.into(),
            name: name.into(),
            residue: residue.into(),
            chain: chain.into(),
        }
    }
}

/// One atom in one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomRecord {
    #[serde(flatten)]
    pub position: Vec3,
    #[serde(flatten)]
    pub identity: AtomIdentity,
    pub color: Color,
}

impl AtomRecord {
    pub fn new(position: Vec3, identity: AtomIdentity, color: Color) -> Self {
        Self {
            position,
            identity,
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec3_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::splat(1.0);
        assert_eq!(a + b, Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(a - b, Vec3::new(0.0, 1.0, 2.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).norm(), 5.0);
    }

    #[test]
    fn atom_record_serializes_flat() {
        let record = AtomRecord::new(
            Vec3::new(0.1, 0.2, 0.3),
            AtomIdentity::new("O", "O", "HOH", "A"),
            Color::new(1.0, 0.0, 0.0),
        );
        let value = serde_json::to_value(&record).expect("serialize record");
        let obj = value.as_object().expect("record is an object");

        for key in ["x", "y", "z", "element", "name", "residue", "chain", "color"] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        assert_eq!(obj.len(), 8);
        assert_eq!(value["residue"], "HOH");
        assert_eq!(value["color"]["r"], 1.0);
    }

    #[test]
    fn atom_record_deserializes_flat() {
        let json = r#"{"x":1.0,"y":2.0,"z":3.0,"element":"C","name":"CA",
            "residue":"ALA","chain":"B","color":{"r":0.5,"g":0.5,"b":0.5}}"#;
        let record: AtomRecord = serde_json::from_str(json).expect("parse record");
        assert_eq!(record.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(record.identity, AtomIdentity::new("C", "CA", "ALA", "B"));
        assert_eq!(record.color, Color::new(0.5, 0.5, 0.5));
    }
}
