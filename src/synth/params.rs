use super::error::Error;
use serde::Deserialize;
use std::sync::OnceLock;

const DEFAULT_MOTION_TOML: &str = include_str!("../../resources/default.motion.toml");

static DEFAULT_PARAMS: OnceLock<MotionParams> = OnceLock::new();

/// Tunable constants of every geometry builder and motion model.
///
/// Any table or key missing from a custom TOML document keeps its default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionParams {
    pub water: WaterParams,
    pub helix: HelixParams,
    pub cluster: ClusterParams,
    pub breathing: BreathingParams,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WaterParams {
    /// Distance between neighbouring molecules on the grid (nm).
    pub spacing: f64,
    pub residue: String,
    pub chain: String,
    /// Standard deviation of the per-molecule thermal jitter (nm).
    pub thermal_sigma: f64,
    pub wave_amplitude: f64,
    pub wave_frequency: f64,
    /// Phase advance per grid step along each axis.
    pub wave_phase: f64,
}

impl Default for WaterParams {
    fn default() -> Self {
        Self {
            spacing: 0.3,
            residue: "HOH".to_string(),
            chain: "A".to_string(),
            thermal_sigma: 0.01,
            wave_amplitude: 0.02,
            wave_frequency: 0.1,
            wave_phase: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HelixParams {
    pub radius: f64,
    /// Rise per residue along the helix axis (nm).
    pub rise: f64,
    pub rotation_deg: f64,
    pub residue: String,
    pub chain: String,
    pub breathing_amplitude: f64,
    pub breathing_frequency: f64,
    pub flex_amplitude: f64,
    pub flex_frequency: f64,
    pub flex_residue_phase: f64,
}

impl HelixParams {
    #[inline]
    pub fn rotation_per_residue(&self) -> f64 {
        self.rotation_deg.to_radians()
    }
}

impl Default for HelixParams {
    fn default() -> Self {
        Self {
            radius: 0.23,
            rise: 0.15,
            rotation_deg: 100.0,
            residue: "ALA".to_string(),
            chain: "A".to_string(),
            breathing_amplitude: 0.1,
            breathing_frequency: 0.2,
            flex_amplitude: 0.02,
            flex_frequency: 0.15,
            flex_residue_phase: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClusterParams {
    pub lattice_constant: f64,
    pub element: String,
    pub name: String,
    pub residue: String,
    pub chain: String,
    pub breathing_amplitude: f64,
    pub breathing_frequency: f64,
    pub thermal_sigma: f64,
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self {
            lattice_constant: 0.4,
            element: "Au".to_string(),
            name: "AU".to_string(),
            residue: "AU".to_string(),
            chain: "A".to_string(),
            breathing_amplitude: 0.05,
            breathing_frequency: 0.3,
            thermal_sigma: 0.01,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BreathingParams {
    /// Overall motion strength; scales both the breathing and twist terms.
    pub amplitude: f64,
    /// Peak radial expansion as a fraction of distance, per unit amplitude.
    pub scale_fraction: f64,
    pub twist_fraction: f64,
    /// Noise amplitude per unit of `b_factor / 100`.
    pub noise_fraction: f64,
    /// B-factor assumed for atoms whose record has none.
    pub default_b_factor: f64,
}

impl Default for BreathingParams {
    fn default() -> Self {
        Self {
            amplitude: 2.0,
            scale_fraction: 0.05,
            twist_fraction: 0.05,
            noise_fraction: 0.2,
            default_b_factor: 20.0,
        }
    }
}

impl MotionParams {
    /// Checks ranges that would otherwise produce NaN or overlapping geometry.
    ///
    /// Every float must be finite; distances and sigmas must also be
    /// non-negative, and grid spacings strictly positive.
    pub fn validate(&self) -> Result<(), Error> {
        let water = &self.water;
        positive("water.spacing", water.spacing)?;
        non_negative("water.thermal_sigma", water.thermal_sigma)?;
        finite("water.wave_amplitude", water.wave_amplitude)?;
        finite("water.wave_frequency", water.wave_frequency)?;
        finite("water.wave_phase", water.wave_phase)?;

        let helix = &self.helix;
        non_negative("helix.radius", helix.radius)?;
        finite("helix.rise", helix.rise)?;
        finite("helix.rotation_deg", helix.rotation_deg)?;
        finite("helix.breathing_amplitude", helix.breathing_amplitude)?;
        finite("helix.breathing_frequency", helix.breathing_frequency)?;
        finite("helix.flex_amplitude", helix.flex_amplitude)?;
        finite("helix.flex_frequency", helix.flex_frequency)?;
        finite("helix.flex_residue_phase", helix.flex_residue_phase)?;

        let cluster = &self.cluster;
        positive("cluster.lattice_constant", cluster.lattice_constant)?;
        non_negative("cluster.thermal_sigma", cluster.thermal_sigma)?;
        finite("cluster.breathing_amplitude", cluster.breathing_amplitude)?;
        finite("cluster.breathing_frequency", cluster.breathing_frequency)?;

        let breathing = &self.breathing;
        finite("breathing.amplitude", breathing.amplitude)?;
        finite("breathing.scale_fraction", breathing.scale_fraction)?;
        finite("breathing.twist_fraction", breathing.twist_fraction)?;
        finite("breathing.noise_fraction", breathing.noise_fraction)?;
        non_negative("breathing.default_b_factor", breathing.default_b_factor)?;
        Ok(())
    }
}

fn finite(name: &str, value: f64) -> Result<(), Error> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::invalid_parameter(name, format!("{value} is not finite")))
    }
}

fn non_negative(name: &str, value: f64) -> Result<(), Error> {
    finite(name, value)?;
    if value < 0.0 {
        return Err(Error::invalid_parameter(name, format!("{value} is negative")));
    }
    Ok(())
}

fn positive(name: &str, value: f64) -> Result<(), Error> {
    finite(name, value)?;
    if value <= 0.0 {
        return Err(Error::invalid_parameter(name, format!("{value} must be > 0")));
    }
    Ok(())
}

pub fn load_parameters(custom_toml: Option<&str>) -> Result<MotionParams, Error> {
    let params = match custom_toml {
        Some(text) => toml::from_str::<MotionParams>(text)?,
        None => get_default_parameters().clone(),
    };
    params.validate()?;
    Ok(params)
}

pub fn get_default_parameters() -> &'static MotionParams {
    DEFAULT_PARAMS.get_or_init(|| {
        toml::from_str(DEFAULT_MOTION_TOML)
            .expect("Failed to parse embedded default motion parameters. This is a library bug.")
    })
}
