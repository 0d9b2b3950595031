/// Run-level settings shared by every synthesis entry point.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthConfig {
    /// Number of frames to generate. Must be at least 1.
    pub num_frames: usize,
    /// Seed of the thermal jitter streams; `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Overrides the thermal sigma of the selected motion model.
    pub thermal_sigma: Option<f64>,
    /// Custom motion parameters as a TOML document.
    pub params: Option<String>,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            num_frames: 50,
            seed: None,
            thermal_sigma: None,
            params: None,
        }
    }
}

impl SynthConfig {
    pub fn with_frames(mut self, num_frames: usize) -> Self {
        self.num_frames = num_frames;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_thermal_sigma(mut self, sigma: f64) -> Self {
        self.thermal_sigma = Some(sigma);
        self
    }
}
