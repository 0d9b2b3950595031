use std::fs;

use anyhow::{Context, Result};

use traj_forge::SynthConfig;

use crate::cli::MotionOptions;

pub fn build_synth_config(motion: &MotionOptions) -> Result<SynthConfig> {
    let params = motion
        .params
        .as_ref()
        .map(|path| {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read motion parameters: {}", path.display()))
        })
        .transpose()?;

    Ok(SynthConfig {
        num_frames: motion.frames,
        seed: motion.seed,
        thermal_sigma: motion.jitter,
        params,
    })
}
