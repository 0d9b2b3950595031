use anyhow::{Context, Result};

use traj_forge::io::read_structure_file;
use traj_forge::{Structure, breathe, breathing_source, convert};

use super::finish;
use crate::cli::{BreatheArgs, ConvertArgs};
use crate::config::build_synth_config;
use crate::display::{Context as DisplayContext, Progress};

const TOTAL_STEPS: u8 = 3;

pub fn run_breathe(args: BreatheArgs, ctx: DisplayContext) -> Result<()> {
    let config = build_synth_config(&args.motion)?;
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    let structure = read_structure(&args.input, &mut progress)?;

    progress.step("Synthesizing breathing motion");
    let source = breathing_source(&args.input.display().to_string());
    let trajectory = breathe(&structure, source, args.amplitude, &config)
        .context("Breathing synthesis failed")?;
    progress.complete_step(
        "Synthesizing breathing motion",
        &[
            "Centre first model on its coordinate mean".to_string(),
            format!(
                "{} frames, amplitude {}",
                config.num_frames,
                args.amplitude
                    .map(|a| a.to_string())
                    .unwrap_or_else(|| "from parameters".to_string())
            ),
        ],
    );

    finish(&trajectory, &args.output, &mut progress, ctx)?;
    progress.finish();
    Ok(())
}

pub fn run_convert(args: ConvertArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    let structure = read_structure(&args.input, &mut progress)?;

    progress.step("Converting models to frames");
    let trajectory = convert(&structure, args.input.display().to_string(), args.max_frames)
        .context("Conversion failed")?;
    progress.complete_step(
        "Converting models to frames",
        &[format!(
            "{} of {} models kept",
            trajectory.frame_count(),
            structure.model_count()
        )],
    );

    finish(&trajectory, &args.output, &mut progress, ctx)?;
    progress.finish();
    Ok(())
}

fn read_structure(path: &std::path::Path, progress: &mut Progress) -> Result<Structure> {
    progress.step("Reading structure");
    let structure = read_structure_file(path)
        .with_context(|| format!("Failed to read structure: {}", path.display()))?;
    let atoms = structure.first_model().map_or(0, |m| m.atom_count());
    progress.complete_step(
        "Reading structure",
        &[format!(
            "Parse PDB: {} model(s), {} atoms in model 1",
            structure.model_count(),
            atoms
        )],
    );
    Ok(structure)
}
