use anyhow::{Context, Result};

use traj_forge::{SynthConfig, Trajectory, nanocluster, protein_helix, water_box};

use super::finish;
use crate::cli::{ClusterArgs, MotionOptions, OutputOptions, ProteinArgs, WaterArgs};
use crate::config::build_synth_config;
use crate::display::{Context as DisplayContext, Progress};

const TOTAL_STEPS: u8 = 2;

pub fn run_water(args: WaterArgs, ctx: DisplayContext) -> Result<()> {
    let details = vec![format!(
        "{} molecules on a cubic grid, thermal jitter + lattice wave",
        args.molecules
    )];
    run_synthetic(&args.motion, &args.output, ctx, "Synthesizing water box", details, |c| {
        water_box(args.molecules, c)
    })
}

pub fn run_protein(args: ProteinArgs, ctx: DisplayContext) -> Result<()> {
    let details = vec![format!(
        "{} residues (N, CA, C, O), helix breathing + residue flex",
        args.residues
    )];
    run_synthetic(&args.motion, &args.output, ctx, "Synthesizing protein helix", details, |c| {
        protein_helix(args.residues, c)
    })
}

pub fn run_cluster(args: ClusterArgs, ctx: DisplayContext) -> Result<()> {
    let details = vec![format!(
        "{} atoms on a centred lattice, radial vibration + jitter",
        args.atoms
    )];
    run_synthetic(&args.motion, &args.output, ctx, "Synthesizing nanocluster", details, |c| {
        nanocluster(args.atoms, c)
    })
}

fn run_synthetic<F>(
    motion: &MotionOptions,
    output: &OutputOptions,
    ctx: DisplayContext,
    description: &str,
    mut details: Vec<String>,
    synthesize: F,
) -> Result<()>
where
    F: FnOnce(&SynthConfig) -> Result<Trajectory, traj_forge::SynthError>,
{
    let config = build_synth_config(motion)?;
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step(description);
    let trajectory = synthesize(&config).context("Trajectory synthesis failed")?;
    details.push(frame_detail(&config));
    progress.complete_step(description, &details);

    finish(&trajectory, output, &mut progress, ctx)?;
    progress.finish();
    Ok(())
}

fn frame_detail(config: &SynthConfig) -> String {
    let seed = config
        .seed
        .map(|s| format!("seed {s}"))
        .unwrap_or_else(|| "random seed".to_string());
    let params = if config.params.is_some() {
        "custom parameters"
    } else {
        "default parameters"
    };
    format!("{} frames, {seed}, {params}", config.num_frames)
}
