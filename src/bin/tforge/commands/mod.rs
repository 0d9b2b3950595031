mod structure;
mod synthetic;

use anyhow::{Context, Result};

use traj_forge::Trajectory;
use traj_forge::io::write_trajectory;

use crate::cli::{Command, OutputOptions};
use crate::display::{
    Context as DisplayContext, Progress, print_element_distribution, print_trajectory_summary,
};
use crate::io::{create_output, output_name};

pub fn dispatch(command: Command, ctx: DisplayContext) -> Result<()> {
    match command {
        Command::Water(args) => synthetic::run_water(args, ctx),
        Command::Protein(args) => synthetic::run_protein(args, ctx),
        Command::Cluster(args) => synthetic::run_cluster(args, ctx),
        Command::Breathe(args) => structure::run_breathe(args, ctx),
        Command::Convert(args) => structure::run_convert(args, ctx),
    }
}

/// Shows the summary tables and writes the trajectory as the final step.
fn finish(
    trajectory: &Trajectory,
    output: &OutputOptions,
    progress: &mut Progress,
    ctx: DisplayContext,
) -> Result<()> {
    if ctx.interactive {
        print_trajectory_summary(trajectory);
        print_element_distribution(trajectory);
    }

    progress.step("Writing trajectory");
    let target = create_output(output.output.as_deref())?;
    write_trajectory(target, trajectory, output.pretty).context("Failed to write trajectory")?;
    progress.complete_step(
        "Writing trajectory",
        &[format!(
            "JSON{} → {}",
            if output.pretty { " (pretty)" } else { "" },
            output_name(output.output.as_deref())
        )],
    );
    Ok(())
}
