use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tforge",
    about = "Synthetic molecular trajectories for 3D viewers",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn output(&self) -> &OutputOptions {
        match &self.command {
            Command::Water(args) => &args.output,
            Command::Protein(args) => &args.output,
            Command::Cluster(args) => &args.output,
            Command::Breathe(args) => &args.output,
            Command::Convert(args) => &args.output,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Box of rigid water molecules with thermal jitter and a lattice wave
    #[command(visible_alias = "w")]
    Water(WaterArgs),

    /// Helical protein backbone with breathing and residue flex
    #[command(visible_alias = "p")]
    Protein(ProteinArgs),

    /// Gold nanocluster with radial lattice vibration
    #[command(visible_alias = "c")]
    Cluster(ClusterArgs),

    /// Radial breathing of a PDB structure, modulated by B-factors
    #[command(visible_alias = "b")]
    Breathe(BreatheArgs),

    /// Convert a multi-model PDB file into a trajectory (one frame per model)
    Convert(ConvertArgs),
}

/// Output options shared by all commands.
#[derive(Args)]
pub struct OutputOptions {
    /// Output JSON file (stdout if omitted and stdout is not a terminal)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,

    /// Log pipeline details (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Motion options shared by all synthesizing commands.
#[derive(Args)]
#[command(next_help_heading = "Motion")]
pub struct MotionOptions {
    /// Number of frames to generate
    #[arg(short = 'n', long, value_name = "N", default_value = "50")]
    pub frames: usize,

    /// Seed for reproducible thermal jitter (random if omitted)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Thermal jitter standard deviation in nm (water and cluster)
    #[arg(long, value_name = "SIGMA")]
    pub jitter: Option<f64>,

    /// Custom motion parameters (TOML file)
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,
}

#[derive(Args)]
pub struct WaterArgs {
    /// Number of water molecules
    #[arg(long, value_name = "N", default_value = "27")]
    pub molecules: usize,

    #[command(flatten)]
    pub motion: MotionOptions,

    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(Args)]
pub struct ProteinArgs {
    /// Number of helix residues
    #[arg(long, value_name = "N", default_value = "20")]
    pub residues: usize,

    #[command(flatten)]
    pub motion: MotionOptions,

    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(Args)]
pub struct ClusterArgs {
    /// Number of cluster atoms
    #[arg(long, value_name = "N", default_value = "100")]
    pub atoms: usize,

    #[command(flatten)]
    pub motion: MotionOptions,

    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(Args)]
pub struct BreatheArgs {
    /// Input PDB file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Breathing strength (default from motion parameters: 2.0)
    #[arg(long, value_name = "A")]
    pub amplitude: Option<f64>,

    #[command(flatten)]
    pub motion: MotionOptions,

    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Input multi-model PDB file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Maximum number of models to convert
    #[arg(long, value_name = "N", default_value = "100")]
    pub max_frames: usize,

    #[command(flatten)]
    pub output: OutputOptions,
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn water_defaults() {
        let cli = Cli::try_parse_from(["tforge", "water"]).unwrap();
        let Command::Water(args) = cli.command else {
            panic!("expected water command");
        };
        assert_eq!(args.molecules, 27);
        assert_eq!(args.motion.frames, 50);
        assert!(args.motion.seed.is_none());
        assert!(args.output.output.is_none());
    }

    #[test]
    fn aliases_and_shared_options() {
        let cli = Cli::try_parse_from([
            "tforge", "c", "--atoms", "8", "-n", "5", "--seed", "3", "--jitter", "0", "-o",
            "out.json", "--pretty", "-q",
        ])
        .unwrap();
        let Command::Cluster(args) = cli.command else {
            panic!("expected cluster command");
        };
        assert_eq!(args.atoms, 8);
        assert_eq!(args.motion.frames, 5);
        assert_eq!(args.motion.seed, Some(3));
        assert_eq!(args.motion.jitter, Some(0.0));
        assert!(args.output.pretty && args.output.quiet);
    }

    #[test]
    fn breathe_requires_input() {
        assert!(Cli::try_parse_from(["tforge", "breathe"]).is_err());
        let cli = Cli::try_parse_from(["tforge", "b", "-i", "x.pdb", "--amplitude", "1.5"]).unwrap();
        let Command::Breathe(args) = cli.command else {
            panic!("expected breathe command");
        };
        assert_eq!(args.amplitude, Some(1.5));
    }

    #[test]
    fn convert_max_frames_default() {
        let cli = Cli::try_parse_from(["tforge", "convert", "-i", "multi.pdb"]).unwrap();
        let Command::Convert(args) = cli.command else {
            panic!("expected convert command");
        };
        assert_eq!(args.max_frames, 100);
    }
}
