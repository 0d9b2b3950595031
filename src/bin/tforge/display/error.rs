use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
    }

    let hints = HintCollector::collect(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

#[derive(Default)]
struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn collect(err: &Error) -> Vec<String> {
        let mut collector = Self::default();

        for cause in err.chain() {
            if let Some(synth_err) = cause.downcast_ref::<traj_forge::SynthError>() {
                collector.collect_synth_hints(synth_err);
                break;
            }
            if let Some(io_err) = cause.downcast_ref::<traj_forge::io::Error>() {
                collector.collect_io_hints(io_err);
                break;
            }
        }

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        collector.hints
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn collect_synth_hints(&mut self, err: &traj_forge::SynthError) {
        use traj_forge::SynthError;

        self.has_typed_hints = true;

        match err {
            SynthError::EmptyGeometry(_) => {
                self.add("Nothing to animate: the system has no atoms");
                self.add("Request at least one molecule, residue, or atom");
                self.add("For PDB input, check that the file has ATOM/HETATM records");
            }

            SynthError::DegenerateBounds => {
                self.add("Frame 0 has no atoms, so bounds cannot be computed");
                self.add("This indicates an empty input structure");
            }

            SynthError::InvalidFrameCount(_) => {
                self.add("Use --frames (or --max-frames) with a value of at least 1");
            }

            SynthError::FrameMismatch {
                frame,
                expected,
                found,
            } => {
                self.add(format!(
                    "Model {} has {} atoms, but the first model has {}",
                    frame + 1,
                    found,
                    expected
                ));
                self.add("Every model of a multi-model file must list the same atoms");
                self.add("Use --max-frames to stop before the mismatching model");
            }

            SynthError::IdentityMismatch { frame, atom } => {
                self.add(format!(
                    "Atom {} of model {} differs from the first model",
                    atom + 1,
                    frame + 1
                ));
                self.add("Every model of a multi-model file must list the same atoms");
                self.add("Use --max-frames to stop before the mismatching model");
            }

            SynthError::NonFinitePosition { frame, .. } => {
                self.add(format!("Motion terms overflowed at frame {frame}"));
                self.add("Reduce amplitudes or distances in your --params file");
            }

            SynthError::InvalidParameter { name, .. } => {
                self.add(format!("Check the value of '{name}' in your --params file"));
                self.add("Distances and sigmas are in nanometers and must be non-negative");
            }

            SynthError::ParameterParse(_) => {
                self.add("Motion parameter file has invalid TOML syntax");
                self.add("Tables are [water], [helix], [cluster], and [breathing]");
            }

            SynthError::Io(io_err) => self.collect_io_hints(io_err),
        }
    }

    fn collect_io_hints(&mut self, err: &traj_forge::io::Error) {
        use traj_forge::io::Error as IoError;

        self.has_typed_hints = true;

        match err {
            IoError::Io { source } => self.collect_std_io_hints(source),

            IoError::SourceUnavailable { source, .. } => {
                self.add("The structure file could not be opened");
                self.collect_std_io_hints(source);
            }

            IoError::Pdb(_) => {
                self.add("The PDB parser rejected the structure file");
                self.add("PDB: coordinates belong in columns 31-54 (8.3f each)");
                self.add("Inspect the reported record for shifted fields");
            }

            IoError::Json(_) => {
                self.add("Trajectory JSON could not be serialized");
                self.add("Check that no coordinate became NaN or infinite");
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &std::io::Error) {
        use std::io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }

            ErrorKind::WriteZero => {
                self.add("Failed to write data (disk full?)");
            }

            ErrorKind::BrokenPipe => {
                self.add("Broken pipe: the output consumer terminated early");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("stdout is a terminal") {
            self.add("Write to a file with -o/--output");
            self.add("Or redirect: tforge water > water.json");
            return;
        }

        if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the file path is correct");
            return;
        }

        if msg.contains("permission denied") {
            self.add("Check file permissions with `ls -la`");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    err.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}
