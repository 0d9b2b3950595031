use crate::io::error::Error;
use crate::model::trajectory::Trajectory;
use std::io::{Read, Write};

/// Serializes a trajectory as the viewer's JSON record.
///
/// Compact output is the default since frame arrays dominate the file size;
/// `pretty` switches to indented output for inspection.
pub fn write_trajectory<W: Write>(
    mut writer: W,
    trajectory: &Trajectory,
    pretty: bool,
) -> Result<(), Error> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, trajectory)?;
    } else {
        serde_json::to_writer(&mut writer, trajectory)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read_trajectory<R: Read>(reader: R) -> Result<Trajectory, Error> {
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        atom::{AtomIdentity, AtomRecord, Vec3},
        color::Color,
        trajectory::{Bounds, Frame, Metadata},
    };
    use serde_json::Value;

    fn sample() -> Trajectory {
        let atom = AtomRecord::new(
            Vec3::new(0.5, -0.25, 1.0),
            AtomIdentity::new("N", "N", "ALA", "A"),
            Color::new(0.0, 0.0, 1.0),
        );
        Trajectory {
            metadata: Metadata {
                source: "unit".to_string(),
                num_frames: 2,
                num_atoms: 1,
                bounds: Bounds {
                    min: atom.position,
                    max: atom.position,
                    center: atom.position,
                },
            },
            frames: vec![Frame::new(vec![atom.clone()]), Frame::new(vec![atom])],
        }
    }

    #[test]
    fn writes_viewer_schema() {
        let mut buf = Vec::new();
        write_trajectory(&mut buf, &sample(), false).expect("write json");
        let value: Value = serde_json::from_slice(&buf).expect("valid json");

        let metadata = &value["metadata"];
        assert_eq!(metadata["source"], "unit");
        assert_eq!(metadata["num_frames"], 2);
        assert_eq!(metadata["num_atoms"], 1);
        for corner in ["min", "max", "center"] {
            for axis in ["x", "y", "z"] {
                assert!(metadata["bounds"][corner][axis].is_f64());
            }
        }

        let frames = value["frames"].as_array().expect("frames array");
        assert_eq!(frames.len(), 2);
        let atom = &frames[0][0];
        assert_eq!(atom["x"], 0.5);
        assert_eq!(atom["element"], "N");
        assert_eq!(atom["chain"], "A");
        assert_eq!(atom["color"]["b"], 1.0);
    }

    #[test]
    fn compact_output_has_no_newlines() {
        let mut buf = Vec::new();
        write_trajectory(&mut buf, &sample(), false).expect("write json");
        assert!(!buf.contains(&b'\n'));

        let mut pretty = Vec::new();
        write_trajectory(&mut pretty, &sample(), true).expect("write json");
        assert!(pretty.contains(&b'\n'));
    }

    #[test]
    fn reads_back_written_trajectory() {
        let original = sample();
        let mut buf = Vec::new();
        write_trajectory(&mut buf, &original, true).expect("write json");
        let parsed = read_trajectory(buf.as_slice()).expect("read json");
        assert_eq!(parsed, original);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = read_trajectory(br#"{"metadata": 1}"#.as_slice()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
