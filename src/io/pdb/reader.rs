use crate::io::error::Error;
use crate::model::{
    atom::{AtomIdentity, Vec3},
    structure::{Model, Structure, StructureAtom},
};
use pdbtbx as pt;
use std::collections::HashSet;
use std::io::{BufRead, BufReader};

const DEFAULT_ELEMENT: &str = "C";

pub fn read<R: BufRead>(reader: R) -> Result<Structure, Error> {
    let (pdb, warnings) = pt::open_pdb_raw(
        BufReader::new(reader),
        pt::Context::none(),
        pt::StrictnessLevel::Loose,
    )?;
    for warning in &warnings {
        log::debug!("PDB parser: {warning}");
    }

    let models = pdb.models().filter_map(convert_model).collect();
    Ok(Structure::new(models))
}

fn convert_model(model: &pt::Model) -> Option<Model> {
    let mut atoms = Vec::with_capacity(model.atom_count());

    for chain in model.chains() {
        let chain_id = match chain.id().trim() {
            "" => " ".to_string(),
            id => id.to_string(),
        };

        for residue in chain.residues() {
            // Alternate conformers repeat atom names; the first location wins.
            let mut seen = HashSet::new();
            for conformer in residue.conformers() {
                for atom in conformer.atoms() {
                    let name = atom.name().trim();
                    if !seen.insert(name.to_string()) {
                        continue;
                    }
                    atoms.push(convert_atom(atom, conformer.name(), &chain_id));
                }
            }
        }
    }

    (!atoms.is_empty()).then_some(Model { atoms })
}

fn convert_atom(atom: &pt::Atom, residue: &str, chain: &str) -> StructureAtom {
    let (x, y, z) = atom.pos();
    let name = atom.name().trim();
    let element = element_symbol(atom.element().map(|e| e.symbol()), name);

    StructureAtom {
        position: Vec3::new(x, y, z),
        identity: AtomIdentity::new(element, name, residue.trim(), chain),
        b_factor: Some(atom.b_factor()),
    }
}

/// Uses the parsed element column, falling back to the first letter of the
/// atom name (`OG1` → `O`) and finally to carbon.
fn element_symbol(parsed: Option<&str>, atom_name: &str) -> String {
    if let Some(symbol) = parsed.map(str::trim).filter(|s| !s.is_empty()) {
        return normalize_symbol(symbol);
    }

    atom_name
        .chars()
        .find(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase().to_string())
        .unwrap_or_else(|| DEFAULT_ELEMENT.to_string())
}

fn normalize_symbol(symbol: &str) -> String {
    let mut chars = symbol.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => DEFAULT_ELEMENT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const TWO_MODELS: &str = "\
MODEL        1
ATOM      1  N   ALA A   1      11.104   6.134  -6.504  1.00 10.00           N
ATOM      2  CA  ALA A   1      11.639   6.071  -5.147  1.00 20.00           C
HETATM    3  O   HOH B   2       1.000   2.000   3.000  1.00 40.00           O
ENDMDL
MODEL        2
ATOM      1  N   ALA A   1      11.204   6.234  -6.604  1.00 10.00           N
ATOM      2  CA  ALA A   1      11.739   6.171  -5.247  1.00 20.00           C
HETATM    3  O   HOH B   2       1.100   2.100   3.100  1.00 40.00           O
ENDMDL
END
";

    fn parse(text: &str) -> Structure {
        read(Cursor::new(text.as_bytes())).expect("parse pdb")
    }

    #[test]
    fn splits_models_in_file_order() {
        let structure = parse(TWO_MODELS);
        assert_eq!(structure.model_count(), 2);

        let first = structure.first_model().expect("first model");
        let names: Vec<_> = first.atoms.iter().map(|a| a.identity.name.as_str()).collect();
        assert_eq!(names, vec!["N", "CA", "O"]);
        assert_eq!(first.atoms[0].position, Vec3::new(11.104, 6.134, -6.504));
        assert_eq!(structure.models[1].atoms[2].position, Vec3::new(1.1, 2.1, 3.1));
    }

    #[test]
    fn reads_identity_and_b_factor() {
        let structure = parse(TWO_MODELS);
        let water = &structure.models[0].atoms[2];
        assert_eq!(water.identity, AtomIdentity::new("O", "O", "HOH", "B"));
        assert_eq!(water.b_factor, Some(40.0));
    }

    #[test]
    fn file_without_model_records_is_one_model() {
        let text = "\
ATOM      1  CA  GLY A   1       0.000   0.000   0.000  1.00 15.00           C
ATOM      2  CA  GLY A   2       3.800   0.000   0.000  1.00 15.00           C
END
";
        let structure = parse(text);
        assert_eq!(structure.model_count(), 1);
        assert_eq!(structure.models[0].atom_count(), 2);
    }

    #[test]
    fn keeps_first_alternate_location_only() {
        let text = "\
ATOM      1  CB ASER A  10       1.000   1.000   1.000  0.60 12.00           C
ATOM      2  CB BSER A  10       1.500   1.500   1.500  0.40 12.00           C
ATOM      3  OG  SER A  10       2.000   2.000   2.000  1.00 12.00           O
END
";
        let structure = parse(text);
        let atoms = &structure.models[0].atoms;
        assert_eq!(atoms.len(), 2);

        let cb = atoms
            .iter()
            .find(|a| a.identity.name == "CB")
            .expect("CB kept");
        assert_eq!(cb.position, Vec3::new(1.0, 1.0, 1.0));
        assert!(atoms.iter().any(|a| a.identity.name == "OG"));
    }

    #[test]
    fn blank_element_is_inferred_from_atom_name() {
        assert_eq!(element_symbol(None, "OG1"), "O");
        assert_eq!(element_symbol(Some("  "), "NZ"), "N");
        assert_eq!(element_symbol(None, "1HB"), "H");
        assert_eq!(element_symbol(None, "12"), "C");
    }

    #[test]
    fn normalizes_two_letter_element() {
        assert_eq!(element_symbol(Some("AU"), "AU"), "Au");
        let text = "\
HETATM    1 AU    AU A   1       0.000   0.000   0.000  1.00  0.00          AU
END
";
        let structure = parse(text);
        assert_eq!(structure.models[0].atoms[0].identity.element, "Au");
    }

    #[test]
    fn malformed_coordinate_is_an_error() {
        let text = "\
ATOM      1  CA  GLY A   1       0.000     abc   0.000  1.00 15.00           C
END
";
        let err = read(Cursor::new(text.as_bytes())).unwrap_err();
        assert!(matches!(err, Error::Pdb(_)));
    }
}
