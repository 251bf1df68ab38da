use crate::io::context::IoContext;
use crate::io::error::Error;
use crate::model::{atom::Atom, chain::Chain, residue::Residue, structure::Structure, types::Point};
use log::{debug, warn};
use std::collections::{BTreeMap, HashMap};
use std::io::BufRead;

const WATER_NAMES: [&str; 3] = ["HOH", "WAT", "DOD"];

struct TempResidue {
    raw_name: String,
    i_code: Option<char>,
    atoms: HashMap<String, (f64, Atom)>,
}

/// Reads the first model of a PDB stream into a [`Structure`].
///
/// `ATOM` records are always kept. `HETATM` records are kept only when their residue name
/// resolves to an amino acid (e.g. `MSE`); waters, ions, and ligands are dropped. Alternate
/// locations keep the highest-occupancy copy of each atom, and residues repeating an
/// already-seen sequence number under a different insertion code are ignored.
pub fn read<R: BufRead>(reader: R, context: &IoContext) -> Result<Structure, Error> {
    let mut chain_order: Vec<String> = Vec::new();
    let mut chain_map: HashMap<String, BTreeMap<i32, TempResidue>> = HashMap::new();

    let mut line_num = 0;

    for line in reader.lines() {
        line_num += 1;
        let line = line.map_err(|e| Error::from_io(e, None))?;

        if line.starts_with("ENDMDL") {
            debug!("Stopping at end of first model (line {line_num})");
            break;
        }

        let is_atom = line.starts_with("ATOM  ");
        let is_hetatm = line.starts_with("HETATM");

        if is_atom || is_hetatm {
            parse_atom_record(
                &line,
                line_num,
                is_hetatm,
                context,
                &mut chain_order,
                &mut chain_map,
            )?;
        }
    }

    let mut structure = Structure::new();

    for chain_id in chain_order {
        if let Some(residues) = chain_map.remove(&chain_id) {
            let mut chain = Chain::new(&chain_id);

            for (res_seq, temp_res) in residues {
                let (canonical_name, std_enum) = context.classify_residue(&temp_res.raw_name);
                let mut residue = Residue::new(res_seq, canonical_name.as_str(), std_enum);

                let mut sorted_atoms: Vec<Atom> =
                    temp_res.atoms.into_values().map(|v| v.1).collect();
                sorted_atoms.sort_by(|a, b| a.name.cmp(&b.name));

                for atom in sorted_atoms {
                    residue.add_atom(atom);
                }

                chain.add_residue(residue);
            }
            structure.add_chain(chain);
        }
    }

    debug!("Read PDB stream: {}", structure);
    Ok(structure)
}

fn parse_atom_record(
    line: &str,
    line_num: usize,
    is_hetatm: bool,
    context: &IoContext,
    chain_order: &mut Vec<String>,
    chain_map: &mut HashMap<String, BTreeMap<i32, TempResidue>>,
) -> Result<(), Error> {
    if line.len() < 54 {
        return Err(Error::parse("PDB", None, line_num, "Atom record too short"));
    }

    let atom_name = field(line, 12..16, line_num)?.trim().to_string();
    let res_name = field(line, 17..20, line_num)?.trim().to_string();

    if WATER_NAMES.contains(&res_name.as_str()) {
        return Ok(());
    }
    if is_hetatm && context.classify_residue(&res_name).1.is_none() {
        return Ok(());
    }

    let chain_id = line.chars().nth(21).unwrap_or(' ').to_string();
    let i_code = match line.chars().nth(26).unwrap_or(' ') {
        ' ' => None,
        c => Some(c),
    };

    let res_seq = field(line, 22..26, line_num)?
        .trim()
        .parse::<i32>()
        .map_err(|_| Error::parse("PDB", None, line_num, "Invalid residue sequence number"))?;

    let x = parse_coordinate(line, 30..38, line_num, "Invalid X coordinate")?;
    let y = parse_coordinate(line, 38..46, line_num, "Invalid Y coordinate")?;
    let z = parse_coordinate(line, 46..54, line_num, "Invalid Z coordinate")?;
    let pos = Point::new(x, y, z);

    let occupancy = line
        .get(54..60)
        .and_then(|s| s.trim().parse::<f64>().ok())
        .unwrap_or(1.0);

    if !chain_map.contains_key(&chain_id) {
        chain_map.insert(chain_id.clone(), BTreeMap::new());
        chain_order.push(chain_id.clone());
    }
    let Some(residues) = chain_map.get_mut(&chain_id) else {
        return Ok(());
    };

    let temp_res = residues.entry(res_seq).or_insert_with(|| TempResidue {
        raw_name: res_name,
        i_code,
        atoms: HashMap::new(),
    });

    if temp_res.i_code != i_code {
        warn!(
            "Chain '{}' residue {}: ignoring insertion code {:?} at line {}",
            chain_id, res_seq, i_code, line_num
        );
        return Ok(());
    }

    let replace = match temp_res.atoms.get(&atom_name) {
        Some((old_occ, _)) => occupancy > *old_occ,
        None => true,
    };
    if replace {
        temp_res
            .atoms
            .insert(atom_name.clone(), (occupancy, Atom::new(&atom_name, pos)));
    }

    Ok(())
}

fn field(line: &str, range: std::ops::Range<usize>, line_num: usize) -> Result<&str, Error> {
    line.get(range)
        .ok_or_else(|| Error::parse("PDB", None, line_num, "Malformed fixed-width field"))
}

fn parse_coordinate(
    line: &str,
    range: std::ops::Range<usize>,
    line_num: usize,
    details: &'static str,
) -> Result<f64, Error> {
    field(line, range, line_num)?
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::parse("PDB", None, line_num, details))
}
