use std::io::Cursor;

use ss_forge::io::{IoContext, read_pdb_structure, write_assignment_text};
use ss_forge::ops::{AssignConfig, EnergyModel, assign_secondary_structure, find_hbonds};
use ss_forge::{Atom, Chain, Point, Residue, SecondaryStructure, StandardResidue};

const O_N_DISTANCE: f64 = 2.9;
const C_O_BOND: f64 = 1.23;
const N_H_BOND: f64 = 1.0;

fn site(id: i32) -> Point {
    Point::new(100.0 * id as f64, 0.0, 0.0)
}

fn shifted(p: Point, dx: f64, dy: f64) -> Point {
    Point::new(p.x + dx, p.y + dy, p.z)
}

/// Chain whose only favorable contacts are the listed `(donor, acceptor)` pairs.
fn chain_with_bonds(ids: &[i32], bonds: &[(i32, i32)], prolines: &[i32]) -> Chain {
    let mut chain = Chain::new("A");
    for &id in ids {
        let (name, standard) = if prolines.contains(&id) {
            ("PRO", StandardResidue::PRO)
        } else {
            ("ALA", StandardResidue::ALA)
        };
        let mut residue = Residue::new(id, name, Some(standard));
        residue.add_atom(Atom::new("N", site(id)));
        residue.add_atom(Atom::new("H", shifted(site(id), -N_H_BOND, 0.0)));

        let (o, c) = match bonds.iter().find(|(d, _)| *d == id) {
            Some(&(_, acceptor)) => (
                shifted(site(acceptor), -O_N_DISTANCE, 0.0),
                shifted(site(acceptor), -O_N_DISTANCE - C_O_BOND, 0.0),
            ),
            None => (
                shifted(site(id), 0.0, 50.0),
                shifted(site(id), 0.0, 50.0 + C_O_BOND),
            ),
        };
        residue.add_atom(Atom::new("O", o));
        residue.add_atom(Atom::new("C", c));
        chain.add_residue(residue);
    }
    chain
}

fn assign(chain: &Chain) -> String {
    assign_secondary_structure(chain, &AssignConfig::default())
        .unwrap()
        .labels()
}

fn to_pdb(chain: &Chain) -> String {
    let mut lines = Vec::new();
    let mut serial = 1;
    for residue in chain.iter_residues() {
        for atom in residue.iter_atoms() {
            lines.push(format!(
                "ATOM  {:>5} {:<4} {:>3} {}{:>4}    {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}",
                serial,
                format!(" {}", atom.name),
                residue.name,
                chain.id,
                residue.id,
                atom.pos.x,
                atom.pos.y,
                atom.pos.z,
                1.0,
                0.0
            ));
            serial += 1;
        }
    }
    lines.push("END".to_string());
    lines.join("\n")
}

#[test]
fn consecutive_four_turns_form_alpha_helix() {
    let ids: Vec<i32> = (1..=12).collect();
    let chain = chain_with_bonds(&ids, &[(1, 5), (2, 6), (3, 7), (4, 8)], &[]);

    assert_eq!(assign(&chain), "THHHHHHHCCCC");
}

#[test]
fn antiparallel_ladder_becomes_contiguous_strands() {
    let ids: Vec<i32> = (1..=12).collect();
    let chain = chain_with_bonds(&ids, &[(1, 12), (3, 10), (5, 8)], &[]);

    assert_eq!(assign(&chain), "bbbbbCCbbbbb");
}

#[test]
fn parallel_ladder_becomes_contiguous_strands() {
    let ids: Vec<i32> = (1..=12).collect();
    let chain = chain_with_bonds(&ids, &[(1, 6), (3, 8), (5, 10)], &[]);

    assert_eq!(assign(&chain), "BBBBBBBBBBCC");
}

#[test]
fn proline_never_accepts_and_turns_are_extended() {
    let ids: Vec<i32> = (1..=12).collect();
    let chain = chain_with_bonds(&ids, &[(1, 5), (2, 6), (3, 7), (4, 8)], &[5]);

    let bonds = find_hbonds(&chain, &EnergyModel::default());
    let pairs: Vec<(i32, i32)> = bonds.iter().map(|b| (b.donor, b.acceptor)).collect();
    assert_eq!(pairs, vec![(2, 6), (3, 7), (4, 8)]);

    assert_eq!(assign(&chain), "CTTTTTHHCCCC");
}

#[test]
fn every_present_residue_gets_exactly_one_record() {
    let ids: Vec<i32> = (1..=12).filter(|&id| id != 10).collect();
    let chain = chain_with_bonds(&ids, &[(1, 5), (2, 6), (3, 7), (4, 8)], &[]);

    let assignment = assign_secondary_structure(&chain, &AssignConfig::default()).unwrap();

    let record_ids: Vec<i32> = assignment.iter().map(|r| r.id).collect();
    assert_eq!(record_ids, ids);
    assert_eq!(assignment.labels(), "THHHHHHHCCC");
}

#[test]
fn short_chain_is_all_coil() {
    let chain = chain_with_bonds(&[1, 2, 3, 4], &[(1, 4)], &[]);

    let assignment = assign_secondary_structure(&chain, &AssignConfig::default()).unwrap();

    assert_eq!(assignment.labels(), "CCCC");
    assert_eq!(assignment.fraction(SecondaryStructure::Coil), 1.0);
}

#[test]
fn repeated_runs_are_identical() {
    let ids: Vec<i32> = (1..=30).collect();
    let chain = chain_with_bonds(
        &ids,
        &[(1, 5), (2, 6), (3, 7), (4, 8), (12, 25), (14, 23), (16, 21)],
        &[9],
    );

    let first = assign_secondary_structure(&chain, &AssignConfig::default()).unwrap();
    let second = assign_secondary_structure(&chain, &AssignConfig::default()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn stricter_cutoff_removes_bonds() {
    let ids: Vec<i32> = (1..=12).collect();
    let chain = chain_with_bonds(&ids, &[(1, 5), (2, 6), (3, 7), (4, 8)], &[]);
    let config = AssignConfig::from_toml_str("[energy]\ncutoff = -5.0").unwrap();

    let assignment = assign_secondary_structure(&chain, &config).unwrap();

    assert_eq!(assignment.labels(), "CCCCCCCCCCCC");
}

#[test]
fn pdb_text_round_trips_into_the_same_assignment() {
    let ids: Vec<i32> = (1..=12).collect();
    let chain = chain_with_bonds(&ids, &[(1, 5), (2, 6), (3, 7), (4, 8)], &[]);
    let pdb = to_pdb(&chain);

    let structure = read_pdb_structure(Cursor::new(pdb), &IoContext::new_default()).unwrap();
    let parsed = structure.chain("A").unwrap();
    let assignment = assign_secondary_structure(parsed, &AssignConfig::default()).unwrap();

    assert_eq!(assignment.labels(), "THHHHHHHCCCC");

    let mut out = Vec::new();
    write_assignment_text(&mut out, &assignment, None).unwrap();
    let text = String::from_utf8(out).unwrap();
    let first = text.lines().next().unwrap();
    assert_eq!(first, "1      ALA    T     ");
    assert_eq!(text.lines().count(), 12);
}
