//! Backbone preparation helpers.
//!
//! Crystallographic models rarely carry hydrogens, and without the amide `H` no residue can
//! act as a bond acceptor. The helper below rebuilds the amide hydrogen from the preceding
//! peptide bond so such files can still be assigned.

use crate::model::atom::Atom;
use crate::model::chain::Chain;
use crate::model::types::Point;
use log::debug;

/// N–H bond length in ångströms used when placing amide hydrogens.
pub const AMIDE_NH_LENGTH: f64 = 1.0;

/// Adds an amide `H` to every residue that lacks one.
///
/// The hydrogen is placed along the direction of the preceding residue's `C=O` bond,
/// reversed: `H = N + (C₋₁ − O₋₁) / |C₋₁ − O₋₁| · 1.0 Å`. Prolines, residues whose
/// predecessor (`id - 1`) is absent, and residues missing any of the required atoms are left
/// untouched.
///
/// # Arguments
///
/// * `chain` - Chain to update in place.
///
/// # Returns
///
/// Number of hydrogens placed.
pub fn place_amide_hydrogens(chain: &mut Chain) -> usize {
    let placements: Vec<(i32, Point)> = chain
        .iter_residues()
        .filter(|r| !r.is_proline() && !r.has_atom("H"))
        .filter_map(|residue| {
            let n = residue.atom("N")?.pos;
            let prev = chain.residue(residue.id - 1)?;
            let c = prev.atom("C")?.pos;
            let o = prev.atom("O")?.pos;
            let direction = (c - o).try_normalize(f64::EPSILON)?;
            Some((residue.id, n + direction * AMIDE_NH_LENGTH))
        })
        .collect();

    for (id, pos) in &placements {
        if let Some(residue) = chain.residue_mut(*id) {
            residue.add_atom(Atom::new("H", *pos));
        }
    }

    debug!(
        "Placed {} amide hydrogens on chain '{}'",
        placements.len(),
        chain.id
    );
    placements.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::residue::Residue;
    use crate::model::types::StandardResidue;

    fn residue(id: i32, standard: StandardResidue, atoms: &[(&str, Point)]) -> Residue {
        let mut residue = Residue::new(id, &standard.to_string(), Some(standard));
        for (name, pos) in atoms {
            residue.add_atom(Atom::new(name, *pos));
        }
        residue
    }

    #[test]
    fn places_hydrogen_opposite_previous_carbonyl() {
        let mut chain = Chain::new("A");
        chain.add_residue(residue(
            1,
            StandardResidue::ALA,
            &[
                ("C", Point::new(0.0, 0.0, 0.0)),
                ("O", Point::new(0.0, 1.23, 0.0)),
            ],
        ));
        chain.add_residue(residue(
            2,
            StandardResidue::GLY,
            &[("N", Point::new(1.33, 0.0, 0.0))],
        ));

        let placed = place_amide_hydrogens(&mut chain);

        assert_eq!(placed, 1);
        let h = chain.residue(2).unwrap().atom("H").unwrap();
        assert!((h.pos - Point::new(1.33, -1.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn skips_proline_first_residue_and_existing_hydrogens() {
        let carbonyl = [
            ("C", Point::new(0.0, 0.0, 0.0)),
            ("O", Point::new(0.0, 1.23, 0.0)),
            ("N", Point::new(-1.0, 0.0, 0.0)),
        ];
        let mut chain = Chain::new("A");
        chain.add_residue(residue(1, StandardResidue::ALA, &carbonyl));
        chain.add_residue(residue(2, StandardResidue::PRO, &carbonyl));
        chain.add_residue(residue(
            3,
            StandardResidue::ALA,
            &[
                ("N", Point::new(1.0, 0.0, 0.0)),
                ("H", Point::new(1.0, 1.0, 0.0)),
            ],
        ));

        assert_eq!(place_amide_hydrogens(&mut chain), 0);
        assert!(chain.residue(1).unwrap().atom("H").is_none());
        assert!(chain.residue(2).unwrap().atom("H").is_none());
    }

    #[test]
    fn skips_residues_after_numbering_gap() {
        let mut chain = Chain::new("A");
        chain.add_residue(residue(
            1,
            StandardResidue::ALA,
            &[
                ("C", Point::new(0.0, 0.0, 0.0)),
                ("O", Point::new(0.0, 1.23, 0.0)),
            ],
        ));
        chain.add_residue(residue(
            3,
            StandardResidue::ALA,
            &[("N", Point::new(1.33, 0.0, 0.0))],
        ));

        assert_eq!(place_amide_hydrogens(&mut chain), 0);
    }
}
