//! Projection of classified bonds onto per-residue structure records.

use crate::model::assignment::{Assignment, ResidueStructure};
use crate::model::chain::Chain;
use crate::model::types::SecondaryStructure;
use crate::ops::hbond::HBondList;
use log::debug;

/// Order in which bond classes are written onto residues; later entries overwrite earlier
/// ones, so a residue touched by several classes keeps the last one applied.
pub const LABEL_PRIORITY: [SecondaryStructure; 6] = [
    SecondaryStructure::Turn,
    SecondaryStructure::AlphaHelix,
    SecondaryStructure::ThreeTenHelix,
    SecondaryStructure::PiHelix,
    SecondaryStructure::ParallelStrand,
    SecondaryStructure::AntiparallelStrand,
];

/// Builds one coil-initialized record per residue present in `chain` and paints the donor
/// and acceptor residues of every classified bond following [`LABEL_PRIORITY`].
///
/// Bond endpoints that do not correspond to a present residue are ignored; numbering gaps
/// never appear in the result.
pub fn build_structure(chain: &Chain, bonds: &HBondList) -> Assignment {
    let records = chain
        .residues_by_index()
        .into_iter()
        .map(|r| ResidueStructure::new(r.id, &r.name, SecondaryStructure::Coil))
        .collect();
    let mut assignment = Assignment::new(&chain.id, records);

    for ss in LABEL_PRIORITY {
        let mut painted = 0usize;
        for bond in bonds.iter().filter(|b| b.structure() == Some(ss)) {
            for id in [bond.donor, bond.acceptor] {
                if let Some(position) = assignment.position_of(id) {
                    assignment.set_label_at(position, ss);
                    painted += 1;
                }
            }
        }
        if painted > 0 {
            debug!("Applied {} '{}' labels to chain '{}'", painted, ss, chain.id);
        }
    }

    assignment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::residue::Residue;
    use crate::model::types::StandardResidue;
    use crate::ops::hbond::{BondLabel, HBond};
    use SecondaryStructure::*;

    fn chain(ids: &[i32]) -> Chain {
        let mut chain = Chain::new("A");
        for &id in ids {
            chain.add_residue(Residue::new(id, "GLY", Some(StandardResidue::GLY)));
        }
        chain
    }

    fn labeled(bonds: &[(i32, i32, SecondaryStructure)]) -> HBondList {
        let bonds = bonds
            .iter()
            .map(|&(d, a, ss)| HBond {
                label: BondLabel::Class(ss),
                ..HBond::new(d, a, -1.0)
            })
            .collect::<Vec<_>>();
        HBondList::try_from(bonds).unwrap()
    }

    #[test]
    fn residues_default_to_coil() {
        let assignment = build_structure(&chain(&[1, 2, 3]), &HBondList::default());

        assert_eq!(assignment.labels(), "CCC");
        assert_eq!(assignment.chain_id, "A");
    }

    #[test]
    fn donor_and_acceptor_receive_bond_label() {
        let assignment =
            build_structure(&chain(&[1, 2, 3, 4, 5]), &labeled(&[(1, 4, Turn)]));

        assert_eq!(assignment.labels(), "TCCTC");
    }

    #[test]
    fn coil_bonds_do_not_paint_residues() {
        let assignment = build_structure(
            &chain(&[1, 2, 3, 4, 5, 6, 7]),
            &labeled(&[(1, 7, Coil)]),
        );

        assert_eq!(assignment.labels(), "CCCCCCC");
    }

    #[test]
    fn later_priority_wins_regardless_of_bond_order() {
        // Residue 5 is touched by a strand bond first and a helix bond second.
        let bonds = labeled(&[
            (1, 5, AntiparallelStrand),
            (2, 6, Turn),
            (5, 9, AlphaHelix),
        ]);

        let assignment = build_structure(&chain(&(1..=9).collect::<Vec<_>>()), &bonds);

        assert_eq!(assignment.labels(), "bTCCbTCCH");
    }

    #[test]
    fn priority_list_is_applied_in_order() {
        let ids: Vec<i32> = (1..=20).collect();
        let bonds = labeled(&[
            (1, 4, PiHelix),
            (4, 8, ThreeTenHelix),
            (8, 12, ParallelStrand),
            (12, 16, AlphaHelix),
        ]);

        let assignment = build_structure(&chain(&ids), &bonds);

        assert_eq!(assignment.label_at(0), Some(PiHelix));
        assert_eq!(assignment.label_at(3), Some(PiHelix));
        assert_eq!(assignment.label_at(7), Some(ParallelStrand));
        assert_eq!(assignment.label_at(11), Some(ParallelStrand));
        assert_eq!(assignment.label_at(15), Some(AlphaHelix));
    }

    #[test]
    fn gaps_are_not_padded_or_targeted() {
        let assignment = build_structure(
            &chain(&[1, 2, 4, 5]),
            &labeled(&[(1, 4, Turn), (2, 6, Turn)]),
        );

        let ids: Vec<i32> = assignment.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 5]);
        assert_eq!(assignment.labels(), "TTTC");
    }

    #[test]
    fn records_follow_ascending_index_order() {
        let assignment = build_structure(&chain(&[3, 1, 2]), &HBondList::default());

        let ids: Vec<i32> = assignment.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(assignment.iter().all(|r| r.name == "GLY"));
    }
}
