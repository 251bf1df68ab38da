//! Neighborhood rules applied to a built assignment.
//!
//! Both rules address residues by record position rather than by sequence index, so a
//! numbering gap in the source chain does not break a run.

use crate::model::assignment::Assignment;
use crate::model::types::SecondaryStructure;
use crate::ops::pattern::TURN_SPANS;
use log::debug;

/// Labels whose single-residue interruptions are closed, in application order.
pub const GAP_CLOSING_ORDER: [SecondaryStructure; 5] = [
    SecondaryStructure::ParallelStrand,
    SecondaryStructure::AntiparallelStrand,
    SecondaryStructure::AlphaHelix,
    SecondaryStructure::ThreeTenHelix,
    SecondaryStructure::PiHelix,
];

/// Closes one-residue gaps and extends turn regions in place.
pub fn refine_structure(assignment: &mut Assignment) {
    let before = assignment.labels();

    for ss in GAP_CLOSING_ORDER {
        close_gaps(assignment, ss);
    }
    extend_turns(assignment);

    if log::log_enabled!(log::Level::Debug) {
        let changed = before
            .chars()
            .zip(assignment.labels().chars())
            .filter(|(a, b)| a != b)
            .count();
        debug!(
            "Refinement relabeled {} of {} residues in chain '{}'",
            changed,
            assignment.len(),
            assignment.chain_id
        );
    }
}

/// Sets every interior position whose two neighbors carry `ss` to `ss`.
pub fn close_gaps(assignment: &mut Assignment, ss: SecondaryStructure) {
    for p in 1..assignment.len().saturating_sub(1) {
        if assignment.label_at(p - 1) == Some(ss) && assignment.label_at(p + 1) == Some(ss) {
            assignment.set_label_at(p, ss);
        }
    }
}

/// Fills the positions between two turn residues that are 3, 4, or 5 positions apart.
pub fn extend_turns(assignment: &mut Assignment) {
    let turn = Some(SecondaryStructure::Turn);

    for p in 0..assignment.len() {
        for k in TURN_SPANS {
            let end = p + k as usize;
            if assignment.label_at(p) == turn && assignment.label_at(end) == turn {
                for q in p + 1..end {
                    assignment.set_label_at(q, SecondaryStructure::Turn);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::assignment::ResidueStructure;

    fn assignment(codes: &str) -> Assignment {
        let records = codes
            .chars()
            .enumerate()
            .map(|(i, c)| {
                ResidueStructure::new(i as i32 + 1, "ALA", SecondaryStructure::try_from(c).unwrap())
            })
            .collect();
        Assignment::new("A", records)
    }

    fn refined(codes: &str) -> String {
        let mut a = assignment(codes);
        refine_structure(&mut a);
        a.labels()
    }

    #[test]
    fn closes_single_residue_strand_gap() {
        assert_eq!(refined("CBCBC"), "CBBBC");
    }

    #[test]
    fn closes_single_residue_helix_gap() {
        assert_eq!(refined("HCH"), "HHH");
        assert_eq!(refined("GCG"), "GGG");
        assert_eq!(refined("ICI"), "III");
        assert_eq!(refined("bCb"), "bbb");
    }

    #[test]
    fn gap_closing_overwrites_any_interior_label() {
        assert_eq!(refined("HTH"), "HHH");
        assert_eq!(refined("bBb"), "bbb");
    }

    #[test]
    fn gap_closing_cascades_left_to_right() {
        assert_eq!(refined("BCBCB"), "BBBBB");
    }

    #[test]
    fn two_residue_gaps_stay_open() {
        assert_eq!(refined("HCCH"), "HCCH");
    }

    #[test]
    fn turn_closing_is_not_a_gap_rule() {
        assert_eq!(refined("TCT"), "TCT");
    }

    #[test]
    fn turns_four_apart_are_filled() {
        assert_eq!(refined("CTCCCTC"), "CTTTTTC");
    }

    #[test]
    fn turns_three_and_five_apart_are_filled() {
        assert_eq!(refined("TCCT"), "TTTT");
        assert_eq!(refined("TCCCCT"), "TTTTTT");
    }

    #[test]
    fn turns_six_apart_are_not_joined() {
        assert_eq!(refined("TCCCCCT"), "TCCCCCT");
    }

    #[test]
    fn turn_extension_near_end_is_safe() {
        assert_eq!(refined("CCT"), "CCT");
        assert_eq!(refined("T"), "T");
    }

    #[test]
    fn turn_extension_overwrites_interior_labels() {
        assert_eq!(refined("THCT"), "TTTT");
    }

    #[test]
    fn empty_assignment_is_untouched() {
        assert_eq!(refined(""), "");
    }

    #[test]
    fn numbering_gaps_do_not_break_runs() {
        let records = vec![
            ResidueStructure::new(1, "ALA", SecondaryStructure::AlphaHelix),
            ResidueStructure::new(2, "ALA", SecondaryStructure::Coil),
            ResidueStructure::new(9, "ALA", SecondaryStructure::AlphaHelix),
        ];
        let mut a = Assignment::new("A", records);

        refine_structure(&mut a);

        assert_eq!(a.labels(), "HHH");
    }
}
