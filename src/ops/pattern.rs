//! Turn, helix, and sheet recognition over a deduplicated bond list.
//!
//! The three passes run in a fixed order. The turn pass assigns every bond either `T` or
//! `C`; the helix pass promotes runs of matching turns at consecutive donors; the sheet pass
//! overwrites bond pairs whose donors and acceptors both step by two. Each pass reads the
//! labels written by the previous one, so they cannot be reordered.

use crate::model::types::SecondaryStructure;
use crate::ops::hbond::{BondLabel, HBond, HBondList};
use log::debug;

/// Bond spans recognized as 3-, 4-, and 5-turns.
pub const TURN_SPANS: [i32; 3] = [3, 4, 5];

const ALPHA_SPAN: i32 = 4;
const THREE_TEN_SPAN: i32 = 3;
const PI_SPAN: i32 = 5;
const STRAND_STEP: i32 = 2;

/// Switches for the helix pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HelixOptions {
    /// Label the successor of a matched 5-turn as `I` too, mirroring the 3- and 4-turn
    /// branches. Off by default: only the matched bond itself becomes `I`.
    pub pi_helix_pairs: bool,
}

fn class(ss: SecondaryStructure) -> BondLabel {
    BondLabel::Class(ss)
}

/// Labels bonds spanning 3, 4, or 5 residues as turns and everything else as coil.
pub fn classify_turns(bonds: &mut HBondList) {
    for bond in bonds.as_mut_slice() {
        bond.label = if TURN_SPANS.contains(&bond.span()) {
            class(SecondaryStructure::Turn)
        } else {
            class(SecondaryStructure::Coil)
        };
    }
}

/// Promotes consecutive turns into helices.
///
/// Every bond except the first and last of the list is compared with its list neighbors.
/// A neighbor matches when its donor is exactly one residue away in the scan direction and
/// it carries the same label. On a match the bond's span decides the class: span 4 labels
/// the bond and its successor `H`, span 3 labels both `G`, span 5 labels the bond `I`.
/// Labels are updated in place, so a bond relabeled through its predecessor is compared
/// with that new label.
pub fn classify_helices(bonds: &mut HBondList, options: HelixOptions) {
    let slice = bonds.as_mut_slice();
    if slice.len() < 3 {
        return;
    }

    for k in 1..slice.len() - 1 {
        if !matches_neighbor(slice, k) {
            continue;
        }
        match slice[k].span() {
            ALPHA_SPAN => label_pair(slice, k, SecondaryStructure::AlphaHelix),
            THREE_TEN_SPAN => label_pair(slice, k, SecondaryStructure::ThreeTenHelix),
            PI_SPAN if options.pi_helix_pairs => {
                label_pair(slice, k, SecondaryStructure::PiHelix)
            }
            PI_SPAN => slice[k].label = class(SecondaryStructure::PiHelix),
            _ => {}
        }
    }
}

fn matches_neighbor(slice: &[HBond], k: usize) -> bool {
    let this = &slice[k];
    let next = &slice[k + 1];
    let prev = &slice[k - 1];
    (next.donor - this.donor == 1 && next.label == this.label)
        || (this.donor - prev.donor == 1 && prev.label == this.label)
}

fn label_pair(slice: &mut [HBond], k: usize, ss: SecondaryStructure) {
    slice[k].label = class(ss);
    slice[k + 1].label = class(ss);
}

/// Marks adjacent bond pairs forming strand ladders.
///
/// When both donor and acceptor advance by two the pair is labeled `B` (parallel-like);
/// when the donor advances by two and the acceptor recedes by two the pair is labeled `b`
/// (antiparallel-like). Other pairs keep their labels.
pub fn classify_sheets(bonds: &mut HBondList) {
    let slice = bonds.as_mut_slice();

    for k in 0..slice.len().saturating_sub(1) {
        let donor_step = slice[k + 1].donor - slice[k].donor;
        let acceptor_step = slice[k + 1].acceptor - slice[k].acceptor;
        if donor_step != STRAND_STEP {
            continue;
        }
        if acceptor_step == STRAND_STEP {
            label_pair(slice, k, SecondaryStructure::ParallelStrand);
        } else if acceptor_step == -STRAND_STEP {
            label_pair(slice, k, SecondaryStructure::AntiparallelStrand);
        }
    }
}

/// Runs the turn, helix, and sheet passes in order.
pub fn classify(bonds: &mut HBondList, options: HelixOptions) {
    classify_turns(bonds);
    classify_helices(bonds, options);
    classify_sheets(bonds);

    if log::log_enabled!(log::Level::Debug) {
        let summary: String = bonds
            .iter()
            .filter_map(|b| b.structure())
            .map(|ss| ss.code())
            .collect();
        debug!("Bond classes after pattern passes: {summary}");
    }
}
