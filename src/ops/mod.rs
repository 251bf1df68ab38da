//! Secondary-structure assignment pipeline and chain preparation helpers.
//!
//! Each stage lives in its own submodule and consumes the output of the previous one:
//! hydrogen-bond detection and deduplication (`hbond`), pattern classification
//! (`pattern`), projection onto residues (`build`), and neighborhood refinement
//! (`refine`). `assign_secondary_structure` chains them together. All stages share a
//! common error type.

mod assign;
mod backbone;
mod build;
mod error;
mod hbond;
mod pattern;
mod refine;

pub use assign::{AssignConfig, assign_secondary_structure};

pub use backbone::{AMIDE_NH_LENGTH, place_amide_hydrogens};

pub use hbond::{
    BondLabel, DIMENSIONAL_FACTOR, EnergyModel, HBOND_ENERGY_CUTOFF, HBond, HBondList,
    MIN_SEQUENCE_SEPARATION, Q1Q2, deduplicate, find_hbonds,
};

pub use pattern::{
    HelixOptions, TURN_SPANS, classify, classify_helices, classify_sheets, classify_turns,
};

pub use build::{LABEL_PRIORITY, build_structure};

pub use refine::{GAP_CLOSING_ORDER, close_gaps, extend_turns, refine_structure};

pub use error::Error;
