//! # SS-Forge
//!
//! **SS-Forge** assigns protein secondary structure from backbone geometry. It evaluates the electrostatic energy of every backbone `C=O···H-N` pair, keeps the strongest bond per donor, classifies bond patterns into turns, helices, and β-strands, and projects the result onto residues as one-letter labels.
//!
//! ## Features
//!
//! - **Electrostatic bond model** – A tunable `EnergyModel` (classical constants by default, overridable from TOML) scores and filters candidate hydrogen bonds, scanning donors in parallel when the `parallel` feature is enabled.
//! - **Ordered bond pipeline** – `HBondList` keeps bonds sorted by `(donor, acceptor)` so deduplication and pattern classification are deterministic.
//! - **Residue-level assignment** – `Assignment` records one `SecondaryStructure` label per residue and offers composition and segment queries.
//! - **PDB ingestion** – A buffered PDB reader normalizes residue aliases, resolves alternate locations, and reports precise diagnostics; `place_amide_hydrogens` rebuilds missing backbone `H` atoms.
//! - **Report output** – Text and JSON writers render assignments for humans and downstream tools.

mod model;
mod utils;

pub mod io;
pub mod ops;

pub use model::assignment::{Assignment, ResidueStructure, Segment};
pub use model::atom::Atom;
pub use model::chain::Chain;
pub use model::residue::Residue;
pub use model::structure::Structure;
pub use model::types::{Point, SecondaryStructure, StandardResidue};
