//! End-to-end secondary-structure assignment for a single chain.
//!
//! The pipeline is strictly linear: bond detection, per-donor deduplication, turn/helix/sheet
//! classification, projection onto residues, and neighborhood refinement. Only the first
//! stage runs in parallel; every later stage reads the fully materialized output of the
//! previous one.

use crate::model::assignment::Assignment;
use crate::model::chain::Chain;
use crate::ops::build::build_structure;
use crate::ops::error::Error;
use crate::ops::hbond::{EnergyModel, deduplicate, find_hbonds};
use crate::ops::pattern::{HelixOptions, classify};
use crate::ops::refine::refine_structure;
use log::info;
use serde::Deserialize;

/// Tunable parameters of the assignment pipeline.
///
/// The defaults reproduce the classical model. A configuration can also be read from TOML:
///
/// ```toml
/// pi_helix_pairs = false
///
/// [energy]
/// q1q2 = 0.084
/// dimensional_factor = 332.0
/// cutoff = -0.5
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct AssignConfig {
    /// Bond-energy parameters.
    pub energy: EnergyModel,
    /// Label both bonds of a matched 5-turn pair as pi helix.
    pub pi_helix_pairs: bool,
}

impl AssignConfig {
    /// Parses and validates a TOML configuration document.
    ///
    /// Missing keys fall back to their defaults; unknown keys are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] when the document is malformed or the energy
    /// parameters fail validation.
    pub fn from_toml_str(content: &str) -> Result<Self, Error> {
        let config: AssignConfig =
            toml::from_str(content).map_err(|e| Error::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.energy.validate()
    }

    fn helix_options(&self) -> HelixOptions {
        HelixOptions {
            pi_helix_pairs: self.pi_helix_pairs,
        }
    }
}

/// Assigns a secondary-structure label to every residue of `chain`.
///
/// The chain is only read. Residues missing backbone atoms, proline acceptors, and
/// numbering gaps are tolerated silently; a chain too short to form any bond yields an
/// all-coil assignment.
///
/// # Arguments
///
/// * `chain` - Chain whose residues expose `N`, `H`, `C`, and `O` coordinates.
/// * `config` - Pipeline parameters.
///
/// # Returns
///
/// One record per residue present in the chain, in ascending sequence-index order.
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] when `config` fails validation.
pub fn assign_secondary_structure(
    chain: &Chain,
    config: &AssignConfig,
) -> Result<Assignment, Error> {
    config.validate()?;

    let candidates = find_hbonds(chain, &config.energy);
    let mut bonds = deduplicate(candidates);
    classify(&mut bonds, config.helix_options());

    let mut assignment = build_structure(chain, &bonds);
    refine_structure(&mut assignment);

    info!(
        "Assigned chain '{}': {} residues, {} hydrogen bonds",
        chain.id,
        assignment.len(),
        bonds.len()
    );
    Ok(assignment)
}
