//! Backbone hydrogen-bond detection and per-donor deduplication.
//!
//! Bond energies follow the fixed-charge electrostatic model
//! `E = q1q2 · F · (1/r(ON) + 1/r(CH) − 1/r(OH) − 1/r(CN))` between the carbonyl group
//! (O, C) of a donor residue `i` and the amide group (N, H) of an acceptor residue `j > i`.
//! The resulting [`HBondList`] keeps bonds grouped by donor in ascending order, which is the
//! ordering every later pipeline stage relies on.

use crate::model::chain::Chain;
use crate::model::types::{Point, SecondaryStructure};
use crate::ops::error::Error;
use crate::utils::parallel::*;
use log::{debug, trace};
use serde::Deserialize;

/// Product of the partial charges on the carbonyl oxygen (−0.42e) and amide hydrogen (+0.20e).
pub const Q1Q2: f64 = 0.084;
/// Dimensional factor converting the charge term into kcal/mol.
pub const DIMENSIONAL_FACTOR: f64 = 332.0;
/// Energies strictly below this value (kcal/mol) count as hydrogen bonds.
pub const HBOND_ENERGY_CUTOFF: f64 = -0.5;
/// Smallest allowed `acceptor - donor` distance in sequence.
pub const MIN_SEQUENCE_SEPARATION: i32 = 3;

/// Donor positions run from the first position up to `N - 4`.
const DONOR_TAIL_EXCLUSION: i32 = 4;

/// Electrostatic parameters of the bond-energy model.
///
/// The defaults are the classical constants; they can be overridden through the
/// `[energy]` table of an assignment configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct EnergyModel {
    /// Partial-charge product `q1 · q2`.
    pub q1q2: f64,
    /// Dimensional factor `F`.
    pub dimensional_factor: f64,
    /// Strict upper bound on the energy of a recorded bond.
    pub cutoff: f64,
}

impl Default for EnergyModel {
    fn default() -> Self {
        Self {
            q1q2: Q1Q2,
            dimensional_factor: DIMENSIONAL_FACTOR,
            cutoff: HBOND_ENERGY_CUTOFF,
        }
    }
}

impl EnergyModel {
    /// Electrostatic interaction energy between a donor carbonyl and an acceptor amide.
    ///
    /// # Arguments
    ///
    /// * `o`, `c` - Donor carbonyl oxygen and carbon.
    /// * `n`, `h` - Acceptor amide nitrogen and hydrogen.
    pub fn energy(&self, o: &Point, c: &Point, n: &Point, h: &Point) -> f64 {
        let inv = |a: &Point, b: &Point| 1.0 / nalgebra::distance(a, b);
        self.q1q2 * self.dimensional_factor * (inv(o, n) + inv(c, h) - inv(o, h) - inv(c, n))
    }

    pub fn is_bond(&self, energy: f64) -> bool {
        energy < self.cutoff
    }

    /// Rejects parameter sets that cannot describe an attractive interaction.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.q1q2.is_finite() || self.q1q2 <= 0.0 {
            return Err(Error::invalid_config(format!(
                "q1q2 must be a positive number, got {}",
                self.q1q2
            )));
        }
        if !self.dimensional_factor.is_finite() || self.dimensional_factor <= 0.0 {
            return Err(Error::invalid_config(format!(
                "dimensional_factor must be a positive number, got {}",
                self.dimensional_factor
            )));
        }
        if !self.cutoff.is_finite() || self.cutoff >= 0.0 {
            return Err(Error::invalid_config(format!(
                "cutoff must be a negative number, got {}",
                self.cutoff
            )));
        }
        Ok(())
    }
}

/// Processing state of a candidate bond.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BondLabel {
    /// Emitted by the evaluator and not yet deduplicated.
    Kept,
    /// Lost against a stronger bond from the same donor.
    Discarded,
    /// Survived deduplication, awaiting pattern classification.
    Unclassified,
    /// Structural class assigned by the pattern passes.
    Class(SecondaryStructure),
}

/// Candidate backbone hydrogen bond between a donor `i` and an acceptor `j`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HBond {
    pub donor: i32,
    pub acceptor: i32,
    /// Interaction energy in kcal/mol; more negative is stronger.
    pub energy: f64,
    pub label: BondLabel,
}

impl HBond {
    pub fn new(donor: i32, acceptor: i32, energy: f64) -> Self {
        Self {
            donor,
            acceptor,
            energy,
            label: BondLabel::Kept,
        }
    }

    /// Sequence distance `acceptor - donor`.
    pub fn span(&self) -> i32 {
        self.acceptor - self.donor
    }

    /// Structural class once the bond has been classified.
    pub fn structure(&self) -> Option<SecondaryStructure> {
        match self.label {
            BondLabel::Class(ss) => Some(ss),
            _ => None,
        }
    }
}

/// Ordered sequence of hydrogen bonds.
///
/// Invariant: bonds are grouped by donor in ascending order, acceptors ascend strictly
/// within a donor group, and every bond spans at least [`MIN_SEQUENCE_SEPARATION`].
/// [`find_hbonds`] guarantees it by construction; [`TryFrom<Vec<HBond>>`] checks it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HBondList {
    bonds: Vec<HBond>,
}

impl HBondList {
    fn from_ordered(bonds: Vec<HBond>) -> Self {
        debug_assert!(
            Self::check_order(&bonds).is_ok(),
            "hydrogen bonds must be grouped by ascending donor"
        );
        Self { bonds }
    }

    fn check_order(bonds: &[HBond]) -> Result<(), Error> {
        for (position, bond) in bonds.iter().enumerate() {
            if bond.span() < MIN_SEQUENCE_SEPARATION {
                return Err(Error::invalid_bond_span(
                    bond.donor,
                    bond.acceptor,
                    MIN_SEQUENCE_SEPARATION,
                ));
            }
            if position == 0 {
                continue;
            }
            let prev = &bonds[position - 1];
            if (prev.donor, prev.acceptor) >= (bond.donor, bond.acceptor) {
                return Err(Error::unordered_bonds(
                    position,
                    (prev.donor, prev.acceptor),
                    (bond.donor, bond.acceptor),
                ));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.bonds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bonds.is_empty()
    }

    pub fn as_slice(&self) -> &[HBond] {
        &self.bonds
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HBond> {
        self.bonds.iter()
    }

    /// Mutable view for relabeling; donor and acceptor fields must stay untouched.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [HBond] {
        &mut self.bonds
    }

    pub fn into_vec(self) -> Vec<HBond> {
        self.bonds
    }
}

impl TryFrom<Vec<HBond>> for HBondList {
    type Error = Error;

    fn try_from(bonds: Vec<HBond>) -> Result<Self, Self::Error> {
        Self::check_order(&bonds)?;
        Ok(Self { bonds })
    }
}

impl<'a> IntoIterator for &'a HBondList {
    type Item = &'a HBond;
    type IntoIter = std::slice::Iter<'a, HBond>;

    fn into_iter(self) -> Self::IntoIter {
        self.bonds.iter()
    }
}

#[derive(Debug, Clone, Copy)]
struct Backbone {
    o: Option<Point>,
    c: Option<Point>,
    n: Option<Point>,
    h: Option<Point>,
    accepts: bool,
}

/// Backbone coordinates indexed by `id - lo`; `None` marks numbering gaps.
fn backbone_table(chain: &Chain, lo: i32, hi: i32) -> Vec<Option<Backbone>> {
    let mut table = vec![None; (hi - lo + 1) as usize];
    for residue in chain.iter_residues() {
        let pos = |name: &str| residue.atom(name).map(|a| a.pos);
        table[(residue.id - lo) as usize] = Some(Backbone {
            o: pos("O"),
            c: pos("C"),
            n: pos("N"),
            h: pos("H"),
            accepts: !residue.is_proline(),
        });
    }
    table
}

/// Computes every candidate hydrogen bond of a chain.
///
/// Positions span the lowest to the highest sequence index present. Donors run over the
/// first `N - 4` positions and acceptors over `donor + 3 ..= N`. Pairs are skipped when the
/// acceptor is a proline or when any of donor O/C or acceptor N/H is unavailable, including
/// positions absent from the chain.
///
/// # Arguments
///
/// * `chain` - Source chain; never modified.
/// * `model` - Energy parameters and cutoff.
///
/// # Returns
///
/// Bonds labeled [`BondLabel::Kept`], grouped by ascending donor and ascending acceptor.
pub fn find_hbonds(chain: &Chain, model: &EnergyModel) -> HBondList {
    let Some((lo, hi)) = chain.index_span() else {
        return HBondList::default();
    };
    let last_donor = hi - DONOR_TAIL_EXCLUSION;
    if last_donor < lo {
        debug!(
            "Chain '{}' is too short to form hydrogen bonds ({} positions)",
            chain.id,
            hi - lo + 1
        );
        return HBondList::default();
    }

    let table = backbone_table(chain, lo, hi);

    let per_donor: Vec<Vec<HBond>> = (lo..=last_donor)
        .into_par_iter()
        .map(|donor| donor_bonds(&table, lo, hi, donor, model))
        .collect();
    let bonds: Vec<HBond> = per_donor.into_iter().flatten().collect();

    debug!(
        "Chain '{}': {} candidate hydrogen bonds over {} positions",
        chain.id,
        bonds.len(),
        hi - lo + 1
    );
    HBondList::from_ordered(bonds)
}

fn donor_bonds(
    table: &[Option<Backbone>],
    lo: i32,
    hi: i32,
    donor: i32,
    model: &EnergyModel,
) -> Vec<HBond> {
    let slot = |id: i32| table[(id - lo) as usize].as_ref();

    let Some((o, c)) = slot(donor).and_then(|bb| Some((bb.o?, bb.c?))) else {
        trace!("Position {donor}: no carbonyl O/C available, skipping as donor");
        return Vec::new();
    };

    ((donor + MIN_SEQUENCE_SEPARATION)..=hi)
        .filter_map(|acceptor| {
            let bb = slot(acceptor)?;
            if !bb.accepts {
                trace!("Pair ({donor}, {acceptor}): proline acceptor skipped");
                return None;
            }
            let (Some(n), Some(h)) = (bb.n, bb.h) else {
                trace!("Pair ({donor}, {acceptor}): acceptor amide N/H unavailable");
                return None;
            };
            let energy = model.energy(&o, &c, &n, &h);
            model
                .is_bond(energy)
                .then(|| HBond::new(donor, acceptor, energy))
        })
        .collect()
}

/// Keeps at most one bond per donor, the one with the most negative energy.
///
/// Candidates sharing a donor are adjacent in the list. Within a group the running winner
/// is compared against each following candidate; ties go to the later candidate. The first
/// bond of the list has no predecessor and is never compared against another group.
/// Losers are marked [`BondLabel::Discarded`] and removed; survivors keep their relative
/// order and are relabeled [`BondLabel::Unclassified`].
pub fn deduplicate(mut bonds: HBondList) -> HBondList {
    let slice = bonds.as_mut_slice();
    let mut winner: Option<usize> = None;

    for k in 0..slice.len() {
        match winner {
            Some(w) if slice[w].donor == slice[k].donor => {
                if slice[k].energy <= slice[w].energy {
                    slice[w].label = BondLabel::Discarded;
                    winner = Some(k);
                } else {
                    slice[k].label = BondLabel::Discarded;
                }
            }
            _ => winner = Some(k),
        }
    }

    let total = slice.len();
    let survivors: Vec<HBond> = bonds
        .into_vec()
        .into_iter()
        .filter(|b| b.label != BondLabel::Discarded)
        .map(|b| HBond {
            label: BondLabel::Unclassified,
            ..b
        })
        .collect();

    debug!(
        "Deduplication kept {} of {} hydrogen bonds",
        survivors.len(),
        total
    );
    HBondList::from_ordered(survivors)
}
