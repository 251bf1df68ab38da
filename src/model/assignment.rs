//! Per-residue secondary-structure assignment produced by the pipeline.
//!
//! An [`Assignment`] holds one [`ResidueStructure`] record for every residue present in the
//! source chain, in ascending sequence-index order. Numbering gaps in the chain are not
//! padded; the record sequence is addressed by position, which is what the refinement rules
//! operate on.

use super::types::SecondaryStructure;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Structure label attached to a single residue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidueStructure {
    /// Sequence index of the residue in its chain.
    pub id: i32,
    /// Three-letter residue code as read from the structure.
    pub name: String,
    /// Assigned class.
    pub structure: SecondaryStructure,
}

impl ResidueStructure {
    pub fn new(id: i32, name: &str, structure: SecondaryStructure) -> Self {
        Self {
            id,
            name: name.to_string(),
            structure,
        }
    }
}

/// Contiguous run of residues carrying the same label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub structure: SecondaryStructure,
    /// Sequence index of the first residue in the run.
    pub start_id: i32,
    /// Sequence index of the last residue in the run.
    pub end_id: i32,
    /// Number of records in the run.
    pub length: usize,
}

/// Ordered secondary-structure assignment for one chain.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(rename = "chain")]
    pub chain_id: String,
    #[serde(rename = "residues")]
    records: Vec<ResidueStructure>,
}

impl Assignment {
    /// Wraps records that are already in ascending sequence-index order.
    pub fn new(chain_id: &str, records: Vec<ResidueStructure>) -> Self {
        debug_assert!(
            records.windows(2).all(|w| w[0].id < w[1].id),
            "Assignment records for chain '{}' must be strictly ascending by id",
            chain_id
        );
        Self {
            chain_id: chain_id.to_string(),
            records,
        }
    }

    pub fn records(&self) -> &[ResidueStructure] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResidueStructure> {
        self.records.iter()
    }

    /// Label at a record position, `None` past the end.
    pub fn label_at(&self, position: usize) -> Option<SecondaryStructure> {
        self.records.get(position).map(|r| r.structure)
    }

    /// Overwrites the label at a record position; out-of-range positions are ignored.
    pub fn set_label_at(&mut self, position: usize, structure: SecondaryStructure) {
        if let Some(record) = self.records.get_mut(position) {
            record.structure = structure;
        }
    }

    /// Record position of a sequence index.
    pub fn position_of(&self, id: i32) -> Option<usize> {
        self.records.binary_search_by_key(&id, |r| r.id).ok()
    }

    /// Label string with one code per residue, e.g. `"CTTHHHHC"`.
    pub fn labels(&self) -> String {
        self.records.iter().map(|r| r.structure.code()).collect()
    }

    pub fn count(&self, structure: SecondaryStructure) -> usize {
        self.records
            .iter()
            .filter(|r| r.structure == structure)
            .count()
    }

    /// Share of residues carrying `structure`, `0.0` for an empty assignment.
    pub fn fraction(&self, structure: SecondaryStructure) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        self.count(structure) as f64 / self.records.len() as f64
    }

    /// Runs of identical labels over consecutive record positions.
    pub fn segments(&self) -> Vec<Segment> {
        let mut segments: Vec<Segment> = Vec::new();
        for record in &self.records {
            match segments.last_mut() {
                Some(last) if last.structure == record.structure => {
                    last.end_id = record.id;
                    last.length += 1;
                }
                _ => segments.push(Segment {
                    structure: record.structure,
                    start_id: record.id,
                    end_id: record.id,
                    length: 1,
                }),
            }
        }
        segments
    }
}

impl<'a> IntoIterator for &'a Assignment {
    type Item = &'a ResidueStructure;
    type IntoIter = std::slice::Iter<'a, ResidueStructure>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Assignment {{ chain: \"{}\", residues: {}, labels: \"{}\" }}",
            self.chain_id,
            self.len(),
            self.labels()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SecondaryStructure::*;

    fn assignment(labels: &[(i32, SecondaryStructure)]) -> Assignment {
        let records = labels
            .iter()
            .map(|&(id, ss)| ResidueStructure::new(id, "ALA", ss))
            .collect();
        Assignment::new("A", records)
    }

    #[test]
    fn labels_render_one_code_per_residue() {
        let a = assignment(&[(1, Coil), (2, Turn), (3, AlphaHelix), (4, AntiparallelStrand)]);

        assert_eq!(a.labels(), "CTHb");
        assert_eq!(a.len(), 4);
    }

    #[test]
    fn position_of_handles_numbering_gaps() {
        let a = assignment(&[(1, Coil), (2, Coil), (7, Coil)]);

        assert_eq!(a.position_of(7), Some(2));
        assert_eq!(a.position_of(5), None);
    }

    #[test]
    fn set_label_at_ignores_out_of_range_positions() {
        let mut a = assignment(&[(1, Coil)]);

        a.set_label_at(5, AlphaHelix);
        a.set_label_at(0, Turn);

        assert_eq!(a.labels(), "T");
        assert_eq!(a.label_at(5), None);
    }

    #[test]
    fn count_and_fraction_report_composition() {
        let a = assignment(&[(1, AlphaHelix), (2, AlphaHelix), (3, Coil), (4, Turn)]);

        assert_eq!(a.count(AlphaHelix), 2);
        assert!((a.fraction(AlphaHelix) - 0.5).abs() < 1e-12);
        assert_eq!(a.fraction(PiHelix), 0.0);
        assert_eq!(Assignment::default().fraction(Coil), 0.0);
    }

    #[test]
    fn segments_group_consecutive_labels() {
        let a = assignment(&[
            (1, Coil),
            (2, AlphaHelix),
            (3, AlphaHelix),
            (4, AlphaHelix),
            (6, Coil),
        ]);

        let segments = a.segments();

        assert_eq!(segments.len(), 3);
        assert_eq!(
            segments[1],
            Segment {
                structure: AlphaHelix,
                start_id: 2,
                end_id: 4,
                length: 3,
            }
        );
        assert_eq!(segments[2].start_id, 6);
    }

    #[test]
    fn serializes_with_chain_and_residue_keys() {
        let a = assignment(&[(3, ThreeTenHelix)]);

        let json = serde_json::to_value(&a).unwrap();

        assert_eq!(json["chain"], "A");
        assert_eq!(json["residues"][0]["id"], 3);
        assert_eq!(json["residues"][0]["structure"], "G");
    }
}
