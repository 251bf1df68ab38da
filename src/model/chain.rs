use super::residue::Residue;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    pub id: String,
    residues: Vec<Residue>,
}

impl Chain {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            residues: Vec::new(),
        }
    }

    pub fn add_residue(&mut self, residue: Residue) {
        debug_assert!(
            self.residue(residue.id).is_none(),
            "Attempted to add a duplicate residue ID '{}' to chain '{}'",
            residue.id,
            self.id
        );
        self.residues.push(residue);
    }

    pub fn residue(&self, id: i32) -> Option<&Residue> {
        self.residues.iter().find(|r| r.id == id)
    }

    pub fn residue_mut(&mut self, id: i32) -> Option<&mut Residue> {
        self.residues.iter_mut().find(|r| r.id == id)
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Lowest and highest sequence index present, or `None` for an empty chain.
    pub fn index_span(&self) -> Option<(i32, i32)> {
        let lo = self.residues.iter().map(|r| r.id).min()?;
        let hi = self.residues.iter().map(|r| r.id).max()?;
        Some((lo, hi))
    }

    /// Residues in ascending sequence-index order, regardless of insertion order.
    pub fn residues_by_index(&self) -> Vec<&Residue> {
        let mut sorted: Vec<&Residue> = self.residues.iter().collect();
        sorted.sort_by_key(|r| r.id);
        sorted
    }

    /// One-letter sequence, `X` for residues without a standard identity.
    pub fn sequence(&self) -> String {
        self.residues_by_index()
            .into_iter()
            .map(|r| r.standard_name.map_or('X', |s| s.one_letter_code()))
            .collect()
    }

    pub fn iter_residues(&self) -> std::slice::Iter<'_, Residue> {
        self.residues.iter()
    }

    pub fn iter_atoms(&self) -> impl Iterator<Item = &super::atom::Atom> {
        self.residues.iter().flat_map(|r| r.iter_atoms())
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chain {{ id: \"{}\", residues: {} }}",
            self.id,
            self.residue_count()
        )
    }
}
