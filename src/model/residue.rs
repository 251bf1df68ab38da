use super::atom::Atom;
use super::types::StandardResidue;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Residue {
    pub id: i32,
    pub name: String,
    pub standard_name: Option<StandardResidue>,
    atoms: Vec<Atom>,
}

impl Residue {
    pub fn new(id: i32, name: &str, standard_name: Option<StandardResidue>) -> Self {
        Self {
            id,
            name: name.to_string(),
            standard_name,
            atoms: Vec::new(),
        }
    }

    pub fn is_standard(&self) -> bool {
        self.standard_name.is_some()
    }

    pub fn is_proline(&self) -> bool {
        self.standard_name == Some(StandardResidue::PRO)
    }

    pub fn add_atom(&mut self, atom: Atom) {
        debug_assert!(
            self.atom(&atom.name).is_none(),
            "Attempted to add a duplicate atom name '{}' to residue '{}'",
            atom.name,
            self.name
        );
        self.atoms.push(atom);
    }

    pub fn atom(&self, name: &str) -> Option<&Atom> {
        self.atoms.iter().find(|a| a.name == name)
    }

    pub fn has_atom(&self, name: &str) -> bool {
        self.atom(name).is_some()
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn iter_atoms(&self) -> std::slice::Iter<'_, Atom> {
        self.atoms.iter()
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Residue {{ id: {}, name: \"{}\", atoms: {} }}",
            self.id,
            self.name,
            self.atom_count()
        )
    }
}
