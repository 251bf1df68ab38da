use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "hydrogen bond list is out of order at position {position}: ({prev_donor}, {prev_acceptor}) precedes ({donor}, {acceptor})"
    )]
    UnorderedBonds {
        position: usize,
        prev_donor: i32,
        prev_acceptor: i32,
        donor: i32,
        acceptor: i32,
    },

    #[error(
        "hydrogen bond ({donor}, {acceptor}) spans fewer than {min_separation} residues"
    )]
    InvalidBondSpan {
        donor: i32,
        acceptor: i32,
        min_separation: i32,
    },

    #[error("invalid assignment configuration: {details}")]
    InvalidConfig { details: String },
}

impl Error {
    pub fn unordered_bonds(
        position: usize,
        (prev_donor, prev_acceptor): (i32, i32),
        (donor, acceptor): (i32, i32),
    ) -> Self {
        Self::UnorderedBonds {
            position,
            prev_donor,
            prev_acceptor,
            donor,
            acceptor,
        }
    }

    pub fn invalid_bond_span(donor: i32, acceptor: i32, min_separation: i32) -> Self {
        Self::InvalidBondSpan {
            donor,
            acceptor,
            min_separation,
        }
    }

    pub fn invalid_config(details: impl Into<String>) -> Self {
        Self::InvalidConfig {
            details: details.into(),
        }
    }
}
