mod context;
mod error;
mod pdb;
mod report;

pub use pdb::reader::read as read_pdb_structure;

pub use report::writer::{
    ReportHeader, write_json as write_assignment_json, write_text as write_assignment_text,
};

pub use context::IoContext;

pub use error::Error;
