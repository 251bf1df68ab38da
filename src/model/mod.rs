//! Core data structures modeling protein chains and their structure assignments.
//!
//! The chain types (`Atom`, `Residue`, `Chain`, `Structure`) are produced by the I/O
//! readers and treated as read-only input by the assignment pipeline, which derives an
//! `Assignment` from them without mutating the source data.

pub mod assignment;
pub mod atom;
pub mod chain;
pub mod residue;
pub mod structure;
pub mod types;
