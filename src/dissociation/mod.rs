//! Dissociation constants: the formula library, its reference catalogue,
//! pH-scale conversion and assembly of the Free-scale constant set.
pub mod assembler;
pub mod catalog;
pub mod library;
pub mod scale;
