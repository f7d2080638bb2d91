pub mod adapters;
pub mod chemistry;
pub mod dissociation;
pub mod error;
pub mod models;

pub use crate::chemistry::{
    concentration_set, ionic_strength, total_borate, total_fluoride, total_sulfate,
};
pub use crate::dissociation::assembler::{free_scale_constants, free_scale_constants_with};
pub use crate::dissociation::library::*;
pub use crate::dissociation::scale::{ScaleConverter, total_to_free_factor};
pub use crate::error::AppError;
pub use crate::models::{
    AssemblyOptions, ConcentrationSet, EquilibriumConstants, HydrofluoricSource, PhScale,
    PhysicalState, Totals,
};
