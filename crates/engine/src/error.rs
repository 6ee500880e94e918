//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`SectionNotFound`] thrown when no section has the requested id.
//! - [`IncomeProtected`] thrown when deleting the section currently titled
//!   "Income".
//! - [`IncomeMissing`] thrown when no section is currently titled "Income".
//!
//!  [`SectionNotFound`]: EngineError::SectionNotFound
//!  [`IncomeProtected`]: EngineError::IncomeProtected
//!  [`IncomeMissing`]: EngineError::IncomeMissing
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Section ID not found")]
    SectionNotFound(i64),
    #[error("Cannot delete Income section")]
    IncomeProtected(i64),
    #[error("Income section not found")]
    IncomeMissing,
}
