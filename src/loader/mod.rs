//! Turning flat `(id, parent id)` input into a validated [Index](crate::model::Index).
//!
//! The loader is configured through [LoadOptions], which name how ids and
//! parent ids are read from a payload and in which [SiblingOrder] children
//! are kept. Loading either produces a complete index or a [LoadError];
//! there is no partially loaded state.

mod load_error;
mod options;
pub(crate) mod validator;

pub use load_error::{ErrorCategory, LoadError};
pub use options::{LoadOptions, SiblingOrder};
