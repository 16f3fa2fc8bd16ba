use crate::model::NodeId;
use thiserror::Error;

// =#========================================================================#=
// ERROR CATEGORY
// =#========================================================================#=
/// Broad classes of [LoadError]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A required extractor was not supplied
    Configuration,
    /// The input itself is malformed (empty, bad ids, unreadable fields)
    Format,
    /// The input is well-formed but does not describe a forest
    Integrity,
}

// =#========================================================================#=
// LOAD ERROR
// =#========================================================================#=
/// Reasons a load is rejected.
///
/// All of them are detected before the new node set becomes visible; a
/// rejected load leaves the previously loaded tree untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// No id extractor configured.
    #[error("id function is required")]
    MissingIdFn,

    /// No parent-id extractor configured.
    #[error("parent id function is required")]
    MissingParentIdFn,

    /// The input contained no items.
    #[error("invalid data: empty data")]
    EmptyData,

    /// An item's id is zero or negative.
    #[error("invalid data: item {position}: ID must be positive")]
    NonPositiveId { position: usize, id: NodeId },

    /// An item's parent id is negative.
    #[error("invalid data: item {position}: parent ID cannot be negative")]
    NegativeParentId { position: usize, parent_id: NodeId },

    /// A named field could not be read as an integer (dynamic records).
    #[error("invalid data: item {position}: field `{field}` is missing or not an integer")]
    UnreadableField { position: usize, field: String },

    /// Two items share an id.
    #[error("invalid data: duplicate node ID: {0}")]
    DuplicateId(NodeId),

    /// A node's parent id names no node of the input.
    #[error("invalid parent ID {parent_id} for node {id}")]
    DanglingParent { id: NodeId, parent_id: NodeId },

    /// Following parent ids from some node leads back to the named node.
    #[error("circular reference detected at node {0}")]
    CircularReference(NodeId),
}

impl LoadError {
    /// Returns the [ErrorCategory] of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            LoadError::MissingIdFn | LoadError::MissingParentIdFn => ErrorCategory::Configuration,
            LoadError::EmptyData
            | LoadError::NonPositiveId { .. }
            | LoadError::NegativeParentId { .. }
            | LoadError::UnreadableField { .. } => ErrorCategory::Format,
            LoadError::DuplicateId(_)
            | LoadError::DanglingParent { .. }
            | LoadError::CircularReference(_) => ErrorCategory::Integrity,
        }
    }

    /// Returns the input position of the offending item, where known.
    pub fn position(&self) -> Option<usize> {
        match self {
            LoadError::NonPositiveId { position, .. }
            | LoadError::NegativeParentId { position, .. }
            | LoadError::UnreadableField { position, .. } => Some(*position),
            _ => None,
        }
    }
}
