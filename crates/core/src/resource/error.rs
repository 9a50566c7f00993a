use thiserror::Error;

use crate::booking::ValidationError;

/// Errors raised while applying a change to an [`EditableList`](super::EditableList).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}
