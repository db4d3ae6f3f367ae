use crate::category::Category;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed on '{field}': {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("No free id left for {category}")]
    AllocationExhausted { category: Category },
}

impl CoreError {
    /// Shorthand for a [`CoreError::Validation`] on a single field.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}
