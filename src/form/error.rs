use thiserror::Error;

/// Errors surfaced by the form to its caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    /// Submission refused because the identifier field is empty.
    #[error("Enter an id!")]
    IdentifierRequired,
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
