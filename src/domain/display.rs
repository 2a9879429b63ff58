use super::{Identifier, UserRecord};

/// What the record area of the form currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisplayState {
    /// No fetch has completed yet.
    #[default]
    Unset,
    Loaded(UserRecord),
    /// The latest fetch failed.
    Failed { identifier: Identifier, reason: String },
}

