use tokio::sync::oneshot;
use crate::domain::{Identifier, UserRecord};
use crate::fetcher::FetchError;
use crate::form::{FormError, FormSnapshot, RequestToken};

/// Generic type aliases for form communication
pub type FormResult<T> = std::result::Result<T, FormError>;
pub type Response<T> = oneshot::Sender<FormResult<T>>;

/// Result of editing the identifier field. Both variants carry the text the
/// field shows afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    Accepted(String),
    Rejected(String),
}

impl InputOutcome {
    pub fn field(&self) -> &str {
        match self {
            Self::Accepted(field) | Self::Rejected(field) => field,
        }
    }
}

/// Messages understood by the form actor. Each request variant carries a
/// oneshot channel for the reply.
#[derive(Debug)]
pub enum FormRequest {
    ChangeInput {
        raw: String,
        respond_to: Response<InputOutcome>,
    },
    Submit {
        respond_to: Response<RequestToken>,
    },
    Load {
        identifier: Identifier,
        respond_to: Response<RequestToken>,
    },
    Snapshot {
        respond_to: Response<FormSnapshot>,
    },
    /// Replies once no fetch is outstanding.
    Settled {
        respond_to: Response<FormSnapshot>,
    },
    /// Sent by fetch tasks back into the actor.
    FetchResolved {
        token: RequestToken,
        result: Result<UserRecord, FetchError>,
    },
}
