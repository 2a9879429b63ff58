use serde::{Deserialize, Serialize};

/// Display fields of a user returned by the user-record service.
///
/// Any other fields in the response body are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub email: String,
    pub username: String,
}

impl UserRecord {
    #[cfg(test)]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            username: username.into(),
        }
    }
}
