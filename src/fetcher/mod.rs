//! Lookup of user records by identifier.

pub mod error;
mod http;

pub use error::*;
pub use http::HttpUserFetcher;

use async_trait::async_trait;
use crate::domain::{Identifier, UserRecord};

/// Source of user records. The form only ever calls this with a valid identifier.
#[async_trait]
pub trait UserFetcher: Send + Sync + std::fmt::Debug {
    async fn fetch_user(&self, id: Identifier) -> Result<UserRecord, FetchError>;
}
