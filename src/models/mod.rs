pub mod assignment;
pub mod columns;
pub mod dashboard;
pub mod meeting;
pub mod member;
pub mod setting;

use std::fmt;

/// Failure reported by a Member or Settings store.
#[derive(Debug)]
pub enum StoreError {
    Db(sqlx::Error),
    NotFound(String),
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Db(e) => write!(f, "Database error: {e}"),
            StoreError::NotFound(id) => write!(f, "No record with id '{id}'"),
            StoreError::Unavailable(msg) => write!(f, "Store unavailable: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Db(e)
    }
}

/// Random identifier for an ephemeral meeting/assignment session.
pub(crate) fn session_id() -> String {
    hex::encode(rand::random::<[u8; 8]>())
}
