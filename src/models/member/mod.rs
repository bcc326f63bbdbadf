mod memory;
mod queries;
mod types;

pub use memory::MemoryMemberStore;
pub use queries::PgMemberStore;
pub use types::*;

use async_trait::async_trait;

use super::StoreError;

pub const MAX_NAME_LEN: usize = 50;

/// Persistent roster storage.
#[async_trait]
pub trait MemberStore: Send + Sync {
    /// All members, oldest first.
    async fn list(&self) -> Result<Vec<Member>, StoreError>;
    /// Insert an alive member with zeroed counters.
    async fn create(&self, name: &str) -> Result<Member, StoreError>;
    async fn update(&self, id: &str, changes: &MemberUpdate) -> Result<(), StoreError>;
    /// Add one to a counter inside the store and return the new value.
    /// Concurrent increments of the same member all count.
    async fn increment(&self, id: &str, counter: Counter) -> Result<u32, StoreError>;
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// Validate a member name: required, at most 50 characters.
pub fn validate_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Some("Name is required".to_string());
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Some(format!("Name must be at most {MAX_NAME_LEN} characters"));
    }
    None
}
