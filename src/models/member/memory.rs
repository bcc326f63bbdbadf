use std::sync::Mutex;

use async_trait::async_trait;

use super::types::{Counter, Member, MemberUpdate};
use super::MemberStore;
use crate::models::StoreError;

/// In-process member store, used when no database is configured.
#[derive(Debug, Default)]
pub struct MemoryMemberStore {
    members: Mutex<Vec<Member>>,
}

impl MemoryMemberStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_members(members: Vec<Member>) -> Self {
        Self { members: Mutex::new(members) }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Member>>, StoreError> {
        self.members
            .lock()
            .map_err(|_| StoreError::Unavailable("member store lock poisoned".to_string()))
    }
}

fn generate_id() -> String {
    hex::encode(rand::random::<[u8; 8]>())
}

#[async_trait]
impl MemberStore for MemoryMemberStore {
    async fn list(&self) -> Result<Vec<Member>, StoreError> {
        Ok(self.lock()?.clone())
    }

    async fn create(&self, name: &str) -> Result<Member, StoreError> {
        let member = Member::new(generate_id(), name);
        self.lock()?.push(member.clone());
        Ok(member)
    }

    async fn update(&self, id: &str, changes: &MemberUpdate) -> Result<(), StoreError> {
        let mut members = self.lock()?;
        let member = members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        changes.apply(member);
        Ok(())
    }

    async fn increment(&self, id: &str, counter: Counter) -> Result<u32, StoreError> {
        let mut members = self.lock()?;
        let member = members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let value = counter.get(member).saturating_add(1);
        MemberUpdate::counter(counter, value).apply(member);
        Ok(value)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut members = self.lock()?;
        let before = members.len();
        members.retain(|m| m.id != id);
        if members.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
