//! Shared test infrastructure: roster fixtures, fault-injecting stores and
//! recording stand-ins for the outbound services.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use regex::Regex;

use teamlead::discord::NotificationSink;
use teamlead::models::StoreError;
use teamlead::models::member::{Counter, Member, MemberStatus, MemberStore, MemberUpdate, MemoryMemberStore};
use teamlead::models::setting::{MemorySettingsStore, Settings};
use teamlead::organizer::{OrganizerError, TextOrganizer};
use teamlead::state::AppState;

// ============================================================================
// FIXTURES
// ============================================================================

pub const TEAM_NAME: &str = "Night Owls";
pub const WEBHOOK_URL: &str = "https://discord.example/api/webhooks/1/abc";

/// Alice, Bob and Carol alive; Dave eliminated.
pub fn roster() -> Vec<Member> {
    let mut dave = Member::new("d", "Dave");
    dave.status = MemberStatus::Eliminated;
    vec![
        Member::new("a", "Alice"),
        Member::new("b", "Bob"),
        Member::new("c", "Carol"),
        dave,
    ]
}

pub fn settings() -> Settings {
    Settings {
        team_name: TEAM_NAME.to_string(),
        discord_webhook_url: Some(WEBHOOK_URL.to_string()),
    }
}

// ============================================================================
// FAULT-INJECTING MEMBER STORE
// ============================================================================

/// In-memory store whose writes fail for chosen ids, and whose `list`
/// can be made to fail outright. `list` yields once so concurrent callers
/// interleave between reading and writing.
pub struct FlakyMemberStore {
    inner: MemoryMemberStore,
    failing: HashSet<String>,
    fail_list: bool,
    pub writes: Mutex<Vec<String>>,
}

impl FlakyMemberStore {
    pub fn new(members: Vec<Member>) -> Self {
        Self {
            inner: MemoryMemberStore::with_members(members),
            failing: HashSet::new(),
            fail_list: false,
            writes: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_updates(mut self, ids: &[&str]) -> Self {
        self.failing = ids.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    /// Number of `update` and `increment` calls seen, failed ones included.
    pub fn write_count(&self) -> usize {
        self.writes.lock().unwrap().len()
    }

    fn record_write(&self, id: &str) -> Result<(), StoreError> {
        self.writes.lock().unwrap().push(id.to_string());
        if self.failing.contains(id) {
            return Err(StoreError::Unavailable(format!("write to {id} timed out")));
        }
        Ok(())
    }
}

#[async_trait]
impl MemberStore for FlakyMemberStore {
    async fn list(&self) -> Result<Vec<Member>, StoreError> {
        if self.fail_list {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }
        tokio::task::yield_now().await;
        self.inner.list().await
    }

    async fn create(&self, name: &str) -> Result<Member, StoreError> {
        self.inner.create(name).await
    }

    async fn update(&self, id: &str, changes: &MemberUpdate) -> Result<(), StoreError> {
        self.record_write(id)?;
        self.inner.update(id, changes).await
    }

    async fn increment(&self, id: &str, counter: Counter) -> Result<u32, StoreError> {
        self.record_write(id)?;
        self.inner.increment(id, counter).await
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.inner.delete(id).await
    }
}

// ============================================================================
// OUTBOUND STAND-INS
// ============================================================================

/// Records every message instead of posting it.
pub struct RecordingSink {
    pub accept: bool,
    pub sent: Mutex<Vec<(String, String)>>,
}

impl RecordingSink {
    pub fn accepting() -> Self {
        Self { accept: true, sent: Mutex::new(Vec::new()) }
    }

    pub fn rejecting() -> Self {
        Self { accept: false, sent: Mutex::new(Vec::new()) }
    }

    pub fn messages(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn send(&self, url: &str, text: &str) -> bool {
        self.sent.lock().unwrap().push((url.to_string(), text.to_string()));
        self.accept
    }
}

/// Organizer that prefixes the notes, or fails like a missing API key.
pub struct StubOrganizer {
    pub configured: bool,
}

#[async_trait]
impl TextOrganizer for StubOrganizer {
    async fn organize(&self, notes: &str) -> Result<String, OrganizerError> {
        if notes.trim().is_empty() {
            return Err(OrganizerError::EmptyNotes);
        }
        if !self.configured {
            return Err(OrganizerError::MissingApiKey);
        }
        Ok(format!("📌 **Today's agenda**\n- {}", notes.trim()))
    }
}

// ============================================================================
// APP STATE
// ============================================================================

pub struct TestState {
    pub state: AppState,
    pub members: Arc<FlakyMemberStore>,
    pub sink: Arc<RecordingSink>,
}

pub fn test_state(members: FlakyMemberStore, settings: Settings, sink: RecordingSink) -> TestState {
    let members = Arc::new(members);
    let sink = Arc::new(sink);
    let state = AppState::new(
        members.clone(),
        Arc::new(MemorySettingsStore::with_settings(settings)),
        sink.clone(),
        Arc::new(StubOrganizer { configured: true }),
    );
    TestState { state, members, sink }
}

/// Default fixture: the standard roster, configured settings, accepting sink.
pub fn default_state() -> TestState {
    test_state(FlakyMemberStore::new(roster()), settings(), RecordingSink::accepting())
}

// ============================================================================
// HTML HELPERS
// ============================================================================

pub fn extract_csrf_token(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token"\s+value="([^"]+)""#).expect("Failed to compile regex");
    re.captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "invalid_token".to_string())
}

/// Contents of the first `<textarea name="{name}">`.
pub fn extract_textarea(html: &str, name: &str) -> Option<String> {
    let re = Regex::new(&format!(r#"(?s)<textarea name="{name}"[^>]*>(.*?)</textarea>"#))
        .expect("Failed to compile regex");
    re.captures(html).and_then(|cap| cap.get(1)).map(|m| m.as_str().to_string())
}
