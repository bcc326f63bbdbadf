mod memory;
mod queries;
mod types;

pub use memory::MemorySettingsStore;
pub use queries::PgSettingsStore;
pub use types::*;

use async_trait::async_trait;

use super::StoreError;

/// Storage for the settings singleton.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Stored settings, or `Settings::default()` when nothing is stored or
    /// the read fails.
    async fn get(&self) -> Settings;
    async fn save(&self, settings: &Settings) -> Result<(), StoreError>;
}

/// Validate settings input; returns every problem found.
pub fn validate(team_name: &str, webhook_url: &str) -> Vec<String> {
    let mut errors = Vec::new();
    let team_name = team_name.trim();
    if team_name.is_empty() {
        errors.push("Team name is required".to_string());
    } else if team_name.chars().count() > 50 {
        errors.push("Team name must be at most 50 characters".to_string());
    }
    let url = webhook_url.trim();
    if !url.is_empty() && !(url.starts_with("https://") || url.starts_with("http://")) {
        errors.push("Webhook URL must start with https:// or http://".to_string());
    }
    errors
}
