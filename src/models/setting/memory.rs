use std::sync::Mutex;

use async_trait::async_trait;

use super::types::Settings;
use super::SettingsStore;
use crate::models::StoreError;

/// In-process settings store.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    settings: Mutex<Option<Settings>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self { settings: Mutex::new(Some(settings)) }
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn get(&self) -> Settings {
        match self.settings.lock() {
            Ok(guard) => guard.clone().unwrap_or_default(),
            Err(_) => {
                log::error!("Settings store lock poisoned, using defaults");
                Settings::default()
            }
        }
    }

    async fn save(&self, settings: &Settings) -> Result<(), StoreError> {
        let mut guard = self
            .settings
            .lock()
            .map_err(|_| StoreError::Unavailable("settings store lock poisoned".to_string()))?;
        *guard = Some(Settings::from_stored(
            &settings.team_name,
            settings.webhook_url().unwrap_or(""),
        ));
        Ok(())
    }
}
