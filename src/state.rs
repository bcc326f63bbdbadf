use std::sync::Arc;

use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::Key;

use crate::config::AppConfig;
use crate::db;
use crate::discord::{DiscordWebhook, NotificationSink};
use crate::models::member::{Member, MemberStore, MemoryMemberStore, PgMemberStore};
use crate::models::setting::{MemorySettingsStore, PgSettingsStore, SettingsStore};
use crate::organizer::{GeminiOrganizer, TextOrganizer};

/// Collaborators shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub members: Arc<dyn MemberStore>,
    pub settings: Arc<dyn SettingsStore>,
    pub sink: Arc<dyn NotificationSink>,
    pub organizer: Arc<dyn TextOrganizer>,
}

impl AppState {
    pub fn new(
        members: Arc<dyn MemberStore>,
        settings: Arc<dyn SettingsStore>,
        sink: Arc<dyn NotificationSink>,
        organizer: Arc<dyn TextOrganizer>,
    ) -> Self {
        Self { members, settings, sink, organizer }
    }

    /// Wire up stores and outbound clients from configuration. Connects and
    /// migrates when `DATABASE_URL` is set, otherwise keeps data in memory.
    pub async fn from_config(config: &AppConfig) -> Result<Self, std::io::Error> {
        let sink: Arc<dyn NotificationSink> = Arc::new(DiscordWebhook::new(config.http_timeout));
        let organizer: Arc<dyn TextOrganizer> = Arc::new(
            GeminiOrganizer::new(config.gemini_api_key.clone(), config.http_timeout)
                .with_model(&config.gemini_model),
        );
        if config.gemini_api_key.is_none() {
            log::warn!("No GEMINI_API_KEY set, note organizing is disabled");
        }

        let Some(url) = &config.database_url else {
            log::warn!("No DATABASE_URL set, using in-memory stores (data lost on restart)");
            return Ok(Self::new(
                Arc::new(MemoryMemberStore::new()),
                Arc::new(MemorySettingsStore::new()),
                sink,
                organizer,
            ));
        };

        let pool = db::init_pool(url).await.map_err(std::io::Error::other)?;
        db::run_migrations(&pool).await.map_err(std::io::Error::other)?;
        Ok(Self::new(
            Arc::new(PgMemberStore::new(pool.clone())),
            Arc::new(PgSettingsStore::new(pool)),
            sink,
            organizer,
        ))
    }

    /// Full member list; on store failure logs and returns the error text
    /// alongside an empty list so pages still render.
    pub async fn load_members(&self) -> (Vec<Member>, Option<String>) {
        match self.members.list().await {
            Ok(members) => (members, None),
            Err(e) => {
                log::error!("Error fetching members: {e}");
                (Vec::new(), Some("Could not load the member list. Please try again.".to_string()))
            }
        }
    }
}

/// Session key from `SESSION_KEY` when long enough, otherwise random.
pub fn session_key(config: &AppConfig) -> Key {
    match &config.session_key {
        Some(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
            Key::generate()
        }
        None => {
            log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    }
}

pub fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(false)
        .cookie_http_only(true)
        .build()
}
