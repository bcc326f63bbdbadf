use async_trait::async_trait;
use sqlx::PgPool;

use super::types::Settings;
use super::SettingsStore;
use crate::models::StoreError;
use crate::models::columns::SETTINGS_COLUMNS;

const SETTINGS_ROW_ID: i32 = 1;

#[derive(sqlx::FromRow)]
struct SettingsRow {
    team_name: String,
    discord_webhook_url: String,
}

fn col(field: &str) -> Result<&'static str, StoreError> {
    SETTINGS_COLUMNS
        .column(field)
        .ok_or_else(|| StoreError::Unavailable(format!("no column mapped for field '{field}'")))
}

/// Settings store backed by the one-row `settings` table.
#[derive(Clone)]
pub struct PgSettingsStore {
    pool: PgPool,
}

impl PgSettingsStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch(&self) -> Result<Option<Settings>, StoreError> {
        let sql = format!(
            "SELECT {} AS team_name, {} AS discord_webhook_url FROM {} WHERE {} = $1",
            col("teamName")?,
            col("discordWebhookUrl")?,
            SETTINGS_COLUMNS.table,
            col("id")?,
        );
        let row = sqlx::query_as::<_, SettingsRow>(&sql)
            .bind(SETTINGS_ROW_ID)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| Settings::from_stored(&r.team_name, &r.discord_webhook_url)))
    }
}

#[async_trait]
impl SettingsStore for PgSettingsStore {
    async fn get(&self) -> Settings {
        match self.fetch().await {
            Ok(Some(settings)) => settings,
            Ok(None) => Settings::default(),
            Err(e) => {
                log::error!("Error fetching settings, using defaults: {e}");
                Settings::default()
            }
        }
    }

    async fn save(&self, settings: &Settings) -> Result<(), StoreError> {
        let (id, team, url) = (col("id")?, col("teamName")?, col("discordWebhookUrl")?);
        let sql = format!(
            "INSERT INTO {table} ({id}, {team}, {url}) VALUES ($1, $2, $3) \
             ON CONFLICT ({id}) DO UPDATE SET {team} = excluded.{team}, {url} = excluded.{url}",
            table = SETTINGS_COLUMNS.table,
        );
        sqlx::query(&sql)
            .bind(SETTINGS_ROW_ID)
            .bind(settings.team_name.trim())
            .bind(settings.webhook_url().unwrap_or(""))
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
