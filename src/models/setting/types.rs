use serde::{Deserialize, Serialize};

pub const DEFAULT_TEAM_NAME: &str = "Our Team";

/// The single application settings record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub team_name: String,
    #[serde(default)]
    pub discord_webhook_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            team_name: DEFAULT_TEAM_NAME.to_string(),
            discord_webhook_url: None,
        }
    }
}

impl Settings {
    /// Build from raw stored values; blanks become defaults/`None`.
    pub fn from_stored(team_name: &str, webhook_url: &str) -> Self {
        let team_name = team_name.trim();
        let webhook_url = webhook_url.trim();
        Self {
            team_name: if team_name.is_empty() {
                DEFAULT_TEAM_NAME.to_string()
            } else {
                team_name.to_string()
            },
            discord_webhook_url: (!webhook_url.is_empty()).then(|| webhook_url.to_string()),
        }
    }

    /// Configured webhook URL, if any.
    pub fn webhook_url(&self) -> Option<&str> {
        self.discord_webhook_url.as_deref().filter(|u| !u.trim().is_empty())
    }
}

/// Form data from the settings page.
#[derive(Debug, Deserialize)]
pub struct SettingsForm {
    pub team_name: String,
    #[serde(default)]
    pub discord_webhook_url: String,
    pub csrf_token: String,
}
