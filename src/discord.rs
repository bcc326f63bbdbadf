//! Delivery of rendered notices to a Discord channel webhook.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

/// Delivers a text blob to an external chat channel.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// `true` only when the endpoint accepted the message. Never errors.
    async fn send(&self, url: &str, text: &str) -> bool;
}

#[derive(Serialize)]
struct WebhookPayload<'a> {
    content: &'a str,
}

/// Discord incoming-webhook client.
pub struct DiscordWebhook {
    http: reqwest::Client,
}

impl DiscordWebhook {
    pub fn new(timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                log::warn!("Falling back to default HTTP client for webhooks: {e}");
                reqwest::Client::new()
            });
        Self { http }
    }
}

#[async_trait]
impl NotificationSink for DiscordWebhook {
    async fn send(&self, url: &str, text: &str) -> bool {
        if url.trim().is_empty() {
            return false;
        }

        let resp = self
            .http
            .post(url.trim())
            .json(&WebhookPayload { content: text })
            .send()
            .await;

        match resp {
            Ok(r) if r.status().is_success() => true,
            Ok(r) => {
                let status = r.status();
                let body = r.text().await.unwrap_or_default();
                log::error!("Discord webhook rejected message ({status}): {body}");
                false
            }
            Err(e) => {
                log::error!("Discord webhook error: {e}");
                false
            }
        }
    }
}
