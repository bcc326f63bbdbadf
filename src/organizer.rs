//! Meeting-note cleanup through the Gemini `generateContent` API.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const INSTRUCTIONS: &str = "\
You are a warm and attentive team leader who cares about every member.
Using the meeting notes below, write meeting minutes in a friendly tone that
is easy for the team to read.

[Notes]
{notes}

[Guide]
1. Tone: friendly and conversational rather than a stiff report
   (e.g. \"decided\" -> \"we decided together\").
2. Structure: use exactly these emoji headings.
   - 📌 **Today's agenda**
   - 🗣️ **What we talked about** - summarize the main discussion.
   - ✨ **What we agreed on** - state the decisions clearly.
   - 🚀 **Next steps** - who does what by when.
3. Content: infer context from the notes and smooth the wording so no
   section feels thin. For a section with nothing to report, write a light
   line such as \"Nothing special this time! 😀\".
4. Format: use a dash (-) bullet for every item.";

/// Turns raw notes into organized minutes text.
#[async_trait]
pub trait TextOrganizer: Send + Sync {
    async fn organize(&self, notes: &str) -> Result<String, OrganizerError>;
}

#[derive(Debug)]
pub enum OrganizerError {
    EmptyNotes,
    MissingApiKey,
    Request(reqwest::Error),
    Api { status: u16, body: String },
    EmptyResponse,
}

impl OrganizerError {
    /// Message safe to show to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            OrganizerError::EmptyNotes => "Please enter the meeting notes first.",
            OrganizerError::MissingApiKey => "The text organizer API key is not configured.",
            _ => "Something went wrong while organizing the minutes.",
        }
    }

    /// Input problems, as opposed to failures of the service.
    pub fn is_validation(&self) -> bool {
        matches!(self, OrganizerError::EmptyNotes)
    }
}

impl fmt::Display for OrganizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrganizerError::EmptyNotes => write!(f, "No notes provided"),
            OrganizerError::MissingApiKey => write!(f, "GEMINI_API_KEY is not set"),
            OrganizerError::Request(e) => write!(f, "Gemini request failed: {e}"),
            OrganizerError::Api { status, body } => write!(f, "Gemini API error {status}: {body}"),
            OrganizerError::EmptyResponse => write!(f, "Gemini returned no text"),
        }
    }
}

impl std::error::Error for OrganizerError {}

impl From<reqwest::Error> for OrganizerError {
    fn from(e: reqwest::Error) -> Self {
        OrganizerError::Request(e)
    }
}

/// The full prompt sent for a set of notes.
pub fn build_prompt(notes: &str) -> String {
    INSTRUCTIONS.replace("{notes}", notes.trim())
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.iter().map(|p| p.text.as_str()).collect::<Vec<_>>().join(""))
            .unwrap_or_default()
    }
}

/// Gemini API client.
pub struct GeminiOrganizer {
    api_key: Option<String>,
    model: String,
    base_url: String,
    http: reqwest::Client,
}

impl GeminiOrganizer {
    pub fn new(api_key: Option<String>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                log::warn!("Falling back to default HTTP client for Gemini: {e}");
                reqwest::Client::new()
            });
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http,
        }
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl TextOrganizer for GeminiOrganizer {
    async fn organize(&self, notes: &str) -> Result<String, OrganizerError> {
        if notes.trim().is_empty() {
            return Err(OrganizerError::EmptyNotes);
        }
        let api_key = self.api_key.as_deref().ok_or(OrganizerError::MissingApiKey)?;

        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": build_prompt(notes) }] }],
        });
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let resp = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(OrganizerError::Api { status: status.as_u16(), body });
        }

        let parsed: GenerateResponse = resp.json().await?;
        let text = parsed.text();
        if text.trim().is_empty() {
            return Err(OrganizerError::EmptyResponse);
        }
        Ok(text)
    }
}
