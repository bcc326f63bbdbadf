use serde::{Deserialize, Serialize};

use crate::models::assignment::AssignmentRecord;
use crate::models::meeting::AttendanceRecord;
use crate::notice::{AttendanceSummary, SubmissionSummary};

/// API error response.
#[derive(Serialize, Debug)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into(), details: None }
    }
}

#[derive(Deserialize, Debug)]
pub struct ApiCreateMemberRequest {
    pub name: String,
}

/// Note-organizing request, as posted by the meeting page.
#[derive(Deserialize, Debug)]
pub struct ApiGenerateRequest {
    #[serde(default)]
    pub notes: String,
}

#[derive(Serialize, Debug)]
pub struct ApiGenerateResponse {
    pub result: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ApiMinutesRequest {
    /// `YYYY-MM-DD`; defaults to today.
    #[serde(default)]
    pub date: Option<String>,
    pub records: Vec<AttendanceRecord>,
    #[serde(default)]
    pub content: String,
}

#[derive(Serialize, Debug)]
pub struct ApiMinutesResponse {
    pub text: String,
    pub summary: AttendanceSummary,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ApiNoticeRequest {
    #[serde(default)]
    pub week_label: String,
    #[serde(default)]
    pub deadline: String,
    pub records: Vec<AssignmentRecord>,
}

#[derive(Serialize, Debug)]
pub struct ApiNoticeResponse {
    pub text: String,
    pub rate: u32,
    pub summary: SubmissionSummary,
}

#[derive(Deserialize, Debug)]
pub struct ApiFinalizeMeetingRequest {
    pub records: Vec<AttendanceRecord>,
}

#[derive(Deserialize, Debug)]
pub struct ApiFinalizeAssignmentRequest {
    pub records: Vec<AssignmentRecord>,
}

#[derive(Deserialize, Debug)]
pub struct ApiNotifyRequest {
    pub text: String,
}

#[derive(Serialize, Debug)]
pub struct ApiNotifyResponse {
    pub sent: bool,
}
