//! Parsing of the meeting page form. The page carries the whole session:
//! one `member` entry per record plus a `status_{id}` radio for each.

use chrono::NaiveDate;

use crate::errors::AppError;
use crate::handlers::{get_all, get_field};
use crate::models::meeting::{AttendanceRecord, AttendanceStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetingAction {
    Generate,
    Organize,
    Send,
    Finalize,
}

impl MeetingAction {
    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s {
            "generate" => Ok(MeetingAction::Generate),
            "organize" => Ok(MeetingAction::Organize),
            "send" => Ok(MeetingAction::Send),
            "finalize" => Ok(MeetingAction::Finalize),
            other => Err(AppError::Validation(format!("Unknown action '{other}'"))),
        }
    }
}

#[derive(Debug)]
pub struct MeetingForm {
    pub date: NaiveDate,
    pub records: Vec<AttendanceRecord>,
    pub notes: String,
    pub minutes: String,
    pub action: MeetingAction,
}

impl MeetingForm {
    pub fn from_params(params: &[(String, String)]) -> Result<Self, AppError> {
        let date = NaiveDate::parse_from_str(get_field(params, "date").trim(), "%Y-%m-%d")
            .map_err(|_| AppError::Validation("Please pick a valid meeting date".to_string()))?;

        let mut records = Vec::new();
        for id in get_all(params, "member") {
            let raw = get_field(params, &format!("status_{id}"));
            let status = if raw.is_empty() {
                AttendanceStatus::Present
            } else {
                AttendanceStatus::parse(raw).ok_or_else(|| {
                    AppError::Validation(format!("Unknown attendance status '{raw}'"))
                })?
            };
            records.push(AttendanceRecord { member_id: id.to_string(), status });
        }

        Ok(Self {
            date,
            records,
            notes: get_field(params, "notes").to_string(),
            minutes: get_field(params, "minutes").to_string(),
            action: MeetingAction::parse(get_field(params, "action"))?,
        })
    }
}
