// Template context structures for Askama templates, organized by page.

use actix_session::Session;

use crate::session::{csrf, take_flash};
use crate::state::AppState;

/// Common context shared by all pages.
/// Templates access these as `ctx.team_name`, `ctx.flash`, etc.
pub struct PageContext {
    pub team_name: String,
    pub flash: Option<String>,
    pub csrf_token: String,
    pub current_path: String,
}

impl PageContext {
    pub async fn build(session: &Session, state: &AppState, current_path: &str) -> Self {
        let settings = state.settings.get().await;
        Self {
            team_name: settings.team_name,
            flash: take_flash(session),
            csrf_token: csrf::get_or_create_token(session),
            current_path: current_path.to_string(),
        }
    }

    /// Navigation highlight.
    pub fn is_active(&self, path: &str) -> bool {
        self.current_path == path
    }
}

mod api;
mod assignment;
mod common;
mod dashboard;
mod meeting;

pub use api::*;
pub use assignment::*;
pub use common::*;
pub use dashboard::*;
pub use meeting::*;
