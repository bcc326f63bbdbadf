use askama::Template;

use super::PageContext;

#[derive(Template)]
#[template(path = "settings.html")]
pub struct SettingsTemplate {
    pub ctx: PageContext,
    pub team_name: String,
    pub webhook_url: String,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "errors/404.html")]
pub struct NotFoundTemplate;
