use crate::config::Config;
use crate::outreach::OutreachWriter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// `None` when no OpenAI key is configured; AI features report disabled.
    pub writer: Option<OutreachWriter>,
}

impl AppState {
    pub fn ai_enabled(&self) -> bool {
        self.writer.is_some()
    }
}
