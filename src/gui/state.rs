use std::sync::Arc;

use crate::{Advisor, GeminiClient, ViewController};

#[derive(Debug, Clone)]
pub struct AppState {
    pub session: ViewController,
    pub advisor: Arc<Advisor<GeminiClient>>,
    /// Suggested name for exported reports
    pub report_file_name: String,
}
