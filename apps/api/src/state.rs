use std::sync::Arc;

use sqlx::PgPool;

use crate::analysis::remote::CareerAnalyzer;
use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: LlmClient,
    /// Pluggable analyzer. Default: LlmAnalyzer; HeuristicAnalyzer is the
    /// deterministic backend used on fallback and in tests.
    pub analyzer: Arc<dyn CareerAnalyzer>,
    /// Kept for handlers that need runtime configuration later.
    #[allow(dead_code)]
    pub config: Config,
}
