use std::sync::Arc;

use crate::ats::analyzer::AtsAnalyzer;
use crate::config::Config;
use crate::embedding::EmbeddingProvider;
use crate::matching::scoring::MatchEngine;
use crate::suggestions::generator::SuggestionEngine;
use crate::vocab::Vocabulary;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub vocab: Arc<Vocabulary>,
    pub engine: Arc<MatchEngine>,
    pub ats: Arc<AtsAnalyzer>,
    pub suggester: Arc<SuggestionEngine>,
    /// Pluggable embedding backend. None when EMBEDDING_API_URL is unset;
    /// scoring then runs without the semantic component.
    pub embedder: Option<Arc<dyn EmbeddingProvider>>,
}
