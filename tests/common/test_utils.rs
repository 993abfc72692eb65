use super::mocks::MockLlmClient;
use axum::Router;
use ecotrack_rust::{
    analysis::Analyzer,
    config::{AnalysisConfig, Config, LlmConfig},
    server::{self, handlers::AppState},
};
use serde_json::{Value, json};
use std::sync::Arc;

/// Test configuration pointing at `base_url` with the given key.
pub fn create_test_config(base_url: &str, api_key: &str) -> Config {
    let mut config = Config::default();
    config.llm = LlmConfig {
        base_url: base_url.to_string(),
        api_key: api_key.to_string(),
        ..LlmConfig::default()
    };
    config
}

/// Router backed by the given mock client.
pub fn create_test_app(mock: MockLlmClient) -> Router {
    create_test_app_with(mock, AnalysisConfig::default())
}

pub fn create_test_app_with(mock: MockLlmClient, analysis: AnalysisConfig) -> Router {
    let analyzer = Analyzer::new(Arc::new(mock), &LlmConfig::default(), &analysis);
    server::router(AppState {
        analyzer: Arc::new(analyzer),
    })
}

/// Router backed by a real OpenAI client built from `config`.
pub fn create_openai_app(config: &Config) -> Router {
    let analyzer = Analyzer::from_config(&config.llm, &config.analysis);
    server::router(AppState {
        analyzer: Arc::new(analyzer),
    })
}

/// A well-formed analysis document as the model is asked to return it.
pub fn sample_analysis() -> Value {
    json!({
        "company": "Acme Retail",
        "business_type": "Retail",
        "summary": "Acme shows progress on packaging waste with limited social disclosure.",
        "esg_scores": {
            "environmental": {"score": 64, "description": "Packaging reduction targets."},
            "social": {"score": 0, "description": "Insufficient evidence."},
            "governance": {"score": 52, "description": "New independent directors."}
        },
        "sources": [{
            "title": "Acme pledges to halve packaging waste",
            "url": "https://news.example.com/acme-packaging",
            "publisher": "Example News",
            "published_date": "2025-02-14",
            "summary": "Acme set a 2027 packaging target.",
            "relevance": ["environmental"],
            "contributions": {
                "environmental": {"score": 70, "reasoning": "Concrete waste reduction targets."}
            }
        }]
    })
}

pub fn analyze_body() -> Value {
    json!({
        "company_name": "Acme Retail",
        "business_type": "Retail"
    })
}
