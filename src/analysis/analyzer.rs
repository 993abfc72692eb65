use super::{AnalyzeRequest, fence, prompt, schema};
use crate::{
    Error, Result,
    config::{AnalysisConfig, LlmConfig},
    llm::{ChatCompletionRequest, ChatMessage, LlmClient, OpenAiClient},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Turns an [`AnalyzeRequest`] into the model's ESG analysis with a single
/// chat completion. Holds no per-request state and is shared across handlers.
pub struct Analyzer {
    llm_client: Arc<dyn LlmClient>,
    model: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    validate_schema: bool,
}

impl Analyzer {
    pub fn new(
        llm_client: Arc<dyn LlmClient>,
        llm_config: &LlmConfig,
        analysis_config: &AnalysisConfig,
    ) -> Self {
        Self {
            llm_client,
            model: llm_config.model.clone(),
            temperature: llm_config.temperature,
            max_tokens: llm_config.max_tokens,
            validate_schema: analysis_config.validate_schema,
        }
    }

    /// Builds an analyzer backed by the OpenAI client described by `llm_config`.
    pub fn from_config(llm_config: &LlmConfig, analysis_config: &AnalysisConfig) -> Self {
        let client = Arc::new(OpenAiClient::new(llm_config));
        Self::new(client, llm_config, analysis_config)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn analyze(&self, request: &AnalyzeRequest) -> Result<Value> {
        let completion_request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(prompt::SYSTEM_PROMPT),
                ChatMessage::user(prompt::build_user_prompt(request)),
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .llm_client
            .create_chat_completion(completion_request)
            .await?;

        if let Some(usage) = &response.usage {
            debug!(
                "Completion {} from {} used {} prompt / {} completion tokens",
                response.id, response.model, usage.prompt_tokens, usage.completion_tokens
            );
        }

        // An empty string is still handed to the parser and reported as invalid JSON.
        let Some(text) = response.first_content() else {
            warn!(
                "Completion {} carried no content (finish reason: {})",
                response.id,
                response.first_finish_reason().unwrap_or("none")
            );
            return Err(Error::llm("Model returned no content"));
        };

        let analysis: Value =
            serde_json::from_str(fence::strip_code_fence(text)).map_err(Error::InvalidJson)?;

        if self.validate_schema {
            if let Err(e) = schema::validate(&analysis) {
                warn!("Model output for {} failed validation: {}", request.company_name, e);
                return Err(e);
            }
        }

        Ok(analysis)
    }
}
