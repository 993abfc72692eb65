use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("OpenAI error: {0}")]
    OpenAi(#[from] async_openai::error::OpenAIError),

    #[error("Invalid JSON response from AI: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Invalid analysis from AI: {0}")]
    InvalidAnalysis(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn llm(msg: impl Into<String>) -> Self {
        Self::Llm(msg.into())
    }

    pub fn invalid_analysis(msg: impl Into<String>) -> Self {
        Self::InvalidAnalysis(msg.into())
    }

    /// Whether the failure is about the shape of the model's answer rather
    /// than about reaching the model at all.
    pub fn is_model_output(&self) -> bool {
        matches!(self, Self::InvalidJson(_) | Self::InvalidAnalysis(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_json_message_names_parse_failure() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = Error::InvalidJson(parse_err);

        assert!(err.to_string().starts_with("Invalid JSON response from AI: "));
        assert!(err.is_model_output());
    }

    #[test]
    fn test_llm_error_is_not_model_output() {
        let err = Error::llm("Model returned no choices");
        assert_eq!(err.to_string(), "LLM error: Model returned no choices");
        assert!(!err.is_model_output());
    }
}
