mod client;
mod types;

pub use client::{LlmClient, OpenAiClient};
pub use types::*;

#[cfg(test)]
pub use client::MockLlmClient;
