mod analyzer;
pub mod fence;
pub mod prompt;
pub mod schema;

pub use analyzer::Analyzer;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub company_name: String,
    pub business_type: String,
}
