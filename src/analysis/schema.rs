//! Typed view of the analysis document the model is asked to produce.
//!
//! The service relays the model's JSON untouched; these types are only used
//! when schema validation is switched on.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

pub const MAX_SOURCES: usize = 6;
pub const PILLARS: [&str; 3] = ["environmental", "social", "governance"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub company: String,
    pub business_type: String,
    pub summary: String,
    pub esg_scores: EsgScores,
    #[serde(default)]
    pub sources: Vec<Source>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EsgScores {
    pub environmental: PillarScore,
    pub social: PillarScore,
    pub governance: PillarScore,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PillarScore {
    pub score: f64,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub url: String,
    pub publisher: String,
    pub published_date: String,
    pub summary: String,
    #[serde(default)]
    pub relevance: Vec<String>,
    #[serde(default)]
    pub contributions: HashMap<String, Contribution>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contribution {
    pub score: f64,
    pub reasoning: String,
}

impl EsgScores {
    fn pillars(&self) -> [(&'static str, &PillarScore); 3] {
        [
            ("environmental", &self.environmental),
            ("social", &self.social),
            ("governance", &self.governance),
        ]
    }
}

/// Checks that `value` has the shape and ranges of an [`AnalysisReport`].
pub fn validate(value: &Value) -> Result<AnalysisReport> {
    let report = AnalysisReport::deserialize(value)
        .map_err(|e| Error::invalid_analysis(e.to_string()))?;

    for (pillar, score) in report.esg_scores.pillars() {
        check_score(score.score, &format!("esg_scores.{pillar}"))?;
    }

    if report.sources.len() > MAX_SOURCES {
        return Err(Error::invalid_analysis(format!(
            "expected at most {} sources, got {}",
            MAX_SOURCES,
            report.sources.len()
        )));
    }

    for (i, source) in report.sources.iter().enumerate() {
        for category in &source.relevance {
            if !PILLARS.contains(&category.as_str()) {
                return Err(Error::invalid_analysis(format!(
                    "sources[{i}].relevance has unknown category '{category}'"
                )));
            }
        }
        for (category, contribution) in &source.contributions {
            check_score(
                contribution.score,
                &format!("sources[{i}].contributions.{category}"),
            )?;
        }
    }

    Ok(report)
}

fn check_score(score: f64, field: &str) -> Result<()> {
    if (0.0..=100.0).contains(&score) {
        Ok(())
    } else {
        Err(Error::invalid_analysis(format!(
            "{field}.score must be within 0-100, got {score}"
        )))
    }
}
