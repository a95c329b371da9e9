use super::scoring::Component;
use crate::error::ScoreError;
use serde::Deserialize;
use std::collections::HashMap;

pub const DEFAULT_RANGE_MARGIN: u16 = 15;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreConfig {
    pub scoring: Option<ScoringConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub weights: Option<HashMap<String, f64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStyle {
    Md,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub range_margin: Option<u16>,
    pub format: Option<ReportStyle>,
}

impl ScoreConfig {
    pub fn default_weights() -> [f64; 5] {
        [0.35, 0.30, 0.15, 0.10, 0.10]
    }

    pub fn weights(&self) -> [f64; 5] {
        let defaults = Self::default_weights();
        match self.scoring.as_ref().and_then(|scoring| scoring.weights.as_ref()) {
            Some(weights) => {
                let mut resolved = defaults;
                for (slot, component) in resolved.iter_mut().zip(Component::ALL) {
                    if let Some(weight) = weights.get(component.key()) {
                        *slot = *weight;
                    }
                }
                resolved
            }
            None => defaults,
        }
    }

    pub fn range_margin(&self) -> u16 {
        self.report
            .as_ref()
            .and_then(|report| report.range_margin)
            .unwrap_or(DEFAULT_RANGE_MARGIN)
    }

    pub fn report_style(&self) -> Option<ReportStyle> {
        self.report.as_ref().and_then(|report| report.format)
    }

    pub fn validate(&self) -> Result<(), ScoreError> {
        let weights = self.weights();
        if weights.iter().any(|weight| !(0.0..=1.0).contains(weight)) {
            return Err(ScoreError::ConfigParse(
                "scoring.weights values must be between 0.0 and 1.0".to_string(),
            ));
        }
        let weight_sum: f64 = weights.iter().sum();
        if (weight_sum - 1.0).abs() > 0.001 {
            return Err(ScoreError::ConfigParse(format!(
                "scoring.weights must sum to 1.0 (found {:.3})",
                weight_sum
            )));
        }

        if let Some(weights) = self.scoring.as_ref().and_then(|scoring| scoring.weights.as_ref())
        {
            let mut unknown = weights
                .keys()
                .filter(|key| !Component::ALL.iter().any(|c| c.key() == key.as_str()))
                .cloned()
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                unknown.sort();
                return Err(ScoreError::ConfigParse(format!(
                    "scoring.weights contains unknown key(s): {}",
                    unknown.join(", ")
                )));
            }
        }

        if self.range_margin() > 100 {
            return Err(ScoreError::ConfigParse(
                "report.range_margin must be at most 100".to_string(),
            ));
        }

        Ok(())
    }
}
