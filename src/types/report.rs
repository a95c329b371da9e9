use super::config::ScoreConfig;
use super::scoring::{ComponentScores, FinalScore, ScoreCard};
use crate::aggregate::Aggregation;
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    /// Percent, one decimal.
    pub credit_utilization: f64,
    pub total_balances: f64,
    pub total_limit: f64,
    pub accounts_with_balance: u32,
    pub total_accounts: u32,
    /// Years, one decimal.
    pub avg_age: f64,
    pub credit_types: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub generated_at: String,
    pub final_score: FinalScore,
    pub components: ComponentScores,
    pub summary: Option<ReportSummary>,
}

impl ScoreReport {
    pub fn new(card: &ScoreCard, aggregation: Option<&Aggregation>, config: &ScoreConfig) -> Self {
        let summary = aggregation.map(|aggregation| {
            let input = &aggregation.input;
            ReportSummary {
                credit_utilization: round_one_decimal(input.credit_utilization),
                total_balances: input.total_balances,
                total_limit: aggregation.total_limit,
                accounts_with_balance: input.accounts_with_balance,
                total_accounts: aggregation.total_accounts,
                avg_age: round_one_decimal(input.avg_age),
                credit_types: input
                    .credit_types
                    .iter()
                    .map(|kind| kind.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            }
        });

        Self {
            generated_at: Utc::now().to_rfc3339(),
            final_score: FinalScore::from_score(card.overall, config.range_margin()),
            components: card.components,
            summary,
        }
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
