use super::account::{check_amount, CreditType};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type Score = f64;

pub const MIN_SCORE: u16 = 300;
pub const MAX_SCORE: u16 = 850;
const POINTS_PER_WEIGHTED_UNIT: f64 = 5.5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LatePayments {
    #[serde(rename = "30", default)]
    pub days_30: u32,
    #[serde(rename = "60", default)]
    pub days_60: u32,
    #[serde(rename = "90", default)]
    pub days_90: u32,
}

/// Normalized risk factors handed from aggregation to the engine.
///
/// Deserializing a partial record fills every absent field from
/// [`ScoreInput::default`], which holds neutral values rather than zeros for
/// the age fields.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoreInput {
    pub late_payments: LatePayments,
    pub collections: u32,
    pub bankruptcies: u32,
    pub credit_utilization: f64,
    pub total_balances: f64,
    pub accounts_with_balance: u32,
    pub avg_age: f64,
    pub oldest: f64,
    pub newest: f64,
    pub credit_types: Vec<CreditType>,
    pub inquiries_last_12mo: u32,
    pub new_accounts_6mo: u32,
}

impl Default for ScoreInput {
    fn default() -> Self {
        Self {
            late_payments: LatePayments::default(),
            collections: 0,
            bankruptcies: 0,
            credit_utilization: 0.0,
            total_balances: 0.0,
            accounts_with_balance: 0,
            avg_age: 5.0,
            oldest: 5.0,
            newest: 1.0,
            credit_types: Vec::new(),
            inquiries_last_12mo: 0,
            new_accounts_6mo: 0,
        }
    }
}

impl ScoreInput {
    pub fn validate(&self) -> Result<()> {
        check_amount("credit_utilization", self.credit_utilization)?;
        check_amount("total_balances", self.total_balances)?;
        check_amount("avg_age", self.avg_age)?;
        check_amount("oldest", self.oldest)?;
        check_amount("newest", self.newest)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    PaymentHistory,
    AmountsOwed,
    LengthOfHistory,
    CreditMix,
    NewCredit,
}

impl Component {
    pub const ALL: [Component; 5] = [
        Component::PaymentHistory,
        Component::AmountsOwed,
        Component::LengthOfHistory,
        Component::CreditMix,
        Component::NewCredit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Component::PaymentHistory => "Payment History",
            Component::AmountsOwed => "Amounts Owed",
            Component::LengthOfHistory => "Length of History",
            Component::CreditMix => "Credit Mix",
            Component::NewCredit => "New Credit",
        }
    }

    /// Key used for this component under `[scoring.weights]`.
    pub fn key(self) -> &'static str {
        match self {
            Component::PaymentHistory => "payment_history",
            Component::AmountsOwed => "amounts_owed",
            Component::LengthOfHistory => "length_of_history",
            Component::CreditMix => "credit_mix",
            Component::NewCredit => "new_credit",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentScores {
    pub payment_history: Score,
    pub amounts_owed: Score,
    pub length_of_history: Score,
    pub credit_mix: Score,
    pub new_credit: Score,
}

impl ComponentScores {
    pub fn get(&self, component: Component) -> Score {
        match component {
            Component::PaymentHistory => self.payment_history,
            Component::AmountsOwed => self.amounts_owed,
            Component::LengthOfHistory => self.length_of_history,
            Component::CreditMix => self.credit_mix,
            Component::NewCredit => self.new_credit,
        }
    }

    pub fn named(&self) -> [(Component, Score); 5] {
        Component::ALL.map(|component| (component, self.get(component)))
    }

    fn as_array(&self) -> [Score; 5] {
        Component::ALL.map(|component| self.get(component))
    }
}

#[derive(Debug, Clone)]
pub struct ScoreCard {
    pub components: ComponentScores,
    pub weighted: Score,
    pub overall: u16,
}

impl ScoreCard {
    pub fn new(
        payment_history: Score,
        amounts_owed: Score,
        length_of_history: Score,
        credit_mix: Score,
        new_credit: Score,
    ) -> ScoreCardBuilder {
        ScoreCardBuilder {
            components: ComponentScores {
                payment_history,
                amounts_owed,
                length_of_history,
                credit_mix,
                new_credit,
            },
        }
    }
}

pub struct ScoreCardBuilder {
    components: ComponentScores,
}

impl ScoreCardBuilder {
    /// Weights are ordered like [`Component::ALL`].
    pub fn finalize(self, weights: &[f64; 5]) -> ScoreCard {
        let weighted: Score = self
            .components
            .as_array()
            .iter()
            .zip(weights.iter())
            .map(|(score, weight)| score * weight)
            .sum();
        let raw = f64::from(MIN_SCORE) + weighted * POINTS_PER_WEIGHTED_UNIT;
        let clamped = raw.clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE));
        ScoreCard {
            components: self.components,
            weighted,
            overall: clamped.round_ties_even() as u16,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinalScore {
    pub score: u16,
    pub range_low: u16,
    pub range_high: u16,
    /// Position of `score` within 300..=850, as a percentage.
    pub range_position: f64,
}

impl FinalScore {
    pub fn from_score(score: u16, margin: u16) -> Self {
        let span = f64::from(MAX_SCORE - MIN_SCORE);
        Self {
            score,
            range_low: score.saturating_sub(margin),
            range_high: score.saturating_add(margin),
            range_position: (f64::from(score) - f64::from(MIN_SCORE)) / span * 100.0,
        }
    }
}
