pub mod amounts_owed;
pub mod credit_mix;
pub mod length_of_history;
pub mod new_credit;
pub mod payment_history;

use crate::error::Result;
use crate::types::scoring::{ScoreCard, ScoreInput};
use tracing::debug;

/// Score one normalized input. `weights` follow `Component::ALL` order.
pub fn evaluate(input: &ScoreInput, weights: &[f64; 5]) -> Result<ScoreCard> {
    input.validate()?;

    let payment_history = payment_history::payment_history_score(
        &input.late_payments,
        input.collections,
        input.bankruptcies,
    );
    let amounts_owed =
        amounts_owed::amounts_owed_score(input.credit_utilization, input.accounts_with_balance);
    let length_of_history = length_of_history::length_of_history_score(input.avg_age, input.oldest);
    let credit_mix = credit_mix::credit_mix_score(&input.credit_types);
    let new_credit =
        new_credit::new_credit_score(input.inquiries_last_12mo, input.new_accounts_6mo);

    let card = ScoreCard::new(
        payment_history,
        amounts_owed,
        length_of_history,
        credit_mix,
        new_credit,
    )
    .finalize(weights);

    debug!(
        payment_history,
        amounts_owed,
        length_of_history,
        credit_mix,
        new_credit,
        weighted = card.weighted,
        overall = card.overall,
        "scored input"
    );
    Ok(card)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::error::ScoreError;
    use crate::types::account::{
        AccountRecord, CreditProfile, CreditType, DelinquencyRecord, NewCreditActivity,
    };
    use crate::types::config::ScoreConfig;
    use crate::types::scoring::{Component, LatePayments};

    fn weights() -> [f64; 5] {
        ScoreConfig::default_weights()
    }

    #[test]
    fn single_credit_card_end_to_end() {
        let profile = CreditProfile {
            accounts: vec![AccountRecord::revolving(
                CreditType::CreditCard,
                24.0,
                500.0,
                1000.0,
            )],
            ..CreditProfile::default()
        };
        let aggregation = aggregate(&profile).expect("profile is valid");
        let card = evaluate(&aggregation.input, &weights()).expect("input is valid");

        assert_eq!(card.components.payment_history, 100.0);
        assert_eq!(card.components.amounts_owed, 60.0);
        assert_eq!(card.components.length_of_history, 50.0);
        assert_eq!(card.components.credit_mix, 50.0);
        assert_eq!(card.components.new_credit, 100.0);
        assert!((card.weighted - 75.5).abs() < 1e-9);
        assert_eq!(card.overall, 715);
    }

    #[test]
    fn empty_profile_scores_deterministically() {
        let aggregation = aggregate(&CreditProfile::default()).expect("empty profile is valid");
        let card = evaluate(&aggregation.input, &weights()).expect("input is valid");

        assert_eq!(card.components.length_of_history, 30.0);
        assert_eq!(card.components.credit_mix, 40.0);
        assert_eq!(card.overall, 759);
    }

    #[test]
    fn neutral_defaults_score_without_error() {
        let card = evaluate(&ScoreInput::default(), &weights()).expect("defaults are valid");
        assert_eq!(card.components.length_of_history, 70.0);
        assert_eq!(card.overall, 792);
    }

    #[test]
    fn troubled_history_hits_the_floor() {
        let input = ScoreInput {
            late_payments: LatePayments {
                days_30: 3,
                days_60: 2,
                days_90: 2,
            },
            collections: 2,
            bankruptcies: 1,
            credit_utilization: 95.0,
            accounts_with_balance: 8,
            avg_age: 0.5,
            oldest: 0.5,
            newest: 0.5,
            inquiries_last_12mo: 15,
            new_accounts_6mo: 4,
            ..ScoreInput::default()
        };
        let card = evaluate(&input, &weights()).expect("input is valid");
        for (component, score) in card.components.named() {
            assert!((0.0..=100.0).contains(&score), "{component} out of range");
        }
        assert_eq!(card.components.payment_history, 0.0);
        assert_eq!(card.components.amounts_owed, 0.0);
        assert_eq!(card.components.new_credit, 0.0);
        // only length of history (30) and credit mix (40) contribute
        assert_eq!(card.overall, 347);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let profile = CreditProfile {
            delinquencies: DelinquencyRecord {
                late_30: 1,
                ..DelinquencyRecord::default()
            },
            new_credit: NewCreditActivity {
                inquiries_last_12mo: 2,
                new_accounts_6mo: 1,
            },
            accounts: vec![
                AccountRecord::revolving(CreditType::RetailAccount, 70.0, 120.0, 900.0),
                AccountRecord::loan(CreditType::StudentLoan, 100.0, 9000.0, 20000.0, 180.0),
            ],
        };

        let first = aggregate(&profile).expect("profile is valid");
        let second = aggregate(&profile).expect("profile is valid");
        assert_eq!(first, second);

        let first_card = evaluate(&first.input, &weights()).expect("input is valid");
        let second_card = evaluate(&second.input, &weights()).expect("input is valid");
        assert_eq!(first_card.components, second_card.components);
        assert_eq!(first_card.overall, second_card.overall);
    }

    #[test]
    fn custom_weights_change_the_blend() {
        let only_credit_mix = [0.0, 0.0, 0.0, 1.0, 0.0];
        let card = evaluate(&ScoreInput::default(), &only_credit_mix).expect("input is valid");
        assert_eq!(card.components.get(Component::CreditMix), 40.0);
        assert_eq!(card.overall, 520);
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let input = ScoreInput {
            avg_age: f64::INFINITY,
            ..ScoreInput::default()
        };
        let err = evaluate(&input, &weights()).expect_err("infinite age should fail");
        assert!(matches!(err, ScoreError::InvalidInput(_)));
        assert!(err.to_string().contains("avg_age"));
    }
}
