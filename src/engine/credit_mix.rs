use crate::types::account::{CreditCategory, CreditType};
use crate::types::scoring::Score;

pub fn credit_mix_score(credit_types: &[CreditType]) -> Score {
    let has = |category: CreditCategory| credit_types.iter().any(|kind| kind.category() == category);
    let mut score: Score = 40.0;
    if has(CreditCategory::Revolving) {
        score += 10.0;
    }
    if has(CreditCategory::Loan) {
        score += 10.0;
    }
    score.min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_accounts_scores_base() {
        assert_eq!(credit_mix_score(&[]), 40.0);
    }

    #[test]
    fn one_point_step_per_category() {
        assert_eq!(credit_mix_score(&[CreditType::Mortgage]), 50.0);
        assert_eq!(credit_mix_score(&[CreditType::CreditCard]), 50.0);
        assert_eq!(
            credit_mix_score(&[CreditType::CreditCard, CreditType::Mortgage]),
            60.0
        );
    }

    #[test]
    fn duplicates_count_once() {
        assert_eq!(
            credit_mix_score(&[
                CreditType::RetailAccount,
                CreditType::CreditCard,
                CreditType::RetailAccount
            ]),
            50.0
        );
        assert_eq!(credit_mix_score(&CreditType::ALL), 60.0);
    }
}
