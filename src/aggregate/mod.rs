use crate::error::Result;
use crate::types::account::{check_amount, CreditProfile, CreditType};
use crate::types::scoring::{LatePayments, ScoreInput};
use tracing::debug;

/// Normalized engine input plus the totals only the report needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub input: ScoreInput,
    pub total_limit: f64,
    pub total_accounts: u32,
}

#[derive(Debug, Default)]
struct Totals {
    balances: f64,
    limit: f64,
    accounts_with_balance: u32,
    age_years: f64,
    accounts: u32,
    credit_types: Vec<CreditType>,
}

pub fn aggregate(profile: &CreditProfile) -> Result<Aggregation> {
    profile.validate()?;

    let mut totals = Totals::default();
    for account in &profile.accounts {
        totals.credit_types.push(account.credit_type);
        totals.age_years += account.account_age_months / 12.0;
        totals.accounts += 1;

        // Loan principal stands in for a limit so both kinds share one ratio.
        let (balance, limit) = account.balance_and_limit();
        totals.balances += balance;
        totals.limit += limit;
        if balance > 0.0 {
            totals.accounts_with_balance += 1;
        }
    }

    let avg_age = if totals.accounts > 0 {
        totals.age_years / f64::from(totals.accounts)
    } else {
        0.0
    };
    let credit_utilization = if totals.limit > 0.0 {
        totals.balances / totals.limit * 100.0
    } else {
        0.0
    };

    // Individually valid amounts can still overflow once summed.
    check_amount("total_balances", totals.balances)?;
    check_amount("total_limit", totals.limit)?;
    check_amount("avg_age", avg_age)?;
    check_amount("credit_utilization", credit_utilization)?;

    debug!(
        accounts = totals.accounts,
        credit_utilization, avg_age, "aggregated credit accounts"
    );

    let delinquencies = &profile.delinquencies;
    let input = ScoreInput {
        late_payments: LatePayments {
            days_30: delinquencies.late_30,
            days_60: delinquencies.late_60,
            days_90: delinquencies.late_90,
        },
        collections: delinquencies.collections,
        bankruptcies: delinquencies.bankruptcies,
        credit_utilization,
        total_balances: totals.balances,
        accounts_with_balance: totals.accounts_with_balance,
        avg_age,
        // No per-account min/max is tracked; both collapse to the average.
        oldest: avg_age,
        newest: avg_age,
        credit_types: totals.credit_types,
        inquiries_last_12mo: profile.new_credit.inquiries_last_12mo,
        new_accounts_6mo: profile.new_credit.new_accounts_6mo,
    };

    Ok(Aggregation {
        input,
        total_limit: totals.limit,
        total_accounts: totals.accounts,
    })
}
