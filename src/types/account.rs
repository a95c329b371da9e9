use crate::error::{Result, ScoreError};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditType {
    Mortgage,
    AutoLoan,
    CreditCard,
    PersonalLoan,
    RetailAccount,
    StudentLoan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditCategory {
    Revolving,
    Loan,
}

impl CreditType {
    #[cfg(test)]
    pub const ALL: [CreditType; 6] = [
        CreditType::Mortgage,
        CreditType::AutoLoan,
        CreditType::CreditCard,
        CreditType::PersonalLoan,
        CreditType::RetailAccount,
        CreditType::StudentLoan,
    ];

    pub fn category(self) -> CreditCategory {
        match self {
            CreditType::CreditCard | CreditType::RetailAccount => CreditCategory::Revolving,
            CreditType::Mortgage
            | CreditType::AutoLoan
            | CreditType::PersonalLoan
            | CreditType::StudentLoan => CreditCategory::Loan,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CreditType::Mortgage => "mortgage",
            CreditType::AutoLoan => "auto_loan",
            CreditType::CreditCard => "credit_card",
            CreditType::PersonalLoan => "personal_loan",
            CreditType::RetailAccount => "retail_account",
            CreditType::StudentLoan => "student_loan",
        }
    }
}

impl fmt::Display for CreditType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category-specific facts for one account. Revolving accounts report a
/// balance against a limit; loans report what is left of the principal.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountDetails {
    Revolving {
        balance: f64,
        credit_limit: f64,
    },
    Loan {
        current_balance: f64,
        original_loan_amount: f64,
        monthly_payment: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawAccount")]
pub struct AccountRecord {
    pub credit_type: CreditType,
    pub account_age_months: f64,
    pub details: AccountDetails,
}

#[cfg(test)]
impl AccountRecord {
    pub fn revolving(credit_type: CreditType, age_months: f64, balance: f64, limit: f64) -> Self {
        Self {
            credit_type,
            account_age_months: age_months,
            details: AccountDetails::Revolving {
                balance,
                credit_limit: limit,
            },
        }
    }

    pub fn loan(
        credit_type: CreditType,
        age_months: f64,
        current_balance: f64,
        original_loan_amount: f64,
        monthly_payment: f64,
    ) -> Self {
        Self {
            credit_type,
            account_age_months: age_months,
            details: AccountDetails::Loan {
                current_balance,
                original_loan_amount,
                monthly_payment,
            },
        }
    }
}

impl AccountRecord {
    /// Balance and the amount it is measured against (limit or principal).
    pub fn balance_and_limit(&self) -> (f64, f64) {
        match self.details {
            AccountDetails::Revolving {
                balance,
                credit_limit,
            } => (balance, credit_limit),
            AccountDetails::Loan {
                current_balance,
                original_loan_amount,
                ..
            } => (current_balance, original_loan_amount),
        }
    }

    pub fn validate(&self, index: usize) -> Result<()> {
        let prefix = format!("accounts[{index}]");
        let details_match = matches!(
            (self.credit_type.category(), &self.details),
            (CreditCategory::Revolving, AccountDetails::Revolving { .. })
                | (CreditCategory::Loan, AccountDetails::Loan { .. })
        );
        if !details_match {
            return Err(ScoreError::invalid(
                &prefix,
                format!("details do not match credit type {}", self.credit_type),
            ));
        }

        check_amount(&format!("{prefix}.account_age_months"), self.account_age_months)?;
        match self.details {
            AccountDetails::Revolving {
                balance,
                credit_limit,
            } => {
                check_amount(&format!("{prefix}.balance"), balance)?;
                check_amount(&format!("{prefix}.credit_limit"), credit_limit)?;
            }
            AccountDetails::Loan {
                current_balance,
                original_loan_amount,
                monthly_payment,
            } => {
                check_amount(&format!("{prefix}.current_balance"), current_balance)?;
                check_amount(
                    &format!("{prefix}.original_loan_amount"),
                    original_loan_amount,
                )?;
                check_amount(&format!("{prefix}.monthly_payment"), monthly_payment)?;
            }
        }
        Ok(())
    }
}

pub(crate) fn check_amount(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(ScoreError::invalid(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(ScoreError::invalid(
            field,
            format!("must be non-negative (found {value})"),
        ));
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawAccount {
    credit_type: CreditType,
    #[serde(alias = "account_age")]
    account_age_months: f64,
    balance: Option<f64>,
    credit_limit: Option<f64>,
    current_balance: Option<f64>,
    #[serde(alias = "loan_amount")]
    original_loan_amount: Option<f64>,
    monthly_payment: Option<f64>,
}

impl TryFrom<RawAccount> for AccountRecord {
    type Error = ScoreError;

    fn try_from(raw: RawAccount) -> Result<Self> {
        let kind = raw.credit_type;
        let revolving_fields = [("balance", raw.balance), ("credit_limit", raw.credit_limit)];
        let loan_fields = [
            ("current_balance", raw.current_balance),
            ("original_loan_amount", raw.original_loan_amount),
            ("monthly_payment", raw.monthly_payment),
        ];

        let (required, foreign) = match kind.category() {
            CreditCategory::Revolving => (&revolving_fields[..], &loan_fields[..]),
            CreditCategory::Loan => (&loan_fields[..], &revolving_fields[..]),
        };

        let missing = required
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(ScoreError::InvalidInput(format!(
                "{kind} account is missing {}",
                missing.join(", ")
            )));
        }

        let stray = foreign
            .iter()
            .filter(|(_, value)| value.is_some())
            .map(|(name, _)| *name)
            .collect::<Vec<_>>();
        if !stray.is_empty() {
            return Err(ScoreError::InvalidInput(format!(
                "{kind} account cannot carry {}",
                stray.join(", ")
            )));
        }

        let details = match kind.category() {
            CreditCategory::Revolving => AccountDetails::Revolving {
                balance: raw.balance.unwrap_or_default(),
                credit_limit: raw.credit_limit.unwrap_or_default(),
            },
            CreditCategory::Loan => AccountDetails::Loan {
                current_balance: raw.current_balance.unwrap_or_default(),
                original_loan_amount: raw.original_loan_amount.unwrap_or_default(),
                monthly_payment: raw.monthly_payment.unwrap_or_default(),
            },
        };

        Ok(AccountRecord {
            credit_type: kind,
            account_age_months: raw.account_age_months,
            details,
        })
    }
}

/// Applicant-wide delinquency counters. Absent from a profile means none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DelinquencyRecord {
    #[serde(default)]
    pub late_30: u32,
    #[serde(default)]
    pub late_60: u32,
    #[serde(default)]
    pub late_90: u32,
    #[serde(default)]
    pub collections: u32,
    #[serde(default)]
    pub bankruptcies: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NewCreditActivity {
    #[serde(default)]
    pub inquiries_last_12mo: u32,
    #[serde(default)]
    pub new_accounts_6mo: u32,
}

/// Everything the collection step hands over for one applicant.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreditProfile {
    #[serde(default)]
    pub delinquencies: DelinquencyRecord,
    #[serde(default)]
    pub new_credit: NewCreditActivity,
    #[serde(default)]
    pub accounts: Vec<AccountRecord>,
}

impl CreditProfile {
    pub fn validate(&self) -> Result<()> {
        for (index, account) in self.accounts.iter().enumerate() {
            account.validate(index)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credit_type_categories_are_exhaustive() {
        let revolving = CreditType::ALL
            .iter()
            .filter(|kind| kind.category() == CreditCategory::Revolving)
            .count();
        assert_eq!(revolving, 2);
        assert_eq!(CreditType::StudentLoan.category(), CreditCategory::Loan);
        assert_eq!(CreditType::RetailAccount.to_string(), "retail_account");
    }

    #[test]
    fn parse_profile_with_both_account_groups() {
        let profile: CreditProfile = toml::from_str(
            r#"
[delinquencies]
late_30 = 1

[[accounts]]
credit_type = "credit_card"
account_age_months = 24
balance = 500
credit_limit = 1000

[[accounts]]
credit_type = "auto_loan"
account_age_months = 12.5
current_balance = 8000
original_loan_amount = 15000
monthly_payment = 320
"#,
        )
        .expect("profile should parse");

        assert_eq!(profile.delinquencies.late_30, 1);
        assert_eq!(profile.new_credit, NewCreditActivity::default());
        assert_eq!(
            profile.accounts[0],
            AccountRecord::revolving(CreditType::CreditCard, 24.0, 500.0, 1000.0)
        );
        assert_eq!(
            profile.accounts[1],
            AccountRecord::loan(CreditType::AutoLoan, 12.5, 8000.0, 15000.0, 320.0)
        );
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn parse_accepts_collection_step_field_names() {
        let account: AccountRecord = toml::from_str(
            r#"
credit_type = "mortgage"
account_age = 60
loan_amount = 200000
current_balance = 150000
monthly_payment = 1200
"#,
        )
        .expect("aliases should parse");
        assert_eq!(account.balance_and_limit(), (150000.0, 200000.0));
    }

    #[test]
    fn parse_rejects_missing_field_group() {
        let err = toml::from_str::<AccountRecord>(
            r#"
credit_type = "credit_card"
account_age_months = 10
balance = 50
"#,
        )
        .expect_err("credit card without limit should fail");
        assert!(err.to_string().contains("missing credit_limit"));
    }

    #[test]
    fn parse_rejects_fields_from_other_group() {
        let err = toml::from_str::<AccountRecord>(
            r#"
credit_type = "student_loan"
account_age_months = 10
current_balance = 50
original_loan_amount = 100
monthly_payment = 5
credit_limit = 300
"#,
        )
        .expect_err("loan with a credit limit should fail");
        assert!(err.to_string().contains("cannot carry credit_limit"));
    }

    #[test]
    fn parse_rejects_unknown_credit_type() {
        let result = toml::from_str::<AccountRecord>(
            r#"
credit_type = "payday_loan"
account_age_months = 10
balance = 50
credit_limit = 100
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn parse_rejects_negative_counters() {
        let result = toml::from_str::<CreditProfile>(
            r#"
[delinquencies]
collections = -1
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_negative_amounts() {
        let profile = CreditProfile {
            accounts: vec![
                AccountRecord::revolving(CreditType::CreditCard, 12.0, 10.0, 100.0),
                AccountRecord::revolving(CreditType::RetailAccount, 12.0, -5.0, 100.0),
            ],
            ..CreditProfile::default()
        };
        let err = profile.validate().expect_err("negative balance should fail");
        assert!(matches!(err, ScoreError::InvalidInput(_)));
        assert!(err.to_string().contains("accounts[1].balance"));
    }

    #[test]
    fn validate_rejects_non_finite_age() {
        let account = AccountRecord::loan(CreditType::Mortgage, f64::NAN, 1.0, 1.0, 1.0);
        let err = account.validate(0).expect_err("NaN age should fail");
        assert!(err.to_string().contains("account_age_months"));
    }

    #[test]
    fn validate_rejects_details_for_wrong_category() {
        let account = AccountRecord {
            credit_type: CreditType::Mortgage,
            account_age_months: 1.0,
            details: AccountDetails::Revolving {
                balance: 1.0,
                credit_limit: 1.0,
            },
        };
        assert!(account.validate(3).is_err());
    }
}
