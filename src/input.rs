use crate::error::{Result, ScoreError};
use crate::types::account::CreditProfile;
use crate::types::scoring::ScoreInput;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub const SAMPLE_PROFILE: &str = r#"# Credit profile for `creditscore score`.
# Counters default to 0 when a section or key is left out.

[delinquencies]
late_30 = 0
late_60 = 0
late_90 = 0
collections = 0
bankruptcies = 0

[new_credit]
inquiries_last_12mo = 0
new_accounts_6mo = 0

# Revolving accounts (credit_card, retail_account) report balance and credit_limit.
[[accounts]]
credit_type = "credit_card"
account_age_months = 24
balance = 500
credit_limit = 1000

# Loans (mortgage, auto_loan, personal_loan, student_loan) report
# current_balance, original_loan_amount and monthly_payment.
[[accounts]]
credit_type = "auto_loan"
account_age_months = 18
current_balance = 9000
original_loan_amount = 15000
monthly_payment = 310
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoding {
    Toml,
    Json,
}

fn encoding_for(path: &Path) -> Encoding {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Encoding::Json,
        _ => Encoding::Toml,
    }
}

fn load_record<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.is_file() {
        return Err(ScoreError::PathNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    let encoding = encoding_for(path);
    debug!(path = %path.display(), ?encoding, "reading input record");
    match encoding {
        Encoding::Toml => toml::from_str(&content)
            .map_err(|e| ScoreError::InvalidInput(format!("{}: {}", path.display(), e))),
        Encoding::Json => serde_json::from_str(&content)
            .map_err(|e| ScoreError::InvalidInput(format!("{}: {}", path.display(), e))),
    }
}

pub fn load_profile(path: &Path) -> Result<CreditProfile> {
    let profile: CreditProfile = load_record(path)?;
    info!(accounts = profile.accounts.len(), "loaded credit profile");
    Ok(profile)
}

pub fn load_score_input(path: &Path) -> Result<ScoreInput> {
    load_record(path)
}

pub fn write_sample_profile(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ScoreError::AlreadyExists(path.display().to_string()));
    }
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, SAMPLE_PROFILE)?;
    info!(path = %path.display(), "wrote sample profile");
    Ok(())
}
