use crate::types::scoring::Score;

pub fn new_credit_score(inquiries_last_12mo: u32, new_accounts_6mo: u32) -> Score {
    let penalty = 5 * i64::from(inquiries_last_12mo) + 10 * i64::from(new_accounts_6mo);
    (100 - penalty).max(0) as Score
}
