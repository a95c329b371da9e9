use crate::types::scoring::{LatePayments, Score};

pub fn payment_history_score(late: &LatePayments, collections: u32, bankruptcies: u32) -> Score {
    let penalty = 15 * i64::from(late.days_30)
        + 25 * i64::from(late.days_60)
        + 45 * i64::from(late.days_90)
        + 50 * i64::from(collections)
        + 130 * i64::from(bankruptcies);
    (100 - penalty).max(0) as Score
}
