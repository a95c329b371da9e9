use crate::types::scoring::Score;

/// Utilization bands (inclusive upper bound, points), checked in order.
const UTILIZATION_BANDS: [(f64, i64); 5] = [
    (10.0, 100),
    (20.0, 90),
    (30.0, 80),
    (50.0, 65),
    (70.0, 40),
];
const OVER_UTILIZED: i64 = 30;

pub fn amounts_owed_score(credit_utilization: f64, accounts_with_balance: u32) -> Score {
    let band = UTILIZATION_BANDS
        .iter()
        .find(|(ceiling, _)| credit_utilization <= *ceiling)
        .map(|(_, points)| *points)
        .unwrap_or(OVER_UTILIZED);
    (band - 5 * i64::from(accounts_with_balance)).max(0) as Score
}
