use crate::types::scoring::Score;

fn average_age_points(avg_age: f64) -> Score {
    if avg_age >= 9.0 {
        100.0
    } else if avg_age >= 5.0 {
        80.0
    } else if avg_age >= 2.0 {
        60.0
    } else if avg_age >= 1.0 {
        40.0
    } else {
        20.0
    }
}

fn oldest_account_points(oldest: f64) -> Score {
    if oldest >= 20.0 {
        100.0
    } else if oldest >= 10.0 {
        80.0
    } else if oldest >= 5.0 {
        60.0
    } else {
        40.0
    }
}

/// Ages are in years. The newest-account age does not influence the score.
pub fn length_of_history_score(avg_age: f64, oldest: f64) -> Score {
    (average_age_points(avg_age) + oldest_account_points(oldest)) / 2.0
}
