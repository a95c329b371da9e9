use crate::types::report::ScoreReport;

pub fn to_markdown(report: &ScoreReport) -> String {
    let mut output = String::new();
    let final_score = &report.final_score;
    output.push_str("# Credit Score Estimate\n\n");
    output.push_str(&format!(
        "Estimated score: {} (range {}-{})\n\n",
        final_score.score, final_score.range_low, final_score.range_high
    ));
    output.push_str(&format!(
        "Position in 300-850: {:.1}%\n\n",
        final_score.range_position
    ));

    output.push_str("## Component Scores\n\n");
    for (component, score) in report.components.named() {
        output.push_str(&format!("- {}: {:.1}\n", component, score));
    }
    output.push('\n');

    output.push_str("## Accounts\n\n");
    match &report.summary {
        None => output.push_str("- not available\n"),
        Some(summary) => {
            output.push_str(&format!(
                "- credit utilization: {:.1}%\n- total balances: {:.2}\n- total limit: {:.2}\n- accounts with balance: {} of {}\n- average age: {:.1} years\n",
                summary.credit_utilization,
                summary.total_balances,
                summary.total_limit,
                summary.accounts_with_balance,
                summary.total_accounts,
                summary.avg_age
            ));
            if summary.credit_types.is_empty() {
                output.push_str("- credit types: none\n");
            } else {
                output.push_str(&format!("- credit types: {}\n", summary.credit_types));
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::engine::evaluate;
    use crate::types::account::CreditProfile;
    use crate::types::config::ScoreConfig;

    #[test]
    fn markdown_report_contains_sections() {
        let config = ScoreConfig::default();
        let aggregation = aggregate(&CreditProfile::default()).expect("empty profile is valid");
        let card = evaluate(&aggregation.input, &config.weights()).expect("input is valid");
        let report = ScoreReport::new(&card, Some(&aggregation), &config);

        let rendered = to_markdown(&report);
        assert!(rendered.contains("# Credit Score Estimate"));
        assert!(rendered.contains("Estimated score: 759 (range 744-774)"));
        assert!(rendered.contains("## Component Scores"));
        assert!(rendered.contains("- Length of History: 30.0"));
        assert!(rendered.contains("- credit types: none"));
    }
}
