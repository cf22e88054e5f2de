//! Report rendering for the table, JSON and CSV output formats.

use integral_mc::{ComparisonReport, SamplingStrategy};

use crate::config::OutputFormat;
use crate::{CliError, Result};

/// Renders a single comparison.
pub fn report(report: &ComparisonReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(report_table(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => csv_rows(std::slice::from_ref(report)),
    }
}

/// Renders a sample-count sweep.
pub fn sweep(reports: &[ComparisonReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(sweep_table(reports)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
        OutputFormat::Csv => csv_rows(reports),
    }
}

fn report_table(report: &ComparisonReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Reference area (trapezoid): {:.4}\n",
        report.reference_area
    ));
    out.push_str(&format!(
        "Samples: {}  Seed: {}  Stratified: {}\n\n",
        report.n_samples, report.seed, report.stratified
    ));

    out.push_str("┌──────┬────────────┬────────────────┬────────────────┐\n");
    out.push_str("│ Rank │ Strategy   │ Estimate       │ Abs. error     │\n");
    out.push_str("├──────┼────────────┼────────────────┼────────────────┤\n");
    for (rank, record) in report.records().iter().enumerate() {
        out.push_str(&format!(
            "│ {:<4} │ {:<10} │ {:>14.2} │ {:>14.4} │\n",
            rank + 1,
            record.strategy,
            record.estimate,
            record.absolute_error
        ));
    }
    out.push_str("└──────┴────────────┴────────────────┴────────────────┘\n\n");

    let tied = report.tied_winners();
    if tied.len() > 1 {
        let names: Vec<&str> = tied.iter().map(SamplingStrategy::name).collect();
        out.push_str(&format!("Best method (tied): {}\n", names.join(", ")));
    } else {
        out.push_str(&format!("Best method: {}\n", report.winner().strategy));
    }
    out.push_str(report.explanation());
    out.push('\n');
    out
}

fn sweep_table(reports: &[ComparisonReport]) -> String {
    let mut out = String::new();
    if let Some(first) = reports.first() {
        out.push_str(&format!(
            "Reference area (trapezoid): {:.4}\nSeed: {}  Stratified: {}\n\n",
            first.reference_area, first.seed, first.stratified
        ));
    }

    out.push_str("┌────────────┬────────────────┬────────────────┬────────────────┬────────────┐\n");
    out.push_str("│ Samples    │ Uniform err    │ Stratified err │ Importance err │ Best       │\n");
    out.push_str("├────────────┼────────────────┼────────────────┼────────────────┼────────────┤\n");
    for report in reports {
        let errors: Vec<String> = SamplingStrategy::ALL
            .iter()
            .map(|&s| match report.record(s) {
                Some(record) => format!("{:>14.4}", record.absolute_error),
                None => format!("{:>14}", "-"),
            })
            .collect();
        out.push_str(&format!(
            "│ {:>10} │ {} │ {} │ {} │ {:<10} │\n",
            report.n_samples,
            errors[0],
            errors[1],
            errors[2],
            report.winner().strategy
        ));
    }
    out.push_str("└────────────┴────────────────┴────────────────┴────────────────┴────────────┘\n");
    out
}

fn csv_rows(reports: &[ComparisonReport]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "n_samples",
        "seed",
        "rank",
        "strategy",
        "estimate",
        "absolute_error",
        "reference_area",
    ])?;

    for report in reports {
        for (rank, record) in report.records().iter().enumerate() {
            writer.write_record([
                report.n_samples.to_string(),
                report.seed.to_string(),
                (rank + 1).to_string(),
                record.strategy.to_string(),
                record.estimate.to_string(),
                record.absolute_error.to_string(),
                report.reference_area.to_string(),
            ])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CliError::Render(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CliError::Render(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use integral_mc::{EstimateRecord, StratifiedMode};

    fn sample_report(n_samples: usize) -> ComparisonReport {
        let [u, s, i] = SamplingStrategy::ALL;
        ComparisonReport::new(
            100.0,
            n_samples,
            42,
            StratifiedMode::Midpoint,
            [
                EstimateRecord::new(u, 101.23456, 100.0),
                EstimateRecord::new(s, 100.01, 100.0),
                EstimateRecord::new(i, 98.5, 100.0),
            ],
        )
    }

    #[test]
    fn test_table_ranks_and_explains() {
        let text = report(&sample_report(1000), OutputFormat::Table).unwrap();

        assert!(text.contains("Reference area (trapezoid): 100.0000"));
        assert!(text.contains("Seed: 42"));
        assert!(text.contains("101.23"));
        assert!(text.contains("1.2346"));
        assert!(text.contains("Best method: Stratified"));
        assert!(text.contains(SamplingStrategy::Stratified.explanation()));

        let stratified = text.find("│ 1    │ Stratified").unwrap();
        let uniform = text.find("│ 2    │ Uniform").unwrap();
        let importance = text.find("│ 3    │ Importance").unwrap();
        assert!(stratified < uniform && uniform < importance);
    }

    #[test]
    fn test_table_reports_ties() {
        let [u, s, i] = SamplingStrategy::ALL;
        let tied = ComparisonReport::new(
            10.0,
            4,
            1,
            StratifiedMode::Midpoint,
            [
                EstimateRecord::new(u, 10.0, 10.0),
                EstimateRecord::new(s, 10.0, 10.0),
                EstimateRecord::new(i, 11.0, 10.0),
            ],
        );
        let text = report(&tied, OutputFormat::Table).unwrap();
        assert!(text.contains("Best method (tied): Uniform, Stratified"));
    }

    #[test]
    fn test_json_output() {
        let text = report(&sample_report(1000), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["reference_area"], 100.0);
        assert_eq!(value["n_samples"], 1000);
        assert_eq!(value["seed"], 42);
        assert_eq!(value["stratified"], "midpoint");
        assert_eq!(value["records"][0]["strategy"], "Stratified");
        assert_eq!(value["records"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_csv_output() {
        let text = report(&sample_report(1000), OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "n_samples,seed,rank,strategy,estimate,absolute_error,reference_area"
        );
        assert!(lines[1].starts_with("1000,42,1,Stratified,100.01,"));
    }

    #[test]
    fn test_sweep_table_and_csv() {
        let reports = vec![sample_report(100), sample_report(1000)];

        let table = sweep(&reports, OutputFormat::Table).unwrap();
        assert!(table.contains("│        100 │"));
        assert!(table.contains("│       1000 │"));

        let csv = sweep(&reports, OutputFormat::Csv).unwrap();
        assert_eq!(csv.lines().count(), 7);
    }
}
