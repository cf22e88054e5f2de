//! Estimate records and the ranked comparison report.

use crate::mc::StratifiedMode;
use crate::strategy::SamplingStrategy;

/// One strategy's result within a run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EstimateRecord {
    /// Strategy that produced the estimate.
    pub strategy: SamplingStrategy,
    /// Estimated area.
    pub estimate: f64,
    /// `|estimate - reference_area|`.
    pub absolute_error: f64,
}

impl EstimateRecord {
    /// Creates a record, computing the absolute error against `reference_area`.
    pub fn new(strategy: SamplingStrategy, estimate: f64, reference_area: f64) -> Self {
        Self {
            strategy,
            estimate,
            absolute_error: (estimate - reference_area).abs(),
        }
    }
}

/// Outcome of one run: the reference area and all three estimates ranked
/// ascending by absolute error.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComparisonReport {
    /// Trapezoidal reference area.
    pub reference_area: f64,
    /// Samples drawn by each strategy.
    pub n_samples: usize,
    /// Seed the run was executed with.
    pub seed: u64,
    /// Stratified variant used.
    pub stratified: StratifiedMode,
    /// Ranked records; ties keep [`SamplingStrategy::ALL`] order.
    records: Vec<EstimateRecord>,
}

impl ComparisonReport {
    /// Builds a report, ranking `records` ascending by absolute error.
    ///
    /// The sort is stable, so equal errors keep their input order and no
    /// record is ever dropped.
    pub fn new(
        reference_area: f64,
        n_samples: usize,
        seed: u64,
        stratified: StratifiedMode,
        records: [EstimateRecord; 3],
    ) -> Self {
        let mut records = records.to_vec();
        records.sort_by(|a, b| a.absolute_error.total_cmp(&b.absolute_error));
        Self {
            reference_area,
            n_samples,
            seed,
            stratified,
            records,
        }
    }

    /// All records, ascending by absolute error.
    pub fn records(&self) -> &[EstimateRecord] {
        &self.records
    }

    /// Minimum-error record.
    pub fn winner(&self) -> &EstimateRecord {
        &self.records[0]
    }

    /// Canned rationale for the winning strategy.
    pub fn explanation(&self) -> &'static str {
        self.winner().strategy.explanation()
    }

    /// Every strategy whose error equals the winner's.
    pub fn tied_winners(&self) -> Vec<SamplingStrategy> {
        let best = self.winner().absolute_error;
        self.records
            .iter()
            .take_while(|r| r.absolute_error == best)
            .map(|r| r.strategy)
            .collect()
    }

    /// Record of a specific strategy.
    pub fn record(&self, strategy: SamplingStrategy) -> Option<&EstimateRecord> {
        self.records.iter().find(|r| r.strategy == strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(estimates: [f64; 3]) -> ComparisonReport {
        let [u, s, i] = SamplingStrategy::ALL;
        let records = [
            EstimateRecord::new(u, estimates[0], 100.0),
            EstimateRecord::new(s, estimates[1], 100.0),
            EstimateRecord::new(i, estimates[2], 100.0),
        ];
        ComparisonReport::new(100.0, 10, 1, StratifiedMode::Midpoint, records)
    }

    #[test]
    fn test_record_absolute_error() {
        let record = EstimateRecord::new(SamplingStrategy::Uniform, 97.5, 100.0);
        assert_eq!(record.absolute_error, 2.5);

        let record = EstimateRecord::new(SamplingStrategy::Uniform, 101.0, 100.0);
        assert_eq!(record.absolute_error, 1.0);
    }

    #[test]
    fn test_ranked_ascending() {
        let report = ranked([103.0, 99.0, 100.5]);
        let order: Vec<SamplingStrategy> = report.records().iter().map(|r| r.strategy).collect();
        assert_eq!(
            order,
            vec![
                SamplingStrategy::Importance,
                SamplingStrategy::Stratified,
                SamplingStrategy::Uniform
            ]
        );
        assert_eq!(report.winner().strategy, SamplingStrategy::Importance);
        assert_eq!(report.explanation(), SamplingStrategy::Importance.explanation());
    }

    #[test]
    fn test_ties_keep_all_records_in_strategy_order() {
        let report = ranked([101.0, 99.0, 100.0]);
        assert_eq!(report.records().len(), 3);
        assert_eq!(report.winner().strategy, SamplingStrategy::Importance);

        let report = ranked([101.0, 99.0, 102.0]);
        assert_eq!(report.records().len(), 3);
        assert_eq!(
            report.tied_winners(),
            vec![SamplingStrategy::Uniform, SamplingStrategy::Stratified]
        );
        assert_eq!(report.winner().strategy, SamplingStrategy::Uniform);
    }

    #[test]
    fn test_record_lookup() {
        let report = ranked([103.0, 99.0, 100.5]);
        assert_eq!(
            report.record(SamplingStrategy::Uniform).unwrap().estimate,
            103.0
        );
    }
}
