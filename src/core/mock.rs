// PBIX Analyzer - core/mock.rs
//
// Mock analysis-result generation. Placeholder counters drawn uniformly
// from fixed ranges, standing in for a future real analysis engine.

use crate::core::model::AnalysisReport;
use crate::util::constants;
use rand::Rng;

impl AnalysisReport {
    /// Generate a report with random placeholder counters.
    pub fn mock<R: Rng>(rng: &mut R) -> Self {
        Self {
            tables: rng.gen_range(constants::MOCK_TABLES),
            measures: rng.gen_range(constants::MOCK_MEASURES),
            columns: rng.gen_range(constants::MOCK_COLUMNS),
            relationships: rng.gen_range(constants::MOCK_RELATIONSHIPS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_counters_stay_in_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let report = AnalysisReport::mock(&mut rng);
            assert!(constants::MOCK_TABLES.contains(&report.tables));
            assert!(constants::MOCK_MEASURES.contains(&report.measures));
            assert!(constants::MOCK_COLUMNS.contains(&report.columns));
            assert!(constants::MOCK_RELATIONSHIPS.contains(&report.relationships));
        }
    }
}
