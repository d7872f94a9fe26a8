use crate::error::AnalyzeError;
use camino::Utf8PathBuf;
use serde::Serialize;
use std::collections::HashMap;

/// One parsed result file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    /// Bucket index reported by the job
    pub bucket: u64,
    /// Bucket digits as printed by the job
    pub label: String,
    /// Elapsed time in seconds
    pub seconds: f64,
    /// File the record was read from
    pub file: Utf8PathBuf,
}

/// Result records keyed by the bucket digits as printed.
///
/// Keeps the order in which buckets were first seen. Inserting a bucket
/// that is already present replaces its record in place. Keys are not
/// normalized: "007" and "7" are different buckets.
#[derive(Debug, Clone, Default)]
pub struct BucketTable {
    records: Vec<ResultRecord>,
    index: HashMap<String, usize>,
}

impl BucketTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the one it replaced.
    pub fn insert(&mut self, record: ResultRecord) -> Option<ResultRecord> {
        match self.index.get(&record.label) {
            Some(&pos) => Some(std::mem::replace(&mut self.records[pos], record)),
            None => {
                self.index.insert(record.label.clone(), self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<&ResultRecord> {
        self.index.get(label).map(|&pos| &self.records[pos])
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in first-seen order.
    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    /// Check that buckets 1..=expected are all present, each under its
    /// plain decimal label.
    ///
    /// Stops at the first missing bucket.
    pub fn check_coverage(&self, expected: u64) -> Result<(), AnalyzeError> {
        match (1..=expected).find(|bucket| !self.contains(&bucket.to_string())) {
            Some(missing) => Err(AnalyzeError::MissingBucket(missing)),
            None => Ok(()),
        }
    }

    /// The `n` slowest buckets, slowest first.
    ///
    /// Sorts ascending (stable) and then reverses, so buckets with equal
    /// times come out in reverse first-seen order.
    pub fn longest(&self, n: usize) -> Vec<&ResultRecord> {
        let mut ranked: Vec<&ResultRecord> = self.records.iter().collect();
        ranked.sort_by(|a, b| a.seconds.total_cmp(&b.seconds));
        ranked.reverse();
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(bucket: u64, seconds: f64) -> ResultRecord {
        ResultRecord {
            bucket,
            label: bucket.to_string(),
            seconds,
            file: format!("bucket-{bucket}.out").into(),
        }
    }

    fn table(entries: &[(u64, f64)]) -> BucketTable {
        let mut table = BucketTable::new();
        for &(bucket, seconds) in entries {
            table.insert(record(bucket, seconds));
        }
        table
    }

    fn buckets(ranked: &[&ResultRecord]) -> Vec<u64> {
        ranked.iter().map(|r| r.bucket).collect()
    }

    #[test]
    fn test_longest_orders_descending() {
        let table = table(&[(1, 3.0), (2, 1.0), (3, 2.0)]);
        assert_eq!(buckets(&table.longest(25)), vec![1, 3, 2]);
    }

    #[test]
    fn test_longest_truncates() {
        let entries: Vec<(u64, f64)> = (1..=40).map(|b| (b, b as f64)).collect();
        let table = table(&entries);
        let ranked = table.longest(25);
        assert_eq!(ranked.len(), 25);
        assert_eq!(ranked[0].bucket, 40);
        assert_eq!(ranked[24].bucket, 16);
    }

    #[test]
    fn test_longest_ties_reverse_insertion_order() {
        let table = table(&[(4, 2.0), (1, 5.0), (2, 2.0), (3, 2.0)]);
        assert_eq!(buckets(&table.longest(25)), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_duplicate_bucket_last_write_wins() {
        let mut table = table(&[(1, 1.0), (2, 2.0)]);
        let previous = table.insert(record(1, 9.0));
        assert_eq!(previous.map(|r| r.seconds), Some(1.0));
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("1").map(|r| r.seconds), Some(9.0));
        // Position of bucket 1 is kept
        assert_eq!(table.records()[0].bucket, 1);
    }

    #[test]
    fn test_coverage_complete() {
        let table = table(&[(2, 1.0), (1, 1.0), (3, 1.0)]);
        assert!(table.check_coverage(3).is_ok());
        assert!(BucketTable::new().check_coverage(0).is_ok());
    }

    #[test]
    fn test_coverage_reports_first_missing() {
        let table = table(&[(1, 1.0), (4, 1.0)]);
        assert!(matches!(
            table.check_coverage(4),
            Err(AnalyzeError::MissingBucket(2))
        ));
    }

    #[test]
    fn test_coverage_does_not_match_padded_labels() {
        let mut table = table(&[(1, 1.0)]);
        table.insert(ResultRecord {
            bucket: 2,
            label: "02".to_string(),
            seconds: 4.0,
            file: "bucket-02.out".into(),
        });
        assert!(table.contains("02"));
        assert!(!table.contains("2"));
        assert!(matches!(
            table.check_coverage(2),
            Err(AnalyzeError::MissingBucket(2))
        ));
    }

    #[test]
    fn test_coverage_ignores_extra_buckets() {
        // Bucket numbers above the file count do not count towards coverage
        let table = table(&[(1, 1.0), (7, 1.0)]);
        assert!(matches!(
            table.check_coverage(2),
            Err(AnalyzeError::MissingBucket(2))
        ));
    }
}
