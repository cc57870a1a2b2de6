use std::sync::atomic::{AtomicU64, Ordering};

/// Reliability counters of the nearest-neighbor searches of one run.
///
/// A search "fails" when its answer lies farther than one voxel edge, where the bounded
/// shell expansion can no longer guarantee it is the true nearest neighbor. Failures are
/// diagnostic only.
#[derive(Debug, Default)]
pub struct SearchStatistics {
    translational_failures: AtomicU64,
    six_failures: AtomicU64,
    total: AtomicU64,
    concerning_neighbors: AtomicU64,
}

impl SearchStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one finished search. `nn_s` is `None` for rotationless samples, which have
    /// no six-dimensional answer to fail.
    pub fn record_search(&self, nn_d: f64, nn_s: Option<f64>, safe_distance_sq: f64) {
        if nn_d > safe_distance_sq {
            self.translational_failures.fetch_add(1, Ordering::Relaxed);
        }
        if nn_s.is_some_and(|s| s > safe_distance_sq) {
            self.six_failures.fetch_add(1, Ordering::Relaxed);
        }
        self.total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_concerning_neighbor(&self) {
        self.concerning_neighbors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn summary(&self) -> SearchSummary {
        SearchSummary {
            translational_failures: self.translational_failures.load(Ordering::Relaxed),
            six_failures: self.six_failures.load(Ordering::Relaxed),
            total: self.total.load(Ordering::Relaxed),
            concerning_neighbors: self.concerning_neighbors.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchSummary {
    pub translational_failures: u64,
    pub six_failures: u64,
    pub total: u64,
    /// Searches whose six-dimensional neighbor came from a nearby frame.
    pub concerning_neighbors: u64,
}

impl SearchSummary {
    pub fn translational_failure_percent(&self) -> f64 {
        percent(self.translational_failures, self.total)
    }

    pub fn six_failure_percent(&self) -> f64 {
        percent(self.six_failures, self.total)
    }
}

fn percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_are_counted_against_the_safe_distance() {
        let stats = SearchStatistics::new();
        stats.record_search(0.5, Some(0.5), 1.0);
        stats.record_search(2.0, Some(0.5), 1.0);
        stats.record_search(0.5, Some(f64::INFINITY), 1.0);
        stats.record_search(f64::INFINITY, None, 1.0);
        let summary = stats.summary();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.translational_failures, 2);
        assert_eq!(summary.six_failures, 1);
        assert!((summary.translational_failure_percent() - 50.0).abs() < 1e-12);
        assert!((summary.six_failure_percent() - 25.0).abs() < 1e-12);
    }

    #[test]
    fn empty_summary_reports_zero_percent() {
        let summary = SearchStatistics::new().summary();
        assert_eq!(summary, SearchSummary::default());
        assert_eq!(summary.six_failure_percent(), 0.0);
    }

    #[test]
    fn counters_are_shared_across_threads() {
        let stats = SearchStatistics::new();
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..100 {
                        stats.record_search(0.1, None, 1.0);
                        stats.record_concerning_neighbor();
                    }
                });
            }
        });
        let summary = stats.summary();
        assert_eq!(summary.total, 400);
        assert_eq!(summary.concerning_neighbors, 400);
    }
}
