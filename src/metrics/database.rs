//! Database Operation Metrics
//!
//! Instruments intended to be driven by a wrapping layer around every
//! create/read/update/delete call issued to the document store, labeled by
//! logical collection and operation kind.

use metrics::{counter, histogram};

use crate::metrics::core::{SeriesGrid, TimingGuard};
use crate::metrics::labels::{Collection, DbOperation};
use crate::metrics::{DomainMetrics, MetricDoc, MetricType};

pub const DB_OPERATIONS: &str = "hr_db_operations_total";
pub const DB_OPERATION_DURATION: &str = "hr_db_operation_duration_seconds";

/// Document-store calls are expected to finish in well under a second.
pub const DB_DURATION_BUCKETS: &[f64] =
    &[0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0];

/// Metrics collection for the database domain
pub struct DatabaseMetrics {
    operations: SeriesGrid<metrics::Counter>,
    duration: SeriesGrid<metrics::Histogram>,
}

impl DatabaseMetrics {
    pub fn new() -> Self {
        Self {
            operations: SeriesGrid::build(
                &Collection::VALUES,
                &DbOperation::VALUES,
                |collection, operation| {
                    counter!(
                        DB_OPERATIONS,
                        "collection" => collection.as_str(),
                        "operation" => operation.as_str()
                    )
                },
            ),
            duration: SeriesGrid::build(
                &Collection::VALUES,
                &DbOperation::VALUES,
                |collection, operation| {
                    histogram!(
                        DB_OPERATION_DURATION,
                        "collection" => collection.as_str(),
                        "operation" => operation.as_str()
                    )
                },
            ),
        }
    }

    /// Record one completed document-store operation with its latency
    pub fn record_operation(&self, collection: Collection, operation: DbOperation, seconds: f64) {
        self.operations
            .get(collection.index(), operation.index())
            .increment(1);
        self.duration
            .get(collection.index(), operation.index())
            .record(seconds);
    }

    /// Count an operation now and time it until the returned guard drops.
    ///
    /// For wrapping store calls:
    ///
    /// ```ignore
    /// let _timing = metrics.database.time_operation(Collection::Resume, DbOperation::Find);
    /// let doc = collection.find_one(filter).await?;
    /// ```
    pub fn time_operation(&self, collection: Collection, operation: DbOperation) -> TimingGuard {
        self.operations
            .get(collection.index(), operation.index())
            .increment(1);
        TimingGuard::new(
            self.duration
                .get(collection.index(), operation.index())
                .clone(),
        )
    }
}

impl Default for DatabaseMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainMetrics for DatabaseMetrics {
    fn domain_name() -> &'static str {
        "db"
    }

    fn metrics_documentation() -> Vec<MetricDoc> {
        vec![
            MetricDoc {
                name: DB_OPERATIONS,
                metric_type: MetricType::Counter,
                help: "Total database operations",
                labels: vec!["collection", "operation"],
                buckets: None,
            },
            MetricDoc {
                name: DB_OPERATION_DURATION,
                metric_type: MetricType::Histogram,
                help: "Database operation latency",
                labels: vec!["collection", "operation"],
                buckets: Some(DB_DURATION_BUCKETS),
            },
        ]
    }
}


impl std::fmt::Debug for DatabaseMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseMetrics").finish_non_exhaustive()
    }
}
