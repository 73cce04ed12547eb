//! File Storage Metrics

use metrics::{counter, gauge};

use crate::metrics::core::{SeriesGrid, SeriesRow};
use crate::metrics::labels::{FileOperation, Outcome, StorageKind};
use crate::metrics::{DomainMetrics, MetricDoc, MetricType};

pub const FILE_STORAGE_BYTES: &str = "hr_file_storage_bytes";
pub const FILE_OPERATIONS: &str = "hr_file_operations_total";

/// Metrics collection for the blob storage domain
pub struct StorageMetrics {
    storage_bytes: SeriesRow<metrics::Gauge>,
    operations: SeriesGrid<metrics::Counter>,
}

impl StorageMetrics {
    pub fn new() -> Self {
        Self {
            storage_bytes: SeriesRow::build(&StorageKind::VALUES, |kind| {
                gauge!(FILE_STORAGE_BYTES, "type" => kind.as_str())
            }),
            operations: SeriesGrid::build(
                &FileOperation::VALUES,
                &Outcome::VALUES,
                |operation, status| {
                    counter!(
                        FILE_OPERATIONS,
                        "operation" => operation.as_str(),
                        "status" => status.as_str()
                    )
                },
            ),
        }
    }

    /// Set the bytes currently held in one storage partition
    pub fn set_storage_bytes(&self, kind: StorageKind, bytes: u64) {
        self.storage_bytes.get(kind.index()).set(bytes as f64);
    }

    /// Record a file operation against blob storage
    pub fn record_file_operation(&self, operation: FileOperation, success: bool) {
        let status = Outcome::from_success(success);
        self.operations
            .get(operation.index(), status.index())
            .increment(1);
    }
}

impl Default for StorageMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainMetrics for StorageMetrics {
    fn domain_name() -> &'static str {
        "file"
    }

    fn metrics_documentation() -> Vec<MetricDoc> {
        vec![
            MetricDoc {
                name: FILE_STORAGE_BYTES,
                metric_type: MetricType::Gauge,
                help: "Total file storage used in the blob store",
                labels: vec!["type"],
                buckets: None,
            },
            MetricDoc {
                name: FILE_OPERATIONS,
                metric_type: MetricType::Counter,
                help: "Total file operations",
                labels: vec!["operation", "status"],
                buckets: None,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documentation_covers_every_instrument() {
        let docs = StorageMetrics::metrics_documentation();
        assert_eq!(docs.len(), 2);

        for doc in docs {
            assert!(doc.name.starts_with("hr_file"));
        }
    }
}

impl std::fmt::Debug for StorageMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageMetrics").finish_non_exhaustive()
    }
}
