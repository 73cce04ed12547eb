//! Resume Domain Metrics
//!
//! Instruments for resume ingestion: upload outcomes by file format, parse
//! latency, and the current number of resumes held in the system.

use metrics::{counter, gauge, histogram, Gauge};

use crate::metrics::core::{SeriesGrid, SeriesRow};
use crate::metrics::labels::{FileType, Outcome};
use crate::metrics::{DomainMetrics, MetricDoc, MetricType};

pub const RESUME_UPLOADS: &str = "hr_resume_uploads_total";
pub const RESUME_PARSE_DURATION: &str = "hr_resume_parse_duration_seconds";
pub const RESUMES_TOTAL: &str = "hr_resumes_total";

/// Parse latency boundaries: sub-second for clean PDFs up to tens of seconds
/// for scanned documents routed through OCR.
pub const PARSE_DURATION_BUCKETS: &[f64] = &[0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0];

/// Metrics collection for the resume domain
pub struct ResumeMetrics {
    uploads: SeriesGrid<metrics::Counter>,
    parse_duration: SeriesRow<metrics::Histogram>,
    total: Gauge,
}

impl ResumeMetrics {
    pub fn new() -> Self {
        Self {
            uploads: SeriesGrid::build(&Outcome::VALUES, &FileType::VALUES, |status, file_type| {
                counter!(
                    RESUME_UPLOADS,
                    "status" => status.as_str(),
                    "file_type" => file_type.as_str()
                )
            }),
            parse_duration: SeriesRow::build(&FileType::VALUES, |file_type| {
                histogram!(RESUME_PARSE_DURATION, "file_type" => file_type.as_str())
            }),
            total: gauge!(RESUMES_TOTAL),
        }
    }

    /// Record a resume upload attempt
    pub fn record_upload(&self, success: bool, file_type: FileType) {
        let status = Outcome::from_success(success);
        self.uploads
            .get(status.index(), file_type.index())
            .increment(1);
    }

    /// Record time spent parsing a resume file
    pub fn observe_parse_duration(&self, file_type: FileType, seconds: f64) {
        self.parse_duration.get(file_type.index()).record(seconds);
    }

    /// Set the current number of resumes in the system
    pub fn set_resume_count(&self, count: u64) {
        self.total.set(count as f64);
    }
}

impl Default for ResumeMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainMetrics for ResumeMetrics {
    fn domain_name() -> &'static str {
        "resume"
    }

    fn metrics_documentation() -> Vec<MetricDoc> {
        vec![
            MetricDoc {
                name: RESUME_UPLOADS,
                metric_type: MetricType::Counter,
                help: "Total number of resumes uploaded",
                labels: vec!["status", "file_type"],
                buckets: None,
            },
            MetricDoc {
                name: RESUME_PARSE_DURATION,
                metric_type: MetricType::Histogram,
                help: "Time spent parsing resume files",
                labels: vec!["file_type"],
                buckets: Some(PARSE_DURATION_BUCKETS),
            },
            MetricDoc {
                name: RESUMES_TOTAL,
                metric_type: MetricType::Gauge,
                help: "Total number of resumes in the system",
                labels: vec![],
                buckets: None,
            },
        ]
    }
}


impl std::fmt::Debug for ResumeMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResumeMetrics").finish_non_exhaustive()
    }
}
