//! Job Description Domain Metrics

use metrics::{counter, gauge, Gauge};

use crate::metrics::core::SeriesRow;
use crate::metrics::labels::Outcome;
use crate::metrics::{DomainMetrics, MetricDoc, MetricType};

pub const JD_CREATED: &str = "hr_job_descriptions_created_total";
pub const JD_TOTAL: &str = "hr_job_descriptions_total";

/// Metrics collection for the job description domain
pub struct JobDescriptionMetrics {
    created: SeriesRow<metrics::Counter>,
    total: Gauge,
}

impl JobDescriptionMetrics {
    pub fn new() -> Self {
        Self {
            created: SeriesRow::build(&Outcome::VALUES, |status| {
                counter!(JD_CREATED, "status" => status.as_str())
            }),
            total: gauge!(JD_TOTAL),
        }
    }

    /// Record a job description creation attempt
    pub fn record_created(&self, success: bool) {
        let status = Outcome::from_success(success);
        self.created.get(status.index()).increment(1);
    }

    /// Set the current number of job descriptions in the system
    pub fn set_total(&self, count: u64) {
        self.total.set(count as f64);
    }
}

impl Default for JobDescriptionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainMetrics for JobDescriptionMetrics {
    fn domain_name() -> &'static str {
        "job_descriptions"
    }

    fn metrics_documentation() -> Vec<MetricDoc> {
        vec![
            MetricDoc {
                name: JD_CREATED,
                metric_type: MetricType::Counter,
                help: "Total number of job descriptions created",
                labels: vec!["status"],
                buckets: None,
            },
            MetricDoc {
                name: JD_TOTAL,
                metric_type: MetricType::Gauge,
                help: "Total number of job descriptions in the system",
                labels: vec![],
                buckets: None,
            },
        ]
    }
}


impl std::fmt::Debug for JobDescriptionMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobDescriptionMetrics").finish_non_exhaustive()
    }
}
