//! Metrics registry for coordinating domain-specific metrics
//!
//! Holds the static catalog of every instrument the backend declares,
//! validates it (duplicate names or malformed bucket lists are configuration
//! errors and abort startup), registers help texts with the installed
//! recorder, and exports the catalog for ops tooling.

use std::collections::{HashMap, HashSet};

use metrics::{describe_counter, describe_gauge, describe_histogram};
use once_cell::sync::Lazy;
use tracing::info;

use crate::error::{MetricsError, Result};
use crate::metrics::{
    database::DatabaseMetrics, job_description::JobDescriptionMetrics, matching::MatchingMetrics,
    resume::ResumeMetrics, storage::StorageMetrics, users::UserMetrics, workflow::WorkflowMetrics,
    DomainMetrics, MetricDoc, MetricType,
};

pub const APP_INFO: &str = "hr_backend_app_info";

static CATALOG: Lazy<Vec<MetricDoc>> = Lazy::new(|| {
    let mut docs = Vec::new();
    docs.extend(ResumeMetrics::metrics_documentation());
    docs.extend(JobDescriptionMetrics::metrics_documentation());
    docs.extend(MatchingMetrics::metrics_documentation());
    docs.extend(UserMetrics::metrics_documentation());
    docs.extend(WorkflowMetrics::metrics_documentation());
    docs.extend(StorageMetrics::metrics_documentation());
    docs.extend(DatabaseMetrics::metrics_documentation());
    docs.extend(system_docs());
    docs
});

fn system_docs() -> Vec<MetricDoc> {
    vec![MetricDoc {
        name: APP_INFO,
        metric_type: MetricType::Gauge,
        help: "HR Backend API application information",
        labels: vec!["version", "service", "environment"],
        buckets: None,
    }]
}

/// The full instrument catalog, one entry per declared metric.
pub fn catalog() -> &'static [MetricDoc] {
    &CATALOG
}

/// Validate a catalog before any instrument is registered.
///
/// Re-declaring an instrument name, attaching buckets to a non-histogram,
/// declaring a histogram without buckets, or listing boundaries that are
/// empty, non-finite, negative, or out of order are all configuration
/// errors; the process must not continue serving with a partially valid
/// registry.
pub fn validate(docs: &[MetricDoc]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::new();

    for doc in docs {
        if !seen.insert(doc.name) {
            return Err(MetricsError::Config(format!(
                "duplicate metric name '{}'",
                doc.name
            )));
        }

        match (doc.metric_type, doc.buckets) {
            (MetricType::Histogram, None) => {
                return Err(MetricsError::Config(format!(
                    "histogram '{}' declares no bucket boundaries",
                    doc.name
                )));
            }
            (MetricType::Histogram, Some(buckets)) => {
                if buckets.is_empty() {
                    return Err(MetricsError::Config(format!(
                        "histogram '{}' has an empty bucket list",
                        doc.name
                    )));
                }
                if buckets.iter().any(|b| !b.is_finite() || *b < 0.0) {
                    return Err(MetricsError::Config(format!(
                        "histogram '{}' has a non-finite or negative bucket boundary",
                        doc.name
                    )));
                }
                if !buckets.windows(2).all(|w| w[0] < w[1]) {
                    return Err(MetricsError::Config(format!(
                        "histogram '{}' bucket boundaries are not strictly ascending",
                        doc.name
                    )));
                }
            }
            (_, Some(_)) => {
                return Err(MetricsError::Config(format!(
                    "non-histogram '{}' declares bucket boundaries",
                    doc.name
                )));
            }
            (_, None) => {}
        }
    }

    Ok(())
}

/// Register help texts for every cataloged instrument with the recorder.
pub fn describe_all() {
    for doc in catalog() {
        match doc.metric_type {
            MetricType::Counter => describe_counter!(doc.name, doc.help),
            MetricType::Gauge => describe_gauge!(doc.name, doc.help),
            MetricType::Histogram => describe_histogram!(doc.name, doc.help),
        }
    }
}

/// Serialize the catalog as JSON for dashboards and ops tooling.
pub fn catalog_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(catalog())?)
}

/// Log a summary of all registered metrics for debugging
pub fn log_catalog_summary() {
    let mut by_domain: HashMap<&str, Vec<&MetricDoc>> = HashMap::new();

    for doc in catalog() {
        by_domain.entry(domain_of(doc.name)).or_default().push(doc);
    }

    for (domain, metrics) in by_domain {
        info!("Domain '{}': {} metrics", domain, metrics.len());
        for metric in metrics {
            info!(
                "  - {} ({:?}): {}",
                metric.name, metric.metric_type, metric.help
            );
        }
    }
}

/// Extract the domain from a metric name (e.g., "hr_matching_requests_total" -> "matching")
fn domain_of(metric_name: &str) -> &str {
    if let Some(stripped) = metric_name.strip_prefix("hr_") {
        if let Some(next_underscore) = stripped.find('_') {
            return &stripped[..next_underscore];
        }
    }
    "unknown"
}
