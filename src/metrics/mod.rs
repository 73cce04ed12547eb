//! Business metrics instrumentation for the HR resume-matching backend.
//!
//! This module provides a type-safe, domain-organized metrics registry. Each
//! business domain declares its instruments in a dedicated submodule with a
//! fixed catalog entry per instrument; the registry validates the catalog at
//! startup, installs the Prometheus recorder, and hands back a
//! [`BusinessMetrics`] value whose recording methods are the only way label
//! values reach an instrument.

pub mod core;
pub mod database;
pub mod job_description;
pub mod labels;
pub mod matching;
pub mod registry;
pub mod resume;
pub mod storage;
pub mod system;
pub mod users;
pub mod workflow;

pub use database::DatabaseMetrics;
pub use job_description::JobDescriptionMetrics;
pub use matching::MatchingMetrics;
pub use resume::ResumeMetrics;
pub use storage::StorageMetrics;
pub use system::MetricsSystem;
pub use users::UserMetrics;
pub use workflow::{WorkflowExecution, WorkflowMetrics};

use serde::Serialize;

/// Trait for domain-specific metrics collections
///
/// Each business domain implements this trait to provide:
/// - The domain name used as the metric name infix
/// - Documentation of what each instrument measures, consumed by the
///   registry for validation, registration, and export
pub trait DomainMetrics {
    /// Get the domain name for this metrics collection
    fn domain_name() -> &'static str;

    /// Get documentation for all instruments in this domain
    fn metrics_documentation() -> Vec<MetricDoc>;
}

/// Documentation for a single instrument
#[derive(Debug, Clone, Serialize)]
pub struct MetricDoc {
    pub name: &'static str,
    pub metric_type: MetricType,
    pub help: &'static str,
    pub labels: Vec<&'static str>,
    /// Bucket boundaries for histograms, ascending; `None` for other kinds.
    pub buckets: Option<&'static [f64]>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricType {
    Counter,
    Histogram,
    Gauge,
}

/// The process-wide business metrics registry.
///
/// Constructed once at startup (via [`MetricsSystem::install`]) and passed by
/// reference to every component that records metrics. Each field holds the
/// instrument handles for one business domain; the handles are bound to the
/// recorder that was active at construction, so a test can build an isolated
/// registry against its own recorder.
#[derive(Debug)]
pub struct BusinessMetrics {
    pub resume: ResumeMetrics,
    pub job_descriptions: JobDescriptionMetrics,
    pub matching: MatchingMetrics,
    pub users: UserMetrics,
    pub workflows: WorkflowMetrics,
    pub storage: StorageMetrics,
    pub database: DatabaseMetrics,
}

impl BusinessMetrics {
    /// Materialize every instrument series against the active recorder.
    pub fn new() -> Self {
        Self {
            resume: ResumeMetrics::new(),
            job_descriptions: JobDescriptionMetrics::new(),
            matching: MatchingMetrics::new(),
            users: UserMetrics::new(),
            workflows: WorkflowMetrics::new(),
            storage: StorageMetrics::new(),
            database: DatabaseMetrics::new(),
        }
    }
}

impl Default for BusinessMetrics {
    fn default() -> Self {
        Self::new()
    }
}
