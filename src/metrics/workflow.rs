//! Workflow Metrics
//!
//! Instruments for matching workflow runs: starts by launch type, completions
//! by terminal status, whole-run duration by resume count, and the number of
//! runs currently in flight.
//!
//! Two recording surfaces are provided. [`WorkflowMetrics::record_workflow`]
//! is the raw composite operation; callers own the start/complete pairing,
//! and a start without an eventual completion leaves the in-progress gauge
//! permanently elevated. [`WorkflowMetrics::start`] returns a
//! [`WorkflowExecution`] guard that cannot leak: completing it records the
//! given status, and dropping it unfinished records a failed completion.

use std::time::Instant;

use metrics::{counter, gauge, Gauge};
use tracing::{info, warn};
use uuid::Uuid;

use crate::metrics::core::SeriesRow;
use crate::metrics::labels::{ResumeCountBand, WorkflowStatus, WorkflowType};
use crate::metrics::{DomainMetrics, MetricDoc, MetricType};

pub const WORKFLOWS_STARTED: &str = "hr_workflows_started_total";
pub const WORKFLOWS_COMPLETED: &str = "hr_workflows_completed_total";
pub const WORKFLOW_DURATION: &str = "hr_workflow_duration_seconds";
pub const WORKFLOWS_IN_PROGRESS: &str = "hr_workflows_in_progress";

/// A full workflow run processes every resume in scope; up to 30 minutes.
pub const WORKFLOW_DURATION_BUCKETS: &[f64] =
    &[30.0, 60.0, 120.0, 300.0, 600.0, 900.0, 1800.0];

/// Metrics collection for the workflow domain
pub struct WorkflowMetrics {
    started: SeriesRow<metrics::Counter>,
    completed: SeriesRow<metrics::Counter>,
    duration: SeriesRow<metrics::Histogram>,
    in_progress: Gauge,
}

impl WorkflowMetrics {
    pub fn new() -> Self {
        Self {
            started: SeriesRow::build(&WorkflowType::VALUES, |workflow_type| {
                counter!(WORKFLOWS_STARTED, "type" => workflow_type.as_str())
            }),
            completed: SeriesRow::build(&WorkflowStatus::VALUES, |status| {
                counter!(WORKFLOWS_COMPLETED, "status" => status.as_str())
            }),
            duration: SeriesRow::build(&ResumeCountBand::VALUES, |band| {
                metrics::histogram!(WORKFLOW_DURATION, "resume_count" => band.as_str())
            }),
            in_progress: gauge!(WORKFLOWS_IN_PROGRESS),
        }
    }

    /// Composite workflow lifecycle recording.
    ///
    /// `started` increments the start counter and the in-progress gauge;
    /// `completed` increments the completion counter and decrements the
    /// gauge. Pairing starts with completions over the run's lifetime is the
    /// caller's responsibility.
    pub fn record_workflow(
        &self,
        started: bool,
        completed: bool,
        status: WorkflowStatus,
        workflow_type: WorkflowType,
    ) {
        if started {
            self.started.get(workflow_type.index()).increment(1);
            self.in_progress.increment(1.0);
        }
        if completed {
            self.completed.get(status.index()).increment(1);
            self.in_progress.decrement(1.0);
        }
    }

    /// Begin a tracked workflow run.
    ///
    /// The returned guard owns the completion side of the lifecycle: the
    /// in-progress gauge is decremented exactly once, whether the run is
    /// completed explicitly or dropped on an error path.
    pub fn start(&self, workflow_type: WorkflowType) -> WorkflowExecution<'_> {
        self.started.get(workflow_type.index()).increment(1);
        self.in_progress.increment(1.0);

        let id = Uuid::new_v4();
        info!(workflow_id = %id, workflow_type = workflow_type.as_str(), "workflow started");

        WorkflowExecution {
            metrics: self,
            id,
            begun: Instant::now(),
            finished: false,
        }
    }

    /// Record total execution time of a finished workflow
    pub fn observe_duration(&self, resume_count: usize, seconds: f64) {
        let band = ResumeCountBand::from_count(resume_count);
        self.duration.get(band.index()).record(seconds);
    }

    fn record_completion(&self, status: WorkflowStatus) {
        self.completed.get(status.index()).increment(1);
        self.in_progress.decrement(1.0);
    }
}

impl Default for WorkflowMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// A live workflow run handed out by [`WorkflowMetrics::start`].
pub struct WorkflowExecution<'a> {
    metrics: &'a WorkflowMetrics,
    id: Uuid,
    begun: Instant,
    finished: bool,
}

impl WorkflowExecution<'_> {
    /// Identifier for correlating this run in logs.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Complete the run with the given terminal status.
    pub fn complete(mut self, status: WorkflowStatus) {
        self.finish(status);
    }

    fn finish(&mut self, status: WorkflowStatus) {
        if self.finished {
            return;
        }
        self.finished = true;
        self.metrics.record_completion(status);
        info!(
            workflow_id = %self.id,
            status = status.as_str(),
            elapsed_secs = self.begun.elapsed().as_secs_f64(),
            "workflow completed"
        );
    }
}

impl Drop for WorkflowExecution<'_> {
    fn drop(&mut self) {
        if !self.finished {
            warn!(workflow_id = %self.id, "workflow dropped without completion, recording as failed");
            self.finish(WorkflowStatus::Failed);
        }
    }
}

impl DomainMetrics for WorkflowMetrics {
    fn domain_name() -> &'static str {
        "workflows"
    }

    fn metrics_documentation() -> Vec<MetricDoc> {
        vec![
            MetricDoc {
                name: WORKFLOWS_STARTED,
                metric_type: MetricType::Counter,
                help: "Total workflows started",
                labels: vec!["type"],
                buckets: None,
            },
            MetricDoc {
                name: WORKFLOWS_COMPLETED,
                metric_type: MetricType::Counter,
                help: "Total workflows completed",
                labels: vec!["status"],
                buckets: None,
            },
            MetricDoc {
                name: WORKFLOW_DURATION,
                metric_type: MetricType::Histogram,
                help: "Total workflow execution time",
                labels: vec!["resume_count"],
                buckets: Some(WORKFLOW_DURATION_BUCKETS),
            },
            MetricDoc {
                name: WORKFLOWS_IN_PROGRESS,
                metric_type: MetricType::Gauge,
                help: "Number of workflows currently in progress",
                labels: vec![],
                buckets: None,
            },
        ]
    }
}


impl std::fmt::Debug for WorkflowMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkflowMetrics").finish_non_exhaustive()
    }
}
