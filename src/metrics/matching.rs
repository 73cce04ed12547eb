//! Matching and AI Agent Metrics
//!
//! Instruments for the resume/job-description matching pipeline: request
//! outcomes, end-to-end matching latency by batch size, calls to the AI agent
//! service with their latency, the distribution of produced match scores, and
//! the current candidate counts per fit category.

use metrics::{counter, gauge, histogram, Histogram};

use crate::metrics::core::{SeriesGrid, SeriesRow};
use crate::metrics::labels::{AgentEndpoint, BatchSizeBand, FitCategory, MatchSource, Outcome};
use crate::metrics::{DomainMetrics, MetricDoc, MetricType};

pub const MATCHING_REQUESTS: &str = "hr_matching_requests_total";
pub const MATCHING_DURATION: &str = "hr_matching_duration_seconds";
pub const AI_AGENT_CALLS: &str = "hr_ai_agent_calls_total";
pub const AI_AGENT_LATENCY: &str = "hr_ai_agent_latency_seconds";
pub const MATCH_SCORES: &str = "hr_match_scores";
pub const CANDIDATES_BY_FIT: &str = "hr_candidates_by_fit_category";

/// Whole-batch matching can take minutes when the agent compares large sets.
pub const MATCHING_DURATION_BUCKETS: &[f64] =
    &[1.0, 5.0, 10.0, 30.0, 60.0, 120.0, 300.0, 600.0];

/// Single agent calls are expected in the seconds-to-minutes range.
pub const AGENT_LATENCY_BUCKETS: &[f64] = &[1.0, 5.0, 10.0, 30.0, 60.0, 120.0, 300.0];

/// Match scores are percentages; one bucket per decile.
pub const MATCH_SCORE_BUCKETS: &[f64] =
    &[10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0];

/// Metrics collection for the matching domain
pub struct MatchingMetrics {
    requests: SeriesGrid<metrics::Counter>,
    duration: SeriesRow<metrics::Histogram>,
    agent_calls: SeriesGrid<metrics::Counter>,
    agent_latency: SeriesRow<metrics::Histogram>,
    match_scores: Histogram,
    candidates_by_fit: SeriesRow<metrics::Gauge>,
}

impl MatchingMetrics {
    pub fn new() -> Self {
        Self {
            requests: SeriesGrid::build(
                &Outcome::VALUES,
                &MatchSource::VALUES,
                |status, source| {
                    counter!(
                        MATCHING_REQUESTS,
                        "status" => status.as_str(),
                        "source" => source.as_str()
                    )
                },
            ),
            duration: SeriesRow::build(&BatchSizeBand::VALUES, |band| {
                histogram!(MATCHING_DURATION, "batch_size" => band.as_str())
            }),
            agent_calls: SeriesGrid::build(
                &AgentEndpoint::VALUES,
                &Outcome::VALUES,
                |endpoint, status| {
                    counter!(
                        AI_AGENT_CALLS,
                        "endpoint" => endpoint.as_str(),
                        "status" => status.as_str()
                    )
                },
            ),
            agent_latency: SeriesRow::build(&AgentEndpoint::VALUES, |endpoint| {
                histogram!(AI_AGENT_LATENCY, "endpoint" => endpoint.as_str())
            }),
            match_scores: histogram!(MATCH_SCORES),
            candidates_by_fit: SeriesRow::build(&FitCategory::VALUES, |category| {
                gauge!(CANDIDATES_BY_FIT, "category" => category.as_str())
            }),
        }
    }

    /// Record a resume/job-description matching request
    pub fn record_request(&self, success: bool, source: MatchSource) {
        let status = Outcome::from_success(success);
        self.requests
            .get(status.index(), source.index())
            .increment(1);
    }

    /// Record time spent on one matching operation
    pub fn observe_matching_duration(&self, batch_size: usize, seconds: f64) {
        let band = BatchSizeBand::from_count(batch_size);
        self.duration.get(band.index()).record(seconds);
    }

    /// Record one call to the AI agent service.
    ///
    /// The call counter and the latency histogram are always updated
    /// together, so call counts and latency samples stay consistent.
    pub fn record_agent_call(&self, endpoint: AgentEndpoint, success: bool, seconds: f64) {
        let status = Outcome::from_success(success);
        self.agent_calls
            .get(endpoint.index(), status.index())
            .increment(1);
        self.agent_latency.get(endpoint.index()).record(seconds);
    }

    /// Record a produced match score.
    ///
    /// Scores are expected in 0-100; anything above the last boundary lands
    /// in the overflow bucket rather than being rejected.
    pub fn record_match_score(&self, score: f64) {
        self.match_scores.record(score);
    }

    /// Overwrite the candidate counts per fit category.
    ///
    /// This is a full snapshot, not a delta; callers compute current totals
    /// before calling.
    pub fn update_fit_categories(&self, best_fit: u64, partial_fit: u64, not_fit: u64) {
        self.candidates_by_fit
            .get(FitCategory::BestFit.index())
            .set(best_fit as f64);
        self.candidates_by_fit
            .get(FitCategory::PartialFit.index())
            .set(partial_fit as f64);
        self.candidates_by_fit
            .get(FitCategory::NotFit.index())
            .set(not_fit as f64);
    }
}

impl Default for MatchingMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainMetrics for MatchingMetrics {
    fn domain_name() -> &'static str {
        "matching"
    }

    fn metrics_documentation() -> Vec<MetricDoc> {
        vec![
            MetricDoc {
                name: MATCHING_REQUESTS,
                metric_type: MetricType::Counter,
                help: "Total number of resume-JD matching requests",
                labels: vec!["status", "source"],
                buckets: None,
            },
            MetricDoc {
                name: MATCHING_DURATION,
                metric_type: MetricType::Histogram,
                help: "Time spent on AI matching operations",
                labels: vec!["batch_size"],
                buckets: Some(MATCHING_DURATION_BUCKETS),
            },
            MetricDoc {
                name: AI_AGENT_CALLS,
                metric_type: MetricType::Counter,
                help: "Total calls to AI Agent service",
                labels: vec!["endpoint", "status"],
                buckets: None,
            },
            MetricDoc {
                name: AI_AGENT_LATENCY,
                metric_type: MetricType::Histogram,
                help: "Latency of AI Agent API calls",
                labels: vec!["endpoint"],
                buckets: Some(AGENT_LATENCY_BUCKETS),
            },
            MetricDoc {
                name: MATCH_SCORES,
                metric_type: MetricType::Histogram,
                help: "Distribution of resume match scores",
                labels: vec![],
                buckets: Some(MATCH_SCORE_BUCKETS),
            },
            MetricDoc {
                name: CANDIDATES_BY_FIT,
                metric_type: MetricType::Gauge,
                help: "Number of candidates by fit category",
                labels: vec!["category"],
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
        let docs = MatchingMetrics::metrics_documentation();
        assert_eq!(docs.len(), 6);
    }

    #[test]
    fn histogram_docs_carry_their_buckets() {
        let docs = MatchingMetrics::metrics_documentation();
        for doc in docs {
            match doc.metric_type {
                MetricType::Histogram => assert!(doc.buckets.is_some(), "{}", doc.name),
                _ => assert!(doc.buckets.is_none(), "{}", doc.name),
            }
        }
    }

    #[test]
    fn score_buckets_span_the_percentage_range() {
        assert_eq!(MATCH_SCORE_BUCKETS.first(), Some(&10.0));
        assert_eq!(MATCH_SCORE_BUCKETS.last(), Some(&100.0));
        assert_eq!(MATCH_SCORE_BUCKETS.len(), 10);
    }
}

impl std::fmt::Debug for MatchingMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchingMetrics").finish_non_exhaustive()
    }
}
