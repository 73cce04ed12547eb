//! Behavior tests for the business metrics registry.
//!
//! Each test pairs a fresh registry with its own recorder, so assertions on
//! rendered values are isolated from every other test in this binary.

use hr_metrics::config::MetricsSettings;
use hr_metrics::metrics::labels::{
    AgentEndpoint, Collection, DbOperation, FileOperation, FileType, MatchSource, StorageKind,
    WorkflowStatus, WorkflowType,
};
use hr_metrics::metrics::{BusinessMetrics, MetricsSystem};
use metrics_exporter_prometheus::PrometheusRecorder;

fn test_system() -> MetricsSystem {
    MetricsSystem::with_settings(MetricsSettings {
        pushgateway_url: None,
        job_name: "hr_backend_test".to_string(),
        environment: "test".to_string(),
        debug: false,
    })
}

fn isolated_registry() -> (BusinessMetrics, PrometheusRecorder) {
    let recorder = test_system().build_recorder().expect("recorder must build");
    let registry = metrics::with_local_recorder(&recorder, BusinessMetrics::new);
    (registry, recorder)
}

/// Find one series in the rendered exposition text and parse its value.
fn sample(rendered: &str, name: &str, labels: &[(&str, &str)]) -> Option<f64> {
    rendered.lines().find_map(|line| {
        let (series, value) = line.rsplit_once(' ')?;
        let series_name = series.split('{').next().unwrap_or(series);
        if series_name != name {
            return None;
        }
        if !labels
            .iter()
            .all(|(key, val)| series.contains(&format!("{key}=\"{val}\"")))
        {
            return None;
        }
        value.parse().ok()
    })
}

#[test]
fn render_is_none_before_install() {
    assert!(test_system().render().is_none());
}

#[test]
fn upload_counts_sum_to_the_number_of_calls() {
    let (m, recorder) = isolated_registry();

    for n in 0..7 {
        let file_type = if n % 3 == 0 { FileType::Pdf } else { FileType::Docx };
        m.resume.record_upload(n % 2 == 0, file_type);
    }

    let rendered = recorder.handle().render();
    let mut total = 0.0;
    for status in ["success", "failed"] {
        for file_type in ["pdf", "docx"] {
            total += sample(
                &rendered,
                "hr_resume_uploads_total",
                &[("status", status), ("file_type", file_type)],
            )
            .expect("series is pre-registered");
        }
    }
    assert_eq!(total, 7.0);
}

#[test]
fn series_exist_with_zero_before_first_use() {
    let (_m, recorder) = isolated_registry();
    let rendered = recorder.handle().render();

    assert_eq!(
        sample(
            &rendered,
            "hr_user_registrations_total",
            &[("status", "failed")]
        ),
        Some(0.0)
    );
    assert_eq!(sample(&rendered, "hr_active_users", &[]), Some(0.0));
}

#[test]
fn agent_call_updates_counter_and_latency_together() {
    let (m, recorder) = isolated_registry();

    m.matching
        .record_agent_call(AgentEndpoint::CompareBatch, true, 2.5);

    let rendered = recorder.handle().render();
    assert_eq!(
        sample(
            &rendered,
            "hr_ai_agent_calls_total",
            &[("endpoint", "compare-batch"), ("status", "success")]
        ),
        Some(1.0)
    );
    assert_eq!(
        sample(
            &rendered,
            "hr_ai_agent_latency_seconds_count",
            &[("endpoint", "compare-batch")]
        ),
        Some(1.0)
    );
    assert_eq!(
        sample(
            &rendered,
            "hr_ai_agent_latency_seconds_sum",
            &[("endpoint", "compare-batch")]
        ),
        Some(2.5)
    );
    // 2.5 falls between the 1s and 5s boundaries
    assert_eq!(
        sample(
            &rendered,
            "hr_ai_agent_latency_seconds_bucket",
            &[("endpoint", "compare-batch"), ("le", "1")]
        ),
        Some(0.0)
    );
    assert_eq!(
        sample(
            &rendered,
            "hr_ai_agent_latency_seconds_bucket",
            &[("endpoint", "compare-batch"), ("le", "5")]
        ),
        Some(1.0)
    );
}

#[test]
fn fit_categories_are_overwritten_not_accumulated() {
    let (m, recorder) = isolated_registry();

    m.matching.update_fit_categories(3, 1, 2);
    let rendered = recorder.handle().render();
    let gauge = "hr_candidates_by_fit_category";
    assert_eq!(sample(&rendered, gauge, &[("category", "Best Fit")]), Some(3.0));
    assert_eq!(
        sample(&rendered, gauge, &[("category", "Partial Fit")]),
        Some(1.0)
    );
    assert_eq!(sample(&rendered, gauge, &[("category", "Not Fit")]), Some(2.0));

    m.matching.update_fit_categories(0, 0, 0);
    let rendered = recorder.handle().render();
    assert_eq!(sample(&rendered, gauge, &[("category", "Best Fit")]), Some(0.0));
    assert_eq!(
        sample(&rendered, gauge, &[("category", "Partial Fit")]),
        Some(0.0)
    );
    assert_eq!(sample(&rendered, gauge, &[("category", "Not Fit")]), Some(0.0));
}

#[test]
fn composite_workflow_recording_balances_the_gauge() {
    let (m, recorder) = isolated_registry();

    m.workflows
        .record_workflow(true, false, WorkflowStatus::Success, WorkflowType::Manual);

    let rendered = recorder.handle().render();
    assert_eq!(
        sample(&rendered, "hr_workflows_started_total", &[("type", "manual")]),
        Some(1.0)
    );
    assert_eq!(sample(&rendered, "hr_workflows_in_progress", &[]), Some(1.0));

    m.workflows
        .record_workflow(false, true, WorkflowStatus::Success, WorkflowType::Manual);

    let rendered = recorder.handle().render();
    assert_eq!(
        sample(
            &rendered,
            "hr_workflows_completed_total",
            &[("status", "success")]
        ),
        Some(1.0)
    );
    assert_eq!(sample(&rendered, "hr_workflows_in_progress", &[]), Some(0.0));
}

#[test]
fn workflow_guard_completes_with_the_given_status() {
    let (m, recorder) = isolated_registry();

    let execution = m.workflows.start(WorkflowType::Scheduled);
    let rendered = recorder.handle().render();
    assert_eq!(sample(&rendered, "hr_workflows_in_progress", &[]), Some(1.0));

    execution.complete(WorkflowStatus::Partial);
    let rendered = recorder.handle().render();
    assert_eq!(
        sample(
            &rendered,
            "hr_workflows_completed_total",
            &[("status", "partial")]
        ),
        Some(1.0)
    );
    assert_eq!(sample(&rendered, "hr_workflows_in_progress", &[]), Some(0.0));
}

#[test]
fn dropped_workflow_guard_records_a_failed_completion() {
    let (m, recorder) = isolated_registry();

    {
        let _execution = m.workflows.start(WorkflowType::Manual);
    }

    let rendered = recorder.handle().render();
    assert_eq!(
        sample(
            &rendered,
            "hr_workflows_completed_total",
            &[("status", "failed")]
        ),
        Some(1.0)
    );
    assert_eq!(sample(&rendered, "hr_workflows_in_progress", &[]), Some(0.0));
}

#[test]
fn concurrent_logins_lose_no_updates() {
    let (m, recorder) = isolated_registry();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..125 {
                    m.users.record_login(true);
                }
            });
        }
    });

    let rendered = recorder.handle().render();
    assert_eq!(
        sample(&rendered, "hr_user_logins_total", &[("status", "success")]),
        Some(1000.0)
    );
}

#[test]
fn out_of_range_score_lands_in_the_overflow_bucket() {
    let (m, recorder) = isolated_registry();

    m.matching.record_match_score(250.0);

    let rendered = recorder.handle().render();
    assert_eq!(
        sample(&rendered, "hr_match_scores_bucket", &[("le", "100")]),
        Some(0.0)
    );
    assert_eq!(
        sample(&rendered, "hr_match_scores_bucket", &[("le", "+Inf")]),
        Some(1.0)
    );
    assert_eq!(sample(&rendered, "hr_match_scores_count", &[]), Some(1.0));
}

#[test]
fn match_scores_bucket_by_decile() {
    let (m, recorder) = isolated_registry();

    m.matching.record_match_score(55.5);

    let rendered = recorder.handle().render();
    assert_eq!(
        sample(&rendered, "hr_match_scores_bucket", &[("le", "50")]),
        Some(0.0)
    );
    assert_eq!(
        sample(&rendered, "hr_match_scores_bucket", &[("le", "60")]),
        Some(1.0)
    );
}

#[test]
fn matching_request_and_duration_use_the_band_vocabulary() {
    let (m, recorder) = isolated_registry();

    m.matching.record_request(true, MatchSource::Auto);
    m.matching.observe_matching_duration(12, 45.0);

    let rendered = recorder.handle().render();
    assert_eq!(
        sample(
            &rendered,
            "hr_matching_requests_total",
            &[("status", "success"), ("source", "auto")]
        ),
        Some(1.0)
    );
    assert_eq!(
        sample(
            &rendered,
            "hr_matching_duration_seconds_count",
            &[("batch_size", "11-50")]
        ),
        Some(1.0)
    );
}

#[test]
fn db_operation_records_count_and_latency() {
    let (m, recorder) = isolated_registry();

    m.database
        .record_operation(Collection::Resume, DbOperation::Find, 0.003);

    let rendered = recorder.handle().render();
    assert_eq!(
        sample(
            &rendered,
            "hr_db_operations_total",
            &[("collection", "resume"), ("operation", "find")]
        ),
        Some(1.0)
    );
    assert_eq!(
        sample(
            &rendered,
            "hr_db_operation_duration_seconds_bucket",
            &[("collection", "resume"), ("operation", "find"), ("le", "0.005")]
        ),
        Some(1.0)
    );
    assert_eq!(
        sample(
            &rendered,
            "hr_db_operation_duration_seconds_bucket",
            &[("collection", "resume"), ("operation", "find"), ("le", "0.001")]
        ),
        Some(0.0)
    );
}

#[test]
fn db_timing_guard_counts_and_times_one_operation() {
    let (m, recorder) = isolated_registry();

    {
        let _timing = m
            .database
            .time_operation(Collection::Users, DbOperation::Insert);
    }

    let rendered = recorder.handle().render();
    assert_eq!(
        sample(
            &rendered,
            "hr_db_operations_total",
            &[("collection", "users"), ("operation", "insert")]
        ),
        Some(1.0)
    );
    assert_eq!(
        sample(
            &rendered,
            "hr_db_operation_duration_seconds_count",
            &[("collection", "users"), ("operation", "insert")]
        ),
        Some(1.0)
    );
}

#[test]
fn storage_gauges_and_counters_record_current_state() {
    let (m, recorder) = isolated_registry();

    m.storage.set_storage_bytes(StorageKind::Resumes, 1024);
    m.storage.record_file_operation(FileOperation::Upload, true);
    m.resume.set_resume_count(42);
    m.job_descriptions.record_created(true);
    m.job_descriptions.set_total(5);
    m.users.set_active_users(17);

    let rendered = recorder.handle().render();
    assert_eq!(
        sample(&rendered, "hr_file_storage_bytes", &[("type", "resumes")]),
        Some(1024.0)
    );
    assert_eq!(
        sample(
            &rendered,
            "hr_file_operations_total",
            &[("operation", "upload"), ("status", "success")]
        ),
        Some(1.0)
    );
    assert_eq!(sample(&rendered, "hr_resumes_total", &[]), Some(42.0));
    assert_eq!(
        sample(
            &rendered,
            "hr_job_descriptions_created_total",
            &[("status", "success")]
        ),
        Some(1.0)
    );
    assert_eq!(sample(&rendered, "hr_job_descriptions_total", &[]), Some(5.0));
    assert_eq!(sample(&rendered, "hr_active_users", &[]), Some(17.0));
}

#[test]
fn parse_duration_observation_hits_its_file_type_series() {
    let (m, recorder) = isolated_registry();

    m.resume.observe_parse_duration(FileType::Docx, 1.2);

    let rendered = recorder.handle().render();
    assert_eq!(
        sample(
            &rendered,
            "hr_resume_parse_duration_seconds_count",
            &[("file_type", "docx")]
        ),
        Some(1.0)
    );
    assert_eq!(
        sample(
            &rendered,
            "hr_resume_parse_duration_seconds_count",
            &[("file_type", "pdf")]
        ),
        Some(0.0)
    );
}
