//! Global installation lifecycle.
//!
//! Kept in its own test binary: installing the process-wide recorder is a
//! one-shot operation, so this file contains the single test that does it.

use hr_metrics::config::MetricsSettings;
use hr_metrics::error::MetricsError;
use hr_metrics::metrics::MetricsSystem;

#[test]
fn install_succeeds_once_and_only_once() {
    let system = MetricsSystem::with_settings(MetricsSettings {
        pushgateway_url: None,
        job_name: "hr_backend_test".to_string(),
        environment: "test".to_string(),
        debug: false,
    });

    let metrics = system.install().expect("first install succeeds");
    metrics.users.record_login(true);

    let rendered = system.render().expect("snapshot available after install");
    assert!(rendered.contains("hr_user_logins_total"));
    assert!(rendered.contains("hr_backend_app_info"));
    assert!(rendered.contains("service=\"backend-api\""));

    let err = system.install().unwrap_err();
    assert!(matches!(err, MetricsError::AlreadyInitialized));
}
