//! User and Auth Metrics

use metrics::{counter, gauge, Gauge};

use crate::metrics::core::SeriesRow;
use crate::metrics::labels::Outcome;
use crate::metrics::{DomainMetrics, MetricDoc, MetricType};

pub const USER_LOGINS: &str = "hr_user_logins_total";
pub const ACTIVE_USERS: &str = "hr_active_users";
pub const USER_REGISTRATIONS: &str = "hr_user_registrations_total";

/// Metrics collection for the user/auth domain
pub struct UserMetrics {
    logins: SeriesRow<metrics::Counter>,
    active_users: Gauge,
    registrations: SeriesRow<metrics::Counter>,
}

impl UserMetrics {
    pub fn new() -> Self {
        Self {
            logins: SeriesRow::build(&Outcome::VALUES, |status| {
                counter!(USER_LOGINS, "status" => status.as_str())
            }),
            active_users: gauge!(ACTIVE_USERS),
            registrations: SeriesRow::build(&Outcome::VALUES, |status| {
                counter!(USER_REGISTRATIONS, "status" => status.as_str())
            }),
        }
    }

    /// Record a user login attempt
    pub fn record_login(&self, success: bool) {
        let status = Outcome::from_success(success);
        self.logins.get(status.index()).increment(1);
    }

    /// Record a user registration attempt
    pub fn record_registration(&self, success: bool) {
        let status = Outcome::from_success(success);
        self.registrations.get(status.index()).increment(1);
    }

    /// Set the number of currently active users
    pub fn set_active_users(&self, count: u64) {
        self.active_users.set(count as f64);
    }
}

impl Default for UserMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainMetrics for UserMetrics {
    fn domain_name() -> &'static str {
        "user"
    }

    fn metrics_documentation() -> Vec<MetricDoc> {
        vec![
            MetricDoc {
                name: USER_LOGINS,
                metric_type: MetricType::Counter,
                help: "Total user login attempts",
                labels: vec!["status"],
                buckets: None,
            },
            MetricDoc {
                name: ACTIVE_USERS,
                metric_type: MetricType::Gauge,
                help: "Number of currently active users",
                labels: vec![],
                buckets: None,
            },
            MetricDoc {
                name: USER_REGISTRATIONS,
                metric_type: MetricType::Counter,
                help: "Total user registrations",
                labels: vec!["status"],
                buckets: None,
            },
        ]
    }
}


impl std::fmt::Debug for UserMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserMetrics").finish_non_exhaustive()
    }
}
