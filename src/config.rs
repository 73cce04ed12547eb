//! Process configuration, populated once at startup.
//!
//! Every setting is read from the environment (after loading `.env`) into an
//! explicit struct; nothing else in the crate reads environment variables at
//! runtime. Connection options for the document store are derived from the
//! connection-string shape by a pure function so the policy is testable.

use std::env;
use std::time::Duration;

/// Maximum number of stored resumes under the free plan.
pub const FREE_PLAN_RESUME_LIMIT: u32 = 100;

/// Maximum accepted upload size in megabytes.
pub const MAX_FILE_SIZE_MB: u64 = 5;

/// Settings for the metrics system.
#[derive(Debug, Clone)]
pub struct MetricsSettings {
    /// Base URL of the Pushgateway for pushing metrics from short-lived jobs.
    pub pushgateway_url: Option<String>,
    /// Job name used in the Pushgateway path.
    pub job_name: String,
    /// Deployment environment reported on the app info metric.
    pub environment: String,
    /// Whether to emit debug logging from the metrics system itself.
    pub debug: bool,
}

impl MetricsSettings {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self {
            pushgateway_url: env::var("HR_PUSHGATEWAY_URL")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            job_name: env::var("HR_METRICS_JOB").unwrap_or_else(|_| "hr_backend".to_string()),
            environment: env::var("HR_ENVIRONMENT").unwrap_or_else(|_| "production".to_string()),
            debug: env::var("HR_METRICS_DEBUG").is_ok(),
        }
    }
}

impl Default for MetricsSettings {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Settings for the document-store connection.
///
/// The connection itself is owned by the integrator; this crate only resolves
/// the target and the options profile once at startup.
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub database_name: String,
    pub connection: ConnectionOptions,
}

impl DatabaseSettings {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let url =
            env::var("MONGODB_URL").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
        let database_name = env::var("DATABASE_NAME").unwrap_or_else(|_| "pod_1".to_string());
        let connection = ConnectionOptions::for_url(&url);
        Self {
            url,
            database_name,
            connection,
        }
    }
}

/// TLS policy for the document-store connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsMode {
    /// Leave TLS to the driver defaults.
    DriverDefault,
    /// TLS is implied by the SRV connection scheme.
    ImpliedBySrv,
    /// TLS must be enabled explicitly, with certificate validation.
    Required,
}

/// Timeout and TLS options for the document-store client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionOptions {
    pub server_selection_timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    pub socket_timeout: Option<Duration>,
    pub retry_writes: Option<bool>,
    pub tls: TlsMode,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            server_selection_timeout: None,
            connect_timeout: None,
            socket_timeout: None,
            retry_writes: None,
            tls: TlsMode::DriverDefault,
        }
    }
}

impl ConnectionOptions {
    /// Select the options profile from the connection-string shape.
    ///
    /// SRV connection strings get managed-cluster timeouts with TLS implied by
    /// the scheme. Standard connection strings pointing at a managed cluster
    /// (`mongodb.net`) additionally require explicit TLS with certificate
    /// validation. Anything else keeps driver defaults.
    pub fn for_url(url: &str) -> Self {
        if url.contains("mongodb+srv://") {
            Self {
                tls: TlsMode::ImpliedBySrv,
                ..Self::managed_cluster()
            }
        } else if url.contains("mongodb://") && url.contains("mongodb.net") {
            Self {
                tls: TlsMode::Required,
                ..Self::managed_cluster()
            }
        } else {
            Self::default()
        }
    }

    fn managed_cluster() -> Self {
        Self {
            server_selection_timeout: Some(Duration::from_secs(30)),
            connect_timeout: Some(Duration::from_secs(20)),
            socket_timeout: Some(Duration::from_secs(20)),
            retry_writes: Some(true),
            tls: TlsMode::DriverDefault,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srv_url_gets_managed_profile_with_implied_tls() {
        let options = ConnectionOptions::for_url("mongodb+srv://user:pw@cluster0.abc.mongodb.net");
        assert_eq!(options.tls, TlsMode::ImpliedBySrv);
        assert_eq!(
            options.server_selection_timeout,
            Some(Duration::from_secs(30))
        );
        assert_eq!(options.connect_timeout, Some(Duration::from_secs(20)));
        assert_eq!(options.socket_timeout, Some(Duration::from_secs(20)));
        assert_eq!(options.retry_writes, Some(true));
    }

    #[test]
    fn standard_managed_url_requires_explicit_tls() {
        let options = ConnectionOptions::for_url("mongodb://user:pw@shard0.abc.mongodb.net:27017");
        assert_eq!(options.tls, TlsMode::Required);
        assert_eq!(options.retry_writes, Some(true));
    }

    #[test]
    fn local_url_keeps_driver_defaults() {
        let options = ConnectionOptions::for_url("mongodb://localhost:27017");
        assert_eq!(options, ConnectionOptions::default());
    }
}
