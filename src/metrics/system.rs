//! Unified metrics system for the HR backend
//!
//! This module owns the recorder lifecycle:
//! - Prometheus recorder construction with per-metric bucket boundaries
//! - One-time global installation at process start
//! - In-process rendering of the text exposition format, read by the
//!   integrator's scrape endpoint
//! - Pushgateway delivery for short-lived jobs

use std::sync::OnceLock;

use metrics::gauge;
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle, PrometheusRecorder};
use tracing::info;

use crate::config::MetricsSettings;
use crate::error::{MetricsError, Result};
use crate::metrics::{registry, BusinessMetrics, MetricType};

/// Global handle for the installed Prometheus recorder
static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Metrics system manager
pub struct MetricsSystem {
    settings: MetricsSettings,
}

impl MetricsSystem {
    /// Create a new metrics system configured from the environment
    pub fn new() -> Self {
        Self::with_settings(MetricsSettings::from_env())
    }

    /// Create a new metrics system with explicit settings
    pub fn with_settings(settings: MetricsSettings) -> Self {
        Self { settings }
    }

    /// Install the global recorder and materialize the registry.
    ///
    /// Validates the instrument catalog, installs the Prometheus recorder
    /// (with each histogram's declared bucket boundaries) as the process-wide
    /// recorder, registers help texts, and returns the [`BusinessMetrics`]
    /// registry bound to it. Calling this a second time is an error: the
    /// registry lives for the process lifetime.
    pub fn install(&self) -> Result<BusinessMetrics> {
        registry::validate(registry::catalog())?;

        if METRICS_HANDLE.get().is_some() {
            return Err(MetricsError::AlreadyInitialized);
        }

        let handle = self
            .exporter_builder()?
            .install_recorder()
            .map_err(|e| MetricsError::Recorder(e.to_string()))?;

        if METRICS_HANDLE.set(handle).is_err() {
            return Err(MetricsError::AlreadyInitialized);
        }

        registry::describe_all();
        if self.settings.debug {
            registry::log_catalog_summary();
        }

        let metrics = BusinessMetrics::new();
        self.set_app_info();

        info!(
            environment = self.settings.environment.as_str(),
            instruments = registry::catalog().len(),
            "metrics system initialized"
        );

        Ok(metrics)
    }

    /// Build an uninstalled recorder with the cataloged bucket boundaries.
    ///
    /// Used by tests to pair an isolated [`BusinessMetrics`] registry with
    /// its own recorder via [`metrics::with_local_recorder`].
    pub fn build_recorder(&self) -> Result<PrometheusRecorder> {
        registry::validate(registry::catalog())?;
        Ok(self.exporter_builder()?.build_recorder())
    }

    fn exporter_builder(&self) -> Result<PrometheusBuilder> {
        let mut builder = PrometheusBuilder::new();
        for doc in registry::catalog() {
            if doc.metric_type != MetricType::Histogram {
                continue;
            }
            let buckets = doc.buckets.ok_or_else(|| {
                MetricsError::Config(format!("histogram '{}' has no buckets", doc.name))
            })?;
            builder = builder
                .set_buckets_for_metric(Matcher::Full(doc.name.to_string()), buckets)
                .map_err(|e| MetricsError::Recorder(e.to_string()))?;
        }
        Ok(builder)
    }

    /// Publish the application info series (value fixed at 1).
    fn set_app_info(&self) {
        gauge!(
            registry::APP_INFO,
            "version" => env!("CARGO_PKG_VERSION"),
            "service" => "backend-api",
            "environment" => self.settings.environment.clone()
        )
        .set(1.0);
    }

    /// Get the current metrics as Prometheus text exposition format.
    ///
    /// This is a full snapshot, safe to call concurrently with ongoing
    /// recording. Returns `None` until [`MetricsSystem::install`] has run.
    pub fn render(&self) -> Option<String> {
        METRICS_HANDLE.get().map(|handle| handle.render())
    }

    /// Push the current snapshot to the Pushgateway (for short-lived jobs).
    pub async fn push_to_pushgateway(&self, instance: &str) -> Result<()> {
        let base = self.settings.pushgateway_url.as_ref().ok_or_else(|| {
            MetricsError::Config("pushgateway URL not configured".to_string())
        })?;

        let metrics_text = self.render().ok_or(MetricsError::NotInitialized)?;

        let push_url = format!(
            "{}/metrics/job/{}/instance/{}",
            base.trim_end_matches('/'),
            self.settings.job_name,
            instance
        );

        let client = reqwest::Client::new();
        let response = client
            .post(&push_url)
            .header("Content-Type", "text/plain; version=0.0.4")
            .body(metrics_text)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MetricsError::Push {
                status: response.status().as_u16(),
            });
        }

        if self.settings.debug {
            info!(instance, "pushed metrics to Pushgateway");
        }

        Ok(())
    }
}

impl Default for MetricsSystem {
    fn default() -> Self {
        Self::new()
    }
}
