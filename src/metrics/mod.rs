use std::time::Duration;

use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

// ============================================================================
// Metrics Module - Prometheus metrics for repository calls
// ============================================================================
//
// - Operation count per repository/operation/outcome
// - Operation latency per repository/operation
//
// Repositories record into this registry when one is attached to them.
// ============================================================================

pub struct RepositoryMetrics {
    registry: Registry,

    pub operations_total: IntCounterVec,
    pub operation_duration: HistogramVec,
}

impl RepositoryMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let operations_total = IntCounterVec::new(
            Opts::new("repository_operations_total", "Total repository operations"),
            &["repository", "operation", "outcome"],
        )?;
        registry.register(Box::new(operations_total.clone()))?;

        let operation_duration = HistogramVec::new(
            HistogramOpts::new(
                "repository_operation_duration_seconds",
                "Repository operation duration",
            )
            .buckets(vec![0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]),
            &["repository", "operation"],
        )?;
        registry.register(Box::new(operation_duration.clone()))?;

        Ok(Self {
            registry,
            operations_total,
            operation_duration,
        })
    }

    pub fn record<T, E>(
        &self,
        repository: &str,
        operation: &str,
        elapsed: Duration,
        result: &Result<T, E>,
    ) {
        let outcome = if result.is_ok() { "success" } else { "error" };

        self.operations_total
            .with_label_values(&[repository, operation, outcome])
            .inc();
        self.operation_duration
            .with_label_values(&[repository, operation])
            .observe(elapsed.as_secs_f64());
    }

    /// Text exposition format, as served on a `/metrics` endpoint
    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_by_outcome() {
        let metrics = RepositoryMetrics::new().unwrap();

        metrics.record("product", "find", Duration::from_millis(2), &Ok::<_, ()>(()));
        metrics.record("product", "find", Duration::from_millis(2), &Err::<(), _>(()));
        metrics.record("product", "find", Duration::from_millis(2), &Err::<(), _>(()));

        let ok = metrics
            .operations_total
            .with_label_values(&["product", "find", "success"])
            .get();
        let failed = metrics
            .operations_total
            .with_label_values(&["product", "find", "error"])
            .get();

        assert_eq!(ok, 1);
        assert_eq!(failed, 2);
    }

    #[test]
    fn test_encode_contains_metric_names() {
        let metrics = RepositoryMetrics::new().unwrap();
        metrics.record("order", "create", Duration::from_millis(1), &Ok::<_, ()>(()));

        let text = metrics.encode().unwrap();

        assert!(text.contains("repository_operations_total"));
        assert!(text.contains("repository_operation_duration_seconds"));
    }
}
