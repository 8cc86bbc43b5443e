//! Failure metrics for ticket purchases.
//!
//! The purchase flow reports every failure to an injected [`FailureRecorder`].
//! Counts are diagnostic only and never influence the outcome of a purchase.
//!
//! # Exported Metrics
//!
//! ## Counters
//! - `cinema_ticket_business_failure_events_total{code}` - Failed business validations
//! - `cinema_ticket_failure_events_total{code}` - Hard failures from payment or seat reservation

use metrics::describe_counter;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::ErrorCode;

/// Counter for failed business validations.
pub const BUSINESS_FAILURES_METRIC: &str = "cinema_ticket_business_failure_events_total";

/// Counter for hard (collaborator) failures.
pub const OPERATIONAL_FAILURES_METRIC: &str = "cinema_ticket_failure_events_total";

/// Initialize and register the failure metric descriptions.
///
/// Call once at startup, after installing a recorder.
pub fn register_failure_metrics() {
    describe_counter!(
        BUSINESS_FAILURES_METRIC,
        "Total number of purchases rejected by business validation"
    );
    describe_counter!(
        OPERATIONAL_FAILURES_METRIC,
        "Total number of purchases failed by the payment or seat reservation service"
    );

    tracing::info!("Failure metrics registered");
}

/// Receives purchase failures for observability.
pub trait FailureRecorder: Send + Sync {
    /// A purchase was rejected before any collaborator was called.
    fn business_failure(&self, code: ErrorCode);

    /// A collaborator failed during payment or seat reservation.
    fn operational_failure(&self, code: ErrorCode);
}

/// Records failures through the `metrics` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct MetricsFailureRecorder;

impl FailureRecorder for MetricsFailureRecorder {
    fn business_failure(&self, code: ErrorCode) {
        metrics::counter!(BUSINESS_FAILURES_METRIC, "code" => code.as_str()).increment(1);
        tracing::debug!(%code, "Recorded business_failure metric");
    }

    fn operational_failure(&self, code: ErrorCode) {
        metrics::counter!(OPERATIONAL_FAILURES_METRIC, "code" => code.as_str()).increment(1);
        tracing::debug!(%code, "Recorded operational_failure metric");
    }
}

/// In-process atomic counters.
///
/// Safe to share between threads; useful where no metrics recorder is installed.
#[derive(Debug, Default)]
pub struct AtomicFailureCounters {
    business: AtomicU64,
    operational: AtomicU64,
}

impl AtomicFailureCounters {
    /// Creates zeroed counters
    #[must_use]
    pub const fn new() -> Self {
        Self {
            business: AtomicU64::new(0),
            operational: AtomicU64::new(0),
        }
    }

    /// Number of business validation failures seen so far
    #[must_use]
    pub fn business_failures(&self) -> u64 {
        self.business.load(Ordering::Relaxed)
    }

    /// Number of operational failures seen so far
    #[must_use]
    pub fn operational_failures(&self) -> u64 {
        self.operational.load(Ordering::Relaxed)
    }
}

impl FailureRecorder for AtomicFailureCounters {
    fn business_failure(&self, _code: ErrorCode) {
        self.business.fetch_add(1, Ordering::Relaxed);
    }

    fn operational_failure(&self, _code: ErrorCode) {
        self.operational.fetch_add(1, Ordering::Relaxed);
    }
}

/// Discards all failures.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopFailureRecorder;

impl FailureRecorder for NoopFailureRecorder {
    fn business_failure(&self, _code: ErrorCode) {}

    fn operational_failure(&self, _code: ErrorCode) {}
}
