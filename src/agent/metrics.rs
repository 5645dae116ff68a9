use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::protocol::ErrorStatus;

const NANOSECONDS_PER_MICROSECOND: u128 = 1_000;

/// Counters for one agent, updated from the serving loop.
#[derive(Debug, Default)]
pub struct AgentMetrics {
    datagrams_received: AtomicU64,
    responses_sent: AtomicU64,
    error_responses: AtomicU64,
    transport_failures: AtomicU64,
    handle_latency_total_ns: AtomicU64,
    handle_latency_max_ns: AtomicU64,
}

impl AgentMetrics {
    /// Fresh zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn record_received(&self) {
        self.datagrams_received.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_response(&self, status: ErrorStatus) {
        self.responses_sent.fetch_add(1, Ordering::Relaxed);
        if !status.is_success() {
            self.error_responses.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[inline]
    pub(crate) fn record_transport_failure(&self) {
        self.transport_failures.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub(crate) fn record_latency(&self, duration: Duration) {
        let nanos = u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX);
        self.handle_latency_total_ns
            .fetch_add(nanos, Ordering::Relaxed);
        update_max(&self.handle_latency_max_ns, nanos);
    }

    /// Point-in-time copy of every counter.
    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            datagrams_received: self.datagrams_received.load(Ordering::Relaxed),
            responses_sent: self.responses_sent.load(Ordering::Relaxed),
            error_responses: self.error_responses.load(Ordering::Relaxed),
            transport_failures: self.transport_failures.load(Ordering::Relaxed),
            handle_latency_total_ns: self.handle_latency_total_ns.load(Ordering::Relaxed),
            handle_latency_max_ns: self.handle_latency_max_ns.load(Ordering::Relaxed),
        }
    }
}

fn update_max(target: &AtomicU64, candidate: u64) {
    let mut current = target.load(Ordering::Relaxed);
    while candidate > current {
        match target.compare_exchange_weak(
            current,
            candidate,
            Ordering::Relaxed,
            Ordering::Relaxed,
        ) {
            Ok(_) => return,
            Err(old) => current = old,
        }
    }
}

/// Lightweight snapshot of agent counters.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Datagrams read from the socket
    pub datagrams_received: u64,
    /// Replies written back
    pub responses_sent: u64,
    /// Replies with a non-zero error status
    pub error_responses: u64,
    /// Socket failures skipped by the loop
    pub transport_failures: u64,
    /// Sum of per-datagram handling time
    pub handle_latency_total_ns: u64,
    /// Slowest single datagram
    pub handle_latency_max_ns: u64,
}

impl MetricsSnapshot {
    /// Average handling latency in microseconds.
    #[must_use]
    pub fn avg_handle_latency_us(&self) -> Option<u64> {
        if self.responses_sent == 0 {
            return None;
        }
        let avg = u128::from(self.handle_latency_total_ns)
            / (u128::from(self.responses_sent) * NANOSECONDS_PER_MICROSECOND);
        Some(u64::try_from(avg).unwrap_or(u64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_error_responses() {
        let metrics = AgentMetrics::new();
        metrics.record_received();
        metrics.record_received();
        metrics.record_response(ErrorStatus::NoError);
        metrics.record_response(ErrorStatus::NoSuchName);
        metrics.record_transport_failure();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.datagrams_received, 2);
        assert_eq!(snapshot.responses_sent, 2);
        assert_eq!(snapshot.error_responses, 1);
        assert_eq!(snapshot.transport_failures, 1);
    }

    #[test]
    fn test_latency_average_and_max() {
        let metrics = AgentMetrics::new();
        assert_eq!(metrics.snapshot().avg_handle_latency_us(), None);

        metrics.record_response(ErrorStatus::NoError);
        metrics.record_latency(Duration::from_micros(10));
        metrics.record_response(ErrorStatus::NoError);
        metrics.record_latency(Duration::from_micros(30));

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.avg_handle_latency_us(), Some(20));
        assert_eq!(snapshot.handle_latency_max_ns, 30_000);
    }
}
