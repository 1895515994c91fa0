//! The **abstraction** for checking whether a single address is reachable.
//!
//! The sweep only depends on [`AddressProbe`]; how the check is performed
//! (an external `ping` process, a raw ICMP socket, a test double) is up to
//! the implementation.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub mod icmp;
pub mod system;

pub use icmp::IcmpPing;
pub use system::SystemPing;

/// Performs exactly one reachability attempt against `address`.
///
/// Implementations must return within a bounded time; anything that runs
/// past its own deadline should come back as [`ProbeError::Timeout`].
#[async_trait]
pub trait AddressProbe: Send + Sync {
    async fn check(&self, address: &str) -> Result<Reply, ProbeError>;
}

/// A successful echo. The latency is absent when the mechanism answered but
/// did not say how long it took.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub latency: Option<Latency>,
}

impl Reply {
    pub fn with_latency(latency: Latency) -> Self {
        Self {
            latency: Some(latency),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// The check did not finish before its deadline.
    #[error("timeout")]
    Timeout,

    /// The check finished and the host did not answer.
    #[error("unreachable")]
    Unreachable,

    /// The mechanism itself broke (permission denied, missing binary, ...).
    #[error("{0}")]
    Failed(String),
}

/// Round-trip time in milliseconds, kept in the precision the mechanism
/// reported it with (`0.045`, `12.3`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Latency(String);

impl Latency {
    /// Accepts a plain non-negative decimal such as `0.5` or `12`.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let well_formed = !text.is_empty()
            && text.bytes().all(|b| b.is_ascii_digit() || b == b'.')
            && text.bytes().filter(|&b| b == b'.').count() <= 1
            && text.bytes().any(|b| b.is_ascii_digit());
        well_formed.then(|| Self(text.to_string()))
    }

    pub fn from_duration(rtt: Duration) -> Self {
        Self(format!("{:.3}", rtt.as_secs_f64() * 1000.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Latency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownReason {
    Unreachable,
    Timeout,
}

impl fmt::Display for DownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownReason::Unreachable => f.write_str("unreachable"),
            DownReason::Timeout => f.write_str("timeout"),
        }
    }
}

/// Status of one address in a sweep. Produced and reported immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResult {
    Up { latency: Option<Latency> },
    Down(DownReason),
    Error(String),
}

impl ProbeResult {
    pub fn is_up(&self) -> bool {
        matches!(self, ProbeResult::Up { .. })
    }
}

impl From<Result<Reply, ProbeError>> for ProbeResult {
    fn from(outcome: Result<Reply, ProbeError>) -> Self {
        match outcome {
            Ok(reply) => ProbeResult::Up {
                latency: reply.latency,
            },
            Err(ProbeError::Timeout) => ProbeResult::Down(DownReason::Timeout),
            Err(ProbeError::Unreachable) => ProbeResult::Down(DownReason::Unreachable),
            Err(ProbeError::Failed(message)) => ProbeResult::Error(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latency_keeps_native_precision() {
        assert_eq!(Latency::parse("0.045").unwrap().to_string(), "0.045");
        assert_eq!(Latency::parse("12.30").unwrap().to_string(), "12.30");
        assert_eq!(Latency::parse(" 7 ").unwrap().as_str(), "7");
    }

    #[test]
    fn latency_rejects_garbage() {
        for bad in ["", ".", "1.2.3", "-1", "inf", "NaN", "1e3", "abc"] {
            assert_eq!(Latency::parse(bad), None, "{bad}");
        }
    }

    #[test]
    fn latency_from_duration() {
        assert_eq!(Latency::from_duration(Duration::from_micros(512)).as_str(), "0.512");
        assert_eq!(Latency::from_duration(Duration::from_millis(20)).as_str(), "20.000");
    }

    #[test]
    fn outcome_maps_to_result() {
        let up = ProbeResult::from(Ok(Reply::with_latency(Latency::parse("0.5").unwrap())));
        assert!(up.is_up());

        assert_eq!(
            ProbeResult::from(Err(ProbeError::Timeout)),
            ProbeResult::Down(DownReason::Timeout)
        );
        assert_eq!(
            ProbeResult::from(Err(ProbeError::Unreachable)),
            ProbeResult::Down(DownReason::Unreachable)
        );
        assert_eq!(
            ProbeResult::from(Err(ProbeError::Failed("permission denied".into()))),
            ProbeResult::Error("permission denied".into())
        );
    }
}
