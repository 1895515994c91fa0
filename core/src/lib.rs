//! # Sweepr Core
//!
//! The range prober. [`sweep::sweep`] walks an address range in ascending
//! order, runs one reachability check per address through an injected
//! [`probe::AddressProbe`], and hands every outcome to a
//! [`report::SweepReporter`] as soon as it is known.
//!
//! Concrete probes live under [`probe`]: the system `ping` utility and an
//! in-process ICMP echo.

pub mod probe;
pub mod report;
pub mod sweep;

pub use probe::{AddressProbe, DownReason, Latency, ProbeError, ProbeResult, Reply};
pub use report::{LineReporter, SweepReporter};
pub use sweep::{SweepError, SweepSummary, sweep, sweep_range};
