//! The sweep-and-report loop.
//!
//! Addresses are probed strictly one at a time, in ascending order. Each
//! result is reported before the next probe starts.

use std::any::Any;
use std::io;
use std::sync::Arc;
use std::time::Instant;

use sweepr_common::CodecError;
use sweepr_common::network::address::{format_address, parse_address};
use sweepr_common::network::range::Ipv4Range;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::probe::{AddressProbe, ProbeResult};
use crate::report::SweepReporter;

#[derive(Debug, Error)]
pub enum SweepError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("failed to write report: {0}")]
    Report(#[from] io::Error),
}

/// Per-status totals for one sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub up: u64,
    pub down: u64,
    pub errors: u64,
}

impl SweepSummary {
    fn tally(&mut self, result: &ProbeResult) {
        match result {
            ProbeResult::Up { .. } => self.up += 1,
            ProbeResult::Down(_) => self.down += 1,
            ProbeResult::Error(_) => self.errors += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.up + self.down + self.errors
    }
}

/// Probes every address between `start` and `end`, inclusive.
///
/// The endpoints may be given in either order. Malformed endpoints fail the
/// whole call before anything is probed or reported.
pub async fn sweep<R>(
    start: &str,
    end: &str,
    probe: Arc<dyn AddressProbe>,
    reporter: &mut R,
) -> Result<SweepSummary, SweepError>
where
    R: SweepReporter + ?Sized,
{
    let range = Ipv4Range::from_u32(parse_address(start)?, parse_address(end)?);
    sweep_range(range, probe, reporter).await
}

pub async fn sweep_range<R>(
    range: Ipv4Range,
    probe: Arc<dyn AddressProbe>,
    reporter: &mut R,
) -> Result<SweepSummary, SweepError>
where
    R: SweepReporter + ?Sized,
{
    let first = u32::from(range.start_addr);
    let last = u32::from(range.end_addr);

    reporter.begin(&format_address(first), &format_address(last))?;
    info!(
        "Sweeping {} address{} from {} to {}",
        range.len(),
        if range.len() == 1 { "" } else { "es" },
        range.start_addr,
        range.end_addr
    );

    let started = Instant::now();
    let mut summary = SweepSummary::default();

    for value in first..=last {
        let address = format_address(value);
        let result = probe_once(&probe, &address).await;
        debug!(address = %address, ?result, "probe finished");

        summary.tally(&result);
        reporter.record(&address, &result)?;
    }

    debug!(
        up = summary.up,
        down = summary.down,
        errors = summary.errors,
        "Sweep finished in {:.2}s",
        started.elapsed().as_secs_f64()
    );
    Ok(summary)
}

/// Runs a single check on its own task so a panicking probe only costs the
/// current address. The task is awaited right away; nothing runs in parallel.
async fn probe_once(probe: &Arc<dyn AddressProbe>, address: &str) -> ProbeResult {
    let probe = Arc::clone(probe);
    let target = address.to_string();

    match tokio::spawn(async move { probe.check(&target).await }).await {
        Ok(outcome) => ProbeResult::from(outcome),
        Err(join_err) => {
            let message = if join_err.is_panic() {
                panic_message(join_err.into_panic())
            } else {
                "probe task was cancelled".to_string()
            };
            warn!(address, "probe aborted: {message}");
            ProbeResult::Error(message)
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        return (*msg).to_string();
    }
    if let Some(msg) = payload.downcast_ref::<String>() {
        return msg.clone();
    }
    "probe panicked".to_string()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
