use std::io;
use std::sync::Arc;
use std::time::Instant;

use is_root::is_root;
use sweepr_common::config::Config;
use sweepr_common::network::cidr::cidr_to_range;
use sweepr_core::probe::{IcmpPing, SystemPing};
use sweepr_core::{AddressProbe, LineReporter};
use tracing::{info, warn};

use super::Method;
use crate::terminal::print;

pub async fn sweep_cidr(cidr: &str, method: Method, cfg: &Config) -> anyhow::Result<()> {
    let (start, end) = cidr_to_range(cidr)?;
    info!("{cidr} spans {start} to {end}");
    sweep_between(&start, &end, method, cfg).await
}

pub async fn sweep_between(
    start: &str,
    end: &str,
    method: Method,
    cfg: &Config,
) -> anyhow::Result<()> {
    let probe: Arc<dyn AddressProbe> = build_probe(method, cfg)?;
    let mut reporter = LineReporter::new(io::stdout()).colored(!cfg.no_color);

    let start_time: Instant = Instant::now();
    let summary = sweepr_core::sweep(start, end, probe, &mut reporter).await?;

    print::summary(&summary, start_time.elapsed());
    Ok(())
}

fn build_probe(method: Method, cfg: &Config) -> anyhow::Result<Arc<dyn AddressProbe>> {
    match method {
        Method::System => Ok(Arc::new(SystemPing::from_config(cfg))),
        Method::Icmp => {
            if !is_root() {
                warn!("ICMP sockets usually need root; rerun with sudo or use --method system");
            }
            Ok(Arc::new(IcmpPing::new(cfg.wait)))
        }
    }
}
