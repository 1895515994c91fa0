//! In-process ICMP echo using `surge-ping`.
//!
//! Needs a raw or datagram ICMP socket, so it usually requires elevated
//! privileges (or `net.ipv4.ping_group_range` on Linux). Socket errors are
//! reported per address as [`ProbeError::Failed`].

use std::io;
use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use surge_ping::{Client, Config as PingConfig, PingIdentifier, PingSequence, SurgeError};
use sweepr_common::network::address::parse_ipv4;
use tracing::{debug, warn};

use super::{AddressProbe, Latency, ProbeError, Reply};

const PAYLOAD: [u8; 8] = *b"sweepr\0\0";

pub struct IcmpPing {
    client: Result<Client, String>,
    wait: Duration,
}

impl IcmpPing {
    /// Opens the ICMP socket. Must be called from within a tokio runtime.
    ///
    /// A socket that cannot be opened does not fail here; every `check`
    /// reports the error for its own address instead.
    pub fn new(wait: Duration) -> Self {
        Self::from_client(Client::new(&PingConfig::default()), wait)
    }

    pub fn from_client(client: io::Result<Client>, wait: Duration) -> Self {
        let client = client.map_err(|e| {
            warn!("cannot open ICMP socket: {e}");
            format!("cannot open ICMP socket: {e}")
        });
        Self { client, wait }
    }
}

#[async_trait]
impl AddressProbe for IcmpPing {
    async fn check(&self, address: &str) -> Result<Reply, ProbeError> {
        let client = self
            .client
            .as_ref()
            .map_err(|message| ProbeError::Failed(message.clone()))?;

        let target: IpAddr = parse_ipv4(address)
            .map_err(|e| ProbeError::Failed(e.to_string()))?
            .into();

        let mut pinger = client.pinger(target, PingIdentifier(rand::random())).await;
        pinger.timeout(self.wait);

        match pinger.ping(PingSequence(0), &PAYLOAD).await {
            Ok((_packet, rtt)) => Ok(Reply::with_latency(Latency::from_duration(rtt))),
            Err(SurgeError::Timeout { .. }) => Err(ProbeError::Timeout),
            Err(e) => {
                debug!(address, "icmp echo failed: {e}");
                Err(ProbeError::Failed(e.to_string()))
            }
        }
    }
}
