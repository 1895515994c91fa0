//! Reachability through the operating system's `ping` utility.
//!
//! One echo request per call, run as a child process under a hard deadline.
//! The child is killed if the deadline passes first.

use std::process::Stdio;
use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use sweepr_common::config::Config;
use tokio::process::Command;
use tracing::{debug, trace};

use super::{AddressProbe, Latency, ProbeError, Reply};

static LATENCY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"time=([\d.]+)\s*ms").expect("latency pattern is valid"));

pub struct SystemPing {
    program: String,
    wait: Duration,
    deadline: Duration,
}

impl SystemPing {
    pub fn new(wait: Duration, deadline: Duration) -> Self {
        Self {
            program: "ping".to_string(),
            wait,
            deadline,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.wait, cfg.deadline)
    }

    /// Uses another executable that accepts `ping`'s arguments.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn command(&self, address: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(ping_args(self.wait, address))
            .stdin(Stdio::null())
            .kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl AddressProbe for SystemPing {
    async fn check(&self, address: &str) -> Result<Reply, ProbeError> {
        let mut cmd = self.command(address);

        let output = match tokio::time::timeout(self.deadline, cmd.output()).await {
            Err(_) => {
                debug!(address, deadline = ?self.deadline, "ping did not finish in time");
                return Err(ProbeError::Timeout);
            }
            Ok(Err(e)) => {
                debug!(address, program = %self.program, "failed to run ping: {e}");
                return Err(ProbeError::Failed(e.to_string()));
            }
            Ok(Ok(output)) => output,
        };

        trace!(address, status = ?output.status, "ping exited");
        if !output.status.success() {
            return Err(ProbeError::Unreachable);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(Reply {
            latency: parse_latency(&stdout),
        })
    }
}

/// Pulls the round-trip time out of `ping`'s `time=<ms> ms` reply line.
pub fn parse_latency(output: &str) -> Option<Latency> {
    LATENCY_PATTERN
        .captures(output)
        .and_then(|caps| caps.get(1))
        .and_then(|m| Latency::parse(m.as_str()))
}

#[cfg(target_os = "windows")]
fn ping_args(wait: Duration, address: &str) -> Vec<String> {
    vec![
        "-n".into(),
        "1".into(),
        "-w".into(),
        wait.as_millis().to_string(),
        address.into(),
    ]
}

// BSD ping takes the reply wait in milliseconds.
#[cfg(target_os = "macos")]
fn ping_args(wait: Duration, address: &str) -> Vec<String> {
    vec![
        "-c".into(),
        "1".into(),
        "-W".into(),
        wait.as_millis().to_string(),
        address.into(),
    ]
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn ping_args(wait: Duration, address: &str) -> Vec<String> {
    vec![
        "-c".into(),
        "1".into(),
        "-W".into(),
        wait.as_secs_f64().to_string(),
        address.into(),
    ]
}
