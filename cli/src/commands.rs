pub mod calc;
pub mod sweep;

use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use sweepr_common::config::{Config, DEFAULT_DEADLINE, DEFAULT_WAIT};

#[derive(Parser)]
#[command(name = "sweepr", version)]
#[command(about = "Ping every address of an IPv4 CIDR block, one at a time.")]
pub struct CommandLine {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print the report lines
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Probe every address of a CIDR block (e.g. 192.168.1.0/24)
    #[command(alias = "s")]
    Sweep {
        cidr: String,
        #[command(flatten)]
        probe: ProbeArgs,
    },
    /// Probe every address between two endpoints, inclusive
    #[command(alias = "r")]
    Range {
        start: String,
        end: String,
        #[command(flatten)]
        probe: ProbeArgs,
    },
    /// Show the address range of a CIDR block without probing it
    #[command(alias = "c")]
    Calc { cidr: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Method {
    /// Run the system `ping` utility once per address
    System,
    /// Send ICMP echo requests directly (usually needs root)
    Icmp,
}

#[derive(Args)]
pub struct ProbeArgs {
    /// How addresses are probed
    #[arg(short, long, value_enum, default_value_t = Method::System)]
    pub method: Method,

    /// Seconds to wait for an echo reply
    #[arg(short, long, value_parser = parse_secs, default_value = "1")]
    pub wait: Duration,

    /// Hard limit in seconds for a single probe
    #[arg(short, long, value_parser = parse_secs, default_value = "2")]
    pub deadline: Duration,
}

impl ProbeArgs {
    pub fn to_config(&self, no_color: bool) -> anyhow::Result<Config> {
        let cfg = Config {
            wait: self.wait,
            deadline: self.deadline,
            no_color,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

impl Default for ProbeArgs {
    fn default() -> Self {
        Self {
            method: Method::System,
            wait: DEFAULT_WAIT,
            deadline: DEFAULT_DEADLINE,
        }
    }
}

fn parse_secs(s: &str) -> Result<Duration, String> {
    let secs: f64 = s.parse().map_err(|_| format!("'{s}' is not a number of seconds"))?;
    Duration::try_from_secs_f64(secs).map_err(|e| format!("'{s}': {e}"))
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
