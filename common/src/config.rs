use std::time::Duration;

use thiserror::Error;

/// Default reply wait handed to the reachability mechanism.
pub const DEFAULT_WAIT: Duration = Duration::from_secs(1);
/// Default hard bound on a single probe, including process start-up.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(2);

pub struct Config {
    /// How long the probe waits for an echo reply.
    pub wait: Duration,
    /// Hard upper bound on one probe. A probe still running after this is
    /// reported as a timeout.
    pub deadline: Duration,
    /// Disables ANSI colors in the report.
    pub no_color: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("probe wait must be greater than zero")]
    ZeroWait,

    #[error("probe deadline ({deadline:?}) is shorter than the reply wait ({wait:?})")]
    DeadlineBeforeWait { wait: Duration, deadline: Duration },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wait: DEFAULT_WAIT,
            deadline: DEFAULT_DEADLINE,
            no_color: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wait.is_zero() {
            return Err(ConfigError::ZeroWait);
        }
        if self.deadline < self.wait {
            return Err(ConfigError::DeadlineBeforeWait {
                wait: self.wait,
                deadline: self.deadline,
            });
        }
        Ok(())
    }
}
