use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use sweepr_core::{AddressProbe, Latency, ProbeError, Reply};

/// Probe double answering from a fixed script. Addresses without an entry
/// are unreachable. Every call is recorded in order.
pub struct ScriptedProbe {
    script: HashMap<String, Result<Reply, ProbeError>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedProbe {
    pub fn new() -> Self {
        Self {
            script: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn up(mut self, address: &str, latency: &str) -> Self {
        let reply = Reply::with_latency(Latency::parse(latency).expect("scripted latency"));
        self.script.insert(address.to_string(), Ok(reply));
        self
    }

    pub fn silent_up(mut self, address: &str) -> Self {
        self.script.insert(address.to_string(), Ok(Reply::default()));
        self
    }

    pub fn fail(mut self, address: &str, error: ProbeError) -> Self {
        self.script.insert(address.to_string(), Err(error));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl Default for ScriptedProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AddressProbe for ScriptedProbe {
    async fn check(&self, address: &str) -> Result<Reply, ProbeError> {
        self.calls.lock().expect("calls lock").push(address.to_string());
        self.script
            .get(address)
            .cloned()
            .unwrap_or(Err(ProbeError::Unreachable))
    }
}
