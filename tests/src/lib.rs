//! End-to-end checks for the CIDR decoder and the sweep, driven by scripted
//! probes instead of the network.

pub mod util;

#[cfg(test)]
mod sweep;
