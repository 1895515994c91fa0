//! # IPv4 Range Model
//!
//! An inclusive run of IPv4 addresses. Produced by [`crate::network::cidr::Cidr::range`]
//! or directly from two endpoints, and walked by the sweep in ascending order.

use std::net::Ipv4Addr;

/// Represents a continuous range of IPv4 addresses, inclusive.
///
/// The endpoints are normalized on construction so `start_addr <= end_addr`
/// always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ipv4Range {
    pub start_addr: Ipv4Addr,
    pub end_addr: Ipv4Addr,
}

impl Ipv4Range {
    pub fn new(start_addr: Ipv4Addr, end_addr: Ipv4Addr) -> Self {
        if start_addr > end_addr {
            return Self {
                start_addr: end_addr,
                end_addr: start_addr,
            };
        }
        Self {
            start_addr,
            end_addr,
        }
    }

    pub fn from_u32(start: u32, end: u32) -> Self {
        Self::new(Ipv4Addr::from(start), Ipv4Addr::from(end))
    }

    /// Ascending iterator over every address in the range.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Ipv4Addr> + Clone {
        let start: u32 = u32::from(self.start_addr);
        let end: u32 = u32::from(self.end_addr);
        (start..=end).map(Ipv4Addr::from)
    }

    /// Number of addresses covered. A `/0` block holds 2^32 of them, hence `u64`.
    pub fn len(&self) -> u64 {
        u64::from(u32::from(self.end_addr)) - u64::from(u32::from(self.start_addr)) + 1
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.start_addr <= addr && addr <= self.end_addr
    }
}

impl IntoIterator for Ipv4Range {
    type Item = Ipv4Addr;
    type IntoIter = std::iter::Map<std::ops::RangeInclusive<u32>, fn(u32) -> Ipv4Addr>;

    fn into_iter(self) -> Self::IntoIter {
        let start: u32 = u32::from(self.start_addr);
        let end: u32 = u32::from(self.end_addr);
        (start..=end).map(Ipv4Addr::from as fn(u32) -> Ipv4Addr)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
