//! # CIDR Blocks
//!
//! Decodes `address/prefix` notation into the inclusive range between the
//! network and broadcast addresses.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use tracing::trace;

use crate::error::{CidrFault, CodecError};
use crate::network::address::{self, format_address};
use crate::network::range::Ipv4Range;

pub const MAX_PREFIX: u8 = 32;

/// A base address paired with a prefix length in `0..=32`.
///
/// The base does not need to be the network address; `192.168.1.10/24`
/// is accepted and spans `192.168.1.0 - 192.168.1.255`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cidr {
    base: u32,
    prefix: u8,
}

impl Cidr {
    pub fn new(base: Ipv4Addr, prefix: u8) -> Result<Self, CodecError> {
        if prefix > MAX_PREFIX {
            return Err(CodecError::InvalidCidrFormat {
                input: format!("{base}/{prefix}"),
                fault: CidrFault::PrefixOutOfRange(prefix.to_string()),
            });
        }
        Ok(Self {
            base: u32::from(base),
            prefix,
        })
    }

    pub fn base(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.base)
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Top `prefix` bits set. A shift by 32 overflows a `u32`, so `/0` is
    /// handled explicitly.
    pub fn mask(&self) -> u32 {
        if self.prefix == 0 {
            0
        } else {
            u32::MAX << (MAX_PREFIX - self.prefix)
        }
    }

    pub fn network(&self) -> u32 {
        self.base & self.mask()
    }

    pub fn broadcast(&self) -> u32 {
        self.network() | !self.mask()
    }

    pub fn range(&self) -> Ipv4Range {
        Ipv4Range::from_u32(self.network(), self.broadcast())
    }
}

impl FromStr for Cidr {
    type Err = CodecError;

    /// Parses `A.B.C.D/N`. Exactly one `/` is allowed and `N` must be a
    /// plain decimal number in `0..=32`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = |fault: CidrFault| CodecError::InvalidCidrFormat {
            input: s.to_string(),
            fault,
        };

        let Some((addr_str, prefix_str)) = s.split_once('/') else {
            return Err(fail(CidrFault::MissingSlash));
        };
        if prefix_str.contains('/') {
            return Err(fail(CidrFault::TooManySlashes));
        }

        let prefix = parse_prefix(prefix_str).map_err(fail)?;
        let base = address::parse_octets(addr_str).map_err(|e| fail(e.into()))?;

        let cidr = Cidr { base, prefix };
        trace!(%cidr, network = cidr.network(), broadcast = cidr.broadcast(), "decoded CIDR block");
        Ok(cidr)
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", format_address(self.base), self.prefix)
    }
}

fn parse_prefix(s: &str) -> Result<u8, CidrFault> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CidrFault::InvalidPrefix(s.to_string()));
    }
    match s.parse::<u8>() {
        Ok(prefix) if prefix <= MAX_PREFIX => Ok(prefix),
        _ => Err(CidrFault::PrefixOutOfRange(s.to_string())),
    }
}

/// Returns the network and broadcast addresses of a CIDR block as text.
///
/// ```
/// use sweepr_common::network::cidr::cidr_to_range;
///
/// let (start, end) = cidr_to_range("192.168.1.10/24").unwrap();
/// assert_eq!(start, "192.168.1.0");
/// assert_eq!(end, "192.168.1.255");
/// ```
pub fn cidr_to_range(text: &str) -> Result<(String, String), CodecError> {
    let cidr: Cidr = text.parse()?;
    Ok((format_address(cidr.network()), format_address(cidr.broadcast())))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
