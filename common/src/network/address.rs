//! # Address Codec
//!
//! Converts between dotted-decimal IPv4 text and its `u32` encoding, where
//! bits 31..24 hold the first octet.

use std::net::Ipv4Addr;

use crate::error::{AddressFault, CodecError};

const OCTETS: usize = 4;

/// Parses `a.b.c.d` into its 32-bit encoding.
///
/// Every component must be a non-empty run of ASCII digits whose value fits
/// in an octet. Leading zeros are accepted (`010` is `10`).
pub fn parse_address(text: &str) -> Result<u32, CodecError> {
    parse_octets(text).map_err(|fault| CodecError::InvalidAddressFormat {
        input: text.to_string(),
        fault,
    })
}

/// Renders a 32-bit encoding as canonical dotted-decimal text.
pub fn format_address(value: u32) -> String {
    format!(
        "{}.{}.{}.{}",
        (value >> 24) & 255,
        (value >> 16) & 255,
        (value >> 8) & 255,
        value & 255
    )
}

/// Same as [`parse_address`] but yields a std address.
pub fn parse_ipv4(text: &str) -> Result<Ipv4Addr, CodecError> {
    parse_address(text).map(Ipv4Addr::from)
}

/// Core of [`parse_address`], reporting only the fault so callers embedding
/// an address (e.g. a CIDR block) can wrap it in their own error.
pub(crate) fn parse_octets(text: &str) -> Result<u32, AddressFault> {
    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() != OCTETS {
        return Err(AddressFault::OctetCount(parts.len()));
    }

    let mut value: u32 = 0;
    for part in parts {
        value = (value << 8) | u32::from(parse_octet(part)?);
    }
    Ok(value)
}

fn parse_octet(part: &str) -> Result<u8, AddressFault> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AddressFault::NonNumeric(part.to_string()));
    }

    // All digits at this point, so any parse failure is an overflow.
    part.parse::<u8>().map_err(|_| AddressFault::OutOfRange(part.to_string()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
