//! # Network Models
//!
//! * [`address`]: dotted-decimal text <-> `u32` conversion.
//! * [`cidr::Cidr`]: an `address/prefix` block and the range it spans.
//! * [`range::Ipv4Range`]: an inclusive, ascending run of IPv4 addresses.

pub mod address;
pub mod cidr;
pub mod range;
