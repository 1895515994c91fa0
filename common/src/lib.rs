//! # Sweepr Common
//!
//! Shared building blocks for the sweepr workspace.
//!
//! * **[`network`]**: IPv4 address codec, CIDR decoding and inclusive address ranges.
//! * **[`error`]**: Typed failures raised while decoding user input.
//! * **[`config`]**: Runtime settings assembled from the command line.

pub mod config;
pub mod error;
pub mod network;

pub use error::{AddressFault, CidrFault, CodecError};
