use thiserror::Error;

/// Failure to decode an address or CIDR block supplied by the user.
///
/// Both variants keep the offending input so that callers can report it
/// verbatim, plus a fault describing which rule was broken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("invalid IPv4 address '{input}': {fault}")]
    InvalidAddressFormat { input: String, fault: AddressFault },

    #[error("invalid CIDR block '{input}': {fault}")]
    InvalidCidrFormat { input: String, fault: CidrFault },
}

impl CodecError {
    pub fn input(&self) -> &str {
        match self {
            CodecError::InvalidAddressFormat { input, .. } => input,
            CodecError::InvalidCidrFormat { input, .. } => input,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressFault {
    #[error("expected 4 octets, found {0}")]
    OctetCount(usize),

    #[error("octet '{0}' is not a decimal number")]
    NonNumeric(String),

    #[error("octet '{0}' is outside 0-255")]
    OutOfRange(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CidrFault {
    #[error("missing '/' between address and prefix length")]
    MissingSlash,

    #[error("expected exactly one '/'")]
    TooManySlashes,

    #[error("prefix length '{0}' is not a decimal number")]
    InvalidPrefix(String),

    #[error("prefix length {0} is outside 0-32")]
    PrefixOutOfRange(String),

    #[error(transparent)]
    Address(#[from] AddressFault),
}
