// SPDX-License-Identifier: CC0-1.0

//! Error types for address construction.

use alloc::string::String;
use core::fmt;

use keys::MalformedKeyError;
use network::UnknownNetworkError;
use primitives::script::witness_program::Error as WitnessProgramError;
use primitives::script::witness_version::WitnessVersionError;

/// Error building an address.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The public key is not a valid compressed key.
    MalformedKey(MalformedKeyError),
    /// The network selector does not name a supported network.
    UnknownNetwork(UnknownNetworkError),
    /// The payload can not be encoded as an address.
    Encoding(EncodingError),
}

impl From<MalformedKeyError> for Error {
    fn from(e: MalformedKeyError) -> Self { Self::MalformedKey(e) }
}

impl From<UnknownNetworkError> for Error {
    fn from(e: UnknownNetworkError) -> Self { Self::UnknownNetwork(e) }
}

impl From<EncodingError> for Error {
    fn from(e: EncodingError) -> Self { Self::Encoding(e) }
}

impl From<WitnessVersionError> for Error {
    fn from(e: WitnessVersionError) -> Self { Self::Encoding(e.into()) }
}

impl From<WitnessProgramError> for Error {
    fn from(e: WitnessProgramError) -> Self { Self::Encoding(e.into()) }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::MalformedKey(ref e) => write!(f, "malformed public key: {}", e),
            Self::UnknownNetwork(ref e) => fmt::Display::fmt(e, f),
            Self::Encoding(ref e) => write!(f, "address encoding failed: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Self::MalformedKey(ref e) => Some(e),
            Self::UnknownNetwork(ref e) => Some(e),
            Self::Encoding(ref e) => Some(e),
        }
    }
}

/// The encoder rejected a witness version or program.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncodingError {
    /// The witness version could not be derived.
    WitnessVersion(WitnessVersionError),
    /// The witness program has an invalid length.
    WitnessProgram(WitnessProgramError),
}

impl From<WitnessVersionError> for EncodingError {
    fn from(e: WitnessVersionError) -> Self { Self::WitnessVersion(e) }
}

impl From<WitnessProgramError> for EncodingError {
    fn from(e: WitnessProgramError) -> Self { Self::WitnessProgram(e) }
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::WitnessVersion(ref e) => fmt::Display::fmt(e, f),
            Self::WitnessProgram(ref e) => fmt::Display::fmt(e, f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Self::WitnessVersion(ref e) => Some(e),
            Self::WitnessProgram(ref e) => Some(e),
        }
    }
}

/// Address type is either invalid or not supported.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct UnknownAddressTypeError(pub String);

impl fmt::Display for UnknownAddressTypeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "failed to parse {} as address type", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownAddressTypeError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use primitives::WitnessVersion;

    use super::*;

    #[test]
    fn conversions_pick_the_variant() {
        let e = Error::from(MalformedKeyError::InvalidPrefix(0x04));
        assert!(matches!(e, Error::MalformedKey(_)));

        let e = Error::from("signet".parse::<network::Network>().unwrap_err());
        assert!(e.to_string().contains("signet"));

        let e = Error::from(WitnessVersionError::EmptyScript);
        assert_eq!(
            e,
            Error::Encoding(EncodingError::WitnessVersion(WitnessVersionError::EmptyScript))
        );

        let bad = primitives::WitnessProgram::new(WitnessVersion::V0, &[0; 21]).unwrap_err();
        let e = Error::from(bad);
        assert!(matches!(e, Error::Encoding(EncodingError::WitnessProgram(_))));
    }
}
