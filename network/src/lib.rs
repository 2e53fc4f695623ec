// SPDX-License-Identifier: CC0-1.0

//! Network identifiers for address derivation.
//!
//! Every address is tied to exactly one of the three networks known here. The network is picked
//! per call; there is no global default to fall back on.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(deprecated_in_future)]
#![doc(test(attr(warn(unused))))]
#![allow(clippy::uninlined_format_args)]

extern crate alloc;

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{de::Visitor, Deserialize, Deserializer, Serialize, Serializer};

/// The network to derive addresses for.
#[derive(Copy, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Debug)]
pub enum Network {
    /// The main network.
    Mainnet,
    /// The public test network.
    Testnet,
    /// A local regression-test network.
    Regtest,
}

impl Network {
    /// All supported networks.
    pub const ALL: [Self; 3] = [Self::Mainnet, Self::Testnet, Self::Regtest];

    /// Returns the name this network is parsed from and displayed as.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
            Self::Regtest => "regtest",
        }
    }

    /// Returns true if this is the main network.
    pub fn is_mainnet(self) -> bool { self == Self::Mainnet }
}

#[cfg(feature = "serde")]
impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NetworkVisitor;

        impl Visitor<'_> for NetworkVisitor {
            type Value = Network;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a network name (mainnet, testnet or regtest)")
            }

            fn visit_str<E>(self, value: &str) -> Result<Network, E>
            where
                E: serde::de::Error,
            {
                Network::from_str(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(NetworkVisitor)
    }
}

/// A network name that does not match any supported network.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct UnknownNetworkError(String);

impl UnknownNetworkError {
    /// Returns the name that failed to parse.
    pub fn name(&self) -> &str { &self.0 }
}

impl fmt::Display for UnknownNetworkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "unknown network {:?}, expected mainnet, testnet or regtest", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownNetworkError {}

impl FromStr for Network {
    type Err = UnknownNetworkError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Self::Mainnet),
            "testnet" => Ok(Self::Testnet),
            "regtest" => Ok(Self::Regtest),
            _ => Err(UnknownNetworkError(String::from(s))),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Trait for network selectors: either a [`Network`] or a network name.
///
/// Names are parsed strictly, anything other than `mainnet`, `testnet` or `regtest` is an
/// [`UnknownNetworkError`].
pub trait ToNetwork {
    /// Resolves this selector to exactly one network.
    fn to_network(&self) -> Result<Network, UnknownNetworkError>;
}

impl ToNetwork for Network {
    fn to_network(&self) -> Result<Network, UnknownNetworkError> { Ok(*self) }
}

impl ToNetwork for str {
    fn to_network(&self) -> Result<Network, UnknownNetworkError> { self.parse() }
}

impl ToNetwork for String {
    fn to_network(&self) -> Result<Network, UnknownNetworkError> { self.parse() }
}

impl<T: ToNetwork + ?Sized> ToNetwork for &T {
    fn to_network(&self) -> Result<Network, UnknownNetworkError> { (**self).to_network() }
}
