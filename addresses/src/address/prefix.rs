// SPDX-License-Identifier: CC0-1.0

//! Per-network address prefixes.
//!
//! | Network | P2PKH  | P2SH, P2SH-P2WPKH | bech32 HRP |
//! |---------|--------|-------------------|------------|
//! | mainnet | `0x00` | `0x05`            | `bc`       |
//! | testnet | `0x6f` | `0xc4`            | `tb`       |
//! | regtest | `0x6f` | `0xc4`            | `bcrt`     |

use core::fmt;

use bech32::primitives::hrp::Hrp;
use network::{Network, ToNetwork, UnknownNetworkError};

use super::AddressType;
use crate::constants::{
    PUBKEY_ADDRESS_PREFIX_MAIN, PUBKEY_ADDRESS_PREFIX_TEST, SCRIPT_ADDRESS_PREFIX_MAIN,
    SCRIPT_ADDRESS_PREFIX_TEST,
};

/// The prefix an address format uses on a given network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressPrefix {
    /// A Base58Check version byte.
    Base58(u8),
    /// A bech32 human-readable part.
    Bech32(Hrp),
}

impl AddressPrefix {
    /// Returns the version byte if this is a Base58Check prefix.
    pub fn version_byte(&self) -> Option<u8> {
        match *self {
            Self::Base58(b) => Some(b),
            Self::Bech32(_) => None,
        }
    }

    /// Returns the human-readable part if this is a bech32 prefix.
    pub fn hrp(&self) -> Option<Hrp> {
        match *self {
            Self::Base58(_) => None,
            Self::Bech32(hrp) => Some(hrp),
        }
    }
}

impl fmt::Display for AddressPrefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Base58(b) => write!(f, "{:#04x}", b),
            Self::Bech32(ref hrp) => fmt::Display::fmt(hrp, f),
        }
    }
}

/// Looks up the prefix of `format` on `network`.
///
/// # Errors
///
/// If `network` is a name other than `mainnet`, `testnet` or `regtest`.
pub fn prefix_for(
    network: impl ToNetwork,
    format: AddressType,
) -> Result<AddressPrefix, UnknownNetworkError> {
    let network = network.to_network()?;
    Ok(match format {
        AddressType::P2pkh => AddressPrefix::Base58(pubkey_address_prefix(network)),
        AddressType::P2sh | AddressType::P2shP2wpkh =>
            AddressPrefix::Base58(script_address_prefix(network)),
        AddressType::P2wpkh | AddressType::P2wsh => AddressPrefix::Bech32(hrp(network)),
    })
}

pub(super) fn pubkey_address_prefix(network: Network) -> u8 {
    match network {
        Network::Mainnet => PUBKEY_ADDRESS_PREFIX_MAIN,
        Network::Testnet | Network::Regtest => PUBKEY_ADDRESS_PREFIX_TEST,
    }
}

pub(super) fn script_address_prefix(network: Network) -> u8 {
    match network {
        Network::Mainnet => SCRIPT_ADDRESS_PREFIX_MAIN,
        Network::Testnet | Network::Regtest => SCRIPT_ADDRESS_PREFIX_TEST,
    }
}

pub(super) fn hrp(network: Network) -> Hrp {
    match network {
        Network::Mainnet => bech32::hrp::BC,
        Network::Testnet => bech32::hrp::TB,
        Network::Regtest => bech32::hrp::BCRT,
    }
}
