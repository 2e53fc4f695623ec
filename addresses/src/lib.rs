// SPDX-License-Identifier: CC0-1.0

//! Bitcoin Addresses
//!
//! Derives P2PKH, P2SH, P2WPKH, P2WSH and P2SH-P2WPKH address strings from public keys and
//! scripts, for mainnet, testnet and regtest. Addresses are only produced here, never parsed.
//!
//! ```
//! use addrkit_addresses::{Address, Network};
//!
//! let pk = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
//! let pk: addrkit_addresses::keys::CompressedPublicKey = pk.parse().unwrap();
//!
//! let addr = Address::p2wpkh(pk, Network::Mainnet).unwrap();
//! assert_eq!(addr.to_string(), "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4");
//!
//! // Networks can also be given by name.
//! let addr = Address::p2pkh(pk, "testnet").unwrap();
//! assert_eq!(addr.to_string(), "mrCDrCybB6J1vRfbwM5hemdJz73FwDBC8r");
//! ```
//!
//! This crate can be used in a no-std environment but requires an allocator.

// NB: This crate is empty if `alloc` is not enabled.
#![cfg(feature = "alloc")]
#![no_std]
// Experimental features we need.
#![doc(test(attr(warn(unused))))]
// Coding conventions.
#![warn(deprecated_in_future)]
#![warn(missing_docs)]
// Exclude lints we don't think are valuable.
#![allow(clippy::needless_question_mark)] // https://github.com/rust-bitcoin/rust-bitcoin/pull/2134
#![allow(clippy::manual_range_contains)] // More readable than clippy's format.
#![allow(clippy::uninlined_format_args)] // Allow `format!("{}", x)` instead of enforcing `format!("{x}")`

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Address-related constants.
pub mod constants {
    /// Legacy Base58 address version byte for mainnet P2PKH (0x00).
    pub const PUBKEY_ADDRESS_PREFIX_MAIN: u8 = 0;
    /// Legacy Base58 address version byte for mainnet P2SH (0x05).
    pub const SCRIPT_ADDRESS_PREFIX_MAIN: u8 = 5;
    /// Legacy Base58 address version byte for testnet and regtest P2PKH (0x6f).
    pub const PUBKEY_ADDRESS_PREFIX_TEST: u8 = 111;
    /// Legacy Base58 address version byte for testnet and regtest P2SH (0xc4).
    pub const SCRIPT_ADDRESS_PREFIX_TEST: u8 = 196;
}

pub mod address;
pub mod base58ck;

#[rustfmt::skip]
pub use {
	keys,
	network,
	primitives,
};

#[doc(inline)]
pub use address::error::*;
#[doc(inline)]
pub use address::{prefix_for, Address, AddressPrefix, AddressType, ToCompressedPublicKey};
#[doc(inline)]
pub use network::{Network, ToNetwork, UnknownNetworkError};
