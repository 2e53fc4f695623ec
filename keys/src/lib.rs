// SPDX-License-Identifier: CC0-1.0

//! Public keys for address derivation.
//!
//! An [`UncompressedPublicKey`] holds both affine coordinates of a secp256k1 point, as handed out
//! by a key provider. Addresses are always derived from the 33-byte [`CompressedPublicKey`], which
//! keeps the x-coordinate and a single byte recording the parity of y.

#![cfg_attr(not(feature = "std"), no_std)]
#![doc(test(attr(warn(unused))))]
#![warn(deprecated_in_future)]
#![warn(missing_docs)]
#![allow(clippy::uninlined_format_args)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use core::fmt;
#[cfg(feature = "alloc")]
use core::str::FromStr;

use hashes::hash160;
use hex::DisplayHex;
#[cfg(feature = "alloc")]
use hex::{FromHex, HexToBytesError};
pub use secp256k1::{self, PublicKey as SecpPublicKey, Secp256k1, SecretKey, Signing};

/// Byte size of a coordinate.
pub const COORDINATE_SIZE: usize = 32;

/// Byte size of an uncompressed public key (x-coordinate followed by y-coordinate).
pub const UNCOMPRESSED_PUBLIC_KEY_SIZE: usize = 2 * COORDINATE_SIZE;

/// Byte size of a compressed public key.
pub const COMPRESSED_PUBLIC_KEY_SIZE: usize = 1 + COORDINATE_SIZE;

/// Compressed key prefix for a point with even y.
pub const EVEN_Y_PREFIX: u8 = 0x02;

/// Compressed key prefix for a point with odd y.
pub const ODD_Y_PREFIX: u8 = 0x03;

/// Compresses a raw 64-byte public key (`x || y`).
///
/// No curve membership check is done, the caller is expected to hand over a point produced by a
/// secp256k1 implementation.
///
/// # Errors
///
/// If `pubkey` is not exactly 64 bytes long.
pub fn compress(pubkey: &[u8]) -> Result<CompressedPublicKey, MalformedKeyError> {
    UncompressedPublicKey::from_slice(pubkey).map(|pk| pk.compress())
}

/// A public key given as both of its coordinates.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UncompressedPublicKey([u8; UNCOMPRESSED_PUBLIC_KEY_SIZE]);

impl UncompressedPublicKey {
    /// Constructs a key from the concatenated coordinates.
    pub const fn from_byte_array(bytes: [u8; UNCOMPRESSED_PUBLIC_KEY_SIZE]) -> Self { Self(bytes) }

    /// Constructs a key from a slice that must be exactly 64 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, MalformedKeyError> {
        let bytes = <[u8; UNCOMPRESSED_PUBLIC_KEY_SIZE]>::try_from(bytes).map_err(|_| {
            MalformedKeyError::InvalidLength {
                expected: UNCOMPRESSED_PUBLIC_KEY_SIZE,
                got: bytes.len(),
            }
        })?;
        Ok(Self(bytes))
    }

    /// Derives the public key of `sk`.
    pub fn from_secret_key<C: Signing>(secp: &Secp256k1<C>, sk: &SecretKey) -> Self {
        Self::from(SecpPublicKey::from_secret_key(secp, sk))
    }

    /// Derives the public key of a 32-byte big-endian secret key.
    ///
    /// # Errors
    ///
    /// If `secret` is not 32 bytes long or is not a valid secp256k1 scalar.
    pub fn from_secret_bytes<C: Signing>(
        secp: &Secp256k1<C>,
        secret: &[u8],
    ) -> Result<Self, secp256k1::Error> {
        let sk = SecretKey::from_slice(secret)?;
        Ok(Self::from_secret_key(secp, &sk))
    }

    /// Returns the x-coordinate.
    pub fn x(&self) -> &[u8; COORDINATE_SIZE] {
        self.0[..COORDINATE_SIZE].try_into().expect("first half of a 64 byte array")
    }

    /// Returns the y-coordinate.
    pub fn y(&self) -> &[u8; COORDINATE_SIZE] {
        self.0[COORDINATE_SIZE..].try_into().expect("second half of a 64 byte array")
    }

    /// Returns true if the y-coordinate, read as a big-endian integer, is even.
    pub fn has_even_y(&self) -> bool { self.y()[COORDINATE_SIZE - 1] & 1 == 0 }

    /// Returns the concatenated coordinates.
    pub fn to_byte_array(self) -> [u8; UNCOMPRESSED_PUBLIC_KEY_SIZE] { self.0 }

    /// Returns a reference to the concatenated coordinates.
    pub fn as_byte_array(&self) -> &[u8; UNCOMPRESSED_PUBLIC_KEY_SIZE] { &self.0 }

    /// Compresses this key to its 33-byte form.
    pub fn compress(&self) -> CompressedPublicKey {
        let mut bytes = [0; COMPRESSED_PUBLIC_KEY_SIZE];
        bytes[0] = if self.has_even_y() { EVEN_Y_PREFIX } else { ODD_Y_PREFIX };
        bytes[1..].copy_from_slice(self.x());
        CompressedPublicKey(bytes)
    }
}

impl From<SecpPublicKey> for UncompressedPublicKey {
    fn from(pk: SecpPublicKey) -> Self {
        // Drop the 0x04 SEC1 tag.
        let serialized = pk.serialize_uncompressed();
        let mut bytes = [0; UNCOMPRESSED_PUBLIC_KEY_SIZE];
        bytes.copy_from_slice(&serialized[1..]);
        Self(bytes)
    }
}

impl fmt::Debug for UncompressedPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "UncompressedPublicKey({})", self.0.as_hex())
    }
}

/// A public key in compressed form: a parity prefix followed by the x-coordinate.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompressedPublicKey([u8; COMPRESSED_PUBLIC_KEY_SIZE]);

impl CompressedPublicKey {
    /// Constructs a key from a slice that must be exactly 33 bytes long and start with `0x02` or
    /// `0x03`.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, MalformedKeyError> {
        let bytes = <[u8; COMPRESSED_PUBLIC_KEY_SIZE]>::try_from(bytes).map_err(|_| {
            MalformedKeyError::InvalidLength { expected: COMPRESSED_PUBLIC_KEY_SIZE, got: bytes.len() }
        })?;
        Self::try_from(bytes)
    }

    /// Derives the compressed public key of a 32-byte big-endian secret key.
    pub fn from_secret_bytes<C: Signing>(
        secp: &Secp256k1<C>,
        secret: &[u8],
    ) -> Result<Self, secp256k1::Error> {
        UncompressedPublicKey::from_secret_bytes(secp, secret).map(|pk| pk.compress())
    }

    /// Returns the serialized key.
    pub fn to_bytes(self) -> [u8; COMPRESSED_PUBLIC_KEY_SIZE] { self.0 }

    /// Returns a reference to the serialized key.
    pub fn as_bytes(&self) -> &[u8; COMPRESSED_PUBLIC_KEY_SIZE] { &self.0 }

    /// Returns the x-coordinate.
    pub fn x(&self) -> &[u8; COORDINATE_SIZE] {
        self.0[1..].try_into().expect("33 byte array minus the prefix")
    }

    /// Returns HASH160 of the serialized key.
    pub fn pubkey_hash(&self) -> PubkeyHash { PubkeyHash(hash160::Hash::hash(&self.0)) }

    /// Returns HASH160 of the serialized key, as used for segwit v0 programs.
    pub fn wpubkey_hash(&self) -> WPubkeyHash { WPubkeyHash(hash160::Hash::hash(&self.0)) }
}

impl TryFrom<[u8; COMPRESSED_PUBLIC_KEY_SIZE]> for CompressedPublicKey {
    type Error = MalformedKeyError;

    fn try_from(bytes: [u8; COMPRESSED_PUBLIC_KEY_SIZE]) -> Result<Self, Self::Error> {
        match bytes[0] {
            EVEN_Y_PREFIX | ODD_Y_PREFIX => Ok(Self(bytes)),
            invalid => Err(MalformedKeyError::InvalidPrefix(invalid)),
        }
    }
}

impl From<SecpPublicKey> for CompressedPublicKey {
    fn from(pk: SecpPublicKey) -> Self { Self(pk.serialize()) }
}

impl From<UncompressedPublicKey> for CompressedPublicKey {
    fn from(pk: UncompressedPublicKey) -> Self { pk.compress() }
}

impl AsRef<[u8]> for CompressedPublicKey {
    fn as_ref(&self) -> &[u8] { &self.0 }
}

impl fmt::LowerHex for CompressedPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::LowerHex::fmt(&self.0.as_hex(), f) }
}

impl fmt::Display for CompressedPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::LowerHex::fmt(self, f) }
}

impl fmt::Debug for CompressedPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CompressedPublicKey({:x})", self)
    }
}

#[cfg(feature = "alloc")]
impl FromStr for CompressedPublicKey {
    type Err = ParsePublicKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = Vec::<u8>::from_hex(s).map_err(ParsePublicKeyError::Hex)?;
        Ok(Self::from_slice(&bytes)?)
    }
}

/// 20-byte pubkey hash (HASH160).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct PubkeyHash(hash160::Hash);

impl PubkeyHash {
    /// Returns inner bytes.
    pub fn to_byte_array(self) -> [u8; 20] { self.0.to_byte_array() }
    /// Returns reference to inner bytes.
    pub fn as_byte_array(&self) -> &[u8; 20] { self.0.as_byte_array() }
}

impl From<hash160::Hash> for PubkeyHash {
    fn from(h: hash160::Hash) -> Self { Self(h) }
}

impl From<[u8; 20]> for PubkeyHash {
    fn from(bytes: [u8; 20]) -> Self { Self(hash160::Hash::from_byte_array(bytes)) }
}

impl AsRef<[u8; 20]> for PubkeyHash {
    fn as_ref(&self) -> &[u8; 20] { self.0.as_byte_array() }
}

/// 20-byte witness pubkey hash, HASH160 of a compressed key.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct WPubkeyHash(hash160::Hash);

impl WPubkeyHash {
    /// Returns inner bytes.
    pub fn to_byte_array(self) -> [u8; 20] { self.0.to_byte_array() }
    /// Returns reference to inner bytes.
    pub fn as_byte_array(&self) -> &[u8; 20] { self.0.as_byte_array() }
}

impl From<hash160::Hash> for WPubkeyHash {
    fn from(h: hash160::Hash) -> Self { Self(h) }
}

impl AsRef<[u8; 20]> for WPubkeyHash {
    fn as_ref(&self) -> &[u8; 20] { self.0.as_byte_array() }
}

/// A public key that does not have the expected shape.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MalformedKeyError {
    /// The key does not have the required number of bytes.
    InvalidLength {
        /// The required length.
        expected: usize,
        /// The length that was provided.
        got: usize,
    },
    /// A compressed key does not start with `0x02` or `0x03`.
    InvalidPrefix(u8),
}

impl fmt::Display for MalformedKeyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::InvalidLength { expected, got } =>
                write!(f, "public key must be {} bytes: length={}", expected, got),
            Self::InvalidPrefix(b) =>
                write!(f, "compressed public key prefix must be 0x02 or 0x03: prefix={:#04x}", b),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MalformedKeyError {}

/// Error parsing a compressed public key from hex.
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParsePublicKeyError {
    /// The string is not valid hex.
    Hex(HexToBytesError),
    /// The decoded bytes are not a compressed key.
    Malformed(MalformedKeyError),
}

#[cfg(feature = "alloc")]
impl From<MalformedKeyError> for ParsePublicKeyError {
    fn from(e: MalformedKeyError) -> Self { Self::Malformed(e) }
}

#[cfg(feature = "alloc")]
impl fmt::Display for ParsePublicKeyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Hex(ref e) => write!(f, "invalid hex: {}", e),
            Self::Malformed(ref e) => fmt::Display::fmt(e, f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParsePublicKeyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Self::Hex(ref e) => Some(e),
            Self::Malformed(ref e) => Some(e),
        }
    }
}
