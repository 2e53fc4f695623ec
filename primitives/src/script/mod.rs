// SPDX-License-Identifier: CC0-1.0

//! Scripts and script hashes.
//!
//! Redeem scripts and witness scripts are opaque byte strings supplied by the caller. They are
//! only ever hashed, never interpreted.

pub mod witness_program;
pub mod witness_version;

use alloc::vec::Vec;
use core::fmt;

use hashes::{hash160, sha256};
use hex::DisplayHex;

use self::witness_program::WitnessProgram;
use self::witness_version::{WitnessVersion, WitnessVersionError};

/// The opcodes needed to build and read witness program scripts.
pub mod opcodes {
    /// Push an empty array; the version opcode of segwit v0.
    pub const OP_0: u8 = 0x00;
    /// Push the next 20 bytes.
    pub const OP_PUSHBYTES_20: u8 = 0x14;
    /// Push the next 32 bytes.
    pub const OP_PUSHBYTES_32: u8 = 0x20;
    /// Push the number 1.
    pub const OP_PUSHNUM_1: u8 = 0x51;
    /// Push the number 16.
    pub const OP_PUSHNUM_16: u8 = 0x60;
}

/// An owned script.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScriptBuf(Vec<u8>);

impl ScriptBuf {
    /// Constructs a new empty script.
    pub const fn new() -> Self { Self(Vec::new()) }

    /// Wraps raw script bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self { Self(bytes) }

    /// Builds the witness program script `OP_n <push> program`.
    ///
    /// For a P2WPKH program this is `0x00 0x14 <20-byte key hash>`, the redeem script nested
    /// inside a P2SH-P2WPKH address.
    pub fn new_witness_program(program: &WitnessProgram) -> Self {
        let data = program.program();
        let mut bytes = Vec::with_capacity(2 + data.len());
        bytes.push(program.version().to_opcode());
        // Programs are at most 40 bytes so the length byte is a direct push opcode.
        bytes.push(data.len() as u8);
        bytes.extend_from_slice(data);
        Self(bytes)
    }

    /// Returns the script bytes.
    pub fn as_bytes(&self) -> &[u8] { &self.0 }

    /// Returns the script bytes, consuming the script.
    pub fn into_bytes(self) -> Vec<u8> { self.0 }

    /// Returns the length in bytes.
    pub fn len(&self) -> usize { self.0.len() }

    /// Returns true if the script has no bytes.
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Reads the witness version from the first byte of the script.
    pub fn witness_version(&self) -> Result<WitnessVersion, WitnessVersionError> {
        match self.0.first() {
            Some(&opcode) => WitnessVersion::from_opcode(opcode),
            None => Err(WitnessVersionError::EmptyScript),
        }
    }

    /// Parses the script as `OP_n <push> program`, if it is one.
    pub fn witness_program(&self) -> Option<WitnessProgram> {
        let version = self.witness_version().ok()?;
        let (&push, data) = self.0.get(1..)?.split_first()?;
        if usize::from(push) != data.len() {
            return None;
        }
        WitnessProgram::new(version, data).ok()
    }

    /// Returns HASH160 of the script.
    pub fn script_hash(&self) -> ScriptHash { ScriptHash::hash(&self.0) }

    /// Returns SHA256 of the script.
    pub fn wscript_hash(&self) -> WScriptHash { WScriptHash::hash(&self.0) }
}

impl From<Vec<u8>> for ScriptBuf {
    fn from(bytes: Vec<u8>) -> Self { Self(bytes) }
}

impl AsRef<[u8]> for ScriptBuf {
    fn as_ref(&self) -> &[u8] { &self.0 }
}

impl fmt::Debug for ScriptBuf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ScriptBuf({})", self.0.as_hex())
    }
}

/// HASH160 of a redeem script, the payload of a P2SH address.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct ScriptHash(hash160::Hash);

impl ScriptHash {
    /// Hashes `script` with HASH160.
    pub fn hash(script: &[u8]) -> Self { Self(hash160::Hash::hash(script)) }

    /// Constructs a hash from its bytes.
    pub fn from_byte_array(bytes: [u8; 20]) -> Self { Self(hash160::Hash::from_byte_array(bytes)) }

    /// Returns inner bytes.
    pub fn to_byte_array(self) -> [u8; 20] { self.0.to_byte_array() }

    /// Returns reference to inner bytes.
    pub fn as_byte_array(&self) -> &[u8; 20] { self.0.as_byte_array() }
}

impl AsRef<[u8]> for ScriptHash {
    fn as_ref(&self) -> &[u8] { self.0.as_byte_array() }
}

/// Single SHA256 of a witness script, the program of a P2WSH address.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct WScriptHash(sha256::Hash);

impl WScriptHash {
    /// Hashes `script` with a single round of SHA256.
    pub fn hash(script: &[u8]) -> Self { Self(sha256::Hash::hash(script)) }

    /// Constructs a hash from its bytes.
    pub fn from_byte_array(bytes: [u8; 32]) -> Self { Self(sha256::Hash::from_byte_array(bytes)) }

    /// Returns inner bytes.
    pub fn to_byte_array(self) -> [u8; 32] { self.0.to_byte_array() }

    /// Returns reference to inner bytes.
    pub fn as_byte_array(&self) -> &[u8; 32] { self.0.as_byte_array() }
}

impl AsRef<[u8]> for WScriptHash {
    fn as_ref(&self) -> &[u8] { self.0.as_byte_array() }
}
