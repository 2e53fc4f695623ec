// SPDX-License-Identifier: CC0-1.0

//! The segregated witness version byte as defined by BIP-0141.
//!
//! In a witness program script the version is the first opcode: `OP_0` for version 0, or
//! `OP_PUSHNUM_1` to `OP_PUSHNUM_16` for versions 1 to 16.

use core::fmt;

use super::opcodes::{OP_0, OP_PUSHNUM_1, OP_PUSHNUM_16};

/// Distance between a `OP_PUSHNUM_n` opcode and the number it pushes.
const PUSHNUM_OFFSET: u8 = OP_PUSHNUM_1 - 1;

/// Version of the segregated witness program.
///
/// Using a plain `u8` would allow versions above 16, which do not exist.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum WitnessVersion {
    /// Initial version of witness program. Used for P2WPKH and P2WSH outputs.
    V0 = 0,
    /// Version of witness program used for Taproot P2TR outputs.
    V1 = 1,
    /// Future (unsupported) version of witness program.
    V2 = 2,
    /// Future (unsupported) version of witness program.
    V3 = 3,
    /// Future (unsupported) version of witness program.
    V4 = 4,
    /// Future (unsupported) version of witness program.
    V5 = 5,
    /// Future (unsupported) version of witness program.
    V6 = 6,
    /// Future (unsupported) version of witness program.
    V7 = 7,
    /// Future (unsupported) version of witness program.
    V8 = 8,
    /// Future (unsupported) version of witness program.
    V9 = 9,
    /// Future (unsupported) version of witness program.
    V10 = 10,
    /// Future (unsupported) version of witness program.
    V11 = 11,
    /// Future (unsupported) version of witness program.
    V12 = 12,
    /// Future (unsupported) version of witness program.
    V13 = 13,
    /// Future (unsupported) version of witness program.
    V14 = 14,
    /// Future (unsupported) version of witness program.
    V15 = 15,
    /// Future (unsupported) version of witness program.
    V16 = 16,
}

impl WitnessVersion {
    /// Returns the version number.
    ///
    /// NB: this is not the opcode that encodes the version in a script, see [`Self::to_opcode`].
    pub fn to_num(self) -> u8 { self as u8 }

    /// Reads a version from the first opcode of a witness program script.
    ///
    /// `OP_0` is version 0, any other opcode is taken to be `OP_PUSHNUM_n` and maps to
    /// `opcode - 0x50`. Opcodes outside `OP_PUSHNUM_1..=OP_PUSHNUM_16` are rejected.
    pub fn from_opcode(opcode: u8) -> Result<Self, WitnessVersionError> {
        match opcode {
            OP_0 => Ok(Self::V0),
            op if op >= OP_PUSHNUM_1 && op <= OP_PUSHNUM_16 => Self::try_from(op - PUSHNUM_OFFSET),
            op => Err(WitnessVersionError::NotAVersionOpcode(op)),
        }
    }

    /// Returns the opcode that pushes this version in a witness program script.
    pub fn to_opcode(self) -> u8 {
        match self {
            Self::V0 => OP_0,
            v => v.to_num() + PUSHNUM_OFFSET,
        }
    }
}

/// Prints the version number (from 0 to 16) without any prefix or suffix.
impl fmt::Display for WitnessVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", *self as u8) }
}

impl TryFrom<u8> for WitnessVersion {
    type Error = WitnessVersionError;

    fn try_from(no: u8) -> Result<Self, Self::Error> {
        use WitnessVersion::*;

        Ok(match no {
            0 => V0,
            1 => V1,
            2 => V2,
            3 => V3,
            4 => V4,
            5 => V5,
            6 => V6,
            7 => V7,
            8 => V8,
            9 => V9,
            10 => V10,
            11 => V11,
            12 => V12,
            13 => V13,
            14 => V14,
            15 => V15,
            16 => V16,
            wrong => return Err(WitnessVersionError::Invalid(wrong)),
        })
    }
}

impl From<WitnessVersion> for u8 {
    fn from(version: WitnessVersion) -> u8 { version.to_num() }
}

/// Error obtaining a witness version.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum WitnessVersionError {
    /// The number is greater than 16.
    Invalid(u8),
    /// The opcode is neither `OP_0` nor one of `OP_PUSHNUM_1` to `OP_PUSHNUM_16`.
    NotAVersionOpcode(u8),
    /// The script has no first opcode.
    EmptyScript,
}

impl fmt::Display for WitnessVersionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Invalid(n) => write!(f, "invalid witness script version: {}", n),
            Self::NotAVersionOpcode(op) =>
                write!(f, "opcode {:#04x} does not push a witness version", op),
            Self::EmptyScript => f.write_str("empty script has no witness version"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for WitnessVersionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opcode_zero_is_version_zero() {
        assert_eq!(WitnessVersion::from_opcode(0x00), Ok(WitnessVersion::V0));
        assert_eq!(WitnessVersion::V0.to_opcode(), 0x00);
    }

    #[test]
    fn pushnum_opcodes() {
        assert_eq!(WitnessVersion::from_opcode(0x51), Ok(WitnessVersion::V1));
        assert_eq!(WitnessVersion::from_opcode(0x60), Ok(WitnessVersion::V16));
        for n in 1..=16u8 {
            let version = WitnessVersion::try_from(n).unwrap();
            assert_eq!(WitnessVersion::from_opcode(version.to_opcode()), Ok(version));
            assert_eq!(version.to_opcode(), 0x50 + n);
        }
    }

    #[test]
    fn other_opcodes_rejected() {
        // Push-bytes opcodes and OP_RESERVED would underflow or overflow the version rule.
        for op in [0x01, 0x14, 0x20, 0x4f, 0x50, 0x61, 0xff] {
            assert_eq!(
                WitnessVersion::from_opcode(op),
                Err(WitnessVersionError::NotAVersionOpcode(op))
            );
        }
    }

    #[test]
    fn numbers() {
        assert_eq!(WitnessVersion::try_from(0), Ok(WitnessVersion::V0));
        assert_eq!(WitnessVersion::try_from(17), Err(WitnessVersionError::Invalid(17)));
        assert_eq!(u8::from(WitnessVersion::V16), 16);
        assert_eq!(alloc::format!("{}", WitnessVersion::V7), "7");
    }
}
