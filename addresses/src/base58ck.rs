// SPDX-License-Identifier: CC0-1.0

//! Base58Check encoding and decoding.
//!
//! The checksum is the first four bytes of the double SHA256 of the payload, appended to the
//! payload before base58 encoding.
//!
//! Two decoders are provided. [`decode_check`] verifies and strips the checksum and is what
//! anything read from outside should go through. [`decode`] only undoes the base58 step: it
//! returns the payload *with* the checksum still attached and accepts corrupted input as long as
//! every character is in the alphabet.

use alloc::string::String;
use alloc::vec::Vec;

#[doc(inline)]
pub use base58::{Error, InvalidCharacterError};

/// Byte size of the checksum.
pub const CHECKSUM_SIZE: usize = 4;

/// Encodes `payload` as base58, including the checksum.
pub fn encode_check(payload: &[u8]) -> String { base58::encode_check(payload) }

/// Decodes a base58 string into bytes **without** checking the checksum.
///
/// The trailing four checksum bytes are returned as part of the data. Use [`decode_check`]
/// unless the raw bytes are really what you want.
pub fn decode(data: &str) -> Result<Vec<u8>, InvalidCharacterError> { base58::decode(data) }

/// Decodes a base58check string, verifying and stripping the checksum.
pub fn decode_check(data: &str) -> Result<Vec<u8>, Error> { base58::decode_check(data) }

#[cfg(test)]
mod tests {
    use alloc::vec;

    use hex::FromHex;

    use super::*;

    fn hex(s: &str) -> Vec<u8> { Vec::from_hex(s).unwrap() }

    #[test]
    fn encode_check_known_address() {
        let addr = hex("00f8917303bfa8ef24f292e8fa1419b20460ba064d");
        assert_eq!(encode_check(&addr), "1PfJpZsjreyVrqeoAfabrRwwjQyoSQMmHH");
    }

    #[test]
    fn leading_zeros() {
        // Every leading zero byte becomes a '1'.
        assert_eq!(encode_check(&[0, 0, 1]), "11BwW2qR");
        assert_eq!(decode("11BwW2qR").unwrap(), hex("000001abfb0844"));
        assert_eq!(decode_check("11BwW2qR").unwrap(), vec![0, 0, 1]);
    }

    #[test]
    fn empty_payload() {
        assert_eq!(encode_check(&[]), "3QJmnh");
        assert_eq!(decode_check("3QJmnh"), Ok(vec![]));
    }

    #[test]
    fn decode_keeps_checksum() {
        let payload = hex("00751e76e8199196d454941c45d1b3a323f1433bd6");
        let encoded = encode_check(&payload);
        assert_eq!(encoded, "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");

        let raw = decode(&encoded).unwrap();
        assert_eq!(raw, hex("00751e76e8199196d454941c45d1b3a323f1433bd6510d1634"));
        assert_eq!(raw.len(), payload.len() + CHECKSUM_SIZE);
        assert_eq!(decode_check(&encoded).unwrap(), payload);
    }

    #[test]
    fn decode_does_not_verify() {
        // Last character changed from 'H' to 'J'.
        let corrupted = "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMJ";
        let raw = decode(corrupted).unwrap();
        assert_eq!(raw.len(), 25);
        assert_eq!(raw[..21], hex("00751e76e8199196d454941c45d1b3a323f1433bd6")[..]);

        assert!(decode_check(corrupted).is_err());
    }

    #[test]
    fn invalid_characters() {
        for s in ["10", "O", "1I", "abl", "1¢"] {
            assert!(decode(s).is_err());
            assert!(decode_check(s).is_err());
        }
    }

    #[test]
    fn too_short() {
        // Three bytes can not carry a four byte checksum.
        assert!(decode_check(&base58::encode(&[1, 2, 3])).is_err());
    }
}
