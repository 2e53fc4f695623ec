// SPDX-License-Identifier: CC0-1.0

//! Address construction.
//!
//! This module defines the [`Address`] type and its constructors, one per supported output
//! type. Addresses are built from compressed public keys or from scripts and are only ever
//! formatted, never parsed.

pub mod error;
pub mod prefix;

use alloc::borrow::ToOwned;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use bech32::primitives::gf32::Fe32;
use keys::{CompressedPublicKey, MalformedKeyError, PubkeyHash, UncompressedPublicKey};
use network::{Network, ToNetwork};
use primitives::{ScriptBuf, ScriptHash, WitnessProgram};

#[rustfmt::skip]                // Keep public re-exports separate.
#[doc(inline)]
pub use self::{
    error::{EncodingError, Error, UnknownAddressTypeError},
    prefix::{prefix_for, AddressPrefix},
};

/// The different types of addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum AddressType {
    /// Pay to pubkey hash.
    P2pkh,
    /// Pay to script hash.
    P2sh,
    /// Pay to witness pubkey hash.
    P2wpkh,
    /// Pay to witness script hash.
    P2wsh,
    /// Pay to witness pubkey hash, nested in pay to script hash.
    P2shP2wpkh,
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Self::P2pkh => "p2pkh",
            Self::P2sh => "p2sh",
            Self::P2wpkh => "p2wpkh",
            Self::P2wsh => "p2wsh",
            Self::P2shP2wpkh => "p2sh-p2wpkh",
        })
    }
}

impl FromStr for AddressType {
    type Err = UnknownAddressTypeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "p2pkh" => Ok(Self::P2pkh),
            "p2sh" => Ok(Self::P2sh),
            "p2wpkh" => Ok(Self::P2wpkh),
            "p2wsh" => Ok(Self::P2wsh),
            "p2sh-p2wpkh" => Ok(Self::P2shP2wpkh),
            _ => Err(UnknownAddressTypeError(s.to_owned())),
        }
    }
}

/// Trait for inputs an address can be derived from as a compressed public key.
///
/// Raw bytes must already be in compressed form (33 bytes, `0x02`/`0x03` prefix). An
/// [`UncompressedPublicKey`] is compressed first.
pub trait ToCompressedPublicKey {
    /// Returns the compressed key, or why these bytes are not one.
    fn to_compressed_public_key(&self) -> Result<CompressedPublicKey, MalformedKeyError>;
}

impl ToCompressedPublicKey for CompressedPublicKey {
    fn to_compressed_public_key(&self) -> Result<CompressedPublicKey, MalformedKeyError> {
        Ok(*self)
    }
}

impl ToCompressedPublicKey for UncompressedPublicKey {
    fn to_compressed_public_key(&self) -> Result<CompressedPublicKey, MalformedKeyError> {
        Ok(self.compress())
    }
}

impl ToCompressedPublicKey for [u8] {
    fn to_compressed_public_key(&self) -> Result<CompressedPublicKey, MalformedKeyError> {
        CompressedPublicKey::from_slice(self)
    }
}

impl ToCompressedPublicKey for [u8; 33] {
    fn to_compressed_public_key(&self) -> Result<CompressedPublicKey, MalformedKeyError> {
        CompressedPublicKey::try_from(*self)
    }
}

impl ToCompressedPublicKey for Vec<u8> {
    fn to_compressed_public_key(&self) -> Result<CompressedPublicKey, MalformedKeyError> {
        CompressedPublicKey::from_slice(self)
    }
}

impl<T: ToCompressedPublicKey + ?Sized> ToCompressedPublicKey for &T {
    fn to_compressed_public_key(&self) -> Result<CompressedPublicKey, MalformedKeyError> {
        (**self).to_compressed_public_key()
    }
}

/// The inner representation of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum AddressInner {
    P2pkh { hash: PubkeyHash, network: Network },
    P2sh { hash: ScriptHash, network: Network },
    /// A P2SH address whose redeem script is a P2WPKH witness program.
    P2shWpkh { hash: ScriptHash, network: Network },
    Segwit { program: WitnessProgram, network: Network },
}

/// Formats bech32 as upper case if alternate formatting is chosen (`{:#}`).
impl fmt::Display for AddressInner {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        use AddressInner::*;
        match *self {
            P2pkh { ref hash, network } =>
                fmt_base58(fmt, prefix::pubkey_address_prefix(network), hash.as_byte_array()),
            P2sh { ref hash, network } | P2shWpkh { ref hash, network } =>
                fmt_base58(fmt, prefix::script_address_prefix(network), hash.as_byte_array()),
            Segwit { ref program, network } => {
                let hrp = prefix::hrp(network);
                let version = Fe32::try_from(program.version().to_num())
                    .expect("version nums 0-16 are valid fe32 values");
                let program = program.program();

                if fmt.alternate() {
                    bech32::segwit::encode_upper_to_fmt_unchecked(fmt, hrp, version, program)
                } else {
                    bech32::segwit::encode_lower_to_fmt_unchecked(fmt, hrp, version, program)
                }
            }
        }
    }
}

/// Writes `version || hash` in Base58Check.
fn fmt_base58(fmt: &mut fmt::Formatter, version: u8, hash: &[u8; 20]) -> fmt::Result {
    let mut prefixed = [0; 21];
    prefixed[0] = version;
    prefixed[1..].copy_from_slice(hash);
    base58::encode_check_to_fmt(fmt, &prefixed[..])
}

/// An address, ready to be displayed.
///
/// Use `to_string()` (or `{}`) to get the address string. The alternate form `{:#}` writes
/// bech32 addresses in upper case, which encodes more compactly in QR codes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(AddressInner);

#[cfg(feature = "serde")]
impl serde::Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl Address {
    /// Constructs a new pay-to-public-key-hash (P2PKH) address from a compressed public key.
    ///
    /// The payload is `version || HASH160(pubkey)` in Base58Check.
    pub fn p2pkh(pk: impl ToCompressedPublicKey, network: impl ToNetwork) -> Result<Self, Error> {
        let hash = pk.to_compressed_public_key()?.pubkey_hash();
        let network = network.to_network()?;
        Ok(Self(AddressInner::P2pkh { hash, network }))
    }

    /// Constructs a new pay-to-script-hash (P2SH) address from a redeem script.
    ///
    /// The script is hashed as is; its contents are not checked.
    pub fn p2sh(redeem_script: impl AsRef<[u8]>, network: impl ToNetwork) -> Result<Self, Error> {
        let hash = ScriptHash::hash(redeem_script.as_ref());
        Ok(Self::p2sh_from_hash(hash, network.to_network()?))
    }

    /// Constructs a new pay-to-script-hash (P2SH) address from a script hash.
    pub fn p2sh_from_hash(hash: ScriptHash, network: Network) -> Self {
        Self(AddressInner::P2sh { hash, network })
    }

    /// Constructs a new pay-to-witness-public-key-hash (P2WPKH) address from a compressed public
    /// key.
    pub fn p2wpkh(pk: impl ToCompressedPublicKey, network: impl ToNetwork) -> Result<Self, Error> {
        let hash = pk.to_compressed_public_key()?.wpubkey_hash();
        let program = WitnessProgram::p2wpkh_from_hash(hash.to_byte_array());
        Self::from_program_script(&ScriptBuf::new_witness_program(&program), network)
    }

    /// Constructs a new pay-to-witness-script-hash (P2WSH) address from a witness script.
    ///
    /// Unlike P2SH the program is a single SHA256 of the script, 32 bytes long.
    pub fn p2wsh(witness_script: impl AsRef<[u8]>, network: impl ToNetwork) -> Result<Self, Error> {
        let program = WitnessProgram::p2wsh(witness_script.as_ref());
        Self::from_program_script(&ScriptBuf::new_witness_program(&program), network)
    }

    /// Constructs a new P2SH-P2WPKH address from a compressed public key.
    ///
    /// The P2WPKH program script `0x00 0x14 <HASH160(pubkey)>` is used as the redeem script of a
    /// P2SH address, giving a legacy looking address that is spent through a nested witness.
    pub fn p2sh_p2wpkh(
        pk: impl ToCompressedPublicKey,
        network: impl ToNetwork,
    ) -> Result<Self, Error> {
        let hash = pk.to_compressed_public_key()?.wpubkey_hash();
        let program = WitnessProgram::p2wpkh_from_hash(hash.to_byte_array());
        let redeem_script = ScriptBuf::new_witness_program(&program);
        let network = network.to_network()?;
        Ok(Self(AddressInner::P2shWpkh { hash: redeem_script.script_hash(), network }))
    }

    /// Constructs a new segwit address from an arbitrary `WitnessProgram`.
    pub fn from_witness_program(
        program: WitnessProgram,
        network: impl ToNetwork,
    ) -> Result<Self, Error> {
        let network = network.to_network()?;
        Ok(Self(AddressInner::Segwit { program, network }))
    }

    /// Reads version and program back out of a `OP_n <push> program` script.
    ///
    /// The builders always pass `OP_0` so the version is always 0.
    fn from_program_script(script: &ScriptBuf, network: impl ToNetwork) -> Result<Self, Error> {
        let version = script.witness_version()?;
        let program = WitnessProgram::new(version, script.as_bytes().get(2..).unwrap_or_default())?;
        Self::from_witness_program(program, network)
    }

    /// Gets the address type of the address.
    ///
    /// Returns `None` for segwit programs that are neither P2WPKH nor P2WSH.
    #[inline]
    pub fn address_type(&self) -> Option<AddressType> {
        match self.0 {
            AddressInner::P2pkh { .. } => Some(AddressType::P2pkh),
            AddressInner::P2sh { .. } => Some(AddressType::P2sh),
            AddressInner::P2shWpkh { .. } => Some(AddressType::P2shP2wpkh),
            AddressInner::Segwit { ref program, .. } =>
                if program.is_p2wpkh() {
                    Some(AddressType::P2wpkh)
                } else if program.is_p2wsh() {
                    Some(AddressType::P2wsh)
                } else {
                    None
                },
        }
    }

    /// Returns the network this address was built for.
    pub fn network(&self) -> Network {
        use AddressInner::*;
        match self.0 {
            P2pkh { network, .. }
            | P2sh { network, .. }
            | P2shWpkh { network, .. }
            | Segwit { network, .. } => network,
        }
    }

    /// Returns the prefix this address is encoded with.
    pub fn prefix(&self) -> AddressPrefix {
        use AddressInner::*;
        match self.0 {
            P2pkh { network, .. } => AddressPrefix::Base58(prefix::pubkey_address_prefix(network)),
            P2sh { network, .. } | P2shWpkh { network, .. } =>
                AddressPrefix::Base58(prefix::script_address_prefix(network)),
            Segwit { network, .. } => AddressPrefix::Bech32(prefix::hrp(network)),
        }
    }

    /// Gets the pubkey hash for this address if this is a P2PKH address.
    pub fn pubkey_hash(&self) -> Option<PubkeyHash> {
        match self.0 {
            AddressInner::P2pkh { hash, .. } => Some(hash),
            _ => None,
        }
    }

    /// Gets the script hash for this address if this is a P2SH or P2SH-P2WPKH address.
    pub fn script_hash(&self) -> Option<ScriptHash> {
        match self.0 {
            AddressInner::P2sh { hash, .. } | AddressInner::P2shWpkh { hash, .. } => Some(hash),
            _ => None,
        }
    }

    /// Gets the witness program for this address if this is a SegWit address.
    pub fn witness_program(&self) -> Option<WitnessProgram> {
        match self.0 {
            AddressInner::Segwit { program, .. } => Some(program),
            _ => None,
        }
    }
}

// Alternate formatting `{:#}` returns an uppercase version of bech32 addresses for QR codes.
impl fmt::Display for Address {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result { fmt::Display::fmt(&self.0, fmt) }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::Display::fmt(&self.0, f) }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::ToString;

    use hex::FromHex;
    use primitives::WitnessVersion;

    use super::*;

    const G: &str = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

    fn key() -> CompressedPublicKey { G.parse().unwrap() }

    #[test]
    fn address_type_string() {
        for t in [
            AddressType::P2pkh,
            AddressType::P2sh,
            AddressType::P2wpkh,
            AddressType::P2wsh,
            AddressType::P2shP2wpkh,
        ] {
            assert_eq!(t.to_string().parse::<AddressType>(), Ok(t));
        }
        assert_eq!(
            "p2tr".parse::<AddressType>(),
            Err(UnknownAddressTypeError("p2tr".to_owned()))
        );
    }

    #[test]
    fn key_inputs_agree() {
        let pk = key();
        let bytes = Vec::<u8>::from_hex(G).unwrap();
        let array = *pk.as_bytes();

        let want = Address::p2pkh(&pk, Network::Mainnet).unwrap();
        assert_eq!(Address::p2pkh(pk, Network::Mainnet).unwrap(), want);
        assert_eq!(Address::p2pkh(&bytes[..], Network::Mainnet).unwrap(), want);
        assert_eq!(Address::p2pkh(&bytes, Network::Mainnet).unwrap(), want);
        assert_eq!(Address::p2pkh(array, Network::Mainnet).unwrap(), want);
    }

    #[test]
    fn uncompressed_input_is_compressed_first() {
        let mut raw = [0; 64];
        raw[..32].copy_from_slice(&key().as_bytes()[1..]);
        raw[32..].copy_from_slice(
            &<[u8; 32]>::from_hex(
                "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
            )
            .unwrap(),
        );
        let uncompressed = UncompressedPublicKey::from_byte_array(raw);

        assert_eq!(
            Address::p2wpkh(uncompressed, Network::Mainnet).unwrap(),
            Address::p2wpkh(key(), Network::Mainnet).unwrap()
        );
    }

    #[test]
    fn malformed_keys() {
        let bytes = Vec::<u8>::from_hex(G).unwrap();

        let err = Address::p2pkh(&bytes[..32], Network::Mainnet).unwrap_err();
        assert_eq!(
            err,
            Error::MalformedKey(MalformedKeyError::InvalidLength { expected: 33, got: 32 })
        );

        let mut uncompressed_tag = bytes.clone();
        uncompressed_tag[0] = 0x04;
        assert_eq!(
            Address::p2wpkh(&uncompressed_tag, Network::Mainnet).unwrap_err(),
            Error::MalformedKey(MalformedKeyError::InvalidPrefix(0x04))
        );
        assert!(matches!(
            Address::p2sh_p2wpkh(&[0u8; 64][..], Network::Mainnet),
            Err(Error::MalformedKey(_))
        ));
    }

    #[test]
    fn segwit_builders_use_version_zero() {
        let pk = key();
        let script = [0x51u8];
        for network in Network::ALL {
            let wpkh = Address::p2wpkh(pk, network).unwrap().witness_program().unwrap();
            let wsh = Address::p2wsh(script, network).unwrap().witness_program().unwrap();
            assert_eq!(wpkh.version(), WitnessVersion::V0);
            assert_eq!(wsh.version(), WitnessVersion::V0);
        }
    }

    #[test]
    fn introspection() {
        let pk = key();

        let addr = Address::p2pkh(pk, "regtest").unwrap();
        assert_eq!(addr.address_type(), Some(AddressType::P2pkh));
        assert_eq!(addr.network(), Network::Regtest);
        assert_eq!(addr.pubkey_hash(), Some(pk.pubkey_hash()));
        assert_eq!(addr.prefix(), AddressPrefix::Base58(0x6f));

        let addr = Address::p2sh_p2wpkh(pk, "testnet").unwrap();
        assert_eq!(addr.address_type(), Some(AddressType::P2shP2wpkh));
        assert!(addr.script_hash().is_some());
        assert_eq!(addr.witness_program(), None);

        let addr = Address::p2wsh([0x51u8], Network::Mainnet).unwrap();
        assert_eq!(addr.address_type(), Some(AddressType::P2wsh));
        assert_eq!(addr.prefix(), AddressPrefix::Bech32(bech32::hrp::BC));
        assert_eq!(addr.pubkey_hash(), None);
    }

    #[test]
    fn prefix_matches_table() {
        let pk = key();
        for network in Network::ALL {
            let built = [
                Address::p2pkh(pk, network).unwrap(),
                Address::p2sh([0x51u8], network).unwrap(),
                Address::p2wpkh(pk, network).unwrap(),
                Address::p2wsh([0x51u8], network).unwrap(),
                Address::p2sh_p2wpkh(pk, network).unwrap(),
            ];
            for addr in built {
                let t = addr.address_type().unwrap();
                assert_eq!(Ok(addr.prefix()), prefix_for(network, t));
            }
        }
    }

    #[test]
    fn legacy_display_is_base58check_of_prefixed_hash() {
        let pk = key();
        let mut payload = alloc::vec![0x6f];
        payload.extend_from_slice(pk.pubkey_hash().as_byte_array());
        assert_eq!(
            Address::p2pkh(pk, Network::Testnet).unwrap().to_string(),
            crate::base58ck::encode_check(&payload)
        );
    }

    #[test]
    fn nested_segwit_hashes_the_program_script() {
        let pk = key();
        let program = WitnessProgram::p2wpkh_from_hash(pk.wpubkey_hash().to_byte_array());
        let redeem_script = ScriptBuf::new_witness_program(&program);
        assert_eq!(redeem_script.as_bytes()[..2], [0x00, 0x14]);

        let nested = Address::p2sh_p2wpkh(pk, Network::Mainnet).unwrap();
        assert_eq!(nested.script_hash(), Some(redeem_script.script_hash()));
        assert_eq!(
            nested.to_string(),
            Address::p2sh(redeem_script, Network::Mainnet).unwrap().to_string()
        );
    }

    #[test]
    fn future_witness_version() {
        let program = WitnessProgram::new(WitnessVersion::V1, &[0; 32]).unwrap();
        let addr = Address::from_witness_program(program, Network::Mainnet).unwrap();
        assert_eq!(addr.address_type(), None);
        assert_eq!(
            addr.to_string(),
            "bc1pqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqpqqenm"
        );
    }

    #[test]
    fn alternate_display_is_upper_case() {
        let addr = Address::p2wpkh(key(), Network::Mainnet).unwrap();
        assert_eq!(format!("{:#}", addr), "BC1QW508D6QEJXTDG4Y5R3ZARVARY0C5XW7KV8F3T4");
        assert_eq!(format!("{:?}", addr), "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4");

        // Base58 is case sensitive and not affected.
        let addr = Address::p2pkh(key(), Network::Mainnet).unwrap();
        assert_eq!(format!("{:#}", addr), "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serialize_as_string() {
        let addr = Address::p2sh_p2wpkh(key(), Network::Mainnet).unwrap();
        assert_eq!(serde_json::to_string(&addr).unwrap(), "\"3JvL6Ymt8MVWiCNHC7oWU6nLeHNJKLZGLN\"");
    }
}
