// SPDX-License-Identifier: CC0-1.0

//! Script-level building blocks for address derivation.
//!
//! Scripts are opaque byte strings to this crate. The only structure it knows about is the
//! segwit witness program script (`OP_n <push> program`), which it builds and reads back.

#![cfg_attr(not(feature = "std"), no_std)]
// Coding conventions.
#![warn(missing_docs)]
#![warn(deprecated_in_future)]
#![doc(test(attr(warn(unused))))]
// Exclude lints we don't think are valuable.
#![allow(clippy::manual_range_contains)] // More readable than clippy's format.
#![allow(clippy::uninlined_format_args)]

extern crate alloc;

pub mod script;

#[doc(inline)]
pub use self::script::{
    witness_program::WitnessProgram, witness_version::WitnessVersion, ScriptBuf, ScriptHash,
    WScriptHash,
};
