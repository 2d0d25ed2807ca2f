//! Entry point selectors.
//!
//! A selector is the big-endian first four bytes of the SHA-256 digest of the
//! entry point name. The family-wide selectors are fixed here so accounts can
//! call any validation module without knowing its concrete type.

use sha2::{Digest, Sha256};

pub const IS_VALID_OPERATION_ENTRY_POINT: u32 = 0xff67_ddda;
pub const ON_INSTALL_ENTRY_POINT: u32 = 0xd381_3539;
pub const MANIFEST_ENTRY_POINT: u32 = 0x05b3_abf2;

pub fn entry_point_selector(name: &str) -> u32 {
    let digest = Sha256::digest(name.as_bytes());
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}
