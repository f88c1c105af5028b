//! Misc utils

use ethers::{
    types::{Address, Bytes},
    utils::to_checksum,
};

/// Converts address to checksum address
pub fn as_checksum_addr<S>(val: &Address, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_str(&to_checksum(val, None))
}

/// Converts Option address to checksum
pub fn as_checksum_addr_opt<S>(val: &Option<Address>, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    if let Some(addr) = val {
        s.serialize_str(&to_checksum(addr, None))
    } else {
        s.serialize_none()
    }
}

/// If possible, parses address from the first 20 bytes
pub fn get_address(buf: &[u8]) -> Option<Address> {
    if buf.len() >= 20 {
        Some(Address::from_slice(&buf[0..20]))
    } else {
        None
    }
}

/// Splits init code into the factory address and the factory calldata
pub fn unpack_init_code(init_code: &Bytes) -> Option<(Address, Bytes)> {
    if init_code.len() > 20 {
        Some((Address::from_slice(&init_code[0..20]), Bytes::from(init_code[20..].to_vec())))
    } else {
        None
    }
}
