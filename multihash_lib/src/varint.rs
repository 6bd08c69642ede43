//! Unsigned LEB128: 7 bits per byte, least significant group first, high bit set
//! iff another byte follows.

use unsigned_varint::{decode, encode};

use crate::error::{MultihashError, Result};

pub fn write_u64(value: u64, out: &mut Vec<u8>) {
    let mut buf = encode::u64_buffer();
    out.extend_from_slice(encode::u64(value, &mut buf));
}

/// Reads one varint from the start of `input`, returning the value and the number of bytes it took.
pub fn read_u64(input: &[u8]) -> Result<(u64, usize)> {
    match decode::u64(input) {
        Ok((value, rest)) => Ok((value, input.len() - rest.len())),
        Err(decode::Error::Insufficient) => Err(MultihashError::MalformedBuffer(
            "buffer ended inside varint".to_string(),
        )),
        Err(e) => Err(MultihashError::MalformedBuffer(format!("invalid varint: {}", e))),
    }
}
