use crate::{
    error::{MultihashError, Result},
    hash_type::HashType,
    multihash::Multihash,
    varint,
};

/// What the decoder does with bytes left over after one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingBytes {
    /// Leave them to the caller, who gets the consumed length back.
    #[default]
    Allow,
    /// Fail with [`MultihashError::TrailingBytes`].
    Reject,
}

/// Extracts a multihash from a raw buffer. Holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct BufferDecoder {
    trailing: TrailingBytes,
}

impl BufferDecoder {
    pub fn new(trailing: TrailingBytes) -> Self { BufferDecoder { trailing } }

    pub fn trailing(&self) -> TrailingBytes { self.trailing }

    /// Decodes one record from the start of `input` and returns it with the number of bytes consumed.
    pub fn decode(&self, input: &[u8]) -> Result<(Multihash, usize)> {
        let (multihash, consumed) = decode_record(input)?;
        if self.trailing == TrailingBytes::Reject && consumed != input.len() {
            log::debug!(
                "rejecting {} trailing bytes after multihash",
                input.len() - consumed
            );
            return Err(MultihashError::TrailingBytes {
                consumed,
                total: input.len(),
            });
        }
        Ok((multihash, consumed))
    }

    /// Iterates over consecutive records of a concatenated buffer. The trailing
    /// byte policy does not apply here; iteration stops after the first error.
    pub fn records<'a>(&self, input: &'a [u8]) -> Records<'a> { Records { input, failed: false } }
}

fn decode_record(input: &[u8]) -> Result<(Multihash, usize)> {
    let (code, code_len) = varint::read_u64(input)?;
    let hash_type = HashType::from_code(code).inspect_err(|_| {
        log::debug!("unknown hash code {:#x} in multihash header", code);
    })?;

    let (length, length_len) = varint::read_u64(&input[code_len..])?;
    let header_len = code_len + length_len;
    let remaining = input.len() - header_len;

    // a length that doesn't fit usize can't fit in the buffer either
    let digest_len = usize::try_from(length)
        .ok()
        .filter(|len| *len <= remaining)
        .ok_or_else(|| {
            log::debug!(
                "{} digest declares {} bytes, {} available",
                hash_type.name(),
                length,
                remaining
            );
            MultihashError::MalformedBuffer(format!(
                "digest declares {} bytes but only {} remain",
                length, remaining
            ))
        })?;

    let end = header_len + digest_len;
    let digest = input[header_len..end].to_vec();
    Ok((Multihash::wrap(hash_type, digest), end))
}

pub struct Records<'a> {
    input: &'a [u8],
    failed: bool,
}

impl<'a> Iterator for Records<'a> {
    type Item = Result<Multihash>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.input.is_empty() {
            return None;
        }
        match decode_record(self.input) {
            Ok((multihash, consumed)) => {
                self.input = &self.input[consumed..];
                Some(Ok(multihash))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
