//! Multihash type
//!
//! A digest tagged with the algorithm that produced it. The digest length is carried explicitly
//! on the wire, so it does not have to match the default size of the hash type: truncated
//! digests are valid multihashes.

use crate::{
    decode::{BufferDecoder, TrailingBytes},
    encode::BufferEncoder,
    error::Result,
    hash_type::HashType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multihash {
    hash_type: HashType,
    digest: Vec<u8>,
}

impl Multihash {
    pub fn wrap(hash_type: HashType, digest: Vec<u8>) -> Multihash { Multihash { hash_type, digest } }
    pub fn hash_type(&self) -> HashType { self.hash_type }
    pub fn digest(&self) -> &[u8] { &self.digest }
    pub fn into_digest(self) -> Vec<u8> { self.digest }

    /// True if the digest is shorter than the default size of its hash type.
    pub fn is_truncated(&self) -> bool { self.digest.len() < self.hash_type.size() }

    /// Keeps the first `len` bytes of the digest. Never lengthens it.
    pub fn truncate(&self, len: usize) -> Multihash {
        let len = len.min(self.digest.len());
        Multihash::wrap(self.hash_type, self.digest[..len].to_vec())
    }

    pub fn to_bytes(&self) -> Vec<u8> { BufferEncoder::new().encode(self) }

    /// Decodes a buffer holding exactly one multihash.
    pub fn from_bytes(bytes: &[u8]) -> Result<Multihash> {
        let (multihash, _) = BufferDecoder::new(TrailingBytes::Reject).decode(bytes)?;
        Ok(multihash)
    }
}

// Implement Hash manually, HashType hashes by code only
impl std::hash::Hash for Multihash {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::hash::Hash::hash(&self.hash_type, state);
        std::hash::Hash::hash(&self.digest, state);
    }
}
