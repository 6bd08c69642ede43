use crate::{multihash::Multihash, varint};

/// Packs a multihash into its wire form:
/// `[varint code][varint digest length][digest]`, no padding or terminator.
#[derive(Debug, Clone, Copy, Default)]
pub struct BufferEncoder;

impl BufferEncoder {
    pub fn new() -> Self { BufferEncoder }

    pub fn encode(&self, multihash: &Multihash) -> Vec<u8> {
        let mut out = Vec::with_capacity(2 + multihash.digest().len());
        self.encode_into(multihash, &mut out);
        out
    }

    /// Appends the encoding to `out`, which lets callers build concatenated buffers.
    pub fn encode_into(&self, multihash: &Multihash, out: &mut Vec<u8>) {
        varint::write_u64(multihash.hash_type().code().value(), out);
        varint::write_u64(multihash.digest().len() as u64, out);
        out.extend_from_slice(multihash.digest());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash_type::{HashCode, HashType};

    #[test]
    fn test_empty_digest() {
        let mh = Multihash::wrap(HashType::from(HashCode::Sha2_256), Vec::new());
        assert_eq!(BufferEncoder::new().encode(&mh), vec![0x12, 0x00]);
    }

    #[test]
    fn test_sha1_layout() {
        let digest = hex::decode("da39a3ee5e6b4b0d3255bfef95601890afd80709").unwrap();
        let mh = Multihash::wrap(HashType::from(HashCode::Sha1), digest.clone());
        let encoded = BufferEncoder::new().encode(&mh);
        assert_eq!(&encoded[..2], &[0x11, 0x14]);
        assert_eq!(&encoded[2..], &digest[..]);
    }

    #[test]
    fn test_long_digest_uses_multibyte_length() {
        let mh = Multihash::wrap(HashType::from(HashCode::Blake2b), vec![0x5a; 200]);
        let encoded = BufferEncoder::new().encode(&mh);
        assert_eq!(&encoded[..3], &[0x40, 0xc8, 0x01]);
        assert_eq!(encoded.len(), 3 + 200);
    }

    #[test]
    fn test_encode_into_appends() {
        let a = Multihash::wrap(HashType::from(HashCode::Sha1), vec![1]);
        let b = Multihash::wrap(HashType::from(HashCode::Blake2s), vec![2, 3]);
        let encoder = BufferEncoder::new();
        let mut out = vec![0xee];
        encoder.encode_into(&a, &mut out);
        encoder.encode_into(&b, &mut out);
        assert_eq!(out, vec![0xee, 0x11, 0x01, 0x01, 0x41, 0x02, 0x02, 0x03]);
    }
}
