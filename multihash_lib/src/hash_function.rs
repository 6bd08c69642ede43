use std::{
    io::{self, Read},
    sync::Arc,
};

use crate::{error::Result, hash_type::HashType, multihash::Multihash};

/// Incremental digest state for one algorithm.
pub trait DigestSource: Send {
    fn update(&mut self, data: &[u8]);
    fn finalize(self: Box<Self>) -> Vec<u8>;
}

/// Hands out fresh digest state for a hash type. The codec never depends on a
/// particular cryptography provider, only on this trait.
pub trait DigestProvider: Send + Sync {
    fn digest_source(&self, hash_type: HashType) -> Box<dyn DigestSource>;
}

/// Digests from the RustCrypto crates, one per algorithm family.
#[cfg(feature = "rustcrypto")]
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoProvider;

#[cfg(feature = "rustcrypto")]
mod rustcrypto {
    use digest::Digest;

    use super::{DigestProvider, DigestSource, RustCryptoProvider};
    use crate::hash_type::{HashCode, HashType};

    struct RustCryptoDigest<D>(D);

    impl<D: Digest + Send> DigestSource for RustCryptoDigest<D> {
        fn update(&mut self, data: &[u8]) { Digest::update(&mut self.0, data); }

        fn finalize(self: Box<Self>) -> Vec<u8> {
            let RustCryptoDigest(inner) = *self;
            inner.finalize().to_vec()
        }
    }

    fn boxed<D: Digest + Send + 'static>() -> Box<dyn DigestSource> {
        Box::new(RustCryptoDigest(D::new()))
    }

    impl DigestProvider for RustCryptoProvider {
        fn digest_source(&self, hash_type: HashType) -> Box<dyn DigestSource> {
            match hash_type.code() {
                HashCode::Sha1 => boxed::<sha1::Sha1>(),
                HashCode::Sha2_256 => boxed::<sha2::Sha256>(),
                HashCode::Sha2_512 => boxed::<sha2::Sha512>(),
                HashCode::Sha3 => boxed::<sha3::Sha3_512>(),
                HashCode::Blake2b => boxed::<blake2::Blake2b512>(),
                HashCode::Blake2s => boxed::<blake2::Blake2s256>(),
            }
        }
    }
}

// Feeds everything written into a digest, so io::copy can stream a reader through it.
struct DigestWriter {
    inner: Box<dyn DigestSource>,
}

impl io::Write for DigestWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

/// Hashes an input stream with a given hash type.
#[derive(Clone)]
pub struct HashFunction {
    hash_type: HashType,
    provider: Arc<dyn DigestProvider>,
}

impl std::fmt::Debug for HashFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashFunction")
            .field("hash_type", &self.hash_type)
            .finish()
    }
}

impl HashFunction {
    #[cfg(feature = "rustcrypto")]
    pub fn new(hash_type: HashType) -> Self {
        Self::with_provider(hash_type, Arc::new(RustCryptoProvider))
    }

    pub fn with_provider(hash_type: HashType, provider: Arc<dyn DigestProvider>) -> Self {
        HashFunction {
            hash_type,
            provider,
        }
    }

    pub fn hash_type(&self) -> HashType { self.hash_type }

    /// Reads `input` to the end and returns its digest tagged with this hash type.
    /// The input is streamed, never buffered whole. Read errors are returned as is.
    pub fn hash<R: Read + ?Sized>(&self, input: &mut R) -> Result<Multihash> {
        let mut writer = DigestWriter {
            inner: self.provider.digest_source(self.hash_type),
        };
        let streamed = io::copy(input, &mut writer)?;
        let digest = writer.inner.finalize();
        log::trace!(
            "{} digest of {} bytes: {} byte digest",
            self.hash_type.name(),
            streamed,
            digest.len()
        );
        Ok(Multihash::wrap(self.hash_type, digest))
    }

    pub fn hash_bytes(&self, data: &[u8]) -> Multihash {
        let mut source = self.provider.digest_source(self.hash_type);
        source.update(data);
        Multihash::wrap(self.hash_type, source.finalize())
    }
}
