pub mod error;
pub mod hash_type;
pub mod multihash;
pub mod varint;
pub mod hash_function;
pub mod encode;
pub mod decode;
#[cfg(feature = "serde")]
mod ser;

pub use decode::{BufferDecoder, TrailingBytes};
pub use encode::BufferEncoder;
pub use error::{MultihashError, Result};
pub use hash_function::{DigestProvider, DigestSource, HashFunction};
pub use hash_type::{hash_types, HashCode, HashType};
pub use multihash::Multihash;
#[cfg(feature = "rustcrypto")]
pub use hash_function::RustCryptoProvider;
