//! Registry of the hash algorithms a multihash can be tagged with.
//!
//! Codes are part of the wire format: entries may be added in a new build but
//! never removed or renumbered.

use std::{cmp::Ordering, collections::BTreeSet, str::FromStr, sync::OnceLock};

use crate::error::{MultihashError, Result};

/// Code values of supported hash types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum HashCode {
    Sha1 = 0x11,
    Sha2_256 = 0x12,
    Sha2_512 = 0x13,
    Sha3 = 0x14,
    Blake2b = 0x40,
    Blake2s = 0x41,
}

impl HashCode {
    pub fn value(self) -> u64 { self as u8 as u64 }
}

impl TryFrom<u64> for HashCode {
    type Error = MultihashError;

    fn try_from(code: u64) -> Result<Self> {
        match code {
            0x11 => Ok(HashCode::Sha1),
            0x12 => Ok(HashCode::Sha2_256),
            0x13 => Ok(HashCode::Sha2_512),
            0x14 => Ok(HashCode::Sha3),
            0x40 => Ok(HashCode::Blake2b),
            0x41 => Ok(HashCode::Blake2s),
            _ => Err(MultihashError::InvalidHashKind(format!(
                "unknown hash code {:#x}",
                code
            ))),
        }
    }
}

/// One registered algorithm: its code, canonical name and default digest size in bytes.
///
/// Equality, ordering and hashing only look at the code.
#[derive(Debug, Clone, Copy)]
pub struct HashType {
    code: HashCode,
    name: &'static str,
    size: usize,
}

// Kept sorted by code.
static REGISTRY: [HashType; 6] = [
    HashType { code: HashCode::Sha1, name: "sha1", size: 20 },
    HashType { code: HashCode::Sha2_256, name: "sha2-256", size: 32 },
    HashType { code: HashCode::Sha2_512, name: "sha2-512", size: 64 },
    HashType { code: HashCode::Sha3, name: "sha3", size: 64 },
    HashType { code: HashCode::Blake2b, name: "blake2b", size: 64 },
    HashType { code: HashCode::Blake2s, name: "blake2s", size: 32 },
];

impl HashType {
    pub fn from_name(name: &str) -> Result<Self> {
        REGISTRY
            .iter()
            .find(|t| t.name == name)
            .copied()
            .ok_or_else(|| MultihashError::InvalidHashKind(format!("unknown hash name {:?}", name)))
    }

    /// Looks up a wire code. Any `u64` is accepted so that codes wider than a
    /// byte are reported as unknown instead of being truncated.
    pub fn from_code(code: u64) -> Result<Self> { HashCode::try_from(code).map(HashType::from) }

    pub fn code(&self) -> HashCode { self.code }
    pub fn name(&self) -> &'static str { self.name }
    pub fn size(&self) -> usize { self.size }
}

impl From<HashCode> for HashType {
    fn from(code: HashCode) -> Self {
        let idx = match code {
            HashCode::Sha1 => 0,
            HashCode::Sha2_256 => 1,
            HashCode::Sha2_512 => 2,
            HashCode::Sha3 => 3,
            HashCode::Blake2b => 4,
            HashCode::Blake2s => 5,
        };
        REGISTRY[idx]
    }
}

impl TryFrom<u64> for HashType {
    type Error = MultihashError;

    fn try_from(code: u64) -> Result<Self> { HashType::from_code(code) }
}

impl FromStr for HashType {
    type Err = MultihashError;

    fn from_str(name: &str) -> Result<Self> { HashType::from_name(name) }
}

impl PartialEq for HashType {
    fn eq(&self, other: &Self) -> bool { self.code == other.code }
}

impl Eq for HashType {}

impl PartialOrd for HashType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for HashType {
    fn cmp(&self, other: &Self) -> Ordering { self.code.value().cmp(&other.code.value()) }
}

impl std::hash::Hash for HashType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) { std::hash::Hash::hash(&self.code, state); }
}

/// All known hash types, ordered by code.
pub fn hash_types() -> &'static BTreeSet<HashType> {
    static ALL: OnceLock<BTreeSet<HashType>> = OnceLock::new();
    ALL.get_or_init(|| REGISTRY.iter().copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lists_six_codes_in_order() {
        let codes = hash_types().iter().map(|t| t.code().value()).collect::<Vec<_>>();
        assert_eq!(codes, vec![0x11, 0x12, 0x13, 0x14, 0x40, 0x41]);
    }

    #[test]
    fn test_registry_table_matches_codes() {
        for t in REGISTRY.iter() {
            assert_eq!(HashType::from(t.code()).name(), t.name());
            assert_eq!(HashType::from_code(t.code().value()).unwrap().size(), t.size());
        }
    }

    #[test]
    fn test_lookup_by_name() {
        let t = HashType::from_name("sha2-256").unwrap();
        assert_eq!(t.code(), HashCode::Sha2_256);
        assert_eq!(t.size(), 32);

        let t: HashType = "blake2s".parse().unwrap();
        assert_eq!(t.code(), HashCode::Blake2s);
    }

    #[test]
    fn test_unknown_name_and_code() {
        assert!(matches!(
            HashType::from_name("md5"),
            Err(MultihashError::InvalidHashKind(_))
        ));
        assert!(matches!(
            HashType::from_name("SHA1"),
            Err(MultihashError::InvalidHashKind(_))
        ));
        assert!(matches!(
            HashType::from_code(0x99),
            Err(MultihashError::InvalidHashKind(_))
        ));
        // 0x111 must not alias 0x11
        assert!(matches!(
            HashType::from_code(0x111),
            Err(MultihashError::InvalidHashKind(_))
        ));
    }

    #[test]
    fn test_equality_independent_of_constructor() {
        for t in hash_types() {
            let by_name = HashType::from_name(t.name()).unwrap();
            let by_code = HashType::try_from(t.code().value()).unwrap();
            assert_eq!(by_name, by_code);
            assert_eq!(by_name, HashType::from(t.code()));
        }
        assert_ne!(
            HashType::from(HashCode::Sha1),
            HashType::from(HashCode::Sha2_256)
        );
    }

    #[test]
    fn test_ordering_follows_code() {
        let sha3 = HashType::from(HashCode::Sha3);
        let blake2b = HashType::from(HashCode::Blake2b);
        assert!(sha3 < blake2b);
        assert!(HashType::from(HashCode::Sha1) < sha3);
    }
}
