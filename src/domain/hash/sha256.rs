use super::HashMethod;
use sha2::{digest::FixedOutput, Digest, Sha256};

/// SHA-256 with the leaf/inner prefixes of [`HashMethod`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha256Prefixed;

impl HashMethod for Sha256Prefixed {
    const SIZE: usize = 32;

    fn hash_parts(parts: &[&[u8]]) -> Vec<u8> {
        let mut hasher = Sha256::new();
        for part in parts {
            hasher.update(part);
        }
        hasher.finalize_fixed().to_vec()
    }
}
