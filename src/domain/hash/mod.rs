use std::fmt::Debug;

pub mod sha256;

/// Tag prepended to item bytes before hashing a leaf.
pub const LEAF_PREFIX: u8 = 0x00;

/// Tag prepended to the two child digests before hashing an inner node.
pub const INNER_PREFIX: u8 = 0x01;

/// The hash primitive a tree is built with.
///
/// Implementors only provide [`HashMethod::hash_parts`]; leaf and node hashing
/// are fixed on top of it so every instance gets the same domain separation:
///
/// - empty tree: `H("")`
/// - leaf: `H(0x00 || item)`
/// - inner node: `H(0x01 || left || right)`
pub trait HashMethod: Clone + Copy + Debug + Default + PartialEq + Eq + Send + Sync + 'static {
    /// Width in bytes of every digest this method produces.
    const SIZE: usize;

    /// Digest of the concatenation of `parts`.
    fn hash_parts(parts: &[&[u8]]) -> Vec<u8>;

    /// Unprefixed digest of `data`.
    fn hash_plain(data: &[u8]) -> Vec<u8> {
        Self::hash_parts(&[data])
    }

    /// Hash a leaf's data.
    fn hash_leaf(data: &[u8]) -> Vec<u8> {
        Self::hash_parts(&[&[LEAF_PREFIX][..], data])
    }

    /// Hash two child nodes together.
    fn hash_nodes(left: &[u8], right: &[u8]) -> Vec<u8> {
        Self::hash_parts(&[&[INNER_PREFIX][..], left, right])
    }

    /// Root of a tree without leaves.
    fn empty_hash() -> Vec<u8> {
        Self::hash_parts(&[])
    }
}
