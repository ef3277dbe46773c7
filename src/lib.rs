#![deny(clippy::all)]

//! Binary Merkle trees over ordered byte items.
//!
//! Leaves and inner nodes are hashed with distinct prefixes, trees of any
//! size have one deterministic shape, and every item can be proven with a
//! [`SimpleProof`] checked against the root alone.

mod domain;

pub use domain::hash::{sha256::Sha256Prefixed, HashMethod, INNER_PREFIX, LEAF_PREFIX};
pub use domain::map::{KvPair, SimpleMap};
pub use domain::options::BuildOptions;
pub use domain::proof::{
    generate::{proofs_from_byte_slices, proofs_from_byte_slices_with_options},
    ProofError, SimpleProof, MAX_AUNTS,
};
pub use domain::tree::{
    iterative::{hash_from_byte_slices_iterative, RootCalculator},
    recursive::{hash_from_byte_slices, par_hash_from_byte_slices},
    shape, split_point,
};
