use thiserror::Error;

/// A proof that is structurally invalid, independent of any root.
///
/// A well-formed proof that simply does not match is not an error; the
/// verifier reports it as `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProofError {
    #[error("Proof has a total of zero leaves")]
    EmptyTree,

    #[error("Index {index} is out of range for {total} leaves")]
    IndexOutOfRange { index: usize, total: usize },

    #[error("Leaf hash is {actual} bytes, expected {expected}")]
    InvalidLeafHashSize { expected: usize, actual: usize },

    #[error("Aunt #{position} is {actual} bytes, expected {expected}")]
    InvalidAuntSize {
        position: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Proof has {count} aunts, at most {max} are allowed")]
    TooManyAunts { count: usize, max: usize },
}
