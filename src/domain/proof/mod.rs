use itertools::Itertools;
use std::fmt;
use std::marker::PhantomData;

use crate::domain::hash::{sha256::Sha256Prefixed, HashMethod};
use crate::domain::tree::shape::{self, Side};

pub mod error;
pub mod generate;
pub mod verify;

pub use error::ProofError;

/// Upper bound on the aunts a proof may carry.
pub const MAX_AUNTS: usize = 100;

/// Inclusion proof for the leaf at `index` of a `total`-leaf tree.
///
/// `aunts` are the sibling digests met on the way from the leaf to the root,
/// ordered leaf-to-root. Their order is significant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimpleProof<Method: HashMethod = Sha256Prefixed> {
    pub total: usize,
    pub index: usize,
    pub leaf_hash: Vec<u8>,
    pub aunts: Vec<Vec<u8>>,
    method: PhantomData<Method>,
}

impl<Method: HashMethod> SimpleProof<Method> {
    pub fn new(total: usize, index: usize, leaf_hash: Vec<u8>, aunts: Vec<Vec<u8>>) -> Self {
        Self {
            total,
            index,
            leaf_hash,
            aunts,
            method: PhantomData,
        }
    }

    /// Structural checks that need no root.
    pub fn validate_basic(&self) -> Result<(), ProofError> {
        self.check_well_formed()?;
        if self.aunts.len() > MAX_AUNTS {
            return Err(ProofError::TooManyAunts {
                count: self.aunts.len(),
                max: MAX_AUNTS,
            });
        }
        Ok(())
    }

    /// Position and digest widths. The number of aunts is left to the
    /// verifier, where a mismatch is a rejection rather than an error.
    fn check_well_formed(&self) -> Result<(), ProofError> {
        if self.total == 0 {
            return Err(ProofError::EmptyTree);
        }
        if self.index >= self.total {
            return Err(ProofError::IndexOutOfRange {
                index: self.index,
                total: self.total,
            });
        }
        if self.leaf_hash.len() != Method::SIZE {
            return Err(ProofError::InvalidLeafHashSize {
                expected: Method::SIZE,
                actual: self.leaf_hash.len(),
            });
        }
        if let Some((position, aunt)) = self
            .aunts
            .iter()
            .find_position(|aunt| aunt.len() != Method::SIZE)
        {
            return Err(ProofError::InvalidAuntSize {
                position,
                expected: Method::SIZE,
                actual: aunt.len(),
            });
        }
        Ok(())
    }

    /// Root implied by `leaf_hash` and `aunts`.
    ///
    /// `None` when `(index, total)` has no path or the number of aunts does
    /// not match its length.
    pub fn compute_root_hash(&self) -> Option<Vec<u8>> {
        let steps = shape::path(self.index, self.total)?;
        if steps.len() != self.aunts.len() {
            return None;
        }

        Some(
            steps
                .iter()
                .zip(&self.aunts)
                .fold(self.leaf_hash.clone(), |hash, (step, aunt)| match step.side {
                    Side::Left => Method::hash_nodes(&hash, aunt),
                    Side::Right => Method::hash_nodes(aunt, &hash),
                }),
        )
    }

    /// Multi-line dump with every line prefixed by `indent`.
    pub fn string_indented(&self, indent: &str) -> String {
        let aunts = self
            .aunts
            .iter()
            .map(|aunt| format!("{indent}    0x{}\n", hex::encode(aunt)))
            .join("");
        format!(
            "SimpleProof{{\n\
             {indent}  Total:    {}\n\
             {indent}  Index:    {}\n\
             {indent}  LeafHash: 0x{}\n\
             {indent}  Aunts: [\n{aunts}\
             {indent}  ]\n\
             {indent}}}",
            self.total,
            self.index,
            hex::encode(&self.leaf_hash),
        )
    }
}

impl<Method: HashMethod> fmt::Display for SimpleProof<Method> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string_indented(""))
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::hash::{sha256::Sha256Prefixed, HashMethod};
    use crate::domain::proof::{ProofError, SimpleProof, MAX_AUNTS};

    type H = Sha256Prefixed;

    fn three_leaf_proof() -> (SimpleProof<H>, Vec<u8>) {
        // Leaf "a" of [a, b, c]: sibling b, then leaf c.
        let a = H::hash_leaf(b"a");
        let b = H::hash_leaf(b"b");
        let c = H::hash_leaf(b"c");
        let root = H::hash_nodes(&H::hash_nodes(&a, &b), &c);
        (SimpleProof::new(3, 0, a, vec![b, c]), root)
    }

    #[test]
    fn test_compute_root_hash_walks_the_shape() {
        let (proof, root) = three_leaf_proof();
        assert_eq!(proof.compute_root_hash(), Some(root));
    }

    #[test]
    fn test_compute_root_hash_on_the_right_edge() {
        let a = H::hash_leaf(b"a");
        let b = H::hash_leaf(b"b");
        let c = H::hash_leaf(b"c");
        let ab = H::hash_nodes(&a, &b);
        let root = H::hash_nodes(&ab, &c);

        let proof = SimpleProof::<H>::new(3, 2, c, vec![ab]);
        assert_eq!(proof.compute_root_hash(), Some(root));
    }

    #[test]
    fn test_compute_root_hash_rejects_wrong_trail_length() {
        let (mut proof, _) = three_leaf_proof();
        proof.aunts.pop();
        assert_eq!(proof.compute_root_hash(), None);

        let (mut proof, _) = three_leaf_proof();
        proof.aunts.push(H::hash_leaf(b"extra"));
        assert_eq!(proof.compute_root_hash(), None);
    }

    #[test]
    fn test_validate_basic_accepts_well_formed_proof() {
        let (proof, _) = three_leaf_proof();
        assert_eq!(proof.validate_basic(), Ok(()));
    }

    #[test]
    fn test_validate_basic_errors() {
        let leaf = H::hash_leaf(b"a");

        let proof = SimpleProof::<H>::new(0, 0, leaf.clone(), vec![]);
        assert_eq!(proof.validate_basic(), Err(ProofError::EmptyTree));

        let proof = SimpleProof::<H>::new(2, 2, leaf.clone(), vec![leaf.clone()]);
        assert_eq!(
            proof.validate_basic(),
            Err(ProofError::IndexOutOfRange { index: 2, total: 2 })
        );

        let proof = SimpleProof::<H>::new(2, 0, vec![0u8; 31], vec![leaf.clone()]);
        assert_eq!(
            proof.validate_basic(),
            Err(ProofError::InvalidLeafHashSize {
                expected: 32,
                actual: 31
            })
        );

        let proof = SimpleProof::<H>::new(4, 0, leaf.clone(), vec![leaf.clone(), vec![1u8; 33]]);
        assert_eq!(
            proof.validate_basic(),
            Err(ProofError::InvalidAuntSize {
                position: 1,
                expected: 32,
                actual: 33
            })
        );

        let proof = SimpleProof::<H>::new(4, 0, leaf.clone(), vec![leaf; MAX_AUNTS + 1]);
        assert_eq!(
            proof.validate_basic(),
            Err(ProofError::TooManyAunts {
                count: MAX_AUNTS + 1,
                max: MAX_AUNTS
            })
        );
    }

    #[test]
    fn test_display_lists_every_aunt_in_hex() {
        let (proof, _) = three_leaf_proof();
        let rendered = proof.to_string();

        assert!(rendered.starts_with("SimpleProof{"));
        assert!(rendered.contains("Total:    3"));
        assert!(rendered.contains("Index:    0"));
        assert!(rendered.contains(&format!("0x{}", hex::encode(&proof.leaf_hash))));
        for aunt in &proof.aunts {
            assert!(rendered.contains(&format!("    0x{}", hex::encode(aunt))));
        }
        assert!(rendered.ends_with('}'));

        let indented = proof.string_indented("  ");
        assert!(indented.contains("\n    Total:    3"));
    }

    #[test]
    fn test_display_without_aunts_has_no_blank_line() {
        let proof = SimpleProof::<H>::new(1, 0, H::hash_leaf(b"only"), vec![]);
        let rendered = proof.to_string();

        assert!(rendered.contains("Aunts: [\n  ]"));
        assert!(!rendered.contains("\n\n"));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ProofError::IndexOutOfRange { index: 7, total: 3 }.to_string(),
            "Index 7 is out of range for 3 leaves"
        );
    }
}
