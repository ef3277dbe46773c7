use log::debug;

use super::{ProofError, SimpleProof};
use crate::domain::hash::HashMethod;

impl<Method: HashMethod> SimpleProof<Method> {
    /// Check that `item` is leaf `index` of the `total`-leaf tree with `root`.
    ///
    /// Malformed proofs are an `Err`. A well-formed proof that does not lead
    /// to `root`, including one with the wrong number of aunts, is `Ok(false)`.
    pub fn verify(&self, root: &[u8], item: &[u8]) -> Result<bool, ProofError> {
        self.check_well_formed()?;

        if Method::hash_leaf(item) != self.leaf_hash {
            debug!("Item does not hash to the leaf hash of proof {}", self.index);
            return Ok(false);
        }

        match self.compute_root_hash() {
            Some(computed) => Ok(computed == root),
            None => {
                debug!(
                    "Proof {} of {} carries {} aunts, which does not match the tree shape",
                    self.index,
                    self.total,
                    self.aunts.len()
                );
                Ok(false)
            }
        }
    }
}
