use std::marker::PhantomData;

use crate::domain::hash::HashMethod;

/// A finished subtree waiting for its right-hand sibling.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Pending {
    size: usize,
    digest: Vec<u8>,
}

/// Computes a root one item at a time, without recursion.
///
/// The stack holds finished subtrees whose sizes are strictly decreasing
/// powers of two. Pushing a leaf merges the two top entries while they have
/// equal size, which is exactly the frame of the recursive builder that
/// combines a perfect left subtree with its equal right subtree. Folding the
/// remaining stack from the right reproduces the splits of the larger,
/// non-perfect subtrees.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootCalculator<Method: HashMethod> {
    stack: Vec<Pending>,
    pushed: usize,
    method: PhantomData<Method>,
}

impl<Method: HashMethod> Default for RootCalculator<Method> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Method: HashMethod> RootCalculator<Method> {
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            pushed: 0,
            method: PhantomData,
        }
    }

    /// Number of items pushed so far.
    pub fn len(&self) -> usize {
        self.pushed
    }

    pub fn is_empty(&self) -> bool {
        self.pushed == 0
    }

    pub fn push(&mut self, item: &[u8]) {
        self.pushed += 1;
        self.stack.push(Pending {
            size: 1,
            digest: Method::hash_leaf(item),
        });

        while let [.., left, right] = self.stack.as_slice() {
            if left.size != right.size {
                break;
            }
            let merged = Pending {
                size: left.size + right.size,
                digest: Method::hash_nodes(&left.digest, &right.digest),
            };
            self.stack.truncate(self.stack.len() - 2);
            self.stack.push(merged);
        }
    }

    /// Root over every item pushed so far.
    pub fn root(&self) -> Vec<u8> {
        let mut pending = self.stack.iter().rev();
        let Some(last) = pending.next() else {
            return Method::empty_hash();
        };
        pending.fold(last.digest.clone(), |right, left| {
            Method::hash_nodes(&left.digest, &right)
        })
    }
}

/// Root of the tree over `items`, computed bottom-up in a single pass.
pub fn hash_from_byte_slices_iterative<Method: HashMethod, T: AsRef<[u8]>>(items: &[T]) -> Vec<u8> {
    let mut calculator = RootCalculator::<Method>::new();
    for item in items {
        calculator.push(item.as_ref());
    }
    calculator.root()
}
