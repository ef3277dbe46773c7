//! Navigation over the implicit tree shape.
//!
//! The shape of a tree depends only on its leaf count, so a leaf's path can
//! be derived from `(index, total)` without the items. Proof generation and
//! proof verification both walk the tree through [`path`].

use super::split_point;

/// Which child of its parent a node is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// The contiguous leaf range `[start, start + size)` covered by one node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub size: usize,
}

impl Span {
    /// The root node of a tree with `total` leaves.
    pub fn root(total: usize) -> Self {
        Self {
            start: 0,
            size: total,
        }
    }

    pub fn end(&self) -> usize {
        self.start + self.size
    }

    /// Left and right children, or `None` for a leaf or an empty span.
    pub fn children(&self) -> Option<(Span, Span)> {
        if self.size < 2 {
            return None;
        }
        let k = split_point(self.size);
        Some((
            Span {
                start: self.start,
                size: k,
            },
            Span {
                start: self.start + k,
                size: self.size - k,
            },
        ))
    }
}

/// One level of a leaf's path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// Side of the node on the path at this level.
    pub side: Side,
    /// The subtree hanging off the path at this level.
    pub sibling: Span,
}

/// Path from leaf `index` up to the root of a `total`-leaf tree, ordered
/// leaf-to-root. Its length is the depth of the leaf.
///
/// Returns `None` when `index >= total`.
pub fn path(index: usize, total: usize) -> Option<Vec<Step>> {
    if index >= total {
        return None;
    }

    let mut steps = Vec::new();
    let mut node = Span::root(total);
    while let Some((left, right)) = node.children() {
        if index < left.end() {
            steps.push(Step {
                side: Side::Left,
                sibling: right,
            });
            node = left;
        } else {
            steps.push(Step {
                side: Side::Right,
                sibling: left,
            });
            node = right;
        }
    }
    steps.reverse();
    Some(steps)
}
