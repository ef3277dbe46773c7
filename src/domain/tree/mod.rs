pub mod iterative;
pub mod recursive;
pub mod shape;

/// Size of the left subtree when `length` leaves are arranged into a tree.
///
/// This is the largest power of two strictly less than `length`, so the left
/// subtree is always perfect and the right one takes the remainder. A single
/// leaf has no split and yields 0.
///
/// Panics when `length` is 0.
pub fn split_point(length: usize) -> usize {
    assert!(length > 0, "Cannot split an empty tree");
    if length == 1 {
        return 0;
    }
    1 << (length - 1).ilog2()
}
