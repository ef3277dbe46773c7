use log::debug;
use std::time::Instant;

use super::split_point;
use crate::domain::hash::HashMethod;

/// Root of the tree over `items`, computed by splitting recursively.
///
/// This is the reference definition every other builder must match.
pub fn hash_from_byte_slices<Method: HashMethod, T: AsRef<[u8]>>(items: &[T]) -> Vec<u8> {
    match items.len() {
        0 => Method::empty_hash(),
        1 => Method::hash_leaf(items[0].as_ref()),
        length => {
            let k = split_point(length);
            let left = hash_from_byte_slices::<Method, T>(&items[..k]);
            let right = hash_from_byte_slices::<Method, T>(&items[k..]);
            Method::hash_nodes(&left, &right)
        }
    }
}

/// Same root as [`hash_from_byte_slices`], with both halves of every subtree
/// larger than `threshold` items built on the rayon pool.
pub fn par_hash_from_byte_slices<Method, T>(items: &[T], threshold: usize) -> Vec<u8>
where
    Method: HashMethod,
    T: AsRef<[u8]> + Sync,
{
    let start = Instant::now();
    let root = par_subtree::<Method, T>(items, threshold.max(1));
    debug!(
        "Parallel build over {} items took {:?}",
        items.len(),
        start.elapsed()
    );
    root
}

fn par_subtree<Method, T>(items: &[T], threshold: usize) -> Vec<u8>
where
    Method: HashMethod,
    T: AsRef<[u8]> + Sync,
{
    if items.len() <= threshold {
        return hash_from_byte_slices::<Method, T>(items);
    }

    let k = split_point(items.len());
    let (left, right) = rayon::join(
        || par_subtree::<Method, T>(&items[..k], threshold),
        || par_subtree::<Method, T>(&items[k..], threshold),
    );
    Method::hash_nodes(&left, &right)
}
