pub mod hash;
pub mod map;
pub mod options;
pub mod proof;
pub mod tree;

#[cfg(test)]
pub(crate) mod test_helpers;
