//! Merkle commitment to a key/value map.
//!
//! Each entry becomes one leaf: the key and the plain digest of its value,
//! both uvarint-length-prefixed. Leaves are ordered by key.

use anyhow::Result;
use std::collections::BTreeMap;
use std::marker::PhantomData;

use crate::domain::hash::{sha256::Sha256Prefixed, HashMethod};
use crate::domain::proof::{generate::proofs_from_byte_slices, SimpleProof};
use crate::domain::tree::recursive::hash_from_byte_slices;

/// A key and the digest of its value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KvPair {
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

impl KvPair {
    /// Leaf bytes of this pair.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.key.len() + self.value.len() + 4);
        put_byte_slice(&mut buf, &self.key);
        put_byte_slice(&mut buf, &self.value);
        buf
    }
}

fn put_byte_slice(buf: &mut Vec<u8>, bytes: &[u8]) {
    put_uvarint(buf, bytes.len() as u64);
    buf.extend_from_slice(bytes);
}

fn put_uvarint(buf: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        buf.push((value as u8) | 0x80);
        value >>= 7;
    }
    buf.push(value as u8);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimpleMap<Method: HashMethod = Sha256Prefixed> {
    values: BTreeMap<Vec<u8>, Vec<u8>>,
    method: PhantomData<Method>,
}

impl<Method: HashMethod> Default for SimpleMap<Method> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Method: HashMethod> SimpleMap<Method> {
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
            method: PhantomData,
        }
    }

    /// Insert or replace the entry for `key`. Only the digest of `value` is kept.
    pub fn set(&mut self, key: impl Into<Vec<u8>>, value: &[u8]) {
        self.values.insert(key.into(), Method::hash_plain(value));
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries in leaf order.
    pub fn pairs(&self) -> impl Iterator<Item = KvPair> + '_ {
        self.values.iter().map(|(key, value)| KvPair {
            key: key.clone(),
            value: value.clone(),
        })
    }

    fn leaves(&self) -> Vec<Vec<u8>> {
        self.pairs().map(|pair| pair.encode()).collect()
    }

    /// Root over the sorted entries.
    pub fn hash(&self) -> Vec<u8> {
        hash_from_byte_slices::<Method, _>(&self.leaves())
    }

    /// Root, a proof for every key, and the keys in leaf order.
    ///
    /// The item a key's proof verifies is the encoded [`KvPair`].
    #[allow(clippy::type_complexity)]
    pub fn proofs(&self) -> Result<(Vec<u8>, BTreeMap<Vec<u8>, SimpleProof<Method>>, Vec<Vec<u8>>)> {
        let (root, proofs) = proofs_from_byte_slices::<Method, _>(&self.leaves())?;
        let keys: Vec<Vec<u8>> = self.values.keys().cloned().collect();
        let by_key = keys.iter().cloned().zip(proofs).collect();
        Ok((root, by_key, keys))
    }
}

impl<Method: HashMethod, K: Into<Vec<u8>>, V: AsRef<[u8]>> FromIterator<(K, V)> for SimpleMap<Method> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.set(key, value.as_ref());
        }
        map
    }
}
