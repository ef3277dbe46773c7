use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::Instant;

use super::SimpleProof;
use crate::domain::hash::HashMethod;
use crate::domain::options::BuildOptions;
use crate::domain::tree::shape::{self, Span};

/// Root of `items` and one proof per item, in input order.
pub fn proofs_from_byte_slices<Method, T>(items: &[T]) -> Result<(Vec<u8>, Vec<SimpleProof<Method>>)>
where
    Method: HashMethod,
    T: AsRef<[u8]> + Sync,
{
    proofs_from_byte_slices_with_options(items, &BuildOptions::default())
}

pub fn proofs_from_byte_slices_with_options<Method, T>(
    items: &[T],
    options: &BuildOptions,
) -> Result<(Vec<u8>, Vec<SimpleProof<Method>>)>
where
    Method: HashMethod,
    T: AsRef<[u8]> + Sync,
{
    let total_start = Instant::now();
    let total = items.len();
    if total == 0 {
        return Ok((Method::empty_hash(), Vec::new()));
    }
    let parallel = options.is_parallel(total);

    let leaf_start = Instant::now();
    let leaves: Vec<Vec<u8>> = if parallel {
        items
            .par_iter()
            .map(|item| Method::hash_leaf(item.as_ref()))
            .collect()
    } else {
        items
            .iter()
            .map(|item| Method::hash_leaf(item.as_ref()))
            .collect()
    };
    debug!("Hashing {} leaves took {:?}", total, leaf_start.elapsed());

    let build_start = Instant::now();
    let mut digests = HashMap::with_capacity(2 * total - 1);
    let root = record_subtree::<Method>(&leaves, Span::root(total), &mut digests);
    debug!("Building the tree took {:?}", build_start.elapsed());

    let aunts_start = Instant::now();
    let proofs: Vec<SimpleProof<Method>> = if parallel {
        (0..total)
            .into_par_iter()
            .map(|index| collect_proof::<Method>(index, &leaves, &digests))
            .collect::<Result<_>>()?
    } else {
        (0..total)
            .map(|index| collect_proof::<Method>(index, &leaves, &digests))
            .collect::<Result<_>>()?
    };
    debug!("Collecting aunts took {:?}", aunts_start.elapsed());

    if options.self_check {
        let check_start = Instant::now();
        let check = |(proof, item): (&SimpleProof<Method>, &T)| -> Result<()> {
            let valid = proof
                .verify(&root, item.as_ref())
                .with_context(|| format!("Generated proof {} is malformed", proof.index))?;
            if valid {
                Ok(())
            } else {
                warn!("Proof {} of {} failed its self-check", proof.index, total);
                Err(anyhow!("Proof does not match the Merkle root"))
            }
        };
        if parallel {
            proofs.par_iter().zip(items.par_iter()).try_for_each(check)?;
        } else {
            proofs.iter().zip(items.iter()).try_for_each(check)?;
        }
        debug!("Checking {} proofs took {:?}", total, check_start.elapsed());
    }

    info!(
        "Total duration of proofs_from_byte_slices: {:?}",
        total_start.elapsed()
    );
    Ok((root, proofs))
}

/// Digest of `span`, recording it and every subtree below it in `digests`.
fn record_subtree<Method: HashMethod>(
    leaves: &[Vec<u8>],
    span: Span,
    digests: &mut HashMap<Span, Vec<u8>>,
) -> Vec<u8> {
    let digest = match span.children() {
        None => leaves[span.start].clone(),
        Some((left, right)) => {
            let left_hash = record_subtree::<Method>(leaves, left, digests);
            let right_hash = record_subtree::<Method>(leaves, right, digests);
            Method::hash_nodes(&left_hash, &right_hash)
        }
    };
    digests.insert(span, digest.clone());
    digest
}

fn collect_proof<Method: HashMethod>(
    index: usize,
    leaves: &[Vec<u8>],
    digests: &HashMap<Span, Vec<u8>>,
) -> Result<SimpleProof<Method>> {
    let total = leaves.len();
    let steps = shape::path(index, total)
        .ok_or_else(|| anyhow!("Index {} out of range for {} leaves", index, total))?;

    let aunts = steps
        .iter()
        .map(|step| {
            digests
                .get(&step.sibling)
                .cloned()
                .ok_or_else(|| anyhow!("No digest recorded for subtree {:?}", step.sibling))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SimpleProof::new(total, index, leaves[index].clone(), aunts))
}
