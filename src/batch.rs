//! Batch application of one primitive between a query and many candidates.
//!
//! The only component of the crate that spawns work. Candidates are split
//! into contiguous index chunks of size `ceil(n / workers)`; each worker
//! fills a disjoint region of the pre-sized result vector, so output order
//! matches candidate order regardless of completion order, and the dispatch
//! joins before returning. With the `parallel` feature the chunks run on
//! rayon; without it each chunk gets its own scoped OS thread.

use crate::distance::edit_distance;
use crate::lcs::length::{lcs_length, lcs_length_map};
use crate::substring::substring_length;

/// LCS length of `q` against every candidate, in candidate order.
///
/// `transform` selects the LIS-based algorithm over the rolling-row DP.
/// `workers <= 1` computes sequentially.
pub fn lcs_length_batch<S: AsRef<str> + Sync>(
    q: &str,
    candidates: &[S],
    transform: bool,
    workers: usize,
) -> Vec<u32> {
    if transform {
        dispatch(candidates, workers, |c| lcs_length_map(q, c))
    } else {
        dispatch(candidates, workers, |c| lcs_length(q, c))
    }
}

/// Longest-common-substring length of `q` against every candidate.
pub fn substring_length_batch<S: AsRef<str> + Sync>(
    q: &str,
    candidates: &[S],
    workers: usize,
) -> Vec<u32> {
    dispatch(candidates, workers, |c| substring_length(q, c))
}

/// Edit distance of `q` against every candidate.
pub fn edit_distance_batch<S: AsRef<str> + Sync>(
    q: &str,
    candidates: &[S],
    workers: usize,
) -> Vec<u32> {
    dispatch(candidates, workers, |c| edit_distance(q, c))
}

fn dispatch<S, F>(candidates: &[S], workers: usize, op: F) -> Vec<u32>
where
    S: AsRef<str> + Sync,
    F: Fn(&str) -> u32 + Sync,
{
    let n = candidates.len();
    if n == 0 {
        return Vec::new();
    }

    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("batch_dispatch", candidates = n, workers);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut results = vec![0u32; n];
    if workers <= 1 {
        for (slot, candidate) in results.iter_mut().zip(candidates) {
            *slot = op(candidate.as_ref());
        }
        return results;
    }

    let chunk = n.div_ceil(workers);
    run_chunks(&mut results, candidates, chunk, &op);
    results
}

#[cfg(feature = "parallel")]
fn run_chunks<S, F>(results: &mut [u32], candidates: &[S], chunk: usize, op: &F)
where
    S: AsRef<str> + Sync,
    F: Fn(&str) -> u32 + Sync,
{
    use rayon::prelude::*;

    results
        .par_chunks_mut(chunk)
        .zip(candidates.par_chunks(chunk))
        .for_each(|(slots, chunk_candidates)| {
            for (slot, candidate) in slots.iter_mut().zip(chunk_candidates) {
                *slot = op(candidate.as_ref());
            }
        });
}

#[cfg(not(feature = "parallel"))]
fn run_chunks<S, F>(results: &mut [u32], candidates: &[S], chunk: usize, op: &F)
where
    S: AsRef<str> + Sync,
    F: Fn(&str) -> u32 + Sync,
{
    std::thread::scope(|scope| {
        for (slots, chunk_candidates) in results.chunks_mut(chunk).zip(candidates.chunks(chunk)) {
            scope.spawn(move || {
                for (slot, candidate) in slots.iter_mut().zip(chunk_candidates) {
                    *slot = op(candidate.as_ref());
                }
            });
        }
    });
}
