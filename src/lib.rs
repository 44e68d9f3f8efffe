//! Sequence-similarity primitives over Unicode text.
//!
//! This crate computes Longest Common Subsequence (length only, with
//! alignment positions, and the contiguous-substring variant) and Levenshtein
//! edit distance (exact and bounded) between UTF-8 strings. Comparison is at
//! code-point granularity: operands are decoded once, equal ends are trimmed,
//! and the inner slices go to one of several engines with different
//! space/time trade-offs.
//!
//! ## Quick start
//! ```
//! let len = seqsim::lcs_length("ABCBDAB", "BDCABA");
//! assert_eq!(len, 4);
//!
//! let runs = seqsim::lcs_hirschberg("αβγδε", "αγε");
//! let total: u32 = runs.iter().map(|r| r.len).sum();
//! assert_eq!(total, 3);
//!
//! assert_eq!(seqsim::edit_distance("kitten", "sitting"), 3);
//! assert_eq!(seqsim::edit_distance_bounded("kitten", "sitting", 2), 2);
//! ```
//!
//! ## Choosing an engine
//! - [`lcs_length`] / [`lcs_length_map`]: length only; the map variant wins
//!   on small effective alphabets and loses on highly repetitive input.
//! - [`lcs_dp`]: full-matrix reconstruction with a deterministic tie-break;
//!   use when the quadratic table is affordable and stable positions matter.
//! - [`lcs_hirschberg`]: same asymptotic time in linear space.
//! - [`lcs_myers`]: O((N+M)D); fastest when the operands are similar.
//! - [`substring_dp`] / [`substring_diag`]: longest common substring.
//! - [`edit_distance`] / [`edit_distance_bounded`]: Levenshtein distance,
//!   the bounded form returning `min(distance, k)` in O(k·min(N, M)).
//!
//! Positions in [`MatchRun`] results are code-point indices against the
//! caller's argument order; internal operand reordering is never visible.
//!
//! ## Batch fan-out
//! The [`batch`] module applies one primitive between a query and a list of
//! candidates, optionally across worker threads (rayon under the `parallel`
//! feature, scoped OS threads without it). Results are in candidate order
//! for every worker count.
//!
//! All other components are pure functions over their inputs: no shared
//! state, no I/O, scratch buffers live for a single call.

pub mod batch;
pub mod decode;
pub mod distance;
pub mod lcs;
pub mod matches;
pub mod substring;
pub mod trim;

pub use crate::batch::{edit_distance_batch, lcs_length_batch, substring_length_batch};
pub use crate::distance::{edit_distance, edit_distance_bounded};
pub use crate::lcs::{lcs_dp, lcs_hirschberg, lcs_length, lcs_length_map, lcs_myers};
pub use crate::matches::MatchRun;
pub use crate::substring::{substring_diag, substring_dp, substring_length};
