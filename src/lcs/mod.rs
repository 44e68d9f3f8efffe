//! Longest Common Subsequence engines.
//!
//! Four algorithms with different space/time/output trade-offs:
//! - [`length`]     : length only, as a rolling-row DP or a reduction to
//!   Longest Increasing Subsequence over a position-index map.
//! - [`dp`]         : full-matrix reconstruction with a canonical tie-break.
//! - [`hirschberg`] : divide-and-conquer reconstruction in linear space.
//! - [`myers`]      : bidirectional middle-snake reconstruction, O((N+M)D).
//!
//! All reconstruction variants agree on the LCS length; the alignments they
//! report may differ where several are optimal.

pub mod dp;
pub mod hirschberg;
pub mod length;
pub mod myers;

pub use dp::lcs_dp;
pub use hirschberg::lcs_hirschberg;
pub use length::{lcs_length, lcs_length_map};
pub use myers::lcs_myers;
