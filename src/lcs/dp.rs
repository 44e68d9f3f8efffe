//! Full-matrix LCS reconstruction.

use crate::decode::code_points;
use crate::matches::{MatchRun, RunBuilder};
use crate::trim::trim_common;

/// LCS alignment from the full dynamic-programming table.
///
/// Builds the complete (N+1)×(M+1) table and recovers a canonical alignment:
/// on ties the walk advances along the `b` axis before the `a` axis, so the
/// reported positions are stable across runs. Time O(N·M), space O(N·M);
/// intended for operand sizes where the full table is affordable and a
/// deterministic alignment matters.
pub fn lcs_dp(a: &str, b: &str) -> Vec<MatchRun> {
    let av = code_points(a.as_bytes());
    let bv = code_points(b.as_bytes());
    if av.len() < bv.len() {
        let mut runs = dp_runs(&bv, &av);
        for r in &mut runs {
            *r = r.swapped();
        }
        runs
    } else {
        dp_runs(&av, &bv)
    }
}

/// Expects `a.len() >= b.len()`.
fn dp_runs(a: &[u32], b: &[u32]) -> Vec<MatchRun> {
    let t = trim_common(a, b);
    let prefix = t.prefix as u32;
    let (a, b) = (t.a, t.b);
    let (n, m) = (a.len(), b.len());

    let mut acc = RunBuilder::new();
    acc.push_run(0, 0, prefix);
    if n == 0 || m == 0 {
        acc.push_run(prefix + n as u32, prefix + m as u32, t.suffix as u32);
        return acc.finish();
    }

    // Suffix-oriented table in one contiguous buffer:
    // table[i * width + j] = LCS(a[i..], b[j..]).
    let width = m + 1;
    let mut table = vec![0u32; (n + 1) * width];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            table[i * width + j] = if a[i] == b[j] {
                table[(i + 1) * width + j + 1] + 1
            } else {
                table[i * width + j + 1].max(table[(i + 1) * width + j])
            };
        }
    }

    // Walk from (0,0) towards (n,m); on a tie the j move is taken first.
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if a[i] == b[j] {
            acc.push_pair(prefix + i as u32, prefix + j as u32);
            i += 1;
            j += 1;
        } else if table[i * width + j] == table[i * width + j + 1] {
            j += 1;
        } else {
            i += 1;
        }
    }

    acc.push_run(prefix + n as u32, prefix + m as u32, t.suffix as u32);
    acc.finish()
}
