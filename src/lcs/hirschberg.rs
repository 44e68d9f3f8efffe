//! Linear-space LCS reconstruction (Hirschberg).

use crate::decode::code_points;
use crate::matches::{MatchRun, RunBuilder};
use crate::trim::trim_common;

/// LCS alignment by divide and conquer over two length-only DP rows.
///
/// Time O(N·M), space O(min(N, M)). The alignment is optimal but may differ
/// from the one [`lcs_dp`](crate::lcs::dp::lcs_dp) reports when several
/// alignments are optimal.
pub fn lcs_hirschberg(a: &str, b: &str) -> Vec<MatchRun> {
    let av = code_points(a.as_bytes());
    let bv = code_points(b.as_bytes());
    if av.len() < bv.len() {
        let mut runs = hirschberg_runs(&bv, &av);
        for r in &mut runs {
            *r = r.swapped();
        }
        runs
    } else {
        hirschberg_runs(&av, &bv)
    }
}

/// Expects `a.len() >= b.len()`.
fn hirschberg_runs(a: &[u32], b: &[u32]) -> Vec<MatchRun> {
    let t = trim_common(a, b);
    let prefix = t.prefix as u32;
    let (a, b) = (t.a, t.b);
    let (n, m) = (a.len(), b.len());

    let mut acc = RunBuilder::new();
    acc.push_run(0, 0, prefix);
    if m == 0 {
        acc.push_run(prefix + n as u32, prefix + m as u32, t.suffix as u32);
        return acc.finish();
    }

    let mut left = vec![0u32; m + 1];
    let mut right = vec![0u32; m + 1];
    let mut pairs: Vec<(u32, u32)> = Vec::with_capacity(m);
    solve(a, b, 0, 0, &mut left, &mut right, &mut pairs);

    for &(i, j) in &pairs {
        acc.push_pair(prefix + i, prefix + j);
    }
    acc.push_run(prefix + n as u32, prefix + m as u32, t.suffix as u32);
    acc.finish()
}

/// Recursive split. `a` and `b` are the current sub-slices; `a_off`/`b_off`
/// locate them within the trimmed operands. Matched pairs are appended in
/// strictly increasing order of both coordinates.
fn solve(
    a: &[u32],
    b: &[u32],
    a_off: usize,
    b_off: usize,
    left: &mut [u32],
    right: &mut [u32],
    pairs: &mut Vec<(u32, u32)>,
) {
    if b.is_empty() {
        return;
    }
    if a.len() == 1 {
        if let Some(p) = b.iter().position(|&c| c == a[0]) {
            pairs.push((a_off as u32, (b_off + p) as u32));
        }
        return;
    }

    let mid = a.len() / 2;
    let m = b.len();
    forward_row(&a[..mid], b, left);
    reverse_row(&a[mid..], b, right);

    // Split column maximizing forward + reverse coverage; strict comparison
    // keeps the smallest such column. The rows are zeroed here for reuse.
    let mut split = 0;
    let mut best = 0;
    for (j, (l, r)) in left[..=m].iter_mut().zip(right[..=m].iter_mut()).enumerate() {
        let sum = *l + *r;
        if sum > best {
            best = sum;
            split = j;
        }
        *l = 0;
        *r = 0;
    }

    solve(&a[..mid], &b[..split], a_off, b_off, left, right, pairs);
    solve(
        &a[mid..],
        &b[split..],
        a_off + mid,
        b_off + split,
        left,
        right,
        pairs,
    );
}

/// `row[j] = LCS(a, b[..j])` for all `j`. Expects `row[..=b.len()]` zeroed.
fn forward_row(a: &[u32], b: &[u32], row: &mut [u32]) {
    for &ca in a {
        let mut top_left = 0;
        for (j, &cb) in b.iter().enumerate() {
            let temp = row[j + 1];
            row[j + 1] = if ca == cb {
                top_left + 1
            } else {
                row[j + 1].max(row[j])
            };
            top_left = temp;
        }
    }
}

/// `row[j] = LCS(a, b[j..])` for all `j`. Expects `row[..=b.len()]` zeroed.
fn reverse_row(a: &[u32], b: &[u32], row: &mut [u32]) {
    let m = b.len();
    for &ca in a.iter().rev() {
        let mut bottom_right = 0;
        for j in (0..m).rev() {
            let temp = row[j];
            row[j] = if ca == b[j] {
                bottom_right + 1
            } else {
                row[j].max(row[j + 1])
            };
            bottom_right = temp;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total_len(runs: &[MatchRun]) -> u32 {
        runs.iter().map(|r| r.len).sum()
    }

    #[test]
    fn classic_pair_total() {
        assert_eq!(total_len(&lcs_hirschberg("ABCBDAB", "BDCABA")), 4);
        assert_eq!(total_len(&lcs_hirschberg("BDCABA", "ABCBDAB")), 4);
    }

    #[test]
    fn identical_operands_single_run() {
        assert_eq!(
            lcs_hirschberg("abcdef", "abcdef"),
            vec![MatchRun::new(0, 0, 6)]
        );
    }

    #[test]
    fn empty_operand_returns_nothing() {
        assert!(lcs_hirschberg("", "xyz").is_empty());
        assert!(lcs_hirschberg("xyz", "").is_empty());
    }

    #[test]
    fn multibyte_alignment_positions() {
        let runs = lcs_hirschberg("αβγδε", "αγε");
        assert_eq!(
            runs,
            vec![
                MatchRun::new(0, 0, 1),
                MatchRun::new(2, 1, 1),
                MatchRun::new(4, 2, 1),
            ]
        );
    }

    #[test]
    fn forward_and_reverse_rows_agree_on_totals() {
        let a: Vec<u32> = "GAC".chars().map(|c| c as u32).collect();
        let b: Vec<u32> = "AGCAT".chars().map(|c| c as u32).collect();
        let mut fwd = vec![0u32; b.len() + 1];
        let mut rev = vec![0u32; b.len() + 1];
        forward_row(&a, &b, &mut fwd);
        reverse_row(&a, &b, &mut rev);
        // Full-operand entries both hold the LCS length.
        assert_eq!(fwd[b.len()], 2);
        assert_eq!(rev[0], 2);
    }

    #[test]
    fn no_common_symbol() {
        assert!(lcs_hirschberg("abc", "xyz").is_empty());
    }
}
