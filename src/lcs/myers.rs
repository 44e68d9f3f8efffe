//! Bidirectional middle-snake LCS reconstruction (Myers).

use crate::decode::code_points;
use crate::matches::{MatchRun, RunBuilder};

/// LCS alignment via the O((N+M)D) greedy diff algorithm.
///
/// Forward paths from the top-left corner and reverse paths from the
/// bottom-right are extended alternately until they overlap on a diagonal;
/// the meeting point splits the rectangle and the two halves are solved
/// recursively. Fast when the operands are similar (small D). Works on the
/// caller's operand order directly.
pub fn lcs_myers(a: &str, b: &str) -> Vec<MatchRun> {
    let av = code_points(a.as_bytes());
    let bv = code_points(b.as_bytes());
    if av.is_empty() || bv.is_empty() {
        return Vec::new();
    }
    // One slot per diagonal of the full rectangle; sub-rectangles reuse the
    // prefix they need. The extra slot keeps the seed index in range for the
    // smallest rectangles.
    let slots = av.len() + bv.len() + 2;
    let mut down = vec![-1isize; slots];
    let mut up = vec![-1isize; slots];

    let mut acc = RunBuilder::new();
    split_rectangle(
        &av,
        0,
        av.len(),
        &bv,
        0,
        bv.len(),
        &mut down,
        &mut up,
        &mut acc,
    );
    acc.finish()
}

/// Solve the rectangle `a[a0..a1] × b[b0..b1]`: strip its common prefix and
/// suffix, emit them as runs, and find a middle snake for the rest.
#[allow(clippy::too_many_arguments)]
fn split_rectangle(
    a: &[u32],
    mut a0: usize,
    mut a1: usize,
    b: &[u32],
    mut b0: usize,
    mut b1: usize,
    down: &mut [isize],
    up: &mut [isize],
    acc: &mut RunBuilder,
) {
    let start = a0;
    let end = a1;
    while a0 < a1 && b0 < b1 && a[a0] == b[b0] {
        a0 += 1;
        b0 += 1;
    }
    while a0 < a1 && b0 < b1 && a[a1 - 1] == b[b1 - 1] {
        a1 -= 1;
        b1 -= 1;
    }

    let p = a0 - start;
    if p > 0 {
        acc.push_run(start as u32, (b0 - p) as u32, p as u32);
    }
    middle_snake(a, a0, a1, b, b0, b1, down, up, acc);
    let s = end - a1;
    if s > 0 {
        acc.push_run(a1 as u32, b1 as u32, s as u32);
    }
}

/// Locate a middle snake of the (already trimmed) rectangle and recurse on
/// the sub-rectangles around it.
///
/// Fast path: when one slice occurs contiguously inside the other, that
/// occurrence is the entire answer for this rectangle.
#[allow(clippy::too_many_arguments)]
fn middle_snake(
    a: &[u32],
    a0: usize,
    a1: usize,
    b: &[u32],
    b0: usize,
    b1: usize,
    down: &mut [isize],
    up: &mut [isize],
    acc: &mut RunBuilder,
) {
    if a0 == a1 || b0 == b1 {
        return;
    }
    let n = (a1 - a0) as isize;
    let m = (b1 - b0) as isize;

    if n > m {
        if let Some(p) = find_contiguous(&a[a0..a1], &b[b0..b1]) {
            acc.push_run((a0 + p) as u32, b0 as u32, m as u32);
            return;
        }
        if m == 1 {
            return;
        }
    } else {
        if let Some(p) = find_contiguous(&b[b0..b1], &a[a0..a1]) {
            acc.push_run(a0 as u32, (b0 + p) as u32, n as u32);
            return;
        }
        if n == 1 {
            return;
        }
    }

    let d_max = (n + m + 1) / 2;
    let len = d_max * 2;
    for slot in 0..len as usize {
        down[slot] = -1;
        up[slot] = -1;
    }
    down[(d_max + 1) as usize] = 0;
    up[(d_max + 1) as usize] = 0;

    let delta = n - m;
    let front = delta % 2 != 0;
    // Diagonal windows shrink when a path runs off either edge.
    let (mut d1, mut d2) = (0isize, 0isize);
    let (mut u1, mut u2) = (0isize, 0isize);

    for d in 0..d_max {
        // Forward paths from (0, 0).
        let mut k = -d + d1;
        while k <= d - d2 {
            let k1 = (d_max + k) as usize;
            let mut x = if k == -d || (k != d && down[k1 - 1] < down[k1 + 1]) {
                down[k1 + 1]
            } else {
                down[k1 - 1] + 1
            };
            let mut y = x - k;
            while x >= 0 && y >= 0 && x < n && y < m && a[a0 + x as usize] == b[b0 + y as usize] {
                x += 1;
                y += 1;
            }
            down[k1] = x;
            if x > n {
                d2 += 2;
                k += 2;
                continue;
            }
            if y > m {
                d1 += 2;
                k += 2;
                continue;
            }
            if front {
                let k2 = d_max + delta - k;
                if k2 >= 0 && k2 < len && x >= n - up[k2 as usize] {
                    let (sx, sy) = (a0 + x as usize, b0 + y as usize);
                    split_rectangle(a, a0, sx, b, b0, sy, down, up, acc);
                    split_rectangle(a, sx, a1, b, sy, b1, down, up, acc);
                    return;
                }
            }
            k += 2;
        }

        // Reverse paths from (n, m); offsets count from the far corner.
        let mut k = -d + u1;
        while k <= d - u2 {
            let k2 = (d_max + k) as usize;
            let mut x = if k == -d || (k != d && up[k2 - 1] < up[k2 + 1]) {
                up[k2 + 1]
            } else {
                up[k2 - 1] + 1
            };
            let mut y = x - k;
            while x >= 0
                && y >= 0
                && x < n
                && y < m
                && a[a1 - 1 - x as usize] == b[b1 - 1 - y as usize]
            {
                x += 1;
                y += 1;
            }
            up[k2] = x;
            if x > n {
                u2 += 2;
                k += 2;
                continue;
            }
            if y > m {
                u1 += 2;
                k += 2;
                continue;
            }
            if !front {
                let k1 = d_max + delta - k;
                if k1 >= 0 && k1 < len && down[k1 as usize] >= n - x {
                    let fx = down[k1 as usize];
                    let fy = fx + k - delta;
                    let (sx, sy) = (a0 + fx as usize, b0 + fy as usize);
                    split_rectangle(a, a0, sx, b, b0, sy, down, up, acc);
                    split_rectangle(a, sx, a1, b, sy, b1, down, up, acc);
                    return;
                }
            }
            k += 2;
        }
    }
}

/// First occurrence of `needle` as a contiguous sub-slice of `hay`.
/// `needle` must be non-empty.
fn find_contiguous(hay: &[u32], needle: &[u32]) -> Option<usize> {
    if needle.len() > hay.len() {
        return None;
    }
    hay.windows(needle.len()).position(|w| w == needle)
}
