use proptest::prelude::*;
use seqsim::{edit_distance, edit_distance_bounded};

/// Full-table reference Levenshtein over chars.
fn naive_distance(a: &str, b: &str) -> u32 {
    let s: Vec<char> = a.chars().collect();
    let t: Vec<char> = b.chars().collect();
    let (n, m) = (s.len(), t.len());
    let mut dp = vec![vec![0u32; m + 1]; n + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i as u32;
    }
    for j in 0..=m {
        dp[0][j] = j as u32;
    }
    for i in 1..=n {
        for j in 1..=m {
            let cost = u32::from(s[i - 1] != t[j - 1]);
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }
    dp[n][m]
}

proptest! {
    #[test]
    fn matches_reference(a in "[abcαβ🦀]{0,14}", b in "[abcαβ🦀]{0,14}") {
        prop_assert_eq!(edit_distance(&a, &b), naive_distance(&a, &b));
    }

    #[test]
    fn symmetric(a in "[abcα]{0,14}", b in "[abcα]{0,14}") {
        prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
    }

    #[test]
    fn zero_iff_equal(a in "[abcα]{0,12}", b in "[abcα]{0,12}") {
        let d = edit_distance(&a, &b);
        prop_assert_eq!(d == 0, a == b);
    }

    #[test]
    fn within_length_bounds(a in "[abc]{0,16}", b in "[abc]{0,16}") {
        let (n, m) = (a.chars().count(), b.chars().count());
        let d = edit_distance(&a, &b) as usize;
        prop_assert!(d >= n.abs_diff(m));
        prop_assert!(d <= n.max(m));
    }

    #[test]
    fn triangle_inequality(
        a in "[abα]{0,10}",
        b in "[abα]{0,10}",
        c in "[abα]{0,10}",
    ) {
        let ab = edit_distance(&a, &b);
        let bc = edit_distance(&b, &c);
        let ac = edit_distance(&a, &c);
        prop_assert!(ac <= ab + bc, "d(a,c)={ac} > d(a,b)+d(b,c)={}", ab + bc);
    }

    #[test]
    fn bounded_equals_clamped(a in "[abcα]{0,14}", b in "[abcα]{0,14}", k in 0u32..12) {
        let d = edit_distance(&a, &b);
        prop_assert_eq!(edit_distance_bounded(&a, &b, k), d.min(k));
        prop_assert_eq!(edit_distance_bounded(&b, &a, k), d.min(k));
    }

    #[test]
    fn bounded_with_large_threshold_is_exact(a in "[abcα]{0,14}", b in "[abcα]{0,14}") {
        prop_assert_eq!(
            edit_distance_bounded(&a, &b, u32::MAX),
            edit_distance(&a, &b)
        );
    }
}

#[test]
fn near_diagonal_edits() {
    // Single long pair with a handful of scattered substitutions.
    let a: String = (0..200).map(|i| if i % 37 == 0 { 'x' } else { 'q' }).collect();
    let b: String = (0..200).map(|i| if i % 41 == 0 { 'y' } else { 'q' }).collect();
    let d = edit_distance(&a, &b);
    assert_eq!(edit_distance_bounded(&a, &b, 500), d);
    assert_eq!(edit_distance_bounded(&a, &b, 3), 3.min(d));
}
