//! Scan phase: greedy first-match binding.

use super::common::{raw_indices, row, rows};
use movediff::scan::scan;
use movediff::{verdict_by_eq, Match, Matchable, Verdict};

fn bound(source: &[u32], destination: &[u32]) -> Vec<(usize, usize)> {
    scan(source, destination, verdict_by_eq)
        .matches
        .iter()
        .filter_map(Match::positions)
        .collect()
}

#[test]
fn test_matches_come_out_in_source_order() {
    let outcome = scan(&[5, 6, 7], &[7, 6, 5], verdict_by_eq);
    let sources: Vec<usize> = outcome.matches.iter().map(|m| m.source().get()).collect();
    assert_eq!(sources, vec![0, 1, 2]);
}

#[test]
fn test_duplicates_bind_left_to_right() {
    // Both 1s in the source pair with the 1s in the destination in order.
    assert_eq!(bound(&[1, 1, 2], &[2, 1, 1]), vec![(0, 1), (1, 2), (2, 0)]);
}

#[test]
fn test_surplus_duplicates_are_inserted() {
    let outcome = scan(&[4], &[4, 4, 4], verdict_by_eq);
    assert_eq!(raw_indices(&outcome.inserted), vec![1, 2]);
    assert!(outcome.deleted.is_empty());
}

#[test]
fn test_surplus_duplicates_are_deleted() {
    let outcome = scan(&[4, 4, 4], &[4], verdict_by_eq);
    assert_eq!(raw_indices(&outcome.deleted), vec![1, 2]);
    assert!(outcome.inserted.is_empty());
}

#[test]
fn test_greedy_choice_can_strand_a_better_match() {
    // Source row 1 binds to the first row with the same id, which is the
    // changed copy. The exact copy behind it becomes an insertion.
    let before = rows(&[(1, "a")]);
    let after = rows(&[(1, "a*"), (1, "a")]);
    let outcome = scan(&before, &after, |a, b| a.match_with(b));
    assert_eq!(outcome.matches.len(), 1);
    assert_eq!(outcome.matches[0].verdict(), Verdict::Changed);
    assert_eq!(raw_indices(&outcome.inserted), vec![1]);
}

#[test]
fn test_no_match_anywhere() {
    let outcome = scan(&[1, 2], &[3, 4, 5], verdict_by_eq);
    assert!(outcome.matches.is_empty());
    assert_eq!(raw_indices(&outcome.deleted), vec![0, 1]);
    assert_eq!(raw_indices(&outcome.inserted), vec![0, 1, 2]);
}

#[test]
fn test_compare_argument_order() {
    let mut seen = Vec::new();
    scan(&[row(1, "src")], &[row(2, "dst")], |a, b| {
        seen.push((a.label.clone(), b.label.clone()));
        Verdict::NoMatch
    });
    assert_eq!(seen, vec![("src".to_string(), "dst".to_string())]);
}

fn count_comparisons(source: &[u32], destination: &[u32]) -> usize {
    let mut calls = 0usize;
    scan(source, destination, |a, b| {
        calls += 1;
        verdict_by_eq(a, b)
    });
    calls
}

#[test]
fn test_reversal_comparison_count() {
    // Source element i finds its partner at n - 1 - i after comparing every
    // unclaimed position in front of it: n + (n - 1) + ... + 1.
    let n = 30;
    let source: Vec<u32> = (0..n).collect();
    let destination: Vec<u32> = (0..n).rev().collect();
    let n = n as usize;
    assert_eq!(count_comparisons(&source, &destination), n * (n + 1) / 2);
}

#[test]
fn test_claimed_prefix_is_never_compared() {
    // Identity: the claimed run grows from the front, so each source element
    // compares exactly once.
    let items: Vec<u32> = (0..30).collect();
    assert_eq!(count_comparisons(&items, &items), items.len());
}
