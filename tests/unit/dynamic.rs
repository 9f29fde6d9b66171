//! Heterogeneous sequences through `DynMatchable`.

use super::common::{raw_indices, raw_pairs, row, Row};
use movediff::{compute_diff, DynMatchable, Matchable, Verdict};

#[derive(Debug, PartialEq)]
struct Header(&'static str);

impl Matchable for Header {
    fn match_with(&self, other: &Self) -> Verdict {
        movediff::verdict_by_eq(self, other)
    }
}

fn section(title: &'static str, items: &[(u32, &str)]) -> Vec<DynMatchable> {
    let mut out = vec![DynMatchable::new(Header(title))];
    out.extend(items.iter().map(|&(id, label)| DynMatchable::new(row(id, label))));
    out
}

#[test]
fn test_mixed_types_never_match_each_other() {
    let a = DynMatchable::new(7u32);
    let b = DynMatchable::new(7u64);
    assert_eq!(a.match_with(&b), Verdict::NoMatch);
    assert_eq!(b.match_with(&a), Verdict::NoMatch);
}

#[test]
fn test_same_type_uses_its_own_comparison() {
    let a = DynMatchable::new(row(1, "a"));
    let b = DynMatchable::new(row(1, "b"));
    assert_eq!(a.match_with(&b), Verdict::Changed);
    assert!(a.is::<Row>());
    assert_eq!(a.downcast_ref::<Row>().map(|r| r.id), Some(1));
}

#[test]
fn test_heterogeneous_diff() {
    let before = section("Inbox", &[(1, "hello"), (2, "meeting")]);
    let mut after = section("Inbox", &[(2, "meeting (moved)"), (1, "hello")]);
    after.push(DynMatchable::new(Header("Archive")));

    let diff = compute_diff(&before, &after);
    assert_eq!(raw_pairs(diff.equal_matches()), vec![(0, 0), (1, 2)]);
    assert_eq!(raw_pairs(diff.changed_matches()), vec![(2, 1)]);
    assert_eq!(raw_indices(diff.inserted()), vec![3]);
    assert!(diff.deleted().is_empty());
    assert_eq!(raw_pairs(diff.moved_matches()), vec![(1, 2)]);
}

#[test]
fn test_header_does_not_absorb_a_row() {
    // A row that vanished is deleted, not bound to a header in its place.
    let before = vec![DynMatchable::new(row(1, "a")), DynMatchable::new(Header("h"))];
    let after = vec![DynMatchable::new(Header("h"))];
    let diff = compute_diff(&before, &after);
    assert_eq!(raw_indices(diff.deleted()), vec![0]);
    assert_eq!(raw_pairs(diff.equal_matches()), vec![(1, 0)]);
}
