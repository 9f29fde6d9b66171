//! `#[derive(Matchable)]` behaviour.

use super::common::raw_pairs;
use movediff::{compute_diff, Matchable, Verdict};

#[derive(Debug, Clone, PartialEq, Matchable)]
struct Track {
    #[matchable(id)]
    album: u16,
    #[matchable(id)]
    number: u8,
    title: String,
    plays: u32,
}

fn track(album: u16, number: u8, title: &str, plays: u32) -> Track {
    Track {
        album,
        number,
        title: title.to_string(),
        plays,
    }
}

#[derive(Debug, PartialEq, Matchable)]
enum Cell {
    Spacer,
    Text(String),
}

#[derive(Debug, PartialEq, Matchable)]
struct Keyed<K: PartialEq, V: PartialEq>(#[matchable(id)] K, V);

#[test]
fn test_composite_identity() {
    let a = track(1, 1, "Intro", 10);
    assert_eq!(a.match_with(&a.clone()), Verdict::Equal);
    assert_eq!(a.match_with(&track(1, 1, "Intro", 11)), Verdict::Changed);
    assert_eq!(a.match_with(&track(1, 2, "Intro", 10)), Verdict::NoMatch);
    assert_eq!(a.match_with(&track(2, 1, "Intro", 10)), Verdict::NoMatch);
}

#[test]
fn test_enum_uses_equality() {
    assert_eq!(Cell::Spacer.match_with(&Cell::Spacer), Verdict::Equal);
    assert_eq!(
        Cell::Text("a".into()).match_with(&Cell::Text("b".into())),
        Verdict::NoMatch
    );
}

#[test]
fn test_generic_tuple_struct() {
    let a = Keyed("k", 1);
    assert_eq!(a.match_with(&Keyed("k", 2)), Verdict::Changed);
    assert_eq!(a.match_with(&Keyed("j", 1)), Verdict::NoMatch);
}

#[test]
fn test_derived_type_in_a_diff() {
    let before = vec![track(1, 1, "Intro", 0), track(1, 2, "Song", 0)];
    let after = vec![track(1, 2, "Song", 3), track(1, 1, "Intro", 0)];
    let diff = compute_diff(&before, &after);
    assert_eq!(raw_pairs(diff.equal_matches()), vec![(0, 1)]);
    assert_eq!(raw_pairs(diff.changed_matches()), vec![(1, 0)]);
    assert_eq!(raw_pairs(diff.moved_matches()), vec![(0, 1)]);
}

#[test]
fn test_derive_compiles_outside_the_crate() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/pass/*.rs");
}
