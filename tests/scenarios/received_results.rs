//! Results that cross a process boundary as JSON and get re-checked on arrival.

use super::common::{checked_diff, rows};
use movediff::{
    compute_diff, DestinationIndex, DiffResult, InvariantError, Match, SourceIndex, WellFormedDiff,
};
use serde_json::json;

#[test]
fn test_json_shape() {
    let diff = compute_diff(&[1, 2], &[2, 1, 3]);
    let value = serde_json::to_value(&diff).unwrap();
    assert_eq!(
        value,
        json!({
            "inserted": [2],
            "deleted": [],
            "equal_matches": [
                {"verdict": "equal", "source": 0, "destination": 1},
                {"verdict": "equal", "source": 1, "destination": 0},
            ],
            "changed_matches": [],
            "moved_matches": [
                {"verdict": "equal", "source": 0, "destination": 1},
            ],
        })
    );
}

#[test]
fn test_received_result_is_checked() {
    let before = rows(&[(1, "a"), (2, "b")]);
    let after = rows(&[(2, "b*"), (1, "a")]);
    let sent = checked_diff(&before, &after).into_inner();

    let json = serde_json::to_string(&sent).unwrap();
    let received: DiffResult = serde_json::from_str(&json).unwrap();
    let checked = WellFormedDiff::new(received, before.len(), after.len()).unwrap();
    assert_eq!(checked.inner(), &sent);
    assert_eq!(checked.changed_matches().len(), 1);
}

#[test]
fn test_received_result_for_wrong_lengths() {
    let sent = compute_diff(&[1, 2, 3], &[1, 2, 3]);
    let err = WellFormedDiff::new(sent, 3, 4).unwrap_err();
    assert_eq!(
        err,
        InvariantError::DestinationUnaccounted {
            index: DestinationIndex(3)
        }
    );
    assert_eq!(
        err.to_string(),
        "destination index 3 is neither inserted nor matched"
    );
}

#[test]
fn test_tampered_movement_set() {
    // Drop the "moved" entry from a reversal: the movement test disagrees.
    let value = json!({
        "inserted": [],
        "deleted": [],
        "equal_matches": [
            {"verdict": "equal", "source": 0, "destination": 1},
            {"verdict": "equal", "source": 1, "destination": 0},
        ],
        "changed_matches": [],
        "moved_matches": [],
    });
    let received: DiffResult = serde_json::from_value(value).unwrap();
    let err = WellFormedDiff::new(received, 2, 2).unwrap_err();
    assert_eq!(
        err,
        InvariantError::MovementMisclassified {
            record: Match::Equal {
                source: SourceIndex(0),
                destination: DestinationIndex(1),
            },
            moved: false,
        }
    );
}

#[test]
fn test_invariant_error_is_std_error() {
    fn describe(err: &dyn std::error::Error) -> String {
        err.to_string()
    }
    let err = InvariantError::SourceClaimedTwice {
        index: SourceIndex(2),
    };
    assert_eq!(describe(&err), "source index 2 is accounted for more than once");
}
