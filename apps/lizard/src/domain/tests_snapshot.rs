use serde_json::json;

use crate::domain::deck::DealMode;
use crate::domain::estimates::make_estimates;
use crate::domain::round::create_round;
use crate::domain::snapshot::round_snapshot;
use crate::domain::state::Phase;
use crate::domain::test_prelude::cards;
use crate::domain::tricks::play_cards;

#[test]
fn snapshot_shows_only_the_viewer_hand() {
    let round = create_round(3, 3, DealMode::Ordered).unwrap();
    let snap = round_snapshot(&round, 1).unwrap();
    assert_eq!(snap.viewer_hand, cards(&["H4", "H7", "H10"]));
    assert_eq!(snap.phase, Phase::Estimation);
    assert_eq!(snap.current_player_index, Some(2));
    assert!(snap.current_trick.is_empty());
}

#[test]
fn snapshot_serializes_with_wire_names() {
    let round = create_round(1, 3, DealMode::Ordered).unwrap();
    let round = make_estimates(&round, [0, 1]).unwrap();
    let value = serde_json::to_value(round_snapshot(&round, 0).unwrap()).unwrap();
    assert_eq!(
        value,
        json!({
            "number": 1,
            "trump": "H5",
            "currentTrick": [],
            "dealerOffset": 0,
            "phase": "ESTIMATION",
            "playerEstimates": [0, 1, null],
            "currentPlayerIndex": 2,
            "viewerHand": ["H2"],
            "trickWinners": [],
        })
    );
}

#[test]
fn finished_round_has_no_current_player() {
    let round = create_round(3, 3, DealMode::Ordered).unwrap();
    let round = make_estimates(&round, [0, 2, 2]).unwrap();
    let round = play_cards(
        &round,
        cards(&["H2", "H3", "H4", "H7", "H8", "H9", "H6", "H10", "H5"]),
    )
    .unwrap();
    let snap = round_snapshot(&round, 0).unwrap();
    assert_eq!(snap.phase, Phase::Done);
    assert_eq!(snap.current_player_index, None);
    assert_eq!(snap.current_trick, cards(&["H6", "H10", "H5"]));
    assert_eq!(snap.trick_winners, vec![1, 0, 1]);

    let value = serde_json::to_value(&snap).unwrap();
    assert!(value.get("currentPlayerIndex").is_none());
}
