use crate::domain::deck::DealMode;
use crate::domain::estimates::{make_estimate, make_estimates};
use crate::domain::round::{
    cards_in_play, create_round, create_round_from_deck, current_trick, open_trick, phase,
};
use crate::domain::state::Phase;
use crate::domain::test_prelude::{card, cards};
use crate::domain::tricks::{play_card, play_cards};
use crate::domain::turn_order::{current_player_index, trick_winners};
use crate::errors::domain::{DomainError, ValidationKind};

fn ordered(round_number: u8, players: usize) -> crate::domain::Round {
    create_round(round_number, players, DealMode::Ordered).unwrap()
}

#[test]
fn deals_one_card_per_player_in_round_one() {
    let round = ordered(1, 3);
    assert_eq!(round.dealer_offset, 0);
    assert_eq!(
        round.hands().unwrap(),
        &[cards(&["H2"]), cards(&["H3"]), cards(&["H4"])]
    );
    assert_eq!(round.trump, Some(card("H5")));
    assert!(round.tricks().unwrap().is_empty());
    assert_eq!(round.moves.len(), 1);
}

#[test]
fn deal_starts_at_the_dealer_offset() {
    let round = ordered(2, 3);
    assert_eq!(round.dealer_offset, 1);
    assert_eq!(
        round.hands().unwrap(),
        &[cards(&["H4", "H7"]), cards(&["H2", "H5"]), cards(&["H3", "H6"])]
    );

    let round = ordered(4, 3);
    assert_eq!(round.dealer_offset, 0);
    assert_eq!(
        round.hands().unwrap(),
        &[
            cards(&["H2", "H5", "H8", "HJ"]),
            cards(&["H3", "H6", "H9", "HQ"]),
            cards(&["H4", "H7", "H10", "HK"]),
        ]
    );

    let round = ordered(5, 3);
    assert_eq!(
        round.hands().unwrap(),
        &[
            cards(&["H4", "H7", "H10", "HK", "C3"]),
            cards(&["H2", "H5", "H8", "HJ", "HA"]),
            cards(&["H3", "H6", "H9", "HQ", "C2"]),
        ]
    );
}

#[test]
fn full_deal_leaves_no_trump_card() {
    let round = ordered(20, 3);
    assert_eq!(round.trump, None);
    assert_eq!(cards_in_play(&round).unwrap(), 60);
}

#[test]
fn rejects_bad_round_numbers_and_player_counts() {
    for (r, n, kind) in [
        (0, 3, ValidationKind::InvalidRoundNumber),
        (21, 3, ValidationKind::InvalidRoundNumber),
        (16, 4, ValidationKind::InvalidRoundNumber),
        (1, 2, ValidationKind::InvalidPlayerCount),
        (1, 6, ValidationKind::InvalidPlayerCount),
    ] {
        let err = create_round(r, n, DealMode::Ordered).unwrap_err();
        assert_eq!(err.validation_kind(), Some(&kind), "round {r}, players {n}");
    }
}

#[test]
fn estimation_starts_with_the_dealer_and_goes_clockwise() {
    let round = ordered(3, 3);
    assert_eq!(phase(&round).unwrap(), Phase::Estimation);
    assert_eq!(current_player_index(&round).unwrap(), 2);

    let round = make_estimate(&round, 0).unwrap();
    assert_eq!(current_player_index(&round).unwrap(), 0);
    let round = make_estimate(&round, 2).unwrap();
    assert_eq!(current_player_index(&round).unwrap(), 1);
    let round = make_estimate(&round, 2).unwrap();

    assert_eq!(round.player_estimates, vec![Some(2), Some(2), Some(0)]);
    assert_eq!(phase(&round).unwrap(), Phase::Play);
}

#[test]
fn make_estimate_leaves_input_untouched() {
    let round = ordered(2, 3);
    let next = make_estimate(&round, 1).unwrap();
    assert_eq!(round.player_estimates, vec![None, None, None]);
    assert_eq!(next.player_estimates, vec![None, Some(1), None]);
}

#[test]
fn estimate_bounds_are_enforced() {
    let round = ordered(3, 3);
    let err = make_estimate(&round, 4).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::InvalidEstimate));
    assert!(err.to_string().contains("Estimate cannot be larger than 3"));

    let err = make_estimate(&round, -1).unwrap_err();
    assert!(err.to_string().contains("Estimate cannot be less than 0"));
}

#[test]
fn estimating_after_estimation_is_a_phase_mismatch() {
    let round = make_estimates(&ordered(1, 3), [0, 0, 0]).unwrap();
    let err = make_estimate(&round, 0).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::PhaseMismatch));
}

#[test]
fn playing_during_estimation_is_a_phase_mismatch() {
    let round = ordered(1, 3);
    let err = play_card(&round, card("H2")).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::PhaseMismatch));
}

#[test]
fn trick_winner_leads_the_next_trick() {
    let round = make_estimates(&ordered(3, 3), [0, 2, 2]).unwrap();
    assert_eq!(current_player_index(&round).unwrap(), 2);

    let round = play_cards(&round, cards(&["H2", "H3", "H4"])).unwrap();
    assert_eq!(current_player_index(&round).unwrap(), 1);
    assert_eq!(current_trick(&round).unwrap(), cards(&["H2", "H3", "H4"]));
    assert!(open_trick(&round).unwrap().is_empty());

    let round = play_cards(&round, cards(&["H7", "H8", "H9"])).unwrap();
    assert_eq!(current_player_index(&round).unwrap(), 0);

    let round = play_cards(&round, cards(&["H6", "H10", "H5"])).unwrap();
    assert_eq!(phase(&round).unwrap(), Phase::Done);
    assert_eq!(trick_winners(&round).unwrap(), vec![1, 0, 1]);
    assert_eq!(round.moves.len(), 10);
    assert!(current_player_index(&round).is_err());
}

#[test]
fn play_appends_a_snapshot_and_keeps_history() {
    let round = make_estimates(&ordered(3, 3), [0, 2, 2]).unwrap();
    let next = play_card(&round, card("H2")).unwrap();

    assert_eq!(next.moves.len(), 2);
    assert_eq!(next.moves[0], round.moves[0]);
    assert_eq!(next.hand(2).unwrap(), cards(&["H5", "H8"]).as_slice());
    assert_eq!(next.tricks().unwrap(), &[cards(&["H2"])]);
    assert_eq!(round.hand(2).unwrap(), cards(&["H2", "H5", "H8"]).as_slice());
}

#[test]
fn illegal_card_is_rejected_with_details() {
    // dealer 1: p1 [H2, C7], p2 [H3, C4], p0 [S9, SA], trump D2
    let deck = cards(&["H2", "H3", "S9", "C7", "C4", "SA", "D2"]);
    let round = create_round_from_deck(2, 3, &deck).unwrap();
    let round = make_estimates(&round, [1, 1, 0]).unwrap();
    let round = play_card(&round, card("H2")).unwrap();

    let err = play_card(&round, card("C4")).unwrap_err();
    match err {
        DomainError::InvalidPlay(play) => {
            assert_eq!(play.player, 2);
            assert_eq!(play.hand, cards(&["H3", "C4"]));
            assert_eq!(play.trick, cards(&["H2"]));
            assert_eq!(play.card, card("C4"));
        }
        other => panic!("expected InvalidPlay, got {other:?}"),
    }

    let err = play_card(&round, card("SA")).unwrap_err();
    assert!(matches!(err, DomainError::InvalidPlay(_)));
    assert_eq!(round.moves.len(), 2);

    let round = play_cards(&round, cards(&["H3", "S9"])).unwrap();
    // diamonds command, neither heart follows: the higher heart takes it
    assert_eq!(trick_winners(&round).unwrap(), vec![2]);
    assert_eq!(current_player_index(&round).unwrap(), 2);
}

#[test]
fn wild_lead_frees_every_card() {
    // dealer 1: p1 [LIZARD, H5], p2 [H2, C9], p0 [H3, SK], trump C2
    let deck = cards(&["LIZARD", "H2", "H3", "H5", "C9", "SK", "C2"]);
    let round = create_round_from_deck(2, 3, &deck).unwrap();
    let round = make_estimates(&round, [1, 0, 1]).unwrap();
    let round = play_cards(&round, cards(&["LIZARD", "C9", "SK"])).unwrap();
    assert_eq!(trick_winners(&round).unwrap(), vec![1]);
    assert_eq!(current_player_index(&round).unwrap(), 1);
}

#[test]
fn duplicate_wilds_leave_one_copy_in_hand() {
    let deck = cards(&["SNAKE", "H2", "H3", "SNAKE", "C9", "SK", "C2"]);
    let round = create_round_from_deck(2, 3, &deck).unwrap();
    let round = make_estimates(&round, [0, 1, 1]).unwrap();
    let round = play_card(&round, card("SNAKE")).unwrap();
    assert_eq!(round.hand(1).unwrap(), &[card("SNAKE")]);
}

#[test]
fn short_deck_is_rejected() {
    let deck = cards(&["H2", "H3"]);
    assert!(create_round_from_deck(1, 3, &deck).is_err());
}
