use crate::domain::deck::DealMode;
use crate::domain::estimates::make_estimates;
use crate::domain::game::{
    create_game, game_phase, game_score, start_next_round, with_current_round,
};
use crate::domain::legal_plays;
use crate::domain::round::phase;
use crate::domain::state::{GamePhase, Phase};
use crate::domain::tricks::play_card;
use crate::domain::turn_order::current_player_index;
use crate::domain::Round;
use crate::errors::domain::ValidationKind;

/// Play the first legal card for whoever is to act until the round ends.
fn play_out(mut round: Round) -> Round {
    while phase(&round).unwrap() == Phase::Play {
        let seat = current_player_index(&round).unwrap();
        let trick = crate::domain::open_trick(&round).unwrap();
        let card = legal_plays(round.hand(seat).unwrap(), &trick)[0];
        round = play_card(&round, card).unwrap();
    }
    round
}

#[test]
fn default_rounds_exhaust_the_deck() {
    assert_eq!(create_game(3, None).unwrap().rounds_to_play, 20);
    assert_eq!(create_game(4, Some(0)).unwrap().rounds_to_play, 15);
    assert_eq!(create_game(5, None).unwrap().rounds_to_play, 12);
    assert_eq!(create_game(4, Some(3)).unwrap().rounds_to_play, 3);
}

#[test]
fn rejects_bad_player_counts_and_round_totals() {
    let err = create_game(2, None).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::InvalidPlayerCount));
    let err = create_game(6, None).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::InvalidPlayerCount));
    let err = create_game(4, Some(16)).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::InvalidRoundNumber));
}

#[test]
fn rounds_are_appended_only_after_the_previous_one_ends() {
    let game = create_game(3, Some(2)).unwrap();
    assert!(game.current_round().is_none());
    assert_eq!(game_phase(&game).unwrap(), GamePhase::InProgress);

    let game = start_next_round(&game, DealMode::Ordered).unwrap();
    assert_eq!(game.rounds.len(), 1);
    let err = start_next_round(&game, DealMode::Ordered).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::PhaseMismatch));

    let round = make_estimates(game.current_round().unwrap(), [1, 0, 0]).unwrap();
    let game = with_current_round(&game, play_out(round)).unwrap();
    assert_eq!(game_phase(&game).unwrap(), GamePhase::InProgress);

    let game = start_next_round(&game, DealMode::Ordered).unwrap();
    let round = game.current_round().unwrap();
    assert_eq!(round.number, 2);
    assert_eq!(round.dealer_offset, 1);
    assert!(round.hands().unwrap().iter().all(|h| h.len() == 2));

    let round = make_estimates(round, [0, 0, 0]).unwrap();
    let game = with_current_round(&game, play_out(round)).unwrap();
    assert_eq!(game_phase(&game).unwrap(), GamePhase::Done);

    let err = start_next_round(&game, DealMode::Ordered).unwrap_err();
    assert_eq!(err.validation_kind(), Some(&ValidationKind::InvalidRoundNumber));
}

#[test]
fn game_score_sums_every_round() {
    let game = start_next_round(&create_game(3, Some(2)).unwrap(), DealMode::Ordered).unwrap();
    // round 1: [H2], [H3], [H4], trump H5; seat 2 wins
    let round = make_estimates(game.current_round().unwrap(), [0, 0, 1]).unwrap();
    let game = with_current_round(&game, play_out(round)).unwrap();
    assert_eq!(game_score(&game).unwrap(), vec![20, 20, 30]);

    let game = start_next_round(&game, DealMode::Ordered).unwrap();
    // unset estimates add nothing
    assert_eq!(game_score(&game).unwrap(), vec![20, 20, 30]);
}

#[test]
fn with_current_round_rejects_mismatched_round() {
    let game = start_next_round(&create_game(3, Some(2)).unwrap(), DealMode::Ordered).unwrap();
    let other = crate::domain::create_round(2, 3, DealMode::Ordered).unwrap();
    assert!(with_current_round(&game, other).is_err());
    assert!(with_current_round(&create_game(3, None).unwrap(), game.rounds[0].clone()).is_err());
}
