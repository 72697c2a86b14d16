use crate::domain::deck::DealMode;
use crate::domain::estimates::make_estimates;
use crate::domain::round::create_round;
use crate::domain::scoring::round_score;
use crate::domain::test_prelude::cards;
use crate::domain::tricks::play_cards;

#[test]
fn scores_a_finished_round() {
    let round = create_round(3, 3, DealMode::Ordered).unwrap();
    let round = make_estimates(&round, [0, 2, 2]).unwrap();
    let round = play_cards(
        &round,
        cards(&["H2", "H3", "H4", "H7", "H8", "H9", "H6", "H10", "H5"]),
    )
    .unwrap();

    assert_eq!(round.player_estimates, vec![Some(2), Some(2), Some(0)]);
    assert_eq!(round_score(&round).unwrap(), vec![-10, 40, 20]);
}

#[test]
fn unset_estimates_score_zero() {
    let round = create_round(2, 3, DealMode::Ordered).unwrap();
    assert_eq!(round_score(&round).unwrap(), vec![0, 0, 0]);

    let round = make_estimates(&round, [1]).unwrap();
    // seat 1 estimated one trick and has won none yet
    assert_eq!(round_score(&round).unwrap(), vec![0, -10, 0]);
}

#[test]
fn partial_round_counts_completed_tricks_only() {
    let round = create_round(3, 3, DealMode::Ordered).unwrap();
    let round = make_estimates(&round, [0, 2, 2]).unwrap();
    let round = play_cards(&round, cards(&["H2", "H3", "H4", "H7"])).unwrap();
    // seat 1 has one trick of two
    assert_eq!(round_score(&round).unwrap(), vec![-20, -10, 20]);
}
