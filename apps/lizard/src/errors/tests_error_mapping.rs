// Unit tests for error mapping - pure domain logic without transport or store
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_kinds_to_codes() {
    let cases = [
        (ValidationKind::InvalidPlayerCount, "INVALID_PLAYER_COUNT"),
        (ValidationKind::InvalidRoundNumber, "INVALID_ROUND_NUMBER"),
        (ValidationKind::InvalidEstimate, "INVALID_ESTIMATE"),
        (ValidationKind::OutOfTurn, "OUT_OF_TURN"),
        (ValidationKind::PhaseMismatch, "PHASE_MISMATCH"),
        (ValidationKind::ParseCard, "PARSE_CARD"),
        (ValidationKind::GameOver, "GAME_OVER"),
        (ValidationKind::Other("x".into()), "VALIDATION_ERROR"),
    ];
    for (kind, expected) in cases {
        let app: AppError = DomainError::validation(kind, "detail").into();
        assert_eq!(app.code().as_str(), expected);
        assert_eq!(app.detail(), "detail");
        assert!(matches!(app, AppError::Validation { .. }));
    }
}

#[test]
fn maps_invalid_play_with_diagnostics() {
    let de = DomainError::invalid_play(
        1,
        &[Card::suited(Suit::Clubs, Rank::Six)],
        &[Card::suited(Suit::Clubs, Rank::Nine)],
        Card::suited(Suit::Hearts, Rank::Five),
    );
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::InvalidPlay);
    assert!(app.detail().contains("player 1 cannot play H5"));
}

#[test]
fn maps_not_found() {
    let app: AppError = DomainError::not_found(NotFoundKind::Game, "no game").into();
    assert_eq!(app.code().as_str(), "GAME_NOT_FOUND");

    let app: AppError = DomainError::not_found(NotFoundKind::Seat, "no seat").into();
    assert_eq!(app.code().as_str(), "SEAT_NOT_FOUND");

    let app: AppError = DomainError::not_found(NotFoundKind::Other("x".into()), "x").into();
    assert_eq!(app.code().as_str(), "NOT_FOUND");
}

#[test]
fn maps_invariant_to_internal() {
    let app: AppError = DomainError::invariant("broken").into();
    assert_eq!(app.code(), ErrorCode::DataCorruption);
    assert!(matches!(app, AppError::Internal { .. }));
}

#[test]
fn config_errors_use_config_code() {
    let app = AppError::config("bad env");
    assert_eq!(app.code(), ErrorCode::ConfigError);
    assert_eq!(app.to_string(), "Configuration error: bad env");
}
