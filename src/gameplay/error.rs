use super::action::Action;
use crate::Chips;
use crate::Position;
use thiserror::Error;

/// Everything that can go wrong while building or advancing a hand.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("illegal action: {0}")]
    IllegalAction(Action),
    #[error("it's not player {actual}'s turn (expected player {expected})")]
    OutOfTurn { expected: Position, actual: Position },
    #[error("hand already complete")]
    HandComplete,
    #[error("insufficient chips: wanted {wanted}, stack {stack}")]
    InsufficientChips { wanted: Chips, stack: Chips },
}
