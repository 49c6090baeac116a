use super::error::GameError;
use crate::Chips;
use serde::Deserialize;
use serde::Serialize;

/// Table parameters for a single hand.
///
/// Every field has a default from the crate constants, so a partial JSON
/// document is enough to describe a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub players: usize,
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub stack: Chips,
    pub raise_cap: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: crate::N,
            small_blind: crate::S_BLIND,
            big_blind: crate::B_BLIND,
            stack: crate::STACK,
            raise_cap: crate::MAX_RAISE_REPEATS,
        }
    }
}

impl Config {
    pub fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }
    pub fn with_blinds(mut self, small_blind: Chips, big_blind: Chips) -> Self {
        self.small_blind = small_blind;
        self.big_blind = big_blind;
        self
    }
    pub fn with_stack(mut self, stack: Chips) -> Self {
        self.stack = stack;
        self
    }
    pub fn with_raise_cap(mut self, raise_cap: usize) -> Self {
        self.raise_cap = raise_cap;
        self
    }

    /// Rejects tables the short deck cannot deal or the blinds cannot seed.
    ///
    /// The small blind may exceed the big blind; only zero amounts are refused.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.players < 2 {
            return Err(GameError::InvalidConfiguration(format!(
                "need at least 2 players, got {}",
                self.players
            )));
        }
        if self.players > crate::MAX_PLAYERS {
            return Err(GameError::InvalidConfiguration(format!(
                "a short deck seats at most {} players, got {}",
                crate::MAX_PLAYERS,
                self.players
            )));
        }
        if self.small_blind == 0 || self.big_blind == 0 {
            return Err(GameError::InvalidConfiguration(
                "blinds must be positive".to_string(),
            ));
        }
        if self.stack == 0 {
            return Err(GameError::InvalidConfiguration(
                "starting stack must be positive".to_string(),
            ));
        }
        if self.stack as u64 * self.players as u64 > Chips::MAX as u64 {
            return Err(GameError::InvalidConfiguration(format!(
                "{} stacks of {} overflow the pot",
                self.players, self.stack
            )));
        }
        Ok(())
    }
}
