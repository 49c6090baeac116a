use super::error::GameError;
use crate::Chips;
use crate::cards::hole::Hole;

/// A player's state at the table.
///
/// - `state`: Betting, Shoving (all-in), or Folding
/// - `stack`: Chips behind (not yet committed)
/// - `stake`: Chips committed this street
/// - `spent`: Total chips committed this hand
/// - `cards`: Hole cards (private)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seat {
    state: State,
    stack: Chips,
    stake: Chips,
    spent: Chips,
    cards: Hole,
}

impl From<(Hole, Chips)> for Seat {
    fn from((cards, stack): (Hole, Chips)) -> Self {
        Self {
            cards,
            stack,
            spent: 0,
            stake: 0,
            state: State::Betting,
        }
    }
}

impl Seat {
    /// Chips behind (not committed to pot).
    pub fn stack(&self) -> Chips {
        self.stack
    }
    /// Chips committed this street.
    pub fn stake(&self) -> Chips {
        self.stake
    }
    /// Current betting status.
    pub fn state(&self) -> State {
        self.state
    }
    /// Total chips committed this hand.
    pub fn spent(&self) -> Chips {
        self.spent
    }
    /// Hole cards (private information).
    pub fn cards(&self) -> Hole {
        self.cards
    }
    /// Commits chips from stack to pot.
    ///
    /// Refuses to go below zero; the caller decides whether to commit the
    /// whole stack instead.
    pub fn bet(&mut self, bet: Chips) -> Result<(), GameError> {
        if bet > self.stack {
            return Err(GameError::InsufficientChips {
                wanted: bet,
                stack: self.stack,
            });
        }
        self.stack -= bet;
        self.stake += bet;
        self.spent += bet;
        Ok(())
    }
    pub fn reset_state(&mut self, state: State) {
        self.state = state;
    }
    pub fn reset_stake(&mut self) {
        self.stake = 0;
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} {}", self.state, format!("${:>5}", self.stack), self.cards)
    }
}

/// Player betting status within a hand.
///
/// - `Betting`: Active and can still make decisions
/// - `Shoving`: All-in, no more decisions but still in the pot
/// - `Folding`: Out of the hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Betting,
    Shoving,
    Folding,
}

impl State {
    /// True if player is still competing for the pot.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Betting | Self::Shoving)
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            State::Betting => write!(f, "P"),
            State::Shoving => write!(f, "S"),
            State::Folding => write!(f, "F"),
        }
    }
}
