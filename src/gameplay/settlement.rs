use super::pnl::PnL;
use super::seat::State;
use crate::Chips;
use crate::cards::strength::Strength;

/// A seat's final result.
///
/// Combines the public [`PnL`] with the [`Strength`] it showed down with.
/// Seats that folded, or hands won without a showdown, carry no strength.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    revealed: PnL,
    strength: Option<Strength>,
}

impl Settlement {
    pub fn new(revealed: PnL, strength: Option<Strength>) -> Self {
        Self { revealed, strength }
    }
    pub fn pnl(&self) -> &PnL {
        &self.revealed
    }
    pub fn strength(&self) -> Option<&Strength> {
        self.strength.as_ref()
    }
    /// Chips received from the pot.
    pub fn reward(&self) -> Chips {
        self.pnl().reward()
    }
    /// Net chips won (reward - risked).
    pub fn won(&self) -> i64 {
        self.pnl().won()
    }
    /// Adds chips to the reward (for pot distribution).
    pub fn add(&mut self, amount: Chips) {
        self.revealed.add(amount);
    }
}

impl From<(Chips, State, Strength)> for Settlement {
    fn from((risked, status, strength): (Chips, State, Strength)) -> Self {
        Self::new(PnL::new(0, risked, status), Some(strength))
    }
}
impl From<(Chips, State)> for Settlement {
    fn from((risked, status): (Chips, State)) -> Self {
        Self::new(PnL::new(0, risked, status), None)
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let reward = self.reward();
        let reward = if reward > 0 {
            format!("+{}", reward)
        } else {
            String::new()
        };
        match self.strength() {
            Some(strength) => write!(f, "{:<7}{}", reward, strength),
            None => write!(f, "{:<7}{}", reward, self.pnl().status()),
        }
    }
}
