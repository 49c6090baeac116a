use super::seat::State;
use crate::Chips;

/// Public profit/loss information.
///
/// Tracks chips risked and won without revealing hole cards.
///
/// - `reward`: Total chips received from pot
/// - `risked`: Total chips committed to pot
/// - `status`: Final betting state (for determining eligibility)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PnL {
    reward: Chips,
    risked: Chips,
    status: State,
}

impl PnL {
    pub fn new(reward: Chips, risked: Chips, status: State) -> Self {
        Self {
            reward,
            risked,
            status,
        }
    }
    /// Adds chips to reward.
    pub fn add(&mut self, amount: Chips) {
        self.reward += amount;
    }
    /// Net result, negative for losses.
    pub fn won(&self) -> i64 {
        self.reward as i64 - self.risked as i64
    }
    pub fn reward(&self) -> Chips {
        self.reward
    }
    pub fn risked(&self) -> Chips {
        self.risked
    }
    pub fn status(&self) -> State {
        self.status
    }
}

impl std::fmt::Display for PnL {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:+}", self.won())
    }
}
