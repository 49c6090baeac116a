use super::board::Board;
use super::evaluator::Evaluator;
use super::hand::Hand;
use super::hole::Hole;
use super::kicks::Kickers;
use super::ranking::Ranking;

/// A fully-evaluated hand strength for comparison.
///
/// Combines a [`Ranking`] with [`Kickers`]. Ordering is lexicographic:
/// ranking first, then kickers. Equal strengths split pots.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.value
    }
    pub fn kickers(&self) -> Kickers {
        self.kicks
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

/// the showdown contract: private cards plus community cards
impl From<(Hole, Board)> for Strength {
    fn from((hole, board): (Hole, Board)) -> Self {
        Self::from(Hand::add(Hand::from(hole), Hand::from(board)))
    }
}

impl From<Evaluator> for Strength {
    fn from(e: Evaluator) -> Self {
        let value = e.find_ranking();
        let kicks = e.find_kickers(value);
        Self::from((value, kicks))
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self { value, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{:>5}", self.value, self.kicks)
    }
}
