use super::card::Card;
use super::hand::Hand;

/// A player's two private cards.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl Hole {
    pub fn empty() -> Self {
        Self(Hand::empty())
    }
}

impl From<Hand> for Hole {
    fn from(hand: Hand) -> Self {
        debug_assert!(hand.size() == 2);
        Self(hand)
    }
}
impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        debug_assert!(a != b);
        Self(Hand::add(Hand::from(a), Hand::from(b)))
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
