use super::card::Card;
use super::hand::Hand;
use super::street::Street;

/// The community cards visible to all players.
///
/// A board contains 0, 3, 4, or 5 cards corresponding to preflop, flop, turn,
/// and river respectively. Cards are added incrementally as streets progress.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board(Hand);

impl Board {
    pub fn empty() -> Self {
        Self(Hand::empty())
    }
    /// Adds cards to the board. Cards must not overlap the existing board.
    pub fn add(&mut self, hand: Hand) {
        self.0 = Hand::add(self.0, hand);
    }
    /// Infers the current street from board size.
    pub fn street(&self) -> Street {
        Street::from(self.0.size())
    }
    pub fn cards(&self) -> Vec<Card> {
        Vec::<Card>::from(self.0)
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
}

impl From<Hand> for Board {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}
impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        debug_assert!(board.0.size() != 1);
        debug_assert!(board.0.size() != 2);
        debug_assert!(board.0.size() <= 5);
        board.0
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.cards()
                .into_iter()
                .map(|c| c.to_string())
                .collect::<Vec<String>>()
                .join(" ")
        )
    }
}
