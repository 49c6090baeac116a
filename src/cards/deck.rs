use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use super::street::Street;
use rand::Rng;

/// The cards not yet dealt, drawn uniformly at random.
///
/// Wraps a [`Hand`] of remaining cards. A fresh deck is the 36-card short
/// deck (Six through Ace). Randomness always comes from the caller, so two
/// decks driven by identically seeded streams deal identical cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh 36-card short deck.
    pub fn new() -> Self {
        Self(Hand::from(Self::mask()))
    }
    /// Every short deck card that is not in `dealt`.
    pub fn without(dealt: Hand) -> Self {
        Self(Hand::from(Self::mask() & !u64::from(dealt)))
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// Removes and returns a uniformly random card.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Card {
        debug_assert!(self.0.size() > 0);
        let i = rng.random_range(0..self.0.size());
        let mut deck = u64::from(self.0);
        for _ in 0..i {
            deck &= deck - 1;
        }
        let card = Card::from(deck.trailing_zeros() as u8);
        self.0.remove(card);
        card
    }
    /// Deals the board cards revealed when `street` begins.
    pub fn deal<R: Rng>(&mut self, street: Street, rng: &mut R) -> Hand {
        (0..street.n_revealed())
            .map(|_| self.draw(rng))
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
    /// Deals two cards as a player's hole cards.
    pub fn hole<R: Rng>(&mut self, rng: &mut R) -> Hole {
        let a = self.draw(rng);
        let b = self.draw(rng);
        Hole::from((a, b))
    }

    /// Ranks Six through Ace in every suit.
    pub const fn mask() -> u64 {
        0x000FFFFFFFFF0000
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn thirty_six_cards() {
        let deck = Deck::new();
        assert!(deck.size() == 36);
        assert!(Hand::from(deck).all(|c| c.rank() >= Rank::LOWEST));
    }

    #[test]
    fn draws_exhaust_without_replacement() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let mut deck = Deck::new();
        let mut seen = Hand::empty();
        while deck.size() > 0 {
            let card = deck.draw(rng);
            assert!(!seen.contains(&card));
            assert!(!deck.contains(&card));
            seen = Hand::add(seen, Hand::from(card));
        }
        assert!(u64::from(seen) == Deck::mask());
    }

    #[test]
    fn draws_reach_every_card() {
        let ref mut rng = SmallRng::seed_from_u64(2);
        let mut seen = Hand::empty();
        for _ in 0..2000 {
            let card = Deck::new().draw(rng);
            if !seen.contains(&card) {
                seen = Hand::add(seen, Hand::from(card));
            }
        }
        assert!(seen.size() == 36);
    }

    #[test]
    fn seeded_streams_agree() {
        let ref mut a = SmallRng::seed_from_u64(42);
        let ref mut b = SmallRng::seed_from_u64(42);
        assert!(Deck::new().deal(Street::Flop, a) == Deck::new().deal(Street::Flop, b));
    }

    #[test]
    fn without_dealt_cards() {
        let dealt = Hand::try_from("As Kd 6c").unwrap();
        let deck = Deck::without(dealt);
        assert!(deck.size() == 33);
        assert!(dealt.into_iter().all(|c| !deck.contains(&c)));
    }
}
