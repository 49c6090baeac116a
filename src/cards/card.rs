use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The encoding is `rank * 4 + suit`, so cards sort first by rank, then by
/// suit. The short deck uses the upper 36 of these 52 codes.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
    /// Parses whitespace-insensitive concatenated cards, e.g. `"As Kd"`.
    pub fn parse(s: &str) -> Result<Vec<Self>, String> {
        s.replace(char::is_whitespace, "")
            .chars()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .map(|pair| Self::try_from(pair.as_str()))
            .collect::<Result<Vec<Self>, _>>()
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!(n < 52);
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().len() {
            2 => {
                let rank = Rank::try_from(&s.trim()[0..1])?;
                let suit = Suit::try_from(&s.trim()[1..2])?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(format!("invalid card str: {}", s)),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::deck::Deck;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn bijective_rank_suit() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let card = Deck::new().draw(rng);
        assert!(card == Card::from((card.rank(), card.suit())));
    }

    #[test]
    fn bijective_u8() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let card = Deck::new().draw(rng);
        assert!(card == Card::from(u8::from(card)));
    }

    #[test]
    fn parse_many() {
        let cards = Card::parse("As Td 6c").unwrap();
        assert!(cards.len() == 3);
        assert!(cards[0] == Card::from((Rank::Ace, Suit::S)));
        assert!(cards[1] == Card::from((Rank::Ten, Suit::D)));
        assert!(cards[2] == Card::from((Rank::Six, Suit::C)));
        assert!(Card::parse("Zz").is_err());
    }
}
