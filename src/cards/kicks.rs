use super::rank::Rank;

/// A hand's kicker cards, as a 13-bit rank mask.
///
/// Higher ranks occupy higher bits, so the derived Ord compares kickers
/// highest card first.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(u16);

/// u16 isomorphism
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u16> for Kickers {
    fn from(n: u16) -> Self {
        Self(n)
    }
}

/// Vec<Rank> isomorphism
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        (0u8..13)
            .filter(|i| k.0 & (1 << i) != 0)
            .map(Rank::from)
            .collect()
    }
}
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks.into_iter().map(u16::from).fold(0u16, |a, b| a | b))
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in Vec::<Rank>::from(*self).into_iter().rev() {
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}
