use crate::Position;
use crate::cards::street::Street;

/// The order in which seats are asked to act on a street.
///
/// Pre-flop starts left of the big blind and wraps around to the blinds.
/// Every later street starts from seat 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation(Vec<Position>);

impl Rotation {
    pub fn preflop(n: usize) -> Self {
        Self((2..n).chain(0..n.min(2)).collect())
    }
    pub fn postflop(n: usize) -> Self {
        Self((0..n).collect())
    }
    pub fn street(street: Street, n: usize) -> Self {
        match street {
            Street::Pref => Self::preflop(n),
            _ => Self::postflop(n),
        }
    }
    pub fn order(&self) -> &[Position] {
        &self.0
    }
    /// Every seat once, starting with the one after `position` and wrapping.
    /// With no position, starts from the head of the order.
    pub fn after(&self, position: Option<Position>) -> impl Iterator<Item = Position> + '_ {
        let start = position
            .and_then(|p| self.0.iter().position(|x| *x == p))
            .map(|i| i + 1)
            .unwrap_or(0);
        self.0.iter().cycle().skip(start).take(self.0.len()).copied()
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let order = self.0.iter().map(|p| p.to_string()).collect::<Vec<_>>();
        write!(f, "[{}]", order.join(", "))
    }
}
