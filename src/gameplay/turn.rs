use crate::Position;

/// Whose turn it is to act.
///
/// Chance never needs a turn of its own: cards are dealt inside the
/// transition that closes a betting round.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Turn {
    Terminal,
    Choice(Position),
}

impl Turn {
    /// The acting seat, if any.
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::Choice(c) => Some(*c),
            Self::Terminal => None,
        }
    }
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Choice(_))
    }
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal)
    }
}

impl From<Option<Position>> for Turn {
    fn from(actor: Option<Position>) -> Self {
        actor.map(Self::Choice).unwrap_or(Self::Terminal)
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Choice(c) => write!(f, "P{}", c),
            Self::Terminal => write!(f, "-"),
        }
    }
}
