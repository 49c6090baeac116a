/// The four betting rounds, inferred from how many board cards are showing.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Street {
    Pref = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    Rive = 3isize,
}

impl Street {
    pub const fn all() -> &'static [Self] {
        &[Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Pref => Some(Self::Flop),
            Self::Flop => Some(Self::Turn),
            Self::Turn => Some(Self::Rive),
            Self::Rive => None,
        }
    }
    /// Board cards showing on this street.
    pub const fn n_observed(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::Rive => 5,
        }
    }
    /// Board cards revealed when this street begins.
    pub const fn n_revealed(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 1,
            Self::Rive => 1,
        }
    }
}

/// board size
impl From<usize> for Street {
    fn from(n: usize) -> Self {
        match n {
            0 => Self::Pref,
            3 => Self::Flop,
            4 => Self::Turn,
            5 => Self::Rive,
            _ => unreachable!("no board has {} cards", n),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revealed_sums_to_observed() {
        for street in Street::all() {
            let revealed = Street::all()
                .iter()
                .filter(|s| *s <= street)
                .map(|s| s.n_revealed())
                .sum::<usize>();
            assert!(revealed == street.n_observed());
            assert!(Street::from(street.n_observed()) == *street);
        }
    }
}
