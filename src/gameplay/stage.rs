use crate::cards::street::Street;
use serde::Deserialize;
use serde::Serialize;

/// Where a hand is in its lifecycle.
///
/// Variant order is chronological, so stages never decrease along a chain
/// of successor states.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    PreFlop,
    Flop,
    Turn,
    River,
    ShowDown,
    Terminal,
}

impl Stage {
    /// True while players still have betting decisions to make.
    pub fn is_betting(&self) -> bool {
        self < &Self::ShowDown
    }
    /// The betting street, if any.
    pub fn street(&self) -> Option<Street> {
        match self {
            Self::PreFlop => Some(Street::Pref),
            Self::Flop => Some(Street::Flop),
            Self::Turn => Some(Street::Turn),
            Self::River => Some(Street::Rive),
            Self::ShowDown | Self::Terminal => None,
        }
    }
}

impl From<Street> for Stage {
    fn from(street: Street) -> Self {
        match street {
            Street::Pref => Self::PreFlop,
            Street::Flop => Self::Flop,
            Street::Turn => Self::Turn,
            Street::Rive => Self::River,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::PreFlop => write!(f, "pre_flop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::River => write!(f, "river"),
            Self::ShowDown => write!(f, "show_down"),
            Self::Terminal => write!(f, "terminal"),
        }
    }
}
