use crate::Chips;
use crate::Position;
use crate::cards::hand::Hand;

/// One entry in a hand's history.
///
/// Chip amounts are what the seat committed with this event, not the size
/// of its total stake.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Event {
    Blind(Position, Chips),
    Fold(Position),
    Check(Position),
    Call(Position, Chips),
    Raise(Position, Chips),
    Shove(Position, Chips),
    Draw(Hand),
    Showdown,
}

impl Event {
    /// The seat responsible, for events that belong to one.
    pub fn position(&self) -> Option<Position> {
        match *self {
            Event::Blind(p, _)
            | Event::Fold(p)
            | Event::Check(p)
            | Event::Call(p, _)
            | Event::Raise(p, _)
            | Event::Shove(p, _) => Some(p),
            Event::Draw(_) | Event::Showdown => None,
        }
    }
    /// Chips committed by this event.
    pub fn amount(&self) -> Option<Chips> {
        match *self {
            Event::Blind(_, n) | Event::Call(_, n) | Event::Raise(_, n) | Event::Shove(_, n) => {
                Some(n)
            }
            _ => None,
        }
    }
    /// True for events that count as a player decision.
    pub fn is_choice(&self) -> bool {
        matches!(
            self,
            Event::Fold(_) | Event::Check(_) | Event::Call(..) | Event::Raise(..) | Event::Shove(..)
        )
    }
    pub fn is_blind(&self) -> bool {
        matches!(self, Event::Blind(..))
    }
    pub fn is_chance(&self) -> bool {
        matches!(self, Event::Draw(_))
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::Blind(p, n) => write!(f, "{p} BLIND {}", n),
            Event::Fold(p) => write!(f, "{p} FOLD"),
            Event::Check(p) => write!(f, "{p} CHECK"),
            Event::Call(p, n) => write!(f, "{p} CALL  {}", n),
            Event::Raise(p, n) => write!(f, "{p} RAISE {}", n),
            Event::Shove(p, n) => write!(f, "{p} SHOVE {}", n),
            Event::Draw(hand) => write!(f, "  DEAL  {}", hand),
            Event::Showdown => write!(f, "  SHOWDOWN"),
        }
    }
}
