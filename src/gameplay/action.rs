use crate::Chips;
use serde::Deserialize;
use serde::Serialize;

/// A player decision.
///
/// `Call` doubles as a check when nothing is owed. `Raise` carries the
/// increment on top of the amount needed to call.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Fold,
    Call,
    Raise(Chips),
}

impl Action {
    /// True if this is a raise (aggressive action).
    pub fn is_aggro(&self) -> bool {
        matches!(self, Action::Raise(_))
    }
    /// Compact symbol for transcripts (e.g., "C", "R100").
    pub fn symbol(&self) -> String {
        match self {
            Action::Fold => "F".to_string(),
            Action::Call => "C".to_string(),
            Action::Raise(n) => format!("R{}", n),
        }
    }
}

impl TryFrom<&str> for Action {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let parts = s.split_whitespace().collect::<Vec<&str>>();
        match parts.first().map(|p| p.to_uppercase()).as_deref() {
            Some("FOLD") => Ok(Action::Fold),
            Some("CALL") | Some("CHECK") => Ok(Action::Call),
            Some("RAISE") => parts
                .get(1)
                .and_then(|n| n.parse().ok())
                .map(Action::Raise)
                .ok_or("invalid raise amount"),
            _ => Err("invalid action type"),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Fold => write!(f, "FOLD"),
            Action::Call => write!(f, "CALL"),
            Action::Raise(amount) => write!(f, "RAISE {}", amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_str() {
        assert!(Action::try_from("fold") == Ok(Action::Fold));
        assert!(Action::try_from("check") == Ok(Action::Call));
        assert!(Action::try_from("RAISE 200") == Ok(Action::Raise(200)));
        assert!(Action::try_from("raise").is_err());
        assert!(Action::try_from("").is_err());
    }
}
