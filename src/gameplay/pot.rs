use super::seat::State;
use crate::Chips;
use crate::Position;

/// Chips in the middle, remembered per contributing seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pot(Vec<Chips>);

impl Pot {
    pub fn new(n: usize) -> Self {
        Self(vec![0; n])
    }
    pub fn add(&mut self, position: Position, chips: Chips) {
        self.0[position] += chips;
    }
    pub fn total(&self) -> Chips {
        self.0.iter().sum()
    }
    pub fn contribution(&self, position: Position) -> Chips {
        self.0.get(position).copied().unwrap_or(0)
    }
    /// Main pot followed by side pots, given each seat's status.
    pub fn sides(&self, states: &[State]) -> Vec<SidePot> {
        let ledger = self
            .0
            .iter()
            .copied()
            .zip(states.iter().copied())
            .collect::<Vec<(Chips, State)>>();
        SidePot::tiers(&ledger)
    }
}

/// One layer of the pot and the seats that can win it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidePot {
    pub amount: Chips,
    pub eligible: Vec<Position>,
}

impl SidePot {
    /// Slices `(spent, state)` pairs into tiers at each distinct amount a
    /// live seat put in.
    ///
    /// Tier k holds everything contributed between level k-1 and level k,
    /// and belongs to the live seats that reached level k. Folded money above
    /// the top level lands in the top tier so the tiers always sum to the pot.
    pub fn tiers(ledger: &[(Chips, State)]) -> Vec<SidePot> {
        let mut levels = ledger
            .iter()
            .filter(|(_, state)| state.is_active())
            .map(|(spent, _)| *spent)
            .filter(|spent| *spent > 0)
            .collect::<Vec<Chips>>();
        levels.sort_unstable();
        levels.dedup();
        let mut pots = Vec::with_capacity(levels.len());
        let mut floor = 0;
        for level in levels {
            let amount = ledger
                .iter()
                .map(|(spent, _)| (*spent).min(level).saturating_sub(floor))
                .sum::<Chips>();
            let eligible = ledger
                .iter()
                .enumerate()
                .filter(|(_, (spent, state))| state.is_active() && *spent >= level)
                .map(|(i, _)| i)
                .collect::<Vec<Position>>();
            pots.push(SidePot { amount, eligible });
            floor = level;
        }
        let excess = ledger
            .iter()
            .map(|(spent, _)| spent.saturating_sub(floor))
            .sum::<Chips>();
        if let Some(top) = pots.last_mut() {
            top.amount += excess;
        }
        pots
    }
}
