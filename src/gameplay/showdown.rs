use super::pot::SidePot;
use super::settlement::Settlement;
use crate::Chips;
use crate::Position;

/// Computes chip distributions at showdown.
///
/// Handles side pots from all-ins, split pots between equal hands, and
/// folded players receiving nothing. The pot is cut into tiers at each
/// live seat's total contribution, and each tier is split among the
/// strongest seats eligible for it.
///
/// Chips that do not divide evenly go one at a time to the tied winners in
/// seat order, lowest index first.
pub struct Showdown {
    payouts: Vec<Settlement>,
    pots: Vec<SidePot>,
}

/// Settles the pot tiers the table already cut.
impl From<(Vec<Settlement>, Vec<SidePot>)> for Showdown {
    fn from((payouts, pots): (Vec<Settlement>, Vec<SidePot>)) -> Self {
        Self { payouts, pots }
    }
}

/// Cuts the tiers from what each seat risked.
impl From<Vec<Settlement>> for Showdown {
    fn from(payouts: Vec<Settlement>) -> Self {
        let ledger = payouts
            .iter()
            .map(|p| (p.pnl().risked(), p.pnl().status()))
            .collect::<Vec<_>>();
        let pots = SidePot::tiers(&ledger);
        Self { payouts, pots }
    }
}

impl Showdown {
    /// Distributes all chips and returns final settlements.
    pub fn settle(mut self) -> Vec<Settlement> {
        for pot in std::mem::take(&mut self.pots) {
            self.distribute(pot);
        }
        debug_assert!(self.is_complete());
        self.payouts
    }
    fn winners(&self, pot: &SidePot) -> Vec<Position> {
        let best = pot
            .eligible
            .iter()
            .map(|i| self.payouts[*i].strength())
            .max()
            .flatten();
        pot.eligible
            .iter()
            .copied()
            .filter(|i| self.payouts[*i].strength() == best)
            .collect()
    }
    fn distribute(&mut self, pot: SidePot) {
        let winners = self.winners(&pot);
        if winners.is_empty() {
            return;
        }
        let n = winners.len() as Chips;
        let share = pot.amount / n;
        let bonus = pot.amount % n;
        log::debug!("side pot {:>6} to {:?}", pot.amount, winners);
        for (i, winner) in winners.into_iter().enumerate() {
            let extra = if (i as Chips) < bonus { 1 } else { 0 };
            self.payouts[winner].add(share + extra);
        }
    }
    fn is_complete(&self) -> bool {
        let staked = self.payouts.iter().map(|p| p.pnl().risked()).sum::<Chips>();
        let reward = self.payouts.iter().map(|p| p.reward()).sum::<Chips>();
        staked == reward
    }
}
