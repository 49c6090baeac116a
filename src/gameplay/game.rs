use super::action::Action;
use super::config::Config;
use super::error::GameError;
use super::event::Event;
use super::pot::Pot;
use super::rotation::Rotation;
use super::seat::Seat;
use super::seat::State;
use super::settlement::Settlement;
use super::showdown::Showdown;
use super::stage::Stage;
use super::turn::Turn;
use crate::Chips;
use crate::Position;
use crate::cards::board::Board;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::street::Street;
use crate::cards::strength::Strength;
use rand::Rng;

/// The state of one hand of short deck Hold-Em.
///
/// `Game` owns everything needed to determine legal actions and compute
/// payoffs: seats, pot, community cards, whose turn it is, and the event
/// history of the hand. State transitions are functional:
/// [`apply`](Self::apply) returns a new `Game` rather than mutating in place,
/// so any state in a chain can be kept, compared, or replayed from.
///
/// Chance is resolved inside the transition that closes a betting round.
/// Cards come from the complement of what is already dealt, drawn with the
/// random stream the caller passes in.
///
/// # Fields
///
/// - `pot`: Chips committed this hand, per seat
/// - `board`: Community cards (0, 3, 4 or 5)
/// - `seats`: Per-player state (stack, stake, status, hole cards)
/// - `stage`: Betting street, or ShowDown/Terminal
/// - `ticker`: Seat to act, none once the hand is over
/// - `raises`: Raises made on the current street
/// - `history`: Every blind, decision and deal so far
#[derive(Debug, Clone)]
pub struct Game {
    config: Config,
    seats: Vec<Seat>,
    pot: Pot,
    board: Board,
    stage: Stage,
    ticker: Option<Position>,
    raises: usize,
    history: Vec<Event>,
    settlements: Vec<Settlement>,
}

/// Construction.
impl Game {
    /// Deals hole cards, posts blinds, and stops at the first decision.
    ///
    /// Seat 0 posts the small blind and seat 1 the big blind. A blind larger
    /// than the stack puts that seat all-in for what it has. If the blinds
    /// leave nobody able to bet, the board is run out immediately and the
    /// returned hand is already terminal.
    pub fn new<R: Rng>(config: Config, rng: &mut R) -> Result<Self, GameError> {
        Self::with_stacks(config, &vec![config.stack; config.players], rng)
    }
    /// Like [`new`](Self::new), but seat `i` sits down with `stacks[i]`
    /// instead of the configured stack.
    pub fn with_stacks<R: Rng>(
        config: Config,
        stacks: &[Chips],
        rng: &mut R,
    ) -> Result<Self, GameError> {
        config.validate()?;
        if stacks.len() != config.players {
            return Err(GameError::InvalidConfiguration(format!(
                "{} stacks for {} players",
                stacks.len(),
                config.players
            )));
        }
        if stacks.contains(&0) {
            return Err(GameError::InvalidConfiguration(
                "starting stack must be positive".to_string(),
            ));
        }
        if stacks.iter().map(|s| *s as u64).sum::<u64>() > Chips::MAX as u64 {
            return Err(GameError::InvalidConfiguration(
                "table holds more chips than fit in a pot".to_string(),
            ));
        }
        let mut deck = Deck::new();
        let mut seats = Vec::with_capacity(config.players);
        for stack in stacks.iter().copied() {
            seats.push(Seat::from((deck.hole(rng), stack)));
        }
        let mut game = Self {
            config,
            seats,
            pot: Pot::new(config.players),
            board: Board::empty(),
            stage: Stage::PreFlop,
            ticker: None,
            raises: 0,
            history: Vec::new(),
            settlements: Vec::new(),
        };
        game.post(0, config.small_blind)?;
        game.post(1, config.big_blind)?;
        game.progress(None, rng);
        log::debug!("new hand {}", game);
        Ok(game)
    }
}

/// Public state accessors.
impl Game {
    pub fn config(&self) -> &Config {
        &self.config
    }
    /// Number of players at the table.
    pub fn n(&self) -> usize {
        self.seats.len()
    }
    pub fn pot(&self) -> &Pot {
        &self.pot
    }
    pub fn board(&self) -> Board {
        self.board
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn seat(&self, position: Position) -> Option<&Seat> {
        self.seats.get(position)
    }
    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn street(&self) -> Street {
        self.board.street()
    }
    pub fn is_terminal(&self) -> bool {
        self.stage == Stage::Terminal
    }
    /// The seat to act, if the hand is still being bet.
    pub fn actor(&self) -> Option<Position> {
        self.ticker
    }
    pub fn turn(&self) -> Turn {
        Turn::from(self.ticker)
    }
    /// Acting order on the current street.
    pub fn order(&self) -> Rotation {
        Rotation::street(self.street(), self.n())
    }
    pub fn history(&self) -> &[Event] {
        &self.history
    }
    /// Raises made on the current street.
    pub fn raises(&self) -> usize {
        self.raises
    }
    /// Per-seat results. Empty until the hand is terminal.
    pub fn settlements(&self) -> &[Settlement] {
        &self.settlements
    }
    /// Cards that are neither on the board nor in anyone's hand.
    pub fn deck(&self) -> Deck {
        let dealt = self
            .seats
            .iter()
            .map(|s| Hand::from(s.cards()))
            .fold(Hand::from(self.board), Hand::add);
        Deck::without(dealt)
    }
}

/// Action validation and application.
impl Game {
    /// All legal actions for the seat to act.
    ///
    /// Folding is always allowed. Raising disappears once the street has
    /// seen `raise_cap` raises. A terminal hand has no legal actions.
    pub fn legal(&self) -> Vec<Action> {
        if !self.turn().is_choice() {
            return Vec::new();
        }
        let mut options = vec![Action::Fold, Action::Call];
        if self.may_raise() {
            options.push(Action::Raise(self.to_raise()));
        }
        options
    }
    pub fn is_allowed(&self, action: &Action) -> bool {
        if !self.turn().is_choice() {
            return false;
        }
        match *action {
            Action::Fold | Action::Call => true,
            Action::Raise(raise) => self.may_raise() && raise >= self.to_raise(),
        }
    }
    /// Returns the successor state with the current actor taking `action`.
    pub fn apply<R: Rng>(&self, action: Action, rng: &mut R) -> Result<Self, GameError> {
        let actor = self.ticker.ok_or(GameError::HandComplete)?;
        self.act(actor, action, rng)
    }
    /// Like [`apply`](Self::apply), for callers that name the acting seat.
    pub fn act<R: Rng>(
        &self,
        position: Position,
        action: Action,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let actor = self.ticker.ok_or(GameError::HandComplete)?;
        if position != actor {
            return Err(GameError::OutOfTurn {
                expected: actor,
                actual: position,
            });
        }
        if !self.is_allowed(&action) {
            return Err(GameError::IllegalAction(action));
        }
        let mut child = self.clone();
        child.commit(actor, action)?;
        child.progress(Some(actor), rng);
        Ok(child)
    }

    /// Chips the actor needs to match the highest stake.
    pub fn to_call(&self) -> Chips {
        self.ticker.map(|p| self.owed(p)).unwrap_or(0)
    }
    /// The fixed-limit raise increment for the current street.
    pub fn to_raise(&self) -> Chips {
        match self.stage {
            Stage::Turn | Stage::River => self.config.big_blind * 2,
            _ => self.config.big_blind,
        }
    }
    fn may_raise(&self) -> bool {
        self.raises < self.config.raise_cap
    }
    fn owed(&self, position: Position) -> Chips {
        self.effective_stake() - self.seats[position].stake()
    }
    fn effective_stake(&self) -> Chips {
        self.seats.iter().map(|s| s.stake()).max().unwrap_or(0)
    }
}

/// Chip movement.
impl Game {
    fn post(&mut self, position: Position, blind: Chips) -> Result<(), GameError> {
        let chips = self.wager(position, blind)?;
        self.history.push(Event::Blind(position, chips));
        Ok(())
    }
    fn commit(&mut self, position: Position, action: Action) -> Result<(), GameError> {
        let owed = self.owed(position);
        let event = match action {
            Action::Fold => {
                self.seats[position].reset_state(State::Folding);
                Event::Fold(position)
            }
            Action::Call if owed == 0 => Event::Check(position),
            Action::Call => self.bet(position, owed)?,
            Action::Raise(raise) => self.bet(position, owed.saturating_add(raise))?,
        };
        log::trace!("{} ({})", event, action);
        self.history.push(event);
        Ok(())
    }
    /// A call or raise. Anything lifting the seat above the highest stake is
    /// a raise, whatever was asked for.
    fn bet(&mut self, position: Position, chips: Chips) -> Result<Event, GameError> {
        let stake = self.effective_stake();
        let chips = self.wager(position, chips)?;
        let seat = self.seats[position];
        let aggro = seat.stake() > stake;
        if aggro {
            self.raises += 1;
        }
        Ok(match seat.state() {
            State::Shoving => Event::Shove(position, chips),
            _ if aggro => Event::Raise(position, chips),
            _ => Event::Call(position, chips),
        })
    }
    /// Moves chips from a seat to the pot, going all-in when the stack is
    /// too short. Returns what was actually committed.
    fn wager(&mut self, position: Position, chips: Chips) -> Result<Chips, GameError> {
        let seat = &mut self.seats[position];
        let chips = match seat.bet(chips) {
            Ok(()) => chips,
            Err(GameError::InsufficientChips { stack, .. }) => {
                seat.bet(stack)?;
                stack
            }
            Err(e) => return Err(e),
        };
        if seat.stack() == 0 {
            seat.reset_state(State::Shoving);
        }
        self.pot.add(position, chips);
        Ok(chips)
    }
}

/// Round and street transitions.
impl Game {
    fn progress<R: Rng>(&mut self, last: Option<Position>, rng: &mut R) {
        if self.is_uncontested() {
            self.concede();
        } else if self.is_round_complete() {
            self.next_street(rng);
        } else {
            self.ticker = self.next_actor(last);
        }
    }
    fn next_street<R: Rng>(&mut self, rng: &mut R) {
        self.ticker = None;
        while let Some(street) = self.street().next() {
            self.deal(street, rng);
            if !self.is_round_complete() {
                self.ticker = self.next_actor(None);
                return;
            }
        }
        self.showdown();
    }
    fn deal<R: Rng>(&mut self, street: Street, rng: &mut R) {
        let hand = self.deck().deal(street, rng);
        self.board.add(hand);
        self.history.push(Event::Draw(hand));
        self.stage = Stage::from(street);
        self.raises = 0;
        for seat in self.seats.iter_mut() {
            seat.reset_stake();
        }
        log::debug!("{:<7} {} pot {}", street, self.board, self.pot.total());
    }
    /// Everyone but one seat folded: it takes the pot unseen.
    fn concede(&mut self) {
        self.ticker = None;
        self.stage = Stage::Terminal;
        self.settlements = self
            .seats
            .iter()
            .map(|s| Settlement::from((s.spent(), s.state())))
            .collect();
        if let Some(winner) = self.seats.iter().position(|s| s.state().is_active()) {
            self.settlements[winner].add(self.pot.total());
            log::debug!("seat {} wins {} uncontested", winner, self.pot.total());
        }
    }
    fn showdown(&mut self) {
        self.ticker = None;
        self.stage = Stage::ShowDown;
        self.history.push(Event::Showdown);
        let ledger = self
            .seats
            .iter()
            .enumerate()
            .map(|(i, s)| match s.state() {
                State::Folding => Settlement::from((self.pot.contribution(i), s.state())),
                _ => Settlement::from((self.pot.contribution(i), s.state(), self.strength(s))),
            })
            .collect::<Vec<Settlement>>();
        let states = self.seats.iter().map(|s| s.state()).collect::<Vec<State>>();
        let pots = self.pot.sides(&states);
        self.settlements = Showdown::from((ledger, pots)).settle();
        self.stage = Stage::Terminal;
        for (i, settlement) in self.settlements.iter().enumerate() {
            log::debug!("{} {} {}", i, self.seats[i].cards(), settlement);
        }
    }
    fn strength(&self, seat: &Seat) -> Strength {
        Strength::from((seat.cards(), self.board))
    }
}

/// Betting round bookkeeping.
impl Game {
    /// exactly one seat has not folded
    fn is_uncontested(&self) -> bool {
        self.seats.iter().filter(|s| s.state().is_active()).count() == 1
    }
    /// Every betting seat has acted since the last raise and matched it.
    /// With at most one seat still betting, there is nobody left to bet
    /// against once it has matched.
    fn is_round_complete(&self) -> bool {
        let stake = self.effective_stake();
        let acted = self.acted();
        let betting = self
            .seats
            .iter()
            .enumerate()
            .filter(|(_, s)| s.state() == State::Betting)
            .collect::<Vec<(Position, &Seat)>>();
        if betting.len() <= 1 {
            betting.iter().all(|(_, s)| s.stake() >= stake)
        } else {
            betting.iter().all(|(i, s)| acted[*i] && s.stake() == stake)
        }
    }
    /// The next betting seat in street order that still owes a decision.
    fn next_actor(&self, after: Option<Position>) -> Option<Position> {
        let stake = self.effective_stake();
        let acted = self.acted();
        self.order()
            .after(after)
            .filter(|p| self.seats[*p].state() == State::Betting)
            .find(|p| !acted[*p] || self.seats[*p].stake() < stake)
    }
    /// Which seats have made a decision since the last raise on this street.
    /// Blinds are not decisions.
    fn acted(&self) -> Vec<bool> {
        let mut acted = vec![false; self.n()];
        let mut stakes = vec![0 as Chips; self.n()];
        let mut most = 0 as Chips;
        for event in self.street_events() {
            let Some(p) = event.position() else {
                continue;
            };
            stakes[p] += event.amount().unwrap_or(0);
            if event.is_blind() {
                most = most.max(stakes[p]);
            } else if event.is_choice() {
                if stakes[p] > most {
                    most = stakes[p];
                    acted.fill(false);
                }
                acted[p] = true;
            }
        }
        acted
    }
    fn street_events(&self) -> &[Event] {
        let start = self
            .history
            .iter()
            .rposition(Event::is_chance)
            .map(|i| i + 1)
            .unwrap_or(0);
        &self.history[start..]
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for seat in self.seats.iter() {
            write!(f, "{}{:<6}", seat.state(), seat.stack())?;
        }
        write!(f, " @ {:>6} {} {}", self.pot.total(), self.board, self.stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rand::seq::IndexedRandom;

    fn table(players: usize) -> Config {
        Config::default().with_players(players)
    }
    fn raise(game: &Game) -> Action {
        Action::Raise(game.to_raise())
    }
    fn random(game: &Game, rng: &mut SmallRng) -> Action {
        let legal = game.legal();
        match legal.choose(rng).copied() {
            Some(Action::Raise(n)) if rng.random_bool(0.2) => Action::Raise(n * 50),
            Some(action) => action,
            None => unreachable!("non-terminal states have legal actions"),
        }
    }
    fn is_conserved(game: &Game) -> bool {
        let spent = game.seats().iter().map(|s| s.spent()).sum::<Chips>();
        let stacks = game.seats().iter().map(|s| s.stack()).sum::<Chips>();
        let buyin = game.config().stack * game.n() as Chips;
        let paid = game.settlements().iter().map(|s| s.reward()).sum::<Chips>();
        game.pot().total() == spent
            && stacks + spent == buyin
            && (!game.is_terminal() || paid == game.pot().total())
    }

    #[test]
    fn blinds_posted() {
        for n in 2..=6 {
            for (sb, bb) in [(50, 100), (50, 1000), (200, 100), (200, 1000)] {
                let ref mut rng = SmallRng::seed_from_u64(n as u64);
                let game = Game::new(table(n).with_blinds(sb, bb), rng).unwrap();
                assert!(game.stage() == Stage::PreFlop);
                assert!(game.pot().total() == sb + bb);
                assert!(game.actor() == Some(if n == 2 { 0 } else { 2 }));
                assert!(game.history()[..2] == [Event::Blind(0, sb), Event::Blind(1, bb)]);
            }
        }
    }

    #[test]
    fn default_table() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let game = Game::new(Config::default(), rng).unwrap();
        assert!(game.n() == 3);
        assert!(game.pot().total() == 150);
        assert!(game.actor() == Some(2));
        assert!(game.deck().size() == 36 - 6);
        assert!(game.settlements().is_empty());
    }

    #[test]
    fn rejects_bad_tables() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        for n in [0, 1] {
            assert!(matches!(
                Game::new(table(n), rng),
                Err(GameError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn everyone_calls_then_folds() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let mut game = Game::new(table(3), rng).unwrap();
        for expected in [2, 0, 1] {
            assert!(game.actor() == Some(expected));
            assert!(game.legal().len() == 3);
            assert!(game.stage() == Stage::PreFlop);
            game = game.apply(Action::Call, rng).unwrap();
        }
        assert!(game.stage() == Stage::Flop);
        assert!(game.board().size() == 3);
        for expected in [0, 1] {
            assert!(game.actor() == Some(expected));
            assert!(game.legal().len() == 3);
            assert!(game.stage() == Stage::Flop);
            game = game.apply(Action::Fold, rng).unwrap();
        }
        assert!(game.is_terminal());
        assert!(game.legal().is_empty());
        assert!(game.turn() == Turn::Terminal);
        assert!(game.settlements()[2].reward() == 300);
        assert!(game.settlements()[2].won() == 200);
        assert!(is_conserved(&game));
    }

    #[test]
    fn raise_cap_per_street() {
        let ref mut rng = SmallRng::seed_from_u64(2);
        let mut game = Game::new(table(3), rng).unwrap();
        for _ in 0..3 {
            game = game.apply(Action::Call, rng).unwrap();
        }
        for street in [Stage::Flop, Stage::Turn] {
            for expected in [0, 1, 2] {
                assert!(game.actor() == Some(expected));
                assert!(game.legal().len() == 3);
                assert!(game.stage() == street);
                game = game.apply(raise(&game), rng).unwrap();
            }
            assert!(game.raises() == 3);
            for expected in [0, 1] {
                assert!(game.actor() == Some(expected));
                assert!(game.legal() == vec![Action::Fold, Action::Call]);
                assert!(game.stage() == street);
                game = game.apply(Action::Call, rng).unwrap();
            }
            let spent = game.seats().iter().map(|s| s.spent()).collect::<Vec<_>>();
            assert!(spent.iter().all(|s| *s == spent[0]));
        }
        assert!(game.stage() == Stage::River);
        assert!(game.raises() == 0);
        for expected in [0, 1] {
            assert!(game.actor() == Some(expected));
            assert!(game.legal().len() == 3);
            game = game.apply(Action::Fold, rng).unwrap();
        }
        assert!(game.is_terminal());
        assert!(game.pot().total() == 300 + 900 + 1800);
        assert!(is_conserved(&game));
    }

    #[test]
    fn raise_sizes_by_street() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let mut game = Game::new(table(2), rng).unwrap();
        assert!(game.to_raise() == 100);
        game = game.apply(Action::Call, rng).unwrap();
        game = game.apply(Action::Call, rng).unwrap();
        assert!(game.stage() == Stage::Flop);
        assert!(game.to_raise() == 100);
        game = game.apply(Action::Call, rng).unwrap();
        game = game.apply(Action::Call, rng).unwrap();
        assert!(game.stage() == Stage::Turn);
        assert!(game.to_raise() == 200);
        let game = game.apply(Action::Raise(500), rng).unwrap();
        assert!(game.to_call() == 500);
        assert!(game.history().last() == Some(&Event::Raise(0, 500)));
    }

    #[test]
    fn acting_order_by_street() {
        for n in 2..=4 {
            let ref mut rng = SmallRng::seed_from_u64(n as u64);
            let mut game = Game::new(table(n), rng).unwrap();
            let mut stage = game.stage();
            let mut i = 0;
            while game.stage().is_betting() {
                if game.stage() != stage {
                    stage = game.stage();
                    i = 0;
                }
                let order = match stage {
                    Stage::PreFlop => Rotation::preflop(n),
                    _ => Rotation::postflop(n),
                };
                assert!(game.order() == order);
                assert!(game.actor() == Some(order.order()[i]));
                game = game.apply(Action::Call, rng).unwrap();
                i += 1;
            }
            assert!(game.is_terminal());
            assert!(game.board().size() == 5);
            assert!(game.history().last() == Some(&Event::Showdown));
        }
    }

    #[test]
    fn uncontested_deals_nothing() {
        let ref mut rng = SmallRng::seed_from_u64(4);
        let game = Game::new(table(3), rng).unwrap();
        let game = game.apply(Action::Fold, rng).unwrap();
        let game = game.apply(Action::Fold, rng).unwrap();
        assert!(game.is_terminal());
        assert!(game.board().size() == 0);
        assert!(game.history().iter().all(|e| !e.is_chance()));
        assert!(game.settlements()[1].reward() == 150);
        assert!(game.settlements()[1].strength().is_none());
        assert!(game.settlements()[0].won() == -50);
    }

    #[test]
    fn rejections() {
        let ref mut rng = SmallRng::seed_from_u64(5);
        let game = Game::new(table(3), rng).unwrap();
        assert!(
            game.act(0, Action::Call, rng).unwrap_err()
                == GameError::OutOfTurn {
                    expected: 2,
                    actual: 0
                }
        );
        assert!(
            game.apply(Action::Raise(50), rng).unwrap_err()
                == GameError::IllegalAction(Action::Raise(50))
        );
        let game = game.act(2, Action::Fold, rng).unwrap();
        let game = game.act(0, Action::Fold, rng).unwrap();
        assert!(game.apply(Action::Call, rng).unwrap_err() == GameError::HandComplete);
        assert!(game.act(1, Action::Call, rng).unwrap_err() == GameError::HandComplete);
    }

    #[test]
    fn raise_after_cap_is_illegal() {
        let ref mut rng = SmallRng::seed_from_u64(6);
        let mut game = Game::new(table(2).with_raise_cap(1), rng).unwrap();
        game = game.apply(raise(&game), rng).unwrap();
        assert!(game.legal().len() == 2);
        let attempt = raise(&game);
        assert!(game.apply(attempt, rng).unwrap_err() == GameError::IllegalAction(attempt));
    }

    #[test]
    fn oversize_raise_goes_all_in() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let game = Game::new(table(2).with_stack(120), rng).unwrap();
        let game = game.apply(Action::Raise(100), rng).unwrap();
        assert!(game.history().last() == Some(&Event::Shove(0, 70)));
        assert!(game.seats()[0].state() == State::Shoving);
        assert!(game.raises() == 1);
        assert!(game.actor() == Some(1));
        assert!(game.to_call() == 20);
        let game = game.apply(Action::Raise(100), rng).unwrap();
        assert!(game.history()[..].contains(&Event::Shove(1, 20)));
        assert!(game.is_terminal());
        assert!(game.board().size() == 5);
        assert!(game.pot().total() == 240);
        assert!(is_conserved(&game));
    }

    #[test]
    fn huge_raise_goes_all_in() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let game = Game::new(Config::default(), rng).unwrap();
        assert!(game.is_allowed(&Action::Raise(Chips::MAX)));
        let game = game.apply(Action::Raise(Chips::MAX), rng).unwrap();
        assert!(game.history().last() == Some(&Event::Shove(2, 10_000)));
        assert!(game.seats()[2].state() == State::Shoving);
        assert!(game.raises() == 1);
        assert!(game.actor() == Some(0));
        assert!(is_conserved(&game));
    }

    #[test]
    fn uneven_all_ins_pay_by_tier() {
        let stacks = [300, 10_000, 10_000];
        for seed in 0..20 {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            let game = Game::with_stacks(table(3), &stacks, rng).unwrap();
            let game = game.apply(Action::Raise(Chips::MAX), rng).unwrap();
            let game = game.apply(Action::Call, rng).unwrap();
            assert!(game.history().last() == Some(&Event::Shove(0, 250)));
            let game = game.apply(Action::Call, rng).unwrap();
            assert!(game.is_terminal());
            assert!(game.board().size() == 5);
            let states = game.seats().iter().map(|s| s.state()).collect::<Vec<_>>();
            let sides = game.pot().sides(&states);
            assert!(sides.len() == 2);
            assert!(sides[0].amount == 900 && sides[0].eligible == vec![0, 1, 2]);
            assert!(sides[1].amount == 19_400 && sides[1].eligible == vec![1, 2]);
            let strengths = game
                .seats()
                .iter()
                .map(|s| Strength::from((s.cards(), game.board())))
                .collect::<Vec<_>>();
            let mut expected = vec![0 as Chips; 3];
            for side in sides.iter() {
                let best = side.eligible.iter().map(|i| strengths[*i]).max().unwrap();
                let winners = side
                    .eligible
                    .iter()
                    .copied()
                    .filter(|i| strengths[*i] == best)
                    .collect::<Vec<_>>();
                for i in winners.iter() {
                    expected[*i] += side.amount / winners.len() as Chips;
                }
            }
            let paid = game
                .settlements()
                .iter()
                .map(|s| s.reward())
                .collect::<Vec<_>>();
            assert!(paid == expected);
            assert!(paid[0] <= 900);
            assert!(paid.iter().sum::<Chips>() == 20_300);
        }
    }

    #[test]
    fn stacks_must_fit_the_table() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let tables: [&[Chips]; 3] = [&[100], &[100, 0, 100], &[Chips::MAX, 1, 1]];
        for stacks in tables {
            assert!(matches!(
                Game::with_stacks(table(3), stacks, rng),
                Err(GameError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn short_blind_goes_all_in() {
        let ref mut rng = SmallRng::seed_from_u64(8);
        let game = Game::new(table(2).with_stack(80), rng).unwrap();
        assert!(game.history()[1] == Event::Blind(1, 80));
        assert!(game.seats()[1].state() == State::Shoving);
        assert!(game.actor() == Some(0));
        assert!(game.to_call() == 30);
        let game = game.apply(Action::Call, rng).unwrap();
        assert!(game.is_terminal());
        assert!(game.pot().total() == 160);
        assert!(is_conserved(&game));
    }

    #[test]
    fn both_blinds_all_in() {
        let ref mut rng = SmallRng::seed_from_u64(9);
        let game = Game::new(table(2).with_stack(40), rng).unwrap();
        assert!(game.is_terminal());
        assert!(game.actor().is_none());
        assert!(game.board().size() == 5);
        assert!(game.history().contains(&Event::Showdown));
        assert!(is_conserved(&game));
    }

    #[test]
    fn flops_are_random() {
        let flops = (0..5)
            .map(|seed| {
                let ref mut rng = SmallRng::seed_from_u64(seed);
                let mut game = Game::new(table(3), rng).unwrap();
                while game.stage() == Stage::PreFlop {
                    game = game.apply(Action::Call, rng).unwrap();
                }
                game.board()
            })
            .collect::<Vec<Board>>();
        assert!(flops.iter().any(|flop| *flop != flops[0]));
    }

    #[test]
    fn seeds_replay() {
        let play = |seed: u64| {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            let mut game = Game::new(table(4), rng).unwrap();
            while !game.is_terminal() {
                let action = random(&game, rng);
                game = game.apply(action, rng).unwrap();
            }
            game.history().to_vec()
        };
        assert!(play(42) == play(42));
    }

    #[test]
    fn no_raise_call_call_heads_up() {
        let ref mut rng = SmallRng::seed_from_u64(42);
        for n in [2, 3] {
            for _ in 0..200 {
                let mut game = Game::new(table(n), rng).unwrap();
                let mut rounds = std::collections::HashMap::<Stage, Vec<Action>>::new();
                while !game.is_terminal() {
                    let action = *game.legal().choose(rng).unwrap();
                    let active = game.seats().iter().filter(|s| s.state().is_active()).count();
                    if active == 2 {
                        let round = rounds.entry(game.stage()).or_default();
                        round.push(action);
                        assert!(!round.windows(3).any(|w| {
                            w[0].is_aggro() && w[1] == Action::Call && w[2] == Action::Call
                        }));
                    }
                    game = game.apply(action, rng).unwrap();
                }
            }
        }
    }

    #[test]
    fn random_selfplay_conserves_chips() {
        let ref mut rng = SmallRng::seed_from_u64(10);
        for hand in 0..500 {
            let n = 2 + hand % 5;
            let stack = [10_000, 250, 400, 1_000][hand % 4];
            let mut game = Game::new(table(n).with_stack(stack), rng).unwrap();
            assert!(is_conserved(&game));
            while let Some(actor) = game.actor() {
                assert!(game.seats()[actor].state() == State::Betting);
                assert!(!game.legal().is_empty());
                let action = random(&game, rng);
                let child = game.apply(action, rng).unwrap();
                assert!(child.stage() >= game.stage());
                assert!(is_conserved(&child));
                game = child;
            }
            assert!(game.is_terminal());
            assert!(game.legal().is_empty());
            assert!(game.settlements().len() == n);
            let active = game.seats().iter().filter(|s| s.state().is_active()).count();
            let showdown = game.history().contains(&Event::Showdown);
            assert!(active == 1 || showdown);
            assert!(!showdown || game.board().size() == 5);
        }
    }

    #[test]
    fn deck_excludes_dealt_cards() {
        let ref mut rng = SmallRng::seed_from_u64(11);
        let mut game = Game::new(table(4), rng).unwrap();
        while game.stage() == Stage::PreFlop {
            game = game.apply(Action::Call, rng).unwrap();
        }
        let deck = game.deck();
        assert!(deck.size() == 36 - 8 - 3);
        assert!(game.board().cards().iter().all(|c| !deck.contains(c)));
        for seat in game.seats() {
            assert!(Hand::from(seat.cards()).all(|c| !deck.contains(&c)));
        }
    }
}
