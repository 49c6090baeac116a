//! Self-play Binary
//!
//! Plays uniformly random hands in parallel, checking chip conservation and
//! stage ordering after every action, then prints a JSON summary.
//!
//! Options: --hands, --seed, --config, --players, --transcript, -v

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use serde::Serialize;
use shortdeck::Chips;
use shortdeck::gameplay::*;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Random self-play for short deck Hold-Em", long_about = None)]
struct Args {
    #[arg(long, default_value_t = 10_000, help = "Number of hands to play")]
    hands: usize,
    #[arg(long, default_value_t = 0, help = "Hand i is seeded with seed + i")]
    seed: u64,
    #[arg(long, help = "JSON table configuration")]
    config: Option<PathBuf>,
    #[arg(long)]
    players: Option<usize>,
    #[arg(long)]
    small_blind: Option<Chips>,
    #[arg(long)]
    big_blind: Option<Chips>,
    #[arg(long)]
    stack: Option<Chips>,
    #[arg(long)]
    raise_cap: Option<usize>,
    #[arg(long, help = "Print the first hand's history instead of a summary")]
    transcript: bool,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn table(&self) -> anyhow::Result<Config> {
        let mut config = match self.config {
            Some(ref path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str::<Config>(&json)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => Config::default(),
        };
        if let Some(players) = self.players {
            config = config.with_players(players);
        }
        if let Some(stack) = self.stack {
            config = config.with_stack(stack);
        }
        if let Some(raise_cap) = self.raise_cap {
            config = config.with_raise_cap(raise_cap);
        }
        config = config.with_blinds(
            self.small_blind.unwrap_or(config.small_blind),
            self.big_blind.unwrap_or(config.big_blind),
        );
        config.validate()?;
        Ok(config)
    }
    fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Default, Serialize)]
struct Summary {
    hands: usize,
    showdowns: usize,
    uncontested: usize,
    actions: usize,
    mean_pot: f64,
    endings: BTreeMap<String, usize>,
}

impl FromIterator<(Game, usize)> for Summary {
    fn from_iter<I: IntoIterator<Item = (Game, usize)>>(iter: I) -> Self {
        let mut summary = Self::default();
        let mut pots = 0u64;
        for (game, actions) in iter {
            let showdown = game.history().contains(&Event::Showdown);
            summary.hands += 1;
            summary.actions += actions;
            summary.showdowns += showdown as usize;
            summary.uncontested += !showdown as usize;
            pots += game.pot().total() as u64;
            *summary.endings.entry(game.street().to_string()).or_default() += 1;
        }
        summary.mean_pot = pots as f64 / summary.hands.max(1) as f64;
        summary
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    shortdeck::log(args.level());
    let config = args.table()?;
    log::info!("playing {} hands at {:?}", args.hands, config);
    if args.transcript {
        let (game, _) = play(config, args.seed)?;
        transcript(&game);
        return Ok(());
    }
    let summary = (0..args.hands)
        .into_par_iter()
        .map(|i| play(config, args.seed + i as u64))
        .collect::<anyhow::Result<Vec<(Game, usize)>>>()?
        .into_iter()
        .collect::<Summary>();
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Plays one hand to completion with uniformly random legal actions.
fn play(config: Config, seed: u64) -> anyhow::Result<(Game, usize)> {
    let ref mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Game::new(config, rng)?;
    let mut actions = 0;
    check(&game).with_context(|| format!("seed {} after blinds", seed))?;
    while !game.is_terminal() {
        let action = *game.legal().choose(rng).context("no legal actions")?;
        let child = game.apply(action, rng)?;
        anyhow::ensure!(
            child.stage() >= game.stage(),
            "seed {}: stage went from {} to {}",
            seed,
            game.stage(),
            child.stage()
        );
        check(&child).with_context(|| format!("seed {} after {}", seed, action))?;
        game = child;
        actions += 1;
    }
    Ok((game, actions))
}

/// Every chip is either behind, in the pot, or paid out of it.
fn check(game: &Game) -> anyhow::Result<()> {
    let spent = game.seats().iter().map(|s| s.spent()).sum::<Chips>();
    let stacks = game.seats().iter().map(|s| s.stack()).sum::<Chips>();
    let buyin = game.config().stack * game.n() as Chips;
    anyhow::ensure!(
        game.pot().total() == spent,
        "pot {} != committed {}",
        game.pot().total(),
        spent
    );
    anyhow::ensure!(stacks + spent == buyin, "chips leaked: {} != {}", stacks + spent, buyin);
    if game.is_terminal() {
        let paid = game.settlements().iter().map(|s| s.reward()).sum::<Chips>();
        anyhow::ensure!(paid == spent, "paid {} of a {} pot", paid, spent);
    }
    Ok(())
}

fn transcript(game: &Game) {
    for event in game.history() {
        let line = event.to_string();
        let line = match event {
            Event::Fold(_) => line.red(),
            Event::Check(_) => line.cyan(),
            Event::Call(..) => line.yellow(),
            Event::Raise(..) => line.green(),
            Event::Shove(..) => line.magenta(),
            Event::Blind(..) | Event::Draw(_) | Event::Showdown => line.white(),
        };
        println!("{}", line);
    }
    for (i, (seat, settlement)) in game.seats().iter().zip(game.settlements()).enumerate() {
        println!("{} {}  {}", i, seat, settlement);
    }
    println!("{}", game.to_string().bright_green());
}
