//! Rules engine for multi-player short deck Hold-Em.
//!
//! A hand of poker is a chain of immutable [`gameplay::Game`] values. Each
//! call to [`gameplay::Game::apply`] consumes one player decision and yields
//! the successor state, dealing community cards from an explicitly passed
//! random stream whenever a betting round closes.
//!
//! - [`cards`]: cards, bitset hands, the 36-card deck, and the evaluator
//! - [`gameplay`]: seats, pot, betting rounds, showdown settlement
pub mod cards;
pub mod gameplay;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes and bet amounts in chips.
pub type Chips = u32;
/// Seat index around the table (0 posts the small blind).
pub type Position = usize;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Default number of players at the table.
pub const N: usize = 3;
/// Default starting stack.
pub const STACK: Chips = 10_000;
/// Default big blind amount.
pub const B_BLIND: Chips = 100;
/// Default small blind amount.
pub const S_BLIND: Chips = 50;
/// Maximum raises per betting round.
pub const MAX_RAISE_REPEATS: usize = 3;
/// Most players a 36-card deck can seat: 2 hole cards each plus 5 on board.
pub const MAX_PLAYERS: usize = 15;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
#[cfg(feature = "server")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    if simplelog::CombinedLogger::init(vec![term]).is_err() {
        log::warn!("logger already initialized");
    }
}
