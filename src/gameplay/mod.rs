pub mod action;
pub use action::*;

pub mod config;
pub use config::*;

pub mod error;
pub use error::*;

pub mod event;
pub use event::*;

pub mod game;
pub use game::*;

pub mod pnl;
pub use pnl::*;

pub mod pot;
pub use pot::*;

pub mod rotation;
pub use rotation::*;

pub mod seat;
pub use seat::*;

pub mod settlement;
pub use settlement::*;

pub mod showdown;
pub use showdown::*;

pub mod stage;
pub use stage::*;

pub mod turn;
pub use turn::*;
