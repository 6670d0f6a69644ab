//! # Game core
//!
//! - [`state`] - the serializable game record and score rules
//! - [`reducer`] - pure `(state, event) -> (state, effects)` transitions
//! - [`controller`] - runs effects: coin flip, advice lookup, notifications
//!
//! ```rust,no_run
//! use rand::{rngs::StdRng, SeedableRng};
//! use truthorfake::advice::{AdviceClient, FixtureSet};
//! use truthorfake::config::Config;
//! use truthorfake::game::GameController;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::default();
//!     let client = AdviceClient::new(config.advice.clone());
//!     let mut game = GameController::new(client, FixtureSet::builtin(), StdRng::from_entropy());
//!     game.start_game().await;
//!     println!("{}", game.state().current_advice);
//!     game.guess(true).await;
//! }
//! ```

pub mod controller;
pub mod reducer;
pub mod state;

pub use controller::GameController;
pub use reducer::{reduce, GameEffect, GameEvent, ResolvedAdvice, Transition};
pub use state::{GameOutcome, GameState, HistoryItem, Phase, ScoreRules};
