//! # Truth or Fake?
//!
//! A guessing game: each round shows a piece of advice that is either genuine
//! (fetched from a public advice API) or fabricated (picked from a local list).
//! The player calls it TRUE or FAKE. A correct call is worth +1, a wrong one -1;
//! starting from 10, reaching 20 wins and dropping to 0 loses.
//!
//! ## Module Organization
//!
//! - [`game`] - state record, pure reducer and the controller that drives it
//! - [`advice`] - real-advice HTTP client and the fabricated fixture list
//! - [`notify`] - non-blocking notices raised by transitions
//! - [`terminal`] - text rendering and command parsing for the CLI
//! - [`config`] - TOML configuration
//! - [`metrics`] - process-wide play counters
//! - [`logutil`] - single-line previews of untrusted text for logs
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   terminal /    │ ← intents in, rendered state out
//! │   main.rs       │
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │ GameController  │ ← RNG, advice lookup, fallback on fetch failure
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │    reduce()     │ ← pure state transitions
//! └─────────────────┘
//! ```

pub mod advice;
pub mod config;
pub mod game;
pub mod logutil;
pub mod metrics;
pub mod notify;
pub mod terminal;
