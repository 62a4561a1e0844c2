//! # Facility Black - a turn-based terminal horror adventure
//!
//! You wake up in an abandoned underground facility. A rogue AI wanders its
//! seven rooms. Find the encrypted USB behind the lab code, reach the
//! Sub-Basement and hack your way out before your health runs out.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use facility_black::console::{Pacing, TerminalConsole};
//! use facility_black::game::Game;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut game = Game::new(None)?;
//!     let mut console = TerminalConsole::stdio(Pacing::instant());
//!     game.intro(&mut console)?;
//!     let ending = game.run(&mut console)?;
//!     println!("{:?}", ending);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - room graph, actors, event and encounter resolution, turn loop
//! - [`console`] - terminal [`game::Console`] with suspense printing
//! - [`config`] - TOML configuration
//! - [`logutil`] - helpers for logging raw player input

pub mod config;
pub mod console;
pub mod game;
pub mod logutil;
