//! # Othello Canon
//!
//! An N x N Othello engine with a depth-limited minimax opponent, a symmetry
//! canonicalizer that maps every position to one representative of its
//! rotation/reflection orbit, and a compact base-81 position hash.
//!
//! ## Modules
//!
//! - [`game`]: Board rules, players, game state, move records, game loop
//! - [`ai`]: Agent trait, random and minimax agents, evaluators, encodings
//! - [`symmetry`]: Symmetry detection, weight comparators, canonicalization
//! - [`hash`]: Base-81 position hash and state-action keys
//! - [`config`]: TOML configuration loading and validation
//! - [`logging`]: Logger setup
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod hash;
pub mod logging;
pub mod symmetry;

#[cfg(test)]
pub(crate) mod test_support;
