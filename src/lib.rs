//! Log live 6-max no limit hold'em hands one action at a time.
//!
//! The crate is split into:
//!
//! - [`core`]: seats, cards and the board.
//! - [`tracker`]: the betting state machine for a single hand, the session
//!   that wraps it and the historians that listen to it.
//! - [`history`]: saved hands on disk. Needs the `serde` feature, which is
//!   on by default.
//!
//! Amounts are in big blinds throughout. Nothing here installs a logger;
//! everything logs through `tracing` so install whichever subscriber you
//! like.
#![allow(clippy::float_cmp)]

pub mod core;
pub mod tracker;

#[cfg(feature = "serde")]
pub mod history;
