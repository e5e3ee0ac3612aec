//! Shared model and state for the meme generator widget.
//!
//! Everything in here is target-independent: the Yew frontend drives it from
//! browser events and the unit tests drive it directly.

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod session;
