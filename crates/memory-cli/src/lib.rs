//! Terminal host for the memory game: renders the board, owns the
//! flip-back delay, and talks to the result store over HTTP.

pub mod client;
pub mod config;
pub mod error;
pub mod render;
