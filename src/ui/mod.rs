//! Terminal presentation for the `pagepush` binary

pub mod blocks;
pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod primitives;
pub mod progress;
pub mod prompt;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
