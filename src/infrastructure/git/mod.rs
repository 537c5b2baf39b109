//! Version control implementations

mod cli;

pub use cli::GitCli;
