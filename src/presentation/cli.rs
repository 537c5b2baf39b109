//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! `pagepush` has no subcommands: the optional positional argument picks a
//! preset and flags adjust it.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::value_objects::{Preset, Strictness};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// pagepush - stage, commit and push a static site, then print its pages URL
#[derive(Parser, Debug)]
#[command(name = "pagepush")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Presets:\n  \
    html    stage *.html (strict)\n  \
    web     stage *.html and *.css (strict)\n  \
    all     stage every file except caches and dotfiles (strict)\n  \
    assets  check icons and manifest, then stage web assets (lenient)\n\n\
    Run 'pagepush' without arguments to use the configured default preset.")]
pub struct Cli {
    /// Preset selecting which files are staged
    #[arg(value_enum)]
    pub preset: Option<Preset>,

    /// Custom pathspec to stage (repeatable); replaces the preset's selection
    #[arg(short = 'p', long = "pattern", value_name = "PATHSPEC")]
    pub patterns: Vec<String>,

    /// Fail on the first staging error
    #[arg(long, conflicts_with = "lenient")]
    pub strict: bool,

    /// Warn and continue on staging errors
    #[arg(long)]
    pub lenient: bool,

    /// Continue without prompting when essential assets are missing
    #[arg(short, long)]
    pub yes: bool,

    /// Commit message prefix (a timestamp is appended)
    #[arg(short, long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Remote whose URL is used to guess the pages address
    #[arg(long, value_name = "NAME")]
    pub remote: Option<String>,

    /// Repository working directory
    #[arg(short = 'C', long = "dir", value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Output NDJSON events instead of text
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Strictness requested on the command line, if any
    pub fn strictness_override(&self) -> Option<Strictness> {
        if self.strict {
            Some(Strictness::Strict)
        } else if self.lenient {
            Some(Strictness::Lenient)
        } else {
            None
        }
    }

    /// `--dir`, or the current directory
    pub fn working_dir(&self) -> std::io::Result<PathBuf> {
        match &self.dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir(),
        }
    }
}
