//! pagepush - stage, commit and push a static site, then print its pages URL
//!
//! Usage: pagepush [PRESET] [OPTIONS]
//!
//! Presets:
//!   html    *.html
//!   web     *.html and *.css
//!   all     every file in the working tree
//!   assets  web assets, after checking icons and the manifest

mod commands;
mod ui;

use clap::Parser;
use pagepush::presentation::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = commands::publish::cmd_publish(&cli) {
        ui::error::print_error(&err, cli.json);
        std::process::exit(1);
    }
}
