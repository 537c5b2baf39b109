//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up and layers
//! command-line flags over the loaded configuration.

use std::path::Path;

use crate::application::{PublishOptions, PublishUseCase};
use crate::config::Config;
use crate::domain::ports::Confirm;
use crate::domain::value_objects::{Preset, Strictness};
use crate::infrastructure::GitCli;

use super::cli::Cli;

/// Publish use case backed by the git command line
pub type ConcretePublishUseCase<C> = PublishUseCase<GitCli, C>;

/// Create a publish use case for the repository at `root`
pub fn create_publish_use_case<C: Confirm>(
    config: &Config,
    root: &Path,
    confirm: C,
) -> ConcretePublishUseCase<C> {
    let git = GitCli::with_program(config.publish.git.clone(), root);
    PublishUseCase::new(git, confirm)
}

/// Preset on the command line, else the configured default
pub fn resolve_preset(cli: &Cli, config: &Config) -> Preset {
    cli.preset.unwrap_or(config.publish.preset)
}

/// Publish options for `root`: built-in defaults, then config, then flags.
pub fn publish_options(cli: &Cli, config: &Config, root: &Path) -> PublishOptions {
    let preset = resolve_preset(cli, config);
    let mut options = config.publish_options(root, preset);

    if !cli.patterns.is_empty() {
        options = options.with_patterns(cli.patterns.clone());
        if config.publish.strict.is_none() {
            options = options.with_strictness(Strictness::Strict);
        }
    }
    if let Some(strictness) = cli.strictness_override() {
        options = options.with_strictness(strictness);
    }
    if let Some(message) = &cli.message {
        options = options.with_message_prefix(message.clone());
    }
    if let Some(remote) = &cli.remote {
        options = options.with_remote(remote.clone());
    }

    options
}

/// Whether missing essential assets should prompt before continuing
pub fn should_confirm(cli: &Cli, config: &Config) -> bool {
    !cli.yes && config.publish.confirm
}
