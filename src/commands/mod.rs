//! CLI command implementations
//!
//! This module contains the commands supported by the CLI application
//! using the Command pattern.

pub mod command_traits;
pub mod split_command;
pub mod inspect_command;

pub use command_traits::{Command, CommandFactory};
pub use split_command::SplitCommand;
pub use inspect_command::InspectCommand;

use clap::ArgMatches;
use log::debug;
use crate::api::IconSplitter;
use crate::config::SplitConfig;
use crate::errors::SplitResult;

/// Build the effective configuration from CLI arguments
///
/// Starts from the built-in defaults, applies `--config` if given, then
/// the positional source and `--output`.
pub fn resolve_config(args: &ArgMatches) -> SplitResult<SplitConfig> {
    let mut config = match args.get_one::<String>("config") {
        Some(path) => SplitConfig::load(path)?,
        None => SplitConfig::defaults(),
    };

    if let Some(source) = args.get_one::<String>("input") {
        config = config.with_source(source);
    }
    if let Some(output_dir) = args.get_one::<String>("output") {
        config = config.with_output_dir(output_dir);
    }

    debug!("Resolved configuration: {:?}", config);
    Ok(config)
}

/// Factory for creating command instances based on CLI arguments
pub struct IconsplitCommandFactory;

impl IconsplitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        IconsplitCommandFactory
    }
}

impl Default for IconsplitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for IconsplitCommandFactory {
    fn create_command(&self, args: &ArgMatches, splitter: &'a IconSplitter) -> SplitResult<Box<dyn Command + 'a>> {
        if args.get_flag("inspect") {
            Ok(Box::new(InspectCommand::new(args, splitter)?))
        } else {
            Ok(Box::new(SplitCommand::new(args, splitter)?))
        }
    }
}
