//! Split command
//!
//! Cuts the sheet into its three icons and writes them out, printing one
//! confirmation line per file.

use clap::ArgMatches;
use log::info;

use crate::api::IconSplitter;
use crate::commands::command_traits::Command;
use crate::commands::resolve_config;
use crate::config::SplitConfig;
use crate::errors::SplitResult;

/// Command for splitting a sheet into icon files
pub struct SplitCommand<'a> {
    /// Source and output locations
    config: SplitConfig,
    /// Library entry point
    splitter: &'a IconSplitter,
}

impl<'a> SplitCommand<'a> {
    /// Create a new split command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `splitter` - Library entry point
    pub fn new(args: &ArgMatches, splitter: &'a IconSplitter) -> SplitResult<Self> {
        let config = resolve_config(args)?;
        Ok(SplitCommand { config, splitter })
    }
}

impl<'a> Command for SplitCommand<'a> {
    fn execute(&self) -> SplitResult<()> {
        info!("Splitting {} into {}", self.config.source.display(), self.config.output_dir.display());

        self.splitter.split(&self.config.source, &self.config.output_dir, |band, _| {
            println!("Saved {}", band.file_name());
        })?;

        Ok(())
    }
}
