//! Inspect command
//!
//! Reports the band layout and content boxes of a sheet without
//! writing any files.

use clap::ArgMatches;

use crate::api::IconSplitter;
use crate::commands::command_traits::Command;
use crate::commands::resolve_config;
use crate::config::SplitConfig;
use crate::errors::SplitResult;

/// Command for a dry run over a sheet
pub struct InspectCommand<'a> {
    config: SplitConfig,
    splitter: &'a IconSplitter,
}

impl<'a> InspectCommand<'a> {
    pub fn new(args: &ArgMatches, splitter: &'a IconSplitter) -> SplitResult<Self> {
        let config = resolve_config(args)?;
        Ok(InspectCommand { config, splitter })
    }
}

impl<'a> Command for InspectCommand<'a> {
    fn execute(&self) -> SplitResult<()> {
        let report = self.splitter.inspect(&self.config.source)?;
        print!("{}", report);
        Ok(())
    }
}
