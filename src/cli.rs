//! Command-line definition

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the clap command for the `iconsplit` binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("iconsplit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Split a stacked icon sheet into three cropped, transparent PNG icons")
        .arg(
            Arg::new("input")
                .help("Source image holding the three icons (overrides the configured source)")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Directory to write house-3d.png, balloon-3d.png and bell-3d.png into")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file with a [paths] table (source, output_dir)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("inspect")
                .long("inspect")
                .help("Report band rows and content boxes without writing files")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("progress")
                .long("progress")
                .help("Show a progress bar while splitting")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Echo info and debug log records to stderr")
                .action(ArgAction::SetTrue),
        )
}
