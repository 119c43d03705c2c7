use std::process;
use log::error;

use iconsplit::cli::build_cli;
use iconsplit::commands::{CommandFactory, IconsplitCommandFactory};
use iconsplit::IconSplitter;

fn main() {
    let matches = build_cli().get_matches();
    let verbose = matches.get_flag("verbose");

    if let Err(e) = iconsplit::utils::logger::Logger::init_global_logger("iconsplit-global.log", verbose) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let splitter = match IconSplitter::new(Some("iconsplit.log")) {
        Ok(s) => s.with_progress(matches.get_flag("progress")),
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    let factory = IconsplitCommandFactory::new();

    // Pipeline failures are reported, not signalled through the exit code
    match factory.create_command(&matches, &splitter) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                println!("Error: {}", e);
            }
        }
        Err(e) => {
            error!("Failed to create command: {}", e);
            println!("Error: {}", e);
        }
    };
}
