pub mod errors;
pub mod config;
pub mod processing;
pub mod pipeline;
pub mod utils;
pub mod commands;
pub mod cli;
pub mod api;

pub use crate::api::IconSplitter;

pub use config::SplitConfig;
pub use errors::{SplitError, SplitResult};
pub use processing::{Band, Region, remove_background};
