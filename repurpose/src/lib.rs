pub mod cli;
pub mod client;
pub mod input;
pub mod load_config;

pub use cli::{run, Cli, Commands, OutputFormat};
