use clap::{ArgAction, Parser};
use std::error::Error;

pub mod command;
pub mod logger;

pub type CliResult<T> = Result<T, Box<dyn Error>>;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub commands: command::Commands,

    /// Log to stderr (`-v` for debug, `-vv` for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}
