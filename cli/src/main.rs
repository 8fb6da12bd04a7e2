use clap::Parser;
use quire_cli::command::Commands;
use quire_cli::{Cli, CliResult, logger};
use std::process::ExitCode;

fn main() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    match cli.commands {
        Commands::Audit(audit) => audit.run(),
        Commands::Toc(toc) => toc.run(),
        Commands::Chapters(chapters) => chapters.run(),
    }
}
