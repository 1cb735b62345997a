mod commands;
mod input_output;
mod logging;
mod tokenizer_args;
mod vocab_args;

use clap::{CommandFactory, Parser};
use commands::Commands;

/// wordmill: corpus vocabularies and token-id files.
#[derive(clap::Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Print the full command reference as markdown, and exit.
    #[arg(long, hide = true)]
    markdown_help: bool,

    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Option<Commands>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Args>();
        return Ok(());
    }

    match &args.command {
        Some(command) => command.run(),
        None => {
            Args::command().print_help()?;
            Ok(())
        }
    }
}
