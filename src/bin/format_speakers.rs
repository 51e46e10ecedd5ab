use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use transcript_prep::{FORMAT_SPEAKERS, execute, setup_logging};

#[derive(Parser)]
#[command(name = "format-speakers")]
#[command(author, version, about = "Put each transcript speaker turn on its own line", long_about = None)]
struct Cli {
    /// Input transcript; output goes to <stem>_formatted<ext> beside it
    input: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    execute(&FORMAT_SPEAKERS, &cli.input)
}
