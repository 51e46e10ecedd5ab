use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use transcript_prep::{EXTRACT_TEXT, execute, setup_logging};

#[derive(Parser)]
#[command(name = "extract-text")]
#[command(author, version, about = "Extract plain text from a markup document", long_about = None)]
struct Cli {
    /// Input document (HTML or any markup); output goes to the same path with a .txt extension
    input: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    execute(&EXTRACT_TEXT, &cli.input)
}
