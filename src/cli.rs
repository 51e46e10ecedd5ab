use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use crate::error::PrepError;
use crate::extract::extract_text;
use crate::io::{formatted_output_path, read_document, text_output_path, write_output};
use crate::speakers::format_speakers;

/// One single-file utility: how it names its output and transforms its input
#[derive(Debug, Clone, Copy)]
pub struct Tool {
    pub name: &'static str,
    /// Printed on success, before the output path
    pub success_message: &'static str,
    pub output_path: fn(&Path) -> PathBuf,
    pub transform: fn(&str) -> String,
}

/// Markup document to normalized plain text, written to `<input>.txt`
pub const EXTRACT_TEXT: Tool = Tool {
    name: "extract-text",
    success_message: "Text extracted successfully!",
    output_path: text_output_path,
    transform: extract_text,
};

/// One speaker turn per line, written to `<stem>_formatted<ext>`
pub const FORMAT_SPEAKERS: Tool = Tool {
    name: "format-speakers",
    success_message: "Speakers formatted successfully!",
    output_path: formatted_output_path,
    transform: format_speakers,
};

/// Install the stderr log subscriber
pub fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

/// Read `input`, transform it and write the result, returning the output path
pub fn run_tool(tool: &Tool, input: &Path) -> Result<PathBuf> {
    info!("{}: processing {:?}", tool.name, input);
    let document = read_document(input)?;

    let output = (tool.transform)(&document);

    let output_path = (tool.output_path)(input);
    write_output(&output_path, &output)?;
    info!("{}: wrote {} bytes to {:?}", tool.name, output.len(), output_path);

    Ok(output_path)
}

/// Run a tool and turn the outcome into the user-facing report and exit code
pub fn execute(tool: &Tool, input: &Path) -> ExitCode {
    match run_tool(tool, input) {
        Ok(output_path) => {
            println!("{}", tool.success_message);
            println!("Output saved to: {}", output_path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", error_message(&err));
            ExitCode::FAILURE
        }
    }
}

/// Missing inputs get their own message; everything else is a processing failure
fn error_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<PrepError>() {
        Some(prep) if prep.is_not_found() => format!("Error: {}", prep),
        _ => format!("Error processing file: {:#}", err),
    }
}
