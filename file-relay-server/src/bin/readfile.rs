//! Prints one file to stdout.
//!
//! This is the same reader the HTTP server calls in-process, exposed as
//! a standalone tool. Content goes to stdout verbatim on success (exit
//! code 0); any failure prints a message to stderr and exits 1.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueHint};

use file_relay_server::reader;

#[derive(Parser)]
#[command(version, about = "Reads a file and prints its content verbatim.")]
struct CliArgs {
    /// Path of the file to read, resolved against the working directory.
    #[arg(short, long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    file: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let CliArgs { file } = CliArgs::parse();

    match reader::read_file(&file).await {
        Ok(content) => {
            print!("{content}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
