use std::fs;

use clap::Parser;
use solar::{error::RuntimeError, get_result, init_tracing};

/// solar runs programs written in the Solar scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells solar to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints debug traces of declarations, calls and returns to stderr
    /// when `RUST_LOG` is not set.
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if let Err(e) = get_result(&script) {
        if let Some(RuntimeError::Exit { code }) = e.downcast_ref::<RuntimeError>() {
            std::process::exit(*code);
        }
        eprintln!("{e}");
        std::process::exit(1);
    }
}
