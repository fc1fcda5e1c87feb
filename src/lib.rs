//! # solar
//!
//! solar is a tree-walking interpreter for the Solar scripting language.
//! It lexes and parses Solar source into a syntax tree and evaluates it with
//! integer, boolean and string values, user-defined functions, `if`/`else`,
//! `while` loops and a small set of builtins.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{io::Write, sync::Once};

use crate::interpreter::{evaluator::core::Context, parser::core::parse_source};

/// Defines the structure of parsed code.
///
/// This module declares the statement, expression, term and factor nodes that
/// represent Solar source as a tree. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines node types for all language constructs.
/// - Attaches source lines to nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing or
/// evaluating code, each carrying the source line it refers to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, variable storage and
/// value representations to provide a complete runtime for Solar programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;

static TRACING_INIT: Once = Once::new();

/// Initializes tracing output on stderr.
///
/// The filter is read from `RUST_LOG` when it is set. Otherwise `verbose`
/// enables debug output for this crate, and without either nothing is
/// installed. Repeated calls have no effect.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if verbose {
            EnvFilter::new("solar=debug")
        } else {
            return;
        };

        let layer = fmt::layer().with_writer(std::io::stderr)
                                .with_target(true)
                                .with_level(true);

        tracing_subscriber::registry().with(layer).with(filter).init();
    });
}

/// Parses and executes a Solar program, printing to standard output.
///
/// If execution succeeds, it returns `Ok(())`; otherwise, it returns the
/// parse or runtime error. A call of the `exit` builtin is reported as
/// [`error::RuntimeError::Exit`] carrying the requested status.
///
/// # Errors
/// Returns an error if parsing or evaluation fails, or if the program calls
/// `exit`.
///
/// # Examples
/// ```
/// use solar::get_result;
///
/// let source = "x = 2 + 2";
/// assert!(get_result(source).is_ok());
///
/// // 'y' is not defined.
/// let source = "x = y + 1";
/// assert!(get_result(source).is_err());
/// ```
pub fn get_result(source: &str) -> Result<(), Box<dyn std::error::Error>> {
    run(source, std::io::stdout())
}

/// Parses and executes a Solar program, printing to `out`.
///
/// # Errors
/// Same as [`get_result`].
pub fn run<W: Write + 'static>(source: &str, out: W) -> Result<(), Box<dyn std::error::Error>> {
    let program = parse_source(source)?;
    tracing::debug!(statements = program.len(), "parsed program");

    let mut context = Context::with_output(out);
    context.execute(&program)?;
    context.flush_output(0)?;

    Ok(())
}
