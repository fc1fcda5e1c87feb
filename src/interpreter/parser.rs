/// Program and expression parsing.
///
/// Contains the parser entry points and the arithmetic grammar
/// (`expression`, `term`, `factor`).
pub mod core;

/// Condition parsing.
///
/// Parses the comparison, literal and parenthesized forms used by `if` and
/// `while`.
pub mod boolean;

/// Block parsing.
///
/// Parses brace-delimited statement sequences.
pub mod block;

/// Utility functions for the parser.
///
/// Provides helpers, common checks, and reusable logic used across the
/// grammar rules.
pub mod utils;

/// Statement parsing.
///
/// Implements the grammar for assignments, calls, declarations, returns and
/// the control-flow statements.
pub mod statement;
