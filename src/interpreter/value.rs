/// String literal decoding.
///
/// Turns the quoted source text of a string literal into its runtime
/// contents, resolving the supported escape sequences.
pub mod escape;

pub mod core;
