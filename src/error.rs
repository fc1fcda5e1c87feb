/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: unexpected or missing tokens, invalid characters and integer literals
/// that do not fit the runtime integer type.
pub mod parse_error;
/// Runtime errors.
///
/// Contains every condition raised while executing a program. All of them are
/// fatal and abort the whole evaluation, except [`RuntimeError::Exit`], which
/// requests orderly process termination with a user-chosen status.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
