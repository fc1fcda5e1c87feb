/// Builtin function implementations.
///
/// Contains `println`, `exit`, `printStackTrace` and `printVariableTrace`.
pub mod builtin;

pub mod core;
