/// Expression evaluation.
///
/// Folds terms and factors into values, applying integer arithmetic and the
/// string concatenation rule of `+`.
pub mod expression;

/// Condition evaluation.
///
/// Evaluates the comparisons and boolean literals used by `if` and `while`.
pub mod boolean;

/// Core evaluation logic and context management.
///
/// Contains the runtime context, the call-frame state and the statement
/// dispatch that every block runs through.
pub mod core;

/// Execution of `if`/`else` statements and `while` loops.
pub mod control_flow;

/// Execution of assignments, calls and `return`.
pub mod statement;

/// Function evaluation.
///
/// Handles function declaration, builtin registration, argument checking and
/// return value handling.
pub mod function;
