use thiserror::Error;

use crate::ast::BinaryOperator;

/// Represents all errors that can occur during evaluation.
///
/// Every variant except [`RuntimeError::Exit`] is fatal: it propagates to the
/// top of the call chain and aborts the program.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Tried to read a variable that is not defined.
    #[error("Error on line {line}: Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function that is not registered.
    #[error("Error on line {line}: Undefined function '{name}'.")]
    UndefinedFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted to declare a function whose name is already registered.
    #[error("Error on line {line}: Function '{name}' is already defined.")]
    DuplicateFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function declaration was found inside another function's body.
    #[error("Error on line {line}: Cannot declare function '{name}' inside function '{enclosing}'.")]
    NestedFunctionDeclaration {
        /// The name of the nested function.
        name:      String,
        /// The function whose body contains the declaration.
        enclosing: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// An operand had the wrong type for the operator.
    #[error("Error on line {line}: Type mismatch: {details}.")]
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The syntax tree holds an operator in a position the evaluator does not
    /// support.
    #[error("Error on line {line}: Unknown operator '{op}' in {position}.")]
    UnknownOperator {
        /// The misplaced operator.
        op:       BinaryOperator,
        /// Where the operator was found.
        position: &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted integer division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `return` statement ran while no function was executing.
    #[error("Error on line {line}: Return statement outside of a function.")]
    ReturnOutsideFunction {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Error on line {line}: Function '{name}' expects {expected} arguments but received {found}.")]
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// Human readable description of the accepted argument counts.
        expected: String,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Too many user function calls were active at once.
    #[error("Error on line {line}: Call of '{name}' exceeds the maximum call depth of {depth}.")]
    RecursionLimit {
        /// The function whose call was refused.
        name:  String,
        /// The maximum number of active calls.
        depth: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Integer arithmetic overflowed.
    #[error("Error on line {line}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing program output failed.
    #[error("Error on line {line}: Failed to write output: {source}.")]
    Io {
        /// The underlying I/O error.
        source: std::io::Error,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// The `exit` builtin was called.
    ///
    /// This is not a failure: it unwinds every frame and asks the host to
    /// terminate with `code`.
    #[error("Program requested exit with status {code}.")]
    Exit {
        /// The requested process exit status.
        code: i32,
    },
}
