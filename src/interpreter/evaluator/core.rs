use std::{collections::HashMap, io::Write};

use crate::{
    ast::Statement,
    error::RuntimeError,
    interpreter::{
        evaluator::function::core::{Function, register_builtins},
        stack::{Stack, VariableStore},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Return state of one active user function call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallFrame {
    /// The function being executed.
    pub function:     String,
    /// Set once a `return` statement has run in this frame.
    pub returning:    bool,
    /// The value of the executed `return`, if it carried one.
    pub return_value: Option<Value>,
}

impl CallFrame {
    /// Creates a frame for a fresh call of `function`.
    #[must_use]
    pub fn new(function: &str) -> Self {
        Self { function:     function.to_string(),
               returning:    false,
               return_value: None, }
    }
}

/// Maximum number of nested user function calls.
pub const MAX_CALL_DEPTH: usize = 512;

/// The call frames that steer statement execution.
///
/// Declaring a function never executes its body, so there is no separate
/// declaration state: the only condition that suppresses statements is a
/// returning innermost frame.
#[derive(Debug, Clone, Default)]
pub struct ControlState {
    /// One frame per user function call in progress, innermost last.
    pub frames: Vec<CallFrame>,
}

impl ControlState {
    /// Whether the innermost call has executed a `return`.
    #[must_use]
    pub fn is_returning(&self) -> bool {
        self.frames.last().is_some_and(|frame| frame.returning)
    }
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the variable store, all declared
/// and builtin functions, the call frames and the sink that program output
/// is written to.
///
/// ## Usage
///
/// `Context` is created once per program and reused for every statement.
/// Nested blocks and function bodies are run through the same
/// [`Context::execute`] entry point as the top level.
///
/// ```
/// use solar::interpreter::{evaluator::core::Context, parser::core::parse_source,
///                          stack::VariableStore, value::core::Value};
///
/// let program = parse_source("x = 2 * 3 + 1").unwrap();
/// let mut context = Context::new();
/// context.execute(&program).unwrap();
///
/// assert_eq!(context.stack.get_variable("x"), Some(Value::Integer(7)));
/// ```
pub struct Context {
    /// Variable storage.
    pub stack:     Box<dyn VariableStore>,
    /// A mapping from function names to their definitions, builtins included.
    pub functions: HashMap<String, Function>,
    /// Return and declaration state.
    pub control:   ControlState,
    /// Where `println` and the trace builtins write.
    pub(crate) out: Box<dyn Write>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a context that prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(std::io::stdout())
    }

    /// Creates a context that prints to `out`.
    ///
    /// The variable store starts with only the global frame and the function
    /// table holds the builtins.
    #[must_use]
    pub fn with_output<W: Write + 'static>(out: W) -> Self {
        Self::with_store(Box::new(Stack::new()), out)
    }

    /// Creates a context over a custom variable store.
    #[must_use]
    pub fn with_store<W: Write + 'static>(stack: Box<dyn VariableStore>, out: W) -> Self {
        let mut functions = HashMap::new();
        register_builtins(&mut functions);

        Self { stack,
               functions,
               control: ControlState::default(),
               out: Box::new(out) }
    }

    /// Executes a sequence of statements in order.
    ///
    /// Before each statement the innermost call frame is checked: once it has
    /// executed a `return`, the rest of this sequence is skipped. Every block
    /// is run through here, so a `return` unwinds the enclosing blocks one
    /// level at a time until the function body itself ends.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised by a statement.
    pub fn execute(&mut self, statements: &[Statement]) -> EvalResult<()> {
        for statement in statements {
            if self.control.is_returning() {
                break;
            }
            self.execute_statement(statement)?;
        }
        Ok(())
    }

    /// Executes a single statement.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    ///
    /// # Errors
    /// Returns any `RuntimeError` raised while executing the statement.
    pub fn execute_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::FunctionCall(call) => self.execute_call(call),
            Statement::FunctionDecl(decl) => self.declare_function(decl),
            Statement::Assignment { name, value, line } => {
                self.execute_assignment(name, value, *line)
            },
            Statement::Return { value, line } => self.execute_return(value.as_ref(), *line),
            Statement::IfElse { condition,
                                then_branch,
                                else_branch,
                                .. } => {
                self.execute_if_else(condition, then_branch, else_branch.as_deref())
            },
            Statement::While { condition, body, line } => {
                self.execute_while(condition, body, *line)
            },
        }
    }

    /// Writes one line of program output.
    ///
    /// # Errors
    /// Returns `RuntimeError::Io` if the sink rejects the write.
    pub fn write_line(&mut self, text: &str, line: usize) -> EvalResult<()> {
        writeln!(self.out, "{text}").map_err(|source| RuntimeError::Io { source, line })
    }

    /// Flushes buffered program output.
    ///
    /// # Errors
    /// Returns `RuntimeError::Io` if the sink cannot be flushed.
    pub fn flush_output(&mut self, line: usize) -> EvalResult<()> {
        self.out.flush().map_err(|source| RuntimeError::Io { source, line })
    }
}
