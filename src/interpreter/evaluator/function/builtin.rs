use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{Value, format_sequence},
    },
};

/// Prints its arguments followed by a line break.
///
/// A single argument is printed in its stringified form. Zero or several
/// arguments are printed together as one list, `[a, b, c]`, on a single line.
///
/// # Errors
/// `RuntimeError::Io` if the output cannot be written.
///
/// # Example
/// ```
/// use std::{cell::RefCell, io::Write, rc::Rc};
///
/// use solar::interpreter::{evaluator::{core::Context, function::builtin::println},
///                          value::core::Value};
///
/// #[derive(Clone, Default)]
/// struct Buffer(Rc<RefCell<Vec<u8>>>);
///
/// impl Write for Buffer {
///     fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
///         self.0.borrow_mut().write(data)
///     }
///
///     fn flush(&mut self) -> std::io::Result<()> {
///         Ok(())
///     }
/// }
///
/// let buffer = Buffer::default();
/// let mut context = Context::with_output(buffer.clone());
///
/// println(&mut context, &[Value::from("hi")], 1).unwrap();
/// println(&mut context, &[Value::Integer(1), Value::Integer(2)], 2).unwrap();
///
/// assert_eq!(String::from_utf8(buffer.0.borrow().clone()).unwrap(), "hi\n[1, 2]\n");
/// ```
pub fn println(context: &mut Context, args: &[Value], line: usize) -> EvalResult<()> {
    let text = match args {
        [single] => single.stringify(),
        _ => format_sequence(args),
    };
    context.write_line(&text, line)
}

/// Ends the program with the given status.
///
/// An integer argument that fits an `i32` is used as the status; any other
/// argument, or none, gives `-1`. Pending output is flushed first. The
/// returned `Exit` signal unwinds every active call without running any
/// further statement.
///
/// # Errors
/// Always returns an error: `RuntimeError::Exit`, or `RuntimeError::Io` if
/// flushing output failed.
pub fn exit(context: &mut Context, args: &[Value], line: usize) -> EvalResult<()> {
    let code = match args.first() {
        Some(Value::Integer(n)) => i32::try_from(*n).unwrap_or(-1),
        _ => -1,
    };

    context.flush_output(line)?;
    tracing::debug!(code, line, "exit requested");

    Err(RuntimeError::Exit { code })
}

/// Prints the active call frames, innermost first.
///
/// # Errors
/// `RuntimeError::Io` if the output cannot be written.
pub fn print_stack_trace(context: &mut Context, _args: &[Value], line: usize) -> EvalResult<()> {
    context.stack
           .print_stack_trace(context.out.as_mut())
           .map_err(|source| RuntimeError::Io { source, line })
}

/// Prints every active frame and the variables defined in it.
///
/// # Errors
/// `RuntimeError::Io` if the output cannot be written.
pub fn print_variable_trace(context: &mut Context, _args: &[Value], line: usize) -> EvalResult<()> {
    context.stack
           .print_variable_stack(context.out.as_mut())
           .map_err(|source| RuntimeError::Io { source, line })
}
