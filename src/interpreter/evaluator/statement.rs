use crate::{
    ast::{Expression, FunctionCall},
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Executes `name = value`.
    ///
    /// Skipped without evaluating `value` once the innermost call is
    /// returning.
    ///
    /// # Errors
    /// Propagates any failure from evaluating `value`.
    pub fn execute_assignment(&mut self,
                              name: &str,
                              value: &Expression,
                              line: usize)
                              -> EvalResult<()> {
        if self.control.is_returning() {
            return Ok(());
        }

        let value = self.eval_expression(value)?;
        tracing::trace!(line, name, %value, "assign");
        self.stack.define_variable(name, value);
        Ok(())
    }

    /// Executes a call statement, discarding any returned value.
    ///
    /// Arguments are evaluated left to right before the call. Like
    /// assignments, calls are skipped once the innermost call is returning.
    ///
    /// # Errors
    /// Propagates failures from the arguments and from [`Context::invoke`].
    pub fn execute_call(&mut self, call: &FunctionCall) -> EvalResult<()> {
        if self.control.is_returning() {
            return Ok(());
        }

        let args = call.arguments
                       .iter()
                       .map(|arg| self.eval_expression(arg))
                       .collect::<EvalResult<Vec<_>>>()?;

        self.invoke(&call.name, args, call.line)?;
        Ok(())
    }

    /// Executes `return`, storing the value in the innermost call frame.
    ///
    /// The remaining statements of every enclosing block in the function are
    /// skipped once the frame is marked as returning.
    ///
    /// # Errors
    /// - `ReturnOutsideFunction` if no user function is executing.
    /// - Any failure from evaluating the returned expression.
    pub fn execute_return(&mut self, value: Option<&Expression>, line: usize) -> EvalResult<()> {
        if self.control.frames.is_empty() {
            return Err(RuntimeError::ReturnOutsideFunction { line });
        }

        let value = value.map(|expr| self.eval_expression(expr)).transpose()?;

        let frame = self.control
                        .frames
                        .last_mut()
                        .ok_or(RuntimeError::ReturnOutsideFunction { line })?;
        tracing::debug!(function = %frame.function, line, "return");
        frame.return_value = value;
        frame.returning = true;
        Ok(())
    }
}
