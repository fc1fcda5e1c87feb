use crate::{
    ast::{BooleanExpression, Statement},
    interpreter::evaluator::core::{Context, EvalResult},
};

impl Context {
    /// Executes `if (condition) { then } else { otherwise }`.
    ///
    /// Exactly one branch runs, or none when the condition is false and
    /// there is no `else` block.
    ///
    /// # Errors
    /// Propagates failures from the condition and the chosen branch.
    pub fn execute_if_else(&mut self,
                           condition: &BooleanExpression,
                           then_branch: &[Statement],
                           else_branch: Option<&[Statement]>)
                           -> EvalResult<()> {
        if self.eval_boolean_expression(condition)? {
            self.execute(then_branch)
        } else if let Some(otherwise) = else_branch {
            self.execute(otherwise)
        } else {
            Ok(())
        }
    }

    /// Executes `while (condition) { body }`.
    ///
    /// The condition is evaluated before every iteration. The loop also stops
    /// as soon as a `return` inside the body has marked the innermost call
    /// frame. There is no iteration limit.
    ///
    /// # Errors
    /// Propagates failures from the condition and the body.
    pub fn execute_while(&mut self,
                         condition: &BooleanExpression,
                         body: &[Statement],
                         line: usize)
                         -> EvalResult<()> {
        let mut iterations: u64 = 0;

        loop {
            if self.control.is_returning() || !self.eval_boolean_expression(condition)? {
                break;
            }
            self.execute(body)?;
            iterations += 1;
        }

        tracing::trace!(line, iterations, "while loop finished");
        Ok(())
    }
}
