use crate::{
    ast::{BinaryOperator, BooleanExpression},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            expression::integer_operands,
        },
        value::core::Value,
    },
};

impl Context {
    /// Evaluates the condition of an `if` or `while`.
    ///
    /// # Errors
    /// Propagates failures from either operand expression and from
    /// [`compare`].
    pub fn eval_boolean_expression(&self, condition: &BooleanExpression) -> EvalResult<bool> {
        match condition {
            BooleanExpression::Comparison { left,
                                            op,
                                            right,
                                            line, } => {
                let left = self.eval_expression(left)?;
                let right = self.eval_expression(right)?;
                compare(*op, &left, &right, *line)
            },
            BooleanExpression::Literal { value, .. } => Ok(*value),
            BooleanExpression::Nested(inner) => self.eval_boolean_expression(inner),
        }
    }
}

/// Compares two values.
///
/// `==` and `!=` accept any pair of values and never fail; values of
/// different types are unequal. The ordering operators require integers.
///
/// # Errors
/// - `TypeMismatch` if an ordering operator receives a non-integer.
/// - `UnknownOperator` if `op` is not a comparison.
///
/// # Example
/// ```
/// use solar::{ast::BinaryOperator, interpreter::{evaluator::boolean::compare,
///                                                value::core::Value}};
///
/// assert!(compare(BinaryOperator::LessEqual, &Value::Integer(2), &Value::Integer(2), 1).unwrap());
/// assert!(!compare(BinaryOperator::Equal, &Value::Integer(1), &Value::from("1"), 1).unwrap());
/// assert!(compare(BinaryOperator::Less, &Value::from("a"), &Value::from("b"), 1).is_err());
/// ```
pub fn compare(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<bool> {
    match op {
        BinaryOperator::Equal => Ok(left.equals(right)),
        BinaryOperator::NotEqual => Ok(!left.equals(right)),
        BinaryOperator::Less => {
            let (a, b) = integer_operands(op, left, right, line)?;
            Ok(a < b)
        },
        BinaryOperator::Greater => {
            let (a, b) = integer_operands(op, left, right, line)?;
            Ok(a > b)
        },
        BinaryOperator::LessEqual => {
            let (a, b) = integer_operands(op, left, right, line)?;
            Ok(a <= b)
        },
        BinaryOperator::GreaterEqual => {
            let (a, b) = integer_operands(op, left, right, line)?;
            Ok(a >= b)
        },
        op => Err(RuntimeError::UnknownOperator { op,
                                                  position: "comparison",
                                                  line }),
    }
}
