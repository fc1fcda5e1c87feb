use crate::{
    ast::{BinaryOperator, Expression, Factor, Term},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{core::Value, escape::decode_string_literal},
    },
};

impl Context {
    /// Evaluates an expression by left-folding its terms with `+` and `-`.
    ///
    /// # Errors
    /// Propagates any failure from the terms, and from [`additive`].
    pub fn eval_expression(&self, expr: &Expression) -> EvalResult<Value> {
        let mut acc = self.eval_term(&expr.first)?;

        for (op, term) in &expr.rest {
            let rhs = self.eval_term(term)?;
            acc = additive(*op, acc, rhs, term.line)?;
        }

        Ok(acc)
    }

    /// Evaluates a term by left-folding its factors with `*` and `/`.
    ///
    /// # Errors
    /// Propagates any failure from the factors, and from [`multiplicative`].
    pub fn eval_term(&self, term: &Term) -> EvalResult<Value> {
        let mut acc = self.eval_factor(&term.first)?;

        for (op, factor) in &term.rest {
            let rhs = self.eval_factor(factor)?;
            acc = multiplicative(*op, &acc, &rhs, factor.line_number())?;
        }

        Ok(acc)
    }

    /// Evaluates a single factor.
    ///
    /// Literals produce their value directly; string literals are decoded from
    /// their quoted source text. Identifiers are read from the variable store.
    ///
    /// # Errors
    /// `UndefinedVariable` if an identifier is not visible.
    pub fn eval_factor(&self, factor: &Factor) -> EvalResult<Value> {
        match factor {
            Factor::Integer { value, .. } => Ok(Value::Integer(*value)),
            Factor::Boolean { value, .. } => Ok(Value::Boolean(*value)),
            Factor::StringLiteral { raw, .. } => Ok(Value::String(decode_string_literal(raw))),
            Factor::Identifier { name, line } => {
                self.stack
                    .get_variable(name)
                    .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone(),
                                                                     line: *line, })
            },
            Factor::Parenthesized(inner) => self.eval_expression(inner),
        }
    }
}

/// Applies `+` or `-` to two values.
///
/// `+` adds two integers; if either side is not an integer both sides are
/// stringified and concatenated. `-` requires two integers.
///
/// # Errors
/// - `TypeMismatch` if `-` receives a non-integer.
/// - `Overflow` if the integer result does not fit.
/// - `UnknownOperator` for any operator other than `+` and `-`.
///
/// # Example
/// ```
/// use solar::{ast::BinaryOperator, interpreter::{evaluator::expression::additive,
///                                                value::core::Value}};
///
/// let sum = additive(BinaryOperator::Add, Value::Integer(2), Value::Integer(3), 1).unwrap();
/// assert_eq!(sum, Value::Integer(5));
///
/// let text = additive(BinaryOperator::Add, Value::from("n = "), Value::Integer(3), 1).unwrap();
/// assert_eq!(text, Value::from("n = 3"));
///
/// assert!(additive(BinaryOperator::Sub, Value::from("a"), Value::Integer(1), 1).is_err());
/// ```
pub fn additive(op: BinaryOperator, left: Value, right: Value, line: usize) -> EvalResult<Value> {
    match (op, left, right) {
        (BinaryOperator::Add, Value::Integer(a), Value::Integer(b)) => {
            a.checked_add(b)
             .map(Value::Integer)
             .ok_or(RuntimeError::Overflow { line })
        },
        (BinaryOperator::Add, left, right) => Ok(Value::String(format!("{left}{right}"))),
        (BinaryOperator::Sub, left, right) => {
            let (a, b) = integer_operands(op, &left, &right, line)?;
            a.checked_sub(b)
             .map(Value::Integer)
             .ok_or(RuntimeError::Overflow { line })
        },
        (op, ..) => Err(RuntimeError::UnknownOperator { op,
                                                        position: "expression",
                                                        line }),
    }
}

/// Applies `*` or `/` to two integer values.
///
/// Division truncates toward zero.
///
/// # Errors
/// - `TypeMismatch` if either side is not an integer.
/// - `DivisionByZero` if the divisor is zero.
/// - `Overflow` if the result does not fit.
/// - `UnknownOperator` for any operator other than `*` and `/`.
///
/// # Example
/// ```
/// use solar::{ast::BinaryOperator, interpreter::{evaluator::expression::multiplicative,
///                                                value::core::Value}};
///
/// let q = multiplicative(BinaryOperator::Div, &Value::Integer(-7), &Value::Integer(2), 1);
/// assert_eq!(q.unwrap(), Value::Integer(-3));
/// ```
pub fn multiplicative(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      line: usize)
                      -> EvalResult<Value> {
    match op {
        BinaryOperator::Mul => {
            let (a, b) = integer_operands(op, left, right, line)?;
            a.checked_mul(b)
             .map(Value::Integer)
             .ok_or(RuntimeError::Overflow { line })
        },
        BinaryOperator::Div => {
            let (a, b) = integer_operands(op, left, right, line)?;
            if b == 0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            a.checked_div(b)
             .map(Value::Integer)
             .ok_or(RuntimeError::Overflow { line })
        },
        op => Err(RuntimeError::UnknownOperator { op,
                                                  position: "term",
                                                  line }),
    }
}

/// Narrows both operands of `op` to integers.
///
/// # Errors
/// `TypeMismatch` naming the operator and both operand types.
pub(crate) fn integer_operands(op: BinaryOperator,
                               left: &Value,
                               right: &Value,
                               line: usize)
                               -> EvalResult<(i64, i64)> {
    match (left.as_integer(line), right.as_integer(line)) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        _ => Err(RuntimeError::TypeMismatch { details: format!("operator '{op}' expects two integers, found {} and {}",
                                                               left.type_name(),
                                                               right.type_name()),
                                              line }),
    }
}
