use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// Values are produced fresh by evaluation and are then stored in the variable
/// store, returned from a function, or consumed by an operator. There is no
/// implicit conversion between variants except string concatenation with `+`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A 64 bit signed integer.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by boolean literals. Conditions of `if` and `while` are
    /// evaluated to a plain `bool` and never stored as values, so booleans
    /// are only ever compared with `==`/`!=` or stringified.
    Boolean(bool),
    /// An owned string.
    String(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl Value {
    /// Returns the name of the variant, for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Boolean(_) => "boolean",
            Self::String(_) => "string",
        }
    }

    /// Converts the value to `i64`, or returns an error if not an integer.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(i64)`: The integer value.
    /// - `Err(RuntimeError::TypeMismatch)`: If not an integer.
    ///
    /// # Example
    /// ```
    /// use solar::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(3).as_integer(1).unwrap(), 3);
    /// assert!(Value::from("3").as_integer(1).is_err());
    /// ```
    pub fn as_integer(&self, line: usize) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            other => Err(RuntimeError::TypeMismatch { details: format!("expected integer, found {}",
                                                                       other.type_name()),
                                                      line }),
        }
    }

    /// Renders the value as text, as used by concatenation and `println`.
    ///
    /// # Example
    /// ```
    /// use solar::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(-4).stringify(), "-4");
    /// assert_eq!(Value::Boolean(true).stringify(), "true");
    /// assert_eq!(Value::from("hi").stringify(), "hi");
    /// ```
    #[must_use]
    pub fn stringify(&self) -> String {
        self.to_string()
    }

    /// Compares two values for equality.
    ///
    /// Values of different variants are never equal: `1 == "1"` is `false`.
    /// Values of the same variant compare structurally. This never fails.
    ///
    /// # Example
    /// ```
    /// use solar::interpreter::value::core::Value;
    ///
    /// assert!(Value::from("a").equals(&Value::from("a")));
    /// assert!(!Value::Integer(1).equals(&Value::from("1")));
    /// ```
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

/// Renders an argument sequence as a bracketed list: `[1, 2, three]`.
///
/// Used by `println` when it receives zero or several arguments.
///
/// # Example
/// ```
/// use solar::interpreter::value::core::{Value, format_sequence};
///
/// let args = vec![Value::Integer(1), Value::from("two"), Value::Boolean(false)];
///
/// assert_eq!(format_sequence(&args), "[1, two, false]");
/// assert_eq!(format_sequence(&[]), "[]");
/// ```
#[must_use]
pub fn format_sequence(values: &[Value]) -> String {
    let items = values.iter().map(Value::stringify).collect::<Vec<_>>();
    format!("[{}]", items.join(", "))
}
