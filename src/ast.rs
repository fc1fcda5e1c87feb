/// Represents a binary operator token as produced by the parser.
///
/// Arithmetic operators appear between the terms of an [`Expression`] (`+`,
/// `-`) and between the factors of a [`Term`] (`*`, `/`). Comparison operators
/// appear only in a [`BooleanExpression::Comparison`]. A syntax tree that puts
/// an operator in the wrong position is rejected by the evaluator with
/// `UnknownOperator`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Truncating integer division (`/`)
    Div,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

/// The smallest evaluable unit of an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Factor {
    /// An integer literal such as `42`.
    Integer {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A reference to a variable.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A string literal, kept as its quoted source text.
    ///
    /// Escape sequences are decoded by the evaluator, not by the parser.
    StringLiteral {
        /// The raw literal including the surrounding quotes.
        raw:  String,
        /// Line number in the source code.
        line: usize,
    },
    /// A boolean literal: `true` or `false`.
    Boolean {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// A parenthesized sub-expression.
    Parenthesized(Box<Expression>),
}

impl Factor {
    /// Gets the line number from `self`.
    ///
    /// ## Example
    /// ```
    /// use solar::ast::Factor;
    ///
    /// let factor = Factor::Identifier { name: "x".to_string(),
    ///                                   line: 5, };
    ///
    /// assert_eq!(factor.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Integer { line, .. }
            | Self::Identifier { line, .. }
            | Self::StringLiteral { line, .. }
            | Self::Boolean { line, .. } => *line,
            Self::Parenthesized(expr) => expr.line,
        }
    }
}

/// A product/quotient chain of factors: `factor (op factor)*`.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    /// The leftmost factor.
    pub first: Factor,
    /// The remaining factors, each paired with the operator to its left.
    pub rest:  Vec<(BinaryOperator, Factor)>,
    /// Line number in the source code.
    pub line:  usize,
}

impl From<Factor> for Term {
    fn from(factor: Factor) -> Self {
        let line = factor.line_number();
        Self { first: factor,
               rest: Vec::new(),
               line }
    }
}

/// A sum/difference chain of terms: `term (op term)*`.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    /// The leftmost term.
    pub first: Term,
    /// The remaining terms, each paired with the operator to its left.
    pub rest:  Vec<(BinaryOperator, Term)>,
    /// The raw source text of the whole expression, used in diagnostics.
    pub text:  String,
    /// Line number in the source code.
    pub line:  usize,
}

impl Expression {
    /// Builds an expression consisting of a single factor.
    ///
    /// ## Example
    /// ```
    /// use solar::ast::{Expression, Factor};
    ///
    /// let expr = Expression::single(Factor::Integer { value: 7, line: 2 }, "7");
    ///
    /// assert!(expr.rest.is_empty());
    /// assert_eq!(expr.line, 2);
    /// ```
    #[must_use]
    pub fn single(factor: Factor, text: &str) -> Self {
        let term = Term::from(factor);
        let line = term.line;
        Self { first: term,
               rest: Vec::new(),
               text: text.to_string(),
               line }
    }
}

/// A condition as used by `if` and `while`.
#[derive(Debug, Clone, PartialEq)]
pub enum BooleanExpression {
    /// `left OP right` with a comparison operator.
    Comparison {
        /// Left operand.
        left:  Expression,
        /// The comparison operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Expression,
        /// Line number in the source code.
        line:  usize,
    },
    /// The literal `true` or `false`.
    Literal {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// A parenthesized condition.
    Nested(Box<Self>),
}

/// A call of a named function with positional arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    /// Name of the function being called.
    pub name:      String,
    /// Argument expressions, in call order.
    pub arguments: Vec<Expression>,
    /// Line number in the source code.
    pub line:      usize,
}

/// A user-defined function declaration: `fun name(a, b) { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in binding order.
    pub params: Vec<String>,
    /// The statements executed when the function is invoked.
    pub body:   Vec<Statement>,
    /// Line number in the source code.
    pub line:   usize,
}

/// Represents a single statement.
///
/// Blocks are plain statement sequences; every nested block is run through the
/// same executor entry point as the top level.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A function call whose result is discarded.
    FunctionCall(FunctionCall),
    /// A function declaration.
    FunctionDecl(FunctionDecl),
    /// `name = expression`
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expression,
        /// Line number in the source code.
        line:  usize,
    },
    /// `return` with an optional value.
    Return {
        /// The returned expression, if any.
        value: Option<Expression>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `if (cond) { ... } else { ... }`
    IfElse {
        /// The condition.
        condition:   BooleanExpression,
        /// Statements run when the condition holds.
        then_branch: Vec<Self>,
        /// Statements run otherwise, if an `else` block is present.
        else_branch: Option<Vec<Self>>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `while (cond) { ... }`
    While {
        /// The loop condition, re-evaluated before every iteration.
        condition: BooleanExpression,
        /// The loop body.
        body:      Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::FunctionCall(FunctionCall { line, .. })
            | Self::FunctionDecl(FunctionDecl { line, .. })
            | Self::Assignment { line, .. }
            | Self::Return { line, .. }
            | Self::IfElse { line, .. }
            | Self::While { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}

/// Renders the factor the way it appears in source, without whitespace.
impl std::fmt::Display for Factor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer { value, .. } => write!(f, "{value}"),
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::StringLiteral { raw, .. } => write!(f, "{raw}"),
            Self::Boolean { value, .. } => write!(f, "{value}"),
            Self::Parenthesized(expr) => write!(f, "({expr})"),
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.first)?;
        for (op, factor) in &self.rest {
            write!(f, "{op}{factor}")?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.first)?;
        for (op, term) in &self.rest {
            write!(f, "{op}{term}")?;
        }
        Ok(())
    }
}
