use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expression, Factor, Statement, Term},
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::{statement::parse_statement, utils::expect_token},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Tokenizes and parses a complete program.
///
/// Grammar: `program := statement*`
///
/// # Errors
/// Returns the first lexing or parsing error encountered.
///
/// # Example
/// ```
/// use solar::{ast::Statement, interpreter::parser::core::parse_source};
///
/// let program = parse_source("x = 1\nprintln(x)").unwrap();
///
/// assert_eq!(program.len(), 2);
/// assert!(matches!(program[0], Statement::Assignment { .. }));
/// assert!(matches!(program[1], Statement::FunctionCall(_)));
/// ```
pub fn parse_source(source: &str) -> ParseResult<Vec<Statement>> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    let mut statements = Vec::new();
    while let Some(&&(_, line)) = iter.peek() {
        statements.push(parse_statement(&mut iter, line)?);
    }

    Ok(statements)
}

/// Parses a full arithmetic or string expression.
///
/// Handles left-associative binary operators `+` and `-` between terms. The
/// resulting node also records the expression's source text with whitespace
/// removed.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `line`: Line of the enclosing construct, reported if the input ends.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expression>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let first = parse_term(tokens, line)?;
    let line = first.line;

    let mut rest = Vec::new();
    while let Some(&&(ref token, op_line)) = tokens.peek()
          && let Some(op) = additive_operator(token)
    {
        tokens.next();
        rest.push((op, parse_term(tokens, op_line)?));
    }

    let mut expression = Expression { first,
                                      rest,
                                      text: String::new(),
                                      line };
    expression.text = expression.to_string();
    Ok(expression)
}

/// Parses multiplication-level expressions.
///
/// Grammar: `term := factor (("*" | "/") factor)*`
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Term>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let first = parse_factor(tokens, line)?;
    let line = first.line_number();

    let mut rest = Vec::new();
    while let Some(&&(ref token, op_line)) = tokens.peek()
          && let Some(op) = multiplicative_operator(token)
    {
        tokens.next();
        rest.push((op, parse_factor(tokens, op_line)?));
    }

    Ok(Term { first, rest, line })
}

/// Parses a factor.
///
/// Function calls are statements in Solar, so an identifier here is always a
/// variable reference.
///
/// Grammar:
/// ```text
///     factor := INT | STRING | IDENTIFIER | "true" | "false"
///             | "(" expression ")"
/// ```
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Factor>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(value), line)) => Ok(Factor::Integer { value: *value,
                                                                    line:  *line, }),
        Some((Token::Str(raw), line)) => Ok(Factor::StringLiteral { raw:  raw.clone(),
                                                                    line: *line, }),
        Some((Token::Bool(value), line)) => Ok(Factor::Boolean { value: *value,
                                                                 line:  *line, }),
        Some((Token::Identifier(name), line)) => Ok(Factor::Identifier { name: name.clone(),
                                                                         line: *line, }),
        Some((Token::LParen, paren_line)) => {
            let inner = parse_expression(tokens, *paren_line)?;
            expect_token(tokens, &Token::RParen, *paren_line)?;
            Ok(Factor::Parenthesized(Box::new(inner)))
        },
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected a value, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Maps `+` and `-` to their operators.
///
/// # Example
/// ```
/// use solar::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::core::additive_operator},
/// };
///
/// assert_eq!(additive_operator(&Token::Minus), Some(BinaryOperator::Sub));
/// assert_eq!(additive_operator(&Token::Star), None);
/// ```
#[must_use]
pub const fn additive_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        _ => None,
    }
}

/// Maps `*` and `/` to their operators.
#[must_use]
pub const fn multiplicative_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
