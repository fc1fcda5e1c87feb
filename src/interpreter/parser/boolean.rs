use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, BooleanExpression},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::expect_token,
        },
    },
};

/// Parses the condition of an `if` or `while`.
///
/// The comparison form is tried first on a cloned iterator, because both it
/// and the nested form may start with `(`: `(1 + 2) < x` is a comparison whose
/// left side is parenthesized, while `(x < 3)` is a nested condition. If the
/// comparison does not parse, the literal and nested forms are tried on the
/// original position.
///
/// Grammar:
/// ```text
///     condition := expression ("==" | "!=" | "<" | ">" | "<=" | ">=") expression
///                | "true" | "false"
///                | "(" condition ")"
/// ```
///
/// # Errors
/// - `UnexpectedToken` if none of the three forms match.
/// - `UnexpectedEndOfInput` if the stream ends first, reported on `line`.
pub fn parse_boolean_expression<'a, I>(tokens: &mut Peekable<I>,
                                       line: usize)
                                       -> ParseResult<BooleanExpression>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    if let Ok(comparison) = parse_comparison(&mut lookahead, line) {
        *tokens = lookahead;
        return Ok(comparison);
    }

    match tokens.next() {
        Some((Token::Bool(value), line)) => Ok(BooleanExpression::Literal { value: *value,
                                                                            line:  *line, }),
        Some((Token::LParen, paren_line)) => {
            let inner = parse_boolean_expression(tokens, *paren_line)?;
            expect_token(tokens, &Token::RParen, *paren_line)?;
            Ok(BooleanExpression::Nested(Box::new(inner)))
        },
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected a condition, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Parses `expression OP expression`.
fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<BooleanExpression>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_expression(tokens, line)?;

    let (op, op_line) = match tokens.next() {
        Some((token, op_line)) => {
            let op = comparison_operator(token).ok_or_else(|| {
                         ParseError::UnexpectedToken { token: format!("Expected comparison operator, found {token:?}"),
                                                       line:  *op_line, }
                     })?;
            (op, *op_line)
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: left.line }),
    };

    let right = parse_expression(tokens, op_line)?;
    let line = left.line;

    Ok(BooleanExpression::Comparison { left, op, right, line })
}

/// Maps a comparison token to its operator.
///
/// # Example
/// ```
/// use solar::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::boolean::comparison_operator},
/// };
///
/// assert_eq!(comparison_operator(&Token::LessEqual),
///            Some(BinaryOperator::LessEqual));
/// assert_eq!(comparison_operator(&Token::Plus), None);
/// ```
#[must_use]
pub const fn comparison_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        _ => None,
    }
}
