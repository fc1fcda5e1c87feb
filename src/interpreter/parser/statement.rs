use std::iter::Peekable;

use crate::{
    ast::{FunctionCall, FunctionDecl, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            boolean::parse_boolean_expression,
            core::{ParseResult, parse_expression},
            utils::{expect_token, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a function declaration (`fun`),
/// - an `if`/`else` statement,
/// - a `while` loop,
/// - a `return` statement,
/// - an assignment (`name = expression`),
/// - a function call (`name(arguments)`).
///
/// The first token decides the construct; an identifier needs one token of
/// lookahead to tell an assignment from a call.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
/// - `line`: Line of the enclosing construct, reported if the input ends.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some(&&(ref token, line)) = tokens.peek() else {
        return Err(ParseError::UnexpectedEndOfInput { line });
    };

    match token {
        Token::Fun => parse_function_declaration(tokens, line),
        Token::If => parse_if_else(tokens, line),
        Token::While => parse_while(tokens, line),
        Token::Return => parse_return(tokens, line),
        Token::Identifier(_) => {
            let mut lookahead = tokens.clone();
            lookahead.next();
            match lookahead.peek() {
                Some((Token::Equals, _)) => parse_assignment(tokens, line),
                Some((Token::LParen, _)) => {
                    Ok(Statement::FunctionCall(parse_function_call(tokens, line)?))
                },
                Some((tok, l)) => {
                    Err(ParseError::UnexpectedToken { token: format!("Expected '=' or '(' after identifier, found {tok:?}"),
                                                      line:  *l, })
                },
                None => Err(ParseError::UnexpectedEndOfInput { line }),
            }
        },
        tok => Err(ParseError::UnexpectedToken { token: format!("Expected a statement, found {tok:?}"),
                                                 line }),
    }
}

/// Parses `name = expression`.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = parse_identifier(tokens, line)?;
    expect_token(tokens, &Token::Equals, line)?;
    let value = parse_expression(tokens, line)?;

    Ok(Statement::Assignment { name, value, line })
}

/// Parses a call of the form `name(arg1, arg2, ...)`.
///
/// # Errors
/// Returns a `ParseError` if the parentheses are missing or an argument
/// expression is malformed.
pub fn parse_function_call<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<FunctionCall>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = parse_identifier(tokens, line)?;
    expect_token(tokens, &Token::LParen, line)?;
    let arguments = parse_comma_separated(tokens,
                                          |tokens| parse_expression(tokens, line),
                                          &Token::RParen,
                                          line)?;

    Ok(FunctionCall { name,
                      arguments,
                      line })
}

/// Parses a function declaration of the form
/// `fun <name>(param1, param2, ...) { <statements> }`.
///
/// Nested declarations inside the body are accepted by the parser; the
/// evaluator rejects them when the declaration runs.
fn parse_function_declaration<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::Fun, line)?;
    let name = parse_identifier(tokens, line)?;
    expect_token(tokens, &Token::LParen, line)?;
    let params = parse_comma_separated(tokens,
                                       |tokens| parse_identifier(tokens, line),
                                       &Token::RParen,
                                       line)?;
    let body = parse_block(tokens, line)?;

    Ok(Statement::FunctionDecl(FunctionDecl { name,
                                              params,
                                              body,
                                              line }))
}

/// Parses `if (condition) { ... }` with an optional `else { ... }`.
///
/// There is no `else if`; chaining is written by nesting an `if` inside the
/// `else` block.
fn parse_if_else<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::If, line)?;
    expect_token(tokens, &Token::LParen, line)?;
    let condition = parse_boolean_expression(tokens, line)?;
    expect_token(tokens, &Token::RParen, line)?;

    let then_branch = parse_block(tokens, line)?;

    let else_branch = if let Some((Token::Else, else_line)) = tokens.peek() {
        let else_line = *else_line;
        tokens.next();
        Some(parse_block(tokens, else_line)?)
    } else {
        None
    };

    Ok(Statement::IfElse { condition,
                           then_branch,
                           else_branch,
                           line })
}

/// Parses `while (condition) { ... }`.
fn parse_while<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::While, line)?;
    expect_token(tokens, &Token::LParen, line)?;
    let condition = parse_boolean_expression(tokens, line)?;
    expect_token(tokens, &Token::RParen, line)?;
    let body = parse_block(tokens, line)?;

    Ok(Statement::While { condition, body, line })
}

/// Parses `return` with an optional value.
///
/// Statements are not terminated, so the value is only parsed when the next
/// tokens cannot begin another statement. An identifier followed by `=` or
/// `(` starts the next assignment or call, leaving this `return` bare.
fn parse_return<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::Return, line)?;

    let has_value = match tokens.peek() {
        Some((Token::Integer(_) | Token::Str(_) | Token::Bool(_) | Token::LParen, _)) => true,
        Some((Token::Identifier(_), _)) => {
            let mut lookahead = tokens.clone();
            lookahead.next();
            !matches!(lookahead.peek(),
                      Some((Token::Equals | Token::LParen, _)))
        },
        _ => false,
    };

    let value = if has_value {
        Some(parse_expression(tokens, line)?)
    } else {
        None
    };

    Ok(Statement::Return { value, line })
}
