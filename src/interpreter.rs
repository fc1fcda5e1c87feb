/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the statement tree produced by the parser, evaluates
/// expressions and conditions, dispatches function calls and tracks the call
/// frames that carry `return` state. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates expressions, terms and factors with Solar's coercion rules.
/// - Executes statements, `if`/`else` and `while` loops.
/// - Registers and invokes user-defined and builtin functions.
/// - Reports runtime errors such as undefined names or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// paired with the line it starts on. Whitespace, newlines and comments are
/// consumed here and never reach the parser.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Recognizes keywords, literals, identifiers and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// the statement and expression nodes declared in [`crate::ast`].
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting errors with location info.
pub mod parser;
/// Variable storage used by the evaluator.
///
/// Defines the [`stack::VariableStore`] contract the evaluator relies on and
/// the default frame-based implementation.
pub mod stack;
/// The value module defines the runtime data types for evaluation.
///
/// Solar has three kinds of values: integers, booleans and strings. This
/// module declares them together with the narrowing accessors and the
/// text conversion used by concatenation and printing.
pub mod value;
