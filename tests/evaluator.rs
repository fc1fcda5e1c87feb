use std::{cell::RefCell, io::Write, rc::Rc};

use pretty_assertions::assert_eq;
use solar::{
    ast::{BinaryOperator, Expression, Factor, Term},
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::{
            core::{Context, EvalResult, MAX_CALL_DEPTH},
            function::core::{Arity, BUILTIN_FUNCTIONS},
        },
        parser::core::parse_source,
        stack::VariableStore,
        value::core::Value,
    },
};

/// Output sink that stays readable after the context takes ownership.
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().write(data)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

fn run(source: &str) -> (Context, SharedBuffer, EvalResult<()>) {
    let program = parse_source(source).unwrap();
    let buffer = SharedBuffer::default();
    let mut context = Context::with_output(buffer.clone());
    let result = context.execute(&program);
    (context, buffer, result)
}

fn eval(source: &str) -> EvalResult<Value> {
    let (context, _, result) = run(&format!("result = {source}"));
    result?;
    Ok(context.stack.get_variable("result").unwrap())
}

fn output_of(source: &str) -> String {
    let (_, buffer, result) = run(source);
    result.unwrap();
    buffer.contents()
}

#[test]
fn integer_arithmetic() {
    for (a, b) in [(0, 0), (3, 4), (100, 7), (5, 12), (41, 1)] {
        assert_eq!(eval(&format!("{a} + {b}")).unwrap(), Value::Integer(a + b));
        assert_eq!(eval(&format!("{a} - {b}")).unwrap(), Value::Integer(a - b));
        assert_eq!(eval(&format!("{a} * {b}")).unwrap(), Value::Integer(a * b));
        assert!(matches!(eval(&format!("{a} / 0")),
                         Err(RuntimeError::DivisionByZero { line: 1 })));
    }
    assert_eq!(eval("17 / 5").unwrap(), Value::Integer(3));
}

#[test]
fn overflow_is_reported() {
    assert!(matches!(eval("9223372036854775807 + 1"), Err(RuntimeError::Overflow { .. })));
    assert!(matches!(eval("0 - 9223372036854775807 - 2"), Err(RuntimeError::Overflow { .. })));
}

#[test]
fn plus_concatenates_when_either_side_is_a_string() {
    assert_eq!(eval("\"a\" + 1").unwrap(), Value::from("a1"));
    assert_eq!(eval("1 + \"a\"").unwrap(), Value::from("1a"));
    assert_eq!(eval("\"x\" + \"y\"").unwrap(), Value::from("xy"));
    assert_eq!(eval("true + \"!\"").unwrap(), Value::from("true!"));
    assert_eq!(eval("true + 1").unwrap(), Value::from("true1"));
}

#[test]
fn arithmetic_type_mismatch() {
    for source in ["\"a\" - 1", "2 * \"b\"", "\"a\" / \"b\"", "true - false"] {
        assert!(matches!(eval(source), Err(RuntimeError::TypeMismatch { .. })),
                "{source} should be a type mismatch");
    }
}

#[test]
fn type_mismatch_names_operator_and_operands() {
    match eval("\"a\" - 1") {
        Err(RuntimeError::TypeMismatch { details, line }) => {
            assert_eq!((details.as_str(), line),
                       ("operator '-' expects two integers, found string and integer", 1));
        },
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn string_literal_escapes_are_decoded() {
    assert_eq!(eval(r#""a\nb\t\"c\\d""#).unwrap(),
               Value::from("a\nb\t\"c\\d"));
    assert_eq!(eval(r#""\r""#).unwrap(), Value::from("\r"));
}

#[test]
fn comparisons() {
    let cases = [("1 < 2", true),
                 ("2 <= 2", true),
                 ("3 < 2", false),
                 ("2 >= 3", false),
                 ("\"a\" == \"a\"", true),
                 ("1 == \"1\"", false),
                 ("1 != \"1\"", true),
                 ("true != false", true)];

    for (condition, expected) in cases {
        let output = output_of(&format!("if ({condition}) {{ println(1) }} else {{ println(0) }}"));
        assert_eq!(output, if expected { "1\n" } else { "0\n" }, "{condition}");
    }

    let (_, _, result) = run("if (\"a\" < 1) { }");
    assert!(matches!(result, Err(RuntimeError::TypeMismatch { .. })));
}

#[test]
fn assignment_and_lookup() {
    let (context, _, result) = run("x = 5");
    result.unwrap();
    assert_eq!(context.stack.get_variable("x"), Some(Value::Integer(5)));

    assert!(matches!(eval("y"), Err(RuntimeError::UndefinedVariable { ref name, line: 1 }) if name == "y"));
}

#[test]
fn duplicate_function_declaration() {
    let (_, _, result) = run("fun f() { }\nfun f() { }");
    assert!(matches!(result, Err(RuntimeError::DuplicateFunction { line: 2, .. })));

    let (_, _, result) = run("fun exit() { }");
    assert!(matches!(result, Err(RuntimeError::DuplicateFunction { .. })));
}

#[test]
fn nested_declarations_are_rejected() {
    let (context, _, result) = run("fun outer() {\n  while (true) {\n    fun inner() { }\n  }\n}");
    match result {
        Err(RuntimeError::NestedFunctionDeclaration { name, enclosing, line }) => {
            assert_eq!((name.as_str(), enclosing.as_str(), line), ("inner", "outer", 3));
        },
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(!context.functions.contains_key("outer"));
}

#[test]
fn declaration_does_not_run_the_body() {
    let (context, buffer, result) = run("fun f() { println(\"body\") x = 1 return 2 }");
    result.unwrap();

    assert!(context.functions.contains_key("f"));
    assert_eq!(buffer.contents(), "");
    assert_eq!(context.stack.get_variable("x"), None);
    assert!(context.control.frames.is_empty());
}

#[test]
fn while_false_never_runs_its_body() {
    let (context, _, result) = run("while (false) { x = 1 }");
    result.unwrap();
    assert_eq!(context.stack.get_variable("x"), None);

    let (_, _, result) = run("while (false) { x = 1 }\ny = x");
    assert!(matches!(result, Err(RuntimeError::UndefinedVariable { line: 2, .. })));
}

#[test]
fn return_skips_the_rest_of_the_body() {
    let (mut context, buffer, result) = run("fun f() { return 1 x = 2 println(\"after\") }");
    result.unwrap();

    let value = context.invoke("f", Vec::new(), 1).unwrap();

    assert_eq!(value, Some(Value::Integer(1)));
    assert_eq!(context.stack.get_variable("x"), None);
    assert_eq!(buffer.contents(), "");
    assert!(context.control.frames.is_empty());
}

#[test]
fn return_unwinds_nested_blocks() {
    let source = "fun first_over(limit) {\n\
                    i = 0\n\
                    while (true) {\n\
                      i = i + 1\n\
                      if (i > limit) {\n\
                        return i\n\
                        println(\"unreachable\")\n\
                      }\n\
                    }\n\
                  }";
    let (mut context, buffer, result) = run(source);
    result.unwrap();

    assert_eq!(context.invoke("first_over", vec![Value::Integer(4)], 1).unwrap(),
               Some(Value::Integer(5)));
    assert_eq!(buffer.contents(), "");
}

#[test]
fn functions_without_a_return_value() {
    let (mut context, _, result) = run("fun bare() { return }\nfun empty(a) { }");
    result.unwrap();

    assert_eq!(context.invoke("bare", Vec::new(), 1).unwrap(), None);
    assert_eq!(context.invoke("empty", vec![Value::from("a")], 1).unwrap(), None);
}

#[test]
fn recursion_keeps_frames_separate() {
    let source = "fun count(n) {\n\
                    if (n > 0) {\n\
                      count(n - 1)\n\
                    }\n\
                    println(n)\n\
                  }\n\
                  count(3)";

    assert_eq!(output_of(source), "0\n1\n2\n3\n");
}

#[test]
fn return_in_callee_does_not_stop_caller() {
    let source = "fun g() { return 1 }\n\
                  fun f() { g() println(\"still running\") }\n\
                  f()";

    assert_eq!(output_of(source), "still running\n");
}

#[test]
fn return_outside_function() {
    let (_, _, result) = run("x = 1\nreturn x");
    assert!(matches!(result, Err(RuntimeError::ReturnOutsideFunction { line: 2 })));
}

#[test]
fn parameters_shadow_globals() {
    let (mut context, buffer, result) = run("x = \"global\"\nfun show(x) { println(x) }");
    result.unwrap();

    context.invoke("show", vec![Value::Integer(9)], 1).unwrap();

    assert_eq!(buffer.contents(), "9\n");
    assert_eq!(context.stack.get_variable("x"), Some(Value::from("global")));
}

#[test]
fn argument_count_is_checked() {
    let (mut context, _, result) = run("fun pair(a, b) { }");
    result.unwrap();

    match context.invoke("pair", vec![Value::Integer(1)], 4) {
        Err(RuntimeError::ArgumentCountMismatch { name, expected, found, line }) => {
            assert_eq!((name.as_str(), expected.as_str(), found, line), ("pair", "2", 1, 4));
        },
        other => panic!("unexpected result: {other:?}"),
    }

    assert!(matches!(context.invoke("exit", vec![Value::Integer(1), Value::Integer(2)], 1),
                     Err(RuntimeError::ArgumentCountMismatch { .. })));
}

#[test]
fn undefined_function() {
    let (_, _, result) = run("missing(1)");
    assert!(matches!(result, Err(RuntimeError::UndefinedFunction { ref name, .. }) if name == "missing"));
}

#[test]
fn println_formats() {
    assert_eq!(output_of("println(1, 2, 3)"), "[1, 2, 3]\n");
    assert_eq!(output_of("println(\"one\")"), "one\n");
    assert_eq!(output_of("println()"), "[]\n");
    assert_eq!(output_of("println(\"a\", true, 1 + 1)"), "[a, true, 2]\n");
}

#[test]
fn exit_stops_execution() {
    let (_, buffer, result) = run("println(\"before\")\nexit(7)\nprintln(\"after\")");

    assert!(matches!(result, Err(RuntimeError::Exit { code: 7 })));
    assert_eq!(buffer.contents(), "before\n");
}

#[test]
fn exit_status_defaults() {
    let (_, _, result) = run("exit()");
    assert!(matches!(result, Err(RuntimeError::Exit { code: -1 })));

    let (_, _, result) = run("exit(\"soon\")");
    assert!(matches!(result, Err(RuntimeError::Exit { code: -1 })));

    let (context, _, result) = run("fun f() { exit(3) }\nf()");
    assert!(matches!(result, Err(RuntimeError::Exit { code: 3 })));
    assert!(context.control.frames.is_empty());
}

#[test]
fn stack_trace_lists_active_calls() {
    let source = "fun inner() { printStackTrace() }\n\
                  fun outer() { inner() }\n\
                  outer()";

    assert_eq!(output_of(source), "    at inner\n    at outer\n    at <main>\n");
}

#[test]
fn variable_trace_lists_frames_and_variables() {
    let source = "b = 2\n\
                  a = 1\n\
                  fun show(x) { y = x * 2 printVariableTrace() }\n\
                  show(21)";

    assert_eq!(output_of(source),
               "show\n    x = 21\n    y = 42\n<main>\n    a = 1\n    b = 2\n");
}

#[test]
fn misplaced_operator_is_unknown() {
    let term = Term { first: Factor::Integer { value: 1, line: 1 },
                      rest:  vec![(BinaryOperator::Add, Factor::Integer { value: 2, line: 1 })],
                      line:  1, };
    let expression = Expression { first: term,
                                  rest:  Vec::new(),
                                  text:  "1+2".to_string(),
                                  line:  1, };

    let context = Context::with_output(SharedBuffer::default());

    assert!(matches!(context.eval_expression(&expression),
                     Err(RuntimeError::UnknownOperator { op: BinaryOperator::Add,
                                                         position: "term",
                                                         .. })));
}

#[test]
fn builtins_are_registered() {
    let context = Context::with_output(SharedBuffer::default());

    for name in BUILTIN_FUNCTIONS {
        assert!(context.functions.contains_key(*name), "{name} is missing");
    }
    assert_eq!(context.functions["println"].arity, Arity::Variadic);
    assert_eq!(context.functions["exit"].arity, Arity::OneOf(&[0, 1]));
}

#[test]
fn expression_text_is_recorded() {
    let program = parse_source("x = (1 + 2) * y").unwrap();

    match &program[0] {
        solar::ast::Statement::Assignment { value, .. } => assert_eq!(value.text, "(1+2)*y"),
        other => panic!("unexpected statement: {other:?}"),
    }
}

/// Runs `source` on a thread with a large stack so deep recursion reaches
/// the call depth limit before the native stack runs out.
fn run_deep(source: &'static str) -> (EvalResult<()>, usize, String) {
    std::thread::Builder::new().stack_size(256 * 1024 * 1024)
                               .spawn(move || {
                                   let (context, buffer, result) = run(source);
                                   (result, context.control.frames.len(), buffer.contents())
                               })
                               .unwrap()
                               .join()
                               .unwrap()
}

#[test]
fn runaway_recursion_is_reported() {
    let (result, frames, _) = run_deep("fun f(n) { if (n > 0) { f(n - 1) } }\nf(5000)");

    match result {
        Err(RuntimeError::RecursionLimit { name, depth, line }) => {
            assert_eq!((name.as_str(), depth, line), ("f", MAX_CALL_DEPTH, 1));
        },
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(frames, 0);
}

#[test]
fn recursion_below_the_limit_completes() {
    let (result, frames, output) =
        run_deep("fun f(n) { if (n > 0) { f(n - 1) } else { println(\"bottom\") } }\nf(500)");

    result.unwrap();
    assert_eq!(frames, 0);
    assert_eq!(output, "bottom\n");
}

#[test]
fn end_of_input_reports_the_last_line() {
    assert_eq!(parse_source("x = 1\ny =").unwrap_err(),
               ParseError::UnexpectedEndOfInput { line: 2 });
    assert_eq!(parse_source("x = 1\ny = 2 +").unwrap_err(),
               ParseError::UnexpectedEndOfInput { line: 2 });
    assert_eq!(parse_source("fun f(a,").unwrap_err(),
               ParseError::UnexpectedEndOfInput { line: 1 });
    assert_eq!(parse_source("x = 1\nif (").unwrap_err(),
               ParseError::UnexpectedEndOfInput { line: 2 });
    assert_eq!(parse_source("\n\nprintln(1,").unwrap_err(),
               ParseError::UnexpectedEndOfInput { line: 3 });
}

#[test]
fn block_comments_may_end_in_several_stars() {
    let program = parse_source("/* a **/ x = 1\n/**\n * doc\n **/\ny = ").unwrap_err();

    assert_eq!(program, ParseError::UnexpectedEndOfInput { line: 5 });
    assert_eq!(output_of("/***/ println(\"after\") /* x **/"), "after\n");
}
