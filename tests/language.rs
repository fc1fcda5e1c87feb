use std::fs::{self};

use solar::get_result;
use walkdir::WalkDir;

#[test]
fn demo_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "solar"))
    {
        count += 1;
        let path = entry.path();
        let code =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        if let Err(e) = get_result(&code) {
            panic!("Demo {path:?} failed:\n{code}\nError: {e:?}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

fn assert_success(src: &str) {
    if let Err(e) = get_result(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if get_result(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

/// Runs `setup` and then fails the script unless `condition` holds.
fn assert_holds(setup: &str, condition: &str) {
    assert_success(&format!("{setup}\nif ({condition}) {{ }} else {{ failed = not_defined }}"));
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_holds("x = 1 + 2", "x == 3");
    assert_holds("x = 7 * 9", "x == 63");
    assert_holds("x = 8 - 5", "x == 3");
    assert_holds("x = 10 / 2", "x == 5");
    assert_holds("x = 7 / 2", "x == 3");
    assert_holds("x = 0 - 7 / 2", "x == 0 - 3");
}

#[test]
fn operator_precedence_and_grouping() {
    assert_holds("x = 2 + 3 * 4", "x == 14");
    assert_holds("x = (2 + 3) * 4", "x == 20");
    assert_holds("x = 10 - 4 - 3", "x == 3");
    assert_holds("x = 100 / 10 / 5", "x == 2");
}

#[test]
fn string_concatenation_coerces() {
    assert_holds("x = \"a\" + 1", "x == \"a1\"");
    assert_holds("x = 1 + \"a\"", "x == \"1a\"");
    assert_holds("x = \"n = \" + 1 + 2", "x == \"n = 12\"");
    assert_holds("x = \"n = \" + (1 + 2)", "x == \"n = 3\"");
    assert_holds("x = \"is \" + true", "x == \"is true\"");
}

#[test]
fn comparisons() {
    assert_holds("", "1 < 2");
    assert_holds("", "2 <= 2");
    assert_holds("", "3 > 2");
    assert_holds("", "2 >= 3 - 1");
    assert_holds("", "\"a\" == \"a\"");
    assert_holds("", "1 != \"1\"");
    assert_holds("", "true == true");
    assert_holds("", "(1 + 1) == 2");
    assert_holds("", "((1 < 2))");
    assert_holds("", "true");

    assert_failure("if (\"a\" < \"b\") { }");
    assert_failure("if (1 < true) { }");
}

#[test]
fn boolean_literal_is_not_string_text() {
    assert_holds("x = true", "x != \"true\"");
    assert_holds("x = \"true\"", "x == \"true\"");
}

#[test]
fn escape_sequences() {
    assert_holds("x = \"a\\tb\"", "x == \"a\" + \"\\t\" + \"b\"");
    assert_holds("x = \"\\\\\"", "x != \"\"");
}

#[test]
fn if_else_and_while() {
    assert_holds("x = 0\nif (1 < 2) { x = 1 } else { x = 2 }", "x == 1");
    assert_holds("x = 0\nif (1 > 2) { x = 1 } else { x = 2 }", "x == 2");
    assert_holds("x = 0\nif (false) { x = 1 }", "x == 0");
    assert_holds("x = 0\nif (false) { x = 1 } else { if (true) { x = 3 } }", "x == 3");
    assert_holds("i = 0\nwhile (i < 10) { i = i + 1 }", "i == 10");
    assert_failure("while (false) { x = 1 }\ny = x");
}

#[test]
fn functions_and_returns() {
    assert_success("fun f() { println(\"hi\") }\nf()");
    assert_success("fun add(a, b) { println(a + b) }\nadd(1, 2)");
    assert_success("fun f(n) { if (n > 0) { f(n - 1) } }\nf(20)");
    assert_success("fun f() { return }\nf()");
    assert_success("fun f() { i = 0 while (true) { i = i + 1 if (i == 5) { return i } } }\nf()");
    assert_holds("x = 1\nfun f(x) { x = 2 }\nf(5)", "x == 1");
}

#[test]
fn function_errors() {
    assert_failure("f()");
    assert_failure("fun f() { }\nfun f() { }");
    assert_failure("fun f() { fun g() { } }");
    assert_failure("fun f() { if (true) { fun g() { } } }");
    assert_failure("fun println(x) { }");
    assert_failure("fun f(a) { }\nf()");
    assert_failure("fun f(a) { }\nf(1, 2)");
    assert_failure("printStackTrace(1)");
    assert_failure("exit(1, 2)");
    assert_failure("return 1");
}

#[test]
fn callee_cannot_see_caller_locals() {
    assert_failure("fun g() { println(secret) }\nfun f() { secret = 1 g() }\nf()");
    assert_success("visible = 1\nfun g() { println(visible) }\nfun f() { g() }\nf()");
}

#[test]
fn deep_recursion_fails_cleanly() {
    let handle = std::thread::Builder::new().stack_size(256 * 1024 * 1024)
                                            .spawn(|| {
                                                get_result("fun f(n) { if (n > 0) { f(n - 1) } }\nf(5000)").is_err()
                                            })
                                            .unwrap();

    assert!(handle.join().unwrap());
}

#[test]
fn runtime_errors() {
    assert_failure("x = y");
    assert_failure("x = 1 / 0");
    assert_failure("x = \"a\" - 1");
    assert_failure("x = \"a\" * 2");
    assert_failure("x = true / 1");
    assert_failure("x = 9223372036854775807 + 1");
    assert_failure("x = 4611686018427387904 * 2");
}

#[test]
fn parse_errors() {
    assert_failure("x = ");
    assert_failure("x == 1");
    assert_failure("x");
    assert_failure("fun f( { }");
    assert_failure("if (1) { }");
    assert_failure("while (x < 1 { }");
    assert_failure("x = 99999999999999999999");
    assert_failure("x = 1 $ 2");
    assert_failure("x = \"unterminated");
}

#[test]
fn comments_and_empty_program() {
    assert_success("");
    assert_success("// only a comment");
    assert_success("/* block\ncomment */\nx = 1 // trailing");
    assert_success("/* a **/ x = 1");
    assert_success("/**\n * stars\n **/\nx = 1");
}

#[test]
fn exit_stops_the_program() {
    assert_failure("exit(0)");
    assert_failure("fun f() { exit(3) }\nf()");
}
