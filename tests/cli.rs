use std::process::Command;

fn solar() -> Command {
    Command::new(env!("CARGO_BIN_EXE_solar"))
}

#[test]
fn exit_sets_the_process_status() {
    let output = solar().arg("println(\"before\")\nexit(7)\nprintln(\"after\")")
                        .output()
                        .unwrap();

    assert_eq!(output.status.code(), Some(7));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "before\n");
}

#[test]
fn runtime_errors_exit_with_failure() {
    let output = solar().arg("x = 1\ny = x / 0").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error on line 2: Division by zero."));
}

#[test]
fn parse_errors_exit_with_failure() {
    let output = solar().arg("x = ").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn runs_a_file() {
    let output = solar().args(["--file", "demos/countdown.solar"]).output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "5\n4\n3\n2\n1\nliftoff\n");
}

#[test]
fn missing_file_is_reported() {
    let output = solar().args(["-f", "demos/does_not_exist.solar"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read the input file"));
}

#[test]
fn runaway_recursion_exits_with_failure() {
    let output = solar().arg("fun f(n) { if (n > 0) { f(n - 1) } }\nf(5000)").output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("exceeds the maximum call depth"));
}
