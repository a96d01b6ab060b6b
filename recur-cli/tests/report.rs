use std::process::{Command, Output};

fn recur_binary() -> &'static str {
    env!("CARGO_BIN_EXE_recur")
}

fn run(args: &[&str]) -> Output {
    Command::new(recur_binary())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run recur")
}

#[test]
fn reports_single_value() {
    let output = run(&["4"]);
    assert!(output.status.success(), "recur 4 should succeed");
    assert_eq!(String::from_utf8_lossy(&output.stdout), " 4 28\n");
    assert!(output.stderr.is_empty(), "no diagnostics expected by default");
}

#[test]
fn run_alias_reports_each_value_in_order() {
    let output = run(&["run", "0", "3", "8"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        " 0 1\n 3 7\n 8 120\n"
    );
}

#[test]
fn negative_input_fails_without_output() {
    let output = run(&["-3"]);
    assert!(
        !output.status.success(),
        "expected non-zero exit for negative n"
    );
    assert!(output.stdout.is_empty(), "nothing should be reported");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("recur.evaluate('-3') failed: n must be non-negative"),
        "expected invalid argument message, got: {stderr}"
    );
}

#[test]
fn stops_at_first_invalid_value() {
    let output = run(&["2", "-1", "4"]);
    assert!(!output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), " 2 6\n");
}

#[test]
fn verbose_logs_go_to_stderr() {
    let output = run(&["-vv", "4"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), " 4 28\n");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("evaluate n=4 value=28"),
        "expected debug log on stderr, got: {stderr}"
    );
}

#[test]
fn rejects_missing_arguments() {
    let output = run(&[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
