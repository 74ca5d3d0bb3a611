//! End-to-end runs of the `tui-life` binary over piped stdin.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tui_life::types::EDIT_PROMPT;

fn run_with_input(input: &str) -> Output {
    run_sized(input, "3", "4")
}

fn run_sized(input: &str, rows: &str, cols: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tui-life"))
        .env("LIFE_ROWS", rows)
        .env("LIFE_COLS", cols)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn tui-life");

    child
        .stdin
        .take()
        .expect("piped stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");

    child.wait_with_output().expect("wait for tui-life")
}

#[test]
fn quit_exits_zero_after_prompt() {
    let out = run_with_input("quit\n");
    assert!(out.status.success(), "status: {:?}", out.status);
    assert_eq!(out.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("   00│01│02│03│"));
    // Nothing is printed after the prompt that read `quit`.
    assert!(stdout.ends_with(EDIT_PROMPT));
    // One blank line between the grid and the prompt.
    assert!(stdout.ends_with(&format!("│\n\n{EDIT_PROMPT}")));
}

#[test]
fn toggle_is_drawn_before_quit() {
    let out = run_with_input("1 2\nquit\n");
    assert_eq!(out.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.matches(EDIT_PROMPT).count(), 2);
    assert!(stdout.contains('▇'));
}

#[test]
fn single_integer_is_fatal() {
    let out = run_with_input("7\n");
    assert!(!out.status.success());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(stderr.matches("needs a column").count(), 1, "stderr: {stderr}");
}

#[test]
fn closed_stdin_is_fatal() {
    let out = run_with_input("");
    assert!(!out.status.success());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(stderr.matches("input stream closed").count(), 1, "stderr: {stderr}");
}

#[test]
fn oversized_dimensions_are_clamped() {
    let out = run_sized("quit\n", "2", "70000");
    assert_eq!(out.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    // Last column label is (MAX_COLS - 1) % 100.
    assert!(stdout.contains("42│43│\n"));
    assert!(stdout.ends_with(EDIT_PROMPT));
}
