//! CLI behavior tests for the `tinge` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn tinge() -> Command {
    Command::cargo_bin("tinge").unwrap()
}

// ============================================================================
// print
// ============================================================================

#[test]
fn print_renders_plain_text() {
    tinge()
        .args(["--color", "never", "print", "hello"])
        .assert()
        .success()
        .stdout("hello\n");
}

#[test]
fn print_strips_tags_when_color_is_disabled() {
    tinge()
        .args(["--color", "never", "print", "a <red>b</red> c"])
        .assert()
        .success()
        .stdout("a b c\n");
}

#[test]
fn print_emits_escape_codes_when_color_is_forced() {
    tinge()
        .args(["--color", "always", "print", "<red>x</red>"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["))
        .stdout(predicate::str::contains('x'));
}

#[test]
fn print_substitutes_placeholders() {
    tinge()
        .args([
            "--color",
            "never",
            "print",
            "Hello {0}, you have {1} items",
            "Alice",
            "5",
        ])
        .assert()
        .success()
        .stdout("Hello Alice, you have 5 items\n");
}

#[test]
fn print_no_newline_suppresses_the_newline() {
    tinge()
        .args(["--color", "never", "print", "-n", "hello"])
        .assert()
        .success()
        .stdout("hello");
}

#[test]
fn print_decodes_entity_escapes() {
    tinge()
        .args(["--color", "never", "print", "1 &lt; 2"])
        .assert()
        .success()
        .stdout("1 < 2\n");
}

#[test]
fn print_fails_on_malformed_markup() {
    tinge()
        .args(["--color", "never", "print", "<red>unterminated"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("never closed"));
}

// ============================================================================
// config
// ============================================================================

#[test]
fn config_path_points_into_the_tinge_directory() {
    let home = tempfile::tempdir().unwrap();
    tinge()
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tinge"));
}

#[test]
fn config_show_prints_defaults_when_no_file_exists() {
    let home = tempfile::tempdir().unwrap();
    tinge()
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("color"));
}

// ============================================================================
// completions
// ============================================================================

#[test]
fn completions_are_generated_for_bash() {
    tinge()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tinge"));
}
