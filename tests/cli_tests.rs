use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// The binary with $HOME pointed at an empty directory, so the bundled
/// default rules are in effect regardless of the invoking user's setup.
fn ruls(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ruls").expect("binary builds");
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn lists_directory_contents() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("hello.txt"), "hi").unwrap();

    ruls(&home)
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("hello.txt"));
}

#[test]
fn hidden_entries_need_the_all_flag() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".secret"), "s").unwrap();
    fs::write(dir.path().join("shown.txt"), "x").unwrap();

    ruls(&home)
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(".secret").not());

    ruls(&home)
        .arg("-a")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(".secret"));
}

#[test]
fn long_flag_prints_permission_strings() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("data.txt"), "1234").unwrap();

    ruls(&home)
        .arg("-l")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?m)^[d-][rwx-]{9} ").unwrap());
}

#[test]
fn bundled_flags_parse_like_separate_ones() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".secret"), "s").unwrap();

    ruls(&home)
        .arg("-la")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(".secret"));
}

#[test]
fn multiple_directories_get_headers_and_separators() {
    let home = TempDir::new().unwrap();
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    fs::write(first.path().join("one.txt"), "1").unwrap();
    fs::write(second.path().join("two.txt"), "2").unwrap();

    ruls(&home)
        .arg(first.path())
        .arg(second.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{}:", first.path().display())))
        .stdout(predicate::str::contains(format!("{}:", second.path().display())))
        .stdout(predicate::str::contains("\n\n"));
}

#[test]
fn single_directory_gets_no_header() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("only.txt"), "x").unwrap();

    ruls(&home)
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{}:", dir.path().display())).not());
}

#[test]
fn missing_directory_exits_nonzero_with_context() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();

    ruls(&home)
        .arg(dir.path().join("does-not-exist"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read directory"));
}

#[test]
fn broken_rules_override_is_a_loud_failure() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(".ruls.toml"), "rules = [ not toml").unwrap();
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("x.txt"), "x").unwrap();

    ruls(&home)
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot parse rules file"));
}

#[test]
fn user_override_replaces_the_defaults() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join(".ruls.toml"),
        r#"
[[rules]]
pattern = '\.txt$'
color = "green"
icon = "T"
"#,
    )
    .unwrap();
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "x").unwrap();
    fs::write(dir.path().join("b.log"), "x").unwrap();

    // the override has no wildcards, so the .log file is omitted
    ruls(&home)
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt"))
        .stdout(predicate::str::contains("b.log").not());
}
