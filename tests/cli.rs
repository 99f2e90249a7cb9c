//! End-to-end tests for the prun binary

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

fn prun() -> Command {
    Command::cargo_bin("prun").unwrap()
}

#[test]
fn test_print_task_output() {
    let (dir, _path) = common::create_test_config(
        r#"
tasks:
  build:
    run:
      - print: word
"#,
    );

    prun()
        .current_dir(dir.path())
        .arg("build")
        .assert()
        .success()
        .stdout("word\n");
}

#[cfg(unix)]
#[test]
fn test_failing_step_exit_code_and_halt() {
    let (dir, _path) = common::create_test_config(
        r#"
tasks:
  seq:
    run:
      - ["true"]
      - [sh, -c, "exit 5"]
      - print: never
"#,
    );

    prun()
        .current_dir(dir.path())
        .arg("seq")
        .assert()
        .code(5)
        .stdout(predicate::str::contains("never").not())
        .stderr(predicate::str::contains("failed at step 2"));
}

#[test]
fn test_unknown_task_fails() {
    let (dir, _path) = common::create_test_config(
        r#"
tasks:
  build:
    run:
      - print: word
"#,
    );

    prun()
        .current_dir(dir.path())
        .arg("deploy")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("Task 'deploy' is not defined"));
}

#[test]
fn test_missing_task_is_usage_error() {
    let dir = tempfile::TempDir::new().unwrap();
    prun().current_dir(dir.path()).assert().code(2);
}

#[test]
fn test_list_shows_visible_tasks() {
    let (dir, _path) = common::create_test_config(
        r#"
tasks:
  build:
    usage: Placeholder build
    run:
      - print: word
  secret:
    private: true
    run:
      - print: hidden
"#,
    );

    prun()
        .current_dir(dir.path())
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("Placeholder build"))
        .stdout(predicate::str::contains("secret").not());
}

#[test]
fn test_explicit_file_and_var_override() {
    let (dir, path) = common::create_test_config(
        r#"
vars:
  who: world
tasks:
  greet:
    run:
      - print: "hello ${who}"
"#,
    );
    let elsewhere = tempfile::TempDir::new().unwrap();

    prun()
        .current_dir(elsewhere.path())
        .arg("-f")
        .arg(&path)
        .args(["--var", "who=prun", "greet"])
        .assert()
        .success()
        .stdout("hello prun\n");

    drop(dir);
}

#[test]
fn test_clean_refuses_to_remove_working_dir() {
    let dir = tempfile::TempDir::new().unwrap();
    let project = dir.path().join("project");
    std::fs::create_dir(&project).unwrap();
    std::fs::write(project.join("precious.txt"), "keep").unwrap();

    for cache in ["cache=", "cache=."] {
        prun()
            .current_dir(&project)
            .args(["--var", cache, "clean"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("remove-dir path"));
    }

    assert!(project.join("precious.txt").exists());
}

#[test]
fn test_dry_run_executes_nothing() {
    let (dir, _path) = common::create_test_config(
        r#"
tasks:
  clean:
    run:
      - remove-dir: cache
"#,
    );
    std::fs::create_dir(dir.path().join("cache")).unwrap();

    prun()
        .current_dir(dir.path())
        .args(["--dry-run", "clean"])
        .assert()
        .success()
        .stderr(predicate::str::contains("remove-dir cache"));

    assert!(dir.path().join("cache").exists());
}

#[test]
fn test_silent_suppresses_own_output() {
    let (dir, _path) = common::create_test_config(
        r#"
tasks:
  build:
    run:
      - print: word
"#,
    );

    prun()
        .current_dir(dir.path())
        .args(["-s", "build"])
        .assert()
        .success()
        .stdout("word\n")
        .stderr("");
}

#[test]
fn test_list_wins_over_task() {
    let (dir, _path) = common::create_test_config(
        r#"
tasks:
  build:
    usage: Placeholder build
    run:
      - print: word
"#,
    );

    prun()
        .current_dir(dir.path())
        .args(["--list", "build"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Placeholder build"))
        .stdout(predicate::str::contains("word").not());
}

#[test]
fn test_builtin_tasks_without_task_file() {
    let dir = tempfile::TempDir::new().unwrap();

    prun()
        .current_dir(dir.path())
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("push"))
        .stdout(predicate::str::contains("reload"))
        .stdout(predicate::str::contains("clean"));
}

#[test]
fn test_completions() {
    prun()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("prun"));
}
