use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

#[test]
fn requires_a_directory_argument() {
    Command::new(env!("CARGO_BIN_EXE_sweep"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn dry_run_lists_without_deleting() {
    let target = tempfile::tempdir().unwrap();
    let cwd = tempfile::tempdir().unwrap();
    fs::create_dir(target.path().join("sub")).unwrap();
    fs::write(target.path().join("a.txt"), "a").unwrap();
    fs::write(target.path().join("sub/b.txt"), "b").unwrap();

    Command::new(env!("CARGO_BIN_EXE_sweep"))
        .arg(target.path())
        .arg("--dry-run")
        .current_dir(cwd.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt"))
        .stdout(predicate::str::contains("b.txt"));

    // Nothing deleted, but the list file was written.
    assert!(target.path().join("a.txt").exists());
    assert!(target.path().join("sub/b.txt").exists());
    let list = fs::read_to_string(cwd.path().join("list.rm")).unwrap();
    assert_eq!(list.lines().count(), 2);
}

#[test]
fn deletes_listed_files_and_keeps_directories() {
    let target = tempfile::tempdir().unwrap();
    let cwd = tempfile::tempdir().unwrap();
    fs::create_dir(target.path().join("sub")).unwrap();
    fs::write(target.path().join("a.txt"), "a").unwrap();
    fs::write(target.path().join("sub/b.txt"), "b").unwrap();

    Command::new(env!("CARGO_BIN_EXE_sweep"))
        .arg(target.path())
        .arg("--yes")
        .current_dir(cwd.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Deleted 2 of 2"));

    assert!(!target.path().join("a.txt").exists());
    assert!(!target.path().join("sub/b.txt").exists());
    // Directories are never removed.
    assert!(target.path().join("sub").exists());
}

#[test]
fn declining_the_prompt_deletes_nothing() {
    let target = tempfile::tempdir().unwrap();
    let cwd = tempfile::tempdir().unwrap();
    fs::write(target.path().join("a.txt"), "a").unwrap();

    Command::new(env!("CARGO_BIN_EXE_sweep"))
        .arg(target.path())
        .current_dir(cwd.path())
        .write_stdin("n\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Aborted"));

    assert!(target.path().join("a.txt").exists());
}

#[test]
fn custom_list_file_location() {
    let target = tempfile::tempdir().unwrap();
    let cwd = tempfile::tempdir().unwrap();
    fs::write(target.path().join("a.txt"), "a").unwrap();
    let list = cwd.path().join("custom.list");

    Command::new(env!("CARGO_BIN_EXE_sweep"))
        .arg(target.path())
        .args(["--dry-run", "--list-file"])
        .arg(&list)
        .current_dir(cwd.path())
        .assert()
        .success();

    assert!(list.exists());
    assert!(!cwd.path().join("list.rm").exists());
}
