use assert_cmd::Command;
use predicates::prelude::*;

fn sumcs() -> Command {
    let mut cmd = Command::cargo_bin("sumcs").unwrap();
    cmd.env("SUMCS_PLAIN", "true").env_remove("SUMCS_LOG");
    cmd
}

#[test]
fn it_generates_a_union() {
    let want = std::fs::read_to_string("tests/fixtures/shape.cs")
        .unwrap()
        .replace("\r\n", "\n");
    let output = sumcs()
        .args(["generate", "tests/fixtures/shape.toml"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{:#?}", output);
    similar_asserts::assert_eq!(want, String::from_utf8(output.stdout).unwrap());
}

#[test]
fn it_generates_unions_in_file_order() {
    let output = sumcs()
        .args(["generate", "tests/fixtures/many.toml"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{:#?}", output);
    let stdout = String::from_utf8(output.stdout).unwrap();
    let shape = stdout.find("abstract partial record Shape\n").unwrap();
    let option = stdout.find("abstract partial record Option<T>\n").unwrap();
    assert!(shape < option);
    assert_eq!(stdout.matches("#pragma warning disable 1591").count(), 2);
}

#[test]
fn it_generates_selected_unions() {
    sumcs()
        .args(["generate", "tests/fixtures/many.toml", "--union", "Option"])
        .assert()
        .success()
        .stdout(predicate::str::contains("abstract partial record Option<T>"))
        .stdout(predicate::str::contains("record Shape").not());
}

#[test]
fn it_rejects_unknown_union_names() {
    sumcs()
        .args(["generate", "tests/fixtures/many.toml", "--union", "Either"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no union named `Either`"));
}

#[test]
fn it_reports_invalid_declarations() {
    sumcs()
        .args(["generate", "tests/fixtures/invalid.toml"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("more than once"))
        .stderr(predicate::str::contains("reserved"));
}

#[test]
fn it_reports_malformed_declarations() {
    sumcs()
        .args(["check", "tests/fixtures/malformed.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sealed"));
}

#[test]
fn it_checks_declarations() {
    sumcs()
        .args(["check", "tests/fixtures/many.toml"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("is valid (2 unions)"));
}

#[test]
fn it_fails_for_missing_files() {
    sumcs()
        .args(["check", "tests/fixtures/missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error reading declarations"));
}

#[test]
fn it_reads_sumcs_toml_by_default() {
    sumcs()
        .current_dir("tests/fixtures/default")
        .args(["check"])
        .assert()
        .success()
        .stderr(predicate::str::contains("sumcs.toml is valid (1 union)"));
    sumcs()
        .current_dir("tests/fixtures/default")
        .args(["generate"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "public static implicit operator Result<TOk, TError>(TOk value) => new Ok<TOk, TError>(value);",
        ));
}
