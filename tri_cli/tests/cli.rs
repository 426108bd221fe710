use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("trigon").unwrap();
    cmd.env_remove("TRIGON_LOCALE")
        .env_remove("TRIGON_SETTINGS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn right_triangle() {
    cmd()
        .args(["3", "4", "5"])
        .assert()
        .success()
        .stdout(contains("Triangle possible to construct from sides 3, 4, 5"))
        .stdout(contains("This is a right triangle"))
        .stdout(contains("[image: assets/prostokatny.webp]"))
        .stdout(contains("Area: 6.00u²"));
}

#[test]
fn equilateral_triangle() {
    cmd()
        .args(["6", "6", "6"])
        .assert()
        .success()
        .stdout(contains("This is an acute triangle"))
        .stdout(contains("Area: 15.59u²"));
}

#[test]
fn impossible_triangle() {
    cmd()
        .args(["5", "1", "1"])
        .assert()
        .code(1)
        .stdout(contains("Error: Triangle impossible to construct from sides 1, 1, 5!"))
        .stdout(contains("Area").not());
}

#[test]
fn degenerate_triangle_is_impossible() {
    cmd()
        .args(["2", "3", "5"])
        .assert()
        .code(1)
        .stdout(contains("impossible"));
}

#[test]
fn non_numeric_side() {
    cmd()
        .args(["3", "abc", "5"])
        .assert()
        .code(1)
        .stdout(contains("Error: One or more sides are not numbers!"))
        .stdout(contains("triangle").not());
}

#[test]
fn blank_side() {
    cmd()
        .args(["3", " ", "5"])
        .assert()
        .code(1)
        .stdout(contains("not numbers"));
}

#[test]
fn negative_side_is_impossible() {
    cmd().args(["-1", "5", "5"]).assert().code(1).stdout(contains("impossible"));
}

#[test]
fn missing_side_refuses_setup() {
    cmd()
        .args(["3", "4"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(contains("side3"));
}

#[test]
fn too_many_sides() {
    cmd().args(["3", "4", "5", "6"]).assert().code(2);
}

#[test]
fn json_output() {
    cmd()
        .args(["--json", "1", "2", "2.5"])
        .assert()
        .success()
        .stdout(contains("\"ok\": true"))
        .stdout(contains("\"triangle_type\": \"Obtuse\""))
        .stdout(contains("\"class\": \"info\""))
        .stdout(contains("\"image\": \"assets/rozwartokatny.png\""));
}

#[test]
fn json_rejection() {
    cmd()
        .args(["--json", "1", "1", "5"])
        .assert()
        .code(1)
        .stdout(contains("\"ok\": false"))
        .stdout(contains("\"state\": \"Rejected\""))
        .stdout(contains("\"class\": \"error\""));
}

#[test]
fn polish_locale() {
    cmd()
        .args(["--locale", "pl", "1", "2", "2.5"])
        .assert()
        .success()
        .stdout(contains("Jest to trójkąt rozwartokątny"))
        .stdout(contains("Pole wynosi: 0.95u²"));
}

#[test]
fn locale_from_env() {
    cmd()
        .env("TRIGON_LOCALE", "pl")
        .args(["abc", "4", "5"])
        .assert()
        .code(1)
        .stdout(contains("Jeden lub kilka boków nie jest liczbami!"));
}

#[test]
fn decimals_flag() {
    cmd()
        .args(["--decimals", "4", "6", "6", "6"])
        .assert()
        .success()
        .stdout(contains("Area: 15.5885u²"));
}

#[test]
fn decimals_flag_out_of_range() {
    cmd()
        .args(["--decimals", "70000", "3", "4", "5"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn settings_file_with_huge_decimals() {
    let path = std::env::temp_dir().join(format!("trigon_cli_decimals_{}.json", std::process::id()));
    std::fs::write(&path, r#"{"decimals": 70000}"#).unwrap();

    cmd()
        .arg("--settings")
        .arg(&path)
        .args(["3", "4", "5"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(contains("Settings error"));

    std::fs::remove_file(&path).ok();
}

#[test]
fn settings_file() {
    let path = std::env::temp_dir().join(format!("trigon_cli_settings_{}.json", std::process::id()));
    std::fs::write(&path, r#"{"unit": " cm²", "asset_dir": "img"}"#).unwrap();

    cmd()
        .arg("--settings")
        .arg(&path)
        .args(["3", "4", "5"])
        .assert()
        .success()
        .stdout(contains("[image: img/prostokatny.webp]"))
        .stdout(contains("Area: 6.00 cm²"));

    std::fs::remove_file(&path).ok();
}

#[test]
fn missing_settings_file() {
    cmd()
        .args(["--settings", "/nonexistent/trigon.json", "3", "4", "5"])
        .assert()
        .code(2)
        .stderr(contains("Settings error"));
}

#[test]
fn interactive_submissions() {
    cmd()
        .write_stdin("3\n4\n5\n1\n1\n5\n")
        .assert()
        .code(1)
        .stdout(contains("Side 1: Side 2: Side 3: "))
        .stdout(contains("This is a right triangle"))
        .stdout(contains("Triangle impossible to construct from sides 1, 1, 5!"));
}

#[test]
fn interactive_partial_input_warns() {
    cmd()
        .write_stdin("3\n4\n")
        .assert()
        .success()
        .stdout(contains("Area").not())
        .stderr(contains("partial submission dropped"));
}

#[test]
fn interactive_radix_sides() {
    cmd()
        .write_stdin("0x3\n0b100\n0o5\n")
        .assert()
        .success()
        .stdout(contains("Triangle possible to construct from sides 3, 4, 5"));
}

#[test]
fn huge_sides_print_with_exponent() {
    cmd()
        .args(["1e200", "1e200", "1e200"])
        .assert()
        .success()
        .stdout(contains("from sides 1e+200, 1e+200, 1e+200"));
}

#[test]
fn interactive_empty_input() {
    cmd().write_stdin("").assert().success();
}
