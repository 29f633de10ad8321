//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn bignat() -> Command {
    Command::cargo_bin("bignat").expect("binary not found")
}

#[test]
fn help_flag() {
    bignat()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("natural number"));
}

#[test]
fn version_flag() {
    bignat()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bignat"));
}

#[test]
fn multiply_quiet() {
    bignat()
        .args(["mul", "123456789", "987654321", "-q"])
        .assert()
        .success()
        .stdout("121932631112635269\n");
}

#[test]
fn multiply_each_strategy() {
    for strategy in ["schoolbook", "karatsuba", "ntt", "adaptive"] {
        bignat()
            .args(["mul", "99999999999999999999", "99999999999999999999", "-q", "-s", strategy])
            .assert()
            .success()
            .stdout("9999999999999999999800000000000000000001\n");
    }
}

#[test]
fn multiply_all_strategies_compare() {
    let a = "7".repeat(400);
    let b = "3".repeat(380);
    bignat()
        .args(["mul", &a, &b, "--strategy", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comparison Results"))
        .stdout(predicate::str::contains("schoolbook"))
        .stdout(predicate::str::contains("ntt"));
}

#[test]
fn all_strategies_quiet_prints_once() {
    bignat()
        .args(["pow", "3", "100", "-q", "--strategy", "all"])
        .assert()
        .success()
        .stdout("515377520732011331036461129765621272702107522001\n");
}

#[test]
fn divmod_quiet() {
    bignat()
        .args(["divmod", "1000000007", "97", "-q"])
        .assert()
        .success()
        .stdout("10309278\n41\n");
}

#[test]
fn division_by_zero_exit_code() {
    bignat()
        .args(["div", "5", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("division by zero"));
}

#[test]
fn invalid_digit_exit_code() {
    bignat()
        .args(["add", "12x4", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid digit 'x' at position 2"));
}

#[test]
fn missing_second_operand() {
    bignat().args(["add", "1"]).assert().code(2);
}

#[test]
fn unknown_strategy_exit_code() {
    bignat()
        .args(["mul", "2", "3", "--strategy", "fft"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("unknown strategy"));
}

#[test]
fn inconsistent_thresholds_from_env() {
    bignat()
        .env("BIGNAT_KARATSUBA_THRESHOLD", "100")
        .env("BIGNAT_NTT_THRESHOLD", "150")
        .args(["mul", "2", "3"])
        .assert()
        .code(4);
}

#[test]
fn strategy_from_env() {
    bignat()
        .env("BIGNAT_STRATEGY", "karatsuba")
        .args(["mul", "6", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Strategy: karatsuba"));
}

#[test]
fn thresholds_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("thresholds.json");
    let doc = serde_json::json!({ "karatsuba_digits": 4, "ntt_product_digits": 20 });
    std::fs::write(&path, doc.to_string()).unwrap();
    let a = "9".repeat(200);
    bignat()
        .args(["mul", &a, "1", "-q", "--thresholds", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(format!("{a}\n"));
}

#[test]
fn unreadable_thresholds_file() {
    bignat()
        .args(["mul", "2", "3", "--thresholds", "/nonexistent/thresholds.json"])
        .assert()
        .code(4);
}

#[test]
fn number_theory_operations() {
    bignat()
        .args(["factorial", "25", "-q"])
        .assert()
        .success()
        .stdout("15511210043330985984000000\n");
    bignat()
        .args(["gcd", "48", "18", "-q"])
        .assert()
        .success()
        .stdout("6\n");
    bignat()
        .args(["pow", "2", "100", "-q"])
        .assert()
        .success()
        .stdout("1267650600228229401496703205376\n");
}

#[test]
fn saturating_subtraction() {
    bignat()
        .args(["sub", "3", "5", "-q"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn bitwise_and_compare() {
    bignat().args(["and", "12", "10", "-q"]).assert().stdout("8\n");
    bignat().args(["or", "12", "10", "-q"]).assert().stdout("14\n");
    bignat().args(["xor", "12", "10", "-q"]).assert().stdout("6\n");
    bignat().args(["cmp", "3", "5", "-q"]).assert().stdout("-1\n");
    bignat().args(["bits", "255", "-q"]).assert().stdout("8\n");
}

#[test]
fn long_results_abbreviated() {
    bignat()
        .args(["factorial", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(375 digits)"));
}

#[test]
fn verbose_shows_full_result() {
    bignat()
        .args(["factorial", "200", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("digits)").not());
}

#[test]
fn details_mode() {
    bignat()
        .args(["mul", "123456789", "987654321", "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NTT descriptor"))
        .stdout(predicate::str::contains("Result bits: 57"));
}

#[test]
fn output_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("result.txt");
    bignat()
        .args(["add", "40", "2", "-q", "-o", path.to_str().unwrap()])
        .assert()
        .success();
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "42\n");
}

#[test]
fn shell_completion_bash() {
    bignat()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bignat"));
}

#[test]
fn shell_completion_zsh() {
    bignat()
        .args(["--completion", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bignat"));
}
