//! End-to-end CLI integration tests.

use std::time::{Duration, Instant};

use assert_cmd::Command;
use predicates::prelude::*;

fn threadcalc() -> Command {
    let mut cmd = Command::cargo_bin("threadcalc").expect("binary not found");
    cmd.env("NO_COLOR", "1")
        .env_remove("THREADCALC_MODE")
        .env_remove("THREADCALC_N")
        .env_remove("THREADCALC_STEP_DELAY_MS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_flag() {
    threadcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fibonacci"))
        .stdout(predicate::str::contains("--step-delay-ms"));
}

#[test]
fn version_flag() {
    threadcalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("threadcalc"));
}

#[test]
fn single_fibonacci_quiet() {
    threadcalc()
        .args(["--mode", "single", "-t", "fib", "-n", "10", "-q", "--step-delay-ms", "0"])
        .assert()
        .success()
        .stdout("55\n");
}

#[test]
fn single_sum_of_squares_narrated() {
    threadcalc()
        .args(["--mode", "single", "-t", "sumsq", "-n", "10", "--step-delay-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating Sum of Squares calculator thread..."))
        .stdout(predicate::str::contains("worker-1 starting calculation for 10"))
        .stdout(predicate::str::contains("Result: sum of squares(10) = 385"))
        .stdout(predicate::str::contains("worker-1 has finished execution"));
}

#[test]
fn pair_quiet() {
    threadcalc()
        .args(["--mode", "pair", "-n", "10", "-q", "--step-delay-ms", "0"])
        .assert()
        .success()
        .stdout("55\n385\n");
}

#[test]
fn pair_narrated() {
    threadcalc()
        .args(["--mode", "pair", "-n", "5", "--step-delay-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating all calculator threads..."))
        .stdout(predicate::str::contains("Creating thread for Sum of Squares..."))
        .stdout(predicate::str::contains("Starting both threads concurrently..."))
        .stdout(predicate::str::contains(
            "Main thread waiting for all calculations to complete...",
        ))
        .stdout(predicate::str::contains("Fibonacci(5) = 5"))
        .stdout(predicate::str::contains("Sum of Squares(5) = 55"))
        .stdout(predicate::str::contains("All calculations completed successfully!"));
}

#[test]
fn pair_json_output() {
    let output = threadcalc()
        .args(["--mode", "pair", "-n", "20", "--format", "json", "--step-delay-ms", "0"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["mode"], "pair");
    assert_eq!(json["n"], 20);
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["task"], "fibonacci");
    assert_eq!(results[0]["value"], 6765);
    assert_eq!(results[1]["task"], "sum_of_squares");
    assert_eq!(results[1]["value"], 2870);
}

#[test]
fn out_of_range_is_invalid_input() {
    for n in ["0", "21", "-3"] {
        threadcalc()
            .args(["--mode", "single", "-n", n, "--step-delay-ms", "0"])
            .assert()
            .failure()
            .code(2)
            .stdout(predicate::str::contains("has finished execution").not())
            .stderr(predicate::str::contains("between 1 and 20"));
    }
}

#[test]
fn pair_out_of_range_spawns_nothing() {
    threadcalc()
        .args(["--mode", "pair", "-n", "21", "--step-delay-ms", "0"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("worker-").not());
}

#[test]
fn n_from_environment() {
    threadcalc()
        .env("THREADCALC_N", "7")
        .args(["--mode", "single", "-q", "--step-delay-ms", "0"])
        .assert()
        .success()
        .stdout("13\n");
}

#[test]
fn task_name_aliases() {
    threadcalc()
        .args(["--mode", "single", "-t", "sum-of-squares", "-n", "3", "-q"])
        .args(["--step-delay-ms", "0"])
        .assert()
        .success()
        .stdout("14\n");
}

#[test]
fn unknown_task_is_invalid_input() {
    threadcalc()
        .args(["--mode", "single", "-t", "factorial", "--step-delay-ms", "0"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("unknown task: factorial"));
}

#[test]
fn rust_log_overrides_default_level() {
    threadcalc()
        .env("RUST_LOG", "info")
        .args(["--mode", "single", "-n", "3", "-q", "--step-delay-ms", "0"])
        .assert()
        .success()
        .stdout("2\n")
        .stderr(predicate::str::contains("worker spawned"))
        .stderr(predicate::str::contains("worker joined"));
}

#[test]
fn default_level_keeps_stderr_quiet() {
    threadcalc()
        .args(["--mode", "single", "-n", "3", "-q", "--step-delay-ms", "0"])
        .assert()
        .success()
        .stderr("");
}

#[test]
fn menu_rejects_run_output_flags() {
    let cases: [&[&str]; 3] = [&["-q"], &["--progress"], &["--format", "json"]];
    for flags in cases {
        threadcalc()
            .args(flags)
            .write_stdin("3\n")
            .assert()
            .code(2)
            .stdout("")
            .stderr(predicate::str::contains("cannot be used with the interactive menu"));
    }
}

#[test]
fn menu_single_fibonacci() {
    threadcalc()
        .args(["--step-delay-ms", "0"])
        .write_stdin("1\n1\n10\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Threaded Math Calculator"))
        .stdout(predicate::str::contains("Result: fibonacci(10) = 55"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn menu_pair_then_exit() {
    threadcalc()
        .args(["--step-delay-ms", "0"])
        .write_stdin("2\n4\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating thread for Fibonacci..."))
        .stdout(predicate::str::contains("Fibonacci(4) = 3"))
        .stdout(predicate::str::contains("Sum of Squares(4) = 30"));
}

#[test]
fn menu_recovers_from_bad_input() {
    threadcalc()
        .args(["--step-delay-ms", "0"])
        .write_stdin("abc\n9\n1\n1\n25\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("'abc' is not a whole number"))
        .stdout(predicate::str::contains("Invalid choice. Please try again."))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn menu_ends_on_eof() {
    threadcalc()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn completion_bash() {
    threadcalc()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("threadcalc"))
        .stdout(predicate::str::contains("--step-delay-ms"))
        .stdout(predicate::str::contains("--completion"));
}

#[test]
fn progress_bars_keep_stdout_clean() {
    threadcalc()
        .args(["--mode", "pair", "-n", "3", "--progress", "--step-delay-ms", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("worker-1 computing").not())
        .stdout(predicate::str::contains("Fibonacci(3) = 2"));
}

#[test]
fn pair_runs_concurrently() {
    // 20 paced steps per worker; sequential would take twice as long
    let start = Instant::now();
    threadcalc()
        .args(["--mode", "pair", "-n", "20", "-q", "--step-delay-ms", "50"])
        .assert()
        .success();
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(1000), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(1700), "{elapsed:?}");
}
