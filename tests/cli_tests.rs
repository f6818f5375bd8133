//! CLI integration tests for the `8n3-search` binary.
//!
//! These spawn the compiled binary as a subprocess via `assert_cmd` and
//! assert on exit code, stdout, and stderr — the external-interface
//! contract of spec.md §6/§7: input validation, exit statuses, and the
//! per-counterexample / summary output format.

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn search_bin() -> Command {
    Command::cargo_bin("8n3-search").unwrap()
}

#[test]
fn top_level_help_lists_the_search_subcommand_and_threads_flag() {
    search_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("search").and(predicate::str::contains("--threads")));
}

#[test]
fn search_help_shows_its_flags() {
    search_bin()
        .args(["search", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--start")
                .and(predicate::str::contains("--end"))
                .and(predicate::str::contains("--parallel"))
                .and(predicate::str::contains("--stop-at-first"))
                .and(predicate::str::contains("--skip-self-test")),
        );
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    search_bin().assert().failure();
}

#[test]
fn missing_required_args_is_a_usage_error() {
    search_bin()
        .arg("search")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn inverted_range_exits_with_input_error_status() {
    // start >= end is an input error per spec.md §7: exit 1, not 2.
    search_bin()
        .args(["search", "--start", "10", "--end", "5", "--skip-self-test"])
        .assert()
        .code(1);
}

#[test]
fn end_beyond_supported_bound_exits_with_input_error_status() {
    search_bin()
        .args([
            "search",
            "--start",
            "0",
            "--end",
            "2305843009213693953",
            "--skip-self-test",
        ])
        .assert()
        .code(1);
}

#[test]
fn small_range_with_no_counterexamples_exits_zero() {
    search_bin()
        .args(["search", "--start", "1", "--end", "1000", "--skip-self-test"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("counterexamples=0"));
}

#[test]
fn range_including_n_zero_reports_the_known_counterexample() {
    // n=0 is the one small counterexample per spec.md §8 ("Boundary behaviors").
    search_bin()
        .args(["search", "--start", "0", "--end", "5", "--skip-self-test"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("n=0"));
}

#[test]
fn summary_line_reports_elapsed_and_rate() {
    search_bin()
        .args(["search", "--start", "1", "--end", "500", "--skip-self-test"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("elapsed=")
                .and(predicate::str::contains("tested="))
                .and(predicate::str::contains("rate=")),
        );
}

#[test]
fn parallel_flag_agrees_with_sequential_on_small_range() {
    let seq = search_bin()
        .args(["search", "--start", "0", "--end", "20000", "--skip-self-test"])
        .assert();
    let par = search_bin()
        .args([
            "search",
            "--start",
            "0",
            "--end",
            "20000",
            "--skip-self-test",
            "--parallel",
        ])
        .assert();
    // n=0 is the only counterexample in this range either way.
    seq.code(2).stdout(predicate::str::contains("n=0"));
    par.code(2).stdout(predicate::str::contains("n=0"));
}

#[test]
fn stop_at_first_still_reports_the_counterexample() {
    search_bin()
        .args([
            "search",
            "--start",
            "0",
            "--end",
            "10000",
            "--skip-self-test",
            "--stop-at-first",
        ])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("n=0"));
}

#[test]
fn self_test_runs_by_default_and_still_succeeds() {
    search_bin()
        .args(["search", "--start", "1", "--end", "200"])
        .assert()
        .code(0);
}

#[test]
fn threads_flag_is_accepted_before_the_subcommand() {
    search_bin()
        .args([
            "--threads",
            "2",
            "search",
            "--start",
            "1",
            "--end",
            "200",
            "--skip-self-test",
        ])
        .assert()
        .code(0);
}
