use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;

fn algos() -> Command {
    let mut cmd = cargo_bin_cmd!("algos");
    cmd.env_remove("RUST_LOG").env_remove("ALGOS_LOG");
    cmd
}

#[test]
fn analyze_reports_edgeless_graph_as_disconnected() {
    algos()
        .args(["analyze", "--vertices", "4", "--edges", "0", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"connected\": false"))
        .stdout(predicate::str::contains("\"has_cycle\": false"));
}

#[test]
fn analyze_rejects_start_outside_graph() {
    algos()
        .args(["analyze", "--vertices", "3", "--start", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("start-out-of-range"));
}

#[test]
fn verbose_flag_enables_library_debug_logs() {
    algos()
        .args(["--verbose", "analyze", "--vertices", "5", "--edges", "6"])
        .assert()
        .success()
        .stderr(predicate::str::contains("reachability complete"));
}

#[test]
fn default_level_hides_debug_logs() {
    algos()
        .args(["analyze", "--vertices", "5", "--edges", "6"])
        .assert()
        .success()
        .stderr(predicate::str::contains("reachability complete").not());
}

#[test]
fn hamilton_enumerates_complete_graph() {
    algos()
        .args(["hamilton", "--vertices", "4", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"path_count\": 6"))
        .stdout(predicate::str::contains("\"cycle_count\": 6"));
}

#[test]
fn hamilton_text_output_renders_walks() {
    algos()
        .args(["hamilton", "--vertices", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 -> 1 -> 2"));
}

#[test]
fn hamilton_refuses_large_inputs() {
    algos()
        .args(["hamilton", "--vertices", "12", "--max-vertices", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max-vertices"));
}

#[test]
fn distances_engines_agree() {
    algos()
        .args([
            "distances",
            "--vertices",
            "7",
            "--edges",
            "25",
            "--seed",
            "3",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"agree\": true"))
        .stdout(predicate::str::contains("heap-dijkstra"));
}

#[test]
fn distances_single_engine() {
    algos()
        .args(["distances", "--engine", "dial", "--max-weight", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dial"))
        .stdout(predicate::str::contains("naive").not());
}

#[test]
fn euler_runs_on_undirected_graph() {
    algos()
        .args(["euler", "--undirected", "--vertices", "3", "--edges", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 vertices, 0 edges"));
}

#[test]
fn dial_with_huge_bound_fails_cleanly() {
    algos()
        .args([
            "distances",
            "--engine",
            "dial",
            "--max-weight",
            "18446744073709551614",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("weight-exceeds-bound"))
        .stderr(predicate::str::contains("panicked").not());
}
