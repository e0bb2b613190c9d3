use assert_cmd::Command;

fn ember() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ember"));
    cmd.env_remove("EMBER_LOG");
    cmd
}

#[test]
fn chars_joins_arguments_into_one_sequence() {
    ember()
        .args(["chars", "al", "ex"])
        .assert()
        .success()
        .stdout("\"alex\"\n");
}

#[test]
fn negative_ints_are_values_not_options() {
    ember()
        .args(["ints", "-1", "0", "-2147483648"])
        .assert()
        .success()
        .stdout("[ -1, 0, -2147483648 ]\n");
}

#[test]
fn trace_logging_reports_growth_on_stderr() {
    let out = ember()
        .env("EMBER_LOG", "trace")
        .args(["ints", "1", "2", "3"])
        .assert()
        .success()
        .stdout("[ 1, 2, 3 ]\n")
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8_lossy(&out);
    assert!(stderr.contains("sequence grew"), "{stderr}");
}

#[test]
fn demo_respects_capacity_limit() {
    ember()
        .args(["demo", "--max-capacity", "4"])
        .assert()
        .code(1);
}
