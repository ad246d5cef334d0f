use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn cfgdump() -> Command {
    Command::cargo_bin("cfgdump").expect("binary built")
}

#[test]
fn prints_simplified_dump() {
    cfgdump()
        .args(["--stdout", "-"])
        .write_stdin(r#"{ "foo": 9000, "bar": 0, "list": [], "name": "app" }"#)
        .assert()
        .success()
        .stdout("{ foo: 9000, name: 'app' }\n");
}

#[test]
fn include_false_values_flag() {
    cfgdump()
        .args(["--stdout", "--include-false-values", "-"])
        .write_stdin(r#"{ "bar": 0, "list": [] }"#)
        .assert()
        .success()
        .stdout("{ bar: 0, list: [] }\n");
}

#[test]
fn depth_flag_prunes() {
    cfgdump()
        .args(["--stdout", "--depth", "3", "-"])
        .write_stdin(r#"{ "a": { "b": { "c": 1 } }, "d": { "e": 2 } }"#)
        .assert()
        .success()
        .stdout("{ d: { e: 2 } }\n");
}

#[test]
fn negative_depth_fails() {
    cfgdump()
        .args(["--stdout", "--depth", "-12", "-"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("\"depth\""));
}

#[test]
fn writes_dump_file_using_options_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("config.json");
    fs::write(&input, r#"{ "mode": "development" }"#).expect("write input");
    let options = dir.path().join("dump.toml");
    let out_dir = dir.path().join("out");
    fs::write(
        &options,
        format!("outputPath = {:?}\nname = \"from-file.dump\"\n", out_dir.to_string_lossy()),
    )
    .expect("write options");

    cfgdump()
        .arg("--config")
        .arg(&options)
        .arg(&input)
        .assert()
        .success();

    let written = fs::read_to_string(out_dir.join("from-file.dump")).expect("dump file");
    assert_eq!(written, "module.exports = () => ({ mode: 'development' })");
}

#[test]
fn zero_depth_uses_default_depth() {
    let dir = tempfile::tempdir().expect("tempdir");
    let options = dir.path().join("dump.json");
    fs::write(&options, r#"{ "depth": 0 }"#).expect("write options");

    cfgdump()
        .arg("--config")
        .arg(&options)
        .args(["--stdout", "-"])
        .write_stdin(r#"{ "a": { "b": { "c": 1 } } }"#)
        .assert()
        .success()
        .stdout("{ a: { b: { c: 1 } } }\n");
}

#[test]
fn rust_log_enables_debug_events() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("config.json");
    fs::write(&input, r#"{ "mode": "production" }"#).expect("write input");
    let out_dir = dir.path().join("out");

    cfgdump()
        .env("RUST_LOG", "debug")
        .arg("-o")
        .arg(&out_dir)
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("config dump written"));
}

#[test]
fn quiet_by_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("config.json");
    fs::write(&input, r#"{ "mode": "production" }"#).expect("write input");

    cfgdump()
        .env_remove("RUST_LOG")
        .arg("-o")
        .arg(dir.path().join("out"))
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("config dump written").not());
}

#[test]
fn invalid_json_fails() {
    cfgdump()
        .args(["--stdout", "-"])
        .write_stdin("{ not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
}
