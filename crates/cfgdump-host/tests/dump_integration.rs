use std::fs;

use cfgdump_core::{Callable, Mapping, Pattern, Value};
use cfgdump_host::{ConfigDumper, DumpOptions, DumpOutcome};

fn sample_config() -> Value {
    let rule = Mapping::new();
    rule.insert("test", Pattern::new(r"\.tsx?$").unwrap());
    rule.insert("use", "ts-loader");
    rule.insert("exclude", Value::from(Vec::<Value>::new()));

    let module = Mapping::new();
    module.insert("rules", Value::from(vec![Value::Mapping(rule)]));

    let config = Mapping::new();
    config.insert("mode", "production");
    config.insert("bail", false);
    config.insert("module", module);
    config.insert("onBuild", Callable::named("onBuild"));
    Value::Mapping(config)
}

#[test]
fn writes_dump_into_new_directory() {
    let root = tempfile::tempdir().expect("tempdir");
    let out_dir = root.path().join("dumps").join("nested");

    let dumper = ConfigDumper::new(DumpOptions {
        output_path: Some(out_dir.to_string_lossy().into_owned()),
        name: Some("config.dump.js".into()),
        depth: Some(6),
        show_function_names: Some(true),
        ..Default::default()
    })
    .expect("valid options");

    let outcome = dumper.dump_config(&sample_config());
    let target = out_dir.join("config.dump.js");
    assert_eq!(outcome, DumpOutcome::Written(target.clone()));

    let written = fs::read_to_string(&target).expect("dump file");
    assert_eq!(
        written,
        "module.exports = () => ({\n  mode: 'production',\n  module: { rules: [ { test: /\\.tsx?$/, use: 'ts-loader' } ] },\n  onBuild: \"<<Function 'onBuild'>>\"\n})"
    );
}

#[test]
fn overwrites_existing_dump() {
    let root = tempfile::tempdir().expect("tempdir");
    let path = root.path().to_string_lossy().into_owned();
    fs::write(root.path().join("webpack.config.dump"), "stale").expect("seed file");

    let dumper = ConfigDumper::new(DumpOptions {
        output_path: Some(path),
        ..Default::default()
    })
    .expect("valid options");

    let map = Mapping::new();
    map.insert("foo", "bar");
    dumper.dump_config(&Value::Mapping(map));

    let written = fs::read_to_string(root.path().join("webpack.config.dump")).expect("dump file");
    assert_eq!(written, "module.exports = () => ({ foo: 'bar' })");
}

#[test]
fn unwritable_target_is_only_a_warning() {
    let root = tempfile::tempdir().expect("tempdir");
    // a directory where the dump file should go makes the write fail
    fs::create_dir(root.path().join("webpack.config.dump")).expect("blocker dir");

    let dumper = ConfigDumper::new(DumpOptions {
        output_path: Some(root.path().to_string_lossy().into_owned()),
        ..Default::default()
    })
    .expect("valid options");

    assert_eq!(dumper.dump_config(&Value::Nullish), DumpOutcome::WriteFailed);
}
