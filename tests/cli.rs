//! Command-line behaviour of the `kicad-to-yy1` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

mod common;
use common::test_temp_dir;

fn run(args: &[&str]) -> Output {
    // Keep any user config out of the way.
    run_with_home(args, Path::new("/nonexistent-kicad-to-yy1-home"))
}

fn run_with_home(args: &[&str], home: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_kicad-to-yy1"))
        .args(args)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run kicad-to-yy1")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn wrong_argument_count_prints_usage() {
    for args in [&[][..], &["only-one.csv"][..], &["a.csv", "b.csv", "c.csv"][..]] {
        let output = run(args);
        assert_eq!(output.status.code(), Some(1), "args: {args:?}");
        assert!(stdout(&output).contains("Usage:"), "args: {args:?}");
    }
}

#[test]
fn help_exits_successfully() {
    let output = run(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("INPUT_CSV"));
}

#[test]
fn successful_conversion_message() {
    let temp_dir = test_temp_dir();
    let input = temp_dir.path().join("in.csv");
    let output_path = temp_dir.path().join("out.csv");
    fs::write(
        &input,
        "Ref,Val,Package,PosX,PosY,Rot,Side\nR1,10k,0402,12.5,34.2,90,Top\n",
    )
    .unwrap();

    let output = run(&[input.to_str().unwrap(), output_path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output).trim_end(),
        format!(
            "Successfully converted '{}' to '{}'",
            input.display(),
            output_path.display()
        )
    );
    assert!(fs::read_to_string(&output_path)
        .unwrap()
        .contains("R1,10k,0402,12.5,34.2,90,0,1,100,0,0,1,0\r\n"));
}

#[test]
fn missing_input_reported_with_zero_exit() {
    let temp_dir = test_temp_dir();
    let input = temp_dir.path().join("missing.csv");
    let output_path = temp_dir.path().join("out.csv");

    let output = run(&[input.to_str().unwrap(), output_path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output).trim_end(),
        format!("Error: File not found at path: {}", input.display())
    );
    assert!(!output_path.exists());
}

#[test]
fn empty_input_reported_with_zero_exit() {
    let temp_dir = test_temp_dir();
    let input = temp_dir.path().join("empty.csv");
    let output_path = temp_dir.path().join("out.csv");
    fs::write(&input, "").unwrap();

    let output = run(&[input.to_str().unwrap(), output_path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output).trim_end(),
        "Error: Input CSV file is empty or has no headers."
    );
}

#[test]
fn missing_config_file_fails() {
    let temp_dir = test_temp_dir();
    let config = temp_dir.path().join("absent.json");

    let output = run(&["--config", config.to_str().unwrap(), "in.csv", "out.csv"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Configuration error"));
}

#[test]
fn broken_default_config_does_not_block_conversion() {
    let temp_dir = test_temp_dir();
    let home = temp_dir.path().join("home");
    let config_dir = home.join(".kicad-to-yy1");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.json"), "{ not json").unwrap();

    let input = temp_dir.path().join("in.csv");
    let output_path = temp_dir.path().join("out.csv");
    fs::write(
        &input,
        "Ref,Val,Package,PosX,PosY,Rot,Side\nR1,10k,0402,12.5,34.2,90,Top\n",
    )
    .unwrap();

    let output = run_with_home(
        &[input.to_str().unwrap(), output_path.to_str().unwrap()],
        &home,
    );
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("Successfully converted"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ignoring default configuration"));
    assert!(output_path.exists());
}

#[test]
fn license_notice_on_stderr_unless_quiet() {
    let temp_dir = test_temp_dir();
    let input = temp_dir.path().join("in.csv");
    let output_path = temp_dir.path().join("out.csv");
    fs::write(&input, "Ref,Val,Package,PosX,PosY,Rot,Side\n").unwrap();
    let paths = [input.to_str().unwrap(), output_path.to_str().unwrap()];

    let output = run(&paths);
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    assert!(stderr.contains("ABSOLUTELY NO WARRANTY"));
    assert!(!stdout(&output).contains("WARRANTY"));

    let quiet = run(&["-q", paths[0], paths[1]]);
    assert!(!String::from_utf8_lossy(&quiet.stderr).contains("WARRANTY"));
}
