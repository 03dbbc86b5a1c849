use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn sketchpad_cmd(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sketchpad").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd
}

/// Reads width/height from the IHDR chunk of a PNG file.
fn png_dimensions(path: &Path) -> (u32, u32) {
    let bytes = std::fs::read(path).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
    let width = u32::from_be_bytes(bytes[16..20].try_into().unwrap());
    let height = u32::from_be_bytes(bytes[20..24].try_into().unwrap());
    (width, height)
}

const SCRIPT: &str = r#"
[[events]]
event = "marker"

[[events]]
event = "hue"
value = 240.0

[[events]]
event = "pointer-down"
x = 10.0
y = 10.0

[[events]]
event = "pointer-move"
x = 100.0
y = 100.0

[[events]]
event = "pointer-leave"

[[events]]
event = "sticker"
glyph = "👻"

[[events]]
event = "pointer-down"
x = 50.0
y = 200.0

[[events]]
event = "pointer-up"
x = 50.0
y = 200.0
"#;

#[test]
fn help_prints_description() {
    let temp = TempDir::new().unwrap();
    sketchpad_cmd(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Freehand sketchpad with undo/redo, stickers and PNG export",
        ));
}

#[test]
fn no_script_prints_usage() {
    let temp = TempDir::new().unwrap();
    sketchpad_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Replay an event script"));
}

#[test]
fn prints_config_schema() {
    let temp = TempDir::new().unwrap();
    sketchpad_cmd(temp.path())
        .arg("--print-config-schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("clear_policy"));
}

#[test]
fn replay_exports_scaled_png() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("sketch.toml");
    std::fs::write(&script, SCRIPT).unwrap();
    let output = temp.path().join("sketchpad.png");

    sketchpad_cmd(temp.path())
        .arg(&script)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("sketchpad.png"));

    assert_eq!(png_dimensions(&output), (1024, 1024));
}

#[test]
fn scale_flag_and_config_file_are_honored() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("sketch.toml");
    std::fs::write(&script, SCRIPT).unwrap();
    let config = temp.path().join("custom.toml");
    std::fs::write(&config, "[canvas]\nwidth = 100\nheight = 50\n").unwrap();
    let output = temp.path().join("small.png");

    sketchpad_cmd(temp.path())
        .args(["--scale", "2", "--config"])
        .arg(&config)
        .arg(&script)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(png_dimensions(&output), (200, 100));
}

#[test]
fn missing_script_fails() {
    let temp = TempDir::new().unwrap();
    sketchpad_cmd(temp.path())
        .arg(temp.path().join("missing.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load event script"));
}

#[test]
fn invalid_event_fails() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("bad.toml");
    std::fs::write(&script, "[[events]]\nevent = \"explode\"\n").unwrap();

    sketchpad_cmd(temp.path())
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse event script"));
}
