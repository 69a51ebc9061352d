use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn vecsketch_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vecsketch").expect("binary exists");
    // Point config lookup at an empty directory so a user's real config
    // cannot leak into the tests.
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn help_prints_usage() {
    let temp = TempDir::new().unwrap();
    vecsketch_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Grid-snapping vector sketch engine",
        ));
}

#[test]
fn script_file_exports_svg() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("drawing.txt");
    let output = temp.path().join("drawing.svg");
    std::fs::write(
        &script,
        "start 100x 200y\nline 10 0\ncircle 25\n\n# trailing comment\n",
    )
    .unwrap();

    vecsketch_cmd(&temp)
        .arg(&script)
        .args(["-o", output.to_str().unwrap()])
        .assert()
        .success();

    let svg = std::fs::read_to_string(&output).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("<line x1=\"100\" y1=\"200\" x2=\"110\" y2=\"200\""));
    assert!(svg.contains("<ellipse"));
}

#[test]
fn stdin_script_prints_to_stdout() {
    let temp = TempDir::new().unwrap();
    vecsketch_cmd(&temp)
        .write_stdin("square 40\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<rect"))
        .stdout(predicate::str::contains("</svg>"));
}

#[test]
fn rejected_lines_are_dropped_by_default() {
    let temp = TempDir::new().unwrap();
    vecsketch_cmd(&temp)
        .env("RUST_LOG", "warn")
        .write_stdin("frobnicate 1 2\ncircle 10\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<ellipse"))
        .stderr(predicate::str::contains("Dropped line 1"));
}

#[test]
fn strict_mode_aborts_on_first_rejection() {
    let temp = TempDir::new().unwrap();
    vecsketch_cmd(&temp)
        .arg("--strict")
        .write_stdin("bezier 0,0 10,0 10,10\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 1"))
        .stderr(predicate::str::contains("bezier"));
}

#[test]
fn config_background_reaches_the_export() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("vecsketch");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[export]\nbackground = \"white\"\n",
    )
    .unwrap();

    vecsketch_cmd(&temp)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("fill=\"#ffffff\""));
}
