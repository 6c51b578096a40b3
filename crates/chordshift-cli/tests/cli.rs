//! End-to-end tests for the chordshift binary.
//!
//! Every command runs in a scratch directory with the config environment
//! cleared, so only the files a test writes are picked up.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn chordshift(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("chordshift").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .env_remove("RUST_LOG")
        .env_remove("CHORDSHIFT_ACTION")
        .env_remove("CHORDSHIFT_INTERVAL")
        .env_remove("CHORDSHIFT_CHORD_LINE_THRESHOLD")
        .env_remove("CHORDSHIFT_OUTPUT_FORMAT")
        .env_remove("CHORDSHIFT_LOG_LEVEL");
    cmd
}

#[test]
fn seq_prints_chords_and_notes() {
    let dir = TempDir::new().unwrap();
    chordshift(&dir)
        .args(["seq", "E#", "Bb/D"])
        .assert()
        .success()
        .stdout("G C/E\nnote: Mi sustenido (E#) é enarmônica de Fá (F).\n");
}

#[test]
fn seq_accepts_action_aliases() {
    let dir = TempDir::new().unwrap();
    chordshift(&dir)
        .args(["seq", "Am F C G", "-a", "diminuir", "-i", "0.5"])
        .assert()
        .success()
        .stdout("G#m E B F#\n");
}

#[test]
fn seq_marks_unreadable_tokens() {
    let dir = TempDir::new().unwrap();
    chordshift(&dir)
        .args(["seq", "C", "H7", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"H7?\""))
        .stdout(predicate::str::contains("\"original_chords\""));
}

#[test]
fn seq_rejects_unknown_action() {
    let dir = TempDir::new().unwrap();
    chordshift(&dir)
        .args(["seq", "C", "-a", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sideways"));
}

#[test]
fn chart_from_file_is_written_verbatim() {
    let dir = TempDir::new().unwrap();
    let chart = dir.path().join("song.txt");
    fs::write(&chart, "C     G\nHello world").unwrap();

    chordshift(&dir)
        .arg("chart")
        .arg(&chart)
        .assert()
        .success()
        .stdout("D     A\nHello world");
}

#[test]
fn chart_from_stdin() {
    let dir = TempDir::new().unwrap();
    chordshift(&dir)
        .args(["chart", "-a", "decrease", "-i", "1"])
        .write_stdin("| Am | F | C | G |\nAmazing grace, how sweet\n")
        .assert()
        .success()
        .stdout("| Gm | D# | A# | F |\nAmazing grace, how sweet\n");
}

#[test]
fn chart_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    chordshift(&dir)
        .args(["chart", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read does-not-exist.txt"));
}

#[test]
fn classify_marks_lines() {
    let dir = TempDir::new().unwrap();
    chordshift(&dir)
        .arg("classify")
        .write_stdin("Am  F\nAmazing grace, how sweet")
        .assert()
        .success()
        .stdout("C Am  F\n- Amazing grace, how sweet\n");
}

#[test]
fn local_config_sets_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("chordshift.toml"),
        "[transpose]\naction = \"down\"\ninterval = 1.5\n",
    )
    .unwrap();

    chordshift(&dir)
        .args(["seq", "C"])
        .assert()
        .success()
        .stdout("A\n");
}

#[test]
fn explicit_config_path_and_env_override() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[transpose]\ninterval = 2\n\n[output]\nexplanations = false\n").unwrap();

    chordshift(&dir)
        .arg("--config")
        .arg(&path)
        .env("CHORDSHIFT_ACTION", "up")
        .args(["seq", "B#"])
        .assert()
        .success()
        .stdout("E\n");
}

#[test]
fn invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("chordshift.toml"),
        "[chart]\nchord_line_threshold = 3.0\n",
    )
    .unwrap();

    chordshift(&dir)
        .args(["seq", "C"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("chart.chord_line_threshold"));
}

#[test]
fn config_prints_effective_toml() {
    let dir = TempDir::new().unwrap();
    chordshift(&dir)
        .env("CHORDSHIFT_INTERVAL", "3")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[transpose]"))
        .stdout(predicate::str::contains("interval = 3.0"))
        .stdout(predicate::str::contains("# overridden by: CHORDSHIFT_INTERVAL"));
}

#[test]
fn huge_interval_wraps_around_the_octave() {
    let dir = TempDir::new().unwrap();
    chordshift(&dir)
        .args(["seq", "B", "C/E/G", "-i", "1200000000"])
        .assert()
        .success()
        .stdout("F# G/B\n");
}

#[test]
fn wrongly_typed_config_key_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("chordshift.toml"), "[transpose]\ninterval = \"2\"\n").unwrap();

    chordshift(&dir)
        .args(["seq", "C"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("transpose.interval: expected a number"));
}
