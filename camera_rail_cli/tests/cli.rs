use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::process::Command;

const RAIL_CSV: &str = "0,0,0\n10,0,0\n20,10,0\n30,0,0\n";

#[test]
fn pose_command_uses_default_path() {
    Command::cargo_bin("camera_rail_cli")
        .unwrap()
        .args(["pose", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("position: 0.000,0.000,50.000"))
        .stdout(predicate::str::contains("target:"));
}

#[test]
fn pose_command_with_waypoints() {
    let file = assert_fs::NamedTempFile::new("rail.csv").unwrap();
    file.write_str(RAIL_CSV).unwrap();

    Command::cargo_bin("camera_rail_cli")
        .unwrap()
        .args(["pose", "1", "--waypoints", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("position: 30.000"));
}

#[test]
fn pose_command_rejects_single_waypoint() {
    let file = assert_fs::NamedTempFile::new("rail.csv").unwrap();
    file.write_str("1,2,3\n").unwrap();

    Command::cargo_bin("camera_rail_cli")
        .unwrap()
        .args(["pose", "0.5", "--waypoints", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 2 waypoints"));
}

#[test]
fn sample_command() {
    let dir = assert_fs::TempDir::new().unwrap();
    let output = dir.child("poses.csv");

    Command::cargo_bin("camera_rail_cli")
        .unwrap()
        .args(["sample", "10", output.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 11 poses"));

    output.assert(predicate::path::exists());
    dir.close().unwrap();
}

#[test]
fn evaluate_command() {
    let file = assert_fs::NamedTempFile::new("controls.csv").unwrap();
    file.write_str("-10,0,0\n0,0,0\n10,0,0\n20,0,0\n").unwrap();

    Command::cargo_bin("camera_rail_cli")
        .unwrap()
        .args(["evaluate", file.path().to_str().unwrap(), "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("point: 10.000,0.000,0.000"));

    Command::cargo_bin("camera_rail_cli")
        .unwrap()
        .args(["evaluate", file.path().to_str().unwrap(), "0.5", "--tangent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tangent: 1.000"));
}

#[test]
fn evaluate_command_needs_four_points() {
    let file = assert_fs::NamedTempFile::new("controls.csv").unwrap();
    file.write_str("0,0,0\n1,0,0\n").unwrap();

    Command::cargo_bin("camera_rail_cli")
        .unwrap()
        .args(["evaluate", file.path().to_str().unwrap(), "0.5"])
        .assert()
        .stderr(predicate::str::contains("expected 4 control points"));
}

#[test]
fn follow_command_settles_on_pose() {
    let file = assert_fs::NamedTempFile::new("rail.csv").unwrap();
    file.write_str(RAIL_CSV).unwrap();

    Command::cargo_bin("camera_rail_cli")
        .unwrap()
        .args([
            "follow",
            "1",
            "600",
            "--waypoints",
            file.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("camera: 30.000"));
}

#[test]
fn progress_command() {
    Command::cargo_bin("camera_rail_cli")
        .unwrap()
        .args(["progress", "500", "2000", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Progress: 0.500"));
}

#[test]
fn init_config_then_pose_with_config() {
    let dir = assert_fs::TempDir::new().unwrap();
    let config = dir.child("rail.json");

    Command::cargo_bin("camera_rail_cli")
        .unwrap()
        .args(["init-config", config.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote config"));

    config.assert(predicate::str::contains("damping"));

    Command::cargo_bin("camera_rail_cli")
        .unwrap()
        .args(["--config", config.path().to_str().unwrap(), "pose", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("position: 0.000,0.000,50.000"));
    dir.close().unwrap();
}

#[test]
fn custom_config_waypoints() {
    let dir = assert_fs::TempDir::new().unwrap();
    let config = dir.child("rail.json");
    config
        .write_str(
            r#"{ "waypoints": [
                {"x": 0.0, "y": 0.0, "z": 0.0},
                {"x": 0.0, "y": 8.0, "z": 0.0}
            ], "damping": 3.0 }"#,
        )
        .unwrap();

    Command::cargo_bin("camera_rail_cli")
        .unwrap()
        .args(["--config", config.path().to_str().unwrap(), "pose", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("position: 0.000,8.000,0.000"));
    dir.close().unwrap();
}

#[test]
fn pose_command_rejects_nan_waypoint() {
    let file = assert_fs::NamedTempFile::new("rail.csv").unwrap();
    file.write_str("nan,0,0\n1,0,0\n").unwrap();

    Command::cargo_bin("camera_rail_cli")
        .unwrap()
        .args(["pose", "0.5", "--waypoints", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 1: coordinate must be finite"));
}
