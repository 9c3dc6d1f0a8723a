#![cfg(feature = "cli")]

use assert_cmd::Command;
use image::{Rgb, RgbImage};
use laser_shots::io::ShotsReport;
use laser_shots::ShotColor;
use predicates::prelude::*;
use std::path::Path;

fn write_frame(path: &Path) {
    let mut img = RgbImage::new(300, 300);
    for y in 20..24 {
        for x in 20..24 {
            img.put_pixel(x, y, Rgb([255, 220, 220]));
        }
    }
    for y in 250..254 {
        for x in 250..254 {
            img.put_pixel(x, y, Rgb([220, 255, 220]));
        }
    }
    img.save(path).expect("save frame");
}

#[test]
fn detect_from_image_flag_writes_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let frame = dir.path().join("frame.png");
    let out = dir.path().join("report.json");
    write_frame(&frame);

    Command::cargo_bin("laser-shots")
        .expect("binary")
        .args(["detect", "--threshold", "128", "--image"])
        .arg(&frame)
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("detected 2 shot(s)"));

    let report = ShotsReport::load_json(&out).expect("report");
    assert_eq!(report.shots.len(), 2);
    assert_eq!((report.width, report.height), (300, 300));
}

#[test]
fn detect_from_config_honors_ignore_override() {
    let dir = tempfile::tempdir().expect("tempdir");
    let frame = dir.path().join("frame.png");
    let out = dir.path().join("report.json");
    let config = dir.path().join("config.json");
    write_frame(&frame);
    let json = serde_json::json!({
        "frame_path": frame.to_string_lossy(),
        "output_path": out.to_string_lossy(),
        "detector": { "laser_intensity_threshold": 128 }
    });
    std::fs::write(&config, json.to_string()).expect("write config");

    Command::cargo_bin("laser-shots")
        .expect("binary")
        .args(["detect", "--ignore", "red", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("detected 1 shot(s)"));

    let report = ShotsReport::load_json(&out).expect("report");
    assert_eq!(report.shots.len(), 1);
    assert_eq!(report.shots[0].color, ShotColor::Green);
    assert_eq!(report.detector.ignored_color(), Some(ShotColor::Red));
}

#[test]
fn missing_input_fails() {
    Command::cargo_bin("laser-shots")
        .expect("binary")
        .arg("detect")
        .assert()
        .failure();
}

#[cfg(not(feature = "tracing"))]
#[test]
fn debug_log_level_reaches_detector_records() {
    let dir = tempfile::tempdir().expect("tempdir");
    let frame = dir.path().join("frame.png");
    write_frame(&frame);

    Command::cargo_bin("laser-shots")
        .expect("binary")
        .env_remove("LASER_SHOTS_LOG")
        .args(["--log-level", "debug", "detect", "--threshold", "128", "--image"])
        .arg(&frame)
        .arg("--out")
        .arg(dir.path().join("report.json"))
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG detector]"));
}

#[cfg(not(feature = "tracing"))]
#[test]
fn env_level_overrides_log_level_flag() {
    let dir = tempfile::tempdir().expect("tempdir");
    let frame = dir.path().join("frame.png");
    write_frame(&frame);

    Command::cargo_bin("laser-shots")
        .expect("binary")
        .env("LASER_SHOTS_LOG", "debug")
        .args(["--log-level", "warn", "detect", "--threshold", "128", "--image"])
        .arg(&frame)
        .arg("--out")
        .arg(dir.path().join("report.json"))
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG detector]"));
}

#[cfg(not(feature = "tracing"))]
#[test]
fn unknown_log_level_fails() {
    Command::cargo_bin("laser-shots")
        .expect("binary")
        .env_remove("LASER_SHOTS_LOG")
        .args(["--log-level", "nonsense", "detect", "--image", "frame.png"])
        .assert()
        .failure();
}
