//! Shared fixtures for prefix-rename CLI tests.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A small sketch exercising every built-in target word once, plus a few
/// near-misses that must survive untouched.
#[allow(unused)]
pub const SKETCH: &str = r#"#include <FastLED.h>

// initGameLoop is unrelated
void initGame() {
  spawnEnemy();
  spawnBullet();
}

void loop() {
  handleButtons();
  updateEnemies();
  updateBullets();
  checkCollisions();
  drawLEDs();
  spawnBulletFast();
  if (gameOver) drawGameOver(); else drawIdleScreen();
}
"#;

#[allow(unused)]
pub const SKETCH_RENAMED: &str = r#"#include <FastLED.h>

// initGameLoop is unrelated
void lightBeam_initGame() {
  lightBeam_spawnEnemy();
  lightBeam_spawnBullet();
}

void loop() {
  lightBeam_handleButtons();
  lightBeam_updateEnemies();
  lightBeam_updateBullets();
  lightBeam_checkCollisions();
  lightBeam_drawLEDs();
  spawnBulletFast();
  if (gameOver) lightBeam_drawGameOver(); else lightBeam_drawIdleScreen();
}
"#;

/// Creates a temp dir holding `pixel_war.ino` with `content`.
pub fn create_sketch(content: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("pixel_war.ino");
    fs::write(&file, content).unwrap();
    (temp, file)
}

/// Runs the binary in `dir` with `args`.
pub fn run_prefix_rename(dir: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("prefix-rename");
    cmd.args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("CLICOLOR_FORCE")
        .env("NO_COLOR", "1");

    cmd.assert()
}
