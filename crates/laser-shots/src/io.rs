//! JSON configuration and report helpers.

use crate::core::Shot;
use crate::detector::{ShotDetectError, ShotDetector, ShotDetectorParams};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(thiserror::Error, Debug)]
pub enum ShotsIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Detection run configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotsConfig {
    pub frame_path: String,
    #[serde(default)]
    pub output_path: Option<String>,
    #[serde(default)]
    pub detector: ShotDetectorParams,
}

impl ShotsConfig {
    pub fn new(frame_path: impl Into<String>) -> Self {
        Self {
            frame_path: frame_path.into(),
            output_path: None,
            detector: ShotDetectorParams::default(),
        }
    }

    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ShotsIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ShotsIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Resolve the output report path.
    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("laser_shots_report.json"))
    }

    pub fn build_detector(&self) -> ShotDetector {
        ShotDetector::new(self.detector.clone())
    }
}

/// Result of one detection run, as written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotsReport {
    pub frame_path: String,
    #[serde(default)]
    pub config_path: Option<String>,
    pub width: usize,
    pub height: usize,
    pub detector: ShotDetectorParams,
    #[serde(default)]
    pub shots: Vec<Shot>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ShotsReport {
    /// Build an empty report for a frame of the given size.
    pub fn new(cfg: &ShotsConfig, config_path: Option<&Path>, width: usize, height: usize) -> Self {
        Self {
            frame_path: cfg.frame_path.clone(),
            config_path: config_path.map(|p| p.to_string_lossy().into_owned()),
            width,
            height,
            detector: cfg.detector.clone(),
            shots: Vec::new(),
            error: None,
        }
    }

    /// Record the outcome of a detection pass.
    pub fn set_result(&mut self, result: Result<Vec<Shot>, ShotDetectError>) {
        match result {
            Ok(shots) => {
                self.shots = shots;
                self.error = None;
            }
            Err(err) => {
                self.shots.clear();
                self.error = Some(err.to_string());
            }
        }
    }

    /// Load a report from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ShotsIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this report to disk as pretty JSON, creating parent directories.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ShotsIoError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
