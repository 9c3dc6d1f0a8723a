use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Laser color of a detected shot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShotColor {
    Red,
    Green,
}

impl ShotColor {
    pub fn as_str(self) -> &'static str {
        match self {
            ShotColor::Red => "red",
            ShotColor::Green => "green",
        }
    }
}

impl std::fmt::Display for ShotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown shot color `{0}` (expected `red` or `green`)")]
pub struct ParseShotColorError(pub String);

impl std::str::FromStr for ShotColor {
    type Err = ParseShotColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(ShotColor::Red),
            "green" => Ok(ShotColor::Green),
            _ => Err(ParseShotColorError(s.to_string())),
        }
    }
}

/// A detected laser impact in frame pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    pub color: ShotColor,
    /// Approximate center of the bright core, sub-pixel.
    pub position: Point2<f32>,
}

impl Shot {
    pub fn new(color: ShotColor, x: f32, y: f32) -> Self {
        Self {
            color,
            position: Point2::new(x, y),
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.position.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_parses_case_insensitively() {
        assert_eq!("RED".parse::<ShotColor>(), Ok(ShotColor::Red));
        assert_eq!("green".parse::<ShotColor>(), Ok(ShotColor::Green));
        assert!("blue".parse::<ShotColor>().is_err());
    }

    #[test]
    fn shot_serializes_color_lowercase() {
        let shot = Shot::new(ShotColor::Green, 1.5, 2.0);
        let json = serde_json::to_value(shot).expect("serialize");
        assert_eq!(json["color"], "green");
        let back: Shot = serde_json::from_value(json).expect("deserialize");
        approx::assert_relative_eq!(back.x(), 1.5);
        approx::assert_relative_eq!(back.y(), 2.0);
    }
}
