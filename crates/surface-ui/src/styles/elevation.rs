use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StyleError;

/// Highest supported shadow level.
pub const MAX_ELEVATION: u32 = 24;

/// A validated shadow level in `0..=MAX_ELEVATION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Elevation(u32);

impl Elevation {
    pub fn new(level: u32) -> Result<Self, StyleError> {
        if level > MAX_ELEVATION {
            return Err(StyleError::ElevationOutOfRange(level));
        }
        Ok(Self(level))
    }

    pub fn level(self) -> u32 {
        self.0
    }

    pub fn class(self) -> String {
        format!("elevation-{}", self.0)
    }
}

impl TryFrom<u32> for Elevation {
    type Error = StyleError;

    fn try_from(level: u32) -> Result<Self, Self::Error> {
        Elevation::new(level)
    }
}

impl From<Elevation> for u32 {
    fn from(elevation: Elevation) -> Self {
        elevation.0
    }
}

impl FromStr for Elevation {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = s
            .trim()
            .parse::<u32>()
            .map_err(|_| StyleError::InvalidElevation(s.to_string()))?;
        Elevation::new(level)
    }
}

/// Class for a raw elevation option. Out-of-range levels are dropped with a warning.
pub fn elevation_class(level: Option<u32>) -> Option<String> {
    let level = level?;
    match Elevation::new(level) {
        Ok(elevation) => Some(elevation.class()),
        Err(err) => {
            tracing::warn!(%err, "ignoring elevation");
            None
        }
    }
}
