use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StyleError;

/// CSS positioning scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Static,
    Relative,
    Fixed,
    Absolute,
    Sticky,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Static => "static",
            Position::Relative => "relative",
            Position::Fixed => "fixed",
            Position::Absolute => "absolute",
            Position::Sticky => "sticky",
        }
    }

    pub fn class(&self, prefix: &str) -> String {
        format!("{prefix}--{}", self.as_str())
    }
}

impl FromStr for Position {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "static" => Ok(Position::Static),
            "relative" => Ok(Position::Relative),
            "fixed" => Ok(Position::Fixed),
            "absolute" => Ok(Position::Absolute),
            "sticky" => Ok(Position::Sticky),
            other => Err(StyleError::UnknownPosition(other.to_string())),
        }
    }
}
