use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StyleError;

/// Vertical spacing of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    #[default]
    Default,
    Comfortable,
    Compact,
}

impl Density {
    pub fn as_str(&self) -> &'static str {
        match self {
            Density::Default => "default",
            Density::Comfortable => "comfortable",
            Density::Compact => "compact",
        }
    }

    pub fn class(&self, prefix: &str) -> String {
        format!("{prefix}--density-{}", self.as_str())
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Density {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Density::Default),
            "comfortable" => Ok(Density::Comfortable),
            "compact" => Ok(Density::Compact),
            other => Err(StyleError::UnknownDensity(other.to_string())),
        }
    }
}
