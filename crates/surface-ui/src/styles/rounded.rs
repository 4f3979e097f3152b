use serde::{Deserialize, Serialize};

/// Corner rounding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RoundedValue", into = "RoundedValue")]
pub enum Rounded {
    /// The component's own rounding.
    On,
    /// Square corners.
    Off,
    /// Square corners, regardless of other rounding.
    Tile,
    /// Utility tokens such as `"lg"`, `"t-xl"` or `"0"`.
    Size(String),
}

impl Rounded {
    pub fn classes(&self, prefix: &str) -> Vec<String> {
        match self {
            Rounded::Off | Rounded::Tile => vec!["rounded-0".to_string()],
            Rounded::On => vec![format!("{prefix}--rounded")],
            Rounded::Size(tokens) if tokens.trim().is_empty() => vec![format!("{prefix}--rounded")],
            Rounded::Size(tokens) => tokens
                .split_whitespace()
                .map(|token| format!("rounded-{token}"))
                .collect(),
        }
    }
}

impl From<bool> for Rounded {
    fn from(on: bool) -> Self {
        if on {
            Rounded::On
        } else {
            Rounded::Off
        }
    }
}

impl From<&str> for Rounded {
    fn from(value: &str) -> Self {
        match value.trim() {
            "" | "true" => Rounded::On,
            "false" => Rounded::Off,
            "tile" => Rounded::Tile,
            tokens => Rounded::Size(tokens.to_string()),
        }
    }
}

impl From<String> for Rounded {
    fn from(value: String) -> Self {
        Rounded::from(value.as_str())
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RoundedValue {
    Flag(bool),
    Token(String),
}

impl From<RoundedValue> for Rounded {
    fn from(value: RoundedValue) -> Self {
        match value {
            RoundedValue::Flag(on) => Rounded::from(on),
            RoundedValue::Token(token) => Rounded::from(token),
        }
    }
}

impl From<Rounded> for RoundedValue {
    fn from(rounded: Rounded) -> Self {
        match rounded {
            Rounded::On => RoundedValue::Flag(true),
            Rounded::Off => RoundedValue::Flag(false),
            Rounded::Tile => RoundedValue::Token("tile".to_string()),
            Rounded::Size(tokens) => RoundedValue::Token(tokens),
        }
    }
}

/// Classes for an optional rounding option.
pub fn rounded_classes(prefix: &str, rounded: Option<&Rounded>) -> Vec<String> {
    rounded.map(|r| r.classes(prefix)).unwrap_or_default()
}
