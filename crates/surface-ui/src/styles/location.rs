use std::str::FromStr;

use super::StyleDecl;
use crate::error::StyleError;

/// One edge of an anchor, with `start`/`end` already resolved for left-to-right text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

impl Edge {
    fn parse(token: &str) -> Result<Self, StyleError> {
        match token {
            "top" => Ok(Edge::Top),
            "bottom" => Ok(Edge::Bottom),
            "left" | "start" => Ok(Edge::Left),
            "right" | "end" => Ok(Edge::Right),
            "center" => Ok(Edge::Center),
            other => Err(StyleError::UnknownLocation(other.to_string())),
        }
    }

    fn property(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
            Edge::Right => "right",
            Edge::Center => "center",
        }
    }
}

/// A parsed `location` such as `"top"` or `"bottom end"`.
///
/// A single token anchors to the middle of that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub side: Edge,
    pub align: Edge,
}

impl FromStr for Anchor {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let side = match tokens.next() {
            Some(token) => Edge::parse(token)?,
            None => return Err(StyleError::UnknownLocation(s.to_string())),
        };
        let align = match tokens.next() {
            Some(token) => Edge::parse(token)?,
            None => Edge::Center,
        };
        if let Some(extra) = tokens.next() {
            return Err(StyleError::UnknownLocation(extra.to_string()));
        }
        Ok(Anchor { side, align })
    }
}

impl Anchor {
    /// Inline declarations pinning an element to this anchor.
    pub fn styles(&self) -> Vec<StyleDecl> {
        let mut decls = Vec::new();
        if self.side != Edge::Center {
            decls.push((self.side.property(), "0".to_string()));
        }
        if self.align != Edge::Center {
            decls.push((self.align.property(), "0".to_string()));
            return decls;
        }

        let transform = match self.side {
            Edge::Center => {
                decls.push(("top", "50%".to_string()));
                decls.push(("left", "50%".to_string()));
                "translate(-50%, -50%)"
            }
            Edge::Top | Edge::Bottom => {
                decls.push(("left", "50%".to_string()));
                "translateX(-50%)"
            }
            Edge::Left | Edge::Right => {
                decls.push(("top", "50%".to_string()));
                "translateY(-50%)"
            }
        };
        decls.push(("transform", transform.to_string()));
        decls
    }
}

/// Declarations for a raw `location` option. Unparseable locations are dropped with a warning.
pub fn location_styles(location: Option<&str>) -> Vec<StyleDecl> {
    let Some(location) = location.filter(|l| !l.trim().is_empty()) else {
        return Vec::new();
    };
    match location.parse::<Anchor>() {
        Ok(anchor) => anchor.styles(),
        Err(err) => {
            tracing::warn!(%err, location, "ignoring location");
            Vec::new()
        }
    }
}
