use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StyleError;

/// Root element used by a surface that is not rendered as a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardTag {
    #[default]
    Div,
    Article,
    Section,
    Aside,
    Li,
}

impl CardTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardTag::Div => "div",
            CardTag::Article => "article",
            CardTag::Section => "section",
            CardTag::Aside => "aside",
            CardTag::Li => "li",
        }
    }
}

impl FromStr for CardTag {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "div" => Ok(CardTag::Div),
            "article" => Ok(CardTag::Article),
            "section" => Ok(CardTag::Section),
            "aside" => Ok(CardTag::Aside),
            "li" => Ok(CardTag::Li),
            other => Err(StyleError::UnknownTag(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tag() {
        assert_eq!("article".parse::<CardTag>(), Ok(CardTag::Article));
        assert_eq!(
            "span".parse::<CardTag>(),
            Err(StyleError::UnknownTag("span".into()))
        );
        assert_eq!(CardTag::default().as_str(), "div");
    }
}
