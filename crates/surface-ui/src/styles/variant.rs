use std::str::FromStr;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use super::StyleDecl;
use crate::error::StyleError;

/// Fill treatment of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Elevated,
    Flat,
    Tonal,
    Outlined,
    Text,
    Plain,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Elevated => "elevated",
            Variant::Flat => "flat",
            Variant::Tonal => "tonal",
            Variant::Outlined => "outlined",
            Variant::Text => "text",
            Variant::Plain => "plain",
        }
    }

    pub fn class(&self, prefix: &str) -> String {
        format!("{prefix}--variant-{}", self.as_str())
    }

    /// Filled variants take the color as background, the rest as text color.
    pub fn fills_background(&self) -> bool {
        matches!(self, Variant::Elevated | Variant::Flat)
    }
}

impl FromStr for Variant {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "elevated" => Ok(Variant::Elevated),
            "flat" => Ok(Variant::Flat),
            "tonal" => Ok(Variant::Tonal),
            "outlined" => Ok(Variant::Outlined),
            "text" => Ok(Variant::Text),
            "plain" => Ok(Variant::Plain),
            other => Err(StyleError::UnknownVariant(other.to_string())),
        }
    }
}

/// Whether a color value is literal CSS rather than a theme token.
pub fn is_css_color(color: &str) -> bool {
    color.starts_with('#')
        || color.starts_with("var(--")
        || ["rgb(", "rgba(", "hsl(", "hsla("]
            .iter()
            .any(|p| color.starts_with(p))
}

/// Classes and inline styles contributed by a color under a variant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorContribution {
    pub classes: Vec<String>,
    pub styles: Vec<StyleDecl>,
}

pub fn color_contribution(variant: Variant, color: Option<&str>) -> ColorContribution {
    let Some(color) = color.map(str::trim).filter(|c| !c.is_empty()) else {
        return ColorContribution::default();
    };
    let background = variant.fills_background();
    if is_css_color(color) {
        let prop = if background { "background-color" } else { "color" };
        ColorContribution {
            classes: Vec::new(),
            styles: vec![(prop, color.to_string())],
        }
    } else {
        let class = if background {
            format!("bg-{color}")
        } else {
            format!("text-{color}")
        };
        ColorContribution {
            classes: vec![class],
            styles: Vec::new(),
        }
    }
}

/// Hover/focus overlay and underlay layers of an interactive surface.
#[component]
pub fn Overlays(#[props(into)] prefix: String, active: bool) -> Element {
    rsx! {
        if active {
            span { class: "{prefix}__overlay" }
            span { class: "{prefix}__underlay" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn variant_class() {
        assert_eq!(Variant::default().class("card"), "card--variant-elevated");
        assert_eq!("tonal".parse::<Variant>(), Ok(Variant::Tonal));
        assert!("shiny".parse::<Variant>().is_err());
    }

    #[test]
    fn token_color_becomes_class() {
        assert_eq!(
            color_contribution(Variant::Elevated, Some("primary")).classes,
            vec!["bg-primary"]
        );
        assert_eq!(
            color_contribution(Variant::Outlined, Some("primary")).classes,
            vec!["text-primary"]
        );
    }

    #[test]
    fn css_color_becomes_style() {
        let c = color_contribution(Variant::Flat, Some("#ff0000"));
        assert!(c.classes.is_empty());
        assert_eq!(c.styles, vec![("background-color", "#ff0000".to_string())]);

        let c = color_contribution(Variant::Text, Some("rgb(0, 0, 0)"));
        assert_eq!(c.styles, vec![("color", "rgb(0, 0, 0)".to_string())]);
    }

    #[test]
    fn no_color_no_contribution() {
        assert_eq!(color_contribution(Variant::Tonal, None), ColorContribution::default());
        assert_eq!(color_contribution(Variant::Tonal, Some(" ")), ColorContribution::default());
    }

    #[test]
    fn overlays_render_only_when_active() {
        let on = dioxus_ssr::render_element(rsx! { Overlays { prefix: "card", active: true } });
        assert_eq!(
            on,
            "<span class=\"card__overlay\"></span><span class=\"card__underlay\"></span>"
        );
        let off = dioxus_ssr::render_element(rsx! { Overlays { prefix: "card", active: false } });
        assert!(!off.contains("card__overlay"));
    }
}
