use dioxus::prelude::*;

use crate::components::LinearProgress;

/// Loading state of a surface: off, on, or on with a color token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Loading {
    #[default]
    Off,
    Active,
    Color(String),
}

impl Loading {
    pub fn is_active(&self) -> bool {
        !matches!(self, Loading::Off)
    }

    pub fn color(&self) -> Option<&str> {
        match self {
            Loading::Color(color) => Some(color),
            _ => None,
        }
    }

    pub fn class(&self, prefix: &str) -> Option<String> {
        self.is_active().then(|| format!("{prefix}--loading"))
    }
}

impl From<bool> for Loading {
    fn from(active: bool) -> Self {
        if active {
            Loading::Active
        } else {
            Loading::Off
        }
    }
}

impl From<&str> for Loading {
    fn from(color: &str) -> Self {
        match color.trim() {
            "" | "false" => Loading::Off,
            "true" => Loading::Active,
            color => Loading::Color(color.to_string()),
        }
    }
}

impl From<String> for Loading {
    fn from(color: String) -> Self {
        Loading::from(color.as_str())
    }
}

/// Loader region of a surface.
///
/// The container is always present so layout does not shift; content only
/// renders while loading. Caller content replaces the default progress bar.
#[component]
pub fn LoaderSlot(
    #[props(into)] prefix: String,
    #[props(default, into)] loading: Loading,
    content: Option<Element>,
) -> Element {
    let active = loading.is_active();
    let class = if active {
        format!("{prefix}__loader {prefix}__loader--active")
    } else {
        format!("{prefix}__loader")
    };
    let color = loading.color().map(str::to_string);

    rsx! {
        div {
            class: "{class}",
            if active {
                if let Some(custom) = content {
                    {custom}
                } else {
                    LinearProgress { color }
                }
            }
        }
    }
}
