use dioxus::prelude::*;

/// Theme used when neither a surface nor any ancestor names one.
pub const DEFAULT_THEME: &str = "light";

/// Theme used by a dark scope that names no theme.
pub const DARK_THEME: &str = "dark";

/// The theme in effect for a subtree, provided as context.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub name: Memo<String>,
}

/// Pick the explicit theme name, else the inherited one, else [`DEFAULT_THEME`].
pub fn resolve_theme_name(explicit: Option<&str>, inherited: Option<&str>) -> String {
    explicit
        .filter(|name| !name.is_empty())
        .or(inherited)
        .unwrap_or(DEFAULT_THEME)
        .to_string()
}

pub fn theme_class(name: &str) -> String {
    format!("theme--{name}")
}

/// Resolve the theme for the calling component and provide it to its descendants.
///
/// Returns the theme class for the component's root element.
pub fn provide_theme(theme: Option<String>) -> String {
    let inherited = try_use_context::<ThemeContext>();
    let name = use_memo(use_reactive((&theme,), move |(theme,)| {
        let parent = inherited.map(|ctx| ctx.name.read().clone());
        resolve_theme_name(theme.as_deref(), parent.as_deref())
    }));
    use_context_provider(|| ThemeContext { name });
    let class = theme_class(&name.read());
    class
}

/// Root theme scope for an application.
///
/// `theme` names the theme outright; otherwise `dark` picks between the
/// stock light and dark themes.
#[component]
pub fn ThemeProvider(
    theme: Option<String>,
    #[props(default = false)] dark: bool,
    children: Element,
) -> Element {
    let name = use_memo(use_reactive((&theme, &dark), |(theme, dark)| {
        let fallback = if dark { DARK_THEME } else { DEFAULT_THEME };
        resolve_theme_name(theme.as_deref(), Some(fallback))
    }));
    use_context_provider(|| ThemeContext { name });
    let class = format!("theme-provider {}", theme_class(&name.read()));

    rsx! {
        div {
            class: "{class}",
            {children}
        }
    }
}
