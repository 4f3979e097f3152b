use dioxus::prelude::*;
use dioxus_primitives::progress as prim;

use crate::styles::is_css_color;

#[component]
pub fn Progress(mut props: prim::ProgressProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "progress", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Progress { ..props }
    }
}

#[component]
pub fn ProgressIndicator(mut props: prim::ProgressIndicatorProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "progress-indicator", None, false));

    rsx! {
        prim::ProgressIndicator { ..props }
    }
}

/// CSS custom property tinting a progress bar with a theme token or a literal color.
pub fn progress_tint(color: &str) -> String {
    if is_css_color(color) {
        format!("--progress-color: {color};")
    } else {
        format!("--progress-color: var(--color-{color});")
    }
}

/// A thin bar for loading states. Without a `value` it runs indeterminately.
#[component]
pub fn LinearProgress(color: Option<String>, value: Option<f64>) -> Element {
    let tint = color
        .as_deref()
        .filter(|c| !c.is_empty())
        .map(progress_tint);

    rsx! {
        div {
            class: "linear-progress",
            style: tint,
            Progress {
                value,
                ProgressIndicator {}
            }
        }
    }
}
