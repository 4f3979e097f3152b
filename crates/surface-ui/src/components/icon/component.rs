use dioxus::prelude::*;

/// A font icon, named by its icon-set class (`"mdi-heart"`, `"fa-solid fa-star"`).
#[component]
pub fn Icon(
    #[props(into)] icon: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", format!("icon {icon}"), None, false),
        Attribute::new("aria-hidden", "true", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        i { ..merged }
    }
}
