use dioxus::prelude::*;
use dioxus_primitives::avatar as prim;

#[component]
pub fn Avatar(mut props: prim::AvatarProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "surface-avatar", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Avatar { ..props }
    }
}

#[component]
pub fn AvatarImage(mut props: prim::AvatarImageProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "surface-avatar-image", None, false));

    rsx! {
        prim::AvatarImage { ..props }
    }
}

#[component]
pub fn AvatarFallback(mut props: prim::AvatarFallbackProps) -> Element {
    props.attributes.push(Attribute::new(
        "class",
        "surface-avatar-fallback",
        None,
        false,
    ));

    rsx! {
        prim::AvatarFallback { ..props }
    }
}

/// Initials shown while an avatar image loads or when it fails.
pub fn avatar_initials(label: &str) -> String {
    label
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

/// An avatar for an image source, falling back to initials of `label`.
#[component]
pub fn SourceAvatar(
    #[props(into)] src: String,
    #[props(into, default)] label: String,
) -> Element {
    let initials = avatar_initials(&label);

    rsx! {
        Avatar {
            AvatarImage { src }
            AvatarFallback { "{initials}" }
        }
    }
}
