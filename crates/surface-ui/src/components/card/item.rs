use dioxus::prelude::*;

use super::visibility::has_content;
use super::{CardSubtitle, CardTitle};
use crate::components::{Icon, SourceAvatar};

/// Header row of a card: prepend media, title and subtitle, append media.
///
/// Slots replace the matching string options. The content column always
/// renders; `item` content goes below the subtitle.
#[derive(Props, Clone, PartialEq)]
pub struct CardItemProps {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub prepend_avatar: Option<String>,
    pub prepend_icon: Option<String>,
    pub append_avatar: Option<String>,
    pub append_icon: Option<String>,
    pub title_slot: Option<Element>,
    pub subtitle_slot: Option<Element>,
    pub prepend_slot: Option<Element>,
    pub append_slot: Option<Element>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub item: Option<Element>,
}

#[component]
pub fn CardItem(props: CardItemProps) -> Element {
    let has_title = has_content(props.title_slot.is_some(), &[props.title.as_deref()]);
    let has_subtitle = has_content(props.subtitle_slot.is_some(), &[props.subtitle.as_deref()]);
    let has_prepend = has_content(
        props.prepend_slot.is_some(),
        &[props.prepend_avatar.as_deref(), props.prepend_icon.as_deref()],
    );
    let has_append = has_content(
        props.append_slot.is_some(),
        &[props.append_avatar.as_deref(), props.append_icon.as_deref()],
    );

    let title_text = props.title.clone().unwrap_or_default();
    let subtitle_text = props.subtitle.clone().unwrap_or_default();

    let base = vec![Attribute::new("class", "card-item", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    rsx! {
        div {
            ..merged,
            if has_prepend {
                div {
                    class: "card-item__prepend",
                    Media {
                        slot: props.prepend_slot,
                        avatar: props.prepend_avatar,
                        icon: props.prepend_icon,
                        label: props.title.clone(),
                    }
                }
            }
            div {
                class: "card-item__content",
                if has_title {
                    CardTitle {
                        if let Some(title) = props.title_slot {
                            {title}
                        } else {
                            "{title_text}"
                        }
                    }
                }
                if has_subtitle {
                    CardSubtitle {
                        if let Some(subtitle) = props.subtitle_slot {
                            {subtitle}
                        } else {
                            "{subtitle_text}"
                        }
                    }
                }
                if let Some(item) = props.item {
                    {item}
                }
            }
            if has_append {
                div {
                    class: "card-item__append",
                    Media {
                        slot: props.append_slot,
                        avatar: props.append_avatar,
                        icon: props.append_icon,
                        label: props.title.clone(),
                    }
                }
            }
        }
    }
}

/// Prepend/append media: the caller's slot, else an avatar and/or an icon.
#[component]
fn Media(
    slot: Option<Element>,
    avatar: Option<String>,
    icon: Option<String>,
    label: Option<String>,
) -> Element {
    if let Some(slot) = slot {
        return rsx! { {slot} };
    }
    let avatar = avatar.filter(|a| !a.is_empty());
    let icon = icon.filter(|i| !i.is_empty());

    rsx! {
        if let Some(src) = avatar {
            SourceAvatar { src, label: label.unwrap_or_default() }
        }
        if let Some(icon) = icon {
            Icon { icon }
        }
    }
}
