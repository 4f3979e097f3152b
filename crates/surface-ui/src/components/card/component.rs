use dioxus::prelude::*;

use super::visibility::{has_content, state_classes, CardContent, CardVisibility};
use super::{CardActions, CardItem, CardText};
use crate::components::{ImageDefaults, ImageDefaultsProvider, Img};
use crate::link::{has_router, navigate, resolve_link, LinkTarget};
use crate::styles::{
    border_classes, color_contribution, elevation_class, location_styles, rounded_classes,
    style_string, CardTag, Density, Dimensions, LoaderSlot, Loading, Overlays, Position, Rounded,
    Variant,
};
use crate::theme::provide_theme;

const PREFIX: &str = "card";

/// A content surface with optional image, header, text and actions.
///
/// String options and slots are interchangeable: a section renders when
/// either its slot is filled or its option is non-empty, and a filled slot
/// replaces the option's content.
#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    #[props(default = false)]
    pub disabled: bool,
    #[props(default = false)]
    pub flat: bool,
    #[props(default = false)]
    pub hover: bool,
    /// `Some(true)` forces a clickable surface, `Some(false)` disables link behaviour.
    pub link: Option<bool>,
    #[props(default = true)]
    pub ripple: bool,
    #[props(default, into)]
    pub loading: Loading,

    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub text: Option<String>,
    pub image: Option<String>,
    pub prepend_avatar: Option<String>,
    pub prepend_icon: Option<String>,
    pub append_avatar: Option<String>,
    pub append_icon: Option<String>,

    pub theme: Option<String>,
    pub border: Option<String>,
    #[props(default)]
    pub density: Density,
    pub elevation: Option<u32>,
    #[props(into)]
    pub rounded: Option<Rounded>,
    pub position: Option<Position>,
    pub location: Option<String>,
    pub height: Option<String>,
    pub width: Option<String>,
    pub min_height: Option<String>,
    pub min_width: Option<String>,
    pub max_height: Option<String>,
    pub max_width: Option<String>,
    #[props(default)]
    pub variant: Variant,
    pub color: Option<String>,
    #[props(default)]
    pub tag: CardTag,

    pub href: Option<String>,
    pub to: Option<String>,
    #[props(default = false)]
    pub replace: bool,
    pub onclick: Option<EventHandler<MouseEvent>>,

    pub actions: Option<Element>,
    pub item: Option<Element>,
    pub title_slot: Option<Element>,
    pub subtitle_slot: Option<Element>,
    pub text_slot: Option<Element>,
    pub loader_slot: Option<Element>,
    pub image_slot: Option<Element>,
    pub prepend_slot: Option<Element>,
    pub append_slot: Option<Element>,

    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

impl CardProps {
    fn content(&self) -> CardContent {
        CardContent {
            title: has_content(self.title_slot.is_some(), &[self.title.as_deref()]),
            subtitle: has_content(self.subtitle_slot.is_some(), &[self.subtitle.as_deref()]),
            prepend: has_content(
                self.prepend_slot.is_some(),
                &[self.prepend_avatar.as_deref(), self.prepend_icon.as_deref()],
            ),
            append: has_content(
                self.append_slot.is_some(),
                &[self.append_avatar.as_deref(), self.append_icon.as_deref()],
            ),
            image: has_content(self.image_slot.is_some(), &[self.image.as_deref()]),
            text: has_content(self.text_slot.is_some(), &[self.text.as_deref()]),
            actions: self.actions.is_some(),
        }
    }

    fn link_target(&self) -> LinkTarget {
        LinkTarget {
            href: self.href.clone(),
            to: self.to.clone(),
            replace: self.replace,
        }
    }

    fn dimensions(&self) -> Dimensions {
        Dimensions {
            height: self.height.clone(),
            max_height: self.max_height.clone(),
            max_width: self.max_width.clone(),
            min_height: self.min_height.clone(),
            min_width: self.min_width.clone(),
            width: self.width.clone(),
        }
    }

    /// Root `class` and `style` values.
    fn root_style(&self, vis: &CardVisibility, theme_class: String) -> (String, String) {
        let color = color_contribution(self.variant, self.color.as_deref());

        let mut classes: Vec<String> = vec![PREFIX.to_string()];
        classes.extend(
            state_classes(
                self.disabled,
                self.flat,
                self.hover,
                vis.is_clickable,
                self.ripple,
            )
            .into_iter()
            .map(String::from),
        );
        classes.push(theme_class);
        classes.extend(border_classes(PREFIX, self.border.as_deref()));
        classes.extend(color.classes);
        classes.push(self.density.class(PREFIX));
        classes.extend(elevation_class(self.elevation));
        classes.extend(self.loading.class(PREFIX));
        classes.extend(self.position.map(|p| p.class(PREFIX)));
        classes.extend(rounded_classes(PREFIX, self.rounded.as_ref()));
        classes.push(self.variant.class(PREFIX));

        let mut styles = color.styles;
        styles.extend(self.dimensions().styles());
        styles.extend(location_styles(self.location.as_deref()));

        (classes.join(" "), style_string(&styles))
    }
}

macro_rules! card_root {
    ($tag:ident, $attrs:ident, $onclick:ident, $body:ident) => {
        rsx! {
            document::Link { rel: "stylesheet", href: asset!("./style.css") }
            $tag {
                onclick: $onclick,
                ..$attrs,
                {$body}
            }
        }
    };
}

#[component]
pub fn Card(props: CardProps) -> Element {
    let theme_class = provide_theme(props.theme.clone());
    let target = props.link_target();
    let resolved = resolve_link(&target, props.onclick.is_some(), has_router());
    let vis = CardVisibility::derive(props.link, props.disabled, &resolved, &props.content());
    tracing::trace!(?vis, "card flags");

    let (class, style) = props.root_style(&vis, theme_class);
    let mut base = vec![Attribute::new("class", class, None, false)];
    if !style.is_empty() {
        base.push(Attribute::new("style", style, None, false));
    }
    if props.disabled {
        base.push(Attribute::new("tabindex", "-1", None, false));
    }
    if vis.is_link {
        if let Some(href) = resolved.href.clone() {
            base.push(Attribute::new("href", href, None, false));
        }
    }
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes.clone()]);

    let disabled = props.disabled;
    let clickable = vis.is_clickable;
    let listener = props.onclick;
    let onclick = move |evt: MouseEvent| {
        if disabled {
            evt.prevent_default();
            return;
        }
        if let Some(handler) = &listener {
            handler.call(evt.clone());
        }
        if clickable && navigate(&target) {
            evt.prevent_default();
        }
    };

    let image_src = props.image.clone().filter(|src| !src.is_empty());
    let image_defaults = ImageDefaults {
        src: image_src.clone(),
        cover: true,
    };
    let text = props.text.clone().unwrap_or_default();

    let body = rsx! {
        if vis.has_image {
            div {
                class: "card__image",
                if let Some(image) = props.image_slot.clone() {
                    ImageDefaultsProvider {
                        defaults: image_defaults,
                        disabled: image_src.is_none(),
                        {image}
                    }
                } else {
                    Img { src: image_src.clone(), cover: true }
                }
            }
        }
        LoaderSlot {
            prefix: PREFIX,
            loading: props.loading.clone(),
            content: props.loader_slot.clone(),
        }
        if vis.has_card_item {
            CardItem {
                title: props.title.clone(),
                subtitle: props.subtitle.clone(),
                prepend_avatar: props.prepend_avatar.clone(),
                prepend_icon: props.prepend_icon.clone(),
                append_avatar: props.append_avatar.clone(),
                append_icon: props.append_icon.clone(),
                title_slot: props.title_slot.clone(),
                subtitle_slot: props.subtitle_slot.clone(),
                prepend_slot: props.prepend_slot.clone(),
                append_slot: props.append_slot.clone(),
                item: props.item.clone(),
            }
        }
        if vis.has_text {
            CardText {
                if let Some(slot) = props.text_slot.clone() {
                    {slot}
                } else {
                    "{text}"
                }
            }
        }
        {props.children}
        if let Some(actions) = props.actions.clone() {
            CardActions { {actions} }
        }
        Overlays { prefix: PREFIX, active: vis.is_clickable }
    };

    if vis.is_link {
        return card_root!(a, merged, onclick, body);
    }
    match props.tag {
        CardTag::Div => card_root!(div, merged, onclick, body),
        CardTag::Article => card_root!(article, merged, onclick, body),
        CardTag::Section => card_root!(section, merged, onclick, body),
        CardTag::Aside => card_root!(aside, merged, onclick, body),
        CardTag::Li => card_root!(li, merged, onclick, body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(element: Element) -> String {
        dioxus_ssr::render_element(element)
    }

    fn root_class(html: &str) -> String {
        let start = html.find("class=\"card ").map(|i| i + "class=\"".len());
        let start = start.expect("card root class");
        let end = html[start..].find('"').expect("closing quote") + start;
        html[start..end].to_string()
    }

    #[test]
    fn bare_card_has_structural_classes_and_loader() {
        let html = render(rsx! { Card { "body" } });
        assert_eq!(
            root_class(&html),
            "card theme--light card--density-default card--variant-elevated"
        );
        assert!(html.contains("<div class=\"card__loader\"></div>"));
        assert!(html.contains("body"));
        for absent in ["card__image", "card-item", "card-text", "card-actions", "card__overlay"] {
            assert!(!html.contains(absent), "unexpected {absent}");
        }
    }

    #[test]
    fn title_only_card_renders_header_and_nothing_else() {
        let html = render(rsx! { Card { title: "A" } });
        assert!(!html.contains("<a "));
        assert!(html.contains("<div class=\"card-title\">A</div>"));
        assert!(!html.contains("card-subtitle"));
        assert!(!html.contains("card__image"));
        assert!(!html.contains("card-text"));
        assert!(!html.contains("card-actions"));
        assert!(!root_class(&html).contains("card--link"));
    }

    #[test]
    fn disabled_overrides_forced_link() {
        let html = render(rsx! { Card { link: true, disabled: true, title: "A" } });
        let class = root_class(&html);
        assert!(class.contains("card--disabled"));
        assert!(!class.contains("card--link"));
        assert!(html.contains("tabindex=\"-1\""));
        assert!(!html.contains("card__overlay"));
    }

    #[test]
    fn forced_link_is_clickable_with_overlays() {
        let html = render(rsx! { Card { link: true } });
        let class = root_class(&html);
        assert!(class.contains("card--link"));
        assert!(class.contains("card--ripple"));
        assert!(html.contains("card__overlay"));
        assert!(html.contains("card__underlay"));
        assert!(!html.contains("<a "));
    }

    #[test]
    fn href_renders_anchor_root() {
        let html = render(rsx! { Card { href: "https://example.com/docs", ripple: false } });
        assert!(html.contains("<a "));
        assert!(html.contains("href=\"https://example.com/docs\""));
        let class = root_class(&html);
        assert!(class.contains("card--link"));
        assert!(!class.contains("card--ripple"));
    }

    #[test]
    fn route_without_router_is_not_a_link() {
        let html = render(rsx! { Card { to: "/cards/1", title: "A" } });
        assert!(!html.contains("<a "));
        assert!(!html.contains("href="));
        assert!(!root_class(&html).contains("card--link"));
        assert!(!html.contains("card__overlay"));
    }

    #[test]
    fn route_without_router_falls_back_to_href() {
        let html = render(rsx! {
            Card { to: "/cards/1", href: "https://example.com/cards/1" }
        });
        assert!(html.contains("<a "));
        assert!(html.contains("href=\"https://example.com/cards/1\""));
        assert!(!html.contains("href=\"/cards/1\""));
        assert!(root_class(&html).contains("card--link"));
    }

    #[test]
    fn route_with_listener_stays_clickable_without_anchor() {
        let html = render(rsx! { Card { to: "/cards/1", onclick: move |_| {} } });
        assert!(!html.contains("<a "));
        assert!(root_class(&html).contains("card--link"));
    }

    #[test]
    fn link_false_suppresses_anchor_and_clicks() {
        let html = render(rsx! { Card { href: "/docs", link: false } });
        assert!(!html.contains("<a "));
        assert!(!html.contains("href="));
        assert!(!root_class(&html).contains("card--link"));
    }

    #[test]
    fn click_listener_makes_clickable_without_anchor() {
        let html = render(rsx! { Card { onclick: move |_| {} } });
        assert!(root_class(&html).contains("card--link"));
        assert!(!html.contains("<a "));
    }

    #[test]
    fn image_option_uses_default_cover_image() {
        let html = render(rsx! { Card { image: "/hero.jpg" } });
        assert!(html.contains("card__image"));
        assert!(html.contains("src=\"/hero.jpg\""));
        assert!(html.contains("img__img--cover"));
    }

    #[test]
    fn image_slot_receives_image_defaults() {
        let html = render(rsx! {
            Card {
                image: "/hero.jpg",
                image_slot: rsx! { Img { class: "custom" } },
            }
        });
        assert!(html.contains("card__image"));
        assert!(html.contains("custom"));
        assert!(html.contains("src=\"/hero.jpg\""));
    }

    #[test]
    fn image_slot_without_option_gets_no_source() {
        let html = render(rsx! {
            Card { image_slot: rsx! { span { class: "art" } } }
        });
        assert!(html.contains("card__image"));
        assert!(html.contains("class=\"art\""));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn empty_image_option_hides_image_block() {
        let html = render(rsx! { Card { image: "" } });
        assert!(!html.contains("card__image"));
    }

    #[test]
    fn text_slot_wins_over_option() {
        let html = render(rsx! { Card { text: "plain" } });
        assert!(html.contains("<div class=\"card-text\">plain</div>"));

        let html = render(rsx! {
            Card { text: "plain", text_slot: rsx! { em { "rich" } } }
        });
        assert!(html.contains("<em>rich</em>"));
        assert!(!html.contains("plain"));
    }

    #[test]
    fn actions_render_after_children() {
        let html = render(rsx! {
            Card {
                actions: rsx! { button { "Open" } },
                p { "content" }
            }
        });
        let content = html.find("<p>content</p>").expect("children");
        let actions = html.find("card-actions").expect("actions");
        assert!(content < actions);
    }

    #[test]
    fn sections_render_in_order() {
        let html = render(rsx! {
            Card {
                image: "/a.png",
                title: "T",
                text: "X",
                actions: rsx! { span { "go" } },
                link: true,
            }
        });
        let positions: Vec<usize> = [
            "card__image",
            "card__loader",
            "card-item",
            "card-text",
            "card-actions",
            "card__overlay",
        ]
        .iter()
        .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
        .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn prepend_avatar_alone_shows_item() {
        let html = render(rsx! { Card { prepend_avatar: "/me.png" } });
        assert!(html.contains("card-item__prepend"));
        assert!(html.contains("surface-avatar"));
        assert!(!html.contains("card-title"));
    }

    #[test]
    fn loading_color_activates_loader() {
        let html = render(rsx! { Card { loading: "warning" } });
        assert!(root_class(&html).contains("card--loading"));
        assert!(html.contains("card__loader--active"));
        assert!(html.contains("var(--color-warning)"));
    }

    #[test]
    fn hover_and_flat() {
        let class = root_class(&render(rsx! { Card { hover: true } }));
        assert!(class.contains("card--hover"));
        let class = root_class(&render(rsx! { Card { hover: true, flat: true } }));
        assert!(class.contains("card--flat"));
        assert!(!class.contains("card--hover"));
    }

    #[test]
    fn style_groups_contribute_classes() {
        let html = render(rsx! {
            Card {
                border: "",
                density: Density::Compact,
                elevation: 4u32,
                rounded: "lg",
                position: Position::Absolute,
                variant: Variant::Tonal,
                color: "primary",
            }
        });
        assert_eq!(
            root_class(&html),
            "card theme--light card--border text-primary card--density-compact \
             elevation-4 card--absolute rounded-lg card--variant-tonal"
        );
    }

    #[test]
    fn invalid_elevation_is_dropped() {
        let class = root_class(&render(rsx! { Card { elevation: 40u32 } }));
        assert!(!class.contains("elevation-"));
    }

    #[test]
    fn inline_styles_from_color_dimensions_location() {
        let html = render(rsx! {
            Card { color: "#112233", width: "320", location: "top end" }
        });
        assert!(html.contains(
            "style=\"background-color: #112233; width: 320px; top: 0; right: 0;\""
        ));
    }

    #[test]
    fn tag_option_changes_root_element() {
        let html = render(rsx! { Card { tag: CardTag::Article, "x" } });
        assert!(html.contains("<article class=\"card "));
    }

    #[test]
    fn nested_cards_inherit_theme() {
        let html = render(rsx! {
            Card { theme: "dark",
                Card { title: "inner" }
            }
        });
        assert_eq!(html.matches("theme--dark").count(), 2);
        assert!(!html.contains("theme--light"));
    }
}
