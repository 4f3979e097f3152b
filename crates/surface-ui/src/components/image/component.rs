use dioxus::prelude::*;

/// Fallback image settings a container provides to images rendered inside it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageDefaults {
    pub src: Option<String>,
    pub cover: bool,
}

#[derive(Clone, Copy)]
struct ImageDefaultsContext(Memo<ImageDefaults>);

fn inherited_defaults(ctx: Option<ImageDefaultsContext>) -> ImageDefaults {
    ctx.map(|ImageDefaultsContext(memo)| memo.read().clone())
        .unwrap_or_default()
}

/// A responsive image. Unset `src`/`cover` fall back to the nearest [`ImageDefaults`].
#[component]
pub fn Img(
    src: Option<String>,
    cover: Option<bool>,
    #[props(into, default)] alt: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let defaults = inherited_defaults(try_use_context::<ImageDefaultsContext>());
    let src = src.filter(|s| !s.is_empty()).or(defaults.src);
    let cover = cover.unwrap_or(defaults.cover);
    let class = if cover {
        "img__img img__img--cover"
    } else {
        "img__img"
    };

    let base = vec![Attribute::new("class", "img", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            if let Some(src) = src {
                img { class, src, alt }
            }
        }
    }
}

/// Provide [`ImageDefaults`] to the images in `children`.
///
/// A disabled provider passes the inherited defaults through untouched.
#[component]
pub fn ImageDefaultsProvider(
    defaults: ImageDefaults,
    #[props(default = false)] disabled: bool,
    children: Element,
) -> Element {
    let inherited = try_use_context::<ImageDefaultsContext>();
    let effective = use_memo(use_reactive(
        (&defaults, &disabled),
        move |(defaults, disabled)| {
            if disabled {
                inherited_defaults(inherited)
            } else {
                defaults
            }
        },
    ));
    use_context_provider(|| ImageDefaultsContext(effective));

    rsx! { {children} }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_src_renders_image() {
        let html = dioxus_ssr::render_element(rsx! { Img { src: "/a.png", cover: true } });
        assert!(html.contains("class=\"img\""));
        assert!(html.contains("img__img--cover"));
        assert!(html.contains("src=\"/a.png\""));
    }

    #[test]
    fn no_src_renders_empty_frame() {
        let html = dioxus_ssr::render_element(rsx! { Img {} });
        assert!(!html.contains("<img"));
    }

    #[test]
    fn provider_fills_missing_src_and_cover() {
        let html = dioxus_ssr::render_element(rsx! {
            ImageDefaultsProvider {
                defaults: ImageDefaults { src: Some("/cover.jpg".into()), cover: true },
                Img {}
            }
        });
        assert!(html.contains("src=\"/cover.jpg\""));
        assert!(html.contains("img__img--cover"));
    }

    #[test]
    fn disabled_provider_does_not_apply() {
        let html = dioxus_ssr::render_element(rsx! {
            ImageDefaultsProvider {
                defaults: ImageDefaults { src: Some("/cover.jpg".into()), cover: true },
                disabled: true,
                Img {}
            }
        });
        assert!(!html.contains("/cover.jpg"));
    }
}
