//! Which parts of a card render, and whether it navigates or reacts to clicks.
//!
//! Everything here is a pure function of the card's options and of which
//! slots the caller filled. It is recomputed on every render pass.

use crate::link::LinkState;

/// A string option counts as content only when non-empty.
pub fn has_text_value(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// A region has content when its slot is filled or any of its string options is.
pub fn has_content(slot: bool, values: &[Option<&str>]) -> bool {
    slot || values.iter().any(|v| has_text_value(*v))
}

/// Presence of each piece of optional card content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardContent {
    pub title: bool,
    pub subtitle: bool,
    pub prepend: bool,
    pub append: bool,
    pub image: bool,
    pub text: bool,
    pub actions: bool,
}

/// The `link` option: `Some(true)` forces a clickable surface, `Some(false)`
/// forbids links and clicks, `None` defers to the link resolver.
pub fn is_link(link: Option<bool>, resolved: &LinkState) -> bool {
    link != Some(false) && resolved.is_link
}

/// Disabled always wins, then a forced `link`, then the resolver.
pub fn is_clickable(link: Option<bool>, disabled: bool, resolved: &LinkState) -> bool {
    !disabled && link != Some(false) && (link == Some(true) || resolved.is_clickable)
}

/// Derived flags for one render pass of a card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardVisibility {
    pub is_link: bool,
    pub is_clickable: bool,
    pub has_title: bool,
    pub has_subtitle: bool,
    pub has_header: bool,
    pub has_prepend: bool,
    pub has_append: bool,
    pub has_card_item: bool,
    pub has_image: bool,
    pub has_text: bool,
    pub has_actions: bool,
}

impl CardVisibility {
    pub fn derive(
        link: Option<bool>,
        disabled: bool,
        resolved: &LinkState,
        content: &CardContent,
    ) -> Self {
        let has_header = content.title || content.subtitle;
        Self {
            is_link: is_link(link, resolved),
            is_clickable: is_clickable(link, disabled, resolved),
            has_title: content.title,
            has_subtitle: content.subtitle,
            has_header,
            has_prepend: content.prepend,
            has_append: content.append,
            has_card_item: has_header || content.prepend || content.append,
            has_image: content.image,
            has_text: content.text,
            has_actions: content.actions,
        }
    }
}

/// State classes on the card root, in render order.
///
/// Hover lift is suppressed on disabled and flat cards; ripple needs a clickable card.
pub fn state_classes(
    disabled: bool,
    flat: bool,
    hover: bool,
    clickable: bool,
    ripple: bool,
) -> Vec<&'static str> {
    let mut classes = Vec::new();
    if disabled {
        classes.push("card--disabled");
    }
    if flat {
        classes.push("card--flat");
    }
    if hover && !(disabled || flat) {
        classes.push("card--hover");
    }
    if clickable {
        classes.push("card--link");
        if ripple {
            classes.push("card--ripple");
        }
    }
    classes
}
