//! Navigation targets for surfaces that can act as links.

use dioxus::prelude::*;
use dioxus::router::RouterContext;

/// Where a surface navigates when activated.
///
/// `to` is an in-app route handled by the router, `href` a plain URL left
/// to the browser. When both are set and a router is mounted, `to` wins.
/// Without a router `to` is ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkTarget {
    pub href: Option<String>,
    pub to: Option<String>,
    pub replace: bool,
}

/// Resolution of a [`LinkTarget`] for one render pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkState {
    /// The element resolves to a navigable target.
    pub is_link: bool,
    /// The element reacts to clicks, either by navigating or through a listener.
    pub is_clickable: bool,
    /// The URL to put on the anchor.
    pub href: Option<String>,
}

impl LinkTarget {
    fn route(&self) -> Option<&str> {
        self.to.as_deref().filter(|to| !to.is_empty())
    }

    fn url(&self) -> Option<&str> {
        self.href.as_deref().filter(|href| !href.is_empty())
    }
}

/// Whether the calling component sits under a `Router`.
pub fn has_router() -> bool {
    try_consume_context::<RouterContext>().is_some()
}

pub fn resolve_link(target: &LinkTarget, has_click_listener: bool, routed: bool) -> LinkState {
    let route = target.route().filter(|_| routed);
    let href = route.or_else(|| target.url()).map(str::to_string);
    let is_link = href.is_some();
    LinkState {
        is_link,
        is_clickable: is_link || has_click_listener,
        href,
    }
}

/// Navigate to the target's route through the router.
///
/// Returns `true` when the router handled navigation and the browser's
/// default anchor behaviour should be suppressed. Outside a router nothing
/// is routed and the anchor's `href`, if any, is left to the browser.
pub fn navigate(target: &LinkTarget) -> bool {
    let Some(route) = target.route() else {
        return false;
    };
    if !has_router() {
        tracing::debug!(route, "no router mounted, skipping navigation");
        return false;
    }
    let nav = navigator();
    let failure = if target.replace {
        tracing::debug!(route, "replacing route");
        nav.replace(route.to_string())
    } else {
        tracing::debug!(route, "pushing route");
        nav.push(route.to_string())
    };
    if let Some(failure) = failure {
        tracing::warn!(?failure, route, "router rejected navigation");
    }
    true
}
