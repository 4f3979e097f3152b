//! Style contributions shared by surface components.
//!
//! Each option group turns one slice of a component's configuration into
//! classes and inline style declarations for a given class prefix. The
//! component owning the prefix decides how to combine them.

mod border;
mod density;
mod dimension;
mod elevation;
mod loader;
mod location;
mod position;
mod rounded;
mod tag;
mod variant;

pub use border::*;
pub use density::*;
pub use dimension::*;
pub use elevation::*;
pub use loader::*;
pub use location::*;
pub use position::*;
pub use rounded::*;
pub use tag::*;
pub use variant::*;

/// A single `property: value` inline style declaration.
pub type StyleDecl = (&'static str, String);

/// Join declarations into a `style` attribute value.
pub fn style_string(decls: &[StyleDecl]) -> String {
    decls
        .iter()
        .map(|(prop, value)| format!("{prop}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}
