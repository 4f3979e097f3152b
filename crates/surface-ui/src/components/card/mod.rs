mod component;
mod item;
mod parts;
pub mod visibility;

pub use component::*;
pub use item::*;
pub use parts::*;
