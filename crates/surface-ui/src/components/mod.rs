// Standalone building blocks
pub mod icon;
pub mod image;

// Primitive wrappers
pub mod avatar;
pub mod progress;

// Composite surfaces; depend on everything above
pub mod card;

pub use avatar::*;
pub use card::*;
pub use icon::*;
pub use image::*;
pub use progress::*;
