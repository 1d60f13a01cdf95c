mod color;
mod edges;
mod enums;
mod flags;

pub use color::Rgba;
pub use edges::Edges;
pub use enums::{Align, LayoutKind};
pub use flags::ObjectFlags;
