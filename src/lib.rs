//! Object tree and box-layout engine for an immediate-style GUI.
//!
//! Builds a hierarchy of rectangular elements, computes their geometry each
//! frame from declarative alignment/weight/margin rules, and walks the tree
//! to emit draw primitives through host-supplied font and rendering
//! services.

pub mod font;
pub mod layout;
pub mod render;
pub mod scroll;
pub mod text;
pub mod tree;
pub mod types;

pub use font::{FontService, MonospaceFont, TextRun};
pub use layout::{layout_horizontal, layout_objects, layout_vertical, Rect};
pub use render::{draw_objects, DrawCommand, RecordingRenderer, Renderer};
pub use scroll::ensure_visible;
pub use tree::{Children, GuiObject, GuiTree, Label, ObjectId, TreeError};
pub use types::*;
