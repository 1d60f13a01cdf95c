use crate::types::{Edges, ObjectFlags, Rgba};

/// Owned label text plus its cached wrap state.
///
/// `line_height` and `line_count` are recomputed when the text is replaced
/// and whenever layout resolves a different wrap width.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub font_id: u16,
    pub style_id: u16,
    pub line_height: f32,
    pub line_count: u16,
    /// Width the cached `line_count` was wrapped against; 0 = unwrapped.
    pub wrap_width: i16,
}

/// One rectangle in the UI tree.
///
/// Geometry is relative to the parent's content origin (inside the parent's
/// border, before the parent's scroll offset is applied). Tree links live in
/// the owning [`GuiTree`](crate::tree::GuiTree), not here, so callers can
/// mutate node data freely without being able to corrupt the sibling list.
///
/// `T` is an opaque caller payload the core never inspects.
#[derive(Debug)]
pub struct GuiObject<T = ()> {
    pub x: i16,
    pub y: i16,
    pub w: i16,
    pub h: i16,

    /// Relative share of remaining flexible space; zero means "do not stretch".
    pub weight_x: i16,
    pub weight_y: i16,

    /// Scroll offset applied to children's effective origin at draw time.
    pub content_dx: i16,
    pub content_dy: i16,

    pub margin: Edges,

    pub border_width: u8,
    /// Gap between adjacent children.
    pub spacing: u8,
    pub text_size: u16,

    pub color_border: Rgba,
    pub color_background: Rgba,

    pub flags: ObjectFlags,
    pub label: Option<Label>,
    pub data: Option<T>,
}

impl<T> Default for GuiObject<T> {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            w: 0,
            h: 0,
            weight_x: 0,
            weight_y: 0,
            content_dx: 0,
            content_dy: 0,
            margin: Edges::default(),
            border_width: 0,
            spacing: 0,
            text_size: 0,
            color_border: Rgba::default(),
            color_background: Rgba::default(),
            flags: ObjectFlags::default(),
            label: None,
            data: None,
        }
    }
}

impl<T> GuiObject<T> {
    /// Content box extents: size minus the border on all four sides.
    pub fn content_size(&self) -> (i16, i16) {
        let b = self.border_width as i16;
        ((self.w - 2 * b).max(0), (self.h - 2 * b).max(0))
    }
}
