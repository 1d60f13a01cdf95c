//! Draw traversal: depth-first pre-order walk emitting rectangle, border,
//! and glyph-run primitives through host-supplied services.

use crate::font::FontService;
use crate::layout::Rect;
use crate::text;
use crate::tree::{GuiObject, GuiTree, ObjectId};
use crate::types::{Align, Rgba};

/// Rendering primitives supplied by the host.
///
/// Clip regions are scoped: every `push_clip` is paired with exactly one
/// `pop_clip`, matching the traversal's recursion depth.
pub trait Renderer {
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    fn stroke_rect(&mut self, rect: Rect, width: u8, color: Rgba);
    fn push_clip(&mut self, rect: Rect);
    fn pop_clip(&mut self);
}

/// Draw `root` and its subtree in sibling/child order.
///
/// Hidden subtrees are skipped entirely. Each node's absolute rectangle is
/// its parent's content origin (border-inset, scroll offset applied) plus
/// its own relative position.
pub fn draw_objects<T>(
    tree: &GuiTree<T>,
    root: ObjectId,
    renderer: &mut dyn Renderer,
    fonts: &mut dyn FontService,
) {
    draw_node(tree, root, (0, 0), renderer, fonts);
}

fn draw_node<T>(
    tree: &GuiTree<T>,
    id: ObjectId,
    origin: (i16, i16),
    renderer: &mut dyn Renderer,
    fonts: &mut dyn FontService,
) {
    let Some(object) = tree.object(id) else {
        return;
    };
    if object.flags.hide {
        return;
    }

    let rect = Rect::new(
        origin.0 + object.x,
        origin.1 + object.y,
        object.w.max(0),
        object.h.max(0),
    );

    if object.flags.draw_background {
        renderer.fill_rect(rect, object.color_background);
    }
    if object.flags.draw_border && object.border_width > 0 {
        renderer.stroke_rect(rect, object.border_width, object.color_border);
    }
    if object.flags.draw_label {
        draw_label(object, rect, fonts);
    }

    let border = object.border_width as i16;
    let child_origin = (
        rect.x + border + object.content_dx,
        rect.y + border + object.content_dy,
    );

    if object.flags.clip_children {
        renderer.push_clip(rect);
    }
    for child in tree.children(id) {
        draw_node(tree, child, child_origin, renderer, fonts);
    }
    if object.flags.clip_children {
        renderer.pop_clip();
    }
}

/// Emit one glyph run per label line, placed by the node's content
/// alignment within its border-inset content box.
fn draw_label<T>(object: &GuiObject<T>, rect: Rect, fonts: &mut dyn FontService) {
    let Some(label) = &object.label else {
        return;
    };
    if label.text.is_empty() {
        return;
    }

    let content = rect.inset(object.border_width as i16);
    let lines = if object.flags.word_wrap {
        text::wrap_words(
            fonts,
            label.font_id,
            label.style_id,
            object.text_size,
            &label.text,
            content.w,
        )
    } else {
        label.text.split('\n').map(str::to_string).collect()
    };
    if lines.is_empty() {
        return;
    }

    let line_height = label.line_height;
    let total_height = (lines.len() as f32 * line_height).ceil() as i16;
    let y0 = content.y
        + match object.flags.v_content_align {
            Align::None | Align::Start => 0,
            Align::Center => ((content.h - total_height) / 2).max(0),
            Align::End => (content.h - total_height).max(0),
        };

    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let width = fonts.text_width(label.font_id, label.style_id, object.text_size, line);
        let x = content.x + text::align_offset(width, content.w, object.flags.h_content_align);
        let y = y0 + (i as f32 * line_height) as i16;
        fonts.draw_text(
            x,
            y,
            line,
            label.font_id,
            label.style_id,
            object.text_size,
        );
    }
}

/// A primitive emitted by [`RecordingRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    Fill { rect: Rect, color: Rgba },
    Stroke { rect: Rect, width: u8, color: Rgba },
    PushClip(Rect),
    PopClip,
}

/// [`Renderer`] that records primitives instead of drawing them, for tests
/// and demos.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for RecordingRenderer {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.commands.push(DrawCommand::Fill { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, width: u8, color: Rgba) {
        self.commands.push(DrawCommand::Stroke { rect, width, color });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::PushClip(rect));
    }

    fn pop_clip(&mut self) {
        self.commands.push(DrawCommand::PopClip);
    }
}
