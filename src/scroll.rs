//! Scroll-into-view: adjust ancestor content offsets so a node's rectangle
//! lies within its scrollable ancestors' visible bounds.

use crate::tree::{GuiTree, ObjectId};

/// Walk from `id` up through its ancestors, adjusting each ancestor's
/// `content_dx`/`content_dy` by the minimal delta that brings the node's
/// rectangle fully inside that ancestor's content box.
///
/// Offsets are clamped so scrolling never reveals area beyond the
/// children's actual extent; ancestors whose content fits entirely are
/// pinned back to zero. A node larger than the content box aligns its
/// top/left edge. Idempotent, and no relayout is needed: offsets take
/// effect at draw time.
pub fn ensure_visible<T>(tree: &mut GuiTree<T>, id: ObjectId) {
    let Some(object) = tree.object(id) else {
        return;
    };
    // The node's rectangle in its parent's un-scrolled content space.
    let (mut x, mut y, w, h) = (object.x, object.y, object.w.max(0), object.h.max(0));

    let mut current = id;
    while let Some(parent) = tree.parent(current) {
        let Some(ancestor) = tree.object(parent) else {
            return;
        };
        let (content_w, content_h) = ancestor.content_size();
        let (extent_w, extent_h) = children_extent(tree, parent);

        let Some(ancestor) = tree.object_mut(parent) else {
            return;
        };
        let old = (ancestor.content_dx, ancestor.content_dy);
        ancestor.content_dx = scroll_to(ancestor.content_dx, x, w, content_w, extent_w);
        ancestor.content_dy = scroll_to(ancestor.content_dy, y, h, content_h, extent_h);
        if (ancestor.content_dx, ancestor.content_dy) != old {
            log::debug!(
                "[scroll] offset {:?} -> {:?}",
                old,
                (ancestor.content_dx, ancestor.content_dy),
            );
        }

        // Hoist the rectangle into the grandparent's content space.
        let border = ancestor.border_width as i16;
        x += ancestor.x + border + ancestor.content_dx;
        y += ancestor.y + border + ancestor.content_dy;
        current = parent;
    }
}

/// Minimal offset change that brings `[pos, pos + extent)` into the window
/// `[-offset, -offset + window)`, clamped to the scrollable range
/// `[window - content_extent, 0]`.
fn scroll_to(offset: i16, pos: i16, extent: i16, window: i16, content_extent: i16) -> i16 {
    let pos = pos as i32;
    let extent = extent as i32;
    let window = window as i32;
    let mut offset = offset as i32;

    if extent >= window {
        // Can never fit: show the start edge.
        offset = -pos;
    } else if pos + offset < 0 {
        offset = -pos;
    } else if pos + extent + offset > window {
        offset = window - pos - extent;
    }

    let min_offset = (window - content_extent as i32).min(0);
    offset.clamp(min_offset, 0) as i16
}

/// Bounding extent of a node's children (trailing margins included), the
/// farthest content that scrolling is allowed to reveal.
fn children_extent<T>(tree: &GuiTree<T>, id: ObjectId) -> (i16, i16) {
    let mut extent_w: i32 = 0;
    let mut extent_h: i32 = 0;
    for child in tree.children(id) {
        let Some(object) = tree.object(child) else {
            continue;
        };
        extent_w =
            extent_w.max(object.x as i32 + object.w.max(0) as i32 + object.margin.right as i32);
        extent_h =
            extent_h.max(object.y as i32 + object.h.max(0) as i32 + object.margin.bottom as i32);
    }
    (
        extent_w.min(i16::MAX as i32) as i16,
        extent_h.min(i16::MAX as i32) as i16,
    )
}
