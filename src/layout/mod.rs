//! Box layout: vertical and horizontal stacking with weights, margins,
//! spacing, self-alignment, and wrap-aware label sizing.
//!
//! Layout is a single synchronous top-down pass. Widths are always resolved
//! before heights so wrapped label height can be measured against the final
//! width; there is no iterative constraint solving. Positions are relative
//! to the parent's content origin and do not include the parent's scroll
//! offset, which is applied at draw time.

mod rect;

pub use rect::Rect;

use crate::font::FontService;
use crate::text;
use crate::tree::{GuiObject, GuiTree, ObjectId};
use crate::types::{Align, LayoutKind};

/// Arrange `root`'s children according to its layout flag, then recurse so
/// nested containers are laid out in turn. `root`'s own size is taken as-is.
pub fn layout_objects<T>(tree: &mut GuiTree<T>, root: ObjectId, fonts: &dyn FontService) {
    let Some(object) = tree.object(root) else {
        return;
    };
    match object.flags.layout {
        LayoutKind::Vertical => layout_vertical(tree, root, fonts),
        LayoutKind::Horizontal => layout_horizontal(tree, root, fonts),
        LayoutKind::None => clamp_free_children(tree, root),
    }
    let children: Vec<ObjectId> = tree.children(root).collect();
    for child in children {
        layout_objects(tree, child, fonts);
    }
}

/// Stack `root`'s children top to bottom.
pub fn layout_vertical<T>(tree: &mut GuiTree<T>, root: ObjectId, fonts: &dyn FontService) {
    layout_box(tree, root, fonts, true);
}

/// Stack `root`'s children left to right. Exact axis transpose of
/// [`layout_vertical`].
pub fn layout_horizontal<T>(tree: &mut GuiTree<T>, root: ObjectId, fonts: &dyn FontService) {
    layout_box(tree, root, fonts, false);
}

fn layout_box<T>(tree: &mut GuiTree<T>, root: ObjectId, fonts: &dyn FontService, vertical: bool) {
    let Some(object) = tree.object(root) else {
        return;
    };
    let (content_w, content_h) = object.content_size();
    let spacing = object.spacing as i32;
    let children: Vec<ObjectId> = tree.children(root).collect();
    if children.is_empty() {
        return;
    }

    let (main_extent, cross_extent) = if vertical {
        (content_h, content_w)
    } else {
        (content_w, content_h)
    };

    if vertical {
        // Widths are the cross axis: resolve them (and the wrap caches that
        // depend on them) before any height is measured.
        for &child in &children {
            resolve_cross_axis(tree, child, fonts, cross_extent, vertical);
        }
        distribute_main_axis(tree, &children, fonts, main_extent, spacing, vertical);
    } else {
        // Widths are the main axis here, so distribution comes first; only
        // then can wrapped line counts and natural heights be trusted.
        distribute_main_axis(tree, &children, fonts, main_extent, spacing, vertical);
        for &child in &children {
            refresh_wrap(tree, child, fonts);
            resolve_cross_axis(tree, child, fonts, cross_extent, vertical);
        }
    }

    place_main_axis(tree, &children, spacing, vertical);
}

/// Resolve fixed main-axis extents, then split the remaining space among
/// flexible children proportionally to their weights. Integer truncation,
/// with the last flexible child absorbing the rounding remainder so the
/// granted total equals the remaining space exactly.
fn distribute_main_axis<T>(
    tree: &mut GuiTree<T>,
    children: &[ObjectId],
    fonts: &dyn FontService,
    main_extent: i16,
    spacing: i32,
    vertical: bool,
) {
    let mut reserved: i32 = spacing * (children.len() as i32 - 1);
    let mut total_weight: i32 = 0;
    let mut last_flexible = None;

    for &child in children {
        let Some(object) = tree.object(child) else {
            continue;
        };
        reserved += if vertical {
            object.margin.vertical_total() as i32
        } else {
            object.margin.horizontal_total() as i32
        };

        if is_flexible(object, vertical) {
            total_weight += main_weight(object, vertical);
            last_flexible = Some(child);
            continue;
        }

        let extent = natural_main_extent(object, fonts, vertical);
        reserved += extent;
        let Some(object) = tree.object_mut(child) else {
            continue;
        };
        if vertical {
            object.h = clamp_i16(extent);
        } else {
            object.w = clamp_i16(extent);
        }
    }

    // Overflow is permitted: content may exceed the box, never an error.
    let remaining = (main_extent as i32 - reserved).max(0);
    log::debug!(
        "[layout] {} children: remaining {} over total weight {} ({})",
        children.len(),
        remaining,
        total_weight,
        if vertical { "vertical" } else { "horizontal" },
    );
    if total_weight == 0 {
        return;
    }

    let mut granted: i32 = 0;
    for &child in children {
        let Some(object) = tree.object(child) else {
            continue;
        };
        if !is_flexible(object, vertical) {
            continue;
        }
        let weight = main_weight(object, vertical);
        let share = if Some(child) == last_flexible {
            remaining - granted
        } else {
            remaining * weight / total_weight
        };
        granted += share;
        let Some(object) = tree.object_mut(child) else {
            continue;
        };
        if vertical {
            object.h = clamp_i16(share);
        } else {
            object.w = clamp_i16(share);
        }
    }
}

/// Walk children in list order, placing each at the next free main-axis
/// offset: leading margin, then extent, trailing margin, and spacing.
fn place_main_axis<T>(tree: &mut GuiTree<T>, children: &[ObjectId], spacing: i32, vertical: bool) {
    let mut offset: i32 = 0;
    for &child in children {
        let Some(object) = tree.object_mut(child) else {
            continue;
        };
        let (margin_before, margin_after) = if vertical {
            (object.margin.top as i32, object.margin.bottom as i32)
        } else {
            (object.margin.left as i32, object.margin.right as i32)
        };
        offset += margin_before;
        if vertical {
            object.y = clamp_i16(offset);
            offset += object.h.max(0) as i32;
        } else {
            object.x = clamp_i16(offset);
            offset += object.w.max(0) as i32;
        }
        offset += margin_after + spacing;
    }
}

/// Size and position one child on the cross axis.
///
/// Self-align `None` stretches to the content extent minus margins; any
/// other alignment keeps the child's fixed extent (or its content's natural
/// extent) and positions it within the available space.
fn resolve_cross_axis<T>(
    tree: &mut GuiTree<T>,
    child: ObjectId,
    fonts: &dyn FontService,
    cross_extent: i16,
    vertical: bool,
) {
    let Some(object) = tree.object_mut(child) else {
        return;
    };
    let (margin_before, margin_total, align, fixed) = if vertical {
        (
            object.margin.left as i32,
            object.margin.horizontal_total() as i32,
            object.flags.h_self_align,
            object.flags.fixed_w,
        )
    } else {
        (
            object.margin.top as i32,
            object.margin.vertical_total() as i32,
            object.flags.v_self_align,
            object.flags.fixed_h,
        )
    };
    let available = (cross_extent as i32 - margin_total).max(0);

    let extent = match align {
        Align::None => available,
        _ if fixed => {
            let current = if vertical { object.w } else { object.h };
            current.max(0) as i32
        }
        _ => natural_cross_extent(object, fonts, vertical).min(available),
    }
    .max(0);

    let position = margin_before
        + match align {
            Align::None | Align::Start => 0,
            Align::Center => (available - extent) / 2,
            Align::End => available - extent,
        };

    if vertical {
        object.x = clamp_i16(position);
        object.w = clamp_i16(extent);
    } else {
        object.y = clamp_i16(position);
        object.h = clamp_i16(extent);
    }

    if vertical {
        refresh_wrap(tree, child, fonts);
    }
}

/// Recompute the cached wrapped line count if the resolved width changed.
fn refresh_wrap<T>(tree: &mut GuiTree<T>, child: ObjectId, fonts: &dyn FontService) {
    let Some(object) = tree.object_mut(child) else {
        return;
    };
    if !object.flags.word_wrap {
        return;
    }
    // Wrap against the border-inset content width, the same width the draw
    // traversal wraps against.
    let width = (object.w - 2 * object.border_width as i16).max(0);
    let text_size = object.text_size;
    if let Some(label) = &mut object.label {
        if label.wrap_width == width {
            return;
        }
        let lines = text::wrap_words(
            fonts,
            label.font_id,
            label.style_id,
            text_size,
            &label.text,
            width,
        );
        label.line_count = lines.len().max(1) as u16;
        label.wrap_width = width;
        label.line_height = fonts.line_height(label.font_id, label.style_id, text_size);
    }
}

/// Under `LayoutKind::None` children keep their caller-set geometry; only
/// `fit_inside` children are clamped into the parent's content box.
fn clamp_free_children<T>(tree: &mut GuiTree<T>, root: ObjectId) {
    let Some(object) = tree.object(root) else {
        return;
    };
    let (content_w, content_h) = object.content_size();
    let children: Vec<ObjectId> = tree.children(root).collect();
    for child in children {
        let Some(object) = tree.object_mut(child) else {
            continue;
        };
        if !object.flags.fit_inside {
            continue;
        }
        object.w = object.w.clamp(0, content_w);
        object.h = object.h.clamp(0, content_h);
        let min_x = object.margin.left;
        let max_x = (content_w - object.w - object.margin.right).max(min_x);
        let min_y = object.margin.top;
        let max_y = (content_h - object.h - object.margin.bottom).max(min_y);
        object.x = object.x.clamp(min_x, max_x);
        object.y = object.y.clamp(min_y, max_y);
    }
}

fn is_flexible<T>(object: &GuiObject<T>, vertical: bool) -> bool {
    if vertical {
        !object.flags.fixed_h && object.weight_y > 0
    } else {
        !object.flags.fixed_w && object.weight_x > 0
    }
}

fn main_weight<T>(object: &GuiObject<T>, vertical: bool) -> i32 {
    if vertical {
        object.weight_y as i32
    } else {
        object.weight_x as i32
    }
}

/// Main-axis extent of a fixed child: the caller-set size when the fixed
/// flag is up, otherwise the label's measured extent plus the border,
/// otherwise whatever size the child already has.
fn natural_main_extent<T>(object: &GuiObject<T>, fonts: &dyn FontService, vertical: bool) -> i32 {
    let border = 2 * object.border_width as i32;
    if vertical {
        if !object.flags.fixed_h {
            if let Some(label) = &object.label {
                return (label.line_count as f32 * label.line_height).ceil() as i32 + border;
            }
        }
        object.h.max(0) as i32
    } else {
        if !object.flags.fixed_w {
            if let Some(label) = &object.label {
                return text::text_width(
                    fonts,
                    label.font_id,
                    label.style_id,
                    object.text_size,
                    &label.text,
                ) as i32
                    + border;
            }
        }
        object.w.max(0) as i32
    }
}

/// Cross-axis natural extent: measured text width in a vertical stack,
/// wrapped text height in a horizontal one.
fn natural_cross_extent<T>(object: &GuiObject<T>, fonts: &dyn FontService, vertical: bool) -> i32 {
    if let Some(label) = &object.label {
        let border = 2 * object.border_width as i32;
        if vertical {
            return text::text_width(
                fonts,
                label.font_id,
                label.style_id,
                object.text_size,
                &label.text,
            ) as i32
                + border;
        }
        return (label.line_count as f32 * label.line_height).ceil() as i32 + border;
    }
    if vertical {
        object.w.max(0) as i32
    } else {
        object.h.max(0) as i32
    }
}

fn clamp_i16(value: i32) -> i16 {
    value.clamp(i16::MIN as i32, i16::MAX as i32) as i16
}
