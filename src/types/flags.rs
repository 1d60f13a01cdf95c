use super::{Align, LayoutKind};

/// Per-node layout and draw switches.
///
/// Self-alignment places the node within the free space its parent allots
/// it on the cross axis; content alignment places the node's own label
/// within its resolved box. The two are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ObjectFlags {
    pub hide: bool,
    pub draw_background: bool,
    pub draw_border: bool,
    pub draw_label: bool,
    pub word_wrap: bool,
    /// Main-axis size is caller-supplied and never recomputed from content.
    pub fixed_w: bool,
    pub fixed_h: bool,
    /// Under `LayoutKind::None`, clamp this node into the parent's content box.
    pub fit_inside: bool,
    /// Clip drawing of descendants to this node's rectangle.
    pub clip_children: bool,
    pub v_content_align: Align,
    pub h_content_align: Align,
    pub v_self_align: Align,
    pub h_self_align: Align,
    /// How this node arranges its own children.
    pub layout: LayoutKind,
}
