/// Alignment of a box within available space, or of content within a box.
///
/// `None` means "no explicit alignment": on the cross axis it stretches the
/// box to the available extent, and for content it behaves like `Start`.
/// `Start` is top/left, `End` is bottom/right depending on the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    None,
    Center,
    Start,
    End,
}

/// How a node arranges its own children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutKind {
    #[default]
    None,
    Vertical,
    Horizontal,
}
