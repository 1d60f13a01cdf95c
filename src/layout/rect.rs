/// A signed screen-space rectangle.
///
/// Positions may go negative (scrolled-out content); width and height are
/// clamped non-negative by layout before anything is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i16,
    pub y: i16,
    pub w: i16,
    pub h: i16,
}

impl Rect {
    pub const fn new(x: i16, y: i16, w: i16, h: i16) -> Self {
        Self { x, y, w, h }
    }

    pub const fn from_size(w: i16, h: i16) -> Self {
        Self { x: 0, y: 0, w, h }
    }

    pub const fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    pub const fn left(&self) -> i16 {
        self.x
    }

    pub const fn right(&self) -> i16 {
        self.x + self.w
    }

    pub const fn top(&self) -> i16 {
        self.y
    }

    pub const fn bottom(&self) -> i16 {
        self.y + self.h
    }

    /// Inset all four edges by `amount`, clamping the size at zero.
    pub fn inset(self, amount: i16) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            w: (self.w - 2 * amount).max(0),
            h: (self.h - 2 * amount).max(0),
        }
    }

    pub fn contains(&self, x: i16, y: i16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub fn contains_rect(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}
