use unicode_width::UnicodeWidthStr;

/// Font and style metrics plus glyph-run rendering, supplied by the host.
///
/// Metrics queries are pure. `font_id` and `style_id` are opaque integers;
/// validating them is the service's concern, not this crate's.
pub trait FontService {
    /// Height of one text line for the given font/style/size.
    fn line_height(&self, font_id: u16, style_id: u16, text_size: u16) -> f32;

    /// Advance width of `text` rendered on a single line.
    fn text_width(&self, font_id: u16, style_id: u16, text_size: u16, text: &str) -> i16;

    /// Render a glyph run with its baseline-box origin at (x, y).
    fn draw_text(&mut self, x: i16, y: i16, text: &str, font_id: u16, style_id: u16, text_size: u16);
}

/// A rendered glyph run recorded by [`MonospaceFont`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub x: i16,
    pub y: i16,
    pub text: String,
    pub font_id: u16,
    pub style_id: u16,
    pub text_size: u16,
}

/// Reference [`FontService`] over a fixed character cell grid.
///
/// Width is the unicode display width in columns times `cell_width`; every
/// line is `line_height` tall regardless of font/style/size. Drawn runs are
/// recorded instead of rasterized, which is what tests and demos want.
#[derive(Debug, Default)]
pub struct MonospaceFont {
    cell_width: i16,
    line_height: f32,
    pub runs: Vec<TextRun>,
}

impl MonospaceFont {
    pub fn new(cell_width: i16, line_height: f32) -> Self {
        Self {
            cell_width,
            line_height,
            runs: Vec::new(),
        }
    }
}

impl FontService for MonospaceFont {
    fn line_height(&self, _font_id: u16, _style_id: u16, _text_size: u16) -> f32 {
        self.line_height
    }

    fn text_width(&self, _font_id: u16, _style_id: u16, _text_size: u16, text: &str) -> i16 {
        let columns = text.width();
        (columns as i32 * self.cell_width as i32).min(i16::MAX as i32) as i16
    }

    fn draw_text(&mut self, x: i16, y: i16, text: &str, font_id: u16, style_id: u16, text_size: u16) {
        self.runs.push(TextRun {
            x,
            y,
            text: text.to_string(),
            font_id,
            style_id,
            text_size,
        });
    }
}
