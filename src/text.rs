//! Text measurement and word wrapping over a [`FontService`].
//!
//! All widths are font advances, not character counts, so proportional
//! fonts wrap correctly as long as the service reports exact advances.

use crate::font::FontService;
use crate::types::Align;

/// Width of the widest line in `s`.
pub fn text_width(
    fonts: &dyn FontService,
    font_id: u16,
    style_id: u16,
    text_size: u16,
    s: &str,
) -> i16 {
    s.split('\n')
        .map(|line| fonts.text_width(font_id, style_id, text_size, line))
        .max()
        .unwrap_or(0)
}

fn char_advance(
    fonts: &dyn FontService,
    font_id: u16,
    style_id: u16,
    text_size: u16,
    ch: char,
) -> i16 {
    let mut buf = [0_u8; 4];
    fonts.text_width(font_id, style_id, text_size, ch.encode_utf8(&mut buf))
}

/// Wrap `s` at word boundaries so no line exceeds `max_width`.
///
/// Explicit newlines are preserved. Words wider than `max_width` fall back
/// to character wrapping. Always returns at least one line for non-negative
/// widths; a zero or negative width yields no lines.
pub fn wrap_words(
    fonts: &dyn FontService,
    font_id: u16,
    style_id: u16,
    text_size: u16,
    s: &str,
    max_width: i16,
) -> Vec<String> {
    if max_width <= 0 {
        return vec![];
    }

    let space_width = fonts.text_width(font_id, style_id, text_size, " ");
    let mut lines = Vec::new();

    for input_line in s.split('\n') {
        if input_line.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        let mut current_width: i32 = 0;

        for word in input_line.split_whitespace() {
            let word_width = fonts.text_width(font_id, style_id, text_size, word);

            if word_width > max_width {
                // Word is wider than the box, break it mid-word
                if !current_line.is_empty() {
                    lines.push(current_line);
                    current_line = String::new();
                }

                let broken = wrap_chars(fonts, font_id, style_id, text_size, word, max_width);
                let broken_len = broken.len();
                for (i, part) in broken.into_iter().enumerate() {
                    if i < broken_len - 1 {
                        lines.push(part);
                    } else {
                        current_width =
                            fonts.text_width(font_id, style_id, text_size, &part) as i32;
                        current_line = part;
                    }
                }
                continue;
            }

            let joint = if current_line.is_empty() {
                0
            } else {
                space_width as i32
            };

            if current_width + joint + word_width as i32 > max_width as i32 {
                if !current_line.is_empty() {
                    lines.push(current_line);
                }
                current_line = word.to_string();
                current_width = word_width as i32;
            } else {
                if !current_line.is_empty() {
                    current_line.push(' ');
                    current_width += space_width as i32;
                }
                current_line.push_str(word);
                current_width += word_width as i32;
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        } else if !input_line.is_empty() {
            // Whitespace-only input line collapses to an empty line
            lines.push(String::new());
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Wrap `s` at character boundaries so no line exceeds `max_width`.
pub fn wrap_chars(
    fonts: &dyn FontService,
    font_id: u16,
    style_id: u16,
    text_size: u16,
    s: &str,
    max_width: i16,
) -> Vec<String> {
    if max_width <= 0 {
        return vec![];
    }

    let mut lines = Vec::new();

    for input_line in s.split('\n') {
        if input_line.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        let mut current_width: i32 = 0;

        for ch in input_line.chars() {
            let advance = char_advance(fonts, font_id, style_id, text_size, ch);

            if advance == 0 {
                // Zero-advance char (combining, etc.)
                current_line.push(ch);
                continue;
            }

            if current_width + advance as i32 > max_width as i32 && !current_line.is_empty() {
                lines.push(current_line);
                current_line = String::new();
                current_width = 0;
            }

            current_line.push(ch);
            current_width += advance as i32;
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Offset that places a run of `text_width` within `available` space.
///
/// `Align::None` behaves like `Align::Start`. Oversized runs pin to the
/// start edge.
pub fn align_offset(text_width: i16, available: i16, align: Align) -> i16 {
    if text_width >= available {
        return 0;
    }

    match align {
        Align::None | Align::Start => 0,
        Align::Center => (available - text_width) / 2,
        Align::End => available - text_width,
    }
}
