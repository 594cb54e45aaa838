//! Text measurement
//!
//! The renderer owns font shaping; the core only needs the pixel width of a
//! title to lay out the bar. `TextMeasure` is that seam. `CellMeasure` is a
//! font-free fallback that counts display columns, good enough for headless
//! runs and fixed-width bar fonts.

use unicode_width::UnicodeWidthStr;

/// Measures the rendered pixel width of a title
pub trait TextMeasure {
    /// Width of `text` in pixels. `markup` says whether `text` is Pango markup.
    fn text_width(&self, text: &str, markup: bool) -> u32;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, bool) -> u32,
{
    fn text_width(&self, text: &str, markup: bool) -> u32 {
        self(text, markup)
    }
}

/// Fixed cell-width measurer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMeasure {
    /// Width of one terminal-style cell in pixels
    pub cell_width: u32,
}

impl CellMeasure {
    pub fn new(cell_width: u32) -> Self {
        Self { cell_width }
    }
}

impl Default for CellMeasure {
    fn default() -> Self {
        Self { cell_width: 8 }
    }
}

impl TextMeasure for CellMeasure {
    fn text_width(&self, text: &str, markup: bool) -> u32 {
        let columns = if markup {
            strip_markup(text).width()
        } else {
            text.width()
        };
        (columns as u32).saturating_mul(self.cell_width)
    }
}

/// Longest entity name decoded, `#x10FFFF` plus slack for leading zeros
const MAX_ENTITY_LEN: usize = 10;

/// Reduce Pango markup to its visible text.
///
/// Tags are dropped, the five XML entities and numeric character references
/// are decoded. Unknown or unterminated entities are kept literally.
pub fn strip_markup(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;

    while let Some(pos) = rest.find(|c: char| c == '<' || c == '&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        if rest.starts_with('<') {
            match rest.find('>') {
                Some(end) => rest = &rest[end + 1..],
                // Unterminated tag swallows the remainder, as Pango rejects it anyway
                None => rest = "",
            }
            continue;
        }

        // Entity names are short; only look for `;` within a few bytes
        let window = &rest.as_bytes()[1..rest.len().min(MAX_ENTITY_LEN + 2)];
        let entity = window
            .iter()
            .position(|&b| b == b';')
            .map(|i| i + 1)
            .and_then(|end| decode_entity(&rest[1..end]).map(|c| (c, end)));
        match entity {
            Some((c, end)) => {
                out.push(c);
                rest = &rest[end + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let num = name.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}
