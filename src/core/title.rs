//! Title record
//!
//! The decoded, renderable state of one title-change notification.

use super::bitmap::IconBitmap;
use crate::measure::TextMeasure;

/// A decoded window title with its measured width and optional icon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleRecord {
    /// X window the title belongs to, as sent in the payload
    window_id: Option<i64>,
    /// Display string
    text: String,
    /// Whether `text` is Pango markup rather than literal text
    markup: bool,
    /// Pixel width of `text` as reported by the measurer
    rendered_width: u32,
    /// Window icon, if one was extracted
    icon: Option<IconBitmap>,
}

impl TitleRecord {
    /// Build a record and measure its text once
    pub fn new<M: TextMeasure + ?Sized>(
        text: String,
        markup: bool,
        window_id: Option<i64>,
        measure: &M,
    ) -> Self {
        let rendered_width = measure.text_width(&text, markup);
        Self {
            window_id,
            text,
            markup,
            rendered_width,
            icon: None,
        }
    }

    pub fn window_id(&self) -> Option<i64> {
        self.window_id
    }

    /// The window to fetch an icon for.
    ///
    /// Zero, negative and ids that do not fit an X window id disable icon
    /// extraction.
    pub fn icon_window(&self) -> Option<u32> {
        self.window_id
            .filter(|&id| id > 0)
            .and_then(|id| u32::try_from(id).ok())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_markup(&self) -> bool {
        self.markup
    }

    pub fn rendered_width(&self) -> u32 {
        self.rendered_width
    }

    pub fn icon(&self) -> Option<&IconBitmap> {
        self.icon.as_ref()
    }

    /// Replace the text and re-measure
    pub fn set_text<M: TextMeasure + ?Sized>(&mut self, text: String, measure: &M) {
        self.text = text;
        self.rendered_width = measure.text_width(&self.text, self.markup);
    }

    /// Toggle markup interpretation and re-measure
    pub fn set_markup<M: TextMeasure + ?Sized>(&mut self, markup: bool, measure: &M) {
        if self.markup == markup {
            return;
        }
        self.markup = markup;
        self.rendered_width = measure.text_width(&self.text, self.markup);
    }

    pub fn set_icon(&mut self, icon: Option<IconBitmap>) {
        self.icon = icon;
    }

    pub fn take_icon(&mut self) -> Option<IconBitmap> {
        self.icon.take()
    }
}
