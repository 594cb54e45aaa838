//! Current window title
//!
//! Holds the one live title record of the bar. Every notification fully
//! replaces the previous record; a notification that fails to decode
//! leaves the previous record in place.

use tracing::warn;

use crate::core::TitleRecord;
use crate::icon::{self, IconSource};
use crate::measure::TextMeasure;
use crate::parser::{self, DecodeError};

/// The window title slot of a bar
#[derive(Debug, Default)]
pub struct WindowTitle {
    /// Preferred icon edge length in pixels, 0 disables icons
    icon_size: u32,
    current: Option<TitleRecord>,
}

impl WindowTitle {
    pub fn new(icon_size: u32) -> Self {
        Self {
            icon_size,
            current: None,
        }
    }

    pub fn icon_size(&self) -> u32 {
        self.icon_size
    }

    pub fn set_icon_size(&mut self, icon_size: u32) {
        self.icon_size = icon_size;
    }

    /// The title currently shown, if any notification succeeded yet
    pub fn current(&self) -> Option<&TitleRecord> {
        self.current.as_ref()
    }

    /// Drop the current title
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Process one title-change notification.
    ///
    /// Decode errors are returned and leave the current title untouched.
    /// Icon lookup errors are logged and the title is shown without an icon.
    pub fn handle_payload<M, S>(
        &mut self,
        payload: &[u8],
        measure: &M,
        icons: &S,
    ) -> Result<&TitleRecord, DecodeError>
    where
        M: TextMeasure + ?Sized,
        S: IconSource + ?Sized,
    {
        let mut record = parser::decode_title(payload, measure)?;

        if let Some(window) = record.icon_window().filter(|_| self.icon_size > 0) {
            match icon::load_icon(icons, window, self.icon_size) {
                Ok(bitmap) => record.set_icon(bitmap),
                Err(e) => warn!("Failed to load icon for window 0x{:x}: {}", window, e),
            }
        }

        Ok(self.current.insert(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::{IconLookupError, NoIcons};

    fn len_width(text: &str, _markup: bool) -> u32 {
        text.len() as u32
    }

    fn one_pixel_icon(_: u32) -> Result<Option<Vec<u8>>, IconLookupError> {
        let mut data = Vec::new();
        data.extend_from_slice(&1u32.to_ne_bytes());
        data.extend_from_slice(&1u32.to_ne_bytes());
        data.extend_from_slice(&0xFF00_00FFu32.to_ne_bytes());
        Ok(Some(data))
    }

    fn failing_icon(window: u32) -> Result<Option<Vec<u8>>, IconLookupError> {
        Err(IconLookupError::Property {
            window,
            reason: "BadWindow".into(),
        })
    }

    #[test]
    fn test_handle_payload_sets_current() {
        let mut title = WindowTitle::new(16);
        let record = title
            .handle_payload(br#"{"windowtitle":"one"}"#, &len_width, &NoIcons)
            .unwrap();
        assert_eq!(record.text(), "one");
        assert_eq!(title.current().map(|r| r.text()), Some("one"));
    }

    #[test]
    fn test_handle_payload_replaces_previous() {
        let mut title = WindowTitle::new(16);
        title
            .handle_payload(br#"{"windowtitle":"one","xcb_window_id":5}"#, &len_width, &one_pixel_icon)
            .unwrap();
        assert!(title.current().unwrap().icon().is_some());

        title
            .handle_payload(br#"{"windowtitle":"two"}"#, &len_width, &one_pixel_icon)
            .unwrap();
        let current = title.current().unwrap();
        assert_eq!(current.text(), "two");
        assert!(current.icon().is_none());
        assert_eq!(current.window_id(), None);
    }

    #[test]
    fn test_decode_error_keeps_previous() {
        let mut title = WindowTitle::new(16);
        title
            .handle_payload(br#"{"windowtitle":"kept"}"#, &len_width, &NoIcons)
            .unwrap();
        let err = title.handle_payload(br#"{"windowtitle":"#, &len_width, &NoIcons);
        assert!(err.is_err());
        assert_eq!(title.current().unwrap().text(), "kept");
    }

    #[test]
    fn test_icon_failure_keeps_title() {
        let mut title = WindowTitle::new(16);
        let record = title
            .handle_payload(br#"{"windowtitle":"t","xcb_window_id":3}"#, &len_width, &failing_icon)
            .unwrap();
        assert_eq!(record.text(), "t");
        assert!(record.icon().is_none());
    }

    #[test]
    fn test_non_positive_window_skips_icon() {
        let fetch_panics = |_: u32| -> Result<Option<Vec<u8>>, IconLookupError> {
            panic!("icon must not be fetched")
        };
        let mut title = WindowTitle::new(16);
        let record = title
            .handle_payload(br#"{"windowtitle":"","xcb_window_id":0}"#, &len_width, &fetch_panics)
            .unwrap();
        assert_eq!(record.text(), "");
        assert_eq!(record.rendered_width(), 0);
        assert!(record.icon().is_none());

        title
            .handle_payload(br#"{"xcb_window_id":-1}"#, &len_width, &fetch_panics)
            .unwrap();
    }

    #[test]
    fn test_zero_icon_size_disables_icons() {
        let mut title = WindowTitle::new(0);
        let record = title
            .handle_payload(br#"{"xcb_window_id":5}"#, &len_width, &one_pixel_icon)
            .unwrap();
        assert!(record.icon().is_none());
    }

    #[test]
    fn test_clear() {
        let mut title = WindowTitle::default();
        title
            .handle_payload(b"{}", &len_width, &NoIcons)
            .unwrap();
        title.clear();
        assert!(title.current().is_none());
    }
}
