//! Serializable snapshots of a title record
//!
//! Used by the headless runner and golden tests. Given the same payload
//! and icon data, decoding must produce identical snapshots.

use serde::{Deserialize, Serialize};

use super::bitmap::IconBitmap;
use super::title::TitleRecord;

/// Snapshot of a decoded title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleSnapshot {
    pub text: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub markup: bool,
    pub width: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconSnapshot>,
}

/// Snapshot of an icon: dimensions plus a cheap pixel checksum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSnapshot {
    pub width: u32,
    pub height: u32,
    pub checksum: u32,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl TitleSnapshot {
    pub fn from_record(record: &TitleRecord) -> Self {
        Self {
            text: record.text().to_string(),
            markup: record.is_markup(),
            width: record.rendered_width(),
            window_id: record.window_id(),
            icon: record.icon().map(IconSnapshot::from_bitmap),
        }
    }

    /// One-line human readable form
    pub fn to_text(&self) -> String {
        let mut out = format!("{:?} width={}", self.text, self.width);
        if self.markup {
            out.push_str(" markup");
        }
        if let Some(id) = self.window_id {
            out.push_str(&format!(" window=0x{:x}", id));
        }
        if let Some(icon) = &self.icon {
            out.push_str(&format!(
                " icon={}x{} sum={:08x}",
                icon.width, icon.height, icon.checksum
            ));
        }
        out
    }
}

impl IconSnapshot {
    pub fn from_bitmap(bitmap: &IconBitmap) -> Self {
        // Adler-style rolling sum over the pixel words
        let (a, b) = bitmap.pixels().iter().fold((1u32, 0u32), |(a, b), &p| {
            let a = a.wrapping_add(p);
            (a, b.wrapping_add(a))
        });
        Self {
            width: bitmap.width(),
            height: bitmap.height(),
            checksum: a ^ b.rotate_left(16),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_width(_: &str, _: bool) -> u32 {
        0
    }

    #[test]
    fn test_snapshot_from_record() {
        let mut record = TitleRecord::new("term".to_string(), true, Some(42), &zero_width);
        record.set_icon(IconBitmap::new(1, 1, vec![0x8080_0000]));
        let snapshot = TitleSnapshot::from_record(&record);
        assert_eq!(snapshot.text, "term");
        assert!(snapshot.markup);
        assert_eq!(snapshot.window_id, Some(42));
        assert_eq!(snapshot.icon.map(|i| (i.width, i.height)), Some((1, 1)));
    }

    #[test]
    fn test_snapshot_json_skips_defaults() {
        let record = TitleRecord::new("x".to_string(), false, None, &zero_width);
        let json = serde_json::to_string(&TitleSnapshot::from_record(&record)).unwrap();
        assert_eq!(json, r#"{"text":"x","width":0}"#);
    }

    #[test]
    fn test_snapshot_text_form() {
        let record = TitleRecord::new("vim".to_string(), false, Some(0x1a), &zero_width);
        let text = TitleSnapshot::from_record(&record).to_text();
        assert_eq!(text, "\"vim\" width=0 window=0x1a");
    }

    #[test]
    fn test_icon_checksum_differs_by_content() {
        let a = IconBitmap::new(2, 1, vec![1, 2]).unwrap();
        let b = IconBitmap::new(2, 1, vec![2, 1]).unwrap();
        assert_ne!(
            IconSnapshot::from_bitmap(&a).checksum,
            IconSnapshot::from_bitmap(&b).checksum
        );
    }
}
