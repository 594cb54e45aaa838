//! Pixel conversion
//!
//! Icon properties carry straight-alpha 0xAARRGGBB words. Cairo-style
//! surfaces want premultiplied alpha, so every color channel is scaled by
//! alpha with truncating integer division.

use super::select::IconBlock;
use crate::core::IconBitmap;

/// Premultiply one straight-alpha ARGB pixel
#[inline]
pub fn premultiply(pixel: u32) -> u32 {
    let a = (pixel >> 24) & 0xFF;
    let r = ((pixel >> 16) & 0xFF) * a / 0xFF;
    let g = ((pixel >> 8) & 0xFF) * a / 0xFF;
    let b = (pixel & 0xFF) * a / 0xFF;
    (a << 24) | (r << 16) | (g << 8) | b
}

/// Convert a selected block into a premultiplied bitmap.
///
/// Returns `None` for a block with a zero dimension.
pub fn convert_block(block: &IconBlock<'_>) -> Option<IconBitmap> {
    let pixels: Vec<u32> = block.pixels().map(premultiply).collect();
    IconBitmap::new(block.width, block.height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::select_icon;

    #[test]
    fn test_premultiply_half_alpha_red() {
        assert_eq!(premultiply(0x80FF_0000), 0x8080_0000);
    }

    #[test]
    fn test_premultiply_extremes() {
        assert_eq!(premultiply(0xFF12_3456), 0xFF12_3456);
        assert_eq!(premultiply(0x00FF_FFFF), 0x0000_0000);
        assert_eq!(premultiply(0x0000_0000), 0x0000_0000);
    }

    #[test]
    fn test_premultiply_truncates() {
        // 0x7F * 0x01 / 0xFF = 0, 0xFF * 0x01 / 0xFF = 1, 0x80 * 0x01 / 0xFF = 0
        assert_eq!(premultiply(0x017F_FF80), 0x0100_0100);
        // 200 * 100 / 255 = 78.43 -> 78
        assert_eq!(premultiply(0x64C8_C8C8), 0x644E_4E4E);
    }

    #[test]
    fn test_convert_block() {
        let mut data = Vec::new();
        data.extend_from_slice(&2u32.to_ne_bytes());
        data.extend_from_slice(&1u32.to_ne_bytes());
        data.extend_from_slice(&0x80FF_0000u32.to_ne_bytes());
        data.extend_from_slice(&0xFF00_FF00u32.to_ne_bytes());
        let original = data.clone();

        let block = select_icon(&data, 2).unwrap();
        let bitmap = convert_block(&block).unwrap();
        assert_eq!(bitmap.width(), 2);
        assert_eq!(bitmap.height(), 1);
        assert_eq!(bitmap.pixels(), &[0x8080_0000, 0xFF00_FF00]);
        assert_eq!(data, original);
    }

    #[test]
    fn test_convert_zero_sized_block() {
        let mut data = Vec::new();
        data.extend_from_slice(&0u32.to_ne_bytes());
        data.extend_from_slice(&16u32.to_ne_bytes());
        let block = select_icon(&data, 16).unwrap();
        assert!(convert_block(&block).is_none());
    }
}
