//! Icon bitmap
//!
//! A fixed-size buffer of premultiplied ARGB pixels ready to be painted
//! onto a 32-bit surface.

/// Premultiplied ARGB pixel buffer, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconBitmap {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl IconBitmap {
    /// Wrap an already converted pixel buffer.
    ///
    /// Returns `None` if either dimension is zero or the buffer length does
    /// not equal `width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<u32>) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let expected = (width as u64) * (height as u64);
        if pixels.len() as u64 != expected {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row stride in bytes
    pub fn stride(&self) -> usize {
        self.width as usize * 4
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixel at (x, y), or transparent black outside the bitmap
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels.get(idx).copied().unwrap_or(0)
    }

    /// Pixel data as host-order bytes, `stride() * height` long
    pub fn to_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_ne_bytes()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitmap_rejects_zero_dimensions() {
        assert!(IconBitmap::new(0, 4, Vec::new()).is_none());
        assert!(IconBitmap::new(4, 0, Vec::new()).is_none());
    }

    #[test]
    fn test_bitmap_rejects_wrong_length() {
        assert!(IconBitmap::new(2, 2, vec![0; 3]).is_none());
        assert!(IconBitmap::new(2, 2, vec![0; 4]).is_some());
    }

    #[test]
    fn test_bitmap_pixel_access() {
        let bitmap = IconBitmap::new(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(bitmap.pixel(0, 0), 1);
        assert_eq!(bitmap.pixel(1, 0), 2);
        assert_eq!(bitmap.pixel(0, 1), 3);
        assert_eq!(bitmap.pixel(1, 1), 4);
        assert_eq!(bitmap.pixel(2, 0), 0);
        assert_eq!(bitmap.pixel(0, 5), 0);
    }

    #[test]
    fn test_bitmap_stride_and_bytes() {
        let bitmap = IconBitmap::new(3, 2, vec![0xFF00_00FF; 6]).unwrap();
        assert_eq!(bitmap.stride(), 12);
        let bytes = bitmap.to_bytes();
        assert_eq!(bytes.len(), bitmap.stride() * 2);
        assert_eq!(&bytes[..4], &0xFF00_00FFu32.to_ne_bytes());
    }
}
