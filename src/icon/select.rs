//! Icon block selection
//!
//! The icon property is a run of blocks, each `[width][height][pixels...]`
//! in host-order 32-bit words, with no outer length. Blocks are scanned left
//! to right and the best one is kept:
//!
//! - the smallest block at least `pref` x `pref` wins
//! - failing that, the largest block
//! - a block of exactly `pref` x `pref` ends the scan immediately
//!
//! Scanning stops at the first block whose declared size does not fit in
//! the remaining bytes. Nothing after it is reinterpreted.

use tracing::debug;

const WORD: usize = 4;
const HEADER: usize = 2 * WORD;

/// One image inside an icon property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconBlock<'a> {
    pub width: u32,
    pub height: u32,
    /// `width * height` host-order ARGB words
    pixels: &'a [u8],
}

impl<'a> IconBlock<'a> {
    /// Pixel count
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// At least `pref` in both dimensions
    fn covers(&self, pref: u32) -> bool {
        self.width >= pref && self.height >= pref
    }

    fn is_exact(&self, pref: u32) -> bool {
        self.width == pref && self.height == pref
    }

    /// Raw straight-alpha ARGB pixels, row-major
    pub fn pixels(&self) -> impl ExactSizeIterator<Item = u32> + 'a {
        self.pixels
            .chunks_exact(WORD)
            .map(|w| u32::from_ne_bytes([w[0], w[1], w[2], w[3]]))
    }

    /// Whether `self` should replace the current best block
    fn beats(&self, best: Option<&IconBlock<'_>>, pref: u32) -> bool {
        let Some(best) = best else {
            return true;
        };
        if self.covers(pref) {
            return !best.covers(pref) || self.area() < best.area();
        }
        !best.covers(pref) && self.area() > best.area()
    }
}

fn read_word(data: &[u8], offset: usize) -> u32 {
    let mut word = [0u8; WORD];
    word.copy_from_slice(&data[offset..offset + WORD]);
    u32::from_ne_bytes(word)
}

/// Pick the block that best fits an edge length of `pref` pixels.
///
/// Returns `None` for an empty property or one whose first block is
/// already truncated.
pub fn select_icon(blob: &[u8], pref: u32) -> Option<IconBlock<'_>> {
    let mut best: Option<IconBlock<'_>> = None;
    let mut rest = blob;

    while rest.len() >= HEADER {
        let width = read_word(rest, 0);
        let height = read_word(rest, WORD);
        let payload = &rest[HEADER..];

        // u32 * u32 * 4 overflows u64, so size the block in u128
        let len = width as u128 * height as u128 * WORD as u128;
        if len > payload.len() as u128 {
            debug!(
                width,
                height,
                remaining = payload.len(),
                "Icon block does not fit in property, stopping scan"
            );
            break;
        }
        let len = len as usize;

        let candidate = IconBlock {
            width,
            height,
            pixels: &payload[..len],
        };
        if candidate.beats(best.as_ref(), pref) {
            best = Some(candidate);
        }
        if candidate.is_exact(pref) {
            break;
        }

        rest = &payload[len..];
    }

    best
}
