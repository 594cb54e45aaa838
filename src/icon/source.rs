//! Icon property sources
//!
//! The core never talks to the X server itself. Whoever owns the
//! connection implements [`IconSource`] and hands back the raw property
//! bytes.

use std::io::ErrorKind;
use std::path::PathBuf;

use super::IconLookupError;

/// Fetches the raw icon property of a window
pub trait IconSource {
    /// Raw property bytes, or `None` when the window has no icon property
    fn fetch_icon(&self, window: u32) -> Result<Option<Vec<u8>>, IconLookupError>;
}

impl<F> IconSource for F
where
    F: Fn(u32) -> Result<Option<Vec<u8>>, IconLookupError>,
{
    fn fetch_icon(&self, window: u32) -> Result<Option<Vec<u8>>, IconLookupError> {
        self(window)
    }
}

/// Source for setups without icons
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIcons;

impl IconSource for NoIcons {
    fn fetch_icon(&self, _window: u32) -> Result<Option<Vec<u8>>, IconLookupError> {
        Ok(None)
    }
}

/// Reads icon properties dumped to `<dir>/<window>.icon`
#[derive(Debug, Clone)]
pub struct DirIconSource {
    dir: PathBuf,
}

impl DirIconSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the dump for `window`
    pub fn path_for(&self, window: u32) -> PathBuf {
        self.dir.join(format!("{}.icon", window))
    }
}

impl IconSource for DirIconSource {
    fn fetch_icon(&self, window: u32) -> Result<Option<Vec<u8>>, IconLookupError> {
        match std::fs::read(self.path_for(window)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
