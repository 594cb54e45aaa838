//! Window icon extraction
//!
//! A window advertises its icon as a property holding any number of images
//! at different resolutions. This module picks the image that best fits
//! the bar and converts it into a premultiplied bitmap:
//!
//! - `select`: scan the property and choose one block
//! - `convert`: straight ARGB to premultiplied ARGB
//! - `source`: where property bytes come from
//!
//! Icon failures never affect the title text; callers degrade to "no icon".

mod convert;
mod select;
mod source;

pub use convert::{convert_block, premultiply};
pub use select::{select_icon, IconBlock};
pub use source::{DirIconSource, IconSource, NoIcons};

use tracing::debug;

use crate::core::IconBitmap;

/// Name of the window property holding icon images
pub const ICON_PROPERTY: &str = "_NET_WM_ICON";

/// Error type for icon lookups
#[derive(Debug, thiserror::Error)]
pub enum IconLookupError {
    #[error("Failed to resolve atom {0}")]
    Atom(String),

    #[error("Failed to fetch icon property of window 0x{window:x}: {reason}")]
    Property { window: u32, reason: String },

    #[error("Failed to read icon data: {0}")]
    Io(#[from] std::io::Error),
}

/// Fetch, select and convert the icon of `window`.
///
/// Returns `Ok(None)` when the window has no icon property or the property
/// holds no usable image.
pub fn load_icon<S: IconSource + ?Sized>(
    source: &S,
    window: u32,
    pref: u32,
) -> Result<Option<IconBitmap>, IconLookupError> {
    let Some(blob) = source.fetch_icon(window)? else {
        debug!(window, "{} not set", ICON_PROPERTY);
        return Ok(None);
    };

    let Some(block) = select_icon(&blob, pref) else {
        debug!(window, len = blob.len(), "No usable icon in {}", ICON_PROPERTY);
        return Ok(None);
    };

    debug!(
        window,
        width = block.width,
        height = block.height,
        pref,
        "Selected window icon"
    );
    Ok(convert_block(&block))
}
