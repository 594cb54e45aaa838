//! Title Core Module
//!
//! The data model shared by the decoder, the icon pipeline and the renderer:
//! - Title record (text, markup flag, measured width, window id)
//! - Icon bitmap in premultiplied ARGB
//! - Serializable snapshots for debugging and golden output
//!
//! A record is always internally consistent: its rendered width is
//! recomputed on every change to the text or the markup flag.

mod bitmap;
mod snapshot;
mod title;

pub use bitmap::IconBitmap;
pub use snapshot::{IconSnapshot, TitleSnapshot};
pub use title::TitleRecord;
