//! Window title block for status bars
//!
//! Decodes "window title changed" notifications into renderable title
//! records and extracts the focused window's icon:
//!
//! - `core`: Title record and icon bitmap
//! - `parser`: JSON payload decoder
//! - `icon`: Icon block selection and premultiplied conversion
//! - `measure`: Text width measurement seam
//! - `windowtitle`: The current-title slot tying it together
//! - `app`: Configuration

pub mod app;
pub mod core;
pub mod icon;
pub mod measure;
pub mod parser;
pub mod windowtitle;

pub use crate::core::{IconBitmap, TitleRecord};
pub use crate::measure::{CellMeasure, TextMeasure};
pub use crate::parser::{decode_title, DecodeError};
pub use crate::windowtitle::WindowTitle;
