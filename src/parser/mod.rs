//! Title notification decoder
//!
//! Turns a JSON title-change payload into a [`TitleRecord`]. The payload is
//! tokenized by serde_json's streaming deserializer; each token is handed to
//! a small state machine as an [`Event`] the moment it is read, so no
//! intermediate document is built.

mod event;
mod state;
mod stream;

pub use event::Event;
pub use state::Decoder;

use crate::core::TitleRecord;
use crate::measure::TextMeasure;

/// Error type for payload decoding
///
/// Any of these aborts the current notification. No partial record is ever
/// produced.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Malformed title payload: {0}")]
    Syntax(#[source] serde_json::Error),

    #[error("Title payload is not a JSON object")]
    NotAnObject,

    #[error("Title payload ended before the object was closed")]
    Incomplete,
}

/// Decode one complete payload into a measured title record
pub fn decode_title<M: TextMeasure + ?Sized>(
    payload: &[u8],
    measure: &M,
) -> Result<TitleRecord, DecodeError> {
    let mut decoder = Decoder::new();
    stream::feed(payload, &mut decoder)?;
    decoder.finish(measure)
}
