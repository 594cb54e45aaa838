//! Decoder events
//!
//! One event per JSON token the decoder cares about.

/// A token from a title payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Opening brace of the payload object
    StartMap,

    /// An object key
    MapKey(String),

    /// A string value
    String(String),

    /// An integer value that fits in `i64`
    Integer(i64),

    /// A boolean value
    Boolean(bool),

    /// A value the decoder never interprets: null, floats, nested objects
    /// and arrays, integers outside `i64`
    Ignored,

    /// Closing brace of the payload object
    EndMap,
}
