//! Decoder State Machine
//!
//! Consumes [`Event`]s and collects the recognized title fields.
//!
//! States:
//! - AwaitingKey: inside the object, no key pending
//! - HaveKey: a key was read, its value is next
//! - Done: the payload object was closed
//!
//! Dispatch is on the pair (pending key, token kind). A value whose key is
//! not recognized, or whose type does not match the key, is dropped. A key
//! that arrives while another is still pending replaces it.

use tracing::{debug, trace};

use super::event::Event;
use super::DecodeError;
use crate::core::TitleRecord;
use crate::measure::TextMeasure;

const KEY_TITLE: &str = "windowtitle";
const KEY_WINDOW_ID: &str = "xcb_window_id";
const KEY_MARKUP: &str = "is_pango_markup";

/// Decoder state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitingKey,
    HaveKey,
    Done,
}

/// The title decoder
#[derive(Debug)]
pub struct Decoder {
    state: State,
    /// Key whose value comes next
    current_key: Option<String>,
    /// Collected fields
    text: Option<String>,
    markup: bool,
    window_id: Option<i64>,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    /// Create a decoder waiting for the payload object
    pub fn new() -> Self {
        Self {
            state: State::AwaitingKey,
            current_key: None,
            text: None,
            markup: false,
            window_id: None,
        }
    }

    /// Whether the payload object has been closed
    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    /// Feed one event
    pub fn advance(&mut self, event: Event) {
        trace!(?event, state = ?self.state, "title decoder event");

        if self.state == State::Done {
            return;
        }

        match event {
            Event::StartMap => {
                self.current_key = None;
                self.state = State::AwaitingKey;
            }
            Event::MapKey(key) => {
                self.current_key = Some(key);
                self.state = State::HaveKey;
            }
            Event::EndMap => {
                self.current_key = None;
                self.state = State::Done;
            }
            value => {
                if self.state == State::HaveKey {
                    self.apply_value(value);
                }
                self.current_key = None;
                self.state = State::AwaitingKey;
            }
        }
    }

    fn apply_value(&mut self, value: Event) {
        match (self.current_key.as_deref(), value) {
            (Some(KEY_TITLE), Event::String(text)) => self.text = Some(text),
            (Some(KEY_WINDOW_ID), Event::Integer(id)) => self.window_id = Some(id),
            (Some(KEY_MARKUP), Event::Boolean(markup)) => self.markup = markup,
            (key, value) => trace!(?key, ?value, "ignoring payload field"),
        }
    }

    /// Build the record. Fails unless the object was closed.
    pub fn finish<M: TextMeasure + ?Sized>(self, measure: &M) -> Result<TitleRecord, DecodeError> {
        if self.state != State::Done {
            return Err(DecodeError::Incomplete);
        }

        let record = TitleRecord::new(
            self.text.unwrap_or_default(),
            self.markup,
            self.window_id,
            measure,
        );
        debug!(
            title = record.text(),
            width = record.rendered_width(),
            window = ?record.window_id(),
            "Got windowtitle change"
        );
        Ok(record)
    }
}
