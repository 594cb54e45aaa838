//! Payload tokenizer
//!
//! Drives serde_json's deserializer over the payload with a visitor that
//! forwards every key and value to the decoder as soon as it is read.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde_json::error::Category;

use super::event::Event;
use super::state::Decoder;
use super::DecodeError;

/// Run the whole payload through `decoder`
pub(super) fn feed(payload: &[u8], decoder: &mut Decoder) -> Result<(), DecodeError> {
    let mut deserializer = serde_json::Deserializer::from_slice(payload);
    deserializer
        .deserialize_map(PayloadVisitor { decoder })
        .map_err(classify)?;
    deserializer.end().map_err(classify)
}

fn classify(err: serde_json::Error) -> DecodeError {
    match err.classify() {
        Category::Data => DecodeError::NotAnObject,
        _ => DecodeError::Syntax(err),
    }
}

/// Visits the top-level payload object
struct PayloadVisitor<'a> {
    decoder: &'a mut Decoder,
}

impl<'de, 'a> Visitor<'de> for PayloadVisitor<'a> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        self.decoder.advance(Event::StartMap);
        while let Some(key) = map.next_key::<String>()? {
            self.decoder.advance(Event::MapKey(key));
            let ValueToken(event) = map.next_value()?;
            self.decoder.advance(event);
        }
        self.decoder.advance(Event::EndMap);
        Ok(())
    }
}

/// A single value, reduced to the event the decoder sees
struct ValueToken(Event);

impl<'de> Deserialize<'de> for ValueToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor).map(ValueToken)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Event;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Event, E> {
        Ok(Event::Boolean(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Event, E> {
        Ok(Event::Integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Event, E> {
        Ok(i64::try_from(v).map(Event::Integer).unwrap_or(Event::Ignored))
    }

    fn visit_f64<E: de::Error>(self, _v: f64) -> Result<Event, E> {
        Ok(Event::Ignored)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Event, E> {
        Ok(Event::String(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Event, E> {
        Ok(Event::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Event, E> {
        Ok(Event::Ignored)
    }

    fn visit_none<E: de::Error>(self) -> Result<Event, E> {
        Ok(Event::Ignored)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Event, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Event::Ignored)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Event, A::Error>
    where
        A: MapAccess<'de>,
    {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Event::Ignored)
    }
}
