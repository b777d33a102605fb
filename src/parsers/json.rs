use std::fmt;
use std::io::Read;

use anyhow::{Context, Result};
use serde::de::{self, DeserializeSeed, Deserializer, MapAccess, SeqAccess, Visitor};

use crate::parsers::tokens::{Token, TokenSink};

/// Stream one shard's JSON content into a [`TokenSink`].
///
/// The document is walked through `serde_json`'s deserializer with a seed
/// visitor, so tokens are pushed into the sink as they are read and the
/// document is never buffered in memory. Nested arrays and objects are
/// flattened into begin/end token pairs.
///
/// # Errors
///
/// Returns an error if the content is not well-formed JSON or if bytes remain
/// after the top-level value. The sink is left in whatever state it reached;
/// callers treat the whole shard as failed.
pub fn stream_tokens<R: Read, S: TokenSink>(reader: R, sink: &mut S) -> Result<()> {
    let mut deserializer = serde_json::Deserializer::from_reader(reader);
    TokenSeed { sink }.deserialize(&mut deserializer).context("malformed JSON content")?;
    deserializer.end().context("unexpected trailing data after JSON document")?;
    Ok(())
}

/// Seed that forwards one JSON value (of any shape) to the sink as tokens
struct TokenSeed<'a, S> {
    sink: &'a mut S,
}

impl<'de, S: TokenSink> DeserializeSeed<'de> for TokenSeed<'_, S> {
    type Value = ();

    fn deserialize<D>(self, deserializer: D) -> Result<(), D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TokenVisitor { sink: self.sink })
    }
}

struct TokenVisitor<'a, S> {
    sink: &'a mut S,
}

impl<'de, S: TokenSink> Visitor<'de> for TokenVisitor<'_, S> {
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any JSON value")
    }

    fn visit_bool<E>(self, value: bool) -> Result<(), E>
    where
        E: de::Error,
    {
        self.sink.accept(Token::Bool(value));
        Ok(())
    }

    fn visit_i64<E>(self, value: i64) -> Result<(), E>
    where
        E: de::Error,
    {
        self.sink.accept(Token::Number(value as f64));
        Ok(())
    }

    fn visit_u64<E>(self, value: u64) -> Result<(), E>
    where
        E: de::Error,
    {
        self.sink.accept(Token::Number(value as f64));
        Ok(())
    }

    fn visit_f64<E>(self, value: f64) -> Result<(), E>
    where
        E: de::Error,
    {
        self.sink.accept(Token::Number(value));
        Ok(())
    }

    fn visit_str<E>(self, value: &str) -> Result<(), E>
    where
        E: de::Error,
    {
        self.sink.accept(Token::String(value));
        Ok(())
    }

    fn visit_unit<E>(self) -> Result<(), E>
    where
        E: de::Error,
    {
        self.sink.accept(Token::Null);
        Ok(())
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<(), A::Error>
    where
        A: SeqAccess<'de>,
    {
        self.sink.accept(Token::StartArray);
        while seq.next_element_seed(TokenSeed { sink: &mut *self.sink })?.is_some() {}
        self.sink.accept(Token::EndArray);
        Ok(())
    }

    fn visit_map<A>(self, mut map: A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        self.sink.accept(Token::StartObject);
        while let Some(name) = map.next_key::<String>()? {
            self.sink.accept(Token::FieldName(&name));
            map.next_value_seed(TokenSeed { sink: &mut *self.sink })?;
        }
        self.sink.accept(Token::EndObject);
        Ok(())
    }
}
