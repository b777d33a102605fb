/// A primitive JSON token as produced by the streaming token source.
///
/// String-carrying variants borrow from the tokenizer's transient buffers, so
/// consumers must copy anything they need to keep beyond the current token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'a> {
    StartObject,
    EndObject,
    StartArray,
    EndArray,
    /// An object member name; context for the value token that follows
    FieldName(&'a str),
    String(&'a str),
    Number(f64),
    Bool(bool),
    Null,
}

/// A consumer of an ordered token sequence for one shard.
///
/// Accepting a token never fails: sinks are pure state machines, and
/// syntax-level errors are surfaced by the token source itself.
pub trait TokenSink {
    fn accept(&mut self, token: Token<'_>);
}
