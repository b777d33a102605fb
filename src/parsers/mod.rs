//! Streaming token source for shard content
//!
//! # Error Handling Strategy
//!
//! The token source is the only layer that sees raw bytes, and it is strict:
//!
//! - **Syntax errors are hard failures**: a malformed or truncated document
//!   stops tokenization immediately and propagates as an error. There is no
//!   recovery or skipping of corrupt bytes; whether the failure is fatal is
//!   decided by the caller (fatal for a single shard, degraded-and-continue
//!   for a directory aggregation).
//!
//! - **Semantic problems are not errors here**: records with missing or
//!   wrongly-typed fields tokenize fine. Filtering them is the extractor's
//!   job, applied incrementally per object.
//!
//! - **Error propagation**: uses `anyhow::Result` with context naming the
//!   failing stage; consumers attach the shard path.

pub mod json;
pub mod tokens;

pub use json::stream_tokens;
pub use tokens::{Token, TokenSink};
