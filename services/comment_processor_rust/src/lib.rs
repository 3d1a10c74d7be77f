//! Comment Processor Library
//!
//! Wires comment sources and record sinks around the core pipeline.
//! Exposed as a library so the collaborators can be tested directly.

pub mod config;
pub mod reddit;
pub mod runner;
pub mod sink;
pub mod source;

// Re-export commonly used types
pub use config::{Config, OutputFormat};
pub use reddit::{RedditClient, RedditCredentials};
pub use sink::{open_sink, JsonLinesSink, RecordSink, TextLogSink};
pub use source::{CommentSource, FileCommentSource, Thread};
