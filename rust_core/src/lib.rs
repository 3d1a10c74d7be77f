//! FPL Bot Core - comment interpretation for fantasy-football threads.
//!
//! This module provides:
//! - Alias and prediction tables built once from external data
//! - Ordered keyword intent classification (RMT, Transfer, Comparison)
//! - Candidate mention tagging and fuzzy player name resolution
//! - Points-based reply generation for each intent
//! - A per-comment pipeline producing immutable query records
//!
//! Every stage receives its lookup tables by reference. Nothing in this
//! crate performs I/O except the table readers in [`tables`].

pub mod intent;
pub mod matching;
pub mod models;
pub mod nlp;
pub mod pipeline;
pub mod response;
pub mod tables;
pub mod utils;

pub use intent::{classify, IntentRule, INTENT_RULES};
pub use matching::{BestMatch, FuzzyMatcher, StrsimMatcher, MATCH_THRESHOLD};
pub use models::{Comment, Intent, QueryRecord};
pub use nlp::extractor::NameExtractor;
pub use nlp::{CandidateMention, EntityLabel, EntityTagger, HeuristicTagger, MentionKind};
pub use pipeline::CommentPipeline;
pub use response::{ResponseGenerator, FALLBACK_RESPONSE};
pub use tables::{AliasTable, DataError, PredictionEntry, PredictionTable};
