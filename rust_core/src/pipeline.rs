//! Comment pipeline: classify -> extract -> generate -> record.
//!
//! Each comment is independent. Nothing is carried between comments, and a
//! comment whose names don't fit its intent still gets the fallback reply.

use crate::intent::classify;
use crate::matching::{FuzzyMatcher, StrsimMatcher};
use crate::models::{Comment, QueryRecord};
use crate::nlp::extractor::NameExtractor;
use crate::nlp::{EntityTagger, HeuristicTagger};
use crate::response::ResponseGenerator;
use crate::tables::{AliasTable, PredictionTable};
use log::debug;
use rayon::prelude::*;

/// Runs the full interpretation pipeline over read-only tables.
pub struct CommentPipeline<'t, T: EntityTagger = HeuristicTagger, M: FuzzyMatcher = StrsimMatcher> {
    extractor: NameExtractor<'t, T, M>,
    responder: ResponseGenerator<'t>,
}

impl<'t> CommentPipeline<'t> {
    /// Pipeline with the default tagger and matcher.
    pub fn new(aliases: &'t AliasTable, predictions: &'t PredictionTable) -> Self {
        Self::with_components(aliases, predictions, HeuristicTagger::new(), StrsimMatcher::new())
    }
}

impl<'t, T: EntityTagger, M: FuzzyMatcher> CommentPipeline<'t, T, M> {
    pub fn with_components(
        aliases: &'t AliasTable,
        predictions: &'t PredictionTable,
        tagger: T,
        matcher: M,
    ) -> Self {
        Self {
            extractor: NameExtractor::new(aliases, tagger, matcher),
            responder: ResponseGenerator::new(predictions),
        }
    }

    /// Interpret one comment body.
    pub fn process(&self, text: &str) -> QueryRecord {
        let intent = classify(text);
        let names = self.extractor.extract(text);
        let response = self.responder.generate(intent, &names);

        debug!("intent={} names={:?}", intent, names);

        QueryRecord {
            intent,
            extracted_names: names,
            input_text: text.to_string(),
            response_text: response,
            author: None,
        }
    }

    /// Interpret one comment, carrying its author onto the record.
    pub fn process_comment(&self, comment: &Comment) -> QueryRecord {
        QueryRecord {
            author: comment.author.clone(),
            ..self.process(&comment.body)
        }
    }

    /// Process comments strictly in input order.
    pub fn process_batch(&self, comments: &[Comment]) -> Vec<QueryRecord> {
        comments.iter().map(|c| self.process_comment(c)).collect()
    }

    /// Process comments across the rayon pool. Output order matches input.
    pub fn process_batch_parallel(&self, comments: &[Comment]) -> Vec<QueryRecord> {
        comments.par_iter().map(|c| self.process_comment(c)).collect()
    }
}
