//! End-to-end run: load tables, fetch comments, process, write records.

use anyhow::Result;
use fplbot_rust_core::{AliasTable, CommentPipeline, Intent, PredictionTable, QueryRecord};
use log::{error, info, warn};
use std::collections::HashMap;

use crate::config::{CommentInput, Config};
use crate::reddit::RedditClient;
use crate::sink::{open_sink, RecordSink};
use crate::source::{CommentSource, FileCommentSource};

/// Load both tables. A failed load is logged and leaves that table empty,
/// so every comment still gets a reply.
pub fn load_tables(config: &Config) -> (AliasTable, PredictionTable) {
    let aliases = AliasTable::from_json_path(&config.name_variations_json).unwrap_or_else(|e| {
        error!("Failed to load name variations: {}", e);
        AliasTable::new()
    });
    let predictions = PredictionTable::from_csv_path(&config.predictions_csv).unwrap_or_else(|e| {
        error!("Failed to load predictions: {}", e);
        PredictionTable::new()
    });

    info!(
        "Loaded {} name variants and {} predictions",
        aliases.len(),
        predictions.len()
    );
    (aliases, predictions)
}

/// Comment source for the configured input.
pub fn build_source(config: &Config) -> Box<dyn CommentSource> {
    match &config.input {
        CommentInput::Reddit {
            thread_url,
            credentials,
        } => Box::new(RedditClient::new(credentials.clone(), thread_url.clone())),
        CommentInput::File(path) => Box::new(FileCommentSource::new(path.clone())),
    }
}

/// Process every comment from `source` and write the records to `sink`.
pub async fn run_with(
    source: &dyn CommentSource,
    sink: &mut dyn RecordSink,
    aliases: &AliasTable,
    predictions: &PredictionTable,
    parallel: bool,
) -> Result<Vec<QueryRecord>> {
    let thread = source.fetch().await?;
    info!(
        "Processing {} comments from {} ({})",
        thread.comments.len(),
        source.source_name(),
        thread.title.as_deref().unwrap_or("untitled")
    );
    if thread.comments.is_empty() {
        warn!("No comments to process");
    }

    let pipeline = CommentPipeline::new(aliases, predictions);
    let records = if parallel {
        pipeline.process_batch_parallel(&thread.comments)
    } else {
        pipeline.process_batch(&thread.comments)
    };

    for record in &records {
        sink.write(record)?;
    }
    sink.flush()?;

    let mut by_intent: HashMap<Intent, usize> = HashMap::new();
    for record in &records {
        *by_intent.entry(record.intent).or_default() += 1;
    }
    info!("Wrote {} records: {:?}", records.len(), by_intent);

    Ok(records)
}

/// Run with everything taken from `config`.
pub async fn run(config: &Config) -> Result<Vec<QueryRecord>> {
    let (aliases, predictions) = load_tables(config);
    let source = build_source(config);
    let mut sink = open_sink(&config.output_log, config.output_format)?;
    run_with(
        source.as_ref(),
        sink.as_mut(),
        &aliases,
        &predictions,
        config.parallel,
    )
    .await
}
