//! Query record sinks
//!
//! Both sinks open their file in append mode; records are never rewritten.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use fplbot_rust_core::{Intent, QueryRecord};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::OutputFormat;

pub const RECORD_SEPARATOR: &str = "----------------------------------------";

pub trait RecordSink {
    fn write(&mut self, record: &QueryRecord) -> Result<()>;

    fn flush(&mut self) -> Result<()>;
}

fn open_append(path: &Path) -> Result<BufWriter<File>> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open output log {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Open the sink for the configured format.
pub fn open_sink(path: &Path, format: OutputFormat) -> Result<Box<dyn RecordSink>> {
    let sink: Box<dyn RecordSink> = match format {
        OutputFormat::Text => Box::new(TextLogSink::open(path)?),
        OutputFormat::JsonLines => Box::new(JsonLinesSink::open(path)?),
    };
    Ok(sink)
}

// ============================================================================
// Text log
// ============================================================================

/// Four labelled lines and a separator per record.
pub struct TextLogSink<W: Write = BufWriter<File>> {
    writer: W,
}

impl TextLogSink {
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(open_append(path)?))
    }
}

impl<W: Write> TextLogSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Render one record as a text log block.
pub fn format_record(record: &QueryRecord) -> String {
    format!(
        "Query Type: {}\nExtracted Names: {}\nInput: {}\nResponse: {}\n{}\n",
        record.intent,
        record.extracted_names.join(", "),
        record.input_text,
        record.response_text,
        RECORD_SEPARATOR
    )
}

impl<W: Write> RecordSink for TextLogSink<W> {
    fn write(&mut self, record: &QueryRecord) -> Result<()> {
        self.writer
            .write_all(format_record(record).as_bytes())
            .context("Failed to write query record")
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush output log")
    }
}

// ============================================================================
// JSON lines
// ============================================================================

/// Structured log entry
#[derive(Debug, Serialize)]
struct JsonLogEntry<'a> {
    logged_at: DateTime<Utc>,
    intent: Intent,
    extracted_names: &'a [String],
    input: &'a str,
    response: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<&'a str>,
}

/// One JSON object per line.
pub struct JsonLinesSink<W: Write = BufWriter<File>> {
    writer: W,
}

impl JsonLinesSink {
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(open_append(path)?))
    }
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RecordSink for JsonLinesSink<W> {
    fn write(&mut self, record: &QueryRecord) -> Result<()> {
        let entry = JsonLogEntry {
            logged_at: Utc::now(),
            intent: record.intent,
            extracted_names: &record.extracted_names,
            input: &record.input_text,
            response: &record.response_text,
            author: record.author.as_deref(),
        };
        serde_json::to_writer(&mut self.writer, &entry).context("Failed to encode query record")?;
        self.writer
            .write_all(b"\n")
            .context("Failed to write query record")
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush output log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> QueryRecord {
        QueryRecord {
            intent: Intent::Comparison,
            extracted_names: vec!["Haaland".into(), "Son".into()],
            input_text: "Is Haaland or Son the better pick?".into(),
            response_text: "Based on predicted points, Haaland (Man City) is the better choice."
                .into(),
            author: Some("fan1".into()),
        }
    }

    #[test]
    fn test_text_block_layout() {
        let mut sink = TextLogSink::new(Vec::new());
        sink.write(&record()).unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            out,
            "Query Type: Comparison\n\
             Extracted Names: Haaland, Son\n\
             Input: Is Haaland or Son the better pick?\n\
             Response: Based on predicted points, Haaland (Man City) is the better choice.\n\
             ----------------------------------------\n"
        );
    }

    #[test]
    fn test_json_line() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.write(&record()).unwrap();
        sink.write(&record()).unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["intent"], "Comparison");
        assert_eq!(value["extracted_names"][1], "Son");
        assert_eq!(value["author"], "fan1");
        assert!(value["logged_at"].is_string());
    }
}
