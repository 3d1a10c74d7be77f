//! Comment sources
//!
//! A source yields one thread's top-level comments in order. The pipeline
//! only reads the comment bodies; authors ride along for the output log.

use anyhow::{Context, Result};
use async_trait::async_trait;
use fplbot_rust_core::Comment;
use std::path::{Path, PathBuf};

/// A fetched batch of comments
#[derive(Debug, Clone, Default)]
pub struct Thread {
    pub title: Option<String>,
    pub comments: Vec<Comment>,
}

#[async_trait]
pub trait CommentSource: Send + Sync {
    async fn fetch(&self) -> Result<Thread>;

    /// Source name for logging
    fn source_name(&self) -> &str;
}

/// Local batch file.
///
/// `.json` files hold `[{"author": "...", "body": "..."}]`; anything else is
/// read as one comment per non-empty line.
#[derive(Debug, Clone)]
pub struct FileCommentSource {
    path: PathBuf,
}

impl FileCommentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_json(&self) -> bool {
        self.path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"))
    }
}

/// Parse batch file contents.
pub fn parse_comments(contents: &str, json: bool) -> Result<Vec<Comment>> {
    if json {
        return serde_json::from_str(contents).context("Invalid comments JSON");
    }
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(Comment::new)
        .collect())
}

#[async_trait]
impl CommentSource for FileCommentSource {
    async fn fetch(&self) -> Result<Thread> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read comments file {}", self.path.display()))?;
        let comments = parse_comments(&contents, self.is_json())
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;

        Ok(Thread {
            title: self
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned()),
            comments,
        })
    }

    fn source_name(&self) -> &str {
        "file"
    }
}
