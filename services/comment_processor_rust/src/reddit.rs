//! Reddit thread client
//!
//! Authenticates with the OAuth2 password grant and fetches the top-level
//! comments of one submission. "Load more" stubs are dropped, so very large
//! threads only yield the comments Reddit returns in the first listing.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use fplbot_rust_core::Comment;
use log::{debug, info};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::source::{CommentSource, Thread};

pub const DEFAULT_AUTH_URL: &str = "https://www.reddit.com/api/v1/access_token";
pub const DEFAULT_API_BASE: &str = "https://oauth.reddit.com";

/// Script-app credentials
#[derive(Clone)]
pub struct RedditCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub password: String,
    pub user_agent: String,
}

impl std::fmt::Debug for RedditCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedditCredentials")
            .field("client_id", &self.client_id)
            .field("username", &self.username)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<String>,
}

#[derive(Clone)]
pub struct RedditClient {
    client: Client,
    credentials: RedditCredentials,
    thread_url: String,
    auth_url: String,
    api_base: String,
}

impl std::fmt::Debug for RedditClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedditClient")
            .field("thread_url", &self.thread_url)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl RedditClient {
    pub fn new(credentials: RedditCredentials, thread_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(15))
                .user_agent(credentials.user_agent.clone())
                .build()
                .unwrap_or_else(|_| Client::new()),
            credentials,
            thread_url: thread_url.into(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Override the token and API endpoints
    pub fn with_endpoints(mut self, auth_url: impl Into<String>, api_base: impl Into<String>) -> Self {
        self.auth_url = auth_url.into();
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    async fn access_token(&self) -> Result<String> {
        let resp = self
            .client
            .post(&self.auth_url)
            .basic_auth(&self.credentials.client_id, Some(&self.credentials.client_secret))
            .form(&[
                ("grant_type", "password"),
                ("username", self.credentials.username.as_str()),
                ("password", self.credentials.password.as_str()),
            ])
            .send()
            .await
            .context("Reddit token request failed")?
            .error_for_status()
            .context("Reddit token request rejected")?;

        let token: TokenResponse = resp.json().await.context("Invalid Reddit token response")?;
        match (token.access_token, token.error) {
            (Some(t), _) => Ok(t),
            (None, Some(e)) => Err(anyhow!("Reddit authentication failed: {}", e)),
            (None, None) => Err(anyhow!("Reddit token response had no access_token")),
        }
    }

    pub async fn fetch_thread(&self) -> Result<Thread> {
        let id = submission_id(&self.thread_url)
            .ok_or_else(|| anyhow!("Not a Reddit thread URL: {}", self.thread_url))?;
        let token = self.access_token().await?;

        let url = format!("{}/comments/{}", self.api_base, id);
        debug!("Fetching {}", url);

        let data: serde_json::Value = self
            .client
            .get(&url)
            .bearer_auth(token)
            .query(&[("depth", "1"), ("limit", "500"), ("raw_json", "1")])
            .send()
            .await
            .with_context(|| format!("Reddit request failed for {}", url))?
            .error_for_status()
            .with_context(|| format!("Reddit rejected request for {}", url))?
            .json()
            .await
            .context("Invalid Reddit thread JSON")?;

        let thread = parse_thread(&data)?;
        info!(
            "Fetched {} top-level comments from '{}'",
            thread.comments.len(),
            thread.title.as_deref().unwrap_or("?")
        );
        Ok(thread)
    }
}

#[async_trait]
impl CommentSource for RedditClient {
    async fn fetch(&self) -> Result<Thread> {
        self.fetch_thread().await
    }

    fn source_name(&self) -> &str {
        "reddit"
    }
}

/// Submission id from a thread URL: `.../comments/{id}/...`
pub fn submission_id(url: &str) -> Option<String> {
    let mut parts = url.split('/').skip_while(|p| *p != "comments");
    parts.next()?;
    parts
        .next()
        .filter(|id| !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(str::to_string)
}

/// Parse the `[submission listing, comment listing]` response.
pub fn parse_thread(data: &serde_json::Value) -> Result<Thread> {
    let listings = data
        .as_array()
        .filter(|a| a.len() >= 2)
        .ok_or_else(|| anyhow!("Expected [submission, comments] listings"))?;

    let title = listings[0]["data"]["children"][0]["data"]["title"]
        .as_str()
        .map(str::to_string);

    let mut comments = Vec::new();
    if let Some(children) = listings[1]["data"]["children"].as_array() {
        for child in children {
            // "more" stubs and anything that is not a comment
            if child["kind"].as_str() != Some("t1") {
                continue;
            }
            let Some(body) = child["data"]["body"].as_str() else {
                continue;
            };
            let mut comment = Comment::new(body);
            comment.author = child["data"]["author"].as_str().map(str::to_string);
            comments.push(comment);
        }
    }

    Ok(Thread { title, comments })
}
