//! Qiita API client

use crate::domain::MarkdownDocument;
use crate::error::{QiitaError, Result};
use crate::infrastructure::PublisherConfig;
use log::{debug, error, info};
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Something that can publish a markdown file as an article
pub trait ArticlePublisher {
    /// Publish the markdown file at `path`
    fn publish(&self, path: &Path, private: bool, tweet: bool) -> Result<PublishResult>;
}

/// Body of `POST /api/v2/items`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishRequest {
    pub title: String,
    pub body: String,
    pub tags: Vec<TagName>,
    pub private: bool,
    /// Omitted unless true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tweet: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagName {
    pub name: String,
}

impl PublishRequest {
    /// Build the request for a document, sending its raw content as the body
    pub fn from_document(document: &MarkdownDocument, private: bool, tweet: bool) -> Self {
        PublishRequest {
            title: document.title.clone(),
            body: document.content.clone(),
            tags: document
                .tags
                .iter()
                .map(|name| TagName { name: name.clone() })
                .collect(),
            private,
            tweet: tweet.then_some(true),
        }
    }
}

/// Article as returned by Qiita after creation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PublishResult {
    pub id: String,
    pub url: String,
    pub title: String,
}

/// Blocking client for the Qiita article-creation endpoint
#[derive(Debug, Clone)]
pub struct QiitaClient {
    client: Client,
    api_url: String,
    access_token: String,
}

impl QiitaClient {
    /// Create a client for the endpoint and token in `config`
    pub fn new(config: &PublisherConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("qiita-publish/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(QiitaClient {
            client,
            api_url: config.api_url.clone(),
            access_token: config.access_token.clone(),
        })
    }

    /// Publish an already-parsed document
    pub fn publish_document(
        &self,
        document: &MarkdownDocument,
        private: bool,
        tweet: bool,
    ) -> Result<PublishResult> {
        let request = PublishRequest::from_document(document, private, tweet);

        debug!(
            "POST {} title={:?} tags={:?} private={} tweet={}",
            self.api_url, request.title, document.tags, private, tweet
        );

        let response = self
            .client
            .post(&self.api_url)
            .header(AUTHORIZATION, format!("Bearer {}", self.access_token))
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .map_err(|e| {
                error!("Qiita API error: {}", e);
                QiitaError::Publish {
                    status: e.status().map(|s| s.as_u16()),
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        if status.is_success() {
            let result: PublishResult = response.json().map_err(|e| {
                error!("Qiita API returned an unreadable response: {}", e);
                QiitaError::Publish {
                    status: Some(status.as_u16()),
                    message: format!("Invalid response body: {}", e),
                }
            })?;

            info!("Published to Qiita: {}", result.url);
            info!("  Title: {}", result.title);
            Ok(result)
        } else {
            let error_body = response.text().unwrap_or_else(|e| {
                error!("Failed to read Qiita API error body: {}", e);
                String::new()
            });
            if error_body.is_empty() {
                error!("Qiita API error: {}", generic_status_message(status));
            } else {
                error!("Qiita API error: {}", error_body);
            }

            Err(QiitaError::Publish {
                status: Some(status.as_u16()),
                message: remote_error_message(&error_body)
                    .unwrap_or_else(|| generic_status_message(status)),
            })
        }
    }
}

impl ArticlePublisher for QiitaClient {
    fn publish(&self, path: &Path, private: bool, tweet: bool) -> Result<PublishResult> {
        let content = fs::read_to_string(path).map_err(|source| QiitaError::ReadArticle {
            path: path.to_path_buf(),
            source,
        })?;

        let document = MarkdownDocument::parse(content);
        self.publish_document(&document, private, tweet)
    }
}

/// `message` field of a JSON object error body, if there is one
fn remote_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.as_object()?.get("message")? {
        serde_json::Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

fn generic_status_message(status: StatusCode) -> String {
    format!("Request failed with status code {}", status.as_u16())
}
