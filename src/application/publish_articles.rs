//! Publish all articles use case

use crate::error::{QiitaError, Result};
use crate::infrastructure::{list_markdown_files, ArticlePublisher, PublishResult};
use std::path::{Path, PathBuf};

/// An article that could not be published
#[derive(Debug)]
pub struct PublishFailure {
    pub path: PathBuf,
    pub error: QiitaError,
}

/// Outcome of a publishing run
#[derive(Debug, Default)]
pub struct PublishSummary {
    pub published: Vec<PublishResult>,
    pub failed: Vec<PublishFailure>,
}

impl PublishSummary {
    /// Number of files the run attempted
    pub fn total(&self) -> usize {
        self.published.len() + self.failed.len()
    }
}

/// Service that publishes every markdown file of a directory, one at a time
pub struct PublishArticlesService<P: ArticlePublisher> {
    publisher: P,
    private: bool,
    tweet: bool,
}

impl<P: ArticlePublisher> PublishArticlesService<P> {
    /// Create a new service publishing public, non-tweeted articles
    pub fn new(publisher: P) -> Self {
        PublishArticlesService {
            publisher,
            private: false,
            tweet: false,
        }
    }

    /// Set article visibility and tweet flag
    pub fn with_options(mut self, private: bool, tweet: bool) -> Self {
        self.private = private;
        self.tweet = tweet;
        self
    }

    /// Publish every markdown file directly inside `dir`.
    ///
    /// Only discovery failures are returned as errors. A file that fails to
    /// read or publish is reported and recorded in the summary, and the run
    /// moves on to the next file.
    pub fn execute(&self, dir: &Path) -> Result<PublishSummary> {
        println!("Searching for markdown files in {}...", dir.display());
        let files = list_markdown_files(dir)?;

        let mut summary = PublishSummary::default();
        if files.is_empty() {
            eprintln!("Warning: no markdown files found.");
            return Ok(summary);
        }

        println!("Found {} markdown file(s).\n", files.len());

        for path in files {
            println!("Publishing: {}", path.display());
            match self.publisher.publish(&path, self.private, self.tweet) {
                Ok(result) => {
                    println!("Published: {} ({})\n", result.url, result.title);
                    summary.published.push(result);
                }
                Err(error) => {
                    eprintln!("Failed to publish: {}", path.display());
                    eprintln!("{}\n", error.display_with_suggestions());
                    summary.failed.push(PublishFailure { path, error });
                }
            }
        }

        Ok(summary)
    }
}
