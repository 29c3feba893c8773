//! Application layer - Use cases and orchestration

pub mod publish_articles;

pub use publish_articles::{PublishArticlesService, PublishFailure, PublishSummary};
