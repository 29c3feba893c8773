//! Infrastructure layer - Filesystem and HTTP I/O

pub mod config;
pub mod discovery;
pub mod qiita;

pub use config::PublisherConfig;
pub use discovery::list_markdown_files;
pub use qiita::{ArticlePublisher, PublishRequest, PublishResult, QiitaClient};
