//! Domain layer - Article model and metadata extraction

pub mod article;
pub mod metadata;

pub use article::MarkdownDocument;
pub use metadata::{extract_tags, extract_title};
