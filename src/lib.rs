//! qiita-publish - Publish a directory of markdown articles to Qiita
//!
//! Scans a directory for `.md` files, derives each article's title from its
//! first heading and its tags from front matter, and creates one Qiita article
//! per file through the v2 API.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::QiitaError;
