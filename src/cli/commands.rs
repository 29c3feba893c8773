//! CLI command definitions

use crate::infrastructure::config::{
    PublisherConfig, API_URL_ENV_VAR, DEFAULT_API_URL, DEFAULT_ARTICLES_DIR,
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "qiita-publish")]
#[command(about = "Publish markdown articles to Qiita", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory containing the markdown articles
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_ARTICLES_DIR)]
    pub dir: PathBuf,

    /// Publish articles as private (limited sharing)
    #[arg(long)]
    pub private: bool,

    /// Announce each article on Twitter/X
    #[arg(long)]
    pub tweet: bool,

    /// Article-creation endpoint
    #[arg(long, value_name = "URL", env = API_URL_ENV_VAR, default_value = DEFAULT_API_URL, hide = true)]
    pub api_url: String,
}

impl Cli {
    /// Combine parsed arguments with the access token into a run config
    pub fn into_config(self, access_token: String) -> PublisherConfig {
        PublisherConfig {
            access_token,
            api_url: self.api_url,
            articles_dir: self.dir,
            private: self.private,
            tweet: self.tweet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_behaviour() {
        let cli = Cli::try_parse_from(["qiita-publish"]).unwrap();
        let config = cli.into_config("token".to_string());

        assert_eq!(config.articles_dir, PathBuf::from("articles"));
        assert!(!config.private);
        assert!(!config.tweet);
        assert_eq!(config.access_token, "token");
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "qiita-publish",
            "--dir",
            "drafts",
            "--private",
            "--tweet",
            "--api-url",
            "http://localhost:9999/api/v2/items",
        ])
        .unwrap();
        let config = cli.into_config("token".to_string());

        assert_eq!(config.articles_dir, PathBuf::from("drafts"));
        assert!(config.private);
        assert!(config.tweet);
        assert_eq!(config.api_url, "http://localhost:9999/api/v2/items");
    }
}
