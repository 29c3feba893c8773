//! Error types for qiita-publish

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the publisher
#[derive(Debug, Error)]
pub enum QiitaError {
    #[error("{0} environment variable is not set")]
    MissingToken(String),

    #[error("Cannot read articles directory {}: {source}", .path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read article {}: {source}", .path.display())]
    ReadArticle {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to publish to Qiita: {} - {message}", format_status(.status))]
    Publish {
        status: Option<u16>,
        message: String,
    },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

fn format_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "no response".to_string(),
    }
}

impl QiitaError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            QiitaError::MissingToken(_) => 2,
            QiitaError::Discovery { .. } => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            QiitaError::MissingToken(var) => {
                format!(
                    "{} environment variable is not set.\n\n\
                    Suggestions:\n\
                    • Create a token at https://qiita.com/settings/applications\n\
                    • Grant it the write_qiita scope\n\
                    • Export it before running: export {}=<token>",
                    var, var
                )
            }
            QiitaError::Discovery { path, .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Create the directory and put your articles in it: mkdir {}\n\
                    • Point to another directory with --dir <path>",
                    self,
                    path.display()
                )
            }
            QiitaError::Publish {
                status: Some(401), ..
            } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that QIITA_ACCESS_TOKEN is valid and not revoked",
                    self
                )
            }
            QiitaError::Publish {
                status: Some(403), ..
            } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • The token needs the write_qiita scope to create articles",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using QiitaError
pub type Result<T> = std::result::Result<T, QiitaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_error_message_contains_status_and_remote_message() {
        let err = QiitaError::Publish {
            status: Some(422),
            message: "invalid tag".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("422"));
        assert!(msg.contains("invalid tag"));
    }

    #[test]
    fn test_publish_error_without_status() {
        let err = QiitaError::Publish {
            status: None,
            message: "connection refused".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to publish to Qiita: no response - connection refused"
        );
    }

    #[test]
    fn test_missing_token_suggestion() {
        let err = QiitaError::MissingToken("QIITA_ACCESS_TOKEN".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("export QIITA_ACCESS_TOKEN="));
        assert!(msg.contains("write_qiita"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_discovery_suggestion_mentions_dir_flag() {
        let err = QiitaError::Discovery {
            path: PathBuf::from("/tmp/articles"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.display_with_suggestions();
        assert!(msg.contains("/tmp/articles"));
        assert!(msg.contains("--dir"));
    }

    #[test]
    fn test_unauthorized_suggestion() {
        let err = QiitaError::Publish {
            status: Some(401),
            message: "Unauthorized".to_string(),
        };
        assert!(err
            .display_with_suggestions()
            .contains("QIITA_ACCESS_TOKEN is valid"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(QiitaError::MissingToken("X".to_string()).exit_code(), 2);
        let discovery = QiitaError::Discovery {
            path: PathBuf::from("articles"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(discovery.exit_code(), 3);

        let publish = QiitaError::Publish {
            status: Some(500),
            message: "boom".to_string(),
        };
        assert_eq!(publish.exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = QiitaError::ReadArticle {
            path: PathBuf::from("a.md"),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8"),
        };
        assert_eq!(
            err.display_with_suggestions(),
            "Cannot read article a.md: bad utf-8"
        );
    }
}
