#![allow(dead_code)]

use assert_cmd::Command;

pub const TOKEN: &str = "test-token";

pub fn qiita_cmd() -> Command {
    let mut cmd = Command::cargo_bin("qiita-publish").unwrap();
    cmd.env_remove("QIITA_ACCESS_TOKEN");
    cmd.env_remove("QIITA_API_URL");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Endpoint path served by the mock server
pub fn items_path() -> &'static str {
    "/api/v2/items"
}

pub fn items_url(server_uri: &str) -> String {
    format!("{}{}", server_uri, items_path())
}
