//! Output formatting utilities

use crate::application::PublishSummary;

/// Format the completion report of a publishing run
pub fn format_summary(summary: &PublishSummary) -> String {
    let mut output = format!(
        "Done. {} published, {} failed.",
        summary.published.len(),
        summary.failed.len()
    );

    if !summary.failed.is_empty() {
        output.push_str("\nFailed files:");
        for failure in &summary.failed {
            output.push_str(&format!("\n  {}", failure.path.display()));
        }
    }

    output
}
