//! Display formatting for pipeline output.
//!
//! Pure formatting on top of the `console` crate; no prompts, the pipeline
//! is non-interactive.

use console::style;

use crate::bump::ReleaseDecision;
use crate::classify::ClassificationResult;
use crate::domain::Version;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display the classification summary: non-empty bucket counts plus every
/// unrecognized commit type as a notice.
pub fn display_classification_summary(result: &ClassificationResult) {
    println!("\n{}", style("Classified commits:").bold());
    for (title, count) in result.bucket_counts() {
        if count > 0 {
            println!("  {}: {}", title, count);
        }
    }

    for observation in result.unrecognized() {
        println!(
            "  {} unrecognized type '{}' ({}) - skipped",
            style("·").dim(),
            observation.r#type,
            observation.hash
        );
    }
}

/// Display the computed release decision.
pub fn display_release_decision(prior: Option<&Version>, decision: &ReleaseDecision) {
    println!("\n{}", style("Release decision:").bold());
    match prior {
        Some(prior) => {
            println!("  From: {}", style(prior).red());
            println!("  To:   {}", style(decision.next_version).green());
        }
        None => {
            println!(
                "  Initial version: {}",
                style(decision.next_version).green()
            );
        }
    }
    if decision.is_prerelease {
        println!("  {}", style("(pre-release)").yellow());
    }
}

/// Display the terminal no-release outcome with the full bucket audit.
/// This is a deliberate stop, not a failure.
pub fn display_no_release(version: &Version, result: &ClassificationResult) {
    println!(
        "\n{} No version-impacting changes since {}",
        style("→").yellow(),
        version
    );
    println!("{}", style("Bucket counts:").bold());
    for (title, count) in result.bucket_counts() {
        println!("  {}: {}", title, count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::domain::RawCommit;

    // Display functions print to stdout/stderr; these verify they do not
    // panic on representative inputs.

    #[test]
    fn test_display_messages() {
        display_error("test error");
        display_success("test success");
        display_status("test status");
    }

    #[test]
    fn test_display_classification_summary() {
        let result = classify(&[
            RawCommit::new("a1", "feat: thing", ""),
            RawCommit::new("a2", "wip: later", ""),
        ]);
        display_classification_summary(&result);
    }

    #[test]
    fn test_display_no_release() {
        let result = classify(&[RawCommit::new("a1", "docs: readme", "")]);
        display_no_release(&Version::new(1, 0, 0), &result);
    }
}
