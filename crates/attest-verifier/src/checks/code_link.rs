use attest_domain::{
    CheckDetails, CheckStatus, CodeLinkDetails, FileLookup, FileMetadata, OracleFailure, Outcome,
    Permalink, SourceHost, SourceLocation,
};
use tracing::debug;

/// Assumed average characters per line when only a byte size is known
pub const CHARS_PER_LINE: u64 = 30;

/// Size-based line estimate, floored at 1
///
/// Unreliable by nature: minified text packs far more per line and sparse
/// text far less. Never compare strictly against it.
pub fn estimate_line_count(size_bytes: u64) -> u64 {
    (size_bytes / CHARS_PER_LINE).max(1)
}

fn details(link: &Permalink) -> CodeLinkDetails {
    CodeLinkDetails {
        permalink: link.url.clone(),
        file_exists: false,
        line_range_valid: false,
        line_count: None,
        line_count_estimated: false,
    }
}

/// Check that a permalink's file exists at its commit and covers its range
///
/// An exact line count from the host allows a strict range check. A
/// size-based estimate only ever produces a warning, with the range
/// reported valid and the count flagged as estimated.
pub fn verify_code_link<S: SourceHost + ?Sized>(
    host: &S,
    link: &Permalink,
    target: SourceLocation,
) -> Outcome {
    let lookup = host.file_metadata(link);
    debug!(url = %link.url, ?lookup, "permalink lookup");

    let mut d = details(link);
    let (status, message) = match lookup {
        Err(e @ OracleFailure::Unavailable(_)) => (
            CheckStatus::Warn,
            format!("cannot verify code link {:?}: {}", link.url, e),
        ),
        Err(e) => (
            CheckStatus::Fail,
            format!("failed to verify code link {:?}: {}", link.url, e),
        ),
        Ok(FileLookup::NotFound) => (
            CheckStatus::Fail,
            format!(
                "file {:?} does not exist at commit {}",
                link.path,
                link.short_commit()
            ),
        ),
        Ok(FileLookup::Found(FileMetadata {
            line_count: Some(lines),
            ..
        })) => {
            d.file_exists = true;
            d.line_count = Some(lines);
            d.line_range_valid =
                link.start_line >= 1 && u64::from(link.end_line) <= lines;
            if d.line_range_valid {
                (CheckStatus::Pass, format!("code link {:?} is valid", link.url))
            } else {
                (
                    CheckStatus::Fail,
                    format!(
                        "line range {} exceeds file length ({} lines)",
                        link.range_label(),
                        lines
                    ),
                )
            }
        }
        Ok(FileLookup::Found(FileMetadata {
            size_bytes,
            line_count: None,
        })) => {
            d.file_exists = true;
            d.line_count = Some(estimate_line_count(size_bytes));
            d.line_count_estimated = true;
            d.line_range_valid = true;
            (
                CheckStatus::Warn,
                format!(
                    "code link {:?}: file exists but line range L{}-L{} could not be verified (line count estimated)",
                    link.url, link.start_line, link.end_line
                ),
            )
        }
    };

    Outcome::new(target, status, message, CheckDetails::CodeLink(d))
}
