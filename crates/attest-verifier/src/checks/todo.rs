use attest_domain::{CheckDetails, CheckStatus, Outcome, SourceLocation, TodoMarker, TodoMarkerDetails};

/// Leftover markers always fail
pub fn verify_todo_marker(marker: &TodoMarker, target: SourceLocation) -> Outcome {
    Outcome::new(
        target,
        CheckStatus::Fail,
        format!("{} marker found - remove before publishing", marker.marker),
        CheckDetails::TodoMarker(TodoMarkerDetails {
            marker: marker.marker.clone(),
        }),
    )
}
