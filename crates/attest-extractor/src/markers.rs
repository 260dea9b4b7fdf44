//! TODO-family marker extraction

use crate::patterns::TODO_MARKER;
use attest_domain::TodoMarker;

/// Every marker in `text`, in order
pub fn extract_todo_markers(text: &str) -> impl Iterator<Item = TodoMarker> + '_ {
    TODO_MARKER.captures_iter(text).filter_map(|caps| {
        Some(TodoMarker {
            marker: caps.get(1)?.as_str().to_uppercase(),
            raw: caps.get(0)?.as_str().to_owned(),
        })
    })
}
