//! Conversion of a document scroll offset to rail progress.

/// Progress through a scrollable document.
///
/// `scroll_height - viewport_height` is the scrollable distance; content that
/// fits in the viewport reports zero progress.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let doc_height = scroll_height - viewport_height;
    if doc_height > 0.0 && scroll_top.is_finite() {
        (scroll_top / doc_height).clamp(0.0, 1.0)
    } else {
        0.0
    }
}
