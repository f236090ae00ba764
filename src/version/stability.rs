//! Prerelease detection.

/// Markers that flag a version as a prerelease.
const PRERELEASE_MARKERS: &[&str] = &["alfa", "beta", "rc"];

/// Whether a version looks like a prerelease.
///
/// This is a case-sensitive substring check, not a segment match: any
/// occurrence of `alfa`, `beta` or `rc` counts, including inside unrelated
/// words (`"arcade-1.0"` is a prerelease).
pub fn is_prerelease(version: &str) -> bool {
    PRERELEASE_MARKERS
        .iter()
        .any(|marker| version.contains(marker))
}

/// Keep only stable versions, preserving order.
pub fn filter_stable(versions: &[String]) -> Vec<String> {
    versions
        .iter()
        .filter(|v| !is_prerelease(v))
        .cloned()
        .collect()
}
