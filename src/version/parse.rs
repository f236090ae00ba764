//! Numeric version decomposition and newest-first ordering.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex_lite::Regex;

use crate::error::VersionError;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit run pattern is valid"));

/// Split a version string into its numeric components.
///
/// Each `.`-separated segment contributes the first run of digits it
/// contains, so prefixes such as `v` or `release-` are ignored:
/// `"release-1.0.123"` becomes `[1, 0, 123]`.
pub fn parse_version(version: &str) -> Result<Vec<u64>, VersionError> {
    version
        .split('.')
        .map(|segment| {
            let digits = DIGIT_RUN
                .find(segment)
                .ok_or_else(|| VersionError::Malformed {
                    version: version.to_string(),
                    segment: segment.to_string(),
                })?
                .as_str();

            digits.parse::<u64>().map_err(|_| VersionError::Overflow {
                version: version.to_string(),
                component: digits.to_string(),
            })
        })
        .collect()
}

/// Compare two versions for a newest-first sort.
///
/// `Ordering::Less` means `a` is newer and sorts before `b`. The shorter
/// component list is padded with zeros, so `"1.0"` and `"1.0.0"` compare
/// `Equal`.
pub fn compare_versions(a: &str, b: &str) -> Result<Ordering, VersionError> {
    if a == b {
        return Ok(Ordering::Equal);
    }

    let left = parse_version(a)?;
    let right = parse_version(b)?;
    Ok(compare_components(&left, &right))
}

/// Sort versions in place, newest first.
///
/// Every entry is parsed before anything moves: if one is malformed the
/// slice is left untouched and the error is returned. Ties keep their input
/// order.
pub fn sort_versions(versions: &mut [String]) -> Result<(), VersionError> {
    let mut keyed = versions
        .iter()
        .map(|v| parse_version(v).map(|components| (components, v.clone())))
        .collect::<Result<Vec<_>, _>>()?;

    keyed.sort_by(|(a, _), (b, _)| compare_components(a, b));

    for (slot, (_, version)) in versions.iter_mut().zip(keyed) {
        *slot = version;
    }

    Ok(())
}

fn compare_components(a: &[u64], b: &[u64]) -> Ordering {
    let len = a.len().max(b.len());

    for i in 0..len {
        let left = a.get(i).copied().unwrap_or(0);
        let right = b.get(i).copied().unwrap_or(0);
        if left != right {
            // larger component is newer, newer sorts first
            return right.cmp(&left);
        }
    }

    Ordering::Equal
}
