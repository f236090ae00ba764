//! Grouping commits by release range.

use rayon::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use crate::error::AggregateError;
use crate::git::{CommitRecord, CommitSource, DiffRange};

/// The commits of one release range.
///
/// Serialized as `{"NameTags": ..., "Commits": [...]}`. A `null` commit
/// list is read back as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeGroup {
    /// Range label, `<older>..<newer>`.
    #[serde(rename = "NameTags")]
    pub name: String,
    /// Commits newest first, as returned by the source.
    #[serde(rename = "Commits", deserialize_with = "null_as_empty")]
    pub commits: Vec<CommitRecord>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<CommitRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<CommitRecord>>::deserialize(deserializer)?.unwrap_or_default())
}

fn collect_group<S>(range: &DiffRange, source: &S) -> Result<ChangeGroup, AggregateError>
where
    S: CommitSource + ?Sized,
{
    let name = range.to_string();
    let commits = source.commits(range).map_err(|err| {
        warn!(range = %name, error = %err, "Commit source failed");
        AggregateError::Range {
            range: name.clone(),
            source: err,
        }
    })?;

    debug!(range = %name, count = commits.len(), "Assembled change group");
    Ok(ChangeGroup { name, commits })
}

/// Collect one group per range, in range order.
///
/// The source is called once per range. Empty ranges still produce a
/// group. The first failing range aborts the whole aggregation.
pub fn aggregate<S>(ranges: &[DiffRange], source: &S) -> Result<Vec<ChangeGroup>, AggregateError>
where
    S: CommitSource + ?Sized,
{
    ranges
        .iter()
        .map(|range| collect_group(range, source))
        .collect()
}

/// Like [`aggregate`], with up to `jobs` ranges fetched at once.
///
/// Groups come back in range order whatever order the fetches finish in.
/// When several ranges fail, the earliest one is reported.
pub fn aggregate_parallel<S>(
    ranges: &[DiffRange],
    source: &S,
    jobs: usize,
) -> Result<Vec<ChangeGroup>, AggregateError>
where
    S: CommitSource + Sync + ?Sized,
{
    if jobs <= 1 || ranges.len() <= 1 {
        return aggregate(ranges, source);
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .map_err(|e| AggregateError::ThreadPool(e.to_string()))?;

    let results: Vec<Result<ChangeGroup, AggregateError>> = pool.install(|| {
        ranges
            .par_iter()
            .map(|range| collect_group(range, source))
            .collect()
    });

    results.into_iter().collect()
}
