//! Largest-per-bucket decimation.
//!
//! Reduces an ordered sequence to at most `limit` elements by splitting it
//! into contiguous, equal-width buckets along the index axis and keeping the
//! largest element of each bucket. Unlike a fixed-stride pick, spikes in a
//! time series survive the reduction.
//!
//! Bucket boundaries come from the `f64` ratio `len / limit`, so bucket
//! widths differ by at most one element across the whole sequence. The
//! sampler works best when the input is sorted along the axis the caller
//! will plot (usually time).

use std::cmp::Ordering;
use std::ops::Range;

use crate::error::{Error, Result};

/// Compute the index ranges the sampler partitions `len` elements into.
///
/// When `len <= limit` every element forms its own bucket. The last bucket
/// always ends at `len`.
///
/// Returns [`Error::InvalidArgument`] when `limit` is zero.
pub fn bucket_ranges(len: usize, limit: usize) -> Result<Vec<Range<usize>>> {
    if limit == 0 {
        return Err(Error::invalid_argument("sample limit must be at least 1"));
    }

    if len <= limit {
        return Ok((0..len).map(|i| i..i + 1).collect());
    }

    let bucket_size = len as f64 / limit as f64;
    let mut ranges = Vec::with_capacity(limit);

    for i in 0..limit {
        let lower = i as f64 * bucket_size;
        if lower >= len as f64 {
            break;
        }

        let start = lower.floor() as usize;
        let end = if i + 1 == limit {
            len
        } else {
            (((i + 1) as f64 * bucket_size).floor() as usize).min(len)
        };

        if start < end {
            ranges.push(start..end);
        }
    }

    Ok(ranges)
}

/// Sample `items` down to at most `limit` elements, keeping the element
/// `compare` ranks highest in each bucket.
///
/// Ties go to the first occurrence within the bucket. If `items` already
/// fits within `limit` it is returned whole.
///
/// `compare` should be a total order; an inconsistent comparator gives an
/// unspecified (but still bounded) selection.
///
/// # Example
///
/// ```
/// use jobsight_common::sample::sample_by;
///
/// let values = [5, 1, 2, 9, 3, 4];
/// let picked = sample_by(&values, 2, |a, b| a.cmp(b)).unwrap();
/// assert_eq!(picked, vec![&5, &9]);
/// ```
pub fn sample_by<T, F>(items: &[T], limit: usize, mut compare: F) -> Result<Vec<&T>>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let ranges = bucket_ranges(items.len(), limit)?;

    if items.len() <= limit {
        return Ok(items.iter().collect());
    }

    Ok(ranges
        .into_iter()
        .filter_map(|range| first_max(&items[range], &mut compare))
        .collect())
}

/// Sample elements that have a natural order.
pub fn sample<T: Ord>(items: &[T], limit: usize) -> Result<Vec<&T>> {
    sample_by(items, limit, |a, b| a.cmp(b))
}

/// Sample by a key extracted from each element, e.g. a metric value.
///
/// Keys only need `PartialOrd`. A key that does not compare with itself
/// (such as `NaN`) ranks below every comparable key, so it is picked only
/// when its whole bucket is incomparable.
pub fn sample_by_key<T, K, F>(items: &[T], limit: usize, mut key: F) -> Result<Vec<&T>>
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    sample_by(items, limit, |a, b| {
        let (candidate, best) = (key(a), key(b));
        match candidate.partial_cmp(&best) {
            Some(ordering) => ordering,
            None if is_comparable(&candidate) && !is_comparable(&best) => Ordering::Greater,
            None => Ordering::Less,
        }
    })
}

fn is_comparable<K: PartialOrd>(key: &K) -> bool {
    key.partial_cmp(key).is_some()
}

/// Largest element of a bucket, first occurrence on ties.
fn first_max<'a, T, F>(bucket: &'a [T], compare: &mut F) -> Option<&'a T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut iter = bucket.iter();
    let mut best = iter.next()?;
    for item in iter {
        if compare(item, best) == Ordering::Greater {
            best = item;
        }
    }
    Some(best)
}
