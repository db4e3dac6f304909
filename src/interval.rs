//! Arithmetic on normalized lists of segments.
//!
//! A list is normalized when its segments are non-empty, sorted by `begin`,
//! and neither overlap nor touch. Functions taking lists expect normalized
//! input; `normalize`, `remove_points` and `intersect` return normalized
//! lists.

use crate::leaf::Segment;

/// Clips `segment` to the window `[min, max]`. The result may be empty.
pub(crate) fn clip(segment: Segment, min: i64, max: i64) -> Segment {
    Segment::new(segment.begin().max(min), segment.end().min(max))
}

/// The one-point segments of `values` that fall inside `[min, max]`.
pub(crate) fn points_in(values: impl IntoIterator<Item = i64>, min: i64, max: i64) -> Vec<Segment> {
    values
        .into_iter()
        .filter(|v| (min..=max).contains(v))
        .map(|v| Segment::new(v, v))
        .collect()
}

/// Sorts `segments` and merges the overlapping or adjacent ones.
pub(crate) fn normalize(mut segments: Vec<Segment>) -> Vec<Segment> {
    segments.retain(|s| !s.is_empty());
    segments.sort_unstable_by_key(|s| s.begin());

    let mut merged: Vec<Segment> = Vec::with_capacity(segments.len());
    for segment in segments {
        match merged.last_mut() {
            Some(last) if segment.begin() <= last.end().saturating_add(1) => {
                if segment.end() > last.end() {
                    *last = Segment::new(last.begin(), segment.end());
                }
            }
            _ => merged.push(segment),
        }
    }
    merged
}

/// Removes every value of `points` from the normalized list `runs`.
pub(crate) fn remove_points(
    runs: &[Segment],
    points: impl IntoIterator<Item = i64>,
) -> Vec<Segment> {
    let mut points: Vec<i64> = points.into_iter().collect();
    points.sort_unstable();
    points.dedup();
    let mut points = points.into_iter().peekable();

    let mut out = Vec::with_capacity(runs.len());
    for run in runs {
        let (mut begin, end) = (run.begin(), run.end());
        let mut open = true;
        while let Some(&p) = points.peek() {
            if p > end {
                break;
            }
            points.next();
            if p < begin {
                continue;
            }
            if p > begin {
                out.push(Segment::new(begin, p - 1));
            }
            match p.checked_add(1) {
                Some(next) if next <= end => begin = next,
                _ => {
                    open = false;
                    break;
                }
            }
        }
        if open {
            out.push(Segment::new(begin, end));
        }
    }
    out
}

/// Intersection of two normalized lists.
pub(crate) fn intersect(a: &[Segment], b: &[Segment]) -> Vec<Segment> {
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        let part = Segment::new(a[i].begin().max(b[j].begin()), a[i].end().min(b[j].end()));
        if !part.is_empty() {
            out.push(part);
        }
        if a[i].end() < b[j].end() {
            i += 1;
        } else {
            j += 1;
        }
    }
    out
}

/// Number of integers covered by a normalized list (saturates at `u64::MAX`).
pub(crate) fn count(runs: &[Segment]) -> u64 {
    runs.iter().fold(0u64, |n, s| n.saturating_add(s.len()))
}
