//! Leaf states: not built from other states.
//!
//! - [`Discrete`]: a single value.
//! - [`Segment`]: a closed interval `[begin, end]`.
//! - [`SetState`]: an arbitrary finite set of values.
//!
//! Construction never fails. In particular, a segment with `end < begin` is
//! valid and simply matches nothing.

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use crate::interval;
use crate::state::State;

/// A state containing exactly one value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Discrete(i64);

impl Discrete {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for Discrete {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl State for Discrete {
    fn contains(&self, x: i64) -> bool {
        x == self.0
    }

    fn segments_in(&self, min: i64, max: i64) -> Option<Vec<Segment>> {
        Some(interval::points_in([self.0], min, max))
    }
}

impl Display for Discrete {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.0)
    }
}

/// A closed interval of integers, both bounds inclusive.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Segment {
    begin: i64,
    end: i64,
}

impl Segment {
    pub const fn new(begin: i64, end: i64) -> Self {
        Self { begin, end }
    }

    /// The explicitly empty segment `[0, -1]`.
    pub const fn empty() -> Self {
        Self::new(0, -1)
    }

    pub const fn begin(&self) -> i64 {
        self.begin
    }
    pub const fn end(&self) -> i64 {
        self.end
    }

    pub const fn is_empty(&self) -> bool {
        self.end < self.begin
    }

    /// Number of integers in the segment (saturates at `u64::MAX`).
    pub const fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.end.abs_diff(self.begin).saturating_add(1)
        }
    }
}

impl Default for Segment {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<(i64, i64)> for Segment {
    fn from((begin, end): (i64, i64)) -> Self {
        Self::new(begin, end)
    }
}

impl State for Segment {
    fn contains(&self, x: i64) -> bool {
        self.begin <= x && x <= self.end
    }

    fn segments_in(&self, min: i64, max: i64) -> Option<Vec<Segment>> {
        let clipped = interval::clip(*self, min, max);
        Some(if clipped.is_empty() { Vec::new() } else { vec![clipped] })
    }

    fn count_in(&self, min: i64, max: i64) -> u64 {
        interval::clip(*self, min, max).len()
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            write!(f, "∅")
        } else {
            write!(f, "[{}, {}]", self.begin, self.end)
        }
    }
}

/// A finite set of integers.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct SetState {
    values: BTreeSet<i64>,
}

impl SetState {
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates the members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.values.iter().copied()
    }
}

impl FromIterator<i64> for SetState {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl State for SetState {
    fn contains(&self, x: i64) -> bool {
        self.values.contains(&x)
    }

    fn segments_in(&self, min: i64, max: i64) -> Option<Vec<Segment>> {
        if min > max {
            return Some(Vec::new());
        }
        let points = self.values.range(min..=max).map(|&v| Segment::new(v, v)).collect();
        Some(interval::normalize(points))
    }

    fn count_in(&self, min: i64, max: i64) -> u64 {
        if min > max {
            return 0;
        }
        self.values.range(min..=max).fold(0, |n, _| n + 1)
    }
}

impl Display for SetState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, x) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use test_log::test;

    #[test]
    fn test_discrete() {
        let mut rng = ChaCha8Rng::seed_from_u64(1903);
        let value = rng.gen_range(0..=100);
        let d = Discrete::new(value);
        for x in -10..=110 {
            assert_eq!(d.contains(x), x == value, "x = {}", x);
        }
    }

    #[test]
    fn test_discrete_extremes() {
        let d = Discrete::new(i64::MIN);
        assert!(d.contains(i64::MIN));
        assert!(!d.contains(i64::MAX));
    }

    #[test]
    fn test_segment() {
        let mut rng = ChaCha8Rng::seed_from_u64(1917);
        let begin = rng.gen_range(0..=100);
        let s = Segment::new(begin, 100);
        for x in -10..=110 {
            assert_eq!(s.contains(x), begin <= x && x <= 100, "x = {}", x);
        }
    }

    #[test]
    fn test_segment_bounds_inclusive() {
        let s = Segment::new(-3, 3);
        assert!(s.contains(-3));
        assert!(s.contains(3));
        assert!(!s.contains(-4));
        assert!(!s.contains(4));
        assert_eq!(s.len(), 7);
    }

    #[test]
    fn test_segment_reversed_matches_nothing() {
        let s = Segment::new(10, 5);
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        for x in -100..=100 {
            assert!(!s.contains(x));
        }
    }

    #[test]
    fn test_segment_empty() {
        let s = Segment::default();
        assert_eq!(s, Segment::empty());
        assert_eq!((s.begin(), s.end()), (0, -1));
        assert!(!s.contains(0));
        assert!(!s.contains(-1));
    }

    #[test]
    fn test_segment_count_in() {
        let s = Segment::new(0, 50);
        assert_eq!(s.count_in(0, 100), 51);
        assert_eq!(s.count_in(40, 60), 11);
        assert_eq!(s.count_in(60, 100), 0);
        assert_eq!(s.count_in(100, 0), 0);
    }

    #[test]
    fn test_set() {
        let s = SetState::new([1, 2, 7, 10, 23, 34, 19, 83, 100, 77]);
        let probes = [83, 100, 5, 77, 2, 1, 20, 35, 4, 10];
        let expected = [true, true, false, true, true, true, false, false, false, true];
        assert_eq!(s.accepted(probes), expected);
    }

    #[test]
    fn test_set_duplicates_collapse() {
        let s: SetState = [3, 1, 3, 2, 1].into_iter().collect();
        assert_eq!(s.len(), 3);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_set_empty() {
        let s = SetState::default();
        assert!(s.is_empty());
        assert!(!s.contains(0));
        assert_eq!(s.count_in(i64::MIN, i64::MAX), 0);
    }

    #[test]
    fn test_set_count_in() {
        let s: SetState = (1..=30).collect();
        assert_eq!(s.count_in(0, 60), 30);
        assert_eq!(s.count_in(10, 19), 10);
    }

    #[test]
    fn test_segments_in() {
        assert_eq!(Discrete::new(5).segments_in(0, 10), Some(vec![Segment::new(5, 5)]));
        assert_eq!(Discrete::new(5).segments_in(6, 10), Some(vec![]));
        assert_eq!(Segment::new(0, 50).segments_in(40, 60), Some(vec![Segment::new(40, 50)]));
        assert_eq!(Segment::empty().segments_in(i64::MIN, i64::MAX), Some(vec![]));

        let set = SetState::new([1, 2, 3, 7, 20]);
        let runs = vec![Segment::new(2, 3), Segment::new(7, 7)];
        assert_eq!(set.segments_in(2, 10), Some(runs));
    }

    #[test]
    fn test_segment_count_in_full_range() {
        let s = Segment::new(0, i64::MAX);
        assert_eq!(s.count_in(i64::MIN, i64::MAX), 1 << 63);
        assert_eq!(Segment::new(i64::MIN, i64::MAX).count_in(i64::MIN, i64::MAX), u64::MAX);
    }

    #[test]
    fn test_display() {
        assert_eq!(Discrete::new(7).to_string(), "{7}");
        assert_eq!(Segment::new(0, 10).to_string(), "[0, 10]");
        assert_eq!(Segment::empty().to_string(), "∅");
        assert_eq!(SetState::new([7, 2, 1]).to_string(), "{1, 2, 7}");
    }
}
