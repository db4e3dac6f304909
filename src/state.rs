//! The [`State`] capability: membership of an integer in a set.
//!
//! Every state in this crate is immutable once built, so [`State::contains`]
//! is a pure function that can be called any number of times (and from any
//! number of threads, when the state itself is `Sync`).

use std::fmt::Debug;
use std::rc::Rc;
use std::sync::Arc;

use crate::interval;
use crate::leaf::Segment;

/// A rule answering "does `x` belong to this set".
pub trait State: Debug {
    /// Returns `true` if `x` belongs to the set described by this state.
    ///
    /// Defined for every `i64`: there is no "out of domain" input.
    fn contains(&self, x: i64) -> bool;

    /// Membership of every probe, in order.
    fn accepted<I>(&self, probes: I) -> Vec<bool>
    where
        I: IntoIterator<Item = i64>,
        Self: Sized,
    {
        probes.into_iter().map(|x| self.contains(x)).collect()
    }

    /// The accepted integers of `[min, max]` as sorted, disjoint,
    /// non-adjacent segments, or `None` when the state cannot describe
    /// itself that way.
    ///
    /// Every state of this crate answers `Some`, in time independent of the
    /// window width.
    fn segments_in(&self, _min: i64, _max: i64) -> Option<Vec<Segment>> {
        None
    }

    /// Exact number of accepted integers in the inclusive window `[min, max]`.
    ///
    /// Returns 0 for a reversed window. Uses [`State::segments_in`] when
    /// available, otherwise checks the window one integer at a time.
    fn count_in(&self, min: i64, max: i64) -> u64 {
        if min > max {
            return 0;
        }
        match self.segments_in(min, max) {
            Some(runs) => interval::count(&runs),
            None => (min..=max).filter(|&x| self.contains(x)).fold(0, |n, _| n + 1),
        }
    }
}

impl<S> State for &S
where
    S: State + ?Sized,
{
    fn contains(&self, x: i64) -> bool {
        (**self).contains(x)
    }

    fn segments_in(&self, min: i64, max: i64) -> Option<Vec<Segment>> {
        (**self).segments_in(min, max)
    }

    fn count_in(&self, min: i64, max: i64) -> u64 {
        (**self).count_in(min, max)
    }
}

impl<S> State for Box<S>
where
    S: State + ?Sized,
{
    fn contains(&self, x: i64) -> bool {
        (**self).contains(x)
    }

    fn segments_in(&self, min: i64, max: i64) -> Option<Vec<Segment>> {
        (**self).segments_in(min, max)
    }

    fn count_in(&self, min: i64, max: i64) -> u64 {
        (**self).count_in(min, max)
    }
}

impl<S> State for Rc<S>
where
    S: State + ?Sized,
{
    fn contains(&self, x: i64) -> bool {
        (**self).contains(x)
    }

    fn segments_in(&self, min: i64, max: i64) -> Option<Vec<Segment>> {
        (**self).segments_in(min, max)
    }

    fn count_in(&self, min: i64, max: i64) -> u64 {
        (**self).count_in(min, max)
    }
}

impl<S> State for Arc<S>
where
    S: State + ?Sized,
{
    fn contains(&self, x: i64) -> bool {
        (**self).contains(x)
    }

    fn segments_in(&self, min: i64, max: i64) -> Option<Vec<Segment>> {
        (**self).segments_in(min, max)
    }

    fn count_in(&self, min: i64, max: i64) -> u64 {
        (**self).count_in(min, max)
    }
}
