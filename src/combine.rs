//! Logical combinators over two arbitrary states.
//!
//! [`Union`] and [`Intersection`] are generic over their operands, so the
//! caller decides the ownership:
//!
//! - borrowed: `Union::new(&a, &b)`: the borrow checker guarantees that `a`
//!   and `b` outlive the union;
//! - shared: `Union::new(Rc::clone(&a), Rc::clone(&b))`;
//! - owned: `a | b` moves both operands into the union.
//!
//! ```
//! use states_rs::prelude::*;
//!
//! let low = Segment::new(0, 10);
//! let high = Segment::new(20, 30);
//! let both = Union::new(&low, &high);
//! assert!(both.contains(5) && both.contains(25) && !both.contains(15));
//!
//! let narrow = Segment::new(0, 50) & Segment::new(40, 100);
//! assert!(narrow.contains(45) && !narrow.contains(35));
//! ```

use std::fmt::{Display, Formatter};
use std::ops::{BitAnd, BitOr};

use crate::composite::{Augmented, Gapped, GappedAugmented};
use crate::factory::StateBox;
use crate::interval;
use crate::leaf::{Discrete, Segment, SetState};
use crate::state::State;

/// Logical OR of two states.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Union<A, B> {
    left: A,
    right: B,
}

impl<A, B> Union<A, B>
where
    A: State,
    B: State,
{
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> &A {
        &self.left
    }
    pub fn right(&self) -> &B {
        &self.right
    }

    pub fn into_parts(self) -> (A, B) {
        (self.left, self.right)
    }
}

impl<A, B> State for Union<A, B>
where
    A: State,
    B: State,
{
    fn contains(&self, x: i64) -> bool {
        let l = self.left.contains(x);
        let r = self.right.contains(x);
        l || r
    }

    fn segments_in(&self, min: i64, max: i64) -> Option<Vec<Segment>> {
        let mut runs = self.left.segments_in(min, max)?;
        runs.extend(self.right.segments_in(min, max)?);
        Some(interval::normalize(runs))
    }
}

impl<A, B> Display for Union<A, B>
where
    A: Display,
    B: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} ∪ {})", self.left, self.right)
    }
}

/// Logical AND of two states.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Intersection<A, B> {
    left: A,
    right: B,
}

impl<A, B> Intersection<A, B>
where
    A: State,
    B: State,
{
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> &A {
        &self.left
    }
    pub fn right(&self) -> &B {
        &self.right
    }

    pub fn into_parts(self) -> (A, B) {
        (self.left, self.right)
    }
}

impl<A, B> State for Intersection<A, B>
where
    A: State,
    B: State,
{
    fn contains(&self, x: i64) -> bool {
        let l = self.left.contains(x);
        let r = self.right.contains(x);
        l && r
    }

    fn segments_in(&self, min: i64, max: i64) -> Option<Vec<Segment>> {
        let l = self.left.segments_in(min, max)?;
        let r = self.right.segments_in(min, max)?;
        Some(interval::intersect(&l, &r))
    }
}

impl<A, B> Display for Intersection<A, B>
where
    A: Display,
    B: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} ∩ {})", self.left, self.right)
    }
}

macro_rules! impl_set_ops {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<R: State> BitOr<R> for $ty {
                type Output = Union<$ty, R>;

                fn bitor(self, rhs: R) -> Self::Output {
                    Union::new(self, rhs)
                }
            }

            impl<R: State> BitAnd<R> for $ty {
                type Output = Intersection<$ty, R>;

                fn bitand(self, rhs: R) -> Self::Output {
                    Intersection::new(self, rhs)
                }
            }
        )*
    };
}

impl_set_ops!(Discrete, Segment, SetState, Gapped, Augmented, GappedAugmented, StateBox);

impl<A: State, B: State, R: State> BitOr<R> for Union<A, B> {
    type Output = Union<Self, R>;

    fn bitor(self, rhs: R) -> Self::Output {
        Union::new(self, rhs)
    }
}

impl<A: State, B: State, R: State> BitAnd<R> for Union<A, B> {
    type Output = Intersection<Self, R>;

    fn bitand(self, rhs: R) -> Self::Output {
        Intersection::new(self, rhs)
    }
}

impl<A: State, B: State, R: State> BitOr<R> for Intersection<A, B> {
    type Output = Union<Self, R>;

    fn bitor(self, rhs: R) -> Self::Output {
        Union::new(self, rhs)
    }
}

impl<A: State, B: State, R: State> BitAnd<R> for Intersection<A, B> {
    type Output = Intersection<Self, R>;

    fn bitand(self, rhs: R) -> Self::Output {
        Intersection::new(self, rhs)
    }
}
