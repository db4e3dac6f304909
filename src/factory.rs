//! Heap-allocated, dynamically typed states.
//!
//! The factory functions build one composite or combinator each and hand it
//! back as a [`StateBox`]: a single-owner handle that frees the state when
//! dropped. Boxes are useful to keep heterogeneous states in one collection,
//! or to pass a state across a boundary that cannot name its concrete type.
//! When the concrete type is known at the call site, the direct constructors
//! are equivalent.
//!
//! A box remembers its concrete type, so it can be read back with
//! [`StateBox::downcast_ref`] and [`StateBox::downcast`], which fail with
//! [`Error::TypeMismatch`] instead of misinterpreting the state.

use std::any::{type_name, Any};

use log::debug;

use crate::combine::{Intersection, Union};
use crate::composite::{Augmented, Gapped, GappedAugmented};
use crate::error::{Error, Result};
use crate::leaf::{Discrete, Segment};
use crate::state::State;

trait Erased: State + Any {
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
    fn type_name(&self) -> &'static str;
}

impl<T> Erased for T
where
    T: State + Any,
{
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }
}

/// Owning handle to a state of any concrete type.
#[derive(Debug)]
pub struct StateBox(Box<dyn Erased>);

impl StateBox {
    pub fn new<T>(state: T) -> Self
    where
        T: State + 'static,
    {
        Self(Box::new(state))
    }

    /// Name of the concrete type behind the handle.
    pub fn type_name(&self) -> &'static str {
        // Deref first: `Box<dyn Erased>` is itself `Erased`.
        (*self.0).type_name()
    }

    pub fn is<T>(&self) -> bool
    where
        T: State + 'static,
    {
        (*self.0).as_any().is::<T>()
    }

    /// Borrows the state as its concrete type `T`.
    pub fn downcast_ref<T>(&self) -> Result<&T>
    where
        T: State + 'static,
    {
        (*self.0).as_any().downcast_ref::<T>().ok_or_else(|| Error::TypeMismatch {
            expected: type_name::<T>(),
            actual: self.type_name(),
        })
    }

    /// Takes the state back out of the box as its concrete type `T`.
    pub fn downcast<T>(self) -> Result<T>
    where
        T: State + 'static,
    {
        let actual = self.type_name();
        match self.0.into_any().downcast::<T>() {
            Ok(state) => Ok(*state),
            Err(_) => Err(Error::TypeMismatch {
                expected: type_name::<T>(),
                actual,
            }),
        }
    }
}

impl State for StateBox {
    fn contains(&self, x: i64) -> bool {
        (*self.0).contains(x)
    }

    fn segments_in(&self, min: i64, max: i64) -> Option<Vec<Segment>> {
        (*self.0).segments_in(min, max)
    }

    fn count_in(&self, min: i64, max: i64) -> u64 {
        (*self.0).count_in(min, max)
    }
}

pub fn gapped(
    cont: impl IntoIterator<Item = Segment>,
    gaps: impl IntoIterator<Item = Discrete>,
) -> StateBox {
    let state = Gapped::new(cont, gaps);
    debug!("gapped({:?})", state);
    StateBox::new(state)
}

pub fn augmented(
    cont: impl IntoIterator<Item = Segment>,
    adds: impl IntoIterator<Item = Discrete>,
) -> StateBox {
    let state = Augmented::new(cont, adds);
    debug!("augmented({:?})", state);
    StateBox::new(state)
}

pub fn gapped_augmented(
    cont: impl IntoIterator<Item = Segment>,
    adds: impl IntoIterator<Item = Discrete>,
    gaps: impl IntoIterator<Item = Discrete>,
) -> StateBox {
    let state = GappedAugmented::new(cont, adds, gaps);
    debug!("gapped_augmented({:?})", state);
    StateBox::new(state)
}

/// Boxes the union of `left` and `right`.
///
/// The box must own (or share) its operands, so pass them by value, as
/// `Rc`/`Arc`, or as other boxes.
pub fn union<A, B>(left: A, right: B) -> StateBox
where
    A: State + 'static,
    B: State + 'static,
{
    debug!("union({:?}, {:?})", left, right);
    StateBox::new(Union::new(left, right))
}

/// Boxes the intersection of `left` and `right`.
pub fn intersection<A, B>(left: A, right: B) -> StateBox
where
    A: State + 'static,
    B: State + 'static,
{
    debug!("intersection({:?}, {:?})", left, right);
    StateBox::new(Intersection::new(left, right))
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::leaf::SetState;

    use test_log::test;

    fn cont() -> Vec<Segment> {
        vec![Segment::new(0, 10), Segment::new(20, 30), Segment::new(40, 50)]
    }

    fn discretes(values: &[i64]) -> Vec<Discrete> {
        values.iter().copied().map(Discrete::new).collect()
    }

    #[test]
    fn test_factory_matches_direct_construction() {
        let boxed = gapped_augmented(cont(), discretes(&[13, 25, 69]), discretes(&[1, 29, 41]));
        let direct =
            GappedAugmented::new(cont(), discretes(&[13, 25, 69]), discretes(&[1, 29, 41]));
        for x in -10..=110 {
            assert_eq!(boxed.contains(x), direct.contains(x), "x = {}", x);
        }
    }

    #[test]
    fn test_augmented_builds_augmented() {
        let boxed = augmented(cont(), discretes(&[13, 25, 69]));
        assert!(boxed.is::<Augmented>());
        assert!(!boxed.is::<Gapped>());
        let probes = [13, 25, 69, 100, 3, 37];
        let expected = [true, true, true, false, true, false];
        assert_eq!(boxed.accepted(probes), expected);
    }

    #[test]
    fn test_downcast_ref() {
        let boxed = gapped(cont(), discretes(&[7]));
        let state = boxed.downcast_ref::<Gapped>().unwrap();
        assert_eq!(state.gaps(), &[Discrete::new(7)]);
    }

    #[test]
    fn test_downcast_ref_mismatch() {
        let boxed = gapped(cont(), discretes(&[7]));
        let err = boxed.downcast_ref::<Augmented>().unwrap_err();
        assert_eq!(
            err,
            Error::TypeMismatch {
                expected: type_name::<Augmented>(),
                actual: type_name::<Gapped>(),
            }
        );
    }

    #[test]
    fn test_downcast() {
        let boxed = StateBox::new(Segment::new(1, 2));
        assert_eq!(boxed.downcast::<Segment>(), Ok(Segment::new(1, 2)));

        let boxed = StateBox::new(Segment::new(1, 2));
        let err = boxed.downcast::<Discrete>().unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn test_heterogeneous_collection() {
        let states: Vec<StateBox> = vec![
            StateBox::new(Discrete::new(5)),
            StateBox::new(Segment::new(0, 3)),
            StateBox::new(SetState::new([8, 9])),
            gapped(cont(), discretes(&[7])),
        ];
        let accepting: Vec<usize> = states
            .iter()
            .enumerate()
            .filter(|(_, s)| s.contains(5))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(accepting, vec![0, 3]);
    }

    #[test]
    fn test_union_and_intersection_of_boxes() {
        let u = union(gapped(cont(), discretes(&[7])), Discrete::new(7));
        assert!(u.contains(7));
        assert!(u.contains(8));

        let i = intersection(augmented(cont(), discretes(&[15])), Segment::new(12, 22));
        assert_eq!(i.count_in(0, 100), 4); // 15, 20, 21, 22
    }

    #[test]
    fn test_union_of_shared_operands() {
        let a: Rc<dyn State> = Rc::new(Segment::new(0, 10));
        let b: Rc<dyn State> = Rc::new(Segment::new(10, 30));
        let u = union(Rc::clone(&a), Rc::clone(&b));
        assert_eq!(Rc::strong_count(&a), 2);
        assert_eq!(u.count_in(0, 60), 31);
        drop(u);
        assert_eq!(Rc::strong_count(&a), 1);
    }

    #[test]
    fn test_boxed_count_in_full_range() {
        let u = union(gapped(cont(), discretes(&[7])), augmented(cont(), discretes(&[69])));
        assert_eq!(u.count_in(i64::MIN, i64::MAX), 34);
        assert!(u.segments_in(0, 100).is_some());
    }

    #[test]
    fn test_type_name() {
        let boxed = StateBox::new(Discrete::new(1));
        assert_eq!(boxed.type_name(), type_name::<Discrete>());
    }
}
