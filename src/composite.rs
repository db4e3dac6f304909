//! Composite states built from ordered lists of leaves.
//!
//! | type                | reject if      | else accept if                 |
//! |---------------------|----------------|--------------------------------|
//! | [`Gapped`]          | any gap        | any segment                    |
//! | [`Augmented`]       | -              | any addition, or any segment   |
//! | [`GappedAugmented`] | any gap        | any addition, then any segment |
//!
//! Exclusion beats inclusion beats the base range. Each composite owns its
//! own copies of the leaves it was built from. Empty lists are valid and
//! never match.

use std::fmt::{Display, Formatter};

use crate::interval;
use crate::leaf::{Discrete, Segment};
use crate::state::State;

fn any_contains<S: State>(states: &[S], x: i64) -> bool {
    states.iter().any(|s| s.contains(x))
}

fn values(items: &[Discrete]) -> impl Iterator<Item = i64> + '_ {
    items.iter().map(|d| d.value())
}

/// Segments of `cont` and points of `adds` inside `[min, max]`, merged.
fn covered(cont: &[Segment], adds: &[Discrete], min: i64, max: i64) -> Vec<Segment> {
    let mut runs: Vec<Segment> = cont.iter().map(|&s| interval::clip(s, min, max)).collect();
    runs.extend(interval::points_in(values(adds), min, max));
    interval::normalize(runs)
}

fn write_joined<T: Display>(f: &mut Formatter<'_>, items: &[T], sep: &str) -> std::fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", sep)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

fn write_values(f: &mut Formatter<'_>, items: &[Discrete]) -> std::fmt::Result {
    write!(f, "{{")?;
    let values: Vec<i64> = items.iter().map(|d| d.value()).collect();
    write_joined(f, values.as_slice(), ", ")?;
    write!(f, "}}")
}

fn write_segments(f: &mut Formatter<'_>, cont: &[Segment]) -> std::fmt::Result {
    if cont.is_empty() {
        write!(f, "∅")
    } else {
        write_joined(f, cont, " ∪ ")
    }
}

/// Union of segments with punctual exclusions.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Gapped {
    cont: Vec<Segment>,
    gaps: Vec<Discrete>,
}

impl Gapped {
    pub fn new(
        cont: impl IntoIterator<Item = Segment>,
        gaps: impl IntoIterator<Item = Discrete>,
    ) -> Self {
        Self {
            cont: cont.into_iter().collect(),
            gaps: gaps.into_iter().collect(),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.cont
    }
    pub fn gaps(&self) -> &[Discrete] {
        &self.gaps
    }
}

impl State for Gapped {
    fn contains(&self, x: i64) -> bool {
        if any_contains(&self.gaps, x) {
            return false;
        }
        any_contains(&self.cont, x)
    }

    fn segments_in(&self, min: i64, max: i64) -> Option<Vec<Segment>> {
        let runs = covered(&self.cont, &[], min, max);
        Some(interval::remove_points(&runs, values(&self.gaps)))
    }
}

impl Display for Gapped {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_segments(f, &self.cont)?;
        if !self.gaps.is_empty() {
            write!(f, " \\ ")?;
            write_values(f, &self.gaps)?;
        }
        Ok(())
    }
}

/// Union of segments with punctual inclusions.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Augmented {
    cont: Vec<Segment>,
    adds: Vec<Discrete>,
}

impl Augmented {
    pub fn new(
        cont: impl IntoIterator<Item = Segment>,
        adds: impl IntoIterator<Item = Discrete>,
    ) -> Self {
        Self {
            cont: cont.into_iter().collect(),
            adds: adds.into_iter().collect(),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.cont
    }
    pub fn additions(&self) -> &[Discrete] {
        &self.adds
    }
}

impl State for Augmented {
    fn contains(&self, x: i64) -> bool {
        any_contains(&self.adds, x) || any_contains(&self.cont, x)
    }

    fn segments_in(&self, min: i64, max: i64) -> Option<Vec<Segment>> {
        Some(covered(&self.cont, &self.adds, min, max))
    }
}

impl Display for Augmented {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_segments(f, &self.cont)?;
        if !self.adds.is_empty() {
            write!(f, " ∪ ")?;
            write_values(f, &self.adds)?;
        }
        Ok(())
    }
}

/// Union of segments with punctual inclusions and exclusions.
///
/// Precedence, strictly in this order:
/// 1. any gap matches: reject;
/// 2. any addition matches: accept;
/// 3. accept iff any segment matches.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct GappedAugmented {
    cont: Vec<Segment>,
    adds: Vec<Discrete>,
    gaps: Vec<Discrete>,
}

impl GappedAugmented {
    pub fn new(
        cont: impl IntoIterator<Item = Segment>,
        adds: impl IntoIterator<Item = Discrete>,
        gaps: impl IntoIterator<Item = Discrete>,
    ) -> Self {
        Self {
            cont: cont.into_iter().collect(),
            adds: adds.into_iter().collect(),
            gaps: gaps.into_iter().collect(),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.cont
    }
    pub fn additions(&self) -> &[Discrete] {
        &self.adds
    }
    pub fn gaps(&self) -> &[Discrete] {
        &self.gaps
    }
}

impl State for GappedAugmented {
    fn contains(&self, x: i64) -> bool {
        if any_contains(&self.gaps, x) {
            return false;
        }
        if any_contains(&self.adds, x) {
            return true;
        }
        any_contains(&self.cont, x)
    }

    fn segments_in(&self, min: i64, max: i64) -> Option<Vec<Segment>> {
        let runs = covered(&self.cont, &self.adds, min, max);
        Some(interval::remove_points(&runs, values(&self.gaps)))
    }
}

impl Display for GappedAugmented {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        write_segments(f, &self.cont)?;
        if !self.adds.is_empty() {
            write!(f, " ∪ ")?;
            write_values(f, &self.adds)?;
        }
        write!(f, ")")?;
        if !self.gaps.is_empty() {
            write!(f, " \\ ")?;
            write_values(f, &self.gaps)?;
        }
        Ok(())
    }
}
