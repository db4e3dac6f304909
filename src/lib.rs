//! # states-rs: composable integer states in Rust
//!
//! **`states-rs`** is a small library for describing sets of integers as
//! *states*: rules answering "does `x` belong here". States compose, and a
//! deterministic Monte-Carlo *trial* estimates how often a state accepts a
//! uniformly sampled integer.
//!
//! ## Key Features
//!
//! - **One capability**: every state implements [`State`][crate::state::State], which has a single
//!   pure operation, `contains(x)`.
//! - **Leaves**: [`Discrete`][crate::leaf::Discrete] (one value), [`Segment`][crate::leaf::Segment]
//!   (closed interval), [`SetState`][crate::leaf::SetState] (finite set).
//! - **Composites with fixed precedence**: segments with gaps, with additions, or with both.
//!   Gaps beat additions beat segments.
//! - **Combinators**: [`Union`][crate::combine::Union] and
//!   [`Intersection`][crate::combine::Intersection] over borrowed, shared or owned operands,
//!   also spelled `a | b` and `a & b`.
//! - **Boxed states**: the [`factory`] functions return [`StateBox`][crate::factory::StateBox]
//!   handles for heterogeneous storage, with checked down-casting.
//! - **Reproducible trials**: a [`Trial`][crate::trial::Trial] re-seeds its generator on every run,
//!   so estimates are bit-identical across runs and comparable across states.
//!
//! ## Basic Usage
//!
//! ```rust
//! use states_rs::prelude::*;
//!
//! // 1. Build leaves
//! let cont = vec![Segment::new(0, 10), Segment::new(20, 30), Segment::new(40, 50)];
//! let adds = vec![Discrete::new(13), Discrete::new(25), Discrete::new(69)];
//! let gaps = vec![Discrete::new(1), Discrete::new(29), Discrete::new(41)];
//!
//! // 2. Compose: gaps beat additions beat segments
//! let s = GappedAugmented::new(cont, adds, gaps);
//! assert!(s.contains(13));
//! assert!(!s.contains(29));
//! assert!(s.contains(7));
//!
//! // 3. Combine with other states
//! let u = Union::new(&s, Segment::new(100, 200));
//! assert!(u.contains(150));
//!
//! // 4. Estimate the accepted fraction of [0, 100]
//! let config = TrialConfig::new(2021, 0, 100, 1000);
//! let freq = evaluate(&u, &config).unwrap();
//! assert!((0.0..=1.0).contains(&freq));
//! ```
//!
//! ## Core Components
//!
//! - **[`state`]**: the [`State`][crate::state::State] trait.
//! - **[`leaf`]** and **[`composite`]**: concrete states.
//! - **[`combine`]**: union and intersection.
//! - **[`factory`]**: boxed states.
//! - **[`trial`]**: Monte-Carlo estimation.

pub mod combine;
pub mod composite;
pub mod error;
pub mod factory;
mod interval;
pub mod leaf;
pub mod state;
pub mod trial;

pub mod prelude {
    pub use crate::combine::{Intersection, Union};
    pub use crate::composite::{Augmented, Gapped, GappedAugmented};
    pub use crate::error::Error;
    pub use crate::factory::{self, StateBox};
    pub use crate::leaf::{Discrete, Segment, SetState};
    pub use crate::state::State;
    pub use crate::trial::{evaluate, exact_frequency, sweep, Trial, TrialConfig, SCAN_LIMIT};
}
