//! `duel-fuzzy`: rule-based fuzzy inference and the speed controller.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`membership`] | `Triangle` membership function                             |
//! | [`variable`]   | `Universe`, `LinguisticVariable`                           |
//! | [`system`]     | `FuzzySystem<N>`, `FuzzySystemBuilder<N>`, `Inference`      |
//! | [`defuzz`]     | Piecewise-linear centroid                                  |
//! | [`controller`] | `SpeedController`: (speed, curvature) → command in [-1, 1] |
//! | [`error`]      | `FuzzyError`, `FuzzyResult<T>`                              |
//!
//! # Inference
//!
//! Mamdani style: rule strength is the `min` of its antecedent memberships,
//! each rule clips its consequent set at that strength, clipped sets are
//! combined with `max`, and the crisp output is the centroid of the
//! aggregate sampled over the output universe.
//!
//! A system is built once, validated at build time, and then evaluated
//! through `&self`: it holds no per-call state and can be shared freely
//! between threads.

pub mod controller;
pub mod defuzz;
pub mod error;
pub mod membership;
pub mod system;
pub mod variable;


pub use controller::SpeedController;
pub use error::{FuzzyError, FuzzyResult};
pub use membership::Triangle;
pub use system::{FuzzySystem, FuzzySystemBuilder, Inference};
pub use variable::{LinguisticVariable, Universe};
