//! `vw-policy`: how the cleaning agent decides what to do each tick.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`model`]   | `DecisionPolicy` trait                                     |
//! | [`goal`]    | `GoalAgent`: walk an A* path to the nearest dirt          |
//! | [`utility`] | `UtilityAgent`, `UtilityParams`: greedy one-step scoring  |
//! | [`idle`]    | `IdlePolicy`: never moves                                 |
//! | [`kind`]    | `PolicyKind`: runtime selection by name                   |
//! | [`error`]   | `PolicyError`, `PolicyResult<T>`                           |
//!
//! # Design notes
//!
//! Policies read the grid and return an [`Action`][vw_core::Action]; they
//! never mutate it.  Applying the action (and paying for the tick) is the
//! simulation loop's job, which keeps the loop policy-agnostic.

pub mod error;
pub mod goal;
pub mod idle;
pub mod kind;
pub mod model;
pub mod utility;


pub use error::{PolicyError, PolicyResult};
pub use goal::GoalAgent;
pub use idle::IdlePolicy;
pub use kind::PolicyKind;
pub use model::DecisionPolicy;
pub use utility::{UtilityAgent, UtilityParams};
