//! `vw-core`: foundational types for the vacuum-world simulator.
//!
//! This crate is a dependency of every other `vw-*` crate.  It has no `vw-*`
//! dependencies and only a handful of external ones (`rand`, `rustc-hash`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`position`]   | `Position`, Manhattan distance                        |
//! | [`action`]     | `Action`, `ActionKind`                                |
//! | [`grid`]       | `Grid`: dirt set, bounds, agent position, step count |
//! | [`time`]       | `Tick`, `SimConfig`                                   |
//! | [`rng`]        | `SimRng`, `scatter_dirt`                              |
//! | [`error`]      | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to value and config types.  |

pub mod action;
pub mod error;
pub mod grid;
pub mod position;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use action::{Action, ActionKind};
pub use error::{CoreError, CoreResult};
pub use grid::Grid;
pub use position::Position;
pub use rng::{SimRng, scatter_dirt};
pub use time::{SimConfig, Tick};
