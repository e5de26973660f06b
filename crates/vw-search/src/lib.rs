//! `vw-search`: shortest paths over the vacuum-world grid.
//!
//! # Crate layout
//!
//! | Module    | Contents                                  |
//! |-----------|-------------------------------------------|
//! | [`path`]  | `Path`: an ordered cell sequence         |
//! | [`astar`] | `Pathfinder` trait, `AStar`               |
//!
//! Search state (frontier, g-scores, predecessors) lives only for the
//! duration of one `find_path` call.

pub mod astar;
pub mod path;


pub use astar::{AStar, Pathfinder};
pub use path::Path;
