//! `vw-sim`: the tick loop that drives one policy against one grid.
//!
//! # Tick loop
//!
//! ```text
//! while ticks < config.max_steps:
//!   ① if the grid is clean        → stop (Outcome::Cleaned)
//!   ② action = policy.decide(grid)
//!   ③ apply:
//!        Suck     → clean the agent's cell, or record Nothing if clean
//!        Move(t)  → grid.move_agent(t)
//!        Stay     → nothing but the tick
//!   ④ append (tick, action, position) to the History
//! ```
//!
//! Every tick advances the grid's step counter exactly once.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use vw_core::Position;
//! use vw_policy::GoalAgent;
//! use vw_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(5, 4, GoalAgent::new())
//!     .dirt([Position::new(4, 0), Position::new(2, 1)])
//!     .max_steps(100)
//!     .build()?;
//! let outcome = sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod history;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use history::{History, Record};
pub use observer::{NoopObserver, RenderObserver, SimObserver};
pub use sim::{Outcome, Sim};
