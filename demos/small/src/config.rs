//! Demo configuration, optionally loaded from a JSON file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use vw_core::{Position, SimConfig};
use vw_policy::{PolicyKind, UtilityParams};

/// Everything one demo run needs.  Missing fields fall back to
/// [`DemoConfig::default`], except `dirt`, which falls back to random
/// scattering.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub width:       i32,
    pub height:      i32,
    pub agent_start: Position,
    /// Explicit dirt cells.  When absent, dirt is scattered at `density`
    /// using `sim.seed`.
    #[serde(default)]
    pub dirt:        Option<Vec<Position>>,
    pub density:     f64,
    /// Policies to run, one after another, on identical initial grids.
    pub policies:    Vec<PolicyKind>,
    pub utility:     UtilityParams,
    pub sim:         SimConfig,
    /// Directory for `history.csv`/`summary.csv`, one subdirectory per policy.
    pub output_dir:  Option<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width:       5,
            height:      4,
            agent_start: Position::new(0, 0),
            dirt:        Some(vec![
                Position::new(4, 0),
                Position::new(2, 1),
                Position::new(1, 3),
                Position::new(3, 2),
            ]),
            density:     0.5,
            policies:    vec![PolicyKind::Goal, PolicyKind::Utility],
            utility:     UtilityParams::default(),
            sim:         SimConfig { max_steps: 100, seed: 42, verbose: true },
            output_dir:  None,
        }
    }
}

impl DemoConfig {
    /// The built-in scenarios: the fixed 5x4 layout, then a seeded random
    /// scatter on the same grid.
    pub fn builtin() -> Vec<(&'static str, Self)> {
        let fixed = Self::default();
        let random = Self { dirt: None, ..fixed.clone() };
        vec![("fixed layout", fixed), ("random layout", random)]
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}
