//! Runtime policy selection, e.g. from a config file or command line.

use std::fmt;
use std::str::FromStr;

use crate::{DecisionPolicy, GoalAgent, PolicyError, PolicyResult, UtilityAgent, UtilityParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PolicyKind {
    /// [`GoalAgent`] with A* search.
    Goal,
    /// [`UtilityAgent`].
    #[default]
    Utility,
}

impl PolicyKind {
    /// Construct the policy.  `params` only matters for `Utility`.
    pub fn build(self, params: UtilityParams) -> PolicyResult<Box<dyn DecisionPolicy>> {
        let policy: Box<dyn DecisionPolicy> = match self {
            PolicyKind::Goal => Box::new(GoalAgent::new()),
            PolicyKind::Utility => Box::new(UtilityAgent::new(params)?),
        };
        Ok(policy)
    }
}

impl FromStr for PolicyKind {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "goal" => Ok(PolicyKind::Goal),
            "utility" => Ok(PolicyKind::Utility),
            other => Err(PolicyError::Config(format!("unknown policy '{other}'"))),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PolicyKind::Goal => "goal",
            PolicyKind::Utility => "utility",
        })
    }
}
