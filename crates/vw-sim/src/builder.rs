//! Fluent builder for constructing a [`Sim`].

use vw_core::{Grid, Position, SimConfig, SimRng, scatter_dirt};
use vw_policy::{DecisionPolicy, PolicyKind, UtilityParams};

use crate::{Sim, SimResult};

/// Where the initial dirt comes from.
enum DirtSource {
    Cells(Vec<Position>),
    /// Each cell dirty with this probability, drawn from `config.seed`.
    Random(f64),
}

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - grid `width` and `height` (must be positive)
/// - `P: DecisionPolicy`
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                  |
/// |------------------------|--------------------------|
/// | `.config(c)`           | `SimConfig::default()`   |
/// | `.max_steps(n)`        | `100`                    |
/// | `.agent_start(p)`      | `(0, 0)`                 |
/// | `.dirt(cells)`         | no dirt                  |
/// | `.random_dirt(d)`      | none                     |
///
/// `.dirt` and `.random_dirt` replace each other; the last call wins.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(5, 4, UtilityAgent::new(params)?)
///     .random_dirt(0.5)
///     .config(config)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<P: DecisionPolicy> {
    width:       i32,
    height:      i32,
    config:      SimConfig,
    agent_start: Position,
    dirt:        DirtSource,
    policy:      P,
}

impl<P: DecisionPolicy> SimBuilder<P> {
    pub fn new(width: i32, height: i32, policy: P) -> Self {
        Self {
            width,
            height,
            config:      SimConfig::default(),
            agent_start: Position::new(0, 0),
            dirt:        DirtSource::Cells(Vec::new()),
            policy,
        }
    }

    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    /// Override only the tick budget of the current config.
    pub fn max_steps(mut self, max_steps: u64) -> Self {
        self.config.max_steps = max_steps;
        self
    }

    pub fn agent_start(mut self, start: Position) -> Self {
        self.agent_start = start;
        self
    }

    /// Use exactly these dirty cells.
    pub fn dirt<I: IntoIterator<Item = Position>>(mut self, cells: I) -> Self {
        self.dirt = DirtSource::Cells(cells.into_iter().collect());
        self
    }

    /// Scatter dirt at random with the given per-cell probability, seeded
    /// from the config's `seed` at build time.
    pub fn random_dirt(mut self, density: f64) -> Self {
        self.dirt = DirtSource::Random(density);
        self
    }

    /// Validate inputs, lay out the dirt, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        let dirt = match self.dirt {
            DirtSource::Cells(cells) => cells,
            DirtSource::Random(density) => {
                let mut rng = SimRng::new(self.config.seed);
                scatter_dirt(self.width, self.height, density, &mut rng)?
            }
        };
        let grid = Grid::new(self.width, self.height, dirt, self.agent_start)?;
        Ok(Sim::new(self.config, grid, self.policy))
    }
}

impl SimBuilder<Box<dyn DecisionPolicy>> {
    /// Builder for a policy chosen at runtime.
    pub fn for_kind(
        width:  i32,
        height: i32,
        kind:   PolicyKind,
        params: UtilityParams,
    ) -> SimResult<Self> {
        Ok(Self::new(width, height, kind.build(params)?))
    }
}
