//! small: run both cleaning policies on one grid and compare.
//!
//! Usage: `small [config.json]`.  Without a config file the fixed 5x4 layout
//! runs first, then a seeded random layout on the same grid, both with
//! verbose rendering on.  Set `RUST_LOG=debug` to see
//! one log line per tick.

mod config;

use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
use vw_output::{CsvWriter, OutputObserver};
use vw_policy::PolicyKind;
use vw_sim::{Outcome, RenderObserver, SimBuilder, SimObserver};

use config::DemoConfig;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

/// Fans every hook out to an optional renderer and an optional CSV writer.
struct DemoObserver {
    render: Option<RenderObserver<io::Stdout>>,
    output: Option<OutputObserver<CsvWriter>>,
}

impl SimObserver for DemoObserver {
    fn on_tick_start(&mut self, tick: vw_core::Tick, grid: &vw_core::Grid) {
        self.render.on_tick_start(tick, grid);
    }

    fn on_record(&mut self, record: &vw_sim::Record, grid: &vw_core::Grid) {
        self.render.on_record(record, grid);
        self.output.on_record(record, grid);
    }

    fn on_sim_end(&mut self, outcome: &Outcome, grid: &vw_core::Grid) {
        self.render.on_sim_end(outcome, grid);
        self.output.on_sim_end(outcome, grid);
    }
}

fn run_one(cfg: &DemoConfig, kind: PolicyKind) -> Result<Outcome> {
    let builder = SimBuilder::for_kind(cfg.width, cfg.height, kind, cfg.utility)?
        .config(cfg.sim.clone())
        .agent_start(cfg.agent_start);
    let builder = match &cfg.dirt {
        Some(cells) => builder.dirt(cells.iter().copied()),
        None => builder.random_dirt(cfg.density),
    };
    let mut sim = builder.build()?;

    let output = match &cfg.output_dir {
        Some(dir) => {
            let dir = PathBuf::from(dir).join(kind.to_string());
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("creating {}", dir.display()))?;
            Some(OutputObserver::new(CsvWriter::new(&dir)?))
        }
        None => None,
    };
    let mut obs = DemoObserver {
        render: cfg.sim.verbose.then(|| RenderObserver::new(io::stdout())),
        output,
    };

    info!(policy = %kind, width = cfg.width, height = cfg.height, dirt = sim.grid.dirt_count(), "starting run");
    let t0 = Instant::now();
    let outcome = sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.render.as_mut().and_then(|r| r.take_error()) {
        warn!("render error: {e}");
    }
    if let Some(e) = obs.output.as_mut().and_then(|o| o.take_error()) {
        warn!("output error: {e}");
    }

    println!();
    println!("[{kind}] {outcome} ({:.3} ms)", elapsed.as_secs_f64() * 1e3);
    println!("History (first 20 steps):");
    for rec in sim.history().iter().take(20) {
        println!("  {:<5} {:<16} {}", rec.tick.to_string(), rec.action.to_string(), rec.position);
    }
    println!();

    Ok(outcome)
}

fn run_scenario(label: &str, cfg: &DemoConfig) -> Result<()> {
    println!("=== small: vacuum world, {label} ===");
    println!(
        "Grid: {}x{}  |  Budget: {} ticks  |  Seed: {}",
        cfg.width, cfg.height, cfg.sim.max_steps, cfg.sim.seed
    );
    println!();

    let mut results = Vec::with_capacity(cfg.policies.len());
    for &kind in &cfg.policies {
        results.push((kind, run_one(cfg, kind)?));
    }

    println!("{:<10} {:<18} {:<8} {:<10}", "Policy", "Outcome", "Ticks", "Dirt left");
    println!("{}", "-".repeat(48));
    for (kind, outcome) in results {
        println!(
            "{:<10} {:<18} {:<8} {:<10}",
            kind.to_string(),
            outcome.label(),
            outcome.ticks(),
            outcome.dirt_left(),
        );
    }
    println!();

    Ok(())
}

fn main() -> Result<()> {
    init_logging();

    let scenarios = match std::env::args().nth(1) {
        Some(path) => vec![("config file", DemoConfig::load(Path::new(&path))?)],
        None => DemoConfig::builtin(),
    };

    for (label, cfg) in &scenarios {
        run_scenario(label, cfg)?;
    }

    Ok(())
}
