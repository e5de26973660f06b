//! Integration tests for vw-sim.

use vw_core::{Action, Grid, Position, SimConfig};
use vw_policy::DecisionPolicy;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn p(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

/// Four dirty cells on a 5x4 grid, agent in the corner.
fn reference_dirt() -> [Position; 4] {
    [p(4, 0), p(2, 1), p(1, 3), p(3, 2)]
}

/// Replays a fixed script of actions, then `Unknown` forever.
struct Scripted(Vec<Action>);

impl DecisionPolicy for Scripted {
    fn decide(&self, grid: &Grid) -> Action {
        self.0
            .get(grid.steps().0 as usize)
            .copied()
            .unwrap_or(Action::Unknown)
    }
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use vw_core::CoreError;
    use vw_policy::{IdlePolicy, PolicyError, PolicyKind, UtilityParams};

    use super::*;
    use crate::{SimBuilder, SimError};

    #[test]
    fn builds_with_defaults() {
        let sim = SimBuilder::new(3, 3, IdlePolicy).build().unwrap();
        assert_eq!(sim.grid.agent(), p(0, 0));
        assert!(!sim.grid.any_dirt_left());
        assert_eq!(sim.config, SimConfig::default());
        assert!(sim.history().is_empty());
    }

    #[test]
    fn invalid_dimensions_fail_fast() {
        let err = SimBuilder::new(-2, 3, IdlePolicy).build().err().unwrap();
        assert_eq!(err, SimError::Core(CoreError::InvalidDimensions { width: -2, height: 3 }));
    }

    #[test]
    fn agent_start_out_of_bounds_fails() {
        let result = SimBuilder::new(3, 3, IdlePolicy).agent_start(p(5, 5)).build();
        assert!(matches!(result, Err(SimError::Core(CoreError::AgentOutOfBounds(_)))));
    }

    #[test]
    fn dirt_out_of_bounds_fails() {
        let result = SimBuilder::new(3, 3, IdlePolicy).dirt([p(3, 0)]).build();
        assert!(matches!(result, Err(SimError::Core(CoreError::DirtOutOfBounds(_)))));
    }

    #[test]
    fn random_dirt_is_reproducible() {
        let config = SimConfig { seed: 11, ..SimConfig::default() };
        let a = SimBuilder::new(6, 6, IdlePolicy).config(config.clone()).random_dirt(0.5).build().unwrap();
        let b = SimBuilder::new(6, 6, IdlePolicy).config(config).random_dirt(0.5).build().unwrap();
        assert_eq!(a.grid, b.grid);
    }

    #[test]
    fn random_dirt_density_validated() {
        let result = SimBuilder::new(3, 3, IdlePolicy).random_dirt(2.0).build();
        assert!(matches!(result, Err(SimError::Core(CoreError::Config(_)))));
    }

    #[test]
    fn last_dirt_source_wins() {
        let sim = SimBuilder::new(3, 3, IdlePolicy)
            .random_dirt(1.0)
            .dirt([p(1, 1)])
            .build()
            .unwrap();
        assert_eq!(sim.grid.dirt_count(), 1);
    }

    #[test]
    fn for_kind_propagates_policy_errors() {
        let bad = UtilityParams { reward_clean: -1.0, ..UtilityParams::default() };
        let result = SimBuilder::for_kind(3, 3, PolicyKind::Utility, bad);
        assert!(matches!(result, Err(SimError::Policy(PolicyError::Config(_)))));
    }
}

// ── Tick semantics ────────────────────────────────────────────────────────────

#[cfg(test)]
mod step_tests {
    use vw_core::{ActionKind, Tick};

    use super::*;
    use crate::{Record, SimBuilder};

    #[test]
    fn suck_on_dirt_cleans_and_records() {
        let mut sim = SimBuilder::new(2, 2, Scripted(vec![Action::Suck]))
            .dirt([p(0, 0), p(1, 1)])
            .build()
            .unwrap();
        let rec = sim.step().unwrap();
        assert_eq!(rec, Record { tick: Tick(0), action: Action::Suck, position: p(0, 0) });
        assert!(!sim.grid.is_dirty(p(0, 0)));
        assert_eq!(sim.grid.steps(), Tick(1));
    }

    #[test]
    fn suck_on_clean_cell_records_nothing() {
        let mut sim = SimBuilder::new(2, 2, Scripted(vec![Action::Suck]))
            .dirt([p(1, 1)])
            .build()
            .unwrap();
        let rec = sim.step().unwrap();
        assert_eq!(rec.action, Action::Nothing);
        assert_eq!(rec.position, p(0, 0));
        assert_eq!(sim.grid.dirt_count(), 1);
        assert_eq!(sim.grid.steps(), Tick(1));
    }

    #[test]
    fn stay_only_costs_a_tick() {
        let mut sim = SimBuilder::new(2, 2, Scripted(vec![Action::Stay]))
            .dirt([p(1, 1)])
            .build()
            .unwrap();
        let before = sim.grid.clone();
        let rec = sim.step().unwrap();
        assert_eq!(rec.action, Action::Stay);
        assert_eq!(sim.grid.agent(), before.agent());
        assert_eq!(sim.grid.dirt_count(), before.dirt_count());
        assert_eq!(sim.grid.steps(), Tick(1));
    }

    #[test]
    fn out_of_bounds_move_consumes_tick_but_not_position() {
        let mut sim = SimBuilder::new(2, 2, Scripted(vec![Action::Move(p(-1, 0)), Action::Move(p(1, 0))]))
            .dirt([p(1, 1)])
            .build()
            .unwrap();
        let first = sim.step().unwrap();
        assert_eq!(first.action, Action::Move(p(-1, 0)));
        assert_eq!(first.position, p(-1, 0));
        assert_eq!(sim.grid.agent(), p(0, 0));
        assert_eq!(sim.grid.steps(), Tick(1));

        sim.step().unwrap();
        assert_eq!(sim.grid.agent(), p(1, 0));
        assert_eq!(sim.grid.steps(), Tick(2));
    }

    #[test]
    fn unknown_is_recorded_at_agent_cell() {
        let mut sim = SimBuilder::new(2, 2, Scripted(vec![]))
            .dirt([p(1, 1)])
            .agent_start(p(1, 0))
            .build()
            .unwrap();
        let rec = sim.step().unwrap();
        assert_eq!(rec.action, Action::Unknown);
        assert_eq!(rec.position, p(1, 0));
        assert_eq!(sim.history().count(ActionKind::Unknown), 1);
    }

    #[test]
    fn step_on_clean_grid_is_none() {
        let mut sim = SimBuilder::new(2, 2, Scripted(vec![Action::Stay])).build().unwrap();
        assert!(sim.step().is_none());
        assert_eq!(sim.grid.steps(), Tick(0));
        assert!(sim.history().is_empty());
    }
}

// ── Full runs ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use vw_core::{ActionKind, Tick};
    use vw_policy::{GoalAgent, IdlePolicy, UtilityAgent, UtilityParams};

    use super::*;
    use crate::{NoopObserver, Outcome, SimBuilder, SimObserver};

    #[test]
    fn goal_agent_corner_scenario() {
        let mut sim = SimBuilder::new(3, 3, GoalAgent::new())
            .dirt([p(2, 2)])
            .max_steps(20)
            .build()
            .unwrap();

        let first = sim.step().unwrap();
        assert_eq!(first.action, Action::Move(p(1, 0)));

        for _ in 0..3 {
            sim.step().unwrap();
        }
        assert_eq!(sim.grid.agent(), p(2, 2));
        assert!(sim.grid.any_dirt_left());

        let outcome = sim.run(&mut NoopObserver);
        assert_eq!(outcome, Outcome::Cleaned { ticks: 5 });
        assert!(!sim.grid.any_dirt_left());

        let pairs: Vec<_> = sim.history().pairs().collect();
        assert_eq!(
            pairs,
            vec![
                (Action::Move(p(1, 0)), p(1, 0)),
                (Action::Move(p(2, 0)), p(2, 0)),
                (Action::Move(p(2, 1)), p(2, 1)),
                (Action::Move(p(2, 2)), p(2, 2)),
                (Action::Suck, p(2, 2)),
            ]
        );
    }

    #[test]
    fn goal_agent_cleans_reference_layout() {
        let mut sim = SimBuilder::new(5, 4, GoalAgent::new())
            .dirt(reference_dirt())
            .build()
            .unwrap();
        let outcome = sim.run(&mut NoopObserver);
        assert!(outcome.is_cleaned(), "{outcome}");
        assert_eq!(sim.history().count(ActionKind::Suck), 4);
        assert_eq!(sim.history().count(ActionKind::Nothing), 0);
        assert_eq!(sim.grid.steps(), Tick(outcome.ticks()));
    }

    #[test]
    fn utility_agent_cleans_reference_layout() {
        let agent = UtilityAgent::new(UtilityParams::default()).unwrap();
        let mut sim = SimBuilder::new(5, 4, agent)
            .dirt(reference_dirt())
            .build()
            .unwrap();
        let outcome = sim.run(&mut NoopObserver);
        assert!(outcome.is_cleaned(), "{outcome}");
        assert_eq!(sim.history().count(ActionKind::Suck), 4);
        assert_eq!(sim.history().count(ActionKind::Stay), 0);
        assert_eq!(sim.history().records()[0].tick, Tick(0));
    }

    #[test]
    fn idle_policy_exhausts_budget() {
        let mut sim = SimBuilder::new(3, 3, IdlePolicy)
            .dirt([p(2, 2), p(1, 1)])
            .max_steps(7)
            .build()
            .unwrap();
        let outcome = sim.run(&mut NoopObserver);
        assert_eq!(outcome, Outcome::BudgetExhausted { ticks: 7, dirt_left: 2 });
        assert_eq!(sim.history().len(), 7);
        assert_eq!(sim.grid.steps(), Tick(7));
    }

    #[test]
    fn budget_ends_at_end_tick_counting_manual_steps() {
        let mut sim = SimBuilder::new(3, 3, IdlePolicy)
            .dirt([p(2, 2)])
            .max_steps(5)
            .build()
            .unwrap();
        sim.step().unwrap();
        sim.step().unwrap();
        assert_eq!(sim.ticks_taken(), Tick(2));

        let outcome = sim.run(&mut NoopObserver);
        assert_eq!(outcome, Outcome::BudgetExhausted { ticks: 5, dirt_left: 1 });
        assert_eq!(sim.ticks_taken(), sim.config.end_tick());
        assert_eq!(sim.history().last().map(|r| r.tick), Some(Tick(4)));
    }

    #[test]
    fn zero_budget_runs_nothing() {
        let mut sim = SimBuilder::new(3, 3, GoalAgent::new())
            .dirt([p(2, 2)])
            .max_steps(0)
            .build()
            .unwrap();
        let outcome = sim.run(&mut NoopObserver);
        assert_eq!(outcome, Outcome::BudgetExhausted { ticks: 0, dirt_left: 1 });
    }

    #[test]
    fn clean_grid_finishes_immediately() {
        let mut sim = SimBuilder::new(3, 3, IdlePolicy).build().unwrap();
        assert_eq!(sim.run(&mut NoopObserver), Outcome::Cleaned { ticks: 0 });
    }

    #[test]
    fn budget_bounds_every_run() {
        for max_steps in [0, 1, 3, 10, 40] {
            let agent = UtilityAgent::new(UtilityParams::default()).unwrap();
            let mut sim = SimBuilder::new(6, 5, agent)
                .config(SimConfig { max_steps, seed: 5, verbose: false })
                .random_dirt(0.4)
                .build()
                .unwrap();
            let outcome = sim.run(&mut NoopObserver);
            assert!(outcome.ticks() <= max_steps);
            assert!(sim.history().len() as u64 <= max_steps);
        }
    }

    #[test]
    fn agent_always_in_bounds() {
        struct BoundsCheck;
        impl SimObserver for BoundsCheck {
            fn on_record(&mut self, _record: &crate::Record, grid: &Grid) {
                assert!(grid.in_bounds(grid.agent()));
                assert!(grid.dirt_cells().all(|d| grid.in_bounds(d)));
            }
        }

        let mut sim = SimBuilder::for_kind(7, 6, vw_policy::PolicyKind::Goal, UtilityParams::default())
            .unwrap()
            .agent_start(p(6, 5))
            .config(SimConfig { max_steps: 500, seed: 3, verbose: false })
            .random_dirt(0.3)
            .build()
            .unwrap();
        assert!(sim.run(&mut BoundsCheck).is_cleaned());
    }

    #[test]
    fn same_inputs_same_history() {
        let run = || {
            let agent = UtilityAgent::new(UtilityParams::default()).unwrap();
            let mut sim = SimBuilder::new(6, 6, agent)
                .config(SimConfig { max_steps: 100, seed: 21, verbose: false })
                .random_dirt(0.5)
                .build()
                .unwrap();
            sim.run(&mut NoopObserver);
            sim.into_parts().1
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn ticks_are_consecutive() {
        let mut sim = SimBuilder::new(5, 4, GoalAgent::new())
            .dirt(reference_dirt())
            .build()
            .unwrap();
        sim.run(&mut NoopObserver);
        for (i, rec) in sim.history().iter().enumerate() {
            assert_eq!(rec.tick, Tick(i as u64));
        }
    }
}

// ── Observers ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use vw_core::Tick;
    use vw_policy::{GoalAgent, IdlePolicy};

    use super::*;
    use crate::{NoopObserver, Outcome, Record, RenderObserver, SimBuilder, SimObserver};

    #[derive(Default)]
    struct Counter {
        starts:  usize,
        records: usize,
        ends:    usize,
    }

    impl SimObserver for Counter {
        fn on_tick_start(&mut self, _t: Tick, _g: &Grid) { self.starts += 1; }
        fn on_record(&mut self, _r: &Record, _g: &Grid) { self.records += 1; }
        fn on_sim_end(&mut self, _o: &Outcome, _g: &Grid) { self.ends += 1; }
    }

    #[test]
    fn hooks_fire_per_tick() {
        let mut sim = SimBuilder::new(3, 3, GoalAgent::new())
            .dirt([p(2, 2)])
            .build()
            .unwrap();
        let mut counter = Counter::default();
        sim.run(&mut counter);
        assert_eq!(counter.records, 5);
        // One extra start for the check that finds the grid clean.
        assert_eq!(counter.starts, 6);
        assert_eq!(counter.ends, 1);
    }

    #[test]
    fn hooks_on_exhausted_budget() {
        let mut sim = SimBuilder::new(3, 3, IdlePolicy)
            .dirt([p(2, 2)])
            .max_steps(4)
            .build()
            .unwrap();
        let mut counter = Counter::default();
        sim.run(&mut counter);
        assert_eq!((counter.starts, counter.records, counter.ends), (4, 4, 1));
    }

    #[test]
    fn none_observer_is_silent() {
        let mut sim = SimBuilder::new(3, 3, GoalAgent::new())
            .dirt([p(2, 2)])
            .build()
            .unwrap();
        let mut off: Option<Counter> = None;
        let quiet = sim.run(&mut off);
        assert!(quiet.is_cleaned());

        let mut again = SimBuilder::new(3, 3, GoalAgent::new())
            .dirt([p(2, 2)])
            .build()
            .unwrap();
        assert_eq!(again.run(&mut NoopObserver), quiet);
    }

    #[test]
    fn render_observer_narrates() {
        let mut sim = SimBuilder::new(2, 1, GoalAgent::new())
            .dirt([p(1, 0)])
            .build()
            .unwrap();
        let mut render = RenderObserver::new(Vec::new());
        sim.run(&mut render);
        assert!(render.take_error().is_none());

        let text = String::from_utf8(render.into_inner()).unwrap();
        assert!(text.starts_with("=== Step 0 ===\nA *\nSteps: 0  Dirt remaining: 1\n"));
        assert!(text.contains("Agent moves to (1,0)\n"));
        assert!(text.contains("Agent cleans at (1,0)\n"));
        assert!(text.ends_with("All clean! Done.\n"));
    }
}
