//! Branch-and-bound timetable search.
//!
//! # Algorithm
//!
//! Depth-first search over partial assignments with an explicit stack:
//!
//! 1. Stop when the stack is empty, the node budget is spent, or a
//!    monitor asks to stop.
//! 2. Pop a node and count the visit. Discard it if its bound cannot beat
//!    the incumbent; record it if it is complete.
//! 3. Otherwise pick the most constrained unplaced block (MRV), rank its
//!    legal values (cost, then LCV), build one child per value, drop the
//!    children that fail forward checking or cannot beat the incumbent,
//!    and push the rest so the best-ranked child is popped next.
//!
//! Every node owns its occupancy state, so no undo step exists and no two
//! live branches share mutable data.
//!
//! # Reference
//! Land & Doig (1960), "An Automatic Method of Solving Discrete
//! Programming Problems"

use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::cost::{BalanceCost, PlacementCost};
use super::domain::{legal_candidates, DomainProfile};
use super::forward::forward_check;
use super::instance::Instance;
use super::monitor::{NoOpMonitor, ProgressMonitor, SearchCommand, SearchMonitor};
use super::node::SearchNode;
use super::ordering::{rank_values, select_variable};
use super::outcome::{SearchOutcome, TerminationReason};
use super::stats::SearchStatistics;
use crate::config::SolverConfig;
use crate::models::{Assignment, Timetable, TimetableProblem};
use crate::validation::{validate_problem, ValidationError};

/// Improvements smaller than this are treated as ties.
const COST_EPSILON: f64 = 1e-9;

/// Timetable solver.
///
/// # Example
///
/// ```
/// use u_timetable::config::SolverConfig;
/// use u_timetable::models::{Curriculum, Room, TimeGrid, TimetableProblem};
/// use u_timetable::search::TimetableSolver;
///
/// let curriculum = Curriculum::new()
///     .with_lesson("3b", "math", "prof1", 3)
///     .with_lesson("3b", "art", "prof2", 2);
/// let problem = TimetableProblem::from_curriculum(
///     curriculum,
///     TimeGrid::school_week(4),
///     Room::numbered("U", 1),
/// );
///
/// let solver = TimetableSolver::new(SolverConfig::default().with_seed(3));
/// let outcome = solver.solve(&problem).unwrap();
/// let timetable = outcome.timetable().unwrap();
/// assert_eq!(timetable.assignment_count(), 5);
/// assert!(timetable.is_conflict_free());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableSolver {
    config: SolverConfig,
}

impl TimetableSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Validates `problem`, then searches for the best timetable.
    ///
    /// Infeasibility and budget exhaustion are reported in the outcome;
    /// only validation failures are returned as errors.
    pub fn solve(&self, problem: &TimetableProblem) -> Result<SearchOutcome, Vec<ValidationError>> {
        self.solve_with_monitor(problem, &mut NoOpMonitor)
    }

    /// Like [`solve`](Self::solve), reporting to `monitor`.
    pub fn solve_with_monitor(
        &self,
        problem: &TimetableProblem,
        monitor: &mut dyn SearchMonitor,
    ) -> Result<SearchOutcome, Vec<ValidationError>> {
        if let Err(errors) = validate_problem(problem, &self.config) {
            log::warn!("rejected timetable problem with {} error(s)", errors.len());
            for e in &errors {
                log::warn!("  {e}");
            }
            return Err(errors);
        }

        let instance = Instance::compile(problem, &self.config);
        let cost = BalanceCost::new(&instance, self.config.balance_weight);

        let mut order: Vec<usize> = (0..instance.blocks.len()).collect();
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        order.shuffle(&mut rng);

        log::info!(
            "timetable search started: {} blocks, {} classes, {} teachers, {} slots, {} rooms, budget {}",
            instance.blocks.len(),
            instance.num_classes,
            instance.num_teachers,
            instance.num_slots(),
            instance.num_rooms,
            self.config.max_nodes,
        );

        let mut session = SearchSession::new(
            &instance,
            &cost,
            self.config.max_nodes,
            self.config.progress_interval.map(ProgressMonitor::new),
        );
        let termination = session.run(order, monitor);
        let SearchSession { best, stats, .. } = session;

        let best = best.map(|node| decode(problem, &node));
        let outcome = match termination {
            None => SearchOutcome::exhausted(best, stats),
            Some(reason) => SearchOutcome::aborted(best, reason, stats),
        };

        log::info!(
            "timetable search finished ({}): {} nodes visited, {} solutions, best {}",
            outcome.termination,
            outcome.statistics.nodes_visited,
            outcome.statistics.solutions_found,
            outcome
                .cost()
                .map_or_else(|| "none".to_string(), |c| format!("{c:.3}")),
        );

        Ok(outcome)
    }
}

/// Mutable state of one search run.
struct SearchSession<'a, C> {
    instance: &'a Instance,
    cost: &'a C,
    max_nodes: u64,
    progress: Option<ProgressMonitor>,
    stats: SearchStatistics,
    best: Option<SearchNode>,
    best_cost: f64,
}

impl<'a, C: PlacementCost> SearchSession<'a, C> {
    fn new(
        instance: &'a Instance,
        cost: &'a C,
        max_nodes: u64,
        progress: Option<ProgressMonitor>,
    ) -> Self {
        Self {
            instance,
            cost,
            max_nodes,
            progress,
            stats: SearchStatistics::default(),
            best: None,
            best_cost: f64::INFINITY,
        }
    }

    /// Runs the loop. `None` means the stack was exhausted.
    fn run(&mut self, order: Vec<usize>, monitor: &mut dyn SearchMonitor) -> Option<TerminationReason> {
        let start = Instant::now();
        monitor.on_enter_search(order.len());
        if let Some(p) = self.progress.as_mut() {
            p.on_enter_search(order.len());
        }

        let mut stack = vec![SearchNode::root(self.instance, order, self.cost)];

        let termination = loop {
            if stack.is_empty() {
                break None;
            }
            if self.stats.nodes_visited >= self.max_nodes {
                break Some(TerminationReason::NodeBudgetExhausted);
            }
            if let SearchCommand::Stop(reason) = monitor.search_command(&self.stats) {
                break Some(TerminationReason::Interrupted(reason));
            }
            let Some(node) = stack.pop() else {
                break None;
            };
            self.visit(node, &mut stack, monitor);
        };

        self.stats.set_total_time(start.elapsed());
        monitor.on_exit_search(&self.stats);
        if let Some(p) = self.progress.as_mut() {
            p.on_exit_search(&self.stats);
        }
        termination
    }

    fn visit(&mut self, node: SearchNode, stack: &mut Vec<SearchNode>, monitor: &mut dyn SearchMonitor) {
        let depth = node.depth();
        self.stats.on_node_visited(depth);
        monitor.on_visit(depth, &self.stats);
        if let Some(p) = self.progress.as_mut() {
            p.on_visit(depth, &self.stats);
        }

        if self.cannot_improve(node.bound) {
            self.stats.on_pruning_bound();
            return;
        }

        if node.is_complete() {
            self.record_incumbent(node, monitor);
            return;
        }

        let instance = self.instance;
        let profile = DomainProfile::build(instance, &node.state, &node.remaining);
        let Some(pos) = select_variable(&profile) else {
            return;
        };
        if profile.total(pos) == 0 {
            self.stats.on_dead_end();
            return;
        }

        let block = &instance.blocks[node.remaining[pos]];
        let candidates = legal_candidates(instance, &node.state, block);
        let ranked = rank_values(
            instance,
            &node.state,
            self.cost,
            &profile,
            &node.remaining,
            pos,
            &candidates,
        );
        self.stats.on_node_expanded();

        let mut children = Vec::with_capacity(ranked.len());
        for r in ranked {
            let child = node.child(instance, self.cost, pos, r.candidate, r.delta);
            self.stats.on_child_generated();

            if !forward_check(instance, &child.state, &child.remaining) {
                self.stats.on_pruning_forward();
                continue;
            }
            if self.cannot_improve(child.bound) {
                self.stats.on_pruning_bound();
                continue;
            }
            children.push(child);
        }

        stack.extend(children.into_iter().rev());
    }

    #[inline]
    fn cannot_improve(&self, bound: f64) -> bool {
        bound >= self.best_cost - COST_EPSILON
    }

    fn record_incumbent(&mut self, node: SearchNode, monitor: &mut dyn SearchMonitor) {
        self.stats.on_solution_found();
        log::debug!(
            "new incumbent: cost {:.6} after {} visits",
            node.cost,
            self.stats.nodes_visited
        );
        monitor.on_solution(node.cost, &self.stats);
        if let Some(p) = self.progress.as_mut() {
            p.on_solution(node.cost, &self.stats);
        }
        self.best_cost = node.cost;
        self.best = Some(node);
    }
}

/// Converts a complete node into a timetable in input block order.
fn decode(problem: &TimetableProblem, node: &SearchNode) -> Timetable {
    let slots = problem.grid.slots();
    let mut placements = node.placements.clone();
    placements.sort_by_key(|p| p.block);

    Timetable {
        assignments: placements
            .iter()
            .map(|p| {
                Assignment::new(
                    problem.blocks[p.block].clone(),
                    slots[p.slot].clone(),
                    problem.rooms[p.room].clone(),
                )
            })
            .collect(),
        cost: node.cost,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::models::{Block, Curriculum, Room, TimeGrid};
    use crate::search::monitor::InterruptMonitor;
    use crate::search::outcome::SearchResult;
    use crate::validation::ValidationErrorKind;

    fn problem(blocks: Vec<Block>, days: usize, periods: usize, rooms: usize) -> TimetableProblem {
        TimetableProblem::new(
            blocks,
            TimeGrid::uniform(days, periods),
            Room::numbered("U", rooms),
        )
    }

    fn school_problem() -> TimetableProblem {
        let curriculum = Curriculum::new()
            .with_lesson("3b", "math", "prof1", 3)
            .with_lesson("3b", "hrv", "prof2", 2)
            .with_lesson("3b", "art", "prof3", 1)
            .with_lesson("4c", "math", "prof1", 3)
            .with_lesson("4c", "hrv", "prof2", 2)
            .with_lesson("4c", "pe", "prof4", 2);
        TimetableProblem::from_curriculum(curriculum, TimeGrid::school_week(3), Room::numbered("U", 2))
    }

    /// Balance cost of a finished timetable, summed from scratch.
    fn balance_cost(problem: &TimetableProblem, timetable: &Timetable, weight: f64) -> f64 {
        let days = problem.grid.num_days();
        let mut total = 0.0;
        for class in problem.class_ids() {
            let ideal = problem.class_block_count(class) as f64 / days as f64;
            let mut loads = vec![0usize; days];
            for a in timetable.assignments_for_class(class) {
                loads[a.slot.day] += 1;
            }
            for load in loads {
                for old in 0..load {
                    total += weight * (2.0 * (old as f64 - ideal) + 1.0);
                }
            }
        }
        total
    }

    /// Records every incumbent cost.
    #[derive(Default)]
    struct RecordingMonitor {
        costs: Vec<f64>,
        visits: Vec<u64>,
        entered: usize,
        exited: usize,
    }

    impl SearchMonitor for RecordingMonitor {
        fn name(&self) -> &str {
            "RecordingMonitor"
        }

        fn on_enter_search(&mut self, _num_blocks: usize) {
            self.entered += 1;
        }

        fn on_solution(&mut self, cost: f64, stats: &SearchStatistics) {
            self.costs.push(cost);
            self.visits.push(stats.nodes_visited);
        }

        fn on_exit_search(&mut self, _stats: &SearchStatistics) {
            self.exited += 1;
        }
    }

    fn assert_complete(problem: &TimetableProblem, timetable: &Timetable) {
        assert_eq!(timetable.assignment_count(), problem.blocks.len());
        for (a, b) in timetable.assignments.iter().zip(&problem.blocks) {
            assert_eq!(&a.block, b);
        }
        assert!(timetable.is_conflict_free(), "{:?}", timetable.conflicts());
    }

    #[test]
    fn test_trivial_feasibility() {
        let p = problem(
            vec![
                Block::new("math", "prof1", "3b"),
                Block::new("art", "prof1", "3b"),
            ],
            2,
            1,
            1,
        );
        let outcome = TimetableSolver::default().solve(&p).unwrap();

        assert!(outcome.is_optimal());
        assert_eq!(outcome.termination, TerminationReason::OptimalityProven);
        let t = outcome.timetable().unwrap();
        assert_complete(&p, t);
        assert_ne!(t.assignments[0].slot, t.assignments[1].slot);
        // ideal 1 per day: one block on each day, -1 each.
        assert!((t.cost - (-2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_forced_infeasibility() {
        let p = problem(
            vec![
                Block::new("math", "prof1", "3b"),
                Block::new("math", "prof1", "3b"),
                Block::new("math", "prof1", "4c"),
                Block::new("math", "prof1", "4c"),
            ],
            1,
            1,
            1,
        );
        let outcome = TimetableSolver::default().solve(&p).unwrap();

        assert_eq!(outcome.result, SearchResult::Infeasible);
        assert_eq!(outcome.termination, TerminationReason::InfeasibilityProven);
        assert!(!outcome.is_budget_exhausted());
        assert!(outcome.timetable().is_none());
    }

    #[test]
    fn test_balance_preference() {
        let blocks = (0..4).map(|_| Block::new("math", "prof1", "3b")).collect();
        let p = problem(blocks, 5, 3, 2);
        let outcome = TimetableSolver::default().solve(&p).unwrap();

        assert!(outcome.is_optimal());
        let t = outcome.timetable().unwrap();
        assert_complete(&p, t);
        for day in 0..5 {
            assert!(t.assignments_on_day(day).len() <= 1);
        }
        // ideal 0.8: four days at -0.6 each.
        assert!((t.cost - (-2.4)).abs() < 1e-9);
    }

    #[test]
    fn test_budget_cutoff_is_not_infeasibility() {
        let p = school_problem();
        let config = SolverConfig::default().with_max_nodes(1);
        let outcome = TimetableSolver::new(config).solve(&p).unwrap();

        assert_eq!(outcome.result, SearchResult::Unknown);
        assert_eq!(outcome.termination, TerminationReason::NodeBudgetExhausted);
        assert!(outcome.is_budget_exhausted());
        assert!(!outcome.is_infeasible());
        assert_eq!(outcome.statistics.nodes_visited, 1);
        assert_eq!(outcome.statistics.nodes_expanded, 1);
    }

    #[test]
    fn test_budget_keeps_incumbent_as_feasible() {
        let p = school_problem();
        let mut monitor = RecordingMonitor::default();
        let unlimited = TimetableSolver::default()
            .solve_with_monitor(&p, &mut monitor)
            .unwrap();
        assert!(unlimited.has_solution());
        let first_hit = monitor.visits[0];

        // Same path up to the first leaf, then the budget stops the search.
        let config = SolverConfig::default().with_max_nodes(first_hit);
        let outcome = TimetableSolver::new(config).solve(&p).unwrap();
        assert_eq!(outcome.statistics.nodes_visited, first_hit);
        assert_eq!(outcome.cost(), Some(monitor.costs[0]));
        assert_complete(&p, outcome.timetable().unwrap());

        if first_hit < unlimited.statistics.nodes_visited {
            assert!(matches!(outcome.result, SearchResult::Feasible(_)));
            assert!(outcome.is_budget_exhausted());
        }
    }

    #[test]
    fn test_school_week_is_complete_and_conflict_free() {
        let p = school_problem();
        let outcome = TimetableSolver::default().solve(&p).unwrap();
        assert!(outcome.has_solution());
        let t = outcome.timetable().unwrap();
        assert_complete(&p, t);
        assert!((balance_cost(&p, t, 1.0) - t.cost).abs() < 1e-9);
    }

    #[test]
    fn test_determinism() {
        let p = school_problem();
        let config = SolverConfig::default().with_seed(11).with_max_nodes(500);
        let a = TimetableSolver::new(config.clone()).solve(&p).unwrap();
        let b = TimetableSolver::new(config).solve(&p).unwrap();

        assert_eq!(a.result, b.result);
        assert_eq!(a.termination, b.termination);
        assert_eq!(a.statistics.nodes_visited, b.statistics.nodes_visited);
        assert_eq!(a.statistics.prunings_bound, b.statistics.prunings_bound);
    }

    #[test]
    fn test_optimal_cost_independent_of_seed() {
        let p = problem(
            vec![
                Block::new("math", "prof1", "3b"),
                Block::new("math", "prof1", "3b"),
                Block::new("art", "prof2", "3b"),
                Block::new("math", "prof1", "4c"),
                Block::new("pe", "prof3", "4c"),
            ],
            3,
            2,
            1,
        );
        let costs: Vec<f64> = (0..4)
            .map(|seed| {
                let config = SolverConfig::default().with_seed(seed);
                TimetableSolver::new(config)
                    .solve(&p)
                    .unwrap()
                    .cost()
                    .unwrap()
            })
            .collect();
        for c in &costs {
            assert!((c - costs[0]).abs() < 1e-9, "{costs:?}");
        }
    }

    #[test]
    fn test_matches_brute_force_optimum() {
        let p = problem(
            vec![
                Block::new("math", "prof1", "3b"),
                Block::new("art", "prof2", "3b"),
                Block::new("art", "prof2", "3b"),
                Block::new("math", "prof1", "4c"),
            ],
            3,
            2,
            1,
        );
        let slots = p.grid.slots();
        let n = p.blocks.len();
        let cells = slots.len();

        let mut best = f64::INFINITY;
        let mut choice = vec![0usize; n];
        'outer: loop {
            let mut t = Timetable::new();
            for (b, &s) in choice.iter().enumerate() {
                t.add_assignment(Assignment::new(
                    p.blocks[b].clone(),
                    slots[s].clone(),
                    p.rooms[0].clone(),
                ));
            }
            if t.is_conflict_free() {
                best = best.min(balance_cost(&p, &t, 1.0));
            }
            for digit in choice.iter_mut() {
                *digit += 1;
                if *digit < cells {
                    continue 'outer;
                }
                *digit = 0;
            }
            break;
        }

        let outcome = TimetableSolver::default().solve(&p).unwrap();
        assert!(outcome.is_optimal());
        assert!((outcome.cost().unwrap() - best).abs() < 1e-9);
    }

    #[test]
    fn test_incumbents_strictly_improve() {
        let p = school_problem();
        let mut monitor = RecordingMonitor::default();
        let outcome = TimetableSolver::default()
            .solve_with_monitor(&p, &mut monitor)
            .unwrap();

        assert_eq!(monitor.entered, 1);
        assert_eq!(monitor.exited, 1);
        assert!(!monitor.costs.is_empty());
        for w in monitor.costs.windows(2) {
            assert!(w[1] < w[0]);
        }
        assert_eq!(monitor.costs.last().copied(), outcome.cost());
        assert_eq!(monitor.costs.len() as u64, outcome.statistics.solutions_found);
    }

    #[test]
    fn test_interrupt_before_first_visit() {
        let p = school_problem();
        let flag = Arc::new(AtomicBool::new(true));
        let mut monitor = InterruptMonitor::new(Arc::clone(&flag));
        let outcome = TimetableSolver::default()
            .solve_with_monitor(&p, &mut monitor)
            .unwrap();

        assert_eq!(outcome.result, SearchResult::Unknown);
        assert_eq!(
            outcome.termination,
            TerminationReason::Interrupted("interrupt signal received".to_string())
        );
        assert_eq!(outcome.statistics.nodes_visited, 0);
    }

    #[test]
    fn test_daily_subject_limit() {
        let p = problem(
            vec![
                Block::new("math", "prof1", "3b"),
                Block::new("math", "prof1", "3b"),
                Block::new("art", "prof2", "3b"),
                Block::new("art", "prof2", "3b"),
            ],
            2,
            3,
            1,
        );
        let config = SolverConfig::default().with_max_daily_blocks_per_subject(1);
        let outcome = TimetableSolver::new(config).solve(&p).unwrap();
        let t = outcome.timetable().unwrap();
        assert_complete(&p, t);

        let mut per_day: HashMap<(usize, &str), usize> = HashMap::new();
        for a in &t.assignments {
            *per_day.entry((a.slot.day, a.block.subject.as_str())).or_default() += 1;
        }
        assert!(per_day.values().all(|&n| n == 1));
    }

    #[test]
    fn test_subject_cap_override() {
        let p = problem(
            vec![
                Block::new("mat", "prof1", "3b"),
                Block::new("mat", "prof1", "3b"),
                Block::new("likovni", "prof2", "3b"),
            ],
            1,
            3,
            1,
        );
        let uniform = SolverConfig::default().with_max_daily_blocks_per_subject(1);
        assert!(TimetableSolver::new(uniform.clone())
            .solve(&p)
            .unwrap()
            .is_infeasible());

        let config = uniform.with_subject_daily_cap("mat", 2);
        let outcome = TimetableSolver::new(config).solve(&p).unwrap();
        assert!(outcome.is_optimal());
        assert_complete(&p, outcome.timetable().unwrap());
    }

    #[test]
    fn test_adjacent_day_repeats_forbidden() {
        let blocks = (0..3).map(|_| Block::new("hrv", "prof1", "3b")).collect();
        let p = problem(blocks, 5, 2, 1);
        let config = SolverConfig::default().with_forbid_adjacent_day_repeats(true);
        let outcome = TimetableSolver::new(config).solve(&p).unwrap();
        let t = outcome.timetable().unwrap();
        assert_complete(&p, t);

        for a in &t.assignments {
            for b in &t.assignments {
                assert_ne!(a.slot.day.abs_diff(b.slot.day), 1, "{:?} / {:?}", a.slot, b.slot);
            }
        }
    }

    #[test]
    fn test_adjacent_day_rule_can_make_infeasible() {
        // At most one per day, never on neighbouring days: three of five days.
        let blocks = (0..4).map(|_| Block::new("hrv", "prof1", "3b")).collect();
        let p = problem(blocks, 5, 2, 1);
        let config = SolverConfig::default()
            .with_max_daily_blocks_per_subject(1)
            .with_forbid_adjacent_day_repeats(true);
        let outcome = TimetableSolver::new(config).solve(&p).unwrap();
        assert!(outcome.is_infeasible());
    }

    #[test]
    fn test_consecutive_subject_forms_double_period() {
        let p = problem(
            vec![
                Block::new("tjelesni", "prof1", "3b"),
                Block::new("mat", "prof2", "3b"),
                Block::new("tjelesni", "prof1", "3b"),
                Block::new("mat", "prof2", "3b"),
            ],
            1,
            4,
            1,
        );
        let config = SolverConfig::default().with_consecutive_subject("tjelesni");
        let outcome = TimetableSolver::new(config).solve(&p).unwrap();
        let t = outcome.timetable().unwrap();
        assert_complete(&p, t);

        let periods: Vec<usize> = t
            .assignments
            .iter()
            .filter(|a| a.block.subject == "tjelesni")
            .map(|a| a.slot.period)
            .collect();
        assert_eq!(periods.len(), 2);
        assert_eq!(periods[0].abs_diff(periods[1]), 1);
    }

    #[test]
    fn test_school_rule_set() {
        let curriculum = Curriculum::new()
            .with_lesson("3b", "mat", "prof1", 4)
            .with_lesson("3b", "hrv", "prof2", 3)
            .with_lesson("3b", "tjelesni", "prof3", 2)
            .with_lesson("3b", "likovni", "prof4", 1)
            .with_lesson("4c", "mat", "prof1", 3)
            .with_lesson("4c", "tjelesni", "prof3", 2);
        let p = TimetableProblem::from_curriculum(
            curriculum,
            TimeGrid::school_week(4),
            Room::numbered("U", 2),
        );
        let config = SolverConfig::default()
            .with_max_daily_blocks_per_class(4)
            .with_max_daily_blocks_per_subject(1)
            .with_subject_daily_cap("mat", 2)
            .with_subject_daily_cap("hrv", 2)
            .with_subject_daily_cap("tjelesni", 2)
            .with_consecutive_subject("tjelesni");
        let outcome = TimetableSolver::new(config).solve(&p).unwrap();
        let t = outcome.timetable().unwrap();
        assert_complete(&p, t);

        let mut per_day: HashMap<(&str, usize, &str), Vec<usize>> = HashMap::new();
        for a in &t.assignments {
            per_day
                .entry((a.block.class_id.as_str(), a.slot.day, a.block.subject.as_str()))
                .or_default()
                .push(a.slot.period);
        }
        for ((_, _, subject), periods) in &mut per_day {
            let cap = if *subject == "likovni" { 1 } else { 2 };
            assert!(periods.len() <= cap, "{subject}: {periods:?}");
            if *subject == "tjelesni" && periods.len() == 2 {
                periods.sort_unstable();
                assert_eq!(periods[1] - periods[0], 1);
            }
        }
        for class in ["3b", "4c"] {
            for day in 0..5 {
                let n = t
                    .assignments_for_class(class)
                    .iter()
                    .filter(|a| a.slot.day == day)
                    .count();
                assert!(n <= 4);
            }
        }
    }

    #[test]
    fn test_daily_class_limit_can_make_infeasible() {
        let blocks = (0..3).map(|_| Block::new("math", "prof1", "3b")).collect();
        let p = problem(blocks, 2, 4, 1);
        let config = SolverConfig::default().with_max_daily_blocks_per_class(1);
        let outcome = TimetableSolver::new(config).solve(&p).unwrap();
        assert!(outcome.is_infeasible());
    }

    #[test]
    fn test_validation_errors_returned() {
        let p = TimetableProblem::new(Vec::new(), TimeGrid::uniform(1, 1), Vec::new());
        let config = SolverConfig::default().with_max_nodes(0);
        let errors = TimetableSolver::new(config).solve(&p).unwrap_err();

        let kinds: Vec<_> = errors.iter().map(|e| e.kind.clone()).collect();
        assert!(kinds.contains(&ValidationErrorKind::NoBlocks));
        assert!(kinds.contains(&ValidationErrorKind::NoRooms));
        assert!(kinds.contains(&ValidationErrorKind::InvalidConfig));
    }

    #[test]
    fn test_progress_logging_does_not_change_result() {
        let _ = env_logger::builder().is_test(true).try_init();
        let p = school_problem();
        let quiet = TimetableSolver::default().solve(&p).unwrap();
        let config = SolverConfig::default().with_progress_interval(1);
        let chatty = TimetableSolver::new(config).solve(&p).unwrap();

        assert_eq!(quiet.result, chatty.result);
        assert_eq!(quiet.statistics.nodes_visited, chatty.statistics.nodes_visited);
    }
}
