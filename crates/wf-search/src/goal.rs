//! Multi-goal adapter.
//!
//! Every strategy tests goals against a [`GoalSet`]; a single goal is a set of
//! one.  A search stops at the **first** member its own expansion order
//! reaches.  That is not the same as the cheapest route to the nearest goal
//! for BFS, DFS or greedy search, and it is not a multi-destination tour for
//! any strategy.

use wf_core::CityId;
use wf_graph::Graph;

/// Non-empty, deduplicated set of acceptable goal cities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalSet {
    goals: Vec<CityId>,
}

impl GoalSet {
    /// Build from any list of ids; duplicates are dropped, first-seen order kept.
    ///
    /// Returns `None` for an empty list.
    pub fn new(goals: impl IntoIterator<Item = CityId>) -> Option<Self> {
        let mut uniq: Vec<CityId> = Vec::new();
        for g in goals {
            if !uniq.contains(&g) {
                uniq.push(g);
            }
        }
        (!uniq.is_empty()).then_some(Self { goals: uniq })
    }

    pub fn single(goal: CityId) -> Self {
        Self { goals: vec![goal] }
    }

    #[inline]
    pub fn contains(&self, city: CityId) -> bool {
        self.goals.contains(&city)
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// The goal when there is exactly one.
    pub fn as_single(&self) -> Option<CityId> {
        match self.goals.as_slice() {
            [g] => Some(*g),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = CityId> + '_ {
        self.goals.iter().copied()
    }

    /// Straight-line distance from `city` to the closest goal.
    ///
    /// The minimum keeps the estimate admissible: no road route to any goal is
    /// shorter than the straight line to the closest one.
    pub fn heuristic(&self, graph: &Graph, city: CityId) -> f64 {
        self.goals
            .iter()
            .map(|&g| graph.straight_line_km(city, g))
            .fold(f64::INFINITY, f64::min)
    }
}
