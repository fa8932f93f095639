use std::collections::VecDeque;

use wf_core::CityId;

use crate::run::{Run, NO_PATH};
use crate::tree::SearchTree;
use crate::SearchOutcome;

/// One direction of the search: its FIFO frontier and its visited map.
struct Side {
    queue: VecDeque<CityId>,
    tree:  SearchTree,
}

impl Side {
    fn new(root: CityId) -> Self {
        Self { queue: VecDeque::from([root]), tree: SearchTree::new(root) }
    }
}

/// Pop and expand one city from `this`.  Returns the meeting city if the
/// popped city is already in `other`'s visited map.
fn step(run: &mut Run<'_>, this: &mut Side, other: &Side) -> Option<CityId> {
    let graph = run.graph;
    let city = this.queue.pop_front()?;

    run.explore_start(city);
    if other.tree.contains(city) {
        return Some(city);
    }

    for (next, _) in graph.neighbors(city) {
        run.edge();
        if !this.tree.contains(next) {
            this.tree.attach(next, city);
            run.discover(next);
            this.queue.push_back(next);
        }
    }
    run.explore_end(city);
    None
}

/// Breadth-first from both ends, alternating one pop forward and one pop
/// backward.  Stops at the first pop the other side has already reached.
///
/// The result has few roads but is not guaranteed to have the fewest, and
/// road lengths are ignored entirely.
pub(crate) fn bidirectional(mut run: Run<'_>, start: CityId, goal: CityId) -> SearchOutcome {
    let mut forward  = Side::new(start);
    let mut backward = Side::new(goal);
    run.discover(start);
    run.discover(goal);

    while !(forward.queue.is_empty() && backward.queue.is_empty()) {
        if run.cancelled() {
            return run.cancel();
        }
        if let Some(meet) = step(&mut run, &mut forward, &backward) {
            return run.succeed(join(&forward, &backward, meet));
        }

        if run.cancelled() {
            return run.cancel();
        }
        if let Some(meet) = step(&mut run, &mut backward, &forward) {
            return run.succeed(join(&forward, &backward, meet));
        }
    }

    run.exhaust(NO_PATH)
}

/// start → meet from the forward tree, then meet → goal from the backward one.
fn join(forward: &Side, backward: &Side, meet: CityId) -> Vec<CityId> {
    let mut path = forward.tree.path_to(meet);
    let back = backward.tree.path_to(meet);
    path.extend(back.iter().rev().skip(1));
    path
}
