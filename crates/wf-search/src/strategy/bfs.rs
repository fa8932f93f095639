use std::collections::VecDeque;

use wf_core::CityId;

use crate::run::{Run, NO_PATH};
use crate::tree::SearchTree;
use crate::SearchOutcome;

/// Breadth-first search.  Cities are marked visited as they are enqueued, so
/// each city is explored at most once and the first path to a goal has the
/// fewest roads.
pub(crate) fn bfs(mut run: Run<'_>, start: CityId) -> SearchOutcome {
    let graph = run.graph;
    let mut tree = SearchTree::new(start);
    let mut queue = VecDeque::new();

    run.discover(start);
    queue.push_back(start);

    loop {
        if run.cancelled() {
            return run.cancel();
        }
        let Some(city) = queue.pop_front() else { break };

        run.explore_start(city);
        if run.is_goal(city) {
            return run.succeed(tree.path_to(city));
        }

        for (next, _) in graph.neighbors(city) {
            run.edge();
            if run.discover(next) {
                tree.attach(next, city);
                queue.push_back(next);
            }
        }
        run.explore_end(city);
    }

    run.exhaust(NO_PATH)
}
