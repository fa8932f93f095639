use wf_core::CityId;

use crate::run::{Run, NO_PATH};
use crate::tree::SearchTree;
use crate::SearchOutcome;

/// Depth-first search over an explicit stack.
///
/// Fresh neighbours are pushed in reverse enumeration order so the first
/// neighbour is explored first.  Visited marking happens on push, as in BFS.
pub(crate) fn dfs(mut run: Run<'_>, start: CityId) -> SearchOutcome {
    let graph = run.graph;
    let mut tree = SearchTree::new(start);
    let mut stack = vec![start];
    let mut fresh = Vec::new();

    run.discover(start);

    loop {
        if run.cancelled() {
            return run.cancel();
        }
        let Some(city) = stack.pop() else { break };

        run.explore_start(city);
        if run.is_goal(city) {
            return run.succeed(tree.path_to(city));
        }

        fresh.clear();
        for (next, _) in graph.neighbors(city) {
            run.edge();
            if run.discover(next) {
                tree.attach(next, city);
                fresh.push(next);
            }
        }
        stack.extend(fresh.iter().rev());
        run.explore_end(city);
    }

    run.exhaust(NO_PATH)
}
