//! Depth-limited DFS and iterative deepening.
//!
//! Traversal depth lives in the stack frames, not in the call stack.  Cycle
//! avoidance only looks at the frame's own path, so a city may be explored
//! again through a different branch.

use wf_core::CityId;

use crate::run::Run;
use crate::SearchOutcome;

pub(crate) const DEPTH_LIMIT_REACHED: &str = "depth limit reached";
pub(crate) const NO_PATH_WITHIN_LIMIT: &str = "no path within limit";

struct Frame {
    city:  CityId,
    depth: u32,
    /// Start → `city`, inclusive.
    path:  Vec<CityId>,
}

enum Bounded {
    Found(Vec<CityId>),
    /// At least one branch reached the limit.
    CutOff,
    /// Every branch ended before reaching the limit.
    Exhausted,
    Cancelled,
}

/// One bounded pass.  Counters accumulate on `run`, which may be reused.
fn bounded_search(run: &mut Run<'_>, start: CityId, limit: u32) -> Bounded {
    let graph = run.graph;
    let mut stack = vec![Frame { city: start, depth: 0, path: vec![start] }];
    let mut children = Vec::new();
    let mut cut_off = false;

    run.discover(start);

    loop {
        if run.cancelled() {
            return Bounded::Cancelled;
        }
        let Some(frame) = stack.pop() else { break };

        run.explore_start(frame.city);
        if run.is_goal(frame.city) {
            return Bounded::Found(frame.path);
        }

        if frame.depth >= limit {
            cut_off = true;
        } else {
            children.clear();
            for (next, _) in graph.neighbors(frame.city) {
                run.edge();
                if frame.path.contains(&next) {
                    continue;
                }
                run.discover(next);
                let mut path = Vec::with_capacity(frame.path.len() + 1);
                path.extend_from_slice(&frame.path);
                path.push(next);
                children.push(Frame { city: next, depth: frame.depth + 1, path });
            }
            stack.extend(children.drain(..).rev());
        }
        run.explore_end(frame.city);
    }

    if cut_off { Bounded::CutOff } else { Bounded::Exhausted }
}

/// Depth-limited search: paths of at most `limit` roads.
pub(crate) fn dls(mut run: Run<'_>, start: CityId, limit: u32) -> SearchOutcome {
    match bounded_search(&mut run, start, limit) {
        Bounded::Found(path) => run.succeed(path),
        Bounded::CutOff      => run.exhaust(DEPTH_LIMIT_REACHED),
        Bounded::Exhausted   => run.exhaust(NO_PATH_WITHIN_LIMIT),
        Bounded::Cancelled   => run.cancel(),
    }
}

/// Iterative deepening: bounded passes at depth 0, 1, … `max_depth`.
///
/// Counters are not reset between passes.
pub(crate) fn iddfs(mut run: Run<'_>, start: CityId, max_depth: u32) -> SearchOutcome {
    for depth in 0..=max_depth {
        run.iteration_boundary(depth);
        match bounded_search(&mut run, start, depth) {
            Bounded::Found(path) => return run.succeed(path),
            Bounded::Cancelled   => return run.cancel(),
            Bounded::CutOff | Bounded::Exhausted => {}
        }
    }
    run.exhaust(format!("no path within maximum depth {max_depth}"))
}
