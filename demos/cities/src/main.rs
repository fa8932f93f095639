//! cities — watch a graph search cross a 20-city German road network.
//!
//! ```text
//! cities --strategy astar --from Hamburg --to Munich
//! cities -s iddfs --from Kiel --to Leipzig --to Dresden --max-depth 6 --delay-ms 0
//! cities -s bfs --from Bremen --to Stuttgart --interactive   # p / r / c + Enter
//! ```
//!
//! Events stream to stdout while the search runs, then the outcome is printed
//! as JSON.  `RUST_LOG=wf_search=trace` (or `-vv`) shows the engine's own log.

mod console;
mod report;

use std::fs::File;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wf_core::EngineConfig;
use wf_graph::{Graph, load_json_file, load_json_str};
use wf_search::{RunControl, SearchEngine, SearchOptions, SearchRequest, Strategy};

use console::ConsoleObserver;
use report::Report;

// Bundled network: road distances are at least the straight-line distance.
const BUNDLED_GRAPH: &str = include_str!("../data/cities.json");

#[derive(Parser)]
#[command(version, about = "Run one graph search over a city network")]
struct Args {
    /// bfs, dfs, ucs, dls, iddfs, bidirectional, greedy or astar.
    #[arg(short, long, default_value = "astar")]
    strategy: String,

    /// Start city.
    #[arg(long, default_value = "Hamburg")]
    from: String,

    /// Goal city; repeat for a goal set.
    #[arg(long = "to")]
    to: Vec<String>,

    /// Pause between animation steps (overrides the config file).
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Bound for depth-limited search.
    #[arg(long)]
    depth_limit: Option<u32>,

    /// Deepest iteration for iterative deepening.
    #[arg(long)]
    max_depth: Option<u32>,

    /// Engine configuration as JSON; missing fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Graph document to search instead of the bundled one.
    #[arg(long)]
    graph: Option<PathBuf>,

    /// Write the event trace as CSV.
    #[arg(long)]
    trace_csv: Option<PathBuf>,

    /// Read p (pause), r (resume) and c (cancel) from stdin during the run.
    #[arg(long)]
    interactive: bool,

    /// Print only the JSON outcome.
    #[arg(short, long)]
    quiet: bool,

    /// Print the cities and exit.
    #[arg(long)]
    list: bool,

    /// -v for debug, -vv for per-expansion trace.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let graph = load_graph(args.graph.as_deref())?;
    info!(cities = graph.city_count(), roads = graph.road_count(), "graph loaded");

    if args.list {
        list_cities(&graph);
        return Ok(());
    }

    let config = load_config(&args)?;
    let strategy: Strategy = args.strategy.parse()?;
    let request = SearchRequest::new(strategy, args.from.as_str(), args.to.iter().map(String::as_str))
        .options(SearchOptions {
            depth_limit:         args.depth_limit,
            max_iterative_depth: args.max_depth,
        });

    let engine = SearchEngine::new(&graph, config)?;
    let validated = engine.prepare(&request)?;

    if args.interactive {
        spawn_keyboard(engine.control().clone());
    }

    if !args.quiet {
        println!(
            "{} from {} to {} ({} ms per step)",
            strategy,
            args.from,
            args.to.join(", "),
            engine.config().step_delay_ms
        );
    }
    let mut observer = ConsoleObserver::new(&graph, args.quiet);
    let outcome = engine.run(&validated, &mut observer)?;

    if let Some(path) = &args.trace_csv {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        observer.recorder().write_csv(&graph, file)?;
        info!(path = %path.display(), events = observer.recorder().events().len(), "trace written");
    }

    println!("{}", serde_json::to_string_pretty(&Report::new(&graph, &outcome))?);
    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn load_graph(path: Option<&Path>) -> Result<Graph> {
    match path {
        Some(p) => load_json_file(p).with_context(|| format!("loading {}", p.display())),
        None => load_json_str(BUNDLED_GRAPH).context("loading bundled graph"),
    }
}

/// Config file first, then command-line overrides.
fn load_config(args: &Args) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(p) => {
            let file = File::open(p).with_context(|| format!("opening {}", p.display()))?;
            serde_json::from_reader(file).with_context(|| format!("parsing {}", p.display()))?
        }
        None => EngineConfig::default(),
    };
    if let Some(ms) = args.delay_ms {
        config.step_delay_ms = ms;
    }
    Ok(config)
}

fn list_cities(graph: &Graph) {
    println!("{:<14} {:<16} {:>8} {:>8} {:>6}", "City", "Kind", "Lat", "Lon", "Roads");
    println!("{}", "-".repeat(56));
    for (id, city) in graph.cities() {
        println!(
            "{:<14} {:<16} {:>8.3} {:>8.3} {:>6}",
            city.name,
            city.kind,
            city.pos.lat,
            city.pos.lon,
            graph.degree(id),
        );
    }
}

/// Forward single-letter commands from stdin to the run control.
fn spawn_keyboard(control: RunControl) {
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            match line.trim() {
                "p" => control.pause(),
                "r" => control.resume(),
                "c" => {
                    control.cancel();
                    break;
                }
                "" => {}
                other => eprintln!("unknown command {other:?} (p, r, c)"),
            }
        }
    });
}
