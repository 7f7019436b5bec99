use std::collections::VecDeque;
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use matrix_graph_core::render::{write_adjacency, write_shortest_path, write_traversal};
use matrix_graph_core::{bfs, dfs, shortest_path, Graph, PathStep, Result, Traversal};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Benchmark and demo driver for the matrix-graph traversal engine.
#[derive(Parser)]
#[command(name = "matrix-graph-bench")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Which graph generator to benchmark, or `demo` for the reference graph
    #[arg(value_enum, default_value_t = Mode::All)]
    mode: Mode,

    /// Vertex count (also the matrix capacity) for generated graphs
    #[arg(short = 'n', long, env = "MATRIX_GRAPH_BENCH_VERTICES", default_value_t = 2000)]
    vertices: usize,

    /// Offset added to every generator's fixed seed
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Emit one JSON object per benchmark instead of a table
    #[arg(long)]
    json: bool,

    /// Verbose logging (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Run all generators and benchmark each
    All,
    /// Fractal branching tree (deep paths)
    Lsystem,
    /// Watts-Strogatz ring lattice + shortcuts
    Smallworld,
    /// Erdos-Renyi uniform random edges
    Random,
    /// Two dense clusters connected by a thin bridge
    Barbell,
    /// Diffusion-limited aggregation (organic branching)
    Dla,
    /// Render display, dfs, bfs and shortest paths for the five-vertex reference graph
    Demo,
}

type Generator = fn(usize, &mut FastRng) -> Graph;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("matrix-graph-bench: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let generators: Vec<(&str, u64, Generator)> = match cli.mode {
        Mode::Demo => return run_demo(&mut io::stdout().lock()),
        Mode::Lsystem => vec![("L-system tree", 42, gen_lsystem)],
        Mode::Smallworld => vec![("Small-world (Watts-Strogatz)", 67890, gen_small_world)],
        Mode::Random => vec![("Erdos-Renyi random", 54321, gen_random)],
        Mode::Barbell => vec![("Barbell (cluster-bridge-cluster)", 99999, gen_barbell)],
        Mode::Dla => vec![("DLA (organic branching)", 77777, gen_dla)],
        Mode::All => vec![
            ("L-system tree", 42, gen_lsystem as Generator),
            ("Small-world (Watts-Strogatz)", 67890, gen_small_world),
            ("Erdos-Renyi random", 54321, gen_random),
            ("Barbell (cluster-bridge-cluster)", 99999, gen_barbell),
            ("DLA (organic branching)", 77777, gen_dla),
        ],
    };

    let mut out = io::stdout().lock();
    if !cli.json {
        writeln!(out, "matrix-graph-bench")?;
        writeln!(out, "==================")?;
        writeln!(out)?;
    }

    for (name, seed, generator) in generators {
        let mut rng = FastRng::new(seed.wrapping_add(cli.seed));
        run_benchmark(&mut out, name, generator, cli.vertices, &mut rng, cli.json)?;
    }
    Ok(())
}

fn run_demo<W: Write>(out: &mut W) -> Result<()> {
    let mut graph = Graph::new(7);
    for label in ["A", "B", "C", "D", "E", "F"] {
        graph.add_vertex(label)?;
    }
    graph.add_edge("A", "B", &["C"]);
    graph.add_edge("D", "B", &["C", "E"]);

    writeln!(out, "Vertices: {}", graph.size())?;
    write_adjacency(out, &graph)?;

    writeln!(out, "\nDFS from A:")?;
    write_traversal(out, &dfs(&graph, "A")?)?;
    writeln!(out, "\nBFS from A:")?;
    write_traversal(out, &bfs(&graph, "A")?)?;

    writeln!(out)?;
    write_shortest_path(out, &graph, "A", "E")?;
    write_shortest_path(out, &graph, "C", "C")?;
    write_shortest_path(out, &graph, "A", "F")?;
    Ok(())
}

/// Timing of one query run.
struct Measured {
    visited: usize,
    elapsed: Duration,
}

fn time<T>(f: impl FnOnce() -> Result<T>, size: impl Fn(&T) -> usize) -> Result<Measured> {
    let t = Instant::now();
    let value = f()?;
    Ok(Measured {
        elapsed: t.elapsed(),
        visited: size(&value),
    })
}

fn run_benchmark<W: Write>(
    out: &mut W,
    name: &str,
    generator: Generator,
    vertex_count: usize,
    rng: &mut FastRng,
    json: bool,
) -> Result<()> {
    info!(name, vertex_count, "generating graph");
    let t = Instant::now();
    let graph = generator(vertex_count, rng);
    let gen_time = t.elapsed();
    debug!(vertices = graph.size(), edges = graph.edge_count(), "graph generated");

    if graph.is_empty() {
        writeln!(out, "--- {name} --- (empty graph, skipped)")?;
        return Ok(());
    }

    let first = graph.vertices()[0].label.clone();
    let last = graph.vertices()[graph.size() - 1].label.clone();

    let dfs_run = time(|| dfs(&graph, &first), |t: &Traversal| t.len())?;
    let bfs_run = time(|| bfs(&graph, &first), |t: &Traversal| t.len())?;
    let path_run = time(
        || shortest_path(&graph, &first, &last),
        |p: &Option<Vec<PathStep>>| p.as_ref().map_or(0, Vec::len),
    )?;

    if json {
        let record = serde_json::json!({
            "generator": name,
            "vertices": graph.size(),
            "edges": graph.edge_count(),
            "memory_bytes": graph.memory_usage(),
            "generate_ms": gen_time.as_secs_f64() * 1000.0,
            "dfs": { "visited": dfs_run.visited, "ms": dfs_run.elapsed.as_secs_f64() * 1000.0 },
            "bfs": { "visited": bfs_run.visited, "ms": bfs_run.elapsed.as_secs_f64() * 1000.0 },
            "shortest_path": {
                "from": first,
                "to": last,
                "hops": path_run.visited.checked_sub(1),
                "ms": path_run.elapsed.as_secs_f64() * 1000.0,
            },
        });
        writeln!(out, "{record}")?;
        return Ok(());
    }

    writeln!(out, "--- {name} ---")?;
    writeln!(
        out,
        "Generated in {:.2}s, {} vertices, {} edges, ~{:.1}MB",
        gen_time.as_secs_f64(),
        graph.size(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    )?;
    writeln!(out)?;
    writeln!(out, "{:>8} {:>12} {:>10}", "query", "visited", "time")?;
    writeln!(out, "{:->8} {:->12} {:->10}", "", "", "")?;
    for (query, m) in [("dfs", &dfs_run), ("bfs", &bfs_run)] {
        writeln!(
            out,
            "{:>8} {:>12} {:>8.1}ms",
            query,
            m.visited,
            m.elapsed.as_secs_f64() * 1000.0
        )?;
    }

    writeln!(out)?;
    match path_run.visited.checked_sub(1) {
        Some(hops) => writeln!(
            out,
            "Shortest path {first} => {last}: {hops} hops in {:.1}ms",
            path_run.elapsed.as_secs_f64() * 1000.0
        )?,
        None => writeln!(
            out,
            "Shortest path {first} => {last}: no path ({:.1}ms)",
            path_run.elapsed.as_secs_f64() * 1000.0
        )?,
    }
    writeln!(out)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Generators: deterministic, single-threaded, vertices labeled by index
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 33) % max as u64) as usize
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Graph with `n` vertices labeled `v0..vn` and no edges.
fn with_vertices(n: usize) -> Graph {
    let mut graph = Graph::new(n);
    for i in 0..n {
        // Capacity equals n, so every insertion fits
        let _ = graph.add_vertex(format!("v{i}"));
    }
    graph
}

/// L-system fractal tree: each vertex spawns 3 children, breadth-first.
fn gen_lsystem(n: usize, _rng: &mut FastRng) -> Graph {
    let mut graph = with_vertices(n);
    let branching = 3;
    for child in 1..n {
        graph.connect((child - 1) / branching, child);
    }
    graph
}

/// Small-world (Watts-Strogatz): ring lattice with each edge rewired with
/// probability p. High clustering, short paths.
fn gen_small_world(n: usize, rng: &mut FastRng) -> Graph {
    let k = 5; // neighbours on each side
    let p = 0.05;
    let mut graph = with_vertices(n);
    if n < 2 {
        return graph;
    }
    for i in 0..n {
        for j in 1..=k {
            let neighbor = (i + j) % n;
            if rng.next_f64() < p {
                let rewired = rng.next(n);
                graph.connect(i, if rewired != i { rewired } else { neighbor });
            } else if neighbor != i {
                graph.connect(i, neighbor);
            }
        }
    }
    graph
}

/// Erdos-Renyi: ~3 random edges per vertex, no structure.
fn gen_random(n: usize, rng: &mut FastRng) -> Graph {
    let mut graph = with_vertices(n);
    if n < 2 {
        return graph;
    }
    for _ in 0..n * 3 {
        let from = rng.next(n);
        let to = rng.next(n);
        if from != to {
            graph.connect(from, to);
        }
    }
    graph
}

/// Barbell: two dense clusters joined by a chain of bridge vertices.
///
/// Worst case for "find path through bottleneck".
fn gen_barbell(n: usize, rng: &mut FastRng) -> Graph {
    let bridge_len = 10usize.min(n);
    let cluster = (n - bridge_len) / 2;
    let mut graph = with_vertices(n);

    let b_start = cluster + bridge_len;
    for base in [0, b_start] {
        for i in 0..cluster {
            for _ in 0..10usize.min(cluster.saturating_sub(1)) {
                let target = rng.next(cluster);
                if target != i {
                    graph.connect(base + i, base + target);
                }
            }
        }
    }

    // Chain from the last vertex of cluster A through the bridge into cluster B;
    // connect() ignores indices past the end when n is small
    for id in cluster..=b_start {
        if id > 0 {
            graph.connect(id - 1, id);
        }
    }
    graph
}

/// DLA (diffusion-limited aggregation): each new vertex sticks to a recent
/// "surface" vertex, with occasional long-range shortcuts.
fn gen_dla(n: usize, rng: &mut FastRng) -> Graph {
    let mut graph = with_vertices(n);
    let surface_max = 500usize;
    let mut surface: VecDeque<usize> = VecDeque::with_capacity(surface_max + 1);
    surface.push_back(0);

    for new_vertex in 1..n {
        let attach_to = surface[rng.next(surface.len())];
        graph.connect(new_vertex, attach_to);

        // 10% chance of a second connection (creates loops / shortcuts)
        if rng.next(10) == 0 && new_vertex > 1 {
            let other = rng.next(new_vertex);
            if other != attach_to {
                graph.connect(new_vertex, other);
            }
        }

        surface.push_back(new_vertex);
        if surface.len() > surface_max {
            surface.pop_front();
        }
    }
    graph
}
