use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use dotenv::dotenv;
use itertools::Itertools;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use graph_works::config::Config;
use graph_works::graph::algo::prim;
use graph_works::graph::combination::Combinations;
use graph_works::graph::Graph;
use graph_works::io::{read_weight_matrix, write_all_graphs};

const USAGE: &str = "usage:
    graph-works                          interactive menu
    graph-works mst [INPUT]              minimum spanning tree of a weight matrix
    graph-works generate <MAX> [OUTPUT]  every graph on 2..=MAX vertices
    graph-works combinations <N> <M>     list the M-subsets of 0..N";

#[derive(Debug, PartialEq)]
enum Command {
    Menu,
    SpanningTree(Option<PathBuf>),
    Generate {
        max_vertices: usize,
        output: Option<PathBuf>,
    },
    Combinations {
        n: usize,
        m: usize,
    },
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("graph_works=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

fn parse_count(arg: Option<String>, name: &str) -> Result<usize> {
    let arg = arg.with_context(|| format!("missing <{name}>\n{USAGE}"))?;
    arg.parse()
        .with_context(|| format!("<{name}> must be a non-negative integer, got `{arg}`"))
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Command> {
    let command = match args.next().as_deref() {
        None => Command::Menu,
        Some("mst") => Command::SpanningTree(args.next().map(PathBuf::from)),
        Some("generate") => Command::Generate {
            max_vertices: parse_count(args.next(), "MAX")?,
            output: args.next().map(PathBuf::from),
        },
        Some("combinations") => Command::Combinations {
            n: parse_count(args.next(), "N")?,
            m: parse_count(args.next(), "M")?,
        },
        Some(other) => bail!("unknown command `{other}`\n{USAGE}"),
    };

    if let Some(extra) = args.next() {
        bail!("unexpected argument `{extra}`\n{USAGE}");
    }
    Ok(command)
}

fn main() -> Result<()> {
    dotenv().ok();
    init_tracing();

    let config = Config::from_env();
    let result = parse_args(std::env::args().skip(1)).and_then(|command| match command {
        Command::Menu => menu(&config),
        Command::SpanningTree(input) => {
            spanning_tree(input.as_deref().unwrap_or(config.input_path.as_path()))
        }
        Command::Generate {
            max_vertices,
            output,
        } => graph_generation(
            max_vertices,
            output.as_deref().unwrap_or(config.output_path.as_path()),
        ),
        Command::Combinations { n, m } => combinations(n, m),
    });

    if let Err(e) = &result {
        error!(error = %e, "graph-works failed");
    }
    result
}

/// read one trimmed line, failing on end of input
fn prompt(lines: &mut impl BufRead, message: &str) -> Result<String> {
    print!("{message}\n > ");
    io::stdout().flush()?;

    let mut line = String::new();
    if lines.read_line(&mut line)? == 0 {
        bail!("unexpected end of input");
    }
    Ok(line.trim().to_string())
}

fn menu(config: &Config) -> Result<()> {
    println!();
    println!("--------------------------------------------");
    println!(" Graph Works                  version {}", env!("CARGO_PKG_VERSION"));
    println!("--------------------------------------------");
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock();
    let choice = loop {
        match prompt(&mut lines, " 1: Spanning Tree\n 2: Graph Generation")?.as_str() {
            "1" => break 1,
            "2" => break 2,
            _ => continue,
        }
    };
    println!();

    if choice == 1 {
        return spanning_tree(&config.input_path);
    }

    let max_vertices = loop {
        let answer = prompt(&mut lines, " Generate all graphs up to how many vertices?")?;
        match answer.parse::<usize>() {
            Ok(n) if n >= 2 => break n,
            _ => warn!(answer = %answer, "expected a vertex count of at least 2"),
        }
    };
    graph_generation(max_vertices, &config.output_path)
}

fn spanning_tree(input: &Path) -> Result<()> {
    if !input.exists() {
        bail!("{} is absent", input.display());
    }
    let file = File::open(input).with_context(|| format!("failed to open {}", input.display()))?;
    let graph: Graph = read_weight_matrix(BufReader::new(file))
        .with_context(|| format!("failed to read weight matrix from {}", input.display()))?;

    println!("Weighted edges will be shown as follows,");
    println!("   index: <unordered vertices> weight[ w ]");
    println!();
    println!("For the given graph, G:");
    print!("{graph}");

    let tree = prim(&graph)?;
    info!(
        vertices = graph.vertex_count(),
        edges = tree.edges().len(),
        "spanning tree complete"
    );

    println!("The spanning tree T of G:");
    print!("{tree}");
    println!("Total weight of T:");
    println!("   {}", tree.total_weight());
    println!();
    Ok(())
}

fn graph_generation(max_vertices: usize, output: &Path) -> Result<()> {
    let file =
        File::create(output).with_context(|| format!("failed to create {}", output.display()))?;
    let written = write_all_graphs(max_vertices, BufWriter::new(file))
        .with_context(|| format!("failed to write graphs to {}", output.display()))?;

    println!("{written} graphs written to {}", output.display());
    Ok(())
}

fn combinations(n: usize, m: usize) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut comb = Combinations::new(n, m)?;
    while let Some(idx) = comb.next_ref() {
        writeln!(out, "{}", idx.iter().join(" "))?;
    }
    out.flush()?;
    Ok(())
}
