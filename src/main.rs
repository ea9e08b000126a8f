//! frontier-graph: run BFS or SSSP over a Matrix-Market graph
//!
//! Loads the graph, optionally computes a sequential reference, runs the
//! parallel enactor, then prints validity, a solution listing and (when
//! instrumented) run statistics.

mod cli;

use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Algorithm, Cli};
use frontier_graph::algorithms::{bfs, check_predecessors, compare_labels, reference, sssp};
use frontier_graph::display::{
    format_solution, format_stats, timing_line, validity_line, DISPLAY_LIMIT,
};
use frontier_graph::{logging, read_market, MarketOptions, NodeId};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                err.exit()
            }
            _ => {
                if err.print().is_err() {
                    eprintln!("{err}");
                }
                return ExitCode::FAILURE;
            }
        },
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {e}");
    }

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let options = MarketOptions {
        undirected: cli.undirected,
    };
    let graph = read_market(&cli.file, options).await?;
    let source = NodeId(cli.src);
    let name = cli.algorithm.label();

    let expected = if cli.quick {
        None
    } else {
        println!("Computing reference value ...");
        let start = Instant::now();
        let labels = match cli.algorithm {
            Algorithm::Bfs => reference::bfs_levels(&graph, source),
            Algorithm::Sssp => reference::dijkstra(&graph, source),
        };
        println!("{}", timing_line(&format!("CPU {name}"), start.elapsed()));
        Some(labels)
    };

    let config = cli.enactor_config();
    let (result, stats) = match cli.algorithm {
        Algorithm::Bfs => bfs(&graph, source, &config),
        Algorithm::Sssp => sssp(&graph, source, &config),
    }
    .with_context(|| format!("{name} from node {} failed", source.0))?;
    println!("{}", timing_line(name, stats.elapsed));

    if let Some(expected) = &expected {
        let labels = compare_labels(expected, &result.labels);
        println!("{}", validity_line("Label", &labels));

        if let Some(preds) = &result.predecessors {
            let weighted = cli.algorithm == Algorithm::Sssp;
            let check = check_predecessors(&graph, source, &result.labels, preds, weighted);
            println!("{}", validity_line("Predecessor", &check));
        }
    }

    println!(
        "{}",
        format_solution(&result.labels, result.predecessors.as_deref(), DISPLAY_LIMIT)
    );

    if cli.instrumented {
        println!("{}", format_stats(&stats));
    }

    Ok(())
}
