use clap::Parser;
use index_scheduler::{naive_associate_indices, Error, IndexScheduler, Instance, Step};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(clap::Subcommand)]
enum Command {
    /// Answer the given query positions and print the result as JSON.
    Run {
        /// Comma separated permutation, e.g. 4,8,3,9.
        #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
        permutation: Vec<i32>,
        /// Comma separated, non-decreasing query positions.
        #[arg(short, long, value_delimiter = ',')]
        indices: Vec<usize>,
    },
    /// Walk through the built-in example step by step.
    Demo,
    /// Compare the heap scheduler against the re-scanning baseline on random inputs.
    Verify {
        /// Permutation length.
        #[arg(short, default_value_t = 1000)]
        n: usize,
        /// Number of query positions.
        #[arg(short, default_value_t = 100)]
        k: usize,
        /// Number of random instances.
        #[arg(long, default_value_t = 1000)]
        runs: u64,
        /// Seed of the first instance; instance `i` uses `seed + i`, wrapping.
        #[arg(long, default_value_t = 213456)]
        seed: u64,
    },
}

#[derive(clap::Parser)]
struct Args {
    /// Increase verbosity (-v, -vv). Overridden by RUST_LOG.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Serialize)]
struct Output<'a> {
    permutation: &'a [i32],
    indices: &'a [usize],
    result: Vec<i32>,
}

#[derive(Serialize)]
struct DemoOutput {
    steps: Vec<Step<i32>>,
    result: Vec<i32>,
}

#[derive(Default, Serialize)]
struct Summary {
    runs: u64,
    /// Both strategies returned the same values.
    agree_ok: u64,
    /// Both strategies failed at the same query position.
    agree_err: u64,
    disagree: Vec<u64>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(permutation: &[i32], indices: &[usize]) -> Result<(), Box<dyn std::error::Error>> {
    let result = IndexScheduler::new(Some(permutation), Some(indices))?.associate_indices()?;
    let output = Output {
        permutation,
        indices,
        result,
    };
    println!("{}", serde_json::to_string(&output)?);
    Ok(())
}

fn demo() -> Result<(), Box<dyn std::error::Error>> {
    let permutation = [4, 8, 3, 9, 2, 6, 1, 7, 5];
    let indices = [2, 3, 6, 6, 6, 8];
    info!("permutation P: {permutation:?}");
    info!("indices I: {indices:?}");

    let mut scheduler = IndexScheduler::new(Some(&permutation[..]), Some(&indices[..]))?;
    let mut steps = vec![];
    for (i, &idx) in indices.iter().enumerate() {
        let step = scheduler.step(idx)?;
        info!("step {}: i_k = {idx}", i + 1);
        for v in &step.inserted {
            info!("  insert {v}");
        }
        info!("  extract_min() = {}", step.extracted);
        info!("  heap after extraction: {}", scheduler.queue());
        steps.push(step);
    }
    let result = steps.iter().map(|step| step.extracted).collect();
    println!("{}", serde_json::to_string(&DemoOutput { steps, result })?);
    Ok(())
}

fn verify(n: usize, k: usize, runs: u64, seed: u64) -> Result<(), Box<dyn std::error::Error>> {
    if i32::try_from(n).is_err() {
        return Err(format!("n={n} does not fit in i32").into());
    }
    let outcomes = (0..runs)
        .into_par_iter()
        .map(|i| {
            let inst = Instance::random(n, k, seed.wrapping_add(i));
            let heap = inst.scheduler().and_then(|mut s| s.associate_indices());
            let naive = naive_associate_indices(&inst.permutation, &inst.query_positions);
            (i, heap, naive)
        })
        .collect::<Vec<_>>();

    let mut summary = Summary {
        runs,
        ..Default::default()
    };
    for (i, heap, naive) in outcomes {
        match (heap, naive) {
            (Ok(a), Ok(b)) if a == b => summary.agree_ok += 1,
            (Err(Error::IllegalState { query_position: a }), Err(Error::IllegalState { query_position: b }))
                if a == b =>
            {
                summary.agree_err += 1
            }
            (heap, naive) => {
                warn!(seed = seed.wrapping_add(i), ?heap, ?naive, "strategies disagree");
                summary.disagree.push(seed.wrapping_add(i));
            }
        }
    }
    info!(
        "{} instances: {} answered, {} rejected, {} disagreements",
        summary.runs,
        summary.agree_ok,
        summary.agree_err,
        summary.disagree.len()
    );
    println!("{}", serde_json::to_string(&summary)?);
    if summary.disagree.is_empty() {
        Ok(())
    } else {
        Err(format!("{} instances disagree", summary.disagree.len()).into())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_backtrace::install();
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Run {
            permutation,
            indices,
        } => run(&permutation, &indices),
        Command::Demo => demo(),
        Command::Verify { n, k, runs, seed } => verify(n, k, runs, seed),
    }
}
