//! Benchmark runner: sequential vs tiled multi-threaded multiplication.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use mtxmult::config::{FillMode, RunConfig, StrategyMode};
use mtxmult::matrix::buffer::Element;
use mtxmult::timer::time;
use mtxmult::{Fill, Generator, Matrix, multiply, multiply_parallel_with};

/// Time single-threaded against tiled multi-threaded matrix multiplication
#[derive(Parser)]
#[command(name = "mtxmult", version)]
#[command(after_help = "Constraints: n >= 4 and n % s == 0")]
struct Cli {
    /// Size of the matrices (n >= 4)
    n: usize,

    /// Size of each tile (n % s == 0)
    s: usize,

    /// How to fill generated operands
    #[arg(long, value_enum, default_value_t = FillMode::Ones)]
    fill: FillMode,

    /// Exclusive upper bound for random cells
    #[arg(long, value_name = "K", default_value_t = 10)]
    max: Element,

    /// Seed for reproducible random operands
    #[arg(long)]
    seed: Option<u64>,

    /// Print A, B and both products
    #[arg(long)]
    display: bool,

    /// Column width used when printing matrices
    #[arg(long, value_name = "W", default_value_t = 4)]
    width: usize,

    /// How concurrent workers combine partial products
    #[arg(long, value_enum, default_value_t = StrategyMode::PartialSums)]
    strategy: StrategyMode,

    /// Read A from a whitespace-separated text file instead of generating it
    #[arg(long, value_name = "PATH")]
    left: Option<PathBuf>,

    /// Read B from a whitespace-separated text file instead of generating it
    #[arg(long, value_name = "PATH")]
    right: Option<PathBuf>,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL", default_value = "warn", env = "MTXMULT_LOG")]
    log_level: String,
}

impl Cli {
    fn into_config(self) -> RunConfig {
        RunConfig {
            size: self.n,
            tile_size: self.s,
            fill: self.fill,
            max: self.max,
            seed: self.seed,
            display: self.display,
            width: self.width,
            strategy: self.strategy,
            left: self.left,
            right: self.right,
        }
    }
}

/// Parses and validates arguments; constraint violations become clap usage errors.
fn parse_args<I, T>(args: I) -> Result<(RunConfig, String), clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    let log_level = cli.log_level.clone();
    let config = cli.into_config();
    config
        .validate()
        .map_err(|e| Cli::command().error(ErrorKind::ValueValidation, e))?;
    Ok((config, log_level))
}

fn main() -> Result<()> {
    let (config, log_level) = parse_args(std::env::args_os()).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    run(&config)
}

fn run(config: &RunConfig) -> Result<()> {
    println!("Parameters: n={}; s={}", config.size, config.tile_size);

    let mut generator = match config.seed {
        Some(seed) => Generator::seeded(seed),
        None => Generator::from_entropy(),
    };
    let fill = config.generated_fill();

    let a = load_operand(&mut generator, config.size, &fill, config.left.as_deref())
        .context("failed to build matrix A")?;
    show(config, "Matrix A", &a);
    let b = load_operand(&mut generator, config.size, &fill, config.right.as_deref())
        .context("failed to build matrix B")?;
    show(config, "Matrix B", &b);

    println!("Single-threaded multiplication...");
    let sequential = time("sequential", || multiply(&a, &b));
    println!("Done! It took {}ms", sequential.millis());
    let (sequential_ms, c_seq) = (sequential.millis_f64(), sequential.value?);
    show(config, "Matrix C", &c_seq);

    println!("Multi-threaded multiplication...");
    let parallel = time("parallel", || {
        multiply_parallel_with(&a, &b, config.tile_size, config.accumulation())
    });
    println!("Done! It took {}ms", parallel.millis());
    let (parallel_ms, c_par) = (parallel.millis_f64(), parallel.value?);
    show(config, "Matrix C", &c_par);

    info!(
        n = config.size,
        tile_size = config.tile_size,
        sequential_ms,
        parallel_ms,
        "run complete"
    );

    if c_seq != c_par {
        println!("Verification: FAILED (sequential != parallel)");
        bail!("parallel product differs from sequential product");
    }
    println!("Verification: PASSED (sequential == parallel)");
    println!("Result checksum: {}", c_seq.checksum());
    Ok(())
}

fn load_operand(
    generator: &mut Generator,
    n: usize,
    fill: &Fill,
    path: Option<&Path>,
) -> Result<Matrix> {
    let matrix = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            generator.generate(n, &Fill::Text(text))?
        }
        None => generator.generate(n, fill)?,
    };
    Ok(matrix)
}

fn show(config: &RunConfig, title: &str, m: &Matrix) {
    if config.display {
        println!("{}", title);
        println!("{}", m.render(config.width));
        println!();
    }
}
