//! Command-line driver: picks an engine, runs it, reports the outcome.

use std::time::Instant;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use u_queens::exhaustive::{ExhaustiveConfig, ExhaustiveRunner};
use u_queens::hill::{HillClimbConfig, HillClimbRunner};
use u_queens::sa::{CoolingSchedule, SaConfig, SaRunner};
use u_queens::Board;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Engine {
    /// Backtracking, all solutions
    Exhaustive,
    /// Hill climbing with restarts and sideways moves
    Hill,
    /// Simulated annealing
    Sa,
}

#[derive(Debug, Parser)]
#[command(name = "nqueens", version, about = "Solve the N-Queens problem")]
struct Cli {
    /// Board size
    n: usize,

    #[arg(long, value_enum, default_value_t = Engine::Sa)]
    engine: Engine,

    /// Seed for the stochastic engines
    #[arg(long)]
    seed: Option<u64>,

    /// Stop exhaustive search after this many solutions (0 = all)
    #[arg(long, default_value_t = 0)]
    max_solutions: usize,

    /// Hill climbing restart budget
    #[arg(long, default_value_t = 20)]
    max_restarts: usize,

    /// Hill climbing probability of taking a sideways move
    #[arg(long, default_value_t = 0.4)]
    sideways: f64,

    /// Hill climbing moves per restart (0 = unlimited)
    #[arg(long, default_value_t = 1_000)]
    hill_max_steps: usize,

    /// SA step budget (sa engine only)
    #[arg(long, default_value_t = 100_000_000)]
    max_steps: usize,

    /// SA starting temperature
    #[arg(long, default_value_t = 600.0)]
    temperature: f64,

    /// SA geometric cooling factor
    #[arg(long, default_value_t = 0.9995)]
    cooling: f64,

    /// Do not print the board
    #[arg(long, short)]
    quiet: bool,
}

impl Cli {
    fn hill_config(&self) -> HillClimbConfig {
        let config = HillClimbConfig::default()
            .with_max_restarts(self.max_restarts)
            .with_sideways_probability(self.sideways)
            .with_max_steps(self.hill_max_steps);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    fn sa_config(&self) -> SaConfig {
        let config = SaConfig::default()
            .with_max_steps(self.max_steps)
            .with_initial_temperature(self.temperature)
            .with_cooling(CoolingSchedule::Geometric {
                alpha: self.cooling,
            });
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let n = cli.n;

    let start = Instant::now();
    let (board, summary) = match cli.engine {
        Engine::Exhaustive => {
            let config = ExhaustiveConfig::default().with_max_solutions(cli.max_solutions);
            let result = ExhaustiveRunner::run(n, &config)?;
            let summary = format!(
                "Number of solutions: {}\nNodes: {}",
                result.solution_count(),
                result.nodes
            );
            (result.solutions.into_iter().next(), summary)
        }
        Engine::Hill => {
            let result = HillClimbRunner::run(n, &cli.hill_config())?;
            let summary = format!(
                "Found solution: {}\nRestarts: {}\nSteps: {}",
                yes_no(result.is_solved()),
                result.restarts,
                result.steps
            );
            (result.board, summary)
        }
        Engine::Sa => {
            let result = SaRunner::run(n, &cli.sa_config())?;
            let summary = format!(
                "Found solution: {}\nSteps: {}",
                yes_no(result.is_solved()),
                result.steps
            );
            (result.board, summary)
        }
    };
    let elapsed = start.elapsed();

    println!("N= {n}");
    println!("{summary}");
    println!("Time: {:.4} s", elapsed.as_secs_f64());
    report(board.as_ref(), cli.quiet);
    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn report(board: Option<&Board>, quiet: bool) {
    match board {
        Some(board) if !quiet => println!("Chessboard:\n{board}"),
        Some(_) => {}
        None => println!("No solution found."),
    }
}
