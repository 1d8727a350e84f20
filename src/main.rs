//! ttt-solver CLI - exact tic-tac-toe analysis from the command line

use anyhow::Result;
use clap::{Parser, Subcommand};

use ttt_solver::cli;

#[derive(Parser)]
#[command(name = "ttt-solver")]
#[command(version, about = "Exact tic-tac-toe solver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the optimal move and exact value for a position
    Solve(cli::SolveArgs),

    /// Play a full game with the solver on both sides
    Selfplay(cli::SelfplayArgs),

    /// Enumerate the reachable state space and report opening values
    Analyze(cli::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => cli::execute_solve(args),
        Commands::Selfplay(args) => cli::execute_selfplay(args),
        Commands::Analyze(args) => cli::execute_analyze(args),
    }
}
