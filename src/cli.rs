//! Command-line interface for the solver
//!
//! Three commands: `solve` reports the optimal move for a position,
//! `selfplay` runs a full solver-vs-solver game, and `analyze` enumerates
//! the reachable state space with the exhaustive solver.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::{
    board::{Action, Board},
    game::{Game, GameOutcome},
    policy, search,
};

#[derive(Args)]
pub struct SolveArgs {
    /// Board position as 9 cell characters, e.g. "XOX.O.X.." ('.' = empty)
    pub board: String,

    /// Emit the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct SelfplayArgs {
    /// Print only the final position and outcome
    #[arg(long)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Emit the opening-move table as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Solution {
    action: Option<Action>,
    value: i32,
}

#[derive(Serialize)]
struct OpeningReport {
    action: Action,
    value: i32,
}

pub fn execute_solve(args: SolveArgs) -> Result<()> {
    let board: Board = args
        .board
        .parse()
        .with_context(|| format!("failed to parse board '{}'", args.board))?;

    let solution = Solution {
        action: search::minimax(&board),
        value: search::evaluate(&board),
    };

    if args.json {
        println!("{}", serde_json::to_string(&solution)?);
        return Ok(());
    }

    println!("{board}");
    println!();
    match solution.action {
        Some(action) => {
            print_kv("side to move", &board.player().to_string());
            print_kv("best move", &action.to_string());
            print_kv("value", &describe_value(solution.value));
        }
        None => {
            print_kv("game over", &describe_outcome(&board));
        }
    }

    Ok(())
}

pub fn execute_selfplay(args: SelfplayArgs) -> Result<()> {
    let mut game = Game::new();

    while let Some(action) = search::minimax(game.board()) {
        let mover = game.board().player();
        game.play(action)
            .context("solver produced an illegal move")?;
        if !args.quiet {
            println!("{mover} plays {action}");
            println!("{}\n", game.board());
        }
    }

    println!("{}", game.board());
    match game.outcome() {
        Some(GameOutcome::Win(player)) => print_kv("outcome", &format!("{player} wins")),
        Some(GameOutcome::Draw) => print_kv("outcome", "draw"),
        None => print_kv("outcome", "unfinished"),
    }
    print_kv("moves played", &game.moves().len().to_string());

    Ok(())
}

pub fn execute_analyze(args: AnalyzeArgs) -> Result<()> {
    let mut memo = policy::solve_reachable();

    let root = Board::new();
    let mut openings = Vec::new();
    for action in root.empty_actions() {
        let child = root.apply(action).context("opening move rejected")?;
        // Already memoized by solve_reachable; this is a table lookup
        let child_policy = policy::solve(&child, &mut memo);
        openings.push(OpeningReport {
            action,
            value: child_policy.value,
        });
    }

    if args.json {
        println!("{}", serde_json::to_string(&openings)?);
        return Ok(());
    }

    print_section("Reachable state space");
    print_kv("states", &memo.len().to_string());
    let terminal = memo
        .keys()
        .filter(|key| {
            key.parse::<Board>()
                .map(|b| b.is_terminal())
                .unwrap_or(false)
        })
        .count();
    print_kv("terminal states", &terminal.to_string());
    print_kv("game value", &describe_value(search::evaluate(&root)));

    print_section("Opening moves");
    for opening in &openings {
        print_kv(&opening.action.to_string(), &describe_value(opening.value));
    }

    Ok(())
}

fn describe_value(value: i32) -> String {
    match value {
        1 => "X wins with perfect play (+1)".to_string(),
        -1 => "O wins with perfect play (-1)".to_string(),
        0 => "draw with perfect play (0)".to_string(),
        other => format!("unexpected value {other}"),
    }
}

fn describe_outcome(board: &Board) -> String {
    match board.winner() {
        Some(player) => format!("{player} won"),
        None => "draw".to_string(),
    }
}

/// Print a section header
fn print_section(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
fn print_kv(key: &str, value: &str) {
    println!("  {:16} {}", format!("{key}:"), value);
}
