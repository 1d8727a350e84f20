//! Exhaustive memoized solve over the reachable state space
//!
//! Unlike [`crate::search`], which prunes and returns a single action, this
//! module backs up values without pruning and records every optimal action
//! per state, sharing work across transpositions through a memo table. It
//! serves as the unpruned reference implementation and powers whole-tree
//! analysis.

use std::collections::HashMap;

use serde::Serialize;

use crate::board::{Action, Board, Player};

/// Exact value of a state together with every value-optimal action
#[derive(Debug, Clone, Serialize)]
pub struct OptimalPolicy {
    /// Minimax value from X's perspective
    pub value: i32,
    /// All actions achieving the value, in row-major order; empty on
    /// terminal states
    pub optimal_actions: Vec<Action>,
}

/// Solve a single state, memoizing by board encoding.
pub fn solve(board: &Board, memo: &mut HashMap<String, OptimalPolicy>) -> OptimalPolicy {
    let key = board.encode();
    if let Some(policy) = memo.get(&key) {
        return policy.clone();
    }

    if board.is_terminal() {
        let policy = OptimalPolicy {
            value: board.utility(),
            optimal_actions: Vec::new(),
        };
        memo.insert(key, policy.clone());
        return policy;
    }

    let mut best_value = match board.player() {
        Player::X => i32::MIN,
        Player::O => i32::MAX,
    };
    let mut best_actions: Vec<Action> = Vec::new();

    for action in board.empty_actions() {
        let next = board
            .apply(action)
            .expect("generated actions target empty cells");
        let child_value = solve(&next, memo).value;

        let improves = match board.player() {
            Player::X => child_value > best_value,
            Player::O => child_value < best_value,
        };

        if improves {
            best_value = child_value;
            best_actions.clear();
            best_actions.push(action);
        } else if child_value == best_value {
            best_actions.push(action);
        }
    }

    let policy = OptimalPolicy {
        value: best_value,
        optimal_actions: best_actions,
    };
    memo.insert(key, policy.clone());
    policy
}

/// Solve every state reachable from the empty board.
///
/// Returns the memo table keyed by board encoding (5478 reachable states,
/// terminal ones included).
pub fn solve_reachable() -> HashMap<String, OptimalPolicy> {
    let mut memo = HashMap::new();
    solve(&Board::new(), &mut memo);
    memo
}
