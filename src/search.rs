//! Minimax search with alpha-beta pruning
//!
//! Two pure mutually recursive functions back up exact values over the game
//! tree: `max_value` for X and `min_value` for O. Alpha and beta are
//! threaded as explicit parameters; a branch is abandoned as soon as
//! `alpha >= beta`, which never changes the backed-up value at the root.

use crate::board::{Action, Board, Player};

/// Bound below every utility in {-1, 0, 1}
const LOSS_BOUND: i32 = -2;
/// Bound above every utility in {-1, 0, 1}
const WIN_BOUND: i32 = 2;

/// The optimal action for the player to move, or `None` on a terminal board.
///
/// Assumes both players play optimally for the remainder of the game. When
/// several actions share the optimal value, the first one encountered in
/// row-major exploration order is returned.
///
/// # Examples
///
/// ```
/// use ttt_solver::{minimax, Action, Board};
///
/// // X completes the top row rather than doing anything else
/// let board: Board = "XX.OO....".parse().unwrap();
/// assert_eq!(minimax(&board), Some(Action::new(0, 2)));
/// ```
pub fn minimax(board: &Board) -> Option<Action> {
    if board.is_terminal() {
        return None;
    }

    let (_, action) = match board.player() {
        Player::X => max_value(board, LOSS_BOUND, WIN_BOUND),
        Player::O => min_value(board, LOSS_BOUND, WIN_BOUND),
    };
    action
}

/// The exact minimax value of a position, from X's perspective.
///
/// `1` when X forces a win, `-1` when O does, `0` when perfect play draws.
/// On terminal boards this is the utility itself.
pub fn evaluate(board: &Board) -> i32 {
    match board.player() {
        Player::X => max_value(board, LOSS_BOUND, WIN_BOUND).0,
        Player::O => min_value(board, LOSS_BOUND, WIN_BOUND).0,
    }
}

fn max_value(board: &Board, alpha: i32, beta: i32) -> (i32, Option<Action>) {
    if board.is_terminal() {
        return (board.utility(), None);
    }

    let mut alpha = alpha;
    let mut best = LOSS_BOUND;
    let mut chosen = None;

    for action in board.empty_actions() {
        let next = board
            .apply(action)
            .expect("generated actions target empty cells");
        let (value, _) = min_value(&next, alpha, beta);

        if value > best {
            best = value;
            chosen = Some(action);
        }
        alpha = alpha.max(best);
        if alpha >= beta {
            break;
        }
    }

    (best, chosen)
}

fn min_value(board: &Board, alpha: i32, beta: i32) -> (i32, Option<Action>) {
    if board.is_terminal() {
        return (board.utility(), None);
    }

    let mut beta = beta;
    let mut best = WIN_BOUND;
    let mut chosen = None;

    for action in board.empty_actions() {
        let next = board
            .apply(action)
            .expect("generated actions target empty cells");
        let (value, _) = max_value(&next, alpha, beta);

        if value < best {
            best = value;
            chosen = Some(action);
        }
        beta = beta.min(best);
        if alpha >= beta {
            break;
        }
    }

    (best, chosen)
}
