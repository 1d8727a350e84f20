//! Game-rules invariants for the board value type

use rand::{prelude::IndexedRandom, rngs::StdRng, SeedableRng};

use ttt_solver::{Action, Board, Cell, Error, Player};

#[test]
fn x_opens_and_turns_alternate_along_any_line_of_play() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..20 {
        let mut board = Board::new();
        let mut expected = Player::X;

        while !board.is_terminal() {
            assert_eq!(board.player(), expected);
            let legal: Vec<Action> = board.empty_actions().collect();
            let action = *legal.choose(&mut rng).unwrap();
            board = board.apply(action).unwrap();
            expected = expected.opponent();
        }
    }
}

#[test]
fn first_move_places_x_and_passes_the_turn() {
    let board = Board::new().apply(Action::new(0, 0)).unwrap();

    assert_eq!(board.get(Action::new(0, 0)), Cell::X);
    assert_eq!(board.player(), Player::O);
    for idx in 1..9 {
        assert_eq!(board.get(Action::from_index(idx)), Cell::Empty);
    }
}

#[test]
fn successor_adds_exactly_one_mark_of_the_mover() {
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..20 {
        let mut board = Board::new();

        while !board.is_terminal() {
            let mover = board.player();
            let before = board.occupied_count();
            let legal: Vec<Action> = board.empty_actions().collect();
            let action = *legal.choose(&mut rng).unwrap();

            let next = board.apply(action).unwrap();
            assert_eq!(next.occupied_count(), before + 1);
            assert_eq!(next.get(action), mover.mark());
            // Only the target cell changed
            for idx in 0..9 {
                let a = Action::from_index(idx);
                if a != action {
                    assert_eq!(next.get(a), board.get(a));
                }
            }

            board = next;
        }
    }
}

#[test]
fn apply_fails_outside_the_action_set() {
    let board = Board::new().apply(Action::new(1, 1)).unwrap();

    // Re-selecting a filled cell
    assert!(matches!(
        board.apply(Action::new(1, 1)),
        Err(Error::CellOccupied { row: 1, col: 1 })
    ));

    // Coordinates outside [0,2]x[0,2]
    assert!(matches!(
        board.apply(Action::new(3, 1)),
        Err(Error::OutOfBounds { row: 3, col: 1 })
    ));
    assert!(matches!(
        board.apply(Action::new(0, 9)),
        Err(Error::OutOfBounds { row: 0, col: 9 })
    ));

    // Failure leaves the input board untouched
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn terminal_iff_line_or_full_board() {
    let cases = [
        ("XXXOO....", true),  // row
        ("XO.XO.X..", true),  // column
        ("XO..XO..X", true),  // diagonal
        ("XOXXOOOXX", true),  // full, drawn
        ("XOXXO.O..", false), // mid-game
        (".........", false), // empty
    ];

    for (s, expected) in cases {
        let board: Board = s.parse().unwrap();
        assert_eq!(board.is_terminal(), expected, "board {s}");
    }
}

#[test]
fn utility_tracks_winner() {
    let x_win: Board = "XXXOO....".parse().unwrap();
    assert_eq!(x_win.winner(), Some(Player::X));
    assert_eq!(x_win.utility(), 1);

    let o_win: Board = "OX.OX.O.X".parse().unwrap();
    assert_eq!(o_win.winner(), Some(Player::O));
    assert_eq!(o_win.utility(), -1);

    let draw: Board = "XOXXOOOXX".parse().unwrap();
    assert_eq!(draw.winner(), None);
    assert_eq!(draw.utility(), 0);
}

#[test]
fn actions_are_exactly_the_empty_cells() {
    let board: Board = "XOXXO.O..".parse().unwrap();
    let actions = board.actions();

    assert_eq!(actions.len(), 3);
    assert!(actions.contains(&Action::new(1, 2)));
    assert!(actions.contains(&Action::new(2, 1)));
    assert!(actions.contains(&Action::new(2, 2)));
}
