//! Winning line scanning for the 3x3 board

use super::board::{Cell, Player};

/// Winning line indices on the 3x3 board.
///
/// Rows come before columns before diagonals; [`completed_line`] returns the
/// owner of the first completed line in this order.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Find the owner of the first completed line, if any.
pub fn completed_line(cells: &[Cell; 9]) -> Option<Player> {
    for line in &WINNING_LINES {
        let first = cells[line[0]];
        if first != Cell::Empty && line.iter().all(|&idx| cells[idx] == first) {
            return first.to_player();
        }
    }
    None
}

/// Check if a player has three in a row anywhere on the board
pub fn has_line(cells: &[Cell; 9], player: Player) -> bool {
    let target = player.mark();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_line_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert_eq!(completed_line(&cells), Some(Player::X));
        assert!(has_line(&cells, Player::X));
        assert!(!has_line(&cells, Player::O));
    }

    #[test]
    fn test_completed_line_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        cells[3] = Cell::O;
        cells[6] = Cell::O;

        assert_eq!(completed_line(&cells), Some(Player::O));
        assert!(has_line(&cells, Player::O));
    }

    #[test]
    fn test_completed_line_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::X;
        cells[4] = Cell::X;
        cells[6] = Cell::X;

        assert_eq!(completed_line(&cells), Some(Player::X));
    }

    #[test]
    fn test_no_completed_line() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::O;
        cells[2] = Cell::X;

        assert_eq!(completed_line(&cells), None);
        assert!(!has_line(&cells, Player::X));
        assert!(!has_line(&cells, Player::O));
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // Malformed on purpose: both players hold a complete row. The scan
        // reports the top row's owner.
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;
        cells[6] = Cell::O;
        cells[7] = Cell::O;
        cells[8] = Cell::O;

        assert_eq!(completed_line(&cells), Some(Player::X));
    }
}
