use super::board::Board;
use super::types::{Mark, WinningLine};

/// The 8 possible winning triples: rows, then columns, then diagonals.
/// Scan order is fixed so `check_win` is deterministic.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Recomputes the winner from cell contents. Nothing caches this result;
/// every query scans the triples again.
pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    for line in WIN_LINES {
        let mark = cells[line[0]];
        if mark != Mark::Empty && cells[line[1]] == mark && cells[line[2]] == mark {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(cells: [Mark; 9]) -> Board {
        let mut board = Board::new();
        for (i, &mark) in cells.iter().enumerate() {
            if mark != Mark::Empty {
                assert!(board.place(i, mark));
            }
        }
        board
    }

    #[test]
    fn test_every_triple_is_detected() {
        for line in WIN_LINES {
            let mut cells = [Mark::Empty; 9];
            for index in line {
                cells[index] = Mark::X;
            }
            let board = board_from(cells);
            assert_eq!(check_win(&board), Some(Mark::X), "missed triple {:?}", line);
            assert_eq!(check_win_with_line(&board).unwrap().cells, line);
        }
    }

    #[test]
    fn test_mixed_triple_is_not_a_win() {
        let board = board_from([
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::Empty,
            Mark::Empty,
            Mark::Empty,
            Mark::Empty,
            Mark::Empty,
            Mark::Empty,
        ]);
        assert_eq!(check_win(&board), None);
    }
}
