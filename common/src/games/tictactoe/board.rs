use super::types::{Mark, WinningLine};
use super::win_detector::{check_win, check_win_with_line};

pub const CELL_COUNT: usize = 9;

/// 3x3 grid state. `Copy` so the bot can branch on independent scratch
/// copies during search without touching the caller's board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    /// Places a mark iff the position is in range and the cell is empty.
    /// Out-of-range and occupied positions are expected conditions, signaled
    /// by the return value; an occupied cell is never overwritten.
    pub fn place(&mut self, position: usize, mark: Mark) -> bool {
        if mark == Mark::Empty || !self.is_valid_move(position) {
            return false;
        }
        self.cells[position] = mark;
        true
    }

    pub fn is_valid_move(&self, position: usize) -> bool {
        position < CELL_COUNT && self.cells[position] == Mark::Empty
    }

    /// Empty cell indices in ascending order. Search child ordering and the
    /// first-move tie-break both rely on this ordering.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn winner(&self) -> Option<Mark> {
        check_win(self)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(self)
    }

    pub fn is_draw(&self) -> bool {
        self.winner().is_none() && !self.cells.contains(&Mark::Empty)
    }

    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_draw()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Mark::Empty)
    }

    // Unchecked write for place-then-undo during search. Only the bot
    // controller touches this, on scratch copies it owns.
    pub(crate) fn set(&mut self, position: usize, mark: Mark) {
        self.cells[position] = mark;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.is_empty());
        assert_eq!(board.winner(), None);
        assert_eq!(board.available_moves(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_place_valid_move() {
        let mut board = Board::new();
        assert!(board.place(0, Mark::X));
        assert_eq!(board.cells()[0], Mark::X);
    }

    #[test]
    fn test_place_out_of_range_is_rejected() {
        let mut board = Board::new();
        assert!(!board.place(9, Mark::X));
        assert!(board.is_empty());
    }

    #[test]
    fn test_place_occupied_is_rejected() {
        let mut board = Board::new();
        assert!(board.place(4, Mark::X));
        assert!(!board.place(4, Mark::O));
        assert_eq!(board.cells()[4], Mark::X);
    }

    #[test]
    fn test_place_empty_mark_is_rejected() {
        let mut board = Board::new();
        assert!(!board.place(0, Mark::Empty));
        assert!(board.is_empty());
    }

    #[test]
    fn test_available_moves_ascending() {
        let mut board = Board::new();
        board.place(0, Mark::X);
        board.place(1, Mark::O);
        assert_eq!(board.available_moves(), vec![2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_available_moves_single_gap() {
        let mut board = Board::new();
        for position in 0..9 {
            if position != 5 {
                board.place(position, if position % 2 == 0 { Mark::X } else { Mark::O });
            }
        }
        assert_eq!(board.available_moves(), vec![5]);
    }

    #[test]
    fn test_winner_horizontal() {
        let mut board = Board::new();
        for position in [0, 1, 2] {
            board.place(position, Mark::X);
        }
        assert_eq!(board.winner(), Some(Mark::X));
        assert!(board.is_terminal());
    }

    #[test]
    fn test_winner_vertical() {
        let mut board = Board::new();
        for position in [1, 4, 7] {
            board.place(position, Mark::O);
        }
        assert_eq!(board.winner(), Some(Mark::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        for position in [0, 4, 8] {
            board.place(position, Mark::X);
        }
        assert_eq!(board.winner(), Some(Mark::X));
    }

    #[test]
    fn test_winner_recomputed_after_each_placement() {
        // The winner query must track cell contents exactly, including on
        // copies taken mid-game.
        let mut board = Board::new();
        board.place(0, Mark::X);
        board.place(1, Mark::X);
        assert_eq!(board.winner(), None);

        let mut copy = board;
        copy.place(2, Mark::X);
        assert_eq!(copy.winner(), Some(Mark::X));
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let layout = [
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::X,
            Mark::O,
            Mark::O,
            Mark::O,
            Mark::X,
            Mark::X,
        ];
        let mut board = Board::new();
        for (position, &mark) in layout.iter().enumerate() {
            board.place(position, mark);
        }
        assert_eq!(board.winner(), None);
        assert!(board.is_draw());
        assert!(board.is_terminal());
    }

    #[test]
    fn test_partial_board_is_not_draw() {
        let mut board = Board::new();
        board.place(0, Mark::X);
        assert!(!board.is_draw());
        assert!(!board.is_terminal());
    }
}
