use super::board::Board;
use super::types::{GameStatus, Mark};

/// One round of play: the board plus whose turn it is. X always moves
/// first. The status is recomputed from the board on every query; there is
/// no cached outcome to go stale.
#[derive(Clone, Copy, Debug)]
pub struct GameState {
    board: Board,
    current_mark: Mark,
    last_move: Option<usize>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn status(&self) -> GameStatus {
        match self.board.winner() {
            Some(Mark::X) => GameStatus::XWon,
            Some(Mark::O) => GameStatus::OWon,
            Some(Mark::Empty) => unreachable!("winner is never Empty"),
            None if self.board.is_draw() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Commits the current player's move and passes the turn.
    pub fn place_mark(&mut self, position: usize) -> Result<(), String> {
        if self.status() != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if !self.board.place(position, self.current_mark) {
            return Err("Cell is occupied or out of bounds".to_string());
        }

        self.last_move = Some(position);

        if self.status() == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_moves_first_and_turns_alternate() {
        let mut state = GameState::new();
        assert_eq!(state.current_mark(), Mark::X);
        state.place_mark(0).unwrap();
        assert_eq!(state.current_mark(), Mark::O);
        state.place_mark(4).unwrap();
        assert_eq!(state.current_mark(), Mark::X);
    }

    #[test]
    fn test_occupied_cell_is_rejected_and_turn_kept() {
        let mut state = GameState::new();
        state.place_mark(0).unwrap();
        assert!(state.place_mark(0).is_err());
        assert_eq!(state.current_mark(), Mark::O);
    }

    #[test]
    fn test_win_ends_the_game() {
        let mut state = GameState::new();
        for position in [0, 3, 1, 4, 2] {
            state.place_mark(position).unwrap();
        }
        assert_eq!(state.status(), GameStatus::XWon);
        assert!(state.place_mark(5).is_err());
    }

    #[test]
    fn test_last_move_tracks_placements() {
        let mut state = GameState::new();
        assert_eq!(state.last_move(), None);
        state.place_mark(6).unwrap();
        assert_eq!(state.last_move(), Some(6));
    }

    #[test]
    fn test_draw_status() {
        let mut state = GameState::new();
        for position in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            state.place_mark(position).unwrap();
        }
        assert_eq!(state.status(), GameStatus::Draw);
    }
}
