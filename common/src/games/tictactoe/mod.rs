mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT};
pub use bot_controller::BotPlayer;
pub use game_state::GameState;
pub use types::{Difficulty, GameStatus, Mark, WinningLine};
pub use win_detector::{check_win, check_win_with_line, WIN_LINES};
