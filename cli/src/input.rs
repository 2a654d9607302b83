use common::games::tictactoe::Board;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Move(usize),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInput {
    /// Zero-based board position parsed from one-based input.
    Position(usize),
    Quit,
    OutOfRange,
    NotANumber,
}

pub fn parse_move(raw: &str) -> MoveInput {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("q") {
        return MoveInput::Quit;
    }
    match trimmed.parse::<u32>() {
        Ok(number @ 1..=9) => MoveInput::Position((number - 1) as usize),
        Ok(_) => MoveInput::OutOfRange,
        Err(_) => MoveInput::NotANumber,
    }
}

/// Prompts until the human enters a legal move or quits. EOF on stdin is
/// treated as quitting.
pub fn prompt_human_move(board: &Board) -> io::Result<PlayerAction> {
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("Enter your move (1-9) or 'q' to quit: ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(PlayerAction::Quit);
        }

        match parse_move(&line) {
            MoveInput::Quit => return Ok(PlayerAction::Quit),
            MoveInput::Position(position) if board.is_valid_move(position) => {
                return Ok(PlayerAction::Move(position));
            }
            MoveInput::Position(_) | MoveInput::OutOfRange => {
                println!("Invalid move. Try again.");
            }
            MoveInput::NotANumber => {
                println!("Please enter a number between 1 and 9.");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_positions() {
        assert_eq!(parse_move("1"), MoveInput::Position(0));
        assert_eq!(parse_move(" 9 \n"), MoveInput::Position(8));
        assert_eq!(parse_move("5"), MoveInput::Position(4));
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!(parse_move("q"), MoveInput::Quit);
        assert_eq!(parse_move("Q\n"), MoveInput::Quit);
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(parse_move("0"), MoveInput::OutOfRange);
        assert_eq!(parse_move("10"), MoveInput::OutOfRange);
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_move("abc"), MoveInput::NotANumber);
        assert_eq!(parse_move(""), MoveInput::NotANumber);
        assert_eq!(parse_move("-1"), MoveInput::NotANumber);
    }
}
