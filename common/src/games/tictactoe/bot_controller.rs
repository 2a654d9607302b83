use super::board::{Board, CELL_COUNT};
use super::types::{Difficulty, Mark};
use crate::games::SessionRng;

/// Empty-board openings for the hard bot: corners and center. All are
/// drawing under perfect defense; edges are skipped only to vary openings
/// without giving anything away.
const OPENING_MOVES: [usize; 5] = [0, 2, 4, 6, 8];

/// Computer opponent. Holds its difficulty and mark, nothing else; every
/// call works on scratch copies of the caller's board.
pub struct BotPlayer {
    difficulty: Difficulty,
    mark: Mark,
}

impl BotPlayer {
    pub fn new(difficulty: Difficulty, mark: Mark) -> Self {
        Self { difficulty, mark }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the chosen cell index, or `None` iff no legal move exists.
    pub fn choose_move(&self, board: &Board, rng: &mut SessionRng) -> Option<usize> {
        let available_moves = board.available_moves();
        if available_moves.is_empty() {
            return None;
        }

        match self.difficulty {
            Difficulty::Easy => calculate_random_move(&available_moves, rng),
            Difficulty::Medium => {
                calculate_heuristic_move(board, self.mark, &available_moves, rng)
            }
            Difficulty::Hard => calculate_minimax_move(board, self.mark, &available_moves, rng),
        }
    }
}

fn calculate_random_move(available_moves: &[usize], rng: &mut SessionRng) -> Option<usize> {
    rng.choose(available_moves)
}

/// Depth-1 lookahead: take an immediate win, else block an immediate loss,
/// else play randomly. Deliberately blind to forks so it stays strictly
/// weaker than the minimax bot.
fn calculate_heuristic_move(
    board: &Board,
    bot_mark: Mark,
    available_moves: &[usize],
    rng: &mut SessionRng,
) -> Option<usize> {
    let opponent_mark = bot_mark.opponent()?;
    let mut scratch = *board;

    if let Some(position) = find_winning_move(&mut scratch, bot_mark, available_moves) {
        return Some(position);
    }

    if let Some(position) = find_winning_move(&mut scratch, opponent_mark, available_moves) {
        return Some(position);
    }

    calculate_random_move(available_moves, rng)
}

/// First move (in ascending order) that completes a triple for `mark`.
fn find_winning_move(board: &mut Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    for &position in moves {
        board.set(position, mark);
        let winner = board.winner();
        board.set(position, Mark::Empty);

        if winner == Some(mark) {
            return Some(position);
        }
    }
    None
}

fn calculate_minimax_move(
    board: &Board,
    bot_mark: Mark,
    available_moves: &[usize],
    rng: &mut SessionRng,
) -> Option<usize> {
    let opponent_mark = bot_mark.opponent()?;

    // Searching the empty board always yields the same opening, so pick a
    // random corner-or-center instead. Optimality is unaffected.
    if available_moves.len() == CELL_COUNT {
        return rng.choose(&OPENING_MOVES);
    }

    let mut scratch = *board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for &position in available_moves {
        scratch.set(position, bot_mark);
        let score = minimax(
            &mut scratch,
            bot_mark,
            opponent_mark,
            0,
            false,
            i32::MIN,
            i32::MAX,
        );
        scratch.set(position, Mark::Empty);

        // Strict comparison keeps the lowest-index move on ties.
        if score > best_score {
            best_score = score;
            best_move = Some(position);
        }
    }

    best_move
}

/// Depth-scored minimax with alpha-beta pruning. Wins score `10 - depth`
/// and losses `-10 + depth`, so forced wins are taken as early as possible
/// and forced losses delayed as long as possible. The depth counter starts
/// at 0 one ply below the candidate move.
fn minimax(
    board: &mut Board,
    bot_mark: Mark,
    opponent_mark: Mark,
    depth: i32,
    is_maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(winner) = board.winner() {
        return if winner == bot_mark {
            10 - depth
        } else {
            -10 + depth
        };
    }

    if board.is_draw() {
        return 0;
    }

    if is_maximizing {
        let mut best_score = i32::MIN;
        for position in board.available_moves() {
            board.set(position, bot_mark);
            let score = minimax(
                board,
                bot_mark,
                opponent_mark,
                depth + 1,
                false,
                alpha,
                beta,
            );
            board.set(position, Mark::Empty);

            best_score = best_score.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best_score
    } else {
        let mut best_score = i32::MAX;
        for position in board.available_moves() {
            board.set(position, opponent_mark);
            let score = minimax(
                board,
                bot_mark,
                opponent_mark,
                depth + 1,
                true,
                alpha,
                beta,
            );
            board.set(position, Mark::Empty);

            best_score = best_score.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best_score
    }
}
