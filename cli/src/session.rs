use crate::config::CliConfig;
use crate::input::{self, PlayerAction};
use crate::ui;
use common::games::tictactoe::{BotPlayer, Difficulty, GameState, GameStatus, Mark};
use common::games::SessionRng;
use common::log;
use std::io::{self, BufRead};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    HumanWin,
    BotWin,
    Draw,
    Quit,
}

/// Master loop: plays rounds, adjusts difficulty with the results, and
/// alternates who starts until the player stops.
pub fn run_session(config: &CliConfig, rng: &mut SessionRng) -> io::Result<()> {
    let mut level = config.start_level;
    let mut human_starts = config.human_starts_first;

    loop {
        let difficulty = Difficulty::from_level(level).unwrap_or(Difficulty::Easy);
        let outcome = play_round(difficulty, human_starts, config.bot_thinking_delay_ms, rng)?;
        log!("round over: {:?} at level {}", outcome, level);

        match outcome {
            RoundOutcome::Quit => {
                println!("Thanks for playing!");
                return Ok(());
            }
            RoundOutcome::HumanWin | RoundOutcome::Draw => {
                if level < 3 {
                    level += 1;
                    println!("You're getting better! Increasing difficulty.");
                    thread::sleep(Duration::from_millis(1500));
                }
            }
            RoundOutcome::BotWin => {
                if level > 1 {
                    level -= 1;
                    println!("The computer was too strong! Decreasing difficulty.");
                    thread::sleep(Duration::from_millis(1500));
                }
            }
        }

        human_starts = !human_starts;

        println!();
        println!("Play again? (y/n)");
        if !read_yes()? {
            println!("Thanks for playing!");
            return Ok(());
        }
    }
}

fn play_round(
    difficulty: Difficulty,
    human_starts: bool,
    thinking_delay_ms: u64,
    rng: &mut SessionRng,
) -> io::Result<RoundOutcome> {
    let mut state = GameState::new();
    let (human_mark, bot_mark) = if human_starts {
        (Mark::X, Mark::O)
    } else {
        (Mark::O, Mark::X)
    };
    let bot = BotPlayer::new(difficulty, bot_mark);

    while state.status() == GameStatus::InProgress {
        ui::render(state.board(), difficulty, human_mark)?;

        if state.current_mark() == human_mark {
            match input::prompt_human_move(state.board())? {
                PlayerAction::Quit => return Ok(RoundOutcome::Quit),
                PlayerAction::Move(position) => commit_move(&mut state, position)?,
            }
        } else {
            println!("Computer is thinking...");
            thread::sleep(Duration::from_millis(thinking_delay_ms));
            if let Some(position) = bot.choose_move(state.board(), rng) {
                log!("bot plays {} at level {}", position + 1, difficulty.level());
                commit_move(&mut state, position)?;
            }
        }
    }

    ui::render(state.board(), difficulty, human_mark)?;

    match state.status() {
        GameStatus::Draw => {
            ui::announce_draw();
            Ok(RoundOutcome::Draw)
        }
        _ => {
            let line = state
                .board()
                .winning_line()
                .ok_or_else(|| io::Error::other("terminal state without winning line"))?;
            ui::announce_win(&line, human_mark);
            if line.mark == human_mark {
                Ok(RoundOutcome::HumanWin)
            } else {
                Ok(RoundOutcome::BotWin)
            }
        }
    }
}

/// Both callers pass moves that are legal by construction, so a failure
/// here is a bug worth stopping on rather than looping past.
fn commit_move(state: &mut GameState, position: usize) -> io::Result<()> {
    state.place_mark(position).map_err(io::Error::other)
}

fn read_yes() -> io::Result<bool> {
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(line.trim().eq_ignore_ascii_case("y"))
}
