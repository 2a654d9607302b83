use common::games::tictactoe::{Board, Difficulty, Mark, WinningLine};
use crossterm::{cursor, execute, terminal};
use std::io::{self, Write};

const X_GRAPHIC: [&str; 3] = [r" \ / ", r"  X  ", r" / \ "];
const O_GRAPHIC: [&str; 3] = [r" /-\ ", r" | | ", r" \-/ "];
const EMPTY_GRAPHIC: [&str; 3] = ["     ", "     ", "     "];

const FRAME_WIDTH: usize = 23;

pub fn render(board: &Board, difficulty: Difficulty, human_mark: Mark) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    writeln!(stdout, "+{}+", "-".repeat(FRAME_WIDTH))?;
    writeln!(stdout, "|{:^width$}|", "T I C - T A C - T O E", width = FRAME_WIDTH)?;
    writeln!(stdout, "+{}+", "-".repeat(FRAME_WIDTH))?;

    for row in 0..3 {
        let mut lines = [String::new(), String::new(), String::new()];
        for col in 0..3 {
            let cell_index = row * 3 + col;
            let mark = board.cells()[cell_index];
            let graphic = match mark {
                Mark::X => X_GRAPHIC,
                Mark::O => O_GRAPHIC,
                Mark::Empty => EMPTY_GRAPHIC,
            };

            for (i, line) in lines.iter_mut().enumerate() {
                // Empty cells carry their one-based number on the middle
                // line so the player can pick them.
                let segment = if mark == Mark::Empty && i == 1 {
                    format!("  {}  ", cell_index + 1)
                } else {
                    graphic[i].to_string()
                };
                line.push_str(&segment);
                if col < 2 {
                    line.push_str(" | ");
                }
            }
        }
        for line in &lines {
            writeln!(stdout, "  {}", line)?;
        }
        if row < 2 {
            writeln!(stdout, " {}", "-".repeat(FRAME_WIDTH))?;
        }
    }
    writeln!(stdout)?;

    writeln!(
        stdout,
        "Difficulty level: {}  |  You are '{}'",
        difficulty.level(),
        human_mark.symbol()
    )?;
    stdout.flush()
}

pub fn announce_win(line: &WinningLine, human_mark: Mark) {
    if line.mark == human_mark {
        println!("You win! ({})", describe_line(line));
    } else {
        println!("The computer wins! ({})", describe_line(line));
    }
}

pub fn announce_draw() {
    println!("It's a draw!");
}

fn describe_line(line: &WinningLine) -> String {
    let cells: Vec<String> = line.cells.iter().map(|c| (c + 1).to_string()).collect();
    format!("{}-{}-{}", cells[0], cells[1], cells[2])
}
