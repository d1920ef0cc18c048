use std::io::{self, BufRead, BufReader, Write};

use anyhow::bail;
use rand::rngs::SmallRng;

use crate::{
    ai,
    board::Board,
    common::{BoardError, Coord, GuessResult},
    config::SHIPS,
    coord::{format_coord, parse_coord},
    player::Player,
    ship::Direction,
    ui::render_board,
};

/// Interactive player reading commands line by line.
pub struct CliPlayer {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl CliPlayer {
    /// Player on the process's stdin and stdout.
    pub fn new() -> Self {
        Self::with_io(BufReader::new(io::stdin()), io::stdout())
    }

    /// Player reading from `input` and writing prompts to `output`.
    pub fn with_io(input: impl BufRead + 'static, output: impl Write + 'static) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    /// Print `text` and read one trimmed line. End of input is an error.
    fn prompt(&mut self, text: &str) -> anyhow::Result<String> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed");
        }
        Ok(line.trim().to_string())
    }

    fn show(&mut self, board: &Board) -> anyhow::Result<()> {
        write!(self.output, "{}", render_board(board))?;
        Ok(())
    }

    /// Ask for a start cell and orientation until the ship is placed.
    fn place_one(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        name: &str,
        length: usize,
    ) -> anyhow::Result<()> {
        'start: loop {
            self.show(board)?;
            let line = self.prompt(&format!(
                "Place the {} (length {}), or press enter to place it randomly:",
                name, length
            ))?;
            if line.is_empty() {
                let (start, dir) = ai::random_placement(board, rng, length)?;
                board.commit_placement(start, dir, length)?;
                return Ok(());
            }
            let start = match parse_coord(&line) {
                Ok(start) => start,
                Err(e) => {
                    writeln!(self.output, "Input not accepted: {}", e)?;
                    continue;
                }
            };
            let dirs = match board.find_legitimate_directions(start, length) {
                Ok(dirs) => dirs,
                Err(e) => {
                    writeln!(self.output, "Cannot place the {} at {}: {}", name, line, e)?;
                    continue;
                }
            };
            let choices: Vec<String> = dirs.iter().map(|d| d.letter().to_string()).collect();
            loop {
                board.preview_directions(start, &dirs, length)?;
                self.show(board)?;
                let line = self.prompt(&format!(
                    "Choose the orientation: [N]orth, [E]ast, [S]outh or [W]est ({}), or 'back':",
                    choices.join(", ")
                ))?;
                if line.eq_ignore_ascii_case("back") {
                    board.clear_preview();
                    continue 'start;
                }
                let dir = match line.parse::<Direction>() {
                    Ok(dir) => dir,
                    Err(e) => {
                        writeln!(self.output, "{}", e)?;
                        continue;
                    }
                };
                match board.commit_placement(start, dir, length) {
                    Ok(()) => return Ok(()),
                    Err(BoardError::InvalidDirection) => {
                        writeln!(self.output, "{} is not one of the possible directions", dir)?;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for CliPlayer {
    fn place_ships(&mut self, rng: &mut SmallRng, board: &mut Board) -> anyhow::Result<()> {
        writeln!(
            self.output,
            "Place your ships: enter a start square (e.g. A2), then an orientation (N, E, S, W)."
        )?;
        for def in SHIPS.iter() {
            self.place_one(rng, board, def.name(), def.length())?;
        }
        self.show(board)?;
        Ok(())
    }

    fn select_target(&mut self, _rng: &mut SmallRng, board: &mut Board) -> anyhow::Result<Coord> {
        loop {
            let line = self.prompt("Choose your target (e.g. C5):")?;
            match parse_coord(&line) {
                Ok(coord) => return Ok(coord),
                Err(e) => {
                    writeln!(self.output, "Input not accepted: {}", e)?;
                    self.show(board)?;
                }
            }
        }
    }

    fn handle_guess_result(&mut self, coord: Coord, result: GuessResult) {
        let _ = writeln!(self.output, "You fire at {} -> {:?}", format_coord(coord), result);
    }

    fn handle_rejected_target(&mut self, coord: Coord, err: BoardError) {
        let _ = writeln!(self.output, "{}: {}", format_coord(coord), err);
    }

    fn handle_opponent_guess(&mut self, coord: Coord, result: GuessResult) {
        let outcome = match result {
            GuessResult::Hit => "and strikes one of your ships!",
            GuessResult::Miss => "and hits nothing but water.",
        };
        let _ = writeln!(
            self.output,
            "The computer aims at {}... {}",
            format_coord(coord),
            outcome
        );
    }
}
