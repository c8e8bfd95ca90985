//! Line-oriented terminal console.

use super::render;
use super::{Console, PlayError, Seat};
use crate::games::tictactoe::{
    Board, COMPUTER_NAME, GameMode, Identity, Mark, MarkOrder, Outcome, Position, Roster,
};
use std::fmt::Display;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Console over any line reader and writer.
///
/// `TerminalConsole::stdio` talks to the real terminal; tests feed it a
/// scripted `&[u8]` and capture output in a `Vec<u8>`.
#[derive(Debug)]
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl TerminalConsole<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Console on stdin/stdout.
    pub fn stdio(color: bool) -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout(), color)
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    /// Gives back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: impl Display) -> Result<(), PlayError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn read_answer(&mut self, prompt: &str) -> Result<String, PlayError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PlayError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Prompts until `parse` accepts the answer, printing its complaint
    /// after every rejection.
    fn ask<T, E: Display>(
        &mut self,
        prompt: &str,
        mut parse: impl FnMut(&str) -> Result<T, E>,
    ) -> Result<T, PlayError> {
        loop {
            let answer = self.read_answer(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(complaint) => {
                    debug!(%answer, %complaint, "Rejected input");
                    self.say(complaint)?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn banner(&mut self) -> Result<(), PlayError> {
        let title = render::banner(self.color);
        self.say(title)
    }

    #[instrument(skip(self))]
    fn request_mode(&mut self) -> Result<GameMode, PlayError> {
        self.say("GAME MODE\n1. Player vs Player\n2. Player vs Computer")?;
        self.ask("Pick an option [1 - 2]: ", |answer| {
            answer
                .parse::<GameMode>()
                .map_err(|_| "Invalid selection. Please choose 1 or 2.")
        })
    }

    #[instrument(skip(self))]
    fn request_identity(&mut self, seat: Seat) -> Result<Identity, PlayError> {
        let prompt = match seat {
            Seat::Solo => "Enter your name: ".to_string(),
            other => format!("Enter name for {}: ", other),
        };
        self.ask(&prompt, |answer| {
            Identity::human(answer).map_err(|e| format!("{}.", e))
        })
    }

    #[instrument(skip(self))]
    fn request_mark_assignment(&mut self) -> Result<MarkOrder, PlayError> {
        self.say("\nSELECT THE 'X' PLAYER\n1. First\n2. Second\n3. Random")?;
        self.ask("Pick an option [1 - 3]: ", |answer| {
            answer
                .parse::<MarkOrder>()
                .map_err(|_| "Invalid selection. Please choose 1, 2 or 3.")
        })
    }

    fn announce_marks(&mut self, roster: &Roster) -> Result<(), PlayError> {
        let text = format!(
            "\n{} will be {}.\n{} will be {}.\n",
            roster.x(),
            render::glyph(Mark::X, self.color),
            roster.o(),
            render::glyph(Mark::O, self.color),
        );
        self.say(text)
    }

    fn render(&mut self, board: &Board) -> Result<(), PlayError> {
        let grid = render::grid(board, self.color);
        write!(self.output, "{}", grid)?;
        Ok(())
    }

    #[instrument(skip(self, board))]
    fn request_move(&mut self, name: &str, mark: Mark, board: &Board) -> Result<usize, PlayError> {
        let prompt = format!(
            "{}'s turn ({}). Choose a position (1-9): ",
            name,
            render::glyph(mark, self.color)
        );
        self.ask(&prompt, |answer| {
            if answer.parse::<i64>().is_err() {
                return Err("Invalid input, enter a number between 1 and 9.");
            }
            match Position::parse_number(answer) {
                Some(position) if board.is_empty(position.to_index()) => Ok(position.to_index()),
                _ => Err("Invalid move, try again."),
            }
        })
    }

    fn computer_thinking(&mut self, name: &str, mark: Mark) -> Result<(), PlayError> {
        let text = format!(
            "{}'s turn ({}).\n{} is thinking... 💭",
            name,
            render::glyph(mark, self.color),
            COMPUTER_NAME
        );
        self.say(text)
    }

    fn computer_moved(&mut self, index: usize) -> Result<(), PlayError> {
        self.say(format!("{} chose position {}", COMPUTER_NAME, index + 1))
    }

    fn announce(&mut self, outcome: Outcome, mover: &Identity) -> Result<(), PlayError> {
        match outcome {
            Outcome::Win(mark) => {
                let text = format!("\n{}({}) wins!", mover, render::glyph(mark, self.color));
                self.say(text)
            }
            Outcome::Draw => self.say("\nWell played!, the match ended as a draw."),
            Outcome::InProgress => Ok(()),
        }
    }

    #[instrument(skip(self))]
    fn ask_replay(&mut self) -> Result<bool, PlayError> {
        self.ask("\nDo you want to play again? (y/n): ", |answer| {
            match answer.to_lowercase().as_str() {
                "y" | "yes" => Ok(true),
                "n" | "no" => Ok(false),
                _ => Err("Invalid input. Please type 'y' or 'n'."),
            }
        })
    }

    fn farewell(&mut self) -> Result<(), PlayError> {
        self.say("Thanks for playing!")
    }
}
