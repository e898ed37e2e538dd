#![cfg(feature = "std")]

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use std::string::String;

use crate::cli::interface::render_pair;
use crate::engine::{
    common::{ShotError, ShotResult},
    coordinate::Coordinate,
};

use super::{Player, PlayerError, TurnView};

/// Interactive player reading targets as `"<row> <col>"` lines, one-based.
///
/// Generic over its input and output so that games can be scripted.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Separator, both boards side by side, then whose move it is.
    fn announce_turn(&mut self, view: &TurnView<'_>, banner: &str) -> Result<(), PlayerError> {
        writeln!(self.output, "{}", "-".repeat(88))?;
        write!(
            self.output,
            "{}",
            render_pair("Your board:", view.own, "Opponent board:", view.opponent)
        )?;
        writeln!(self.output, "{}", banner)?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn produce_target(&mut self, _view: &TurnView<'_>) -> Result<Coordinate, PlayerError> {
        loop {
            write!(self.output, "Your move: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Err(PlayerError::InputClosed);
            }
            match Coordinate::parse_one_based(&line) {
                Ok(target) => return Ok(target),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn handle_turn_start(&mut self, view: &TurnView<'_>) -> Result<(), PlayerError> {
        self.announce_turn(view, "Your turn")
    }

    fn handle_opponent_turn_start(&mut self, view: &TurnView<'_>) -> Result<(), PlayerError> {
        self.announce_turn(view, "Opponent's turn")
    }

    fn handle_rejected_shot(
        &mut self,
        _target: Coordinate,
        error: ShotError,
    ) -> Result<(), PlayerError> {
        writeln!(self.output, "{}", error)?;
        Ok(())
    }

    fn handle_shot_result(
        &mut self,
        target: Coordinate,
        result: ShotResult,
    ) -> Result<(), PlayerError> {
        writeln!(self.output, "You fired at {}: {}", target, result)?;
        Ok(())
    }

    fn handle_opponent_shot(
        &mut self,
        target: Coordinate,
        result: ShotResult,
    ) -> Result<(), PlayerError> {
        writeln!(self.output, "Opponent fired at {}: {}", target, result)?;
        Ok(())
    }
}
