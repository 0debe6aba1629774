#![cfg(feature = "std")]

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::core::{Coordinate, Grid, GridError, ShotOutcome};
use crate::input::parse_target;
use crate::ui::{legend, render};

use super::Combatant;

/// Human side: shows both grids and reads targets line by line.
pub struct HumanCombatant<R, W> {
    input: R,
    output: W,
}

impl HumanCombatant<StdinLock<'static>, Stdout> {
    /// Combatant bound to the process terminal.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanCombatant<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the combatant, returning everything written so far.
    pub fn into_output(self) -> W {
        self.output
    }

    fn show_grids(&mut self, own: &Grid, opponent: &Grid) -> io::Result<()> {
        writeln!(self.output, "\nOpponent grid:")?;
        write!(self.output, "{}", render(opponent))?;
        writeln!(self.output, "{}", legend(opponent.reveals()))?;
        writeln!(self.output, "\nYour grid:")?;
        write!(self.output, "{}", render(own))?;
        writeln!(self.output, "{}", legend(own.reveals()))
    }
}

impl<R: BufRead, W: Write> Combatant for HumanCombatant<R, W> {
    fn name(&self) -> &str {
        "player"
    }

    fn choose_target(
        &mut self,
        _rng: &mut SmallRng,
        own: &Grid,
        opponent: &Grid,
    ) -> anyhow::Result<Coordinate> {
        self.show_grids(own, opponent)?;
        loop {
            write!(self.output, "\nEnter target (e.g. A1, C4): ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(anyhow::anyhow!("input closed"));
            }
            match parse_target(&line) {
                Ok(c) if opponent.is_resolved(c) => {
                    writeln!(self.output, "✗ You already fired at {}! Choose another target.", c)?;
                }
                Ok(c) => return Ok(c),
                Err(e) => {
                    writeln!(self.output, "✗ Invalid target: {}", e)?;
                }
            }
        }
    }

    fn observe(&mut self, target: Coordinate, outcome: &ShotOutcome, opponent: &Grid) {
        let _ = match outcome {
            ShotOutcome::Hit => writeln!(self.output, "\nHIT at {}! Fire again.", target),
            ShotOutcome::Sunk(v) if opponent.live_vessel_count() == 0 => writeln!(
                self.output,
                "\nSUNK! Your shot at {} destroyed the last enemy vessel (length {}).",
                target,
                v.length()
            ),
            ShotOutcome::Sunk(v) => writeln!(
                self.output,
                "\nSUNK! Your shot at {} destroyed a vessel of length {}. Fire again.",
                target,
                v.length()
            ),
            ShotOutcome::Miss => writeln!(self.output, "\nMiss at {}.", target),
        };
    }

    fn rejected(&mut self, target: Coordinate, err: &GridError) {
        let _ = writeln!(self.output, "✗ {} ({}), fire again.", err, target);
    }
}
