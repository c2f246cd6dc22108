//! Play command - Interactive game against the engine on stdin/stdout

use std::io::{self, BufRead, Write};

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::{
    cli::config::{CommonArgs, save_table},
    engine::DecisionEngine,
    hexapawn::{Game, Side, VictoryReason},
    types::Relocation,
};

#[derive(Parser, Debug)]
#[command(about = "Play against the engine (you are H, moving first)")]
pub struct PlayArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Games won and lost by the human during one session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub human_wins: usize,
    pub engine_wins: usize,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut engine = args.common.engine()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = run_session(&mut engine, stdin.lock(), stdout.lock())?;

    println!(
        "\nYou won {} game(s), the engine won {}.",
        summary.human_wins, summary.engine_wins
    );

    if let Some(path) = &args.common.table {
        save_table(engine.table(), path)?;
        println!("Strategy table saved to {}", path.display());
    }
    Ok(())
}

/// Play games until the input runs out or the player declines a rematch.
pub fn run_session<R: BufRead, W: Write>(
    engine: &mut DecisionEngine,
    mut input: R,
    mut output: W,
) -> Result<SessionSummary> {
    let mut summary = SessionSummary::default();

    loop {
        engine.reset();
        let mut game = Game::new();

        while !game.is_over() {
            match game.to_move() {
                Side::H => {
                    write!(output, "\n{}", game.board())?;
                    let Some(relocation) = prompt_move(&game, &mut input, &mut output)? else {
                        writeln!(output, "\nGoodbye.")?;
                        return Ok(summary);
                    };
                    game.play(relocation)?;
                }
                Side::A => {
                    let decision = game.play_engine(engine)?;
                    match (decision.relocation, decision.captured) {
                        (Some(relocation), Some(captured)) => {
                            writeln!(output, "Engine plays {relocation}, taking {captured}.")?
                        }
                        (Some(relocation), None) => writeln!(output, "Engine plays {relocation}.")?,
                        (None, _) => writeln!(output, "Engine passes.")?,
                    }
                }
            }
        }

        write!(output, "\n{}", game.board())?;
        if let Some(outcome) = game.outcome() {
            let how = match outcome.reason {
                VictoryReason::Elimination => "by taking every pawn",
                VictoryReason::Breakthrough => "by reaching the far row",
                VictoryReason::Stalemate => "because nobody can move",
            };
            match outcome.winner {
                Side::H => {
                    summary.human_wins += 1;
                    writeln!(output, "You win {how}!")?;
                    if let Some(pruned) = engine.record_loss() {
                        writeln!(output, "The engine will never play {pruned} there again.")?;
                    }
                }
                Side::A => {
                    summary.engine_wins += 1;
                    writeln!(output, "The engine wins {how}.")?;
                }
            }
        }

        write!(output, "Play again? [y/N] ")?;
        output.flush()?;
        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 || !answer.trim().eq_ignore_ascii_case("y") {
            return Ok(summary);
        }
    }
}

/// Ask until the player enters a legal move; `None` at end of input or `q`.
fn prompt_move<R: BufRead, W: Write>(
    game: &Game,
    input: &mut R,
    output: &mut W,
) -> Result<Option<Relocation>> {
    loop {
        write!(output, "Your move (FROM TO, q to quit): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        match parse_move(line) {
            Ok(relocation) if game.legal_moves().contains(&relocation) => {
                return Ok(Some(relocation));
            }
            Ok(relocation) => writeln!(output, "{relocation} is not a legal move.")?,
            Err(err) => writeln!(output, "{err}")?,
        }
    }
}

/// Parse `"0 3"`, `"0,3"`, `"0-3"` or `"03"` into a relocation.
pub fn parse_move(text: &str) -> Result<Relocation> {
    let digits: Vec<usize> = text
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, ',' | '-' | '>'))
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as usize)
                .ok_or_else(|| anyhow!("'{c}' is not a cell number"))
        })
        .collect::<Result<_>>()?;

    match digits.as_slice() {
        [from, to] => Ok(Relocation::new(*from, *to)?),
        _ => Err(anyhow!("enter two cells, e.g. '0 3'")),
    }
}
