//! Play command - interactive game against the minimax engine

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;

use crate::{
    Error,
    cli::{config::CommonConfig, output},
    session::{Opening, Session, SessionConfig, Status},
    tictactoe::{GameTree, Player, new_game_tree},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the computer")]
pub struct PlayArgs {
    /// Opening move when the computer plays X (`random` or `best`)
    #[arg(long, default_value = "random")]
    pub opening: String,

    /// Mark the computer plays (`x` moves first)
    #[arg(long, default_value = "x")]
    pub computer: String,

    /// Play a single game and exit instead of offering a rematch
    #[arg(long)]
    pub once: bool,
}

pub fn execute(args: PlayArgs, common: &CommonConfig) -> Result<()> {
    let opening: Opening = args.opening.parse()?;
    let computer: Player = args.computer.parse()?;

    let spinner = output::create_spinner("Building and scoring the game tree...", common.progress)?;
    let (tree, value) = new_game_tree();
    spinner.finish_and_clear();
    info!(nodes = tree.len(), value, "engine ready");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let mut game = 0u64;
    loop {
        let mut config = SessionConfig::new(computer).with_opening(opening);
        if let Some(seed) = common.seed {
            config = config.with_seed(seed.wrapping_add(game));
        }

        run_game(&tree, config, &mut input, &mut out)?;
        game += 1;

        if args.once || !ask_yes_no(&mut input, &mut out, "Play again? [y/N] ")? {
            return Ok(());
        }
    }
}

/// Play one game, reading the human's moves from `input`.
///
/// Unreadable, out-of-range and occupied moves are reported and asked for
/// again. A board that cannot be found in the tree aborts the game.
pub fn run_game(
    tree: &GameTree,
    config: SessionConfig,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Status> {
    let human = config.human();
    let mut session = Session::new(tree, config);
    writeln!(out, "You play {human}. Enter moves as `row col` (0-2).")?;
    output::write_board(out, session.board())?;

    let mut status = session.status();
    while !status.is_over() {
        write!(out, "Your move: ")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            bail!("input closed before the game finished");
        };

        let Some((row, col)) = parse_move(&line) else {
            writeln!(out, "Please enter two numbers, e.g. `1 2`.")?;
            continue;
        };

        status = match session.play_human(row, col) {
            Ok(status) => status,
            Err(e @ (Error::PositionOutOfBounds { .. } | Error::CellOccupied { .. })) => {
                writeln!(out, "{e}. Try again.")?;
                continue;
            }
            Err(e) => return Err(e).context("move could not be matched to the game tree"),
        };

        output::write_board(out, session.board())?;
    }

    if let Some(message) = output::status_message(status) {
        writeln!(out, "{message}")?;
    }
    Ok(status)
}

/// Parse `row col`, also accepting commas as separators
pub fn parse_move(line: &str) -> Option<(usize, usize)> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn ask_yes_no(input: &mut impl BufRead, out: &mut impl Write, prompt: &str) -> Result<bool> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let answer = read_line(input)?.unwrap_or_default();
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
