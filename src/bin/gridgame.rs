use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gridgame::game::{Cell, Feedback, FinishedState, GameState, GridGameModel, Variant};

#[derive(Parser)]
#[command(name = "gridgame")]
#[command(about = "Tic-tac-toe style games on an N x N grid for any number of players")]
struct Cli {
    /// Number of rows and columns
    #[arg(short = 'n', long, default_value = "3")]
    size: usize,
    /// Number of players
    #[arg(short = 'p', long, alias = "player_count", default_value = "2")]
    player_count: usize,
    #[arg(long, value_enum)]
    variant: Variant,
    /// Comma separated player symbols, one per player
    #[arg(short, long, value_delimiter = ',')]
    symbols: Vec<String>,
}

fn parse_cell(line: &str) -> Option<Cell> {
    let mut coords = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::parse::<i32>);
    let row = coords.next()?.ok()?;
    let col = coords.next()?.ok()?;
    if coords.next().is_some() {
        return None;
    }
    Some(Cell::new(row, col))
}

fn prompt(model: &GridGameModel<String>, out: &mut impl Write) -> io::Result<()> {
    let player = model.current_player();
    let symbol = model
        .get_symbol_choices(player)
        .map(|choices| choices.join("/"))
        .unwrap_or_default();
    write!(
        out,
        "{}player {} ({}), enter row and column: ",
        model.field(),
        player,
        symbol
    )?;
    out.flush()
}

/// Plays moves read from `input` line by line until the game finishes or the input ends.
fn run(
    model: &mut GridGameModel<String>,
    input: impl BufRead,
    mut out: impl Write,
) -> io::Result<()> {
    prompt(model, &mut out)?;
    for line in input.lines() {
        let line = line?;
        let Some(cell) = parse_cell(&line) else {
            writeln!(out, "expected two numbers, e.g. \"2 3\"")?;
            prompt(model, &mut out)?;
            continue;
        };

        let player = model.current_player();
        let symbol = model
            .get_symbol_choices(player)
            .ok()
            .and_then(|choices| choices.into_iter().next());
        let Some(symbol) = symbol else {
            break;
        };
        let feedback = model.place_symbol(symbol, cell);
        if feedback != Feedback::Valid {
            writeln!(out, "{}", feedback)?;
        }

        if let GameState::Finished(result) = model.state() {
            write!(out, "{}", model.field())?;
            match result {
                FinishedState::Win(winner) => writeln!(out, "player {} wins", winner)?,
                FinishedState::Draw => writeln!(out, "draw")?,
            }
            info!(?result, moves = model.move_history().len(), "game finished");
            return Ok(());
        }
        prompt(model, &mut out)?;
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut model = cli
        .variant
        .build_model(cli.size, cli.symbols, cli.player_count)?;
    info!(variant = %cli.variant, size = cli.size, "game started");

    run(&mut model, io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
